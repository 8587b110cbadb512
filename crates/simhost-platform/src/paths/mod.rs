mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, config_file, data_dir, theme_cache_dir};
