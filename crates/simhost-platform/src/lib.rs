pub mod paths;

pub use paths::{config_dir, config_file, data_dir, ensure_dirs, theme_cache_dir};
