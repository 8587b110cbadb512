//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# simhost configuration
# Only override what you want to change -- missing fields use defaults.

[server]
# host = "127.0.0.1"
# port = 8000

[sim_host]
# Directory of a simulator host UI. A host supports themes when it
# contains theme.json. Leave unset to serve the built-in host.
# root = "/path/to/sim-host"

[theme]
# Theme JSON file, or inline JSON such as '{"default": {"": {"font-size": "16px"}}}'
# source = "/path/to/theme.json"
# Generated stylesheets are cached here, keyed by content hash.
# cache_dir = "/path/to/cache"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
