use env_logger::{Builder, Env};

/// Initialize the global logger.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when verbose.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .init();
}
