//! Logger initialisation shared by the lab binaries

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialise `env_logger`, honouring `RUST_LOG` and falling back to
/// [`DEFAULT_LOG_FILTER`]. Safe to call more than once.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    if env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("logger already initialised");
    }
}
