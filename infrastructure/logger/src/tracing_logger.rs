use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log messages to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shop", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shop", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shop", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shop", "{}", message);
    }
}
