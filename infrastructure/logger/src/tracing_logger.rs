use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards bootstrap diagnostics to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "bootstrap", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "bootstrap", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "bootstrap", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "bootstrap", "{}", message);
    }
}
