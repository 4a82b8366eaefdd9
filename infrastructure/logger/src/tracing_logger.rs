use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards the business logging port to `tracing`, under a single target so
/// `RUST_LOG=inventory_admin=debug` selects it.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "inventory_admin", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "inventory_admin", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "inventory_admin", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "inventory_admin", "{}", message);
    }
}
