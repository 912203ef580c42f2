use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`. Every event carries the same target so
/// cart activity can be filtered with `RUST_LOG=storefront=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront", "{}", message);
    }
}
