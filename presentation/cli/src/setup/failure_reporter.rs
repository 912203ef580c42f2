use business::domain::cart::model::Cart;
use business::domain::cart::observer::PersistenceFailureReporter;
use business::domain::errors::RepositoryError;

/// Tells the shopper their cart could not be saved. The cart keeps working
/// for the rest of the session.
pub struct ConsoleFailureReporter;

impl PersistenceFailureReporter for ConsoleFailureReporter {
    fn report(&self, error: &RepositoryError, cart: &Cart) {
        eprintln!(
            "Warning: your cart ({} products) could not be saved and may not be there next time ({})",
            cart.badge_count(),
            error
        );
    }
}
