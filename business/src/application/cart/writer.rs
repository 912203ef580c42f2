use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::domain::cart::model::Cart;
use crate::domain::cart::observer::PersistenceFailureReporter;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;

use super::policy::PersistencePolicy;

pub(crate) enum WriteCommand {
    Save(Arc<Cart>),
    /// Acknowledged once every command queued before it has been handled.
    Flush(oneshot::Sender<()>),
}

/// Background task that writes cart snapshots in the order they were queued.
///
/// Snapshots are full state, so when several are waiting only the newest is
/// written.
pub(crate) struct CartWriter {
    pub repository: Arc<dyn CartRepository>,
    pub reporter: Arc<dyn PersistenceFailureReporter>,
    pub logger: Arc<dyn Logger>,
    pub policy: PersistencePolicy,
}

impl CartWriter {
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn(self) -> mpsc::UnboundedSender<WriteCommand> {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(self.run(receiver));
        sender
    }

    async fn run(self, mut receiver: mpsc::UnboundedReceiver<WriteCommand>) {
        while let Some(command) = receiver.recv().await {
            match command {
                WriteCommand::Flush(done) => {
                    let _ = done.send(());
                }
                WriteCommand::Save(snapshot) => {
                    let (latest, flush) = self.coalesce(snapshot, &mut receiver);
                    self.write(&latest).await;
                    if let Some(done) = flush {
                        let _ = done.send(());
                    }
                }
            }
        }
        self.logger.debug("Cart writer stopped");
    }

    /// Drains queued saves up to the next flush and keeps the newest one.
    fn coalesce(
        &self,
        mut latest: Arc<Cart>,
        receiver: &mut mpsc::UnboundedReceiver<WriteCommand>,
    ) -> (Arc<Cart>, Option<oneshot::Sender<()>>) {
        let mut skipped = 0usize;
        while let Ok(command) = receiver.try_recv() {
            match command {
                WriteCommand::Save(newer) => {
                    latest = newer;
                    skipped += 1;
                }
                WriteCommand::Flush(done) => {
                    if skipped > 0 {
                        self.logger
                            .debug(&format!("Skipped {} superseded cart snapshots", skipped));
                    }
                    return (latest, Some(done));
                }
            }
        }
        if skipped > 0 {
            self.logger
                .debug(&format!("Skipped {} superseded cart snapshots", skipped));
        }
        (latest, None)
    }

    async fn write(&self, cart: &Cart) {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;
        loop {
            match self.repository.save(cart).await {
                Ok(()) => {
                    self.logger.debug(&format!(
                        "Cart saved with {} entries",
                        cart.badge_count()
                    ));
                    return;
                }
                Err(error) if attempt < max_attempts => {
                    self.logger.warn(&format!(
                        "Cart save failed ({}), attempt {}/{}",
                        error, attempt, max_attempts
                    ));
                    tokio::time::sleep(self.policy.backoff_after(attempt)).await;
                    attempt += 1;
                }
                Err(error) => {
                    self.logger.error(&format!(
                        "Cart save abandoned after {} attempts: {}",
                        max_attempts, error
                    ));
                    self.reporter.report(&error, cart);
                    return;
                }
            }
        }
    }
}
