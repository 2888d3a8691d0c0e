//! Long-polling driver: pulls updates from an [`UpdateSource`] and feeds the dispatcher.

use std::future::Future;
use std::time::Duration;

use crate::config::PollingConfig;
use crate::dispatch::Dispatcher;
use crate::error::TransportError;
use crate::transport::UpdateSource;

pub struct Poller {
    updates: Box<dyn UpdateSource>,
    dispatcher: Dispatcher,
    interval: Duration,
    long_poll_timeout: Duration,
    offset: Option<i64>,
}

impl Poller {
    pub fn new(updates: Box<dyn UpdateSource>, dispatcher: Dispatcher, cfg: &PollingConfig) -> Self {
        Self {
            updates,
            dispatcher,
            interval: Duration::from_millis(cfg.interval_ms),
            long_poll_timeout: Duration::from_secs(cfg.long_poll_timeout_secs),
            offset: None,
        }
    }

    /// Next `update_id` the source will be asked for.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// One poll round. Handler failures are logged, only poll failures are returned.
    pub async fn poll_once(&mut self) -> Result<usize, TransportError> {
        let batch = self
            .updates
            .poll_updates(self.offset, self.long_poll_timeout)
            .await?;
        let count = batch.len();

        for update in batch {
            let next = update.update_id + 1;
            self.offset = Some(self.offset.map_or(next, |o| o.max(next)));

            if let Err(e) = self.dispatcher.dispatch(&update).await {
                tracing::error!(
                    target: "reelbot.polling",
                    update_id = update.update_id,
                    chat_id = ?update.chat_id,
                    error = %e,
                    "handler failed"
                );
            }
        }

        Ok(count)
    }

    /// Polls until `shutdown` resolves.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        tracing::info!(
            target: "reelbot.polling",
            interval_ms = self.interval.as_millis() as u64,
            catalog_size = self.dispatcher.catalog().len(),
            "polling for updates"
        );

        loop {
            let result = tokio::select! {
                _ = &mut shutdown => break,
                res = self.poll_once() => res,
            };

            let wait = match result {
                Ok(_) => self.interval,
                Err(e) => {
                    let wait = e
                        .retry_after()
                        .map(Duration::from_secs)
                        .map_or(self.interval, |r| r.max(self.interval));
                    tracing::warn!(
                        target: "reelbot.polling",
                        error = %e,
                        retry_in_ms = wait.as_millis() as u64,
                        "polling for updates failed"
                    );
                    wait
                }
            };

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(wait) => {}
            }
        }

        tracing::info!(target: "reelbot.polling", offset = ?self.offset, "polling stopped");
    }
}
