//! Periodic compatibility polling

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::version::checker::{CheckResult, CompatStatus, check_compatibility};
use crate::version::provider::InfoProvider;
use crate::version::range::RangeConstraint;

/// Polls an info provider and reports whether its version is supported.
///
/// Ticks never overlap: the first tick fires immediately, and a fetch that
/// outlasts the interval pushes the next tick back instead of queueing a
/// burst of catch-up ticks.
pub struct Poller<P: InfoProvider> {
    provider: P,
    constraint: RangeConstraint,
    interval: Duration,
}

impl<P: InfoProvider> Poller<P> {
    pub fn new(provider: P, constraint: RangeConstraint, interval: Duration) -> Self {
        Self {
            provider,
            constraint,
            interval,
        }
    }

    /// Run a single fetch-evaluate-report tick
    pub async fn poll_once(&self) -> CheckResult {
        let fetched = self.provider.fetch_info().await;
        let result = check_compatibility(fetched, &self.constraint);
        report(&result);
        result
    }

    /// Poll until `cancel` fires. Returns the number of completed ticks.
    ///
    /// Errors from a tick are reported and never end the loop.
    pub async fn run(&self, cancel: CancellationToken) -> u64 {
        info!(
            "Polling {} every {:?} for versions matching {}",
            self.provider.target(),
            self.interval,
            self.constraint
        );

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Cancelled while a poll was in flight");
                    break;
                }
                _ = self.poll_once() => ticks += 1,
            }
        }

        info!("Polling stopped after {} tick(s)", ticks);
        ticks
    }
}

fn report(result: &CheckResult) {
    let status = result.status.as_str();
    match result.status {
        CompatStatus::Compatible => info!(status, "{}", result.message),
        CompatStatus::Incompatible => warn!(status, "{}", result.message),
        CompatStatus::FetchError | CompatStatus::ParseError => {
            error!(status, "{}", result.message)
        }
    }
}
