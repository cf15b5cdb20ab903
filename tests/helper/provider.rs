//! Provider test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use version_probe::version::error::FetchError;
use version_probe::version::provider::InfoProvider;
use version_probe::version::types::ServerInfo;

/// Wraps a provider and cancels a token once it has been called `limit` times
pub struct CancelAfter<P> {
    inner: P,
    limit: usize,
    calls: AtomicUsize,
    cancel: CancellationToken,
}

impl<P: InfoProvider> CancelAfter<P> {
    pub fn new(inner: P, limit: usize, cancel: CancellationToken) -> Self {
        Self {
            inner,
            limit,
            calls: AtomicUsize::new(0),
            cancel,
        }
    }
}

#[async_trait]
impl<P: InfoProvider> InfoProvider for CancelAfter<P> {
    fn target(&self) -> String {
        self.inner.target()
    }

    async fn fetch_info(&self) -> Result<ServerInfo, FetchError> {
        let result = self.inner.fetch_info().await;
        if self.calls.fetch_add(1, Ordering::SeqCst) + 1 >= self.limit {
            self.cancel.cancel();
        }
        result
    }
}
