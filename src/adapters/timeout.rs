use crate::domain::model::Landmark;
use crate::domain::ports::LandmarkStore;
use crate::utils::error::{LocatorError, Result};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Bounds every call on the wrapped store. A call that does not finish in
/// time fails with `StoreUnavailable`; it is never retried.
#[derive(Debug, Clone)]
pub struct TimeoutStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: LandmarkStore> TimeoutStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bounded<T>(&self, operation: &str, call: impl Future<Output = Result<T>> + Send) -> Result<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation, timeout_ms = self.timeout.as_millis() as u64, "Store call timed out");
                Err(LocatorError::store_unavailable(format!(
                    "{} timed out after {:?}",
                    operation, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl<S: LandmarkStore> LandmarkStore for TimeoutStore<S> {
    async fn all(&self) -> Result<Vec<Landmark>> {
        self.bounded("all", self.inner.all()).await
    }

    async fn find_by_building_code(&self, building_code: &str) -> Result<Vec<Landmark>> {
        self.bounded("find_by_building_code", self.inner.find_by_building_code(building_code))
            .await
    }

    async fn find_by_digits(&self, digits: &str) -> Result<Vec<Landmark>> {
        self.bounded("find_by_digits", self.inner.find_by_digits(digits)).await
    }
}
