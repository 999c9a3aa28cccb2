use crate::domain::model::Landmark;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Read access to the persisted landmark collection.
///
/// Every query returns all currently committed matching rows in store order.
/// Any failure to answer must be reported as `LocatorError::StoreUnavailable`.
#[async_trait]
pub trait LandmarkStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Landmark>>;
    async fn find_by_building_code(&self, building_code: &str) -> Result<Vec<Landmark>>;
    async fn find_by_digits(&self, digits: &str) -> Result<Vec<Landmark>>;
}

#[async_trait]
impl<T: LandmarkStore + ?Sized> LandmarkStore for Arc<T> {
    async fn all(&self) -> Result<Vec<Landmark>> {
        (**self).all().await
    }

    async fn find_by_building_code(&self, building_code: &str) -> Result<Vec<Landmark>> {
        (**self).find_by_building_code(building_code).await
    }

    async fn find_by_digits(&self, digits: &str) -> Result<Vec<Landmark>> {
        (**self).find_by_digits(digits).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> SocketAddr;
    fn store_path(&self) -> Option<&str>;
    fn store_timeout(&self) -> Duration;
    fn static_dir(&self) -> Option<&str>;
}
