use crate::core::{CatalogReader, Landmark, LandmarkStore, Resolution, Resolver, Result};
use std::sync::Arc;

/// Cloneable handle over the catalog reader and the resolver.
///
/// Both halves share one store handle. Neither holds mutable state, so clones
/// can serve overlapping requests without locking.
pub struct LocatorService<S: LandmarkStore + ?Sized> {
    catalog: Arc<CatalogReader<Arc<S>>>,
    resolver: Arc<Resolver<Arc<S>>>,
}

impl<S: LandmarkStore> LocatorService<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }
}

impl<S: LandmarkStore + ?Sized> LocatorService<S> {
    /// Builds the service over an already shared store, including trait
    /// objects chosen at runtime.
    pub fn from_shared(store: Arc<S>) -> Self {
        Self {
            catalog: Arc::new(CatalogReader::new(store.clone())),
            resolver: Arc::new(Resolver::new(store)),
        }
    }

    pub async fn list_landmarks(&self) -> Result<Vec<Landmark>> {
        self.catalog.list_landmarks().await
    }

    pub async fn search_landmarks(&self, term: &str) -> Result<Vec<Landmark>> {
        self.catalog.search(term).await
    }

    pub async fn resolve(&self, scanned: Option<&str>) -> Result<Resolution> {
        self.resolver.resolve(scanned).await
    }
}

impl<S: LandmarkStore + ?Sized> Clone for LocatorService<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<S: LandmarkStore + ?Sized> std::fmt::Debug for LocatorService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocatorService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    fn landmark(index: usize) -> Landmark {
        Landmark {
            name: format!("Landmark {}", index),
            description: String::new(),
            latitude: 45.0,
            longitude: 21.0,
            glb_file: format!("models/{}.glb", index),
            building_code: format!("TM-{:05}", index),
            digits: format!("{:05}", index),
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_service() {
        let service = LocatorService::new(MemoryStore::new((0..20).map(landmark).collect()));

        let mut handles = Vec::new();
        for index in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                let code = format!("TM-{:05}", index);
                let misread = format!("SCAN{:05}", index);
                let exact = service.resolve(Some(code.as_str())).await;
                let partial = service.resolve(Some(misread.as_str())).await;
                (index, exact, partial)
            }));
        }

        for handle in handles {
            let (index, exact, partial) = handle.await.unwrap();
            assert_eq!(exact.unwrap().glb_file(), Some(format!("models/{}.glb", index).as_str()));
            assert!(matches!(partial.unwrap(), Resolution::PartialMatch { .. }));
        }

        assert_eq!(service.list_landmarks().await.unwrap().len(), 20);
    }
}
