use crate::core::{Landmark, LandmarkStore, Result};

/// Read side of the landmark catalog used to populate the map.
#[derive(Debug, Clone)]
pub struct CatalogReader<S: LandmarkStore> {
    store: S,
}

impl<S: LandmarkStore> CatalogReader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every landmark in store order. Store failures propagate unchanged.
    pub async fn list_landmarks(&self) -> Result<Vec<Landmark>> {
        let landmarks = self.store.all().await?;
        tracing::debug!(count = landmarks.len(), "Listed landmarks");
        Ok(landmarks)
    }

    /// Landmarks whose name contains `term`, ignoring case. An empty term
    /// matches every landmark.
    pub async fn search(&self, term: &str) -> Result<Vec<Landmark>> {
        let needle = term.to_lowercase();
        let matches: Vec<Landmark> = self
            .store
            .all()
            .await?
            .into_iter()
            .filter(|landmark| landmark.name.to_lowercase().contains(&needle))
            .collect();

        tracing::debug!(term, count = matches.len(), "Searched landmarks");
        Ok(matches)
    }
}
