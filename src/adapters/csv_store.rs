use crate::domain::model::Landmark;
use crate::domain::ports::LandmarkStore;
use crate::utils::error::{LocatorError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Landmark store backed by a CSV file with the header
/// `name,description,latitude,longitude,glb_file,building_code,digits`.
///
/// The file is read on every query, so edits on disk are picked up by the
/// next request.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<Landmark>> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            LocatorError::store_unavailable(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(data.as_slice());

        let mut landmarks = Vec::new();
        for record in reader.deserialize::<Landmark>() {
            let landmark = record.map_err(|e| {
                LocatorError::store_unavailable(format!("malformed row in {}: {}", self.path.display(), e))
            })?;
            landmarks.push(landmark);
        }

        tracing::trace!(path = %self.path.display(), rows = landmarks.len(), "Loaded landmark file");
        Ok(landmarks)
    }

    async fn select(&self, predicate: impl Fn(&Landmark) -> bool + Send) -> Result<Vec<Landmark>> {
        Ok(self.load().await?.into_iter().filter(|l| predicate(l)).collect())
    }
}

#[async_trait]
impl LandmarkStore for CsvStore {
    async fn all(&self) -> Result<Vec<Landmark>> {
        self.load().await
    }

    async fn find_by_building_code(&self, building_code: &str) -> Result<Vec<Landmark>> {
        self.select(|landmark| landmark.building_code == building_code).await
    }

    async fn find_by_digits(&self, digits: &str) -> Result<Vec<Landmark>> {
        self.select(|landmark| landmark.digits == digits).await
    }
}
