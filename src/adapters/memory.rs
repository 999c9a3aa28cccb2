use crate::domain::model::Landmark;
use crate::domain::ports::LandmarkStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Process-local landmark store. Rows keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<Vec<Landmark>>>,
}

impl MemoryStore {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(landmarks)),
        }
    }

    pub fn insert(&self, landmark: Landmark) {
        self.rows
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(landmark);
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self, predicate: impl Fn(&Landmark) -> bool) -> Vec<Landmark> {
        self.rows
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|landmark| predicate(landmark))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl LandmarkStore for MemoryStore {
    async fn all(&self) -> Result<Vec<Landmark>> {
        Ok(self.snapshot(|_| true))
    }

    async fn find_by_building_code(&self, building_code: &str) -> Result<Vec<Landmark>> {
        Ok(self.snapshot(|landmark| landmark.building_code == building_code))
    }

    async fn find_by_digits(&self, digits: &str) -> Result<Vec<Landmark>> {
        Ok(self.snapshot(|landmark| landmark.digits == digits))
    }
}
