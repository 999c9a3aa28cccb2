use crate::core::{Landmark, LandmarkStore, Resolution, Result, ScannedCode};

/// Maps a scanned building code to a landmark's model asset.
///
/// Resolution runs in two stages with strict precedence:
///
/// 1. exact equality on `building_code`
/// 2. only when stage 1 found nothing, equality between the last five
///    characters of the scan and the stored `digits`
///
/// When a stage returns several rows the first one in store order wins and a
/// warning is logged. Codes shorter than five characters use the whole code
/// as the fallback key.
#[derive(Debug, Clone)]
pub struct Resolver<S: LandmarkStore> {
    store: S,
}

impl<S: LandmarkStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates `scanned` and resolves it. A missing or empty code fails
    /// with `InvalidInput` before the store is touched.
    pub async fn resolve(&self, scanned: Option<&str>) -> Result<Resolution> {
        let code = ScannedCode::parse(scanned)?;
        self.resolve_code(&code).await
    }

    pub async fn resolve_code(&self, code: &ScannedCode) -> Result<Resolution> {
        let exact = self.store.find_by_building_code(code.as_str()).await?;
        if let Some(landmark) = first_of(exact, "building_code", code.as_str()) {
            tracing::info!(
                building_code = %landmark.building_code,
                glb_file = %landmark.glb_file,
                "Resolved scan by exact match"
            );
            return Ok(Resolution::ExactMatch {
                building_code: landmark.building_code,
                glb_file: landmark.glb_file,
            });
        }

        let last_five = code.fallback_key();
        if last_five.chars().count() < crate::domain::model::FALLBACK_KEY_LEN {
            tracing::debug!(scanned = code.as_str(), "Scanned code shorter than fallback key, using it whole");
        }

        let partial = self.store.find_by_digits(last_five).await?;
        if let Some(landmark) = first_of(partial, "digits", last_five) {
            tracing::info!(
                scanned = code.as_str(),
                matched_digits = last_five,
                building_code = %landmark.building_code,
                "Resolved scan by partial match"
            );
            return Ok(Resolution::PartialMatch {
                matched_digits: last_five.to_string(),
                building_code: landmark.building_code,
                glb_file: landmark.glb_file,
            });
        }

        tracing::info!(scanned = code.as_str(), "No landmark matches scanned code");
        Ok(Resolution::NoMatch)
    }
}

fn first_of(rows: Vec<Landmark>, field: &str, value: &str) -> Option<Landmark> {
    if rows.len() > 1 {
        tracing::warn!(
            field,
            value,
            candidates = rows.len(),
            "Ambiguous match, using first landmark in store order"
        );
    }
    rows.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::utils::error::LocatorError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn landmark(name: &str, building_code: &str, digits: &str) -> Landmark {
        Landmark {
            name: name.to_string(),
            description: String::new(),
            latitude: 45.7537,
            longitude: 21.2257,
            glb_file: format!("models/{}.glb", name.to_lowercase().replace(' ', "_")),
            building_code: building_code.to_string(),
            digits: digits.to_string(),
        }
    }

    /// Counts queries per stage and optionally fails the fallback stage.
    #[derive(Default)]
    struct ProbeStore {
        inner: MemoryStore,
        exact_queries: AtomicUsize,
        digit_queries: AtomicUsize,
        fail_digits: bool,
    }

    #[async_trait]
    impl LandmarkStore for ProbeStore {
        async fn all(&self) -> Result<Vec<Landmark>> {
            self.inner.all().await
        }

        async fn find_by_building_code(&self, building_code: &str) -> Result<Vec<Landmark>> {
            self.exact_queries.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_building_code(building_code).await
        }

        async fn find_by_digits(&self, digits: &str) -> Result<Vec<Landmark>> {
            self.digit_queries.fetch_add(1, Ordering::SeqCst);
            if self.fail_digits {
                return Err(LocatorError::store_unavailable("query timed out"));
            }
            self.inner.find_by_digits(digits).await
        }
    }

    fn sample_store() -> MemoryStore {
        MemoryStore::new(vec![
            landmark("Metropolitan Cathedral", "TM-CAT-10001", "10001"),
            landmark("Opera House", "TM-OPR-20002", "20002"),
            landmark("Huniade Castle", "TM-HUN-30003", "30003"),
        ])
    }

    #[tokio::test]
    async fn test_exact_match_returns_landmark_asset() {
        let resolver = Resolver::new(sample_store());
        let result = resolver.resolve(Some("TM-OPR-20002")).await.unwrap();
        assert_eq!(
            result,
            Resolution::ExactMatch {
                building_code: "TM-OPR-20002".to_string(),
                glb_file: "models/opera_house.glb".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_exact_match_is_case_sensitive() {
        let resolver = Resolver::new(sample_store());
        let result = resolver.resolve(Some("tm-opr-20002")).await.unwrap();
        // Falls through to the digits stage
        assert!(matches!(result, Resolution::PartialMatch { .. }));
    }

    #[tokio::test]
    async fn test_partial_match_on_last_five_characters() {
        let resolver = Resolver::new(sample_store());
        let result = resolver.resolve(Some("SCAN-ERR-30003")).await.unwrap();
        assert_eq!(
            result,
            Resolution::PartialMatch {
                matched_digits: "30003".to_string(),
                building_code: "TM-HUN-30003".to_string(),
                glb_file: "models/huniade_castle.glb".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_no_match() {
        let resolver = Resolver::new(sample_store());
        let result = resolver.resolve(Some("TM-XXX-99999")).await.unwrap();
        assert_eq!(result, Resolution::NoMatch);
        assert_eq!(result.glb_file(), None);
    }

    #[tokio::test]
    async fn test_exact_match_takes_precedence_over_digits() {
        let store = Arc::new(ProbeStore {
            inner: MemoryStore::new(vec![
                landmark("Decoy", "OTHER-1", "12345"),
                landmark("Target", "X12345", "00000"),
            ]),
            ..Default::default()
        });
        let resolver = Resolver::new(store.clone());

        let result = resolver.resolve(Some("X12345")).await.unwrap();
        assert_eq!(
            result,
            Resolution::ExactMatch {
                building_code: "X12345".to_string(),
                glb_file: "models/target.glb".to_string(),
            }
        );
        assert_eq!(store.exact_queries.load(Ordering::SeqCst), 1);
        assert_eq!(store.digit_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_issues_no_query() {
        let store = Arc::new(ProbeStore::default());
        let resolver = Resolver::new(store.clone());

        for input in [None, Some("")] {
            let err = resolver.resolve(input).await.unwrap_err();
            assert!(matches!(err, LocatorError::InvalidInput { .. }));
        }
        assert_eq!(store.exact_queries.load(Ordering::SeqCst), 0);
        assert_eq!(store.digit_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_a_miss() {
        let store = ProbeStore {
            inner: sample_store(),
            fail_digits: true,
            ..Default::default()
        };
        let resolver = Resolver::new(store);

        let err = resolver.resolve(Some("NOPE-77777")).await.unwrap_err();
        assert!(matches!(err, LocatorError::StoreUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_short_code_uses_whole_string_as_fallback_key() {
        let store = MemoryStore::new(vec![landmark("Bastion", "TM-BAS-00042", "042")]);
        let resolver = Resolver::new(store);

        let result = resolver.resolve(Some("042")).await.unwrap();
        assert_eq!(
            result,
            Resolution::PartialMatch {
                matched_digits: "042".to_string(),
                building_code: "TM-BAS-00042".to_string(),
                glb_file: "models/bastion.glb".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_ambiguous_digits_pick_first_in_store_order() {
        let store = MemoryStore::new(vec![
            landmark("First", "A-55555", "55555"),
            landmark("Second", "B-55555", "55555"),
        ]);
        let resolver = Resolver::new(store);

        let result = resolver.resolve(Some("Z-55555")).await.unwrap();
        assert!(matches!(
            result,
            Resolution::PartialMatch { ref building_code, .. } if building_code == "A-55555"
        ));
    }

    #[tokio::test]
    async fn test_ambiguous_building_code_picks_first_in_store_order() {
        let store = Arc::new(ProbeStore::default());
        store.inner.insert(Landmark {
            glb_file: "a.glb".to_string(),
            ..landmark("First", "DUP", "11111")
        });
        store.inner.insert(Landmark {
            glb_file: "b.glb".to_string(),
            ..landmark("Second", "DUP", "22222")
        });
        let resolver = Resolver::new(store.clone());

        let result = resolver.resolve(Some("DUP")).await.unwrap();
        assert_eq!(
            result,
            Resolution::ExactMatch {
                building_code: "DUP".to_string(),
                glb_file: "a.glb".to_string(),
            }
        );
        assert_eq!(store.exact_queries.load(Ordering::SeqCst), 1);
        assert_eq!(store.digit_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_resolution_is_idempotent() {
        let resolver = Resolver::new(sample_store());
        let first = resolver.resolve(Some("ANY-10001")).await.unwrap();
        let second = resolver.resolve(Some("ANY-10001")).await.unwrap();
        assert_eq!(first, second);
    }
}
