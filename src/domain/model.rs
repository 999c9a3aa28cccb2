use crate::utils::error::{LocatorError, Result};
use serde::{Deserialize, Serialize};

/// Number of trailing characters of a scanned code used as the fallback key.
pub const FALLBACK_KEY_LEN: usize = 5;

/// One physical monument or building, as persisted in the landmark store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub glb_file: String,
    pub building_code: String,
    pub digits: String,
}

/// Outcome of resolving a scanned building code.
///
/// `NoMatch` is a successful negative result; store failures are reported
/// through `LocatorError::StoreUnavailable` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "matched_by", rename_all = "snake_case")]
pub enum Resolution {
    ExactMatch {
        building_code: String,
        glb_file: String,
    },
    PartialMatch {
        matched_digits: String,
        building_code: String,
        glb_file: String,
    },
    NoMatch,
}

impl Resolution {
    pub fn glb_file(&self) -> Option<&str> {
        match self {
            Self::ExactMatch { glb_file, .. } | Self::PartialMatch { glb_file, .. } => Some(glb_file),
            Self::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// A scanned code that passed input validation. The text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedCode(String);

impl ScannedCode {
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            None => Err(LocatorError::invalid_input("building_code", "value is missing")),
            Some("") => Err(LocatorError::invalid_input("building_code", "value is empty")),
            Some(code) => Ok(Self(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fallback_key(&self) -> &str {
        fallback_key(&self.0)
    }
}

/// Last five characters of `code`, or all of it when shorter.
pub fn fallback_key(code: &str) -> &str {
    match code.char_indices().rev().nth(FALLBACK_KEY_LEN - 1) {
        Some((start, _)) => &code[start..],
        None => code,
    }
}
