pub mod catalog;
pub mod resolver;
pub mod service;

pub use crate::domain::model::{Landmark, Resolution, ScannedCode};
pub use crate::domain::ports::{ConfigProvider, LandmarkStore};
pub use crate::utils::error::Result;
pub use catalog::CatalogReader;
pub use resolver::Resolver;
pub use service::LocatorService;
