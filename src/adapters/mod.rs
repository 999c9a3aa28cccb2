// Adapters layer: concrete landmark stores behind the `LandmarkStore` port.

pub mod csv_store;
pub mod memory;
pub mod timeout;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;
pub use timeout::{TimeoutStore, DEFAULT_STORE_TIMEOUT};
