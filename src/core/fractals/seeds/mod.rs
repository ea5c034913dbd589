pub mod catalog;
pub mod presets;

pub use catalog::{SeedCatalog, SeedCatalogError};
