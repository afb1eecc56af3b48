//! Population reference data and user profile intake

mod data;
pub mod loader;

pub use data::{FieldValue, PopulationDataset, UserProfile};
pub use loader::{load_dataset, load_dataset_from_reader, load_default_dataset};
