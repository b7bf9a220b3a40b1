// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod dataset;
pub mod record;
pub mod season;

pub use dataset::TemperatureDataset;
pub use record::TemperatureRecord;
pub use season::{Month, Season};
