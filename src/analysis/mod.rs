// file: src/analysis/mod.rs
// description: aggregation over the long-form temperature dataset
// reference: internal module structure

pub mod monthly;
pub mod overview;
pub mod range;
pub mod seasonal;
pub mod stability;
pub mod stats;

pub use monthly::{MonthlyAverage, monthly_averages};
pub use overview::DatasetOverview;
pub use range::{StationRange, largest_temperature_range, temperature_ranges};
pub use seasonal::{SeasonalAverage, seasonal_averages};
pub use stability::{StabilityReport, StationVariability, station_stability, station_variability};

use serde::Serialize;

/// Every statistic produced by one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub seasonal: Vec<SeasonalAverage>,
    pub largest_range: Vec<StationRange>,
    pub stability: Option<StabilityReport>,
    pub overview: DatasetOverview,
}

impl AnalysisReport {
    pub fn compute(dataset: &crate::models::TemperatureDataset) -> Self {
        Self {
            seasonal: seasonal_averages(dataset),
            largest_range: largest_temperature_range(dataset),
            stability: station_stability(dataset),
            overview: DatasetOverview::compute(dataset),
        }
    }
}
