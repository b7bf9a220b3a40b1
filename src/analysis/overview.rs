// file: src/analysis/overview.rs
// description: dataset-wide statistics for the summary report

use crate::analysis::monthly::{MonthlyAverage, monthly_averages};
use crate::analysis::stats::{mean, sample_std_dev};
use crate::models::TemperatureDataset;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub total_records: usize,
    pub years: Vec<i32>,
    pub stations: Vec<String>,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub monthly: Vec<MonthlyAverage>,
}

impl DatasetOverview {
    pub fn compute(dataset: &TemperatureDataset) -> Self {
        let temperatures: Vec<f64> = dataset.records().iter().map(|r| r.temperature).collect();
        let years = dataset.years();

        Self {
            first_year: years.first().copied(),
            last_year: years.last().copied(),
            total_records: dataset.len(),
            years,
            stations: dataset.stations(),
            mean: mean(&temperatures),
            std_dev: sample_std_dev(&temperatures),
            max: dataset.max_temperature(),
            min: dataset.min_temperature(),
            monthly: monthly_averages(dataset),
        }
    }

    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}
