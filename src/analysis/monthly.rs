// file: src/analysis/monthly.rs
// description: mean temperature per calendar month

use crate::analysis::stats::mean;
use crate::models::{Month, TemperatureDataset};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAverage {
    pub month: Month,
    pub mean: Option<f64>,
}

pub fn monthly_averages(dataset: &TemperatureDataset) -> Vec<MonthlyAverage> {
    let mut groups: HashMap<Month, Vec<f64>> = HashMap::new();
    for record in dataset.records() {
        groups.entry(record.month).or_default().push(record.temperature);
    }

    Month::ALL
        .into_iter()
        .map(|month| MonthlyAverage {
            month,
            mean: groups.get(&month).and_then(|values| mean(values)),
        })
        .collect()
}
