// file: src/analysis/seasonal.rs
// description: mean temperature per season across all stations and years

use crate::analysis::stats::mean;
use crate::models::{Season, TemperatureDataset};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalAverage {
    pub season: Season,
    pub mean: Option<f64>,
}

pub fn seasonal_averages(dataset: &TemperatureDataset) -> Vec<SeasonalAverage> {
    info!("Calculating seasonal averages...");

    let mut groups: HashMap<Season, Vec<f64>> = HashMap::new();
    for record in dataset.records() {
        groups.entry(record.season()).or_default().push(record.temperature);
    }

    Season::ALL
        .into_iter()
        .map(|season| SeasonalAverage {
            season,
            mean: groups.get(&season).and_then(|values| mean(values)),
        })
        .collect()
}
