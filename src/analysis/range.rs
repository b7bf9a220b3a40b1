// file: src/analysis/range.rs
// description: per-station temperature range and the stations with the widest spread

use crate::analysis::stats::by_station;
use crate::models::TemperatureDataset;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRange {
    pub station: String,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

/// Every station's range, widest first; equal ranges keep station name order
pub fn temperature_ranges(dataset: &TemperatureDataset) -> Vec<StationRange> {
    let mut ranges: Vec<StationRange> = by_station(dataset.records())
        .into_iter()
        .filter_map(|(station, values)| {
            let min = values.iter().copied().min_by(|a, b| a.total_cmp(b))?;
            let max = values.iter().copied().max_by(|a, b| a.total_cmp(b))?;
            Some(StationRange {
                station: station.to_string(),
                min,
                max,
                range: max - min,
            })
        })
        .collect();

    ranges.sort_by(|a, b| b.range.total_cmp(&a.range));
    ranges
}

/// Stations whose range equals the maximum, ties included
pub fn largest_temperature_range(dataset: &TemperatureDataset) -> Vec<StationRange> {
    info!("Calculating temperature ranges by station...");

    let ranges = temperature_ranges(dataset);
    let Some(max_range) = ranges.first().map(|r| r.range) else {
        return Vec::new();
    };

    ranges
        .into_iter()
        .take_while(|r| r.range == max_range)
        .collect()
}
