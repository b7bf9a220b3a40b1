// file: src/analysis/stats.rs
// description: descriptive statistics over temperature samples

use crate::models::TemperatureRecord;
use std::collections::BTreeMap;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator); undefined below two samples
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Temperatures grouped by station, keyed in station name order
pub fn by_station(records: &[TemperatureRecord]) -> BTreeMap<&str, Vec<f64>> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.station.as_str())
            .or_default()
            .push(record.temperature);
    }
    groups
}
