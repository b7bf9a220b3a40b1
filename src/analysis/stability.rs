// file: src/analysis/stability.rs
// description: most stable and most variable stations by standard deviation

use crate::analysis::stats::{by_station, sample_std_dev};
use crate::models::TemperatureDataset;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationVariability {
    pub station: String,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityReport {
    pub most_stable: Vec<StationVariability>,
    pub most_variable: Vec<StationVariability>,
}

/// Standard deviation per station; stations with a single reading are dropped
pub fn station_variability(dataset: &TemperatureDataset) -> Vec<StationVariability> {
    by_station(dataset.records())
        .into_iter()
        .filter_map(|(station, values)| {
            sample_std_dev(&values).map(|std_dev| StationVariability {
                station: station.to_string(),
                std_dev,
            })
        })
        .collect()
}

pub fn station_stability(dataset: &TemperatureDataset) -> Option<StabilityReport> {
    info!("Analyzing temperature stability...");

    let variability = station_variability(dataset);
    if variability.is_empty() {
        warn!("No stations with sufficient data for stability analysis");
        return None;
    }

    let min_std = variability
        .iter()
        .map(|v| v.std_dev)
        .min_by(|a, b| a.total_cmp(b))?;
    let max_std = variability
        .iter()
        .map(|v| v.std_dev)
        .max_by(|a, b| a.total_cmp(b))?;

    let pick = |target: f64| -> Vec<StationVariability> {
        variability
            .iter()
            .filter(|v| v.std_dev == target)
            .cloned()
            .collect()
    };

    Some(StabilityReport {
        most_stable: pick(min_std),
        most_variable: pick(max_std),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, TemperatureRecord};

    fn record(station: &str, month: Month, temperature: f64) -> TemperatureRecord {
        TemperatureRecord::new(station, 1990, month, temperature)
    }

    #[test]
    fn test_most_stable_and_variable() {
        let dataset = TemperatureDataset::from_records(vec![
            record("Darwin", Month::January, 29.0),
            record("Darwin", Month::July, 27.0),
            record("Canberra", Month::January, 21.0),
            record("Canberra", Month::July, 5.0),
            record("Perth", Month::January, 24.0),
            record("Perth", Month::July, 14.0),
        ]);

        let report = station_stability(&dataset).unwrap();
        assert_eq!(report.most_stable.len(), 1);
        assert_eq!(report.most_stable[0].station, "Darwin");
        assert!((report.most_stable[0].std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(report.most_variable[0].station, "Canberra");
    }

    #[test]
    fn test_single_reading_stations_dropped() {
        let dataset = TemperatureDataset::from_records(vec![
            record("Lonely", Month::January, 40.0),
            record("Hobart", Month::January, 17.0),
            record("Hobart", Month::July, 8.0),
        ]);

        let variability = station_variability(&dataset);
        assert_eq!(variability.len(), 1);
        assert_eq!(variability[0].station, "Hobart");

        let report = station_stability(&dataset).unwrap();
        assert_eq!(report.most_stable, report.most_variable);
    }

    #[test]
    fn test_no_station_with_enough_data() {
        let dataset = TemperatureDataset::from_records(vec![
            record("A", Month::January, 20.0),
            record("B", Month::January, 21.0),
        ]);
        assert!(station_stability(&dataset).is_none());
    }

    #[test]
    fn test_ties_are_all_reported() {
        let dataset = TemperatureDataset::from_records(vec![
            record("A", Month::January, 20.0),
            record("A", Month::July, 22.0),
            record("B", Month::January, 10.0),
            record("B", Month::July, 12.0),
        ]);

        let report = station_stability(&dataset).unwrap();
        assert_eq!(report.most_stable.len(), 2);
        assert_eq!(report.most_variable.len(), 2);
    }
}
