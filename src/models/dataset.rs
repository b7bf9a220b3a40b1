// file: src/models/dataset.rs
// description: concatenated record set from every processed yearly file
// reference: internal data structures

use crate::models::record::TemperatureRecord;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct TemperatureDataset {
    records: Vec<TemperatureRecord>,
}

impl TemperatureDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TemperatureRecord>) -> Self {
        Self { records }
    }

    pub fn extend(&mut self, records: Vec<TemperatureRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stations(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.station.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn min_temperature(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.temperature)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn max_temperature(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.temperature)
            .max_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn sample() -> TemperatureDataset {
        TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Hobart", 1991, Month::January, 17.0),
            TemperatureRecord::new("Darwin", 1990, Month::January, 29.5),
            TemperatureRecord::new("Hobart", 1990, Month::July, 8.1),
        ])
    }

    #[test]
    fn test_unique_stations_sorted() {
        assert_eq!(sample().stations(), vec!["Darwin", "Hobart"]);
    }

    #[test]
    fn test_years_sorted_unique() {
        assert_eq!(sample().years(), vec![1990, 1991]);
    }

    #[test]
    fn test_temperature_bounds() {
        let dataset = sample();
        assert_eq!(dataset.min_temperature(), Some(8.1));
        assert_eq!(dataset.max_temperature(), Some(29.5));
        assert_eq!(TemperatureDataset::new().min_temperature(), None);
    }
}
