// file: src/models/record.rs
// description: long-form temperature reading for one station, month and year
// reference: internal data structures

use crate::models::season::{Month, Season};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    pub station: String,
    pub year: i32,
    pub month: Month,
    pub temperature: f64,
}

impl TemperatureRecord {
    pub fn new(station: impl Into<String>, year: i32, month: Month, temperature: f64) -> Self {
        Self {
            station: station.into(),
            year,
            month,
            temperature,
        }
    }

    /// Always follows `month`; there is no separately stored season
    pub fn season(&self) -> Season {
        self.month.season()
    }
}
