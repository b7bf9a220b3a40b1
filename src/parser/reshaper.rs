// file: src/parser/reshaper.rs
// description: wide-to-long reshaping of monthly columns into station-month records
// reference: tidy data melt semantics

use crate::config::ParsingConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{Month, TemperatureRecord};
use crate::parser::csv_table::CsvTable;
use crate::utils::Validator;
use std::collections::HashSet;
use tracing::debug;

pub struct Reshaper {
    station_columns: Vec<String>,
    missing_markers: HashSet<String>,
}

#[derive(Debug, Clone)]
pub struct ReshapeOutcome {
    pub records: Vec<TemperatureRecord>,
    pub station_column: String,
    pub available_months: Vec<Month>,
    pub station_rows: usize,
}

impl Reshaper {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            station_columns: config.station_columns.clone(),
            missing_markers: config.missing_markers.iter().cloned().collect(),
        }
    }

    pub fn reshape(&self, table: &CsvTable, year: i32) -> Result<ReshapeOutcome> {
        let (station_column, station_idx) = self
            .station_columns
            .iter()
            .find_map(|name| table.column_index(name).map(|idx| (name.clone(), idx)))
            .ok_or_else(|| AnalysisError::MissingStationColumn {
                expected: self.station_columns.clone(),
            })?;

        let month_columns: Vec<(Month, usize)> = Month::ALL
            .into_iter()
            .filter_map(|month| table.column_index(month.name()).map(|idx| (month, idx)))
            .collect();

        if month_columns.is_empty() {
            return Err(AnalysisError::NoMonthColumns);
        }

        let mut records = Vec::with_capacity(table.len() * month_columns.len());

        for (row_number, row) in table.rows.iter().enumerate() {
            let station = row.get(station_idx).map(|s| s.trim()).unwrap_or_default();
            if self.is_missing(station) {
                debug!("Row {} has no station name, skipping", row_number + 1);
                continue;
            }

            for &(month, idx) in &month_columns {
                let cell = row.get(idx).map(|s| s.trim()).unwrap_or_default();
                if self.is_missing(cell) {
                    continue;
                }

                match Validator::parse_temperature(cell) {
                    Some(temperature) => {
                        records.push(TemperatureRecord::new(station, year, month, temperature));
                    }
                    None => debug!(
                        "Ignoring non-numeric value {:?} for {} {} {}",
                        cell, station, month, year
                    ),
                }
            }
        }

        Ok(ReshapeOutcome {
            records,
            station_column,
            available_months: month_columns.into_iter().map(|(m, _)| m).collect(),
            station_rows: table.len(),
        })
    }

    fn is_missing(&self, cell: &str) -> bool {
        cell.is_empty() || self.missing_markers.contains(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Season;
    use crate::parser::CsvParser;

    fn reshaper() -> Reshaper {
        Reshaper::new(&Config::default_config().parsing)
    }

    fn table(content: &str) -> CsvTable {
        CsvParser::new().parse(content).unwrap()
    }

    #[test]
    fn test_reshape_wide_to_long() {
        let table = table(
            "STATION_NAME,STN_ID,January,February,July\n\
             Darwin,14015,29.1,28.7,25.0\n\
             Hobart,94029,17.2,17.0,8.1\n",
        );
        let outcome = reshaper().reshape(&table, 1990).unwrap();

        assert_eq!(outcome.station_column, "STATION_NAME");
        assert_eq!(
            outcome.available_months,
            vec![Month::January, Month::February, Month::July]
        );
        assert_eq!(outcome.station_rows, 2);
        assert_eq!(outcome.records.len(), 6);

        let first = &outcome.records[0];
        assert_eq!(first.station, "Darwin");
        assert_eq!(first.year, 1990);
        assert_eq!(first.month, Month::January);
        assert_eq!(first.temperature, 29.1);
        assert_eq!(first.season(), Season::Summer);

        assert_eq!(outcome.records[5].station, "Hobart");
        assert_eq!(outcome.records[5].season(), Season::Winter);
    }

    #[test]
    fn test_months_emitted_in_calendar_order() {
        let table = table("Station,December,March,January\nCairns,27.9,27.1,28.4\n");
        let outcome = reshaper().reshape(&table, 2001).unwrap();
        let months: Vec<Month> = outcome.records.iter().map(|r| r.month).collect();
        assert_eq!(months, vec![Month::January, Month::March, Month::December]);
    }

    #[test]
    fn test_station_column_priority() {
        let table = table("station,STATION_NAME,January\nlower,UPPER,20.0\n");
        let outcome = reshaper().reshape(&table, 1995).unwrap();
        assert_eq!(outcome.station_column, "STATION_NAME");
        assert_eq!(outcome.records[0].station, "UPPER");
    }

    #[test]
    fn test_missing_and_invalid_cells_skipped() {
        let table = table(
            "Station,January,February,March,April,May\n\
             Mildura,NA,,abc,24.0,nan\n",
        );
        let outcome = reshaper().reshape(&table, 1990).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].month, Month::April);
    }

    #[test]
    fn test_rows_without_station_skipped() {
        let table = table("Station,January\n,21.0\nBroome,30.2\n");
        let outcome = reshaper().reshape(&table, 1990).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].station, "Broome");
        assert_eq!(outcome.station_rows, 2);
    }

    #[test]
    fn test_missing_station_column() {
        let table = table("Site,January\nDarwin,29.0\n");
        let result = reshaper().reshape(&table, 1990);
        assert!(matches!(
            result,
            Err(AnalysisError::MissingStationColumn { .. })
        ));
    }

    #[test]
    fn test_no_month_columns() {
        let table = table("Station,Jan,Feb\nDarwin,29.0,28.0\n");
        let result = reshaper().reshape(&table, 1990);
        assert!(matches!(result, Err(AnalysisError::NoMonthColumns)));
    }

    #[test]
    fn test_no_valid_values_is_not_an_error() {
        let table = table("Station,January\nDarwin,NA\n");
        let outcome = reshaper().reshape(&table, 1990).unwrap();
        assert!(outcome.records.is_empty());
    }
}
