// file: src/pipeline/processor.rs
// description: converts one yearly csv file into long-form temperature records
// reference: reads, parses and reshapes a scanned file

use crate::config::ParsingConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{Month, TemperatureRecord};
use crate::parser::{CsvParser, Reshaper};
use crate::repository::ScannedFile;
use crate::utils::Validator;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub file_name: String,
    pub year: i32,
    pub station_rows: usize,
    pub available_months: Vec<Month>,
    pub records: Vec<TemperatureRecord>,
}

pub struct FileProcessor {
    parser: CsvParser,
    reshaper: Reshaper,
}

impl FileProcessor {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            parser: CsvParser::new(),
            reshaper: Reshaper::new(config),
        }
    }

    pub fn process(&self, scanned_file: &ScannedFile) -> Result<ProcessingResult> {
        info!("Processing {}...", scanned_file.file_name);

        let year = scanned_file
            .year()
            .ok_or_else(|| AnalysisError::InvalidYear(scanned_file.file_name.clone()))?;

        let content = self.read_file_content(&scanned_file.path)?;
        Validator::validate_content_not_empty(&content)?;

        let table = self.parser.parse(&content)?;
        debug!("Columns found: {:?}", table.headers);
        info!("Number of stations: {}", table.len());

        let outcome = self.reshaper.reshape(&table, year)?;
        debug!(
            "Station column: {}, available months: {:?}",
            outcome.station_column, outcome.available_months
        );

        if outcome.records.is_empty() {
            info!("No valid temperature data found in {}", scanned_file.file_name);
        } else {
            info!(
                "Successfully processed {} temperature records",
                outcome.records.len()
            );
        }

        Ok(ProcessingResult {
            file_name: scanned_file.file_name.clone(),
            year,
            station_rows: outcome.station_rows,
            available_months: outcome.available_months,
            records: outcome.records,
        })
    }

    fn read_file_content(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| AnalysisError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }
}
