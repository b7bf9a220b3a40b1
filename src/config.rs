// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AnalysisError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub data: DataConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    pub data_folder: PathBuf,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParsingConfig {
    /// Candidate station column headers, in priority order
    pub station_columns: Vec<String>,
    /// Cell values treated as a missing reading
    #[serde(default = "default_missing_markers")]
    pub missing_markers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub seasonal_file: String,
    pub range_file: String,
    pub stability_file: String,
    pub summary_file: String,
}

fn default_missing_markers() -> Vec<String> {
    ["", "NA", "N/A", "NaN", "nan", "null", "-"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("WEATHER_ANALYZER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            data: DataConfig {
                data_folder: PathBuf::from("temperatures"),
                max_file_size_mb: 50,
            },
            parsing: ParsingConfig {
                station_columns: vec![
                    "STATION_NAME".to_string(),
                    "Station".to_string(),
                    "station".to_string(),
                ],
                missing_markers: default_missing_markers(),
            },
            output: OutputConfig {
                output_dir: PathBuf::from("."),
                seasonal_file: "average_temp.txt".to_string(),
                range_file: "largest_temp_range_station.txt".to_string(),
                stability_file: "temperature_stability_stations.txt".to_string(),
                summary_file: "analysis_summary.txt".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.parsing.station_columns.is_empty() {
            return Err(AnalysisError::Config(
                "station_columns must list at least one column".to_string(),
            ));
        }

        if self.data.max_file_size_mb == 0 {
            return Err(AnalysisError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        let names = [
            &self.output.seasonal_file,
            &self.output.range_file,
            &self.output.stability_file,
            &self.output.summary_file,
        ];
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(AnalysisError::Config(
                "report file names cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
