// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use analysis::{
    AnalysisReport, DatasetOverview, MonthlyAverage, SeasonalAverage, StabilityReport,
    StationRange, StationVariability,
};
pub use config::{Config, DataConfig, OutputConfig, ParsingConfig};
pub use error::{AnalysisError, Result};
pub use exporter::{ExportManifest, JsonExporter, TextReportWriter};
pub use models::{Month, Season, TemperatureDataset, TemperatureRecord};
pub use parser::{CsvParser, CsvTable, ReshapeOutcome, Reshaper};
pub use pipeline::{AnalysisOutcome, FileProcessor, PipelineOrchestrator, PipelineStats};
pub use repository::{FileScanner, ScannedFile};
pub use utils::{OperationTimer, Validator};
