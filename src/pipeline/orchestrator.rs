// file: src/pipeline/orchestrator.rs
// description: coordinates discovery, reshaping, aggregation and report writing
// reference: linear batch workflow over the data folder

use crate::analysis::AnalysisReport;
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::exporter::TextReportWriter;
use crate::models::TemperatureDataset;
use crate::pipeline::processor::FileProcessor;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::repository::{FileScanner, ScannedFile};
use crate::utils::{OperationTimer, format_years};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Result of a full run: the statistics, the files written and the load counters
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub written: Vec<PathBuf>,
    pub stats: PipelineStats,
}

pub struct PipelineOrchestrator {
    config: Config,
    processor: FileProcessor,
    show_progress: bool,
    colored: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let processor = FileProcessor::new(&config.parsing);

        Ok(Self {
            config,
            processor,
            show_progress: false,
            colored: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scan_files(&self) -> Result<Vec<ScannedFile>> {
        let scanner = FileScanner::new(self.config.data.clone());
        scanner.scan_directory(&self.config.data.data_folder)
    }

    pub fn run(&self) -> Result<AnalysisOutcome> {
        info!("Starting weather station temperature analysis");

        let (dataset, stats) = self.load_dataset()?;

        let timer = OperationTimer::new("analysis");
        let report = AnalysisReport::compute(&dataset);
        timer.finish();

        let writer = TextReportWriter::new(self.config.output.clone())?;
        let written = writer.write_all(&report)?;

        Ok(AnalysisOutcome {
            report,
            written,
            stats,
        })
    }

    pub fn load_dataset(&self) -> Result<(TemperatureDataset, PipelineStats)> {
        info!(
            "Loading monthly temperature data from {} folder...",
            self.config.data.data_folder.display()
        );
        let timer = OperationTimer::new("load");

        let files = self.scan_files()?;
        let progress = if self.show_progress {
            ProgressTracker::with_color(files.len(), self.colored)
        } else {
            ProgressTracker::hidden(files.len())
        };

        let mut dataset = TemperatureDataset::new();

        for file in &files {
            match self.processor.process(file) {
                Ok(result) => {
                    progress.file_processed(result.records.len(), file.size);
                    dataset.extend(result.records);
                }
                Err(e) if e.is_read_failure() => {
                    progress.file_failed();
                    error!("Failed to read {}: {}", file.file_name, e);
                }
                Err(e) => {
                    progress.file_skipped();
                    warn!("Skipping {}: {}", file.file_name, e);
                }
            }
        }

        progress.finish();
        let stats = progress.get_stats();

        if dataset.is_empty() {
            return Err(AnalysisError::NoValidData);
        }

        timer.finish_with_count(dataset.len());
        self.log_dataset_summary(&dataset, &stats);
        Ok((dataset, stats))
    }

    fn log_dataset_summary(&self, dataset: &TemperatureDataset, stats: &PipelineStats) {
        info!("=== Data Loading Summary ===");
        info!(
            "Files processed: {} (skipped {}, failed {})",
            stats.files_processed, stats.files_skipped, stats.files_failed
        );
        info!(
            "Success rate: {:.1}% of {} files, {:.0} records/s",
            stats.success_rate(),
            stats.files_seen(),
            stats.records_per_second()
        );
        info!("Total temperature records: {}", dataset.len());
        info!("Unique stations: {}", dataset.stations().len());
        info!("Years covered: {}", format_years(&dataset.years()));
        if let (Some(min), Some(max)) = (dataset.min_temperature(), dataset.max_temperature()) {
            info!("Temperature range: {:.1}°C to {:.1}°C", min, max);
        }
        info!("============================");
    }
}
