// file: src/exporter/json.rs
// description: json export of analysis results with a run manifest

use crate::analysis::AnalysisReport;
use crate::error::{AnalysisError, Result};
use crate::pipeline::PipelineStats;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const REPORT_FILE: &str = "analysis.json";
const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_records: usize,
    pub stations: usize,
    pub stats: PipelineStats,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir, pretty })
    }

    /// `written` are the text reports already produced by the run; the manifest lists them
    /// ahead of the json report
    pub fn export(
        &self,
        report: &AnalysisReport,
        stats: &PipelineStats,
        written: &[PathBuf],
    ) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let report_path = self.output_dir.join(REPORT_FILE);
        self.write_json(&report_path, report)?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_records: report.overview.total_records,
            stations: report.overview.station_count(),
            stats: stats.clone(),
            files: written
                .iter()
                .chain(std::iter::once(&report_path))
                .map(|path| path.display().to_string())
                .collect(),
        };
        self.write_json(&self.output_dir.join(MANIFEST_FILE), &manifest)?;

        info!(
            "Export complete: {} records summarised in {}",
            manifest.total_records,
            report_path.display()
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let body = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        fs::write(path, body).map_err(|source| AnalysisError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }
}
