// file: src/repository/scanner.rs
// description: Data folder discovery of yearly csv files
// reference: https://docs.rs/walkdir

use crate::config::DataConfig;
use crate::error::{AnalysisError, Result};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    config: DataConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl ScannedFile {
    /// Year encoded in the file name, e.g. `stations_group_1990.csv`
    pub fn year(&self) -> Option<i32> {
        FileScanner::extract_year(&self.file_name)
    }
}

impl FileScanner {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning data folder: {}", root.display());
        Validator::validate_directory(root)?;

        let max_size = (self.config.max_file_size_mb as u64).saturating_mul(1024 * 1024);
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !Self::is_csv(path) {
                debug!("Skipping non-csv file: {}", path.display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            files.push(ScannedFile {
                path: path.to_path_buf(),
                file_name: entry.file_name().to_string_lossy().to_string(),
                size,
            });
        }

        if files.is_empty() {
            return Err(AnalysisError::NoCsvFiles(root.to_path_buf()));
        }

        info!("Found {} csv files", files.len());
        Ok(files)
    }

    fn is_csv(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
    }

    pub fn extract_year(file_name: &str) -> Option<i32> {
        let stem = file_name
            .strip_suffix(".csv")
            .or_else(|| file_name.strip_suffix(".CSV"))
            .unwrap_or(file_name);
        let candidate = stem.rsplit('_').next()?;
        candidate.trim().parse().ok()
    }
}
