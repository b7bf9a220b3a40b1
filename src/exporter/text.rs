// file: src/exporter/text.rs
// description: plain text report rendering and writing

use crate::analysis::{
    AnalysisReport, DatasetOverview, SeasonalAverage, StabilityReport, StationRange,
};
use crate::config::OutputConfig;
use crate::error::{AnalysisError, Result};
use crate::utils::{format_celsius, format_thousands, format_years};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct TextReportWriter {
    config: OutputConfig,
}

impl TextReportWriter {
    pub fn new(config: OutputConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir).map_err(|source| AnalysisError::FileOperation {
            path: config.output_dir.clone(),
            source,
        })?;
        Ok(Self { config })
    }

    /// Writes every report and returns the paths written, in write order
    pub fn write_all(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>> {
        let mut written = vec![
            self.write(&self.config.seasonal_file, &render_seasonal(&report.seasonal))?,
            self.write(&self.config.range_file, &render_largest_range(&report.largest_range))?,
        ];

        match &report.stability {
            Some(stability) => {
                written.push(self.write(&self.config.stability_file, &render_stability(stability))?)
            }
            None => warn!(
                "Skipping {}: no station has enough readings",
                self.config.stability_file
            ),
        }

        written.push(self.write(&self.config.summary_file, &render_summary(&report.overview))?);
        Ok(written)
    }

    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.config.output_dir.join(file_name);
        write_file(&path, content)?;
        info!("Report saved to '{}'", path.display());
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| AnalysisError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

pub fn render_seasonal(averages: &[SeasonalAverage]) -> String {
    let mut out = String::new();
    out.push_str("Seasonal Average Temperatures (All Stations, All Years)\n");
    out.push_str(&"=".repeat(55));
    out.push('\n');
    for average in averages {
        let _ = writeln!(out, "{}: {}", average.season, format_celsius(average.mean));
    }
    out
}

pub fn render_largest_range(ranges: &[StationRange]) -> String {
    let mut out = String::new();
    out.push_str("Station(s) with Largest Temperature Range\n");
    out.push_str(&"=".repeat(40));
    out.push('\n');
    for range in ranges {
        let _ = writeln!(
            out,
            "Station {}: Range {} (Max: {}, Min: {})",
            range.station,
            format_celsius(Some(range.range)),
            format_celsius(Some(range.max)),
            format_celsius(Some(range.min)),
        );
    }
    out
}

pub fn render_stability(report: &StabilityReport) -> String {
    let mut out = String::new();
    out.push_str("Temperature Stability Analysis\n");
    out.push_str(&"=".repeat(30));
    out.push_str("\n\n");

    out.push_str("Most Stable Station(s):\n");
    for station in &report.most_stable {
        let _ = writeln!(
            out,
            "Most Stable: Station {}: StdDev {}",
            station.station,
            format_celsius(Some(station.std_dev))
        );
    }

    out.push_str("\nMost Variable Station(s):\n");
    for station in &report.most_variable {
        let _ = writeln!(
            out,
            "Most Variable: Station {}: StdDev {}",
            station.station,
            format_celsius(Some(station.std_dev))
        );
    }
    out
}

pub fn render_summary(overview: &DatasetOverview) -> String {
    let mut out = String::new();
    out.push_str("AUSTRALIAN WEATHER STATION TEMPERATURE ANALYSIS SUMMARY\n");
    out.push_str(&"=".repeat(55));
    out.push_str("\n\n");

    let year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string());
    let _ = writeln!(
        out,
        "Analysis Period: {} to {}",
        year(overview.first_year),
        year(overview.last_year)
    );
    let _ = writeln!(
        out,
        "Total Records Analyzed: {}",
        format_thousands(overview.total_records)
    );
    let _ = writeln!(out, "Number of Weather Stations: {}", overview.station_count());
    let _ = writeln!(out, "Years Covered: {}\n", format_years(&overview.years));

    out.push_str("OVERALL TEMPERATURE STATISTICS\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');
    let _ = writeln!(out, "Overall Mean Temperature: {}", format_celsius(overview.mean));
    let _ = writeln!(out, "Overall Standard Deviation: {}", format_celsius(overview.std_dev));
    let _ = writeln!(out, "Absolute Maximum: {}", format_celsius(overview.max));
    let _ = writeln!(out, "Absolute Minimum: {}", format_celsius(overview.min));
    let _ = writeln!(out, "Overall Range: {}\n", format_celsius(overview.range()));

    out.push_str("MONTHLY AVERAGE TEMPERATURES\n");
    out.push_str(&"-".repeat(28));
    out.push('\n');
    for monthly in &overview.monthly {
        let _ = writeln!(out, "{:>10}: {}", monthly.month, format_celsius(monthly.mean));
    }
    out.push('\n');

    out.push_str("WEATHER STATIONS INCLUDED\n");
    out.push_str(&"-".repeat(25));
    out.push('\n');
    for (i, station) in overview.stations.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {}", i + 1, station);
    }
    out
}
