// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::cell::Cell;
use std::time::Instant;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub records_created: usize,
    pub total_bytes_processed: u64,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_seen(&self) -> usize {
        self.files_processed + self.files_skipped + self.files_failed
    }

    pub fn records_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.records_created as f64 / self.duration_secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_seen();
        if total == 0 {
            return 0.0;
        }
        (self.files_processed as f64 / total as f64) * 100.0
    }
}

/// Single-threaded file progress; counters live in `Cell`s since the pipeline is sequential
pub struct ProgressTracker {
    bar: ProgressBar,
    files_processed: Cell<usize>,
    files_skipped: Cell<usize>,
    files_failed: Cell<usize>,
    records_created: Cell<usize>,
    bytes_processed: Cell<u64>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self::from_bar(create_progress_bar(total_files as u64, colored))
    }

    /// Tracker that counts without drawing anything
    pub fn hidden(total_files: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total_files as u64), ProgressDrawTarget::hidden());
        Self::from_bar(bar)
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            files_processed: Cell::new(0),
            files_skipped: Cell::new(0),
            files_failed: Cell::new(0),
            records_created: Cell::new(0),
            bytes_processed: Cell::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn file_processed(&self, records: usize, bytes: u64) {
        self.files_processed.set(self.files_processed.get() + 1);
        self.records_created.set(self.records_created.get() + records);
        self.bytes_processed.set(self.bytes_processed.get() + bytes);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn file_skipped(&self) {
        self.files_skipped.set(self.files_skipped.get() + 1);
        self.bar.inc(1);
        self.update_message();
    }

    /// File could not be read or decoded, as opposed to a structural skip
    pub fn file_failed(&self) {
        self.files_failed.set(self.files_failed.get() + 1);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_with_message("Loading complete");
        }
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            files_processed: self.files_processed.get(),
            files_skipped: self.files_skipped.get(),
            files_failed: self.files_failed.get(),
            records_created: self.records_created.get(),
            total_bytes_processed: self.bytes_processed.get(),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }

    fn update_message(&self) {
        self.bar.set_message(format!(
            "Records: {} | Skipped: {} | Failed: {}",
            self.records_created.get(),
            self.files_skipped.get(),
            self.files_failed.get()
        ));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" })),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_stats_calculations() {
        let stats = PipelineStats {
            files_processed: 8,
            files_skipped: 1,
            files_failed: 1,
            records_created: 1000,
            total_bytes_processed: 4096,
            duration_secs: 2.0,
        };

        assert_eq!(stats.files_seen(), 10);
        assert_eq!(stats.records_per_second(), 500.0);
        assert!((stats.success_rate() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_pipeline_stats_zero_duration() {
        let stats = PipelineStats::new();
        assert_eq!(stats.records_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden(4);

        tracker.file_processed(24, 1024);
        tracker.file_processed(12, 512);
        tracker.file_skipped();
        tracker.file_failed();

        let stats = tracker.get_stats();
        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.files_seen(), 4);
        assert_eq!(stats.records_created, 36);
        assert_eq!(stats.total_bytes_processed, 1536);
    }
}
