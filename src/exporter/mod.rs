// file: src/exporter/mod.rs
// description: report output module exports
// reference: internal module structure

pub mod json;
pub mod text;

pub use json::{ExportManifest, JsonExporter};
pub use text::TextReportWriter;
