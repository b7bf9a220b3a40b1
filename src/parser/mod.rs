// file: src/parser/mod.rs
// description: csv parsing and reshaping module exports
// reference: internal module structure

pub mod csv_table;
pub mod reshaper;

pub use csv_table::{CsvParser, CsvTable};
pub use reshaper::{ReshapeOutcome, Reshaper};
