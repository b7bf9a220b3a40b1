// file: src/repository/mod.rs
// description: Data folder operations module exports
// reference: Internal module structure

pub mod scanner;

pub use scanner::{FileScanner, ScannedFile};
