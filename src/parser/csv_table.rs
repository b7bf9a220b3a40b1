// file: src/parser/csv_table.rs
// description: csv parsing into a header row and string cells
// reference: https://docs.rs/csv

use crate::error::Result;
use csv::{ReaderBuilder, Trim};

pub struct CsvParser;

#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            // short rows are padded so every row indexes like the header
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
            rows.push(row);
        }

        Ok(CsvTable { headers, rows })
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers_and_rows() {
        let content = "STATION_NAME, January ,February\nDarwin,29.1,28.7\nHobart,17.2,17.0\n";
        let table = CsvParser::new().parse(content).unwrap();

        assert_eq!(table.headers, vec!["STATION_NAME", "January", "February"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][0], "Hobart");
        assert_eq!(table.column_index("January"), Some(1));
        assert_eq!(table.column_index("March"), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let content = "Station,January,February\nAlice Springs,28.9\n";
        let table = CsvParser::new().parse(content).unwrap();
        assert_eq!(table.rows[0], vec!["Alice Springs", "28.9", ""]);
    }

    #[test]
    fn test_quoted_station_names() {
        let content = "Station,January\n\"Perth, Airport\",24.5\n";
        let table = CsvParser::new().parse(content).unwrap();
        assert_eq!(table.rows[0][0], "Perth, Airport");
    }

    #[test]
    fn test_header_only() {
        let table = CsvParser::new().parse("Station,January\n").unwrap();
        assert!(table.is_empty());
    }
}
