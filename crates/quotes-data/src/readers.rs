//! File readers feeding the normalizer.

use csv::{ReaderBuilder, Trim};
use quotes_core::error::DataError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::chart::ChartResponse;

/// Read a CSV file into raw rows.
///
/// The header is not interpreted: it comes back as row 0, which is what
/// `normalize_rows` expects. Field counts are not enforced here.
pub fn read_csv_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, DataError> {
    let file = File::open(path.as_ref())?;
    read_csv_rows_from_reader(file)
}

/// Read CSV rows from any reader.
pub fn read_csv_rows_from_reader<R: Read>(reader: R) -> Result<Vec<Vec<String>>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| DataError::Decode(e.to_string()))
        })
        .collect()
}

/// Read a saved chart response from a JSON file.
pub fn read_chart_json(path: impl AsRef<Path>) -> Result<ChartResponse, DataError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    ChartResponse::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_rows_keeps_header() {
        let text = "Date,Open,High,Low,Close,Volume\n2024-01-02,10,12,9,11,1000\n";
        let rows = read_csv_rows_from_reader(text.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Date");
        assert_eq!(rows[1], vec!["2024-01-02", "10", "12", "9", "11", "1000"]);
    }

    #[test]
    fn test_read_csv_rows_is_flexible() {
        let text = "Date,Open\n2024-01-02, 10 ,12\n";
        let rows = read_csv_rows_from_reader(text.as_bytes()).unwrap();

        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1], vec!["2024-01-02", "10", "12"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_csv_rows("/definitely/not/here.csv");
        assert!(matches!(result, Err(DataError::Io(_))));

        let result = read_chart_json("/definitely/not/here.json");
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
