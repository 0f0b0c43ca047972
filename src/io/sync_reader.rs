//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<OperationRecord, ReplayError>` for each CSV row:
//!
//! ```no_run
//! use rust_wallet::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Replaying operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants carrying the line
//!   number (counting the header as line 1)

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{OperationRecord, ReplayError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one row at a time; memory use does not grow with the file.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and allows rows without
    /// the amount column.
    ///
    /// # Errors
    ///
    /// - `ReplayError::FileNotFound` if the path does not exist
    /// - `ReplayError::Io` for any other open failure
    pub fn new(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReplayError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ReplayError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<OperationRecord, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;
        self.line_num += 1;

        let result = next
            .map_err(ReplayError::from)
            .and_then(convert_csv_record)
            .map_err(|e| e.at_line(self.line_num));

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bitcoin, OperationType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_reader_new_opens_file() {
        let file = create_temp_csv("type,amount\ndeposit,100.0\n");
        assert!(SyncReader::new(file.path()).is_ok());
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert_eq!(
            result.unwrap_err(),
            ReplayError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_sync_reader_iterates_records() {
        let file = create_temp_csv("type,amount\ndeposit,100.0\nwithdraw,50.0\nbalance,\n");

        let records: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            records,
            vec![
                OperationRecord::deposit(Bitcoin::from(100)),
                OperationRecord::withdraw(Bitcoin::from(50)),
                OperationRecord::balance(),
            ]
        );
    }

    #[test]
    fn test_sync_reader_accepts_rows_without_amount_column() {
        let file = create_temp_csv("type,amount\nbalance\ndeposit,1\n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_ref().unwrap().op, OperationType::Balance);
        assert!(records[1].is_ok());
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv("type,amount\ndeposit,100.0\ndeposit,invalid\ndeposit,50.0\n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());
        // Line 3 because of header
        assert!(matches!(
            records[1],
            Err(ReplayError::InvalidRecord { line: Some(3), .. })
        ));
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let file = create_temp_csv("type,amount\n  withdrawal  ,  100.0  \n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(
            records[0].as_ref().unwrap(),
            &OperationRecord::withdraw(Bitcoin::from(100))
        );
    }

    #[test]
    fn test_sync_reader_empty_file_yields_nothing() {
        let file = create_temp_csv("type,amount\n");
        assert_eq!(SyncReader::new(file.path()).unwrap().count(), 0);
    }
}
