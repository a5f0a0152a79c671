//! Dataset loading for the lookup engine.
//!
//! A dataset is a newline-delimited list of signed integers, read fully
//! into memory before the engine becomes queryable. Loading is strict: the
//! first unparsable line is a fatal error carrying its line number, and a
//! source with zero values is rejected outright.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DatasetError;

/// An ordered sequence of signed integers, created once at startup and
/// never mutated afterward.
///
/// The lookup algorithm assumes the values are ascending. The loader does
/// not validate or sort; feeding an out-of-order file yields incorrect
/// binary-search behavior. Keeping the source sorted is a caller
/// obligation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Wrap an already-materialized value sequence.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Load a dataset from a file of one integer per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dataset from any buffered reader of one integer per line.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DatasetError> {
        let mut values = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let value: i64 = line.parse().map_err(|_| DatasetError::InvalidLine {
                line: idx + 1,
                content: line.clone(),
            })?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the underlying value slice.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Consume the dataset, yielding its values.
    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parses_one_value_per_line() {
        let dataset = Dataset::from_reader(Cursor::new("10\n-20\n30\n")).expect("dataset");
        assert_eq!(dataset.values(), &[10, -20, 30]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(1), Some(-20));
        assert_eq!(dataset.get(3), None);
    }

    #[test]
    fn rejects_unparsable_line() {
        let err = Dataset::from_reader(Cursor::new("10\nabc\n30\n")).expect_err("bad line");
        match err {
            DatasetError::InvalidLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            other => panic!("expected InvalidLine, got {other}"),
        }
    }

    #[test]
    fn blank_line_is_an_error() {
        let err = Dataset::from_reader(Cursor::new("10\n\n30\n")).expect_err("blank line");
        assert!(matches!(err, DatasetError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn rejects_empty_input() {
        let err = Dataset::from_reader(Cursor::new("")).expect_err("empty");
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn loads_from_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "5").expect("write");
        writeln!(file, "10").expect("write");
        file.flush().expect("flush");

        let dataset = Dataset::from_path(file.path()).expect("dataset");
        assert_eq!(dataset.values(), &[5, 10]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dataset::from_path("/no/such/dataset.txt").expect_err("missing file");
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
