//! Line-oriented `<name> <size>` record reader.
//!
//! Input lists look like:
//!
//! ```text
//! # name      size
//! movie.mkv   4096
//! notes.txt   12
//! ```
//!
//! Lines starting with `#` are comments, blank lines are skipped, and every
//! other line must hold exactly two whitespace-separated fields.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Record;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("cannot open input file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("issues while reading '{source_name}' at line {line}: {reason}")]
    Read {
        source_name: String,
        line: usize,
        reason: std::io::Error,
    },

    #[error("too many fields in '{source_name}' at line {line}: {content}")]
    TooManyFields {
        source_name: String,
        line: usize,
        content: String,
    },

    #[error("missing size in '{source_name}' at line {line}: {content}")]
    MissingSize {
        source_name: String,
        line: usize,
        content: String,
    },

    #[error("size is negative in '{source_name}' at line {line}: {content}")]
    NegativeSize {
        source_name: String,
        line: usize,
        content: String,
    },

    #[error("size is not a non-negative integer in '{source_name}' at line {line}: {content}")]
    InvalidSize {
        source_name: String,
        line: usize,
        content: String,
    },
}

impl RecordError {
    /// 1-based line number of the faulty record, if the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            RecordError::Io { .. } => None,
            RecordError::Read { line, .. }
            | RecordError::TooManyFields { line, .. }
            | RecordError::MissingSize { line, .. }
            | RecordError::NegativeSize { line, .. }
            | RecordError::InvalidSize { line, .. } => Some(*line),
        }
    }
}

/// Read all records from the file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<Record>, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(BufReader::new(file), &path.display().to_string())
}

/// Parse records from any buffered reader. `source` names the input in errors.
pub fn parse_records<R: BufRead>(reader: R, source: &str) -> Result<Vec<Record>, RecordError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|reason| RecordError::Read {
            source_name: source.to_string(),
            line: line_no,
            reason,
        })?;

        if let Some(record) = parse_line(&line, source, line_no)? {
            records.push(record);
        }
    }

    Ok(records)
}

fn parse_line(line: &str, source: &str, line_no: usize) -> Result<Option<Record>, RecordError> {
    if line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let Some(name) = fields.next() else {
        return Ok(None);
    };

    let size = fields.next();
    if fields.next().is_some() {
        return Err(RecordError::TooManyFields {
            source_name: source.to_string(),
            line: line_no,
            content: line.to_string(),
        });
    }

    let Some(size) = size else {
        return Err(RecordError::MissingSize {
            source_name: source.to_string(),
            line: line_no,
            content: line.to_string(),
        });
    };

    let size = match size.parse::<u64>() {
        Ok(size) => size,
        Err(_) => match size.parse::<i64>() {
            Ok(signed) if signed < 0 => {
                return Err(RecordError::NegativeSize {
                    source_name: source.to_string(),
                    line: line_no,
                    content: line.to_string(),
                });
            }
            // "-0"
            Ok(signed) => signed.unsigned_abs(),
            Err(_) => {
                return Err(RecordError::InvalidSize {
                    source_name: source.to_string(),
                    line: line_no,
                    content: line.to_string(),
                });
            }
        },
    };

    Ok(Some(Record::new(name, size)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn parse(input: &str) -> Result<Vec<Record>, RecordError> {
        parse_records(Cursor::new(input), "test")
    }

    #[test]
    fn test_parse_plain_records() {
        let records = parse("a 10\nb 20\n").unwrap();
        assert_eq!(records, vec![Record::new("a", 10), Record::new("b", 20)]);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let records = parse("# header\n\n   \na 1\n#b 2\n\tc\t3  \n").unwrap();
        assert_eq!(records, vec![Record::new("a", 1), Record::new("c", 3)]);
    }

    #[test]
    fn test_zero_size_is_valid() {
        let records = parse("empty 0\n").unwrap();
        assert_eq!(records[0].size, 0);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let records = parse("a 1\na 2\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_rejects_third_field() {
        let err = parse("a 1\nb 2 extra\n").unwrap_err();
        assert!(matches!(err, RecordError::TooManyFields { line: 2, .. }));
        assert!(err.to_string().contains("b 2 extra"));
    }

    #[test]
    fn test_rejects_missing_size() {
        let err = parse("lonely\n").unwrap_err();
        assert!(matches!(err, RecordError::MissingSize { line: 1, .. }));
    }

    #[test]
    fn test_rejects_negative_size() {
        let err = parse("# c\nneg -5\n").unwrap_err();
        assert!(matches!(err, RecordError::NegativeSize { .. }));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        let err = parse("a ten\n").unwrap_err();
        assert!(matches!(err, RecordError::InvalidSize { .. }));

        let err = parse("a 12kb\n").unwrap_err();
        assert!(matches!(err, RecordError::InvalidSize { .. }));
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nodes").unwrap();
        writeln!(file, "n1 100").unwrap();
        writeln!(file, "n2 50").unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records, vec![Record::new("n1", 100), Record::new("n2", 50)]);
    }

    #[test]
    fn test_read_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, RecordError::Io { .. }));
        assert_eq!(err.line(), None);
    }
}
