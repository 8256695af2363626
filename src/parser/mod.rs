//! Input sources and the CSV line tokenizer

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where the CSV export is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// A CSV file on disk
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl RecordSource {
    pub fn from_file(path: PathBuf) -> Self {
        Self::File(path)
    }

    pub fn from_stdin() -> Self {
        Self::Stdin
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            RecordSource::File(path) => format!("file: {}", path.display()),
            RecordSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            RecordSource::File(path) => path.exists() && path.is_file(),
            RecordSource::Stdin => true,
        }
    }

    /// Open the source as a buffered line reader
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            RecordSource::File(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
            RecordSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Split one CSV line into its fields, honoring double-quote rules.
///
/// Quoted fields may contain commas; an escaped quote ("") inside a quoted
/// field yields one literal quote. An unterminated quote is not an error:
/// scanning simply runs to the end of the line. The returned vector always
/// holds at least one field, even for a line with no commas.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buffer = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote "" inside a quoted field
                buffer.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut buffer));
            }
            _ => buffer.push(c),
        }
    }
    // Last field, after the last comma or when the line had none
    fields.push(buffer);
    fields
}
