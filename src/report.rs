//! Delimited text report for the aperture inventory.
//!
//! One header row, one row per record, comma-space separated. The writer
//! owns the file handle for the duration of the write and releases it on
//! every exit path.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ApertureRecord;

/// Default report path.
pub const DEFAULT_REPORT_PATH: &str = "aperture_node_info_list.txt";

/// Column separator.
pub const REPORT_DELIMITER: &str = ", ";

/// Rendering of an absent half-extent.
pub const NULL_LITERAL: &str = "None";

/// Report columns, in write order.
pub const REPORT_COLUMNS: [&str; 9] = [
    "index",
    "name",
    "kind",
    "attachment",
    "subindex",
    "start",
    "stop",
    "size_x",
    "size_y",
];

/// Error type for report output.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report file could not be created.
    #[error("cannot open report file {path}: {source}")]
    Open {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A line could not be written.
    #[error("cannot write report file {path}: {source}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Echo behavior of the report writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verbosity {
    /// Mirror every written line to stdout.
    Verbose,
    /// Write the file only.
    #[default]
    Silent,
}

/// Writer for the aperture inventory report.
///
/// Creates or truncates the file on construction and immediately writes the
/// header row. There is no transactional discipline: a failure mid-stream
/// leaves a truncated file behind.
#[derive(Debug)]
pub struct ReportWriter {
    file: BufWriter<File>,
    path: PathBuf,
    verbosity: Verbosity,
}

impl ReportWriter {
    /// Open `path` for writing, truncating any existing file, and emit the
    /// header row.
    pub fn create(path: impl AsRef<Path>, verbosity: Verbosity) -> Result<Self, ReportError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| ReportError::Open {
            path: path.clone(),
            source,
        })?;

        let mut writer = Self {
            file: BufWriter::new(file),
            path,
            verbosity,
        };
        writer.write_line(&REPORT_COLUMNS.join(REPORT_DELIMITER))?;
        Ok(writer)
    }

    /// Open the default report path.
    pub fn create_default(verbosity: Verbosity) -> Result<Self, ReportError> {
        Self::create(DEFAULT_REPORT_PATH, verbosity)
    }

    /// Append one record row.
    pub fn write_record(&mut self, record: &ApertureRecord) -> Result<(), ReportError> {
        self.write_line(&format_record(record))
    }

    /// Flush buffered rows to disk and release the handle.
    pub fn finish(mut self) -> Result<(), ReportError> {
        self.file.flush().map_err(|source| ReportError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Path the report is written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, line: &str) -> Result<(), ReportError> {
        writeln!(self.file, "{line}").map_err(|source| ReportError::Write {
            path: self.path.clone(),
            source,
        })?;
        if self.verbosity == Verbosity::Verbose {
            println!("{line}");
        }
        Ok(())
    }
}

/// Render one record as a report row.
///
/// Every value uses its `Display` conversion; absent half-extents render as
/// [`NULL_LITERAL`]. The record's shape is carried in memory only and is not
/// a report column.
pub fn format_record(record: &ApertureRecord) -> String {
    [
        record.index.to_string(),
        record.name.clone(),
        record.kind.to_string(),
        record.attachment.to_string(),
        record.subindex.to_string(),
        record.start.to_string(),
        record.stop.to_string(),
        render_size(record.size_x),
        render_size(record.size_y),
    ]
    .join(REPORT_DELIMITER)
}

fn render_size(size: Option<f64>) -> String {
    match size {
        Some(value) => value.to_string(),
        None => NULL_LITERAL.to_string(),
    }
}
