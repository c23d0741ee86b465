use std::path::{Path, PathBuf};

use error_stack::{Result, ResultExt};

use crate::domain::error::UploadError;
use crate::domain::source::{ActiveSource, Sheet};
use crate::domain::table::Table;
use crate::infrastructure::config::workbook_config::WorkbookConfig;

const SHEET_EXTENSION: &str = "csv";

/// A source document backed by a directory: every `<name>.csv` in it is a
/// sheet called `<name>`.
#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    directory: PathBuf,
    document_id: String,
}

impl CsvWorkbook {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(directory: P, document_id: S) -> Self {
        CsvWorkbook {
            directory: directory.into(),
            document_id: document_id.into(),
        }
    }

    pub fn from_config(config: &WorkbookConfig) -> Self {
        let document_id = match &config.document_id {
            Some(id) => id.to_string(),
            None => directory_name(&config.directory),
        };
        Self::new(config.directory.clone(), document_id)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

fn directory_name(directory: &Path) -> String {
    std::fs::canonicalize(directory)
        .ok()
        .as_deref()
        .unwrap_or(directory)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.to_string_lossy().into_owned())
}

impl ActiveSource for CsvWorkbook {
    type Sheet = CsvSheet;

    fn sheet_by_name(&self, name: &str) -> Option<CsvSheet> {
        let path = self.directory.join(format!("{name}.{SHEET_EXTENSION}"));
        if path.is_file() {
            Some(CsvSheet {
                name: name.to_string(),
                path,
            })
        } else {
            log::debug!("No sheet '{}' at {}", name, path.display());
            None
        }
    }

    fn document_id(&self) -> &str {
        &self.document_id
    }
}

#[derive(Debug, Clone)]
pub struct CsvSheet {
    name: String,
    path: PathBuf,
}

impl Sheet for CsvSheet {
    fn name(&self) -> &str {
        &self.name
    }

    /// Every record of the file, header included. Records keep their own
    /// length. Blank lines between records become rows of empty cells, since
    /// the csv reader skips them; trailing records with no content are
    /// dropped, the same way a spreadsheet's data range stops at the last
    /// populated row.
    fn data_range(&self) -> Result<Table, UploadError> {
        let read_error = || UploadError::SourceRead {
            sheet: self.name.clone(),
        };

        let data = std::fs::read(&self.path)
            .change_context_lazy(read_error)
            .attach_printable_lazy(|| format!("Failed to open {}", self.path.display()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut record = csv::StringRecord::new();
        loop {
            let record_start = reader.position().byte() as usize;
            let found = reader
                .read_record(&mut record)
                .change_context_lazy(read_error)
                .attach_printable_lazy(|| format!("Failed to decode {}", self.path.display()))?;
            if !found {
                break;
            }

            let blank_lines = blank_lines_before_record(&data, record_start, !rows.is_empty());
            let width = rows.first().map_or(record.len(), Vec::len);
            rows.extend(std::iter::repeat(vec![String::new(); width]).take(blank_lines));
            rows.push(record.iter().map(String::from).collect());
        }

        while rows
            .last()
            .is_some_and(|row| row.iter().all(|cell| cell.is_empty()))
        {
            rows.pop();
        }

        log::trace!("Read {} rows from sheet '{}'", rows.len(), self.name);
        Ok(Table::new(rows))
    }
}

/// Counts the empty lines the csv reader skipped between `start`, where the
/// previous read stopped, and the next record.
///
/// The reader consumes a record's terminator with the record, except for the
/// `\n` of a `\r\n` pair, which is left for the next read.
fn blank_lines_before_record(data: &[u8], start: usize, after_record: bool) -> usize {
    let mut cursor = start;
    if after_record && start > 0 && data[start - 1] == b'\r' && data.get(start) == Some(&b'\n') {
        cursor += 1;
    }

    let mut blank_lines = 0;
    loop {
        let rest = data.get(cursor..).unwrap_or_default();
        let line_break = match rest {
            [b'\r', b'\n', ..] => 2,
            [b'\r', ..] | [b'\n', ..] => 1,
            _ => break,
        };
        cursor += line_break;
        blank_lines += 1;
    }
    blank_lines
}
