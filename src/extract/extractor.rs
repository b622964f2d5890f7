use calamine::{open_workbook_auto_from_rs, Reader};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

lazy_static! {
    // Containment test, not a full match: a cell with surrounding text
    // still counts, and the whole cell is kept as the candidate.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Accepted spreadsheet formats, decided by file name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Xlsx,
    Xls,
    Csv,
}

impl FileKind {
    /// The file-type gate shared by both forms. The extension is whatever
    /// follows the last `.`, compared case-insensitively; names without a
    /// dot are rejected. Nothing is read from disk here.
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Reads the file fully into memory and scans its first sheet for cells
/// containing an email-shaped substring. Candidates are whole trimmed cell
/// strings in row-major encounter order, duplicates preserved. An empty
/// list is a valid outcome, not an error.
pub fn extract_emails(path: &Path, kind: FileKind) -> Result<Vec<String>, ExtractError> {
    let bytes = fs::read(path)?;
    extract_from_bytes(kind, bytes)
}

pub fn extract_from_bytes(kind: FileKind, bytes: Vec<u8>) -> Result<Vec<String>, ExtractError> {
    match kind {
        FileKind::Xlsx | FileKind::Xls => scan_workbook(bytes),
        FileKind::Csv => scan_csv(&bytes),
    }
}

fn scan_workbook(bytes: Vec<u8>) -> Result<Vec<String>, ExtractError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    // First sheet by position, never by name. A workbook with no sheets
    // has nothing to scan.
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };

    Ok(scan_rows(
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>()),
    ))
}

fn scan_csv(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Ok(scan_rows(rows))
}

/// Row 0 is scanned like any other row; there is no header convention.
pub fn scan_rows<R, C>(rows: R) -> Vec<String>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = String>,
{
    let mut candidates = Vec::new();
    for row in rows {
        for cell in row {
            if EMAIL_PATTERN.is_match(&cell) {
                candidates.push(cell.trim().to_string());
            }
        }
    }
    candidates
}
