//! Uploaded table parsing (CSV, XLSX) and CSV re-serialization.
//!
//! The parser is chosen by file extension only; content sniffing is not done.
//! Only the first worksheet of a workbook is read.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use chrono::NaiveTime;
use tracing::{debug, instrument};

use crate::domain::Table;
use crate::error::HubError;
use crate::util::file_extension;

/// Name of the artifact offered for download.
pub const CONVERTED_FILE_NAME: &str = "converted.csv";
pub const CSV_MEDIA_TYPE: &str = "text/csv";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
  Csv,
  Xlsx,
}

impl UploadKind {
  /// Upload filter: anything but .csv / .xlsx is rejected before parsing.
  pub fn from_file_name(name: &str) -> Result<Self, HubError> {
    match file_extension(name).as_str() {
      ".csv" => Ok(UploadKind::Csv),
      ".xlsx" => Ok(UploadKind::Xlsx),
      "" => Err(HubError::UnsupportedUpload(name.to_string())),
      other => Err(HubError::UnsupportedUpload(other.to_string())),
    }
  }
}

#[instrument(level = "info", skip(bytes), fields(size = bytes.len()))]
pub fn parse_upload(file_name: &str, bytes: &[u8]) -> Result<Table, HubError> {
  let table = match UploadKind::from_file_name(file_name)? {
    UploadKind::Csv => parse_csv(bytes)?,
    UploadKind::Xlsx => parse_xlsx(bytes)?,
  };
  debug!(target: "convert", columns = table.columns.len(), rows = table.rows.len(), "Upload parsed");
  Ok(table)
}

/// First record is the header; every row must be as wide as the header.
pub fn parse_csv(bytes: &[u8]) -> Result<Table, HubError> {
  let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(bytes);

  let columns: Vec<String> = rdr
    .headers()
    .map_err(|e| HubError::UnparseableUpload(e.to_string()))?
    .iter()
    .map(String::from)
    .collect();
  if columns.is_empty() {
    return Err(HubError::UnparseableUpload("no columns to parse from file".into()));
  }

  let mut rows = Vec::new();
  for rec in rdr.records() {
    let rec = rec.map_err(|e| HubError::UnparseableUpload(e.to_string()))?;
    rows.push(rec.iter().map(String::from).collect());
  }
  Ok(Table { columns, rows })
}

pub fn parse_xlsx(bytes: &[u8]) -> Result<Table, HubError> {
  let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
    .map_err(|e| HubError::UnparseableUpload(e.to_string()))?;
  let range = workbook
    .worksheet_range_at(0)
    .ok_or_else(|| HubError::UnparseableUpload("workbook has no worksheets".into()))?
    .map_err(|e| HubError::UnparseableUpload(e.to_string()))?;

  let mut cells = range.rows();
  let columns: Vec<String> = cells
    .next()
    .ok_or_else(|| HubError::UnparseableUpload("worksheet is empty".into()))?
    .iter()
    .map(cell_text)
    .collect();
  let rows = cells.map(|r| r.iter().map(cell_text).collect()).collect();
  Ok(Table { columns, rows })
}

/// Date cells are written as calendar text: `%Y-%m-%d` at midnight,
/// `%Y-%m-%d %H:%M:%S` otherwise. Serials outside chrono's range keep the number.
fn cell_text(cell: &Data) -> String {
  match cell {
    Data::Empty => String::new(),
    Data::DateTime(dt) => match dt.as_datetime() {
      Some(ndt) if ndt.time() == NaiveTime::MIN => ndt.format("%Y-%m-%d").to_string(),
      Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
      None => dt.to_string(),
    },
    other => other.to_string(),
  }
}

/// Full table as CSV bytes: header line then rows, no index column.
#[instrument(level = "info", skip(table), fields(columns = table.columns.len(), rows = table.rows.len()))]
pub fn to_csv(table: &Table) -> Result<Vec<u8>, HubError> {
  let mut w = csv::WriterBuilder::new()
    .terminator(csv::Terminator::Any(b'\n'))
    .from_writer(Vec::new());
  w.write_record(&table.columns).map_err(|e| HubError::Encode(e.to_string()))?;
  for row in &table.rows {
    w.write_record(row).map_err(|e| HubError::Encode(e.to_string()))?;
  }
  w.into_inner().map_err(|e| HubError::Encode(e.to_string()))
}

/// Leading rows for display; columns are kept whole.
pub fn preview(table: &Table, rows: usize) -> Table {
  Table {
    columns: table.columns.clone(),
    rows: table.rows.iter().take(rows).cloned().collect(),
  }
}
