//! Export generation
//!
//! Writes derived files from the record store into the export directory. Exports only read
//! the store.

mod document;
mod report;
mod spreadsheet;
pub mod utils;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::storage::RecordStore;
use crate::{ErpStageError, Result};

pub use self::report::CUSTOM_TEMPLATE_NAME;
pub use self::utils::{format_date, format_price, format_timestamp, short_uuid};

/// One file written by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: String,
    pub entity_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Spreadsheet,
    Documentation,
    ValidationReport,
    CustomTemplate,
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportKind::Spreadsheet => write!(f, "spreadsheet"),
            ExportKind::Documentation => write!(f, "docs"),
            ExportKind::ValidationReport => write!(f, "report"),
            ExportKind::CustomTemplate => write!(f, "template"),
        }
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spreadsheet" | "excel" | "csv" => Ok(ExportKind::Spreadsheet),
            "docs" | "documentation" | "pdf" => Ok(ExportKind::Documentation),
            "report" | "validation" => Ok(ExportKind::ValidationReport),
            "template" => Ok(ExportKind::CustomTemplate),
            _ => Err(format!("Invalid export kind: {}", s)),
        }
    }
}

/// What an export produced
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub kind: ExportKind,
    /// File, or directory for the spreadsheet workbook
    pub path: PathBuf,
    pub files: Vec<GeneratedFile>,
}

/// Run one export into `export_dir`.
///
/// Record exports decline with `NothingToExport` when the store holds no records. The
/// validation report only needs issues, which an empty store can have.
pub fn export(
    store: &RecordStore,
    kind: ExportKind,
    export_dir: &Path,
    now: &DateTime<Utc>,
) -> Result<ExportOutcome> {
    if kind != ExportKind::ValidationReport && store.is_empty() {
        return Err(ErpStageError::NothingToExport);
    }

    let (path, files) = match kind {
        ExportKind::Spreadsheet => spreadsheet::generate(store, export_dir, now)?,
        ExportKind::Documentation => single(document::generate(store, export_dir, now)?),
        ExportKind::ValidationReport => {
            single(report::generate_validation_report(store, export_dir, now)?)
        }
        ExportKind::CustomTemplate => {
            single(report::generate_custom_template(store, export_dir, now)?)
        }
    };

    Ok(ExportOutcome { kind, path, files })
}

fn single(path: PathBuf) -> (PathBuf, Vec<GeneratedFile>) {
    let relative_path = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let files = vec![GeneratedFile {
        relative_path,
        entity_count: 1,
    }];
    (path, files)
}
