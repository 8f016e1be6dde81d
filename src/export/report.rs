//! Validation report and custom template JSON files

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::{Account, Issue, Item, Partner};
use crate::storage::RecordStore;
use crate::validation::IssueCounts;
use crate::{ErpStageError, Result};

use super::utils::write_export_file;

pub const CUSTOM_TEMPLATE_NAME: &str = "Custom Template";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport<'a> {
    generated_at: DateTime<Utc>,
    total_issues: usize,
    errors: usize,
    warnings: usize,
    issues: &'a [Issue],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomTemplate<'a> {
    name: &'a str,
    saved_at: DateTime<Utc>,
    accounts: &'a [Account],
    customers: &'a [Partner],
    vendors: &'a [Partner],
    items: &'a [Item],
}

/// Write the current issue list as `validation-report-<millis>.json`.
pub fn generate_validation_report(
    store: &RecordStore,
    export_dir: &Path,
    now: &DateTime<Utc>,
) -> Result<PathBuf> {
    let issues = store.issues();
    if issues.is_empty() {
        return Err(ErpStageError::NoIssuesToExport);
    }

    let counts = IssueCounts::of(issues);
    let report = ValidationReport {
        generated_at: *now,
        total_issues: counts.total(),
        errors: counts.errors,
        warnings: counts.warnings,
        issues,
    };

    let path = export_dir.join(format!("validation-report-{}.json", now.timestamp_millis()));
    write_export_file(&path, &serde_json::to_string_pretty(&report)?)?;
    tracing::info!(path = %path.display(), issues = counts.total(), "exported validation report");
    Ok(path)
}

/// Save the four collections as `erpstage-template-<millis>.json`.
pub fn generate_custom_template(
    store: &RecordStore,
    export_dir: &Path,
    now: &DateTime<Utc>,
) -> Result<PathBuf> {
    let template = CustomTemplate {
        name: CUSTOM_TEMPLATE_NAME,
        saved_at: *now,
        accounts: store.accounts(),
        customers: store.customers(),
        vendors: store.vendors(),
        items: store.items(),
    };

    let path = export_dir.join(format!("erpstage-template-{}.json", now.timestamp_millis()));
    write_export_file(&path, &serde_json::to_string_pretty(&template)?)?;
    tracing::info!(path = %path.display(), "saved custom template");
    Ok(path)
}
