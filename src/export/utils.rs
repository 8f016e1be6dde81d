//! Helpers shared by the exporters

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::Result;

/// Write content to a file, creating parent directories if needed
pub fn write_export_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "wrote export file");
    Ok(())
}

/// Format a DateTime as YYYY-MM-DD for file names
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Format a DateTime as full timestamp
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Shorten a UUID for display (first 8 chars)
pub fn short_uuid(id: &uuid::Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Dollar amount with exactly two decimals
pub fn format_price(price: &Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}
