//! Markdown configuration document

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::storage::RecordStore;
use crate::Result;

use super::utils::{format_date, format_price, format_timestamp, write_export_file};

const ACCOUNT_LIMIT: usize = 15;
const CUSTOMER_LIMIT: usize = 10;
const ITEM_LIMIT: usize = 10;

/// Render the document body.
pub fn render(store: &RecordStore, now: &DateTime<Utc>) -> String {
    let mut doc = String::new();

    doc.push_str("# ERP Configuration Documentation\n\n");
    doc.push_str(&format!("Generated: {}\n\n", format_timestamp(now)));

    doc.push_str("## Configuration Summary\n\n");
    doc.push_str(&format!("- Accounts: {}\n", store.accounts().len()));
    doc.push_str(&format!("- Customers: {}\n", store.customers().len()));
    doc.push_str(&format!("- Vendors: {}\n", store.vendors().len()));
    doc.push_str(&format!("- Items: {}\n", store.items().len()));
    doc.push_str(&format!("- Validation Issues: {}\n", store.issues().len()));

    if !store.accounts().is_empty() {
        doc.push_str("\n## Chart of Accounts\n\n");
        for account in store.accounts().iter().take(ACCOUNT_LIMIT) {
            let account_type = account
                .account_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "Unspecified".to_string());
            doc.push_str(&format!(
                "- {} - {} ({})\n",
                account.number, account.name, account_type
            ));
        }
        doc.push_str(&more_line(store.accounts().len(), ACCOUNT_LIMIT, "accounts"));
    }

    if !store.customers().is_empty() {
        doc.push_str("\n## Customers\n\n");
        for customer in store.customers().iter().take(CUSTOMER_LIMIT) {
            let email = if customer.has_email() {
                customer.email.as_str()
            } else {
                "No email"
            };
            doc.push_str(&format!(
                "- {} - {} ({})\n",
                customer.partner_id, customer.name, email
            ));
        }
        doc.push_str(&more_line(store.customers().len(), CUSTOMER_LIMIT, "customers"));
    }

    if !store.items().is_empty() {
        doc.push_str("\n## Items\n\n");
        for item in store.items().iter().take(ITEM_LIMIT) {
            doc.push_str(&format!(
                "- {} - {} ({})\n",
                item.item_no,
                item.description,
                format_price(&item.unit_price)
            ));
        }
        doc.push_str(&more_line(store.items().len(), ITEM_LIMIT, "items"));
    }

    doc
}

/// Trailer for a truncated list, empty when nothing was cut.
fn more_line(total: usize, limit: usize, things: &str) -> String {
    if total > limit {
        format!("- ... and {} more {}\n", total - limit, things)
    } else {
        String::new()
    }
}

/// Write `erpstage-documentation-YYYY-MM-DD.md` into the export directory.
pub fn generate(store: &RecordStore, export_dir: &Path, now: &DateTime<Utc>) -> Result<PathBuf> {
    let path = export_dir.join(format!("erpstage-documentation-{}.md", format_date(now)));
    write_export_file(&path, &render(store, now))?;
    tracing::info!(path = %path.display(), "exported documentation");
    Ok(path)
}
