//! Spreadsheet export: one CSV sheet per non-empty collection plus a summary sheet

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::entity::{Partner, PartnerKind};
use crate::storage::RecordStore;
use crate::Result;

use super::utils::format_date;
use super::GeneratedFile;

const ACCOUNT_HEADERS: [&str; 6] = [
    "Account Number",
    "Account Name",
    "Type",
    "Category",
    "Currency",
    "Status",
];

const ITEM_HEADERS: [&str; 9] = [
    "Item Number",
    "Description",
    "Type",
    "Category",
    "Unit Price",
    "UOM",
    "Reorder Point",
    "Stock",
    "Status",
];

fn partner_headers(kind: PartnerKind) -> [&'static str; 8] {
    let id_header = match kind {
        PartnerKind::Customer => "Customer ID",
        PartnerKind::Vendor => "Vendor ID",
    };
    [
        id_header,
        "Name",
        "Contact Person",
        "Email",
        "Phone",
        "Payment Terms",
        "Address",
        "Status",
    ]
}

/// Write the workbook directory. Returns the directory and the sheets written.
pub fn generate(
    store: &RecordStore,
    export_dir: &Path,
    now: &DateTime<Utc>,
) -> Result<(PathBuf, Vec<GeneratedFile>)> {
    let workbook = export_dir.join(format!("erpstage-export-{}", format_date(now)));
    fs::create_dir_all(&workbook)?;

    let mut sheets = Vec::new();

    if !store.accounts().is_empty() {
        let path = workbook.join("chart-of-accounts.csv");
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(ACCOUNT_HEADERS)?;
        for account in store.accounts() {
            let account_type = account
                .account_type
                .map(|t| t.to_string())
                .unwrap_or_default();
            let status = account.status.to_string();
            writer.write_record([
                account.number.as_str(),
                account.name.as_str(),
                account_type.as_str(),
                account.category.as_str(),
                account.currency.as_str(),
                status.as_str(),
            ])?;
        }
        writer.flush()?;
        sheets.push(GeneratedFile {
            relative_path: "chart-of-accounts.csv".to_string(),
            entity_count: store.accounts().len(),
        });
    }

    for kind in [PartnerKind::Customer, PartnerKind::Vendor] {
        let partners = store.partners(kind);
        if partners.is_empty() {
            continue;
        }
        let file_name = format!("{}s.csv", kind);
        write_partner_sheet(&workbook.join(&file_name), kind, partners)?;
        sheets.push(GeneratedFile {
            relative_path: file_name,
            entity_count: partners.len(),
        });
    }

    if !store.items().is_empty() {
        let path = workbook.join("items.csv");
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(ITEM_HEADERS)?;
        for item in store.items() {
            writer.write_record([
                item.item_no.clone(),
                item.description.clone(),
                item.item_type.to_string(),
                item.category.clone(),
                item.unit_price.to_string(),
                item.uom.clone(),
                item.reorder_point.to_string(),
                item.stock.to_string(),
                item.status.to_string(),
            ])?;
        }
        writer.flush()?;
        sheets.push(GeneratedFile {
            relative_path: "items.csv".to_string(),
            entity_count: store.items().len(),
        });
    }

    let mut writer = csv::Writer::from_path(workbook.join("summary.csv"))?;
    writer.write_record(["Metric", "Value"])?;
    let rows = [
        ("Total Accounts", store.accounts().len().to_string()),
        ("Total Customers", store.customers().len().to_string()),
        ("Total Vendors", store.vendors().len().to_string()),
        ("Total Items", store.items().len().to_string()),
        ("Validation Issues", store.issues().len().to_string()),
        ("Export Date", format_date(now)),
    ];
    for (metric, value) in &rows {
        writer.write_record([*metric, value.as_str()])?;
    }
    writer.flush()?;
    sheets.push(GeneratedFile {
        relative_path: "summary.csv".to_string(),
        entity_count: 0,
    });

    tracing::info!(path = %workbook.display(), sheets = sheets.len(), "exported spreadsheet");
    Ok((workbook, sheets))
}

fn write_partner_sheet(path: &Path, kind: PartnerKind, partners: &[Partner]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(partner_headers(kind))?;
    for partner in partners {
        let status = partner.status.to_string();
        writer.write_record([
            partner.partner_id.as_str(),
            partner.name.as_str(),
            partner.contact.as_str(),
            partner.email.as_str(),
            partner.phone.as_str(),
            partner.payment_terms.as_str(),
            partner.address.as_str(),
            status.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
