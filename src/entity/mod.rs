mod account;
mod issue;
mod item;
mod partner;

pub use account::{Account, AccountDraft, AccountType, NewAccount};
pub use issue::{Issue, IssueKind, Severity};
pub use item::{Item, ItemDraft, ItemType, NewItem};
pub use partner::{NewPartner, Partner, PartnerDraft, PartnerKind};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{ErpStageError, Result};

/// Generate a fresh record identifier.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Fields shared by every stored record. Both are assigned once and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBase {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl RecordBase {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecordStatus {
    #[default]
    Active,
    #[serde(rename = "Low Stock")]
    LowStock,
}

impl RecordStatus {
    /// Stock at or below the reorder point is low, including 0/0.
    pub fn for_stock(stock: u32, reorder_point: u32) -> Self {
        if stock <= reorder_point {
            RecordStatus::LowStock
        } else {
            RecordStatus::Active
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "Active"),
            RecordStatus::LowStock => write!(f, "Low Stock"),
        }
    }
}

/// The four record collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Accounts,
    Customers,
    Vendors,
    Items,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Accounts,
        Collection::Customers,
        Collection::Vendors,
        Collection::Items,
    ];

    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Accounts => "Account",
            Collection::Customers => "Customer",
            Collection::Vendors => "Vendor",
            Collection::Items => "Item",
        }
    }
}

impl From<PartnerKind> for Collection {
    fn from(kind: PartnerKind) -> Self {
        match kind {
            PartnerKind::Customer => Collection::Customers,
            PartnerKind::Vendor => Collection::Vendors,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Accounts => write!(f, "accounts"),
            Collection::Customers => write!(f, "customers"),
            Collection::Vendors => write!(f, "vendors"),
            Collection::Items => write!(f, "items"),
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "account" | "accounts" => Ok(Collection::Accounts),
            "customer" | "customers" => Ok(Collection::Customers),
            "vendor" | "vendors" => Ok(Collection::Vendors),
            "item" | "items" => Ok(Collection::Items),
            _ => Err(format!("Unknown collection: {}", s)),
        }
    }
}

/// Trim a required text field, rejecting it when nothing is left.
pub(crate) fn required(value: String, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ErpStageError::MissingRequiredField(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, falling back when it is absent or blank.
pub(crate) fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Deserialize an enum stored as text, treating a blank string like a missing value.
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
