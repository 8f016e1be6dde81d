use serde::{Deserialize, Serialize};

use super::{or_default, required, trimmed, RecordBase, RecordStatus};
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerKind {
    Customer,
    Vendor,
}

impl std::fmt::Display for PartnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartnerKind::Customer => write!(f, "customer"),
            PartnerKind::Vendor => write!(f, "vendor"),
        }
    }
}

impl std::str::FromStr for PartnerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "customer" | "customers" => Ok(PartnerKind::Customer),
            "vendor" | "vendors" => Ok(PartnerKind::Vendor),
            _ => Err(format!("Invalid partner kind: {}", s)),
        }
    }
}

/// A customer or vendor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(flatten)]
    pub base: RecordBase,
    pub partner_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub address: String,
    pub kind: PartnerKind,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Partner {
    pub fn from_new(base: RecordBase, kind: PartnerKind, new: NewPartner) -> Self {
        Self {
            base,
            partner_id: new.partner_id,
            name: new.name,
            contact: new.contact,
            email: new.email,
            phone: new.phone,
            payment_terms: new.payment_terms,
            address: new.address,
            kind,
            status: RecordStatus::Active,
        }
    }

    /// Any stored text counts as an email, whitespace included. Drafts trim on input.
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPartner {
    pub partner_id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub payment_terms: String,
    pub address: String,
}

#[derive(Debug, Clone, Default)]
pub struct PartnerDraft {
    pub partner_id: String,
    pub name: String,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub payment_terms: Option<String>,
    pub address: Option<String>,
}

impl PartnerDraft {
    pub fn validate(self, config: &Config) -> Result<NewPartner> {
        Ok(NewPartner {
            partner_id: required(self.partner_id, "partner id")?,
            name: required(self.name, "partner name")?,
            contact: trimmed(self.contact),
            email: trimmed(self.email),
            phone: trimmed(self.phone),
            payment_terms: or_default(self.payment_terms, &config.default_payment_terms),
            address: trimmed(self.address),
        })
    }
}
