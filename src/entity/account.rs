use serde::{Deserialize, Serialize};

use super::{blank_as_none, or_default, required, RecordBase, RecordStatus};
use crate::config::Config;
use crate::error::{ErpStageError, Result};

pub const DEFAULT_ACCOUNT_CATEGORY: &str = "Unassigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Asset => write!(f, "Asset"),
            AccountType::Liability => write!(f, "Liability"),
            AccountType::Equity => write!(f, "Equity"),
            AccountType::Revenue => write!(f, "Revenue"),
            AccountType::Expense => write!(f, "Expense"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(AccountType::Asset),
            "liability" => Ok(AccountType::Liability),
            "equity" => Ok(AccountType::Equity),
            "revenue" => Ok(AccountType::Revenue),
            "expense" => Ok(AccountType::Expense),
            _ => Err(format!("Invalid account type: {}", s)),
        }
    }
}

/// A general ledger account in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(flatten)]
    pub base: RecordBase,
    pub number: String,
    #[serde(default)]
    pub name: String,
    /// Absent only in snapshots loaded from disk; inserts always carry a type.
    #[serde(rename = "type", default, deserialize_with = "blank_as_none")]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Account {
    pub fn from_new(base: RecordBase, new: NewAccount) -> Self {
        Self {
            base,
            number: new.number,
            name: new.name,
            account_type: new.account_type,
            category: new.category,
            currency: new.currency,
            status: RecordStatus::Active,
        }
    }
}

/// An account candidate ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub number: String,
    pub name: String,
    pub account_type: Option<AccountType>,
    pub category: String,
    pub currency: String,
}

/// Raw account input as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct AccountDraft {
    pub number: String,
    pub name: String,
    pub account_type: Option<AccountType>,
    pub category: Option<String>,
    pub currency: Option<String>,
}

impl AccountDraft {
    /// Check required fields and fill in defaults.
    pub fn validate(self, config: &Config) -> Result<NewAccount> {
        let number = required(self.number, "account number")?;
        let name = required(self.name, "account name")?;
        let account_type = self
            .account_type
            .ok_or(ErpStageError::MissingRequiredField("account type"))?;

        Ok(NewAccount {
            number,
            name,
            account_type: Some(account_type),
            category: or_default(self.category, DEFAULT_ACCOUNT_CATEGORY),
            currency: or_default(self.currency, &config.default_currency),
        })
    }
}
