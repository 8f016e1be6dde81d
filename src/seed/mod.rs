//! Template application and test-data generation.
//!
//! Templates replace the whole store. Test data only tops up sparse collections and never
//! touches a record whose natural key already exists.

pub mod catalog;

pub use catalog::{Template, TestDataSeed, TEMPLATE_KEYS};

use tracing::info;

use crate::entity::PartnerKind;
use crate::error::{ErpStageError, Result};
use crate::storage::RecordStore;

/// Accounts are topped up only while fewer than this many exist.
pub const ACCOUNT_TOP_UP_BELOW: usize = 5;
/// Customers are topped up only while fewer than this many exist.
pub const CUSTOMER_TOP_UP_BELOW: usize = 3;
/// Items are topped up only while fewer than this many exist.
pub const ITEM_TOP_UP_BELOW: usize = 3;

/// Records inserted by one `generate_test_data` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub accounts: usize,
    pub customers: usize,
    pub items: usize,
}

impl SeedOutcome {
    pub fn total(&self) -> usize {
        self.accounts + self.customers + self.items
    }

    /// Nothing qualified for insertion. Not a failure.
    pub fn is_noop(&self) -> bool {
        self.total() == 0
    }
}

/// Replace the store with the records of a named template.
///
/// An unknown name fails before anything is cleared.
pub fn apply_template(store: &mut RecordStore, name: &str) -> Result<Template> {
    let template =
        catalog::template(name).ok_or_else(|| ErpStageError::TemplateNotFound(name.to_string()))?;

    store.replace_all(
        template.accounts.clone(),
        template.customers.clone(),
        template.vendors.clone(),
        template.items.clone(),
    )?;

    info!(template = template.key, "applied template");
    Ok(template)
}

/// Top up sparse collections from the built-in test-data seed.
pub fn generate_test_data(store: &mut RecordStore) -> Result<SeedOutcome> {
    if store.is_empty() {
        return Err(ErpStageError::InsufficientContext);
    }

    let seed = catalog::test_data();
    let mut outcome = SeedOutcome::default();

    if store.accounts().len() < ACCOUNT_TOP_UP_BELOW {
        for account in seed.accounts {
            if !store.has_account_number(&account.number) {
                store.insert_account(account)?;
                outcome.accounts += 1;
            }
        }
    }

    if store.customers().len() < CUSTOMER_TOP_UP_BELOW {
        for customer in seed.customers {
            if !store.has_partner_id(PartnerKind::Customer, &customer.partner_id) {
                store.insert_partner(PartnerKind::Customer, customer)?;
                outcome.customers += 1;
            }
        }
    }

    if store.items().len() < ITEM_TOP_UP_BELOW {
        for item in seed.items {
            if !store.has_item_no(&item.item_no) {
                store.insert_item(item)?;
                outcome.items += 1;
            }
        }
    }

    info!(
        accounts = outcome.accounts,
        customers = outcome.customers,
        items = outcome.items,
        "generated test data"
    );
    Ok(outcome)
}
