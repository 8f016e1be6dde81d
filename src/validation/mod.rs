//! Rule-based validation over the record store.
//!
//! `validate_all` rebuilds the issue list from scratch on every call. Output order is fixed:
//! accounts, then partners, then items, each scanner emitting its rules in declaration order.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::entity::{Account, AccountType, Issue, Item, ItemType, Partner, Severity};
use crate::storage::RecordStore;

pub const ACCOUNTS_MODULE: &str = "Chart of Accounts";
pub const PARTNERS_MODULE: &str = "Customers/Vendors";
pub const CUSTOMERS_MODULE: &str = "Customers";
pub const ITEMS_MODULE: &str = "Items";

/// Error and warning totals for a list of issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl IssueCounts {
    pub fn of(issues: &[Issue]) -> Self {
        let errors = issues.iter().filter(|i| i.is_error()).count();
        Self {
            errors,
            warnings: issues.len() - errors,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}

impl fmt::Display for IssueCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Errors | {} Warnings", self.errors, self.warnings)
    }
}

/// Run every scanner, replace the store's issues and return a copy of them.
pub fn validate_all(store: &mut RecordStore) -> Vec<Issue> {
    let issues = scan(store);
    let counts = IssueCounts::of(&issues);
    info!(errors = counts.errors, warnings = counts.warnings, "validation finished");
    store.set_issues(issues.clone());
    issues
}

/// Compute issues without touching the store.
pub fn scan(store: &RecordStore) -> Vec<Issue> {
    let mut issues = Vec::new();
    scan_accounts(store.accounts(), &mut issues);
    scan_partners(store.customers(), store.vendors(), &mut issues);
    scan_items(store.items(), &mut issues);
    issues
}

/// Every key after its first occurrence, in order. A key seen three times yields two entries.
fn repeated_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|key| !seen.insert(*key)).collect()
}

fn scan_accounts(accounts: &[Account], issues: &mut Vec<Issue>) {
    for number in repeated_keys(accounts.iter().map(|a| a.number.as_str())) {
        issues.push(Issue::error(
            ACCOUNTS_MODULE,
            format!("Duplicate account number: {}", number),
        ));
    }

    for account in accounts.iter().filter(|a| a.account_type.is_none()) {
        issues.push(Issue::error(
            ACCOUNTS_MODULE,
            format!(
                "Account {} - {} is missing account type",
                account.number, account.name
            ),
        ));
    }

    let has_type = |wanted: AccountType| accounts.iter().any(|a| a.account_type == Some(wanted));

    if !has_type(AccountType::Asset) {
        issues.push(Issue::warning(
            ACCOUNTS_MODULE,
            "No Asset accounts configured. You should add at least one Asset account.".to_string(),
            Severity::Medium,
        ));
    }

    if !has_type(AccountType::Revenue) {
        issues.push(Issue::warning(
            ACCOUNTS_MODULE,
            "No Revenue accounts configured. Add revenue accounts for sales tracking.".to_string(),
            Severity::Medium,
        ));
    }
}

/// Duplicates are checked across customers and vendors together.
fn scan_partners(customers: &[Partner], vendors: &[Partner], issues: &mut Vec<Issue>) {
    let pool = customers.iter().chain(vendors.iter());
    for partner_id in repeated_keys(pool.map(|p| p.partner_id.as_str())) {
        issues.push(Issue::error(
            PARTNERS_MODULE,
            format!("Duplicate partner ID: {}", partner_id),
        ));
    }

    for customer in customers.iter().filter(|c| !c.has_email()) {
        issues.push(Issue::warning(
            CUSTOMERS_MODULE,
            format!("Customer {} has no email address", customer.name),
            Severity::Low,
        ));
    }
}

fn scan_items(items: &[Item], issues: &mut Vec<Issue>) {
    for item_no in repeated_keys(items.iter().map(|i| i.item_no.as_str())) {
        issues.push(Issue::error(
            ITEMS_MODULE,
            format!("Duplicate item number: {}", item_no),
        ));
    }

    for item in items
        .iter()
        .filter(|i| i.item_type == ItemType::Inventory && i.is_low_stock())
    {
        issues.push(Issue::warning(
            ITEMS_MODULE,
            format!(
                "Item {} - {} is at or below reorder point (Stock: {}, Reorder: {})",
                item.item_no, item.description, item.stock, item.reorder_point
            ),
            Severity::Medium,
        ));
    }

    for item in items.iter().filter(|i| i.unit_price.is_zero()) {
        issues.push(Issue::warning(
            ITEMS_MODULE,
            format!(
                "Item {} - {} has no unit price set",
                item.item_no, item.description
            ),
            Severity::Medium,
        ));
    }
}

/// Format an issue for terminal display.
pub fn format_issue(issue: &Issue) -> String {
    format!(
        "[{}|{}] {}: {}",
        issue.kind, issue.severity, issue.module, issue.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{IssueKind, NewAccount, NewItem, NewPartner, PartnerKind};
    use crate::storage::StateSnapshot;
    use rust_decimal::Decimal;

    fn account(number: &str, account_type: AccountType) -> NewAccount {
        NewAccount {
            number: number.to_string(),
            name: format!("Account {}", number),
            account_type: Some(account_type),
            category: "Unassigned".to_string(),
            currency: "USD".to_string(),
        }
    }

    fn partner(partner_id: &str, email: &str) -> NewPartner {
        NewPartner {
            partner_id: partner_id.to_string(),
            name: format!("Partner {}", partner_id),
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn item(item_no: &str, item_type: ItemType, stock: u32, reorder: u32, cents: i64) -> NewItem {
        NewItem {
            item_no: item_no.to_string(),
            description: "Widget".to_string(),
            item_type,
            category: "Electronics".to_string(),
            unit_price: Decimal::new(cents, 2),
            uom: "PCS".to_string(),
            reorder_point: reorder,
            stock,
        }
    }

    /// A store with asset and revenue coverage and nothing else to report.
    fn clean_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.insert_account(account("1000", AccountType::Asset)).unwrap();
        store.insert_account(account("4000", AccountType::Revenue)).unwrap();
        store
    }

    /// Build a store through a snapshot so duplicate keys can be staged.
    fn store_with_duplicates(
        store: &RecordStore,
        f: impl FnOnce(&mut StateSnapshot),
    ) -> RecordStore {
        let mut snapshot = store.export_state();
        f(&mut snapshot);
        RecordStore::from(snapshot)
    }

    #[test]
    fn test_empty_store_yields_two_coverage_warnings() {
        let mut store = RecordStore::new();
        let issues = validate_all(&mut store);

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.kind == IssueKind::Warning));
        assert!(issues[0].message.contains("Asset"));
        assert!(issues[1].message.contains("Revenue"));
        assert_eq!(IssueCounts::of(&issues).errors, 0);
    }

    #[test]
    fn test_clean_store_has_no_issues() {
        let mut store = clean_store();
        assert!(validate_all(&mut store).is_empty());
    }

    #[test]
    fn test_three_identical_numbers_yield_two_issues() {
        let mut base = clean_store();
        base.insert_account(account("1500", AccountType::Asset)).unwrap();
        let mut store = store_with_duplicates(&base, |s| {
            let copy = s.accounts[2].clone();
            s.accounts.push(copy.clone());
            s.accounts.push(copy);
        });

        let issues = validate_all(&mut store);
        let dups: Vec<_> = issues
            .iter()
            .filter(|i| i.message == "Duplicate account number: 1500")
            .collect();
        assert_eq!(dups.len(), 2);
        assert!(dups.iter().all(|i| i.severity == Severity::High && i.is_error()));
    }

    #[test]
    fn test_missing_account_type_is_error() {
        let mut store = store_with_duplicates(&clean_store(), |s| {
            s.accounts[0].account_type = None;
        });

        let issues = validate_all(&mut store);
        assert!(issues.iter().any(|i| {
            i.is_error() && i.message == "Account 1000 - Account 1000 is missing account type"
        }));
        assert!(issues.iter().any(|i| i.message.starts_with("No Asset")));
    }

    #[test]
    fn test_coverage_checks_are_independent() {
        let mut store = RecordStore::new();
        store.insert_account(account("1000", AccountType::Asset)).unwrap();
        store.insert_account(account("2000", AccountType::Liability)).unwrap();

        let issues = validate_all(&mut store);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("No Revenue"));
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[test]
    fn test_partner_duplicates_across_kinds() {
        let mut store = clean_store();
        store.insert_partner(PartnerKind::Customer, partner("P001", "a@b.com")).unwrap();
        store.insert_partner(PartnerKind::Vendor, partner("P001", "c@d.com")).unwrap();

        let issues = validate_all(&mut store);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].module, PARTNERS_MODULE);
        assert_eq!(issues[0].message, "Duplicate partner ID: P001");
    }

    #[test]
    fn test_missing_email_only_for_customers() {
        let mut store = clean_store();
        store.insert_partner(PartnerKind::Customer, partner("C1", "")).unwrap();
        store.insert_partner(PartnerKind::Vendor, partner("V1", "")).unwrap();

        let issues = validate_all(&mut store);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].module, CUSTOMERS_MODULE);
        assert_eq!(issues[0].severity, Severity::Low);
        assert_eq!(issues[0].message, "Customer Partner C1 has no email address");
    }

    #[test]
    fn test_whitespace_email_is_not_missing() {
        let mut store = clean_store();
        store.insert_partner(PartnerKind::Customer, partner("C1", "  ")).unwrap();

        assert!(validate_all(&mut store).is_empty());
    }

    #[test]
    fn test_low_stock_only_for_inventory() {
        let mut store = clean_store();
        store.insert_item(item("INV", ItemType::Inventory, 5, 5, 100)).unwrap();
        store.insert_item(item("SRV", ItemType::Service, 0, 0, 100)).unwrap();
        store.insert_item(item("OK", ItemType::Inventory, 9, 5, 100)).unwrap();

        let issues = validate_all(&mut store);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Item INV - Widget is at or below reorder point (Stock: 5, Reorder: 5)"
        );
    }

    #[test]
    fn test_zero_price_warning() {
        let mut store = clean_store();
        store.insert_item(item("FREE", ItemType::Service, 0, 0, 0)).unwrap();

        let issues = validate_all(&mut store);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Item FREE - Widget has no unit price set");
    }

    #[test]
    fn test_item_rule_order() {
        let mut base = clean_store();
        base.insert_item(item("A", ItemType::Inventory, 1, 5, 0)).unwrap();
        let mut store = store_with_duplicates(&base, |s| {
            let copy = s.items[0].clone();
            s.items.push(copy);
        });

        let issues = validate_all(&mut store);
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], "Duplicate item number: A");
        assert!(messages[1].contains("reorder point"));
        assert!(messages[2].contains("reorder point"));
        assert!(messages[3].contains("no unit price"));
        assert!(messages[4].contains("no unit price"));
    }

    #[test]
    fn test_scanner_order() {
        let mut store = RecordStore::new();
        store.insert_partner(PartnerKind::Customer, partner("C1", "")).unwrap();
        store.insert_item(item("FREE", ItemType::Service, 0, 0, 0)).unwrap();

        let issues = validate_all(&mut store);
        let modules: Vec<_> = issues.iter().map(|i| i.module.as_str()).collect();
        assert_eq!(
            modules,
            vec![ACCOUNTS_MODULE, ACCOUNTS_MODULE, CUSTOMERS_MODULE, ITEMS_MODULE]
        );
    }

    #[test]
    fn test_validation_is_idempotent_and_replaces() {
        let mut store = RecordStore::new();
        let first = validate_all(&mut store);
        let second = validate_all(&mut store);
        assert_eq!(first, second);
        assert_eq!(store.issues(), second.as_slice());

        store.insert_account(account("1000", AccountType::Asset)).unwrap();
        let third = validate_all(&mut store);
        assert_eq!(third.len(), 1);
        assert_eq!(store.issues().len(), 1);
    }

    #[test]
    fn test_validation_leaves_records_untouched() {
        let mut store = clean_store();
        store.insert_item(item("A", ItemType::Inventory, 1, 5, 0)).unwrap();
        let before = store.export_state();

        validate_all(&mut store);
        let after = store.export_state();
        assert_eq!(before.accounts, after.accounts);
        assert_eq!(before.items, after.items);
    }

    #[test]
    fn test_issue_counts_display() {
        let issues = vec![
            Issue::error(ITEMS_MODULE, "a".to_string()),
            Issue::warning(ITEMS_MODULE, "b".to_string(), Severity::Low),
            Issue::warning(ITEMS_MODULE, "c".to_string(), Severity::Low),
        ];
        let counts = IssueCounts::of(&issues);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.to_string(), "1 Errors | 2 Warnings");
    }

    #[test]
    fn test_format_issue() {
        let issue = Issue::error(ITEMS_MODULE, "Duplicate item number: A".to_string());
        assert_eq!(
            format_issue(&issue),
            "[error|high] Items: Duplicate item number: A"
        );
    }
}
