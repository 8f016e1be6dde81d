use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entity::{
    new_id, Account, Collection, Issue, Item, NewAccount, NewItem, NewPartner, Partner,
    PartnerKind, RecordBase,
};
use crate::error::{ErpStageError, Result};

/// Serialized form of the whole store, as kept in the persistence slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub customers: Vec<Partner>,
    #[serde(default)]
    pub vendors: Vec<Partner>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub validation_issues: Vec<Issue>,
}

/// Record counts as shown in the statistics bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub accounts: usize,
    pub partners: usize,
    pub items: usize,
    pub issues: usize,
}

/// In-memory collections of accounts, partners and items plus the last validation issues.
///
/// Records only enter through the `insert_*` methods and `replace_all`, which enforce
/// natural-key uniqueness per collection. Snapshots loaded with `import_state` are taken
/// as-is so that stale or hand-edited data can still be validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    accounts: Vec<Account>,
    customers: Vec<Partner>,
    vendors: Vec<Partner>,
    items: Vec<Item>,
    issues: Vec<Issue>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn customers(&self) -> &[Partner] {
        &self.customers
    }

    pub fn vendors(&self) -> &[Partner] {
        &self.vendors
    }

    pub fn partners(&self, kind: PartnerKind) -> &[Partner] {
        match kind {
            PartnerKind::Customer => &self.customers,
            PartnerKind::Vendor => &self.vendors,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Accounts => self.accounts.len(),
            Collection::Customers => self.customers.len(),
            Collection::Vendors => self.vendors.len(),
            Collection::Items => self.items.len(),
        }
    }

    /// True when no accounts, partners or items exist. Issues are not considered.
    pub fn is_empty(&self) -> bool {
        Collection::ALL.iter().all(|c| self.len(*c) == 0)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            accounts: self.accounts.len(),
            partners: self.customers.len() + self.vendors.len(),
            items: self.items.len(),
            issues: self.issues.len(),
        }
    }

    pub fn has_account_number(&self, number: &str) -> bool {
        self.accounts.iter().any(|a| a.number == number)
    }

    pub fn has_partner_id(&self, kind: PartnerKind, partner_id: &str) -> bool {
        self.partners(kind).iter().any(|p| p.partner_id == partner_id)
    }

    pub fn has_item_no(&self, item_no: &str) -> bool {
        self.items.iter().any(|i| i.item_no == item_no)
    }

    /// Ids of every record in a collection, in insertion order.
    pub fn ids(&self, collection: Collection) -> Vec<Uuid> {
        match collection {
            Collection::Accounts => self.accounts.iter().map(|a| a.base.id).collect(),
            Collection::Customers => self.customers.iter().map(|p| p.base.id).collect(),
            Collection::Vendors => self.vendors.iter().map(|p| p.base.id).collect(),
            Collection::Items => self.items.iter().map(|i| i.base.id).collect(),
        }
    }

    fn contains_id(&self, id: &Uuid) -> bool {
        Collection::ALL
            .iter()
            .any(|c| self.ids(*c).iter().any(|existing| existing == id))
    }

    /// A new id that no record in the store carries yet.
    fn fresh_base(&self) -> RecordBase {
        loop {
            let id = new_id();
            if !self.contains_id(&id) {
                return RecordBase::new(id);
            }
        }
    }

    pub fn insert_account(&mut self, new: NewAccount) -> Result<Account> {
        if self.has_account_number(&new.number) {
            debug!(collection = "accounts", key = %new.number, "rejected duplicate");
            return Err(ErpStageError::DuplicateKey {
                collection: Collection::Accounts,
                key: new.number,
            });
        }

        let account = Account::from_new(self.fresh_base(), new);
        debug!(collection = "accounts", key = %account.number, id = %account.base.id, "inserted");
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Uniqueness is checked within the collection for `kind` only.
    pub fn insert_partner(&mut self, kind: PartnerKind, new: NewPartner) -> Result<Partner> {
        if self.has_partner_id(kind, &new.partner_id) {
            debug!(
                collection = %Collection::from(kind),
                key = %new.partner_id,
                "rejected duplicate"
            );
            return Err(ErpStageError::DuplicateKey {
                collection: kind.into(),
                key: new.partner_id,
            });
        }

        let partner = Partner::from_new(self.fresh_base(), kind, new);
        debug!(
            collection = %Collection::from(kind),
            key = %partner.partner_id,
            id = %partner.base.id,
            "inserted"
        );
        match kind {
            PartnerKind::Customer => self.customers.push(partner.clone()),
            PartnerKind::Vendor => self.vendors.push(partner.clone()),
        }
        Ok(partner)
    }

    pub fn insert_item(&mut self, new: NewItem) -> Result<Item> {
        if self.has_item_no(&new.item_no) {
            debug!(collection = "items", key = %new.item_no, "rejected duplicate");
            return Err(ErpStageError::DuplicateKey {
                collection: Collection::Items,
                key: new.item_no,
            });
        }

        let item = Item::from_new(self.fresh_base(), new);
        debug!(collection = "items", key = %item.item_no, id = %item.base.id, "inserted");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the record with `id`. Returns whether anything was removed; absence is not an error.
    pub fn delete_by_id(&mut self, collection: Collection, id: &Uuid) -> bool {
        let before = self.len(collection);
        match collection {
            Collection::Accounts => self.accounts.retain(|a| a.base.id != *id),
            Collection::Customers => self.customers.retain(|p| p.base.id != *id),
            Collection::Vendors => self.vendors.retain(|p| p.base.id != *id),
            Collection::Items => self.items.retain(|i| i.base.id != *id),
        }
        let removed = self.len(collection) < before;
        debug!(%collection, %id, removed, "delete by id");
        removed
    }

    /// Discard all four collections and rebuild them from fresh candidates.
    ///
    /// The replacement is built aside first, so a duplicate key among the candidates
    /// leaves the store untouched. Issues are kept.
    pub fn replace_all(
        &mut self,
        accounts: Vec<NewAccount>,
        customers: Vec<NewPartner>,
        vendors: Vec<NewPartner>,
        items: Vec<NewItem>,
    ) -> Result<()> {
        let mut next = RecordStore::new();
        for account in accounts {
            next.insert_account(account)?;
        }
        for customer in customers {
            next.insert_partner(PartnerKind::Customer, customer)?;
        }
        for vendor in vendors {
            next.insert_partner(PartnerKind::Vendor, vendor)?;
        }
        for item in items {
            next.insert_item(item)?;
        }

        self.accounts = next.accounts;
        self.customers = next.customers;
        self.vendors = next.vendors;
        self.items = next.items;
        info!(
            accounts = self.accounts.len(),
            customers = self.customers.len(),
            vendors = self.vendors.len(),
            items = self.items.len(),
            "replaced all collections"
        );
        Ok(())
    }

    /// Only the validation engine writes issues.
    pub(crate) fn set_issues(&mut self, issues: Vec<Issue>) {
        self.issues = issues;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
        info!("cleared all collections");
    }

    pub fn export_state(&self) -> StateSnapshot {
        StateSnapshot {
            accounts: self.accounts.clone(),
            customers: self.customers.clone(),
            vendors: self.vendors.clone(),
            items: self.items.clone(),
            validation_issues: self.issues.clone(),
        }
    }

    /// Replace the store contents with a snapshot. Item statuses are recomputed on the way in.
    pub fn import_state(&mut self, snapshot: StateSnapshot) {
        let mut items = snapshot.items;
        for item in &mut items {
            item.refresh_status();
        }

        self.accounts = snapshot.accounts;
        self.customers = snapshot.customers;
        self.vendors = snapshot.vendors;
        self.items = items;
        self.issues = snapshot.validation_issues;
    }
}

impl From<StateSnapshot> for RecordStore {
    fn from(snapshot: StateSnapshot) -> Self {
        let mut store = RecordStore::new();
        store.import_state(snapshot);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{AccountType, ItemType, RecordStatus};
    use rust_decimal::Decimal;

    fn account(number: &str, name: &str) -> NewAccount {
        NewAccount {
            number: number.to_string(),
            name: name.to_string(),
            account_type: Some(AccountType::Asset),
            category: "Current Assets".to_string(),
            currency: "USD".to_string(),
        }
    }

    fn partner(partner_id: &str) -> NewPartner {
        NewPartner {
            partner_id: partner_id.to_string(),
            name: format!("Partner {}", partner_id),
            ..Default::default()
        }
    }

    fn item(item_no: &str, stock: u32, reorder_point: u32) -> NewItem {
        NewItem {
            item_no: item_no.to_string(),
            description: "Widget".to_string(),
            item_type: ItemType::Inventory,
            category: "Electronics".to_string(),
            unit_price: Decimal::new(2500, 2),
            uom: "PCS".to_string(),
            reorder_point,
            stock,
        }
    }

    #[test]
    fn test_insert_account_assigns_identity() {
        let mut store = RecordStore::new();
        let created = store.insert_account(account("1000", "Cash")).unwrap();

        assert_eq!(created.status, RecordStatus::Active);
        assert_eq!(store.accounts().len(), 1);
        assert_eq!(store.accounts()[0].base.id, created.base.id);
    }

    #[test]
    fn test_duplicate_account_rejected_without_change() {
        let mut store = RecordStore::new();
        store.insert_account(account("1000", "Cash")).unwrap();
        let before = store.clone();

        let err = store.insert_account(account("1000", "Other")).unwrap_err();
        match err {
            ErpStageError::DuplicateKey { collection, key } => {
                assert_eq!(collection, Collection::Accounts);
                assert_eq!(key, "1000");
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_partner_uniqueness_is_per_kind() {
        let mut store = RecordStore::new();
        store.insert_partner(PartnerKind::Customer, partner("P001")).unwrap();
        store.insert_partner(PartnerKind::Vendor, partner("P001")).unwrap();

        assert!(store.insert_partner(PartnerKind::Customer, partner("P001")).is_err());
        assert!(store.insert_partner(PartnerKind::Vendor, partner("P001")).is_err());
        assert_eq!(store.customers().len(), 1);
        assert_eq!(store.vendors().len(), 1);
        assert_eq!(store.customers()[0].kind, PartnerKind::Customer);
        assert_eq!(store.vendors()[0].kind, PartnerKind::Vendor);
    }

    #[test]
    fn test_insert_item_derives_status() {
        let mut store = RecordStore::new();
        let low = store.insert_item(item("A", 5, 5)).unwrap();
        let ok = store.insert_item(item("B", 6, 5)).unwrap();
        let empty = store.insert_item(item("C", 0, 0)).unwrap();

        assert_eq!(low.status, RecordStatus::LowStock);
        assert_eq!(ok.status, RecordStatus::Active);
        assert_eq!(empty.status, RecordStatus::LowStock);
        assert!(store.insert_item(item("A", 100, 1)).is_err());
    }

    #[test]
    fn test_uniqueness_over_insert_sequence() {
        let mut store = RecordStore::new();
        for number in ["1000", "1100", "1000", "1200", "1100", "1000"] {
            let _ = store.insert_account(account(number, "x"));
        }
        let mut numbers: Vec<_> = store.accounts().iter().map(|a| a.number.clone()).collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), store.accounts().len());
        assert_eq!(store.accounts().len(), 3);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = RecordStore::new();
        for number in ["3000", "1000", "2000"] {
            store.insert_account(account(number, "x")).unwrap();
        }
        let numbers: Vec<_> = store.accounts().iter().map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["3000", "1000", "2000"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = RecordStore::new();
        for i in 0..50 {
            store.insert_account(account(&i.to_string(), "x")).unwrap();
        }
        let mut ids = store.ids(Collection::Accounts);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_delete_by_id() {
        let mut store = RecordStore::new();
        let a = store.insert_account(account("1000", "Cash")).unwrap();
        store.insert_account(account("1100", "AR")).unwrap();

        assert!(store.delete_by_id(Collection::Accounts, &a.base.id));
        assert_eq!(store.accounts().len(), 1);
        assert_eq!(store.accounts()[0].number, "1100");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = RecordStore::new();
        store.insert_account(account("1000", "Cash")).unwrap();
        let before = store.clone();

        assert!(!store.delete_by_id(Collection::Accounts, &Uuid::new_v4()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_only_touches_named_collection() {
        let mut store = RecordStore::new();
        let customer = store.insert_partner(PartnerKind::Customer, partner("C1")).unwrap();

        assert!(!store.delete_by_id(Collection::Vendors, &customer.base.id));
        assert_eq!(store.customers().len(), 1);
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let mut store = RecordStore::new();
        store.insert_account(account("9999", "Old")).unwrap();
        store.insert_item(item("OLD", 1, 1)).unwrap();

        store
            .replace_all(
                vec![account("1000", "Cash")],
                vec![partner("C1")],
                vec![],
                vec![item("NEW", 3, 1)],
            )
            .unwrap();

        assert_eq!(store.accounts().len(), 1);
        assert_eq!(store.accounts()[0].number, "1000");
        assert_eq!(store.customers().len(), 1);
        assert!(store.vendors().is_empty());
        assert_eq!(store.items()[0].item_no, "NEW");
    }

    #[test]
    fn test_replace_all_with_duplicate_leaves_store() {
        let mut store = RecordStore::new();
        store.insert_account(account("9999", "Old")).unwrap();
        let before = store.clone();

        let result = store.replace_all(
            vec![account("1000", "Cash"), account("1000", "Again")],
            vec![],
            vec![],
            vec![],
        );
        assert!(result.is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut store = RecordStore::new();
        store.insert_account(account("1000", "Cash")).unwrap();
        store.insert_partner(PartnerKind::Vendor, partner("V1")).unwrap();
        store.insert_item(item("A", 1, 1)).unwrap();
        store.set_issues(vec![Issue::error("Items", "x".to_string())]);

        store.clear();
        assert!(store.is_empty());
        assert!(store.issues().is_empty());
    }

    #[test]
    fn test_export_import_state() {
        let mut store = RecordStore::new();
        store.insert_account(account("1000", "Cash")).unwrap();
        store.insert_partner(PartnerKind::Customer, partner("C1")).unwrap();
        store.insert_item(item("A", 1, 5)).unwrap();

        let json = serde_json::to_string(&store.export_state()).unwrap();
        let snapshot: StateSnapshot = serde_json::from_str(&json).unwrap();
        let restored = RecordStore::from(snapshot);
        assert_eq!(restored, store);
    }

    #[test]
    fn test_import_missing_fields_default_empty() {
        let snapshot: StateSnapshot = serde_json::from_str("{}").unwrap();
        let store = RecordStore::from(snapshot);
        assert!(store.is_empty());
        assert!(store.issues().is_empty());
    }

    #[test]
    fn test_import_recomputes_item_status() {
        let mut store = RecordStore::new();
        store.insert_item(item("A", 50, 10)).unwrap();
        let mut snapshot = store.export_state();
        snapshot.items[0].stock = 2;

        let restored = RecordStore::from(snapshot);
        assert_eq!(restored.items()[0].status, RecordStatus::LowStock);
    }

    #[test]
    fn test_stats_counts_partners_together() {
        let mut store = RecordStore::new();
        store.insert_partner(PartnerKind::Customer, partner("C1")).unwrap();
        store.insert_partner(PartnerKind::Vendor, partner("V1")).unwrap();
        let stats = store.stats();
        assert_eq!(stats.partners, 2);
        assert_eq!(stats.accounts, 0);
    }
}
