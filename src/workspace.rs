//! User-triggered commands over one project.
//!
//! A `Workspace` owns the record store loaded from the slot. Every command that changes the
//! store writes the snapshot back before returning.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::entity::{
    Account, AccountDraft, Collection, Issue, Item, ItemDraft, Partner, PartnerDraft, PartnerKind,
};
use crate::error::{ErpStageError, Result};
use crate::export::{self, ExportKind, ExportOutcome};
use crate::seed::{self, SeedOutcome, Template};
use crate::storage::{RecordStore, StateSlot, StoreStats};
use crate::validation;

#[derive(Debug)]
pub struct Workspace {
    store: RecordStore,
    slot: StateSlot,
    config: Config,
}

impl Workspace {
    /// Create the project directory under `root` and open it empty.
    pub fn init(root: &Path) -> Result<Self> {
        let slot = StateSlot::init(root)?;
        let config = Config::load(&slot.project_dir())?;
        Ok(Self {
            store: RecordStore::new(),
            slot,
            config,
        })
    }

    /// Open an existing project. An empty slot yields an empty store.
    pub fn open(root: &Path) -> Result<Self> {
        let slot = StateSlot::open(root)?;
        let config = Config::load(&slot.project_dir())?;
        let store = slot.load()?.map(RecordStore::from).unwrap_or_default();
        Ok(Self {
            store,
            slot,
            config,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        self.slot.root()
    }

    /// Export target. Relative paths resolve against the project root.
    pub fn export_dir(&self) -> PathBuf {
        self.slot.root().join(&self.config.export_dir)
    }

    /// Apply `change` to a copy of the store and save it. The live store is only replaced once
    /// the snapshot is written, so a failed write leaves it as it was.
    fn commit<T>(&mut self, change: impl FnOnce(&mut RecordStore) -> Result<T>) -> Result<T> {
        let mut next = self.store.clone();
        let value = change(&mut next)?;
        self.slot.save(&next.export_state())?;
        self.store = next;
        Ok(value)
    }

    pub fn add_account(&mut self, draft: AccountDraft) -> Result<Account> {
        let new = draft.validate(&self.config)?;
        self.commit(|store| store.insert_account(new))
    }

    pub fn add_partner(&mut self, kind: PartnerKind, draft: PartnerDraft) -> Result<Partner> {
        let new = draft.validate(&self.config)?;
        self.commit(|store| store.insert_partner(kind, new))
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item> {
        let new = draft.validate(&self.config)?;
        self.commit(|store| store.insert_item(new))
    }

    /// Resolve a full id or unique id prefix within one collection.
    ///
    /// `Ok(None)` when nothing matches; more than one match is `AmbiguousId`.
    pub fn resolve_id(&self, collection: Collection, prefix: &str) -> Result<Option<Uuid>> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(ErpStageError::MissingRequiredField("id"));
        }

        let matches: Vec<Uuid> = self
            .store
            .ids(collection)
            .into_iter()
            .filter(|id| id.to_string().starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(ErpStageError::AmbiguousId(prefix)),
        }
    }

    /// Delete by id or prefix. Returns the deleted id, or `None` when nothing matched.
    pub fn delete(&mut self, collection: Collection, id_or_prefix: &str) -> Result<Option<Uuid>> {
        let Some(id) = self.resolve_id(collection, id_or_prefix)? else {
            warn!(%collection, id = id_or_prefix, "delete matched nothing");
            return Ok(None);
        };

        self.commit(|store| Ok(store.delete_by_id(collection, &id)))?;
        Ok(Some(id))
    }

    /// Replace all records with a template. Requires confirmation.
    pub fn apply_template(&mut self, name: &str, confirmed: bool) -> Result<Template> {
        if !confirmed {
            return Err(ErpStageError::ConfirmationRequired("apply"));
        }
        self.commit(|store| seed::apply_template(store, name))
    }

    pub fn generate_test_data(&mut self) -> Result<SeedOutcome> {
        self.commit(seed::generate_test_data)
    }

    /// Recompute validation issues and store them with the records.
    pub fn validate_all(&mut self) -> Result<Vec<Issue>> {
        self.commit(|store| Ok(validation::validate_all(store)))
    }

    /// Empty the persistence slot of the project at `root`. Requires confirmation.
    ///
    /// The slot is not read, so this also works when the saved state no longer decodes and
    /// `open` would fail.
    pub fn clear_slot(root: &Path, confirmed: bool) -> Result<()> {
        if !confirmed {
            return Err(ErpStageError::ConfirmationRequired("clear"));
        }
        StateSlot::open(root)?.remove()?;
        info!("cleared all data");
        Ok(())
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    pub fn export(&self, kind: ExportKind) -> Result<ExportOutcome> {
        export::export(&self.store, kind, &self.export_dir(), &Utc::now())
    }
}
