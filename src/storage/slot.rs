use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::StateSnapshot;
use crate::config::Config;
use crate::error::{ErpStageError, Result};

pub const PROJECT_DIR: &str = ".erpstage";
const STATE_FILE: &str = "state.json";

/// The single persistence slot: one JSON snapshot under `.erpstage/`.
#[derive(Debug, Clone)]
pub struct StateSlot {
    root: PathBuf,
    path: PathBuf,
}

impl StateSlot {
    /// Initialize a new project with an empty slot and default config
    pub fn init(root: &Path) -> Result<Self> {
        let project_dir = root.join(PROJECT_DIR);

        if project_dir.exists() {
            return Err(ErpStageError::AlreadyInitialized);
        }

        fs::create_dir_all(&project_dir)?;
        Config::default().write(&project_dir)?;
        info!(path = %project_dir.display(), "initialized project");

        Ok(Self::at(root))
    }

    /// Open an existing project
    pub fn open(root: &Path) -> Result<Self> {
        if !root.join(PROJECT_DIR).is_dir() {
            return Err(ErpStageError::NotInitialized);
        }
        Ok(Self::at(root))
    }

    fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            path: root.join(PROJECT_DIR).join(STATE_FILE),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    /// Read the stored snapshot, if one has been saved.
    pub fn load(&self) -> Result<Option<StateSnapshot>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved state");
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), "loaded state");
        Ok(Some(snapshot))
    }

    /// Write the snapshot, replacing whatever the slot held.
    pub fn save(&self, snapshot: &StateSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved state");
        Ok(())
    }

    /// Empty the slot. Removing an already empty slot is fine.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "removed saved state");
        }
        Ok(())
    }
}
