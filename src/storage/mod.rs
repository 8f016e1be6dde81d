mod record_store;
mod slot;

pub use record_store::{RecordStore, StateSnapshot, StoreStats};
pub use slot::{StateSlot, PROJECT_DIR};
