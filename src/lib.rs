pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod seed;
pub mod storage;
pub mod validation;
pub mod workspace;

pub use error::{ErpStageError, Result};
pub use workspace::Workspace;
