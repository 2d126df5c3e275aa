pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::FileConfig;

pub use crate::core::dispatcher::{call, CallDispatcher};
pub use crate::domain::model::{CallOutcome, PostAuthAction, DIALOG_FRAME};
pub use crate::domain::ports::{DispatchConfig, RecoveryDialog};
pub use crate::utils::error::{DispatchError, Result};
