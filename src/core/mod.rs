pub mod dispatcher;
pub mod endpoint;

pub use crate::domain::model::{CallOutcome, PostAuthAction, DIALOG_FRAME};
pub use crate::domain::ports::{DispatchConfig, RecoveryDialog};
pub use crate::utils::error::Result;
