use serde::{Deserialize, Serialize};

/// Fixed identifier of the modal frame the login/verification dialogs open
/// in. Every dialog invocation uses this frame name.
pub const DIALOG_FRAME: &str = "captcha_login";

/// Opaque value handed back by a dialog on completion, describing what to do
/// after authentication. The dispatcher logs it and otherwise ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthAction(serde_json::Value);

impl PostAuthAction {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn none() -> Self {
        Self(serde_json::Value::Null)
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

/// Terminal result of one dispatch. Exactly one outcome is produced per
/// invocation; `recoveries` counts the dialog-then-retry cycles that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// 2xx response, success handler ran.
    Completed { recoveries: u32 },
    /// Non-2xx status with no recovery path. Logged, not propagated as Err.
    Failed { status: u16 },
    /// 403/409 kept recurring past the configured recovery bound.
    RecoveryLimitReached { status: u16, recoveries: u32 },
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Completed { .. })
    }
}
