use crate::domain::model::PostAuthAction;
use crate::domain::ports::RecoveryDialog;
use crate::utils::error::{DispatchError, Result};
use async_trait::async_trait;

/// Dialog adapter for contexts without an interactive dialog (one-shot CLI
/// runs, headless jobs). Declines every recovery request, so a 403/409
/// surfaces as a dialog error instead of hanging on a dialog that can never
/// open.
pub struct NullDialog;

#[async_trait]
impl RecoveryDialog for NullDialog {
    async fn resolve(&self, url: &str, _frame: &str) -> Result<PostAuthAction> {
        Err(DispatchError::DialogError {
            message: format!("no interactive dialog available for {}", url),
        })
    }
}
