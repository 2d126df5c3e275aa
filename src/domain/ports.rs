use crate::domain::model::PostAuthAction;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait DispatchConfig: Send + Sync {
    /// Endpoint the widget call is POSTed to.
    fn ajax_url(&self) -> &str;
    /// Login dialog endpoint, used to recover from 403.
    fn login_url(&self) -> &str;
    /// Captcha/verification dialog endpoint, used to recover from 409.
    fn verify_url(&self) -> &str;
    /// Maximum number of dialog-then-retry cycles per dispatch.
    fn max_recoveries(&self) -> u32;
}

/// The modal dialog collaborator. `resolve` opens the dialog at `url` inside
/// the frame named `frame` and completes once the user finishes the flow,
/// yielding the post-auth action.
#[async_trait]
pub trait RecoveryDialog: Send + Sync {
    async fn resolve(&self, url: &str, frame: &str) -> Result<PostAuthAction>;
}

#[async_trait]
impl<'a, T: RecoveryDialog + ?Sized> RecoveryDialog for &'a T {
    async fn resolve(&self, url: &str, frame: &str) -> Result<PostAuthAction> {
        (**self).resolve(url, frame).await
    }
}
