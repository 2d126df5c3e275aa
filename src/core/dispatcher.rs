use crate::core::{DispatchConfig, RecoveryDialog};
use crate::domain::model::{CallOutcome, DIALOG_FRAME};
use crate::utils::error::Result;
use crate::utils::ident;
use reqwest::Client;

type SuccessHandler = Box<dyn Fn(serde_json::Value) + Send + Sync>;

/// Dispatches one widget call: a single POST to the configured AJAX
/// endpoint, JSON response routed to the success handler, 403/409 recovered
/// through the dialog collaborator and then retried.
///
/// Construction and invocation are separate steps; `dispatch` is where the
/// network call happens. See [`call`] for the build-and-dispatch shorthand.
pub struct CallDispatcher<C: DispatchConfig, D: RecoveryDialog> {
    name: String,
    config: C,
    dialog: D,
    payload: serde_json::Value,
    on_success: SuccessHandler,
    client: Client,
}

impl<C: DispatchConfig, D: RecoveryDialog> CallDispatcher<C, D> {
    pub fn new(
        name: impl Into<String>,
        config: C,
        dialog: D,
        payload: serde_json::Value,
        on_success: impl Fn(serde_json::Value) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            dialog,
            payload,
            on_success: Box::new(on_success),
            client: Client::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the call to completion. Exactly one of the success handler or a
    /// failure outcome results per invocation; within the recovery bound,
    /// each 403/409 response opens a dialog and, once the dialog completes,
    /// re-issues the identical POST. Non-recoverable statuses are logged and
    /// returned as an outcome, never as an `Err`. `Err` is reserved for
    /// transport, decode, and dialog faults.
    pub async fn dispatch(&self) -> Result<CallOutcome> {
        let mut recoveries = 0u32;

        loop {
            tracing::debug!("{}: POST {}", self.name, self.config.ajax_url());
            let response = self
                .client
                .post(self.config.ajax_url())
                .json(&self.payload)
                .send()
                .await?;

            let status = response.status();
            tracing::debug!("{}: response status: {}", self.name, status);

            if status.is_success() {
                let body: serde_json::Value = response.json().await?;
                (self.on_success)(body);
                return Ok(CallOutcome::Completed { recoveries });
            }

            let dialog_url = match status.as_u16() {
                403 => self.config.login_url(),
                409 => self.config.verify_url(),
                code => {
                    tracing::warn!("{}: request failed with status {}", self.name, code);
                    return Ok(CallOutcome::Failed { status: code });
                }
            };

            if recoveries >= self.config.max_recoveries() {
                tracing::warn!(
                    "{}: status {} recurring after {} recoveries, giving up",
                    self.name,
                    status.as_u16(),
                    recoveries
                );
                return Ok(CallOutcome::RecoveryLimitReached {
                    status: status.as_u16(),
                    recoveries,
                });
            }

            tracing::info!(
                "{}: status {}, opening dialog at {}",
                self.name,
                status.as_u16(),
                dialog_url
            );
            let paa = self.dialog.resolve(dialog_url, DIALOG_FRAME).await?;
            tracing::debug!("{}: post-auth action: {:?}", self.name, paa);
            recoveries += 1;
        }
    }
}

/// Build-and-dispatch shorthand with a generated call name, the counterpart
/// of the original define-and-call form.
pub async fn call<C: DispatchConfig, D: RecoveryDialog>(
    config: C,
    dialog: D,
    payload: serde_json::Value,
    on_success: impl Fn(serde_json::Value) + Send + Sync + 'static,
) -> Result<CallOutcome> {
    let name = ident::random_call_name(10);
    CallDispatcher::new(name, config, dialog, payload, on_success)
        .dispatch()
        .await
}
