use anyhow::Result;
use httpmock::prelude::*;
use std::io::Write;
use std::sync::{Arc, Mutex};
use widget_call::core::endpoint;
use widget_call::{CallDispatcher, CallOutcome, DispatchConfig, FileConfig, PostAuthAction, RecoveryDialog};

struct TestConfig {
    ajax_url: String,
    login_url: String,
    verify_url: String,
    max_recoveries: u32,
}

impl TestConfig {
    fn new(ajax_url: String, server: &MockServer) -> Self {
        Self {
            ajax_url,
            login_url: server.url("/accounts/login/"),
            verify_url: server.url("/accounts/verify/"),
            max_recoveries: 3,
        }
    }
}

impl DispatchConfig for TestConfig {
    fn ajax_url(&self) -> &str {
        &self.ajax_url
    }

    fn login_url(&self) -> &str {
        &self.login_url
    }

    fn verify_url(&self) -> &str {
        &self.verify_url
    }

    fn max_recoveries(&self) -> u32 {
        self.max_recoveries
    }
}

/// Dialog that records invocations and completes immediately.
#[derive(Clone, Default)]
struct RecordingDialog {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait::async_trait]
impl RecoveryDialog for RecordingDialog {
    async fn resolve(&self, url: &str, frame: &str) -> widget_call::Result<PostAuthAction> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), frame.to_string()));
        Ok(PostAuthAction::none())
    }
}

fn capture_handler() -> (
    Arc<Mutex<Vec<serde_json::Value>>>,
    impl Fn(serde_json::Value) + Send + Sync + 'static,
) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |value| sink.lock().unwrap().push(value))
}

#[tokio::test]
async fn test_success_passes_decoded_body_to_handler() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/widgets/save/")
            .json_body(serde_json::json!({"id": 7}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"ok": true}));
    });

    let (seen, handler) = capture_handler();
    let dialog = RecordingDialog::default();
    let dispatcher = CallDispatcher::new(
        "_save",
        TestConfig::new(server.url("/widgets/save/"), &server),
        dialog.clone(),
        serde_json::json!({"id": 7}),
        handler,
    );

    let outcome = dispatcher.dispatch().await?;

    api_mock.assert();
    assert_eq!(outcome, CallOutcome::Completed { recoveries: 0 });
    assert_eq!(*seen.lock().unwrap(), vec![serde_json::json!({"ok": true})]);
    assert!(dialog.calls.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_widget_endpoint_addressing() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/san-francisco-ca/Foo-bar/_0/_ajax/concatupper");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("HELLOTHERE"));
    });

    let base = format!("{}/san-francisco-ca/Foo-bar", server.base_url());
    let url = endpoint::ajax_url(&base, 0, "concatupper");

    let (seen, handler) = capture_handler();
    let dispatcher = CallDispatcher::new(
        "_concatupper",
        TestConfig::new(url, &server),
        RecordingDialog::default(),
        serde_json::json!({"arg0": "hello", "arg1": "there"}),
        handler,
    );

    let outcome = dispatcher.dispatch().await?;

    api_mock.assert();
    assert!(outcome.is_success());
    assert_eq!(*seen.lock().unwrap(), vec![serde_json::json!("HELLOTHERE")]);
    Ok(())
}

#[tokio::test]
async fn test_unrecoverable_status_is_silent_for_the_caller() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/widgets/save/");
        then.status(500);
    });

    let (seen, handler) = capture_handler();
    let dialog = RecordingDialog::default();
    let dispatcher = CallDispatcher::new(
        "_save",
        TestConfig::new(server.url("/widgets/save/"), &server),
        dialog.clone(),
        serde_json::json!({"id": 7}),
        handler,
    );

    // A 500 is an outcome, not an Err: nothing propagates to the caller
    // beyond the logged status.
    let outcome = dispatcher.dispatch().await?;

    assert_eq!(api_mock.hits(), 1);
    assert_eq!(outcome, CallOutcome::Failed { status: 500 });
    assert!(seen.lock().unwrap().is_empty());
    assert!(dialog.calls.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_dispatch_from_file_config() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/widgets/save/")
            .json_body(serde_json::json!({"id": 7}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"saved": 7}));
    });

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
endpoint = "{}"
login_url = "{}"
verify_url = "{}"
max_recoveries = 1

[payload]
id = 7
"#,
        server.url("/widgets/save/"),
        server.url("/accounts/login/"),
        server.url("/accounts/verify/"),
    )?;

    let mut config = FileConfig::from_path(file.path())?;
    let payload = config.payload.take().expect("payload table");

    let (seen, handler) = capture_handler();
    let dispatcher =
        CallDispatcher::new("_save", config, RecordingDialog::default(), payload, handler);

    let outcome = dispatcher.dispatch().await?;

    api_mock.assert();
    assert!(outcome.is_success());
    assert_eq!(*seen.lock().unwrap(), vec![serde_json::json!({"saved": 7})]);
    Ok(())
}
