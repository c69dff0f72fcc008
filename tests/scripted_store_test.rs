use anyhow::Result;
use async_trait::async_trait;
use safe_calc::core::engine::LineSource;
use safe_calc::core::ResultStore;
use safe_calc::{CalcEngine, CalcError, DivisionRequest, ErrorCode};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Test double that answers `get_data` from a per-key script and records
/// every call it receives.
#[derive(Default)]
struct ScriptedStore {
    gets: Mutex<HashMap<String, VecDeque<Result<String, ErrorCode>>>>,
    set_response: Mutex<Option<ErrorCode>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedStore {
    fn expect_get(self, key: &str, response: Result<String, ErrorCode>) -> Self {
        self.gets
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(response);
        self
    }

    fn fail_sets_with(self, code: ErrorCode) -> Self {
        *self.set_response.lock().unwrap() = Some(code);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultStore for ScriptedStore {
    async fn get_data(&self, key: &str) -> Result<String, ErrorCode> {
        self.calls.lock().unwrap().push(format!("get {}", key));
        self.gets
            .lock()
            .unwrap()
            .get_mut(key)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| panic!("unexpected get_data({})", key))
    }

    async fn set_data(&self, key: &str, value: &str) -> Result<(), ErrorCode> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("set {} = {}", key, value));
        match *self.set_response.lock().unwrap() {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }
}

#[tokio::test]
async fn test_scripted_outcomes() {
    let store = ScriptedStore::default()
        .expect_get("key1", Ok("value1".to_string()))
        .expect_get("missing", Err(ErrorCode::NotFound));

    assert_eq!(store.get_data("key1").await, Ok("value1".to_string()));
    assert_eq!(store.get_data("missing").await, Err(ErrorCode::NotFound));
    assert_eq!(store.calls(), vec!["get key1", "get missing"]);
}

#[tokio::test]
async fn test_engine_reuses_stored_line() -> Result<()> {
    let store = ScriptedStore::default().expect_get("10/2", Ok("Result: 5".to_string()));
    let engine = CalcEngine::new(store);

    let evaluation = engine.evaluate(DivisionRequest::new(10, 2)).await?;

    assert_eq!(evaluation.line, "Result: 5");
    assert_eq!(evaluation.source, LineSource::Reused);
    assert_eq!(engine.store().calls(), vec!["get 10/2"]);
    Ok(())
}

#[tokio::test]
async fn test_reused_error_line_counts_as_failed() -> Result<()> {
    let store = ScriptedStore::default().expect_get(
        "10/0",
        Ok("Error: Invalid argument (division by zero)".to_string()),
    );
    let engine = CalcEngine::new(store);

    let report = engine.run(&[DivisionRequest::new(10, 0)]).await?;

    assert_eq!(report.reused, 1);
    assert_eq!(report.computed, 0);
    assert_eq!(report.failed, 1);
    assert_eq!(engine.store().calls(), vec!["get 10/0"]);
    Ok(())
}

#[tokio::test]
async fn test_engine_computes_and_records_on_not_found() -> Result<()> {
    let store = ScriptedStore::default()
        .expect_get("20/4", Err(ErrorCode::NotFound))
        .expect_get("10/0", Err(ErrorCode::NotFound));
    let engine = CalcEngine::new(store);

    let report = engine
        .run(&[DivisionRequest::new(20, 4), DivisionRequest::new(10, 0)])
        .await?;

    assert_eq!(report.computed, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(
        report.lines,
        vec!["Result: 5", "Error: Invalid argument (division by zero)"]
    );
    assert_eq!(
        engine.store().calls(),
        vec![
            "get 20/4",
            "set 20/4 = Result: 5",
            "get 10/0",
            "set 10/0 = Error: Invalid argument (division by zero)",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_server_error_aborts_batch() {
    let store = ScriptedStore::default().expect_get("15/3", Err(ErrorCode::ServerError));
    let engine = CalcEngine::new(store);

    let err = engine
        .run(&[DivisionRequest::new(15, 3), DivisionRequest::new(1, 1)])
        .await
        .unwrap_err();

    match err {
        CalcError::StoreError { key, code } => {
            assert_eq!(key, "15/3");
            assert_eq!(code, ErrorCode::ServerError);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // The second request is never looked up.
    assert_eq!(engine.store().calls(), vec!["get 15/3"]);
}

#[tokio::test]
async fn test_failed_write_is_store_error() {
    let store = ScriptedStore::default()
        .expect_get("8/2", Err(ErrorCode::NotFound))
        .fail_sets_with(ErrorCode::ServerError);
    let engine = CalcEngine::new(store);

    let err = engine.evaluate(DivisionRequest::new(8, 2)).await.unwrap_err();
    assert!(matches!(
        err,
        CalcError::StoreError {
            code: ErrorCode::ServerError,
            ..
        }
    ));
}
