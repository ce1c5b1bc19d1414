use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{TimeZone, Utc};
use tokio::time::{Duration, timeout};

use lexlog::{
    api::{ApiError, ApiResult, BackupApi},
    backup::{BackupRecord, BackupRequest, CommandOutcome},
    core::view::OpLogView,
    op::{LogSnapshot, OpKind, Operation},
    runtime::{
        events::UiEvent,
        handle::{ControlError, RuntimeConfig, RuntimeError, spawn_controller},
    },
    types::{JobId, JobStatus, OpStatus},
};

#[derive(Default)]
struct Calls {
    undos: usize,
    redos: usize,
}

struct ScriptedApi {
    log: Vec<Operation>,
    undo_error: Option<(u16, Option<String>)>,
    undo_delay: Duration,
    calls: Arc<Mutex<Calls>>,
}

impl ScriptedApi {
    fn new(log: Vec<Operation>) -> (Self, Arc<Mutex<Calls>>) {
        let calls = Arc::new(Mutex::new(Calls::default()));
        let api = Self {
            log,
            undo_error: None,
            undo_delay: Duration::ZERO,
            calls: Arc::clone(&calls),
        };
        (api, calls)
    }
}

impl BackupApi for ScriptedApi {
    fn fetch_operations(&mut self) -> ApiResult<Vec<Operation>> {
        Ok(self.log.clone())
    }

    fn undo(&mut self) -> ApiResult<CommandOutcome> {
        self.calls.lock().expect("lock").undos += 1;
        std::thread::sleep(self.undo_delay);
        match &self.undo_error {
            Some((code, message)) => Err(ApiError::Status {
                code: *code,
                message: message.clone(),
            }),
            None => Ok(CommandOutcome {
                message: Some("Operation undone".to_string()),
            }),
        }
    }

    fn redo(&mut self) -> ApiResult<CommandOutcome> {
        self.calls.lock().expect("lock").redos += 1;
        Ok(CommandOutcome { message: None })
    }

    fn job_status(&mut self, _job: &JobId) -> ApiResult<JobStatus> {
        Ok(JobStatus::Pending)
    }

    fn create_backup(&mut self, _request: &BackupRequest) -> ApiResult<JobId> {
        Ok("job-1".to_string())
    }

    fn backup_history(&mut self) -> ApiResult<Vec<BackupRecord>> {
        Ok(vec![])
    }
}

fn completed_op(entry: &str) -> Operation {
    Operation {
        kind: OpKind::CreateEntry,
        entry_id: Some(entry.to_string()),
        timestamp: Utc.timestamp_opt(1, 0).unwrap(),
        status: OpStatus::Completed,
        data: serde_json::Value::Null,
    }
}

fn prewarmed_view(operations: Vec<Operation>) -> OpLogView {
    let mut view = OpLogView::new();
    assert!(view.apply(LogSnapshot { seq: 1, operations }));
    view
}

fn quiet_config() -> RuntimeConfig {
    RuntimeConfig {
        poll_interval_ms: 3_600_000,
        reload_delay_ms: 150,
        job_interval_ms: 10,
        ..RuntimeConfig::default()
    }
}

#[tokio::test]
async fn commands_on_an_empty_log_issue_no_request() {
    let (api, calls) = ScriptedApi::new(vec![]);
    let handle = spawn_controller(OpLogView::new(), Box::new(api), quiet_config());

    let undo_err = handle.undo().await.expect_err("undo guard");
    assert!(matches!(
        undo_err,
        RuntimeError::Control(ControlError::NothingToUndo)
    ));

    let redo_err = handle.redo().await.expect_err("redo guard");
    assert!(matches!(
        redo_err,
        RuntimeError::Control(ControlError::NothingToRedo)
    ));

    let counts = calls.lock().expect("lock");
    assert_eq!((counts.undos, counts.redos), (0, 0));
    drop(counts);

    // the rest of the surface still works against an empty log
    let seq = handle.refresh().await.expect("refresh");
    assert!(seq >= 1);
    assert!(handle.history().await.expect("history").is_empty());
    handle.ping().await.expect("ping");

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn successful_undo_notifies_then_requests_reload_after_delay() {
    let log = vec![completed_op("e1")];
    let (api, calls) = ScriptedApi::new(log.clone());
    let handle = spawn_controller(prewarmed_view(log), Box::new(api), quiet_config());
    let mut sub = handle.subscribe();

    let started = Instant::now();
    let outcome = handle.undo().await.expect("undo");
    assert_eq!(outcome.message.as_deref(), Some("Operation undone"));

    let mut accepted_at = None;
    let mut reload_at = None;
    while reload_at.is_none() {
        let evt = timeout(Duration::from_secs(2), sub.recv())
            .await
            .expect("event")
            .expect("recv");
        match evt {
            UiEvent::CommandAccepted { .. } => accepted_at = Some(started.elapsed()),
            UiEvent::ReloadRequested => reload_at = Some(started.elapsed()),
            _ => {}
        }
    }

    let accepted_at = accepted_at.expect("accepted event before reload");
    let reload_at = reload_at.expect("reload event");
    assert!(
        reload_at >= accepted_at + Duration::from_millis(100),
        "reload fired at {reload_at:?}, accepted at {accepted_at:?}"
    );

    // busy indicator gone, button state recomputed from the cache
    let controls = handle.controls().await.expect("controls");
    assert!(controls.undo.enabled);
    assert_eq!(controls.undo.label, "Undo");
    assert_eq!(calls.lock().expect("lock").undos, 1);

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn failed_undo_surfaces_server_error_and_recovers() {
    let log = vec![completed_op("e1")];
    let (mut api, calls) = ScriptedApi::new(log.clone());
    api.undo_error = Some((409, Some("conflict".to_string())));
    let handle = spawn_controller(prewarmed_view(log), Box::new(api), quiet_config());
    let mut sub = handle.subscribe();

    let err = handle.undo().await.expect_err("undo should fail");
    match err {
        RuntimeError::Api(ApiError::Status { code, message }) => {
            assert_eq!(code, 409);
            assert_eq!(message.as_deref(), Some("conflict"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let mut rejected = None;
    while rejected.is_none() {
        let evt = timeout(Duration::from_secs(2), sub.recv())
            .await
            .expect("event")
            .expect("recv");
        if let UiEvent::CommandRejected { message, .. } = evt {
            rejected = Some(message);
        }
    }
    assert!(rejected.expect("rejection event").contains("conflict"));

    let controls = handle.controls().await.expect("controls");
    assert!(controls.undo.enabled);
    assert_eq!(controls.undo.label, "Undo");
    assert_eq!(calls.lock().expect("lock").undos, 1);

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn second_command_is_rejected_while_first_is_in_flight() {
    let log = vec![completed_op("e1"), completed_op("e2")];
    let (mut api, calls) = ScriptedApi::new(log.clone());
    api.undo_delay = Duration::from_millis(200);
    let handle = spawn_controller(prewarmed_view(log), Box::new(api), quiet_config());

    // let the startup poll drain so the slow POST is the only lock holder
    tokio::time::sleep(Duration::from_millis(50)).await;

    let first_handle = handle.clone();
    let first = tokio::spawn(async move { first_handle.undo().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let err = handle.undo().await.expect_err("busy guard");
    assert!(matches!(
        err,
        RuntimeError::Control(ControlError::CommandInFlight)
    ));

    first
        .await
        .expect("join")
        .expect("first undo should succeed");
    assert_eq!(calls.lock().expect("lock").undos, 1);

    handle.shutdown().await.expect("shutdown");
}
