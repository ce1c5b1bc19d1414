use std::sync::Arc;

use hashbrown::HashMap;
use tokio::{
    sync::{Mutex, broadcast, mpsc, oneshot},
    task::JoinHandle,
    time::{self, Duration, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::{
    api::{ApiError, BackupApi},
    backup::{BackupRecord, BackupRequest, CommandOutcome, IdCheck, ScheduledBackup},
    core::view::{ControlState, HISTORY_LIMIT, OpLogView},
    op::{LogSnapshot, Operation},
    types::{BackupId, CommandKind, JobId, JobStatus, SnapshotSeq},
};

use super::events::UiEvent;

/// Guard rejections raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Undo requested with an empty undo stack.
    NothingToUndo,
    /// Redo requested with an empty redo stack.
    NothingToRedo,
    /// Another undo/redo command is still in flight.
    CommandInFlight,
    /// A watcher for this job id is already running.
    WatchInFlight(JobId),
}

/// Failures surfaced through [`ControllerHandle`] methods.
#[derive(Debug)]
pub enum RuntimeError {
    /// Rejected by a client-side guard; no request was issued.
    Control(ControlError),
    /// Transport-layer failure.
    Api(ApiError),
    /// The controller loop is gone.
    ChannelClosed,
}

impl From<ControlError> for RuntimeError {
    fn from(value: ControlError) -> Self {
        Self::Control(value)
    }
}

impl From<ApiError> for RuntimeError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

/// Tunables for the controller loop.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Operation-log poll cadence in milliseconds.
    pub poll_interval_ms: u64,
    /// Delay before [`UiEvent::ReloadRequested`] fires after a successful
    /// command, in milliseconds.
    pub reload_delay_ms: u64,
    /// Status-poll attempts per watched backup job.
    pub job_attempts: u32,
    /// Delay between job status polls, in milliseconds.
    pub job_interval_ms: u64,
    /// Operations returned by the history query.
    pub history_limit: usize,
    /// Broadcast buffer for the event stream.
    pub events_capacity: usize,
    /// Command queue bound.
    pub command_queue_bound: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 5_000,
            reload_delay_ms: 1_000,
            job_attempts: 60,
            job_interval_ms: 2_000,
            history_limit: HISTORY_LIMIT,
            events_capacity: 256,
            command_queue_bound: 64,
        }
    }
}

/// Cloneable handle to a spawned controller loop.
pub struct ControllerHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<UiEvent>,
}

impl Clone for ControllerHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

type SharedApi = Arc<Mutex<Box<dyn BackupApi>>>;

enum Command {
    Undo {
        resp: oneshot::Sender<Result<CommandOutcome, RuntimeError>>,
    },
    Redo {
        resp: oneshot::Sender<Result<CommandOutcome, RuntimeError>>,
    },
    Controls {
        resp: oneshot::Sender<ControlState>,
    },
    History {
        resp: oneshot::Sender<Vec<Operation>>,
    },
    Refresh {
        resp: oneshot::Sender<Result<SnapshotSeq, RuntimeError>>,
    },
    WatchJob {
        job: JobId,
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    CreateBackup {
        request: BackupRequest,
        resp: oneshot::Sender<Result<JobId, RuntimeError>>,
    },
    Ping {
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    BackupHistory {
        resp: oneshot::Sender<Result<Vec<BackupRecord>, RuntimeError>>,
    },
    Restore {
        id: BackupId,
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    DeleteBackup {
        id: BackupId,
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    ValidateId {
        id: String,
        resp: oneshot::Sender<Result<IdCheck, RuntimeError>>,
    },
    Scheduled {
        resp: oneshot::Sender<Result<Vec<ScheduledBackup>, RuntimeError>>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

enum JobOutcome {
    Finished(JobStatus),
    Expired,
}

struct JobExit {
    job: JobId,
    outcome: JobOutcome,
}

struct CommandExit {
    kind: CommandKind,
    // Ok carries the optional server message, Err the user-facing text.
    result: Result<Option<String>, String>,
}

struct ControllerState {
    view: OpLogView,
    busy: Option<CommandKind>,
    next_seq: SnapshotSeq,
    jobs: HashMap<JobId, JoinHandle<()>>,
}

impl ControllerState {
    fn controls(&self) -> ControlState {
        let mut controls = self.view.controls();
        if let Some(kind) = self.busy {
            controls.mark_busy(kind);
        }
        controls
    }
}

/// Spawns the controller loop and returns its handle.
///
/// The loop owns the view, the busy flag, and the job-watcher registry;
/// everything reachable from outside goes through the handle. The periodic
/// operation-log poll starts immediately and dies with the loop.
pub fn spawn_controller(
    view: OpLogView,
    api: Box<dyn BackupApi>,
    config: RuntimeConfig,
) -> ControllerHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<UiEvent>(config.events_capacity.max(1));
    let api: SharedApi = Arc::new(Mutex::new(api));
    let (exit_tx, mut exit_rx) = mpsc::unbounded_channel::<JobExit>();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<CommandExit>();

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let next_seq = view.last_seq().map_or(1, |seq| seq + 1);
        let mut state = ControllerState {
            view,
            busy: None,
            next_seq,
            jobs: HashMap::new(),
        };

        let mut poll = time::interval(Duration::from_millis(config.poll_interval_ms.max(1)));
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => {
                    let Some(cmd) = cmd else { break; };
                    let done = handle_command(
                        cmd,
                        &mut state,
                        &api,
                        &events_tx_loop,
                        &config,
                        &exit_tx,
                        &done_tx,
                    ).await;

                    if done {
                        break;
                    }
                }
                _ = poll.tick() => {
                    poll_log(&mut state, &api, &events_tx_loop).await;
                }
                exit = exit_rx.recv() => {
                    if let Some(exit) = exit {
                        finish_job(exit, &mut state, &api, &events_tx_loop).await;
                    }
                }
                done = done_rx.recv() => {
                    if let Some(done) = done {
                        finish_command(done, &mut state, &api, &events_tx_loop, &config).await;
                    }
                }
            }
        }

        for (_, watcher) in state.jobs.drain() {
            watcher.abort();
        }
    });

    ControllerHandle { cmd_tx, events_tx }
}

impl ControllerHandle {
    /// Subscribes to the controller's event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.events_tx.subscribe()
    }

    /// Undoes the most recent completed operation.
    pub async fn undo(&self) -> Result<CommandOutcome, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Undo { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Redoes the most recent undone operation.
    pub async fn redo(&self) -> Result<CommandOutcome, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Redo { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Current derived button state, busy overlay included.
    pub async fn controls(&self) -> Result<ControlState, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Controls { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Most recent operations, reverse-chronological, capped by config.
    pub async fn history(&self) -> Result<Vec<Operation>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::History { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Fetches and applies the operation log outside the poll cadence.
    pub async fn refresh(&self) -> Result<SnapshotSeq, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Refresh { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Starts a status watcher for an async backup job.
    pub async fn watch_job(&self, job: impl Into<JobId>) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::WatchJob {
                job: job.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Submits a backup job and watches it until terminal or expired.
    pub async fn create_backup(&self, request: BackupRequest) -> Result<JobId, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::CreateBackup { request, resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Server liveness check.
    pub async fn ping(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Ping { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Stored backup archives.
    pub async fn backup_history(&self) -> Result<Vec<BackupRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::BackupHistory { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Restores a stored backup, then refreshes the history list.
    pub async fn restore(&self, id: impl Into<BackupId>) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Restore {
                id: id.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Deletes a stored backup, then refreshes the history list.
    pub async fn delete_backup(&self, id: impl Into<BackupId>) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::DeleteBackup {
                id: id.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Asks the server whether a caller-chosen backup id is acceptable.
    pub async fn validate_id(&self, id: impl Into<String>) -> Result<IdCheck, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::ValidateId {
                id: id.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Scheduled-backup listing.
    pub async fn scheduled(&self) -> Result<Vec<ScheduledBackup>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Scheduled { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Stops the loop, the periodic poll, and every in-flight watcher.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

async fn handle_command(
    cmd: Command,
    state: &mut ControllerState,
    api: &SharedApi,
    events_tx: &broadcast::Sender<UiEvent>,
    config: &RuntimeConfig,
    exit_tx: &mpsc::UnboundedSender<JobExit>,
    done_tx: &mpsc::UnboundedSender<CommandExit>,
) -> bool {
    match cmd {
        Command::Undo { resp } => {
            start_command(CommandKind::Undo, resp, state, api, events_tx, done_tx);
        }
        Command::Redo { resp } => {
            start_command(CommandKind::Redo, resp, state, api, events_tx, done_tx);
        }
        Command::Controls { resp } => {
            let _ = resp.send(state.controls());
        }
        Command::History { resp } => {
            let _ = resp.send(state.view.history_cloned(config.history_limit));
        }
        Command::Refresh { resp } => {
            let res = fetch_and_apply(state, api, events_tx)
                .await
                .map_err(RuntimeError::from);
            let _ = resp.send(res);
        }
        Command::WatchJob { job, resp } => {
            let _ = resp.send(register_watch(job, state, api, config, exit_tx));
        }
        Command::CreateBackup { request, resp } => {
            let api_ref = Arc::clone(api);
            let created = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.create_backup(&request)
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)));

            let res = match created {
                Ok(job) => {
                    if let Err(err) = register_watch(job.clone(), state, api, config, exit_tx) {
                        debug!("backup job {job}: watcher not registered: {err:?}");
                    }
                    Ok(job)
                }
                Err(err) => Err(RuntimeError::Api(err)),
            };
            let _ = resp.send(res);
        }
        Command::Ping { resp } => {
            let api_ref = Arc::clone(api);
            let res = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.ping()
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)))
            .map_err(RuntimeError::Api);
            let _ = resp.send(res);
        }
        Command::BackupHistory { resp } => {
            let api_ref = Arc::clone(api);
            let res = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.backup_history()
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)))
            .map_err(RuntimeError::Api);
            let _ = resp.send(res);
        }
        Command::Restore { id, resp } => {
            let api_ref = Arc::clone(api);
            let res = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.restore(&id)
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)))
            .map_err(RuntimeError::Api);
            if res.is_ok() {
                refresh_backup_list(api, events_tx).await;
            }
            let _ = resp.send(res);
        }
        Command::DeleteBackup { id, resp } => {
            let api_ref = Arc::clone(api);
            let res = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.delete_backup(&id)
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)))
            .map_err(RuntimeError::Api);
            if res.is_ok() {
                refresh_backup_list(api, events_tx).await;
            }
            let _ = resp.send(res);
        }
        Command::ValidateId { id, resp } => {
            let api_ref = Arc::clone(api);
            let res = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.validate_id(&id)
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)))
            .map_err(RuntimeError::Api);
            let _ = resp.send(res);
        }
        Command::Scheduled { resp } => {
            let api_ref = Arc::clone(api);
            let res = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.scheduled()
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)))
            .map_err(RuntimeError::Api);
            let _ = resp.send(res);
        }
        Command::Shutdown { resp } => {
            for (_, watcher) in state.jobs.drain() {
                watcher.abort();
            }
            let _ = resp.send(());
            return true;
        }
    }

    false
}

/// Guards and dispatches one undo/redo command.
///
/// The POST runs off-loop so poll ticks keep flowing while the command is
/// in flight; the busy flag rejects a second command until the first one
/// reports back through `done_tx`.
fn start_command(
    kind: CommandKind,
    resp: oneshot::Sender<Result<CommandOutcome, RuntimeError>>,
    state: &mut ControllerState,
    api: &SharedApi,
    events_tx: &broadcast::Sender<UiEvent>,
    done_tx: &mpsc::UnboundedSender<CommandExit>,
) {
    if state.busy.is_some() {
        let _ = resp.send(Err(ControlError::CommandInFlight.into()));
        return;
    }
    let controls = state.view.controls();
    let enabled = match kind {
        CommandKind::Undo => controls.undo.enabled,
        CommandKind::Redo => controls.redo.enabled,
    };
    if !enabled {
        let guard = match kind {
            CommandKind::Undo => ControlError::NothingToUndo,
            CommandKind::Redo => ControlError::NothingToRedo,
        };
        let _ = resp.send(Err(guard.into()));
        return;
    }

    state.busy = Some(kind);
    publish_controls(state, events_tx);

    let api_ref = Arc::clone(api);
    let done_tx = done_tx.clone();
    tokio::spawn(async move {
        let posted = tokio::task::spawn_blocking(move || {
            let mut api = api_ref.blocking_lock();
            match kind {
                CommandKind::Undo => api.undo(),
                CommandKind::Redo => api.redo(),
            }
        })
        .await
        .unwrap_or_else(|err| Err(join_error(err)));

        match posted {
            Ok(outcome) => {
                let _ = done_tx.send(CommandExit {
                    kind,
                    result: Ok(outcome.message.clone()),
                });
                let _ = resp.send(Ok(outcome));
            }
            Err(err) => {
                let _ = done_tx.send(CommandExit {
                    kind,
                    result: Err(err.user_message()),
                });
                let _ = resp.send(Err(RuntimeError::Api(err)));
            }
        }
    });
}

async fn finish_command(
    exit: CommandExit,
    state: &mut ControllerState,
    api: &SharedApi,
    events_tx: &broadcast::Sender<UiEvent>,
    config: &RuntimeConfig,
) {
    state.busy = None;
    match exit.result {
        Ok(message) => {
            let _ = events_tx.send(UiEvent::CommandAccepted {
                kind: exit.kind,
                message,
            });
            poll_log(state, api, events_tx).await;
            schedule_reload(events_tx.clone(), config.reload_delay_ms);
        }
        Err(message) => {
            let _ = events_tx.send(UiEvent::CommandRejected {
                kind: exit.kind,
                message,
            });
            publish_controls(state, events_tx);
        }
    }
}

async fn poll_log(
    state: &mut ControllerState,
    api: &SharedApi,
    events_tx: &broadcast::Sender<UiEvent>,
) {
    if let Err(err) = fetch_and_apply(state, api, events_tx).await {
        warn!("operation log poll failed, keeping cached log: {err:?}");
    }
}

async fn fetch_and_apply(
    state: &mut ControllerState,
    api: &SharedApi,
    events_tx: &broadcast::Sender<UiEvent>,
) -> Result<SnapshotSeq, ApiError> {
    let seq = state.next_seq;
    state.next_seq += 1;

    let api_ref = Arc::clone(api);
    let operations = tokio::task::spawn_blocking(move || {
        let mut api = api_ref.blocking_lock();
        api.fetch_operations()
    })
    .await
    .unwrap_or_else(|err| Err(join_error(err)))?;

    if state.view.apply(LogSnapshot { seq, operations }) {
        debug!("applied operation log snapshot {seq}");
        let _ = events_tx.send(UiEvent::SnapshotApplied { seq });
        publish_controls(state, events_tx);
    }
    Ok(seq)
}

fn publish_controls(state: &ControllerState, events_tx: &broadcast::Sender<UiEvent>) {
    let _ = events_tx.send(UiEvent::ControlsChanged {
        controls: state.controls(),
    });
}

fn register_watch(
    job: JobId,
    state: &mut ControllerState,
    api: &SharedApi,
    config: &RuntimeConfig,
    exit_tx: &mpsc::UnboundedSender<JobExit>,
) -> Result<(), RuntimeError> {
    if state.jobs.contains_key(&job) {
        return Err(ControlError::WatchInFlight(job).into());
    }

    let watcher = spawn_job_watch(
        Arc::clone(api),
        job.clone(),
        config.job_attempts,
        Duration::from_millis(config.job_interval_ms.max(1)),
        exit_tx.clone(),
    );
    state.jobs.insert(job, watcher);
    Ok(())
}

async fn finish_job(
    exit: JobExit,
    state: &mut ControllerState,
    api: &SharedApi,
    events_tx: &broadcast::Sender<UiEvent>,
) {
    state.jobs.remove(&exit.job);

    match exit.outcome {
        JobOutcome::Finished(status) => {
            if status == JobStatus::Failed {
                warn!("backup job {} failed", exit.job);
            }
            let _ = events_tx.send(UiEvent::JobFinished {
                job: exit.job,
                status,
            });
        }
        JobOutcome::Expired => {
            debug!(
                "backup job {} still pending after attempt budget, giving up",
                exit.job
            );
            let _ = events_tx.send(UiEvent::JobExpired { job: exit.job });
        }
    }

    refresh_backup_list(api, events_tx).await;
}

async fn refresh_backup_list(api: &SharedApi, events_tx: &broadcast::Sender<UiEvent>) {
    let api_ref = Arc::clone(api);
    let fetched = tokio::task::spawn_blocking(move || {
        let mut api = api_ref.blocking_lock();
        api.backup_history()
    })
    .await
    .unwrap_or_else(|err| Err(join_error(err)));

    match fetched {
        Ok(backups) => {
            let _ = events_tx.send(UiEvent::BackupListRefreshed { backups });
        }
        Err(err) => warn!("backup history refresh failed: {err:?}"),
    }
}

fn spawn_job_watch(
    api: SharedApi,
    job: JobId,
    attempts: u32,
    interval: Duration,
    exit_tx: mpsc::UnboundedSender<JobExit>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        for attempt in 0..attempts {
            if attempt > 0 {
                time::sleep(interval).await;
            }

            let api_ref = Arc::clone(&api);
            let job_query = job.clone();
            let polled = tokio::task::spawn_blocking(move || {
                let mut api = api_ref.blocking_lock();
                api.job_status(&job_query)
            })
            .await
            .unwrap_or_else(|err| Err(join_error(err)));

            match polled {
                Ok(status) if status.is_terminal() => {
                    let _ = exit_tx.send(JobExit {
                        job,
                        outcome: JobOutcome::Finished(status),
                    });
                    return;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(
                        "backup job {job}: status poll failed (attempt {}/{attempts}): {err:?}",
                        attempt + 1,
                    );
                }
            }
        }

        let _ = exit_tx.send(JobExit {
            job,
            outcome: JobOutcome::Expired,
        });
    })
}

fn schedule_reload(events_tx: broadcast::Sender<UiEvent>, delay_ms: u64) {
    tokio::spawn(async move {
        time::sleep(Duration::from_millis(delay_ms)).await;
        let _ = events_tx.send(UiEvent::ReloadRequested);
    });
}

fn join_error(err: tokio::task::JoinError) -> ApiError {
    ApiError::Transport(format!("join error: {err}"))
}
