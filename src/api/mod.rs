/// HTTP implementation over `ureq`.
pub mod http;

use crate::{
    backup::{BackupRecord, BackupRequest, CommandOutcome, IdCheck, ScheduledBackup},
    op::Operation,
    types::{BackupId, JobId, JobStatus},
};

/// Transport-layer failure taxonomy.
///
/// Pollers treat every variant as "try again next cycle"; user-initiated
/// commands surface [`ApiError::user_message`] instead.
#[derive(Debug)]
pub enum ApiError {
    /// Network failure before a status line was received.
    Transport(String),
    /// Non-OK HTTP status; `message` carries the server's `error` body
    /// field when present.
    Status {
        /// HTTP status code.
        code: u16,
        /// Server-supplied error text, when the body had one.
        message: Option<String>,
    },
    /// Malformed success body.
    Decode(String),
}

impl ApiError {
    /// Text suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Network error".to_string(),
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { message: None, .. } | ApiError::Decode(_) => {
                "Unknown error".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Result alias for transport calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Blocking transport contract against the curation server's backup API.
///
/// Driven from the async runtime through `spawn_blocking`; test doubles
/// implement it directly. Methods with a benign default are the plain
/// passthroughs a double rarely cares about.
pub trait BackupApi: Send {
    /// GET `/api/backup/operations` — the full operation log.
    fn fetch_operations(&mut self) -> ApiResult<Vec<Operation>>;

    /// POST `/api/backup/operations/undo`, no body.
    fn undo(&mut self) -> ApiResult<CommandOutcome>;

    /// POST `/api/backup/operations/redo`, no body.
    fn redo(&mut self) -> ApiResult<CommandOutcome>;

    /// GET `/api/backup/status/{job}` — current status of an async job.
    fn job_status(&mut self, job: &JobId) -> ApiResult<JobStatus>;

    /// POST `/api/backup/create` — submit a backup job, returning its id.
    fn create_backup(&mut self, request: &BackupRequest) -> ApiResult<JobId>;

    /// GET `/api/backup/history` — stored backup archives.
    fn backup_history(&mut self) -> ApiResult<Vec<BackupRecord>>;

    /// GET `/api/backup/ping` — liveness check.
    fn ping(&mut self) -> ApiResult<()> {
        Ok(())
    }

    /// POST `/api/backup/restore/{id}`.
    fn restore(&mut self, _id: &BackupId) -> ApiResult<()> {
        Ok(())
    }

    /// DELETE `/api/backup/{id}`.
    fn delete_backup(&mut self, _id: &BackupId) -> ApiResult<()> {
        Ok(())
    }

    /// GET `/api/backup/validate_id/{id}`.
    fn validate_id(&mut self, _id: &str) -> ApiResult<IdCheck> {
        Ok(IdCheck {
            valid: true,
            reason: None,
        })
    }

    /// GET `/api/backup/scheduled`.
    fn scheduled(&mut self) -> ApiResult<Vec<ScheduledBackup>> {
        Ok(Vec::new())
    }
}
