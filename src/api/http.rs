//! `ureq`-backed transport against the curation server.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
    backup::{BackupRecord, BackupRequest, CommandOutcome, IdCheck, ScheduledBackup},
    op::Operation,
    types::{BackupId, JobId, JobStatus},
};

use super::{ApiError, ApiResult, BackupApi};

/// HTTP client for the `/api/backup` surface.
///
/// No transport-level retry loop: the pollers own the retry cadence, so a
/// failed request counts as exactly one poll attempt.
pub struct HttpBackupApi {
    base_url: String,
    agent: ureq::Agent,
    token: Option<String>,
}

impl HttpBackupApi {
    /// Builds a client for `base_url` with an optional bearer token.
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .timeout_write(Duration::from_secs(30))
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
            token: token.map(|t| t.to_string()),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    fn apply_auth(&self, req: ureq::Request) -> ureq::Request {
        if let Some(ref token) = self.token {
            req.set("Authorization", &format!("Bearer {token}"))
        } else {
            req
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self
            .apply_auth(self.agent.get(&self.url(path)))
            .call()
            .map_err(map_ureq_err)?;
        decode(resp)
    }

    fn get_ok(&self, path: &str) -> ApiResult<()> {
        self.apply_auth(self.agent.get(&self.url(path)))
            .call()
            .map_err(map_ureq_err)?;
        Ok(())
    }

    fn post_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self
            .apply_auth(self.agent.post(&self.url(path)))
            .call()
            .map_err(map_ureq_err)?;
        decode(resp)
    }

    fn post_ok(&self, path: &str) -> ApiResult<()> {
        self.apply_auth(self.agent.post(&self.url(path)))
            .call()
            .map_err(map_ureq_err)?;
        Ok(())
    }
}

impl BackupApi for HttpBackupApi {
    fn fetch_operations(&mut self) -> ApiResult<Vec<Operation>> {
        let body: OperationsBody = self.get_json("api/backup/operations")?;
        Ok(body.operations)
    }

    fn undo(&mut self) -> ApiResult<CommandOutcome> {
        self.post_json("api/backup/operations/undo")
    }

    fn redo(&mut self) -> ApiResult<CommandOutcome> {
        self.post_json("api/backup/operations/redo")
    }

    fn job_status(&mut self, job: &JobId) -> ApiResult<JobStatus> {
        let body: StatusBody = self.get_json(&format!("api/backup/status/{job}"))?;
        Ok(body.op.status)
    }

    fn create_backup(&mut self, request: &BackupRequest) -> ApiResult<JobId> {
        let resp = self
            .apply_auth(self.agent.post(&self.url("api/backup/create")))
            .send_json(request)
            .map_err(map_ureq_err)?;
        let body: CreateBody = decode(resp)?;
        Ok(body.op_id)
    }

    fn backup_history(&mut self) -> ApiResult<Vec<BackupRecord>> {
        let body: HistoryBody = self.get_json("api/backup/history")?;
        Ok(body.backups)
    }

    fn ping(&mut self) -> ApiResult<()> {
        self.get_ok("api/backup/ping")
    }

    fn restore(&mut self, id: &BackupId) -> ApiResult<()> {
        self.post_ok(&format!("api/backup/restore/{id}"))
    }

    fn delete_backup(&mut self, id: &BackupId) -> ApiResult<()> {
        self.apply_auth(self.agent.delete(&self.url(&format!("api/backup/{id}"))))
            .call()
            .map_err(map_ureq_err)?;
        Ok(())
    }

    fn validate_id(&mut self, id: &str) -> ApiResult<IdCheck> {
        self.get_json(&format!("api/backup/validate_id/{id}"))
    }

    fn scheduled(&mut self) -> ApiResult<Vec<ScheduledBackup>> {
        let body: ScheduledBody = self.get_json("api/backup/scheduled")?;
        Ok(body.scheduled)
    }
}

#[derive(Deserialize)]
struct OperationsBody {
    operations: Vec<Operation>,
}

#[derive(Deserialize)]
struct StatusBody {
    op: StatusOpBody,
}

#[derive(Deserialize)]
struct StatusOpBody {
    status: JobStatus,
}

#[derive(Deserialize)]
struct CreateBody {
    op_id: JobId,
}

#[derive(Deserialize)]
struct HistoryBody {
    backups: Vec<BackupRecord>,
}

#[derive(Deserialize)]
struct ScheduledBody {
    scheduled: Vec<ScheduledBackup>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn map_ureq_err(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, resp) => ApiError::Status {
            code,
            message: resp.into_json::<ErrorBody>().ok().map(|body| body.error),
        },
        ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
    }
}

fn decode<T: DeserializeOwned>(resp: ureq::Response) -> ApiResult<T> {
    resp.into_json().map_err(|err| ApiError::Decode(err.to_string()))
}
