//! Wire types for the analysis service's job protocol.

use serde::{Deserialize, Serialize};

use super::AuthorSnapshot;

/// Lifecycle state of an analysis job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    /// The service is still scraping and computing.
    Running,
    /// The job finished and a snapshot is available.
    Completed,
    /// The job failed terminally.
    Failed,
}

impl JobState {
    /// True once the job can no longer change state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Response to starting an analysis job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedJob {
    /// Identifier to poll with.
    pub job_id: String,
}

/// One poll of a running job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPoll {
    /// Current job state.
    pub status: JobState,

    /// Percent complete, when the service reports it.
    #[serde(default)]
    pub progress: Option<u8>,

    /// The finished snapshot, present only on `completed`.
    #[serde(default)]
    pub result: Option<AuthorSnapshot>,

    /// Failure message, present only on `failed`.
    #[serde(default)]
    pub error: Option<String>,
}
