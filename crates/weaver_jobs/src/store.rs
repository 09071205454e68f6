//! In-memory job registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use uuid::Uuid;
use weaver_story::StorySegment;

/// Lifecycle state of a story generation job.
///
/// Transitions only move forward: `Pending` through the generation phases
/// to exactly one of `Complete` or `Failed`. `NotFound` is a sentinel
/// returned for unknown or evicted job ids and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Registered, not yet picked up
    Pending,
    /// Narrative text generation in flight
    GeneratingText,
    /// Media fan-out in flight
    GeneratingMedia,
    /// Finished with a result available
    Complete,
    /// Finished with an error message available
    Failed,
    /// No job known under the queried id
    NotFound,
}

impl JobStatus {
    /// Position in the forward-only lifecycle.
    fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::GeneratingText => 1,
            Self::GeneratingMedia => 2,
            Self::Complete | Self::Failed => 3,
            Self::NotFound => u8::MAX,
        }
    }

    /// True for `Complete` and `Failed`.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

/// One tracked generation job.
#[derive(Debug, Clone)]
struct Job {
    status: JobStatus,
    result: Option<StorySegment>,
    error: Option<String>,
    created_at: Instant,
}

impl Job {
    fn new() -> Self {
        Self {
            status: JobStatus::Pending,
            result: None,
            error: None,
            created_at: Instant::now(),
        }
    }
}

/// Shared in-memory registry of generation jobs.
///
/// Cheap to clone; all clones view the same map. Reads never fail: an
/// unknown id yields the `NotFound` status and empty results rather than an
/// error, so pollers and evicted jobs look the same to callers.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl JobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending job and return its id.
    pub fn register(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.jobs.write().unwrap().insert(id, Job::new());
        debug!(job_id = %id, "Registered job");
        id
    }

    /// Advance a job's status.
    ///
    /// Transitions that would move backward or leave a final state are
    /// ignored, as are unknown ids. Returns true when the status changed.
    pub fn set_status(&self, id: Uuid, status: JobStatus) -> bool {
        let mut jobs = self.jobs.write().unwrap();
        let Some(job) = jobs.get_mut(&id) else {
            warn!(job_id = %id, "Status update for unknown job");
            return false;
        };
        if status.rank() <= job.status.rank() {
            warn!(
                job_id = %id,
                current = %job.status,
                requested = %status,
                "Ignoring backward status transition"
            );
            return false;
        }
        debug!(job_id = %id, from = %job.status, to = %status, "Job status advanced");
        job.status = status;
        true
    }

    /// Mark a job complete and attach its result.
    pub fn complete(&self, id: Uuid, segment: StorySegment) {
        let mut jobs = self.jobs.write().unwrap();
        let Some(job) = jobs.get_mut(&id) else {
            warn!(job_id = %id, "Completion for unknown job");
            return;
        };
        if job.status.is_final() {
            warn!(job_id = %id, status = %job.status, "Completion for finished job ignored");
            return;
        }
        job.status = JobStatus::Complete;
        job.result = Some(segment);
        debug!(job_id = %id, "Job complete");
    }

    /// Mark a job failed and record the error message.
    pub fn fail(&self, id: Uuid, message: impl Into<String>) {
        let mut jobs = self.jobs.write().unwrap();
        let Some(job) = jobs.get_mut(&id) else {
            warn!(job_id = %id, "Failure for unknown job");
            return;
        };
        if job.status.is_final() {
            warn!(job_id = %id, status = %job.status, "Failure for finished job ignored");
            return;
        }
        let message = message.into();
        warn!(job_id = %id, error = %message, "Job failed");
        job.status = JobStatus::Failed;
        job.error = Some(message);
    }

    /// Current status of a job, `NotFound` for unknown ids.
    pub fn status(&self, id: Uuid) -> JobStatus {
        self.jobs
            .read()
            .unwrap()
            .get(&id)
            .map(|job| job.status)
            .unwrap_or(JobStatus::NotFound)
    }

    /// Result of a complete job, `None` otherwise.
    pub fn result(&self, id: Uuid) -> Option<StorySegment> {
        self.jobs
            .read()
            .unwrap()
            .get(&id)
            .and_then(|job| job.result.clone())
    }

    /// Error message of a failed job, `None` otherwise.
    pub fn error(&self, id: Uuid) -> Option<String> {
        self.jobs
            .read()
            .unwrap()
            .get(&id)
            .and_then(|job| job.error.clone())
    }

    /// Remove jobs registered longer ago than the given age.
    ///
    /// Returns the number of evicted jobs. Evicted ids report `NotFound`
    /// from then on.
    pub fn evict_older_than(&self, age: Duration) -> usize {
        let mut jobs = self.jobs.write().unwrap();
        let before = jobs.len();
        jobs.retain(|_, job| job.created_at.elapsed() < age);
        let evicted = before - jobs.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired jobs");
        }
        evicted
    }

    /// Number of tracked jobs.
    pub fn len(&self) -> usize {
        self.jobs.read().unwrap().len()
    }

    /// True when no jobs are tracked.
    pub fn is_empty(&self) -> bool {
        self.jobs.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_reads_as_not_found() {
        let store = JobStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.status(id), JobStatus::NotFound);
        assert!(store.result(id).is_none());
        assert!(store.error(id).is_none());
    }

    #[test]
    fn status_never_moves_backward() {
        let store = JobStore::new();
        let id = store.register();

        assert!(store.set_status(id, JobStatus::GeneratingMedia));
        assert!(!store.set_status(id, JobStatus::GeneratingText));
        assert!(!store.set_status(id, JobStatus::Pending));
        assert_eq!(store.status(id), JobStatus::GeneratingMedia);
    }

    #[test]
    fn failure_after_completion_is_ignored() {
        let store = JobStore::new();
        let id = store.register();
        store.set_status(id, JobStatus::Complete);
        store.fail(id, "late failure");
        assert_eq!(store.status(id), JobStatus::Complete);
        assert!(store.error(id).is_none());
    }

    #[test]
    fn failed_job_keeps_its_message() {
        let store = JobStore::new();
        let id = store.register();
        store.fail(id, "backend unreachable");
        assert_eq!(store.status(id), JobStatus::Failed);
        assert_eq!(store.error(id).as_deref(), Some("backend unreachable"));
        assert!(store.result(id).is_none());
    }

    #[test]
    fn eviction_removes_only_old_jobs() {
        let store = JobStore::new();
        let old = store.register();
        let fresh = store.register();

        // Zero max age evicts everything registered so far.
        let evicted = store.evict_older_than(Duration::ZERO);
        assert_eq!(evicted, 2);
        assert_eq!(store.status(old), JobStatus::NotFound);
        assert_eq!(store.status(fresh), JobStatus::NotFound);

        let kept = store.register();
        assert_eq!(store.evict_older_than(Duration::from_secs(3600)), 0);
        assert_eq!(store.status(kept), JobStatus::Pending);
    }

    #[test]
    fn clones_share_state() {
        let store = JobStore::new();
        let clone = store.clone();
        let id = store.register();
        assert_eq!(clone.status(id), JobStatus::Pending);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(JobStatus::GeneratingText.to_string(), "generating_text");
        let json = serde_json::to_string(&JobStatus::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}
