//! Background turn scheduling.

use crate::{JobStatus, JobStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;
use weaver_core::{Conversation, StoryConfig};
use weaver_story::{StorySegment, TurnOrchestrator};

/// Runs story turns as background jobs.
///
/// `submit` returns a job id immediately and spawns the turn onto the
/// runtime; callers poll `status` and fetch the segment with `result` once
/// the job reports `Complete`. Submitting a turn for each offered choice
/// before the child picks one pre-generates every branch, trading backend
/// calls for instant response.
#[derive(Clone)]
pub struct JobScheduler {
    orchestrator: Arc<TurnOrchestrator>,
    store: JobStore,
}

impl JobScheduler {
    /// Creates a scheduler with its own empty job store.
    pub fn new(orchestrator: Arc<TurnOrchestrator>) -> Self {
        Self {
            orchestrator,
            store: JobStore::new(),
        }
    }

    /// Creates a scheduler over an existing store.
    pub fn with_store(orchestrator: Arc<TurnOrchestrator>, store: JobStore) -> Self {
        Self {
            orchestrator,
            store,
        }
    }

    /// The underlying job store.
    pub fn store(&self) -> &JobStore {
        &self.store
    }

    /// Submit a turn for background generation and return its job id.
    ///
    /// Pass `None` history to open a session. The spawned job advances the
    /// status through `GeneratingText` and `GeneratingMedia`; a text-phase
    /// failure marks the job `Failed` with the error message, while media
    /// failures leave empty slots in a `Complete` result.
    #[instrument(skip_all, fields(child = %story.child_name()))]
    pub fn submit(
        &self,
        history: Option<Conversation>,
        choice: Option<String>,
        story: StoryConfig,
    ) -> Uuid {
        let id = self.store.register();
        let orchestrator = self.orchestrator.clone();
        let store = self.store.clone();

        let turn_store = store.clone();
        let turn = tokio::spawn(async move {
            turn_store.set_status(id, JobStatus::GeneratingText);
            let turn = match orchestrator.generate_text(history, choice, &story).await {
                Ok(turn) => turn,
                Err(e) => {
                    turn_store.fail(id, e.to_string());
                    return;
                }
            };
            turn_store.set_status(id, JobStatus::GeneratingMedia);
            let segment = orchestrator.generate_media(turn, &story).await;
            turn_store.complete(id, segment);
        });

        // A panicked or aborted turn task must still reach a final status.
        tokio::spawn(async move {
            if let Err(e) = turn.await {
                store.fail(id, format!("Turn task did not finish: {}", e));
            }
        });

        debug!(job_id = %id, "Submitted turn job");
        id
    }

    /// Current status of a job, `NotFound` for unknown ids.
    pub fn status(&self, id: Uuid) -> JobStatus {
        self.store.status(id)
    }

    /// Result of a complete job, `None` otherwise.
    pub fn result(&self, id: Uuid) -> Option<StorySegment> {
        self.store.result(id)
    }

    /// Error message of a failed job, `None` otherwise.
    pub fn error(&self, id: Uuid) -> Option<String> {
        self.store.error(id)
    }

    /// Remove jobs older than the given age from the store.
    pub fn evict_older_than(&self, age: Duration) -> usize {
        self.store.evict_older_than(age)
    }
}
