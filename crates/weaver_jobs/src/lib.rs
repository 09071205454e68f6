//! Job-based background execution for story turns.
//!
//! A turn takes several seconds of backend calls, so callers submit it as a
//! job and poll for completion instead of holding a request open. The store
//! tracks each job through a forward-only status lifecycle; the scheduler
//! spawns the two orchestration phases onto the Tokio runtime and records
//! the outcome.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod scheduler;
mod store;

pub use scheduler::JobScheduler;
pub use store::{JobStatus, JobStore};
