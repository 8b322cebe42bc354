//! Lullaby Engine
//!
//! The asynchronous job layer: everything between "the caller wants audio"
//! and "here is a URL to the generated file".
//!
//! Architecture:
//! - Configuration: provider credentials, polling budget, model identifiers
//! - Submitter: builds and sends the job-creation request, returns a handle
//! - Poller: drives a handle to a terminal state within a bounded budget
//! - Extractor: locates the artifact URL in a shape-varying response body
//! - Orchestrator: composition root mapping every failure into one
//!   caller-facing error kind
//!
//! The engine holds no state across calls; each run is independent and the
//! only shared resource is the pooled HTTP client.

pub mod config;
pub mod extract;
pub mod orchestrator;
pub mod poll;
pub mod submit;

// Re-export commonly used types
pub use config::EngineConfig;
pub use extract::extract_artifact_url;
pub use orchestrator::Orchestrator;
pub use poll::{PollBudget, PollError, Poller, TerminalStatus};
pub use submit::{SubmitError, Submitter};
