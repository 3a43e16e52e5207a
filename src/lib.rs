//! Axess: accessibility audit analysis and remediation-advice gateway
//!
//! Ingests axe-core style audit reports, computes pass/fail summaries,
//! filters violations for browsing, composes exportable reports, and
//! forwards violation digests to an LLM advice provider behind a
//! per-client rate limit.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

mod app;

pub use app::{create_app, AppHandle};
pub use config::Config;
pub use logging::init_tracing;
