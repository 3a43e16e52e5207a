//! Core domain types for audit results and remediation advice

pub mod advice;
pub mod error;
pub mod report;

pub use advice::{
    AdviceOutcome, AdviceRequest, AdviceResponse, OrderedStep, PriorityActions, RankedFix,
    ViolationDigest,
};
pub use error::{AdviceError, ProviderError, ValidationError};
pub use report::{AffectedNode, AuditResult, Impact, PassRecord, Violation};
