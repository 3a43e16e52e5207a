//! Report composition for export and sharing

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::summary::{summarize, Summary};
use crate::domain::{AdviceResponse, AuditResult, PassRecord, Violation};

/// Self-contained report document handed to an external save/share
/// collaborator. This component only builds the blob; it performs no
/// file-system or clipboard operations itself.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportableReport {
    pub url: String,
    pub timestamp: String,
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub violations: Vec<Violation>,
    pub passes: Vec<PassRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<AdviceResponse>,
}

impl ExportableReport {
    /// Serialize to the export blob format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Combine a result, its summary, and optional advice into one artifact
pub fn compose(result: &AuditResult, advice: Option<&AdviceResponse>) -> ExportableReport {
    ExportableReport {
        url: result.url.clone(),
        timestamp: result.timestamp.clone(),
        generated_at: Utc::now(),
        summary: summarize(result),
        violations: result.violations.clone(),
        passes: result.passes.clone(),
        advice: advice.cloned(),
    }
}
