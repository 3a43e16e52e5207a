//! Advice request/response model
//!
//! `AdviceRequest` is the ephemeral projection of an audit result that gets
//! handed to the advice gateway; it is built fresh per request and never
//! persisted. `AdviceResponse` is the structured remediation plan the
//! upstream model must return; all four sections are required or the
//! response is discarded.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::AdviceError;
use super::report::{AffectedNode, AuditResult};

/// Compact per-violation record sent to the advice service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViolationDigest {
    pub id: String,
    /// Always a concrete label; absent impacts are projected as `"unknown"`
    pub impact: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub node_count: usize,
    /// Full node detail for per-element prompts
    #[serde(default)]
    pub nodes: Vec<AffectedNode>,
}

/// Payload for one advice call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub url: String,
    pub total_violations: usize,
    pub violations: Vec<ViolationDigest>,
}

impl AdviceRequest {
    /// Project a validated audit result into an advice payload.
    ///
    /// Callers must not invoke the advice pipeline on a clean result; an
    /// empty violation list is rejected here with [`AdviceError::EmptyInput`].
    pub fn from_result(result: &AuditResult) -> Result<Self, AdviceError> {
        if result.violations.is_empty() {
            return Err(AdviceError::EmptyInput);
        }

        let violations = result
            .violations
            .iter()
            .map(|v| ViolationDigest {
                id: v.id.clone(),
                impact: v.impact_or_unknown().as_str().to_string(),
                description: v.description.clone(),
                help: v.help.clone(),
                tags: v.tags.clone(),
                node_count: v.nodes.len(),
                nodes: v.nodes.clone(),
            })
            .collect::<Vec<_>>();

        Ok(Self {
            url: result.url.clone(),
            total_violations: violations.len(),
            violations,
        })
    }
}

/// One immediately actionable fix, ranked by priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankedFix {
    pub rank: u32,
    pub description: String,
}

/// One strategic follow-up step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderedStep {
    pub order: u32,
    pub description: String,
}

/// Triage buckets for remediation work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriorityActions {
    pub high: String,
    pub medium: String,
    pub low: String,
}

/// Structured remediation plan returned by the advice service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub top_fixes: Vec<RankedFix>,
    pub next_steps: Vec<OrderedStep>,
    pub priority_actions: PriorityActions,
    /// `Low`/`Medium`/`High`, or a free-text variant the model chose
    pub estimated_effort: String,
}

impl AdviceResponse {
    /// Wire names of the four required sections
    pub const REQUIRED_FIELDS: [&'static str; 4] = [
        "topFixes",
        "nextSteps",
        "priorityActions",
        "estimatedEffort",
    ];
}

/// Successful gateway result: the advice plus the caller's remaining quota
#[derive(Debug, Clone)]
pub struct AdviceOutcome {
    pub advice: AdviceResponse,
    pub remaining_requests: u32,
}
