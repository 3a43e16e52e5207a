//! Summary aggregation over a validated audit result

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AuditResult, Impact};

/// Derived counts, score, and impact breakdown for one result document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_violations: usize,
    pub total_passes: usize,
    pub total_checks: usize,
    /// Percentage of checks passed, rounded to the nearest integer
    pub score: u32,
    /// Violation counts per impact label; zero-count labels are omitted
    pub by_impact: BTreeMap<Impact, usize>,
}

impl Summary {
    /// Count for any label, including ones omitted from the breakdown
    pub fn count_for(&self, impact: Impact) -> usize {
        self.by_impact.get(&impact).copied().unwrap_or(0)
    }
}

/// Derive summary statistics from a validated result. Pure and deterministic.
///
/// An empty result scores 100: a page with zero checks has nothing failing,
/// so it is treated as fully accessible by convention rather than as a
/// division-by-zero edge case.
pub fn summarize(result: &AuditResult) -> Summary {
    let total_violations = result.violations.len();
    let total_passes = result.passes.len();
    let total_checks = total_violations + total_passes;

    let score = if total_checks > 0 {
        ((total_passes as f64 / total_checks as f64) * 100.0).round() as u32
    } else {
        100
    };

    let mut by_impact = BTreeMap::new();
    for violation in &result.violations {
        *by_impact.entry(violation.impact_or_unknown()).or_insert(0) += 1;
    }

    Summary {
        total_violations,
        total_passes,
        total_checks,
        score,
        by_impact,
    }
}
