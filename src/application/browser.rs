//! Free-text and impact filtering over the violation list

use crate::domain::{Impact, Violation};

/// Impact dimension of the issue filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactFilter {
    All,
    Level(Impact),
}

impl ImpactFilter {
    /// Parse the UI's filter value; `"all"` disables the impact dimension,
    /// anything else is treated as a concrete label.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            ImpactFilter::All
        } else {
            ImpactFilter::Level(value.parse().unwrap_or(Impact::Unknown))
        }
    }

    fn matches(&self, violation: &Violation) -> bool {
        match self {
            ImpactFilter::All => true,
            ImpactFilter::Level(level) => violation.impact_or_unknown() == *level,
        }
    }
}

/// Filter violations by free-text query and impact level.
///
/// The query is a case-insensitive substring match against the rule id,
/// description, help text, and tags; both dimensions must match. An empty
/// query matches everything. Pure, re-evaluated on every input change.
pub fn filter<'a>(
    violations: &'a [Violation],
    query: &str,
    impact: ImpactFilter,
) -> Vec<&'a Violation> {
    let needle = query.trim().to_lowercase();

    violations
        .iter()
        .filter(|v| impact.matches(v))
        .filter(|v| needle.is_empty() || matches_query(v, &needle))
        .collect()
}

fn matches_query(violation: &Violation, needle: &str) -> bool {
    violation.id.to_lowercase().contains(needle)
        || violation.description.to_lowercase().contains(needle)
        || violation.help.to_lowercase().contains(needle)
        || violation
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
