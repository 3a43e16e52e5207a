//! Prompt templates for the advice service

use crate::domain::AdviceRequest;

/// System instructions: role, task, and the exact output schema the model
/// must produce. The schema here must stay in sync with
/// [`crate::domain::AdviceResponse`].
pub const ADVICE_INSTRUCTIONS: &str = r#"You are an accessibility expert. You will be given data on accessibility violations for a website. Analyze the given accessibility violations and provide actionable advice.

Respond with a JSON object in exactly the following format:
{
  "topFixes": [
    {"rank": 1, "description": "A specific, actionable fix developers can implement immediately"}
  ],
  "nextSteps": [
    {"order": 1, "description": "A strategic next step for improving accessibility long-term"}
  ],
  "priorityActions": {
    "high": "Most critical issues to fix first",
    "medium": "Important but less urgent issues",
    "low": "Minor issues that can be addressed later"
  },
  "estimatedEffort": "Low/Medium/High based on the complexity and number of violations"
}

Provide 5 entries in topFixes and 3-4 entries in nextSteps. Focus on practical, implementable solutions. Be specific about what elements need to be changed and why."#;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the structured input block: page context followed by the
    /// numbered violation list with per-node detail.
    pub fn build_advice_input(request: &AdviceRequest) -> String {
        let violations = request
            .violations
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let nodes = v
                    .nodes
                    .iter()
                    .enumerate()
                    .map(|(n, node)| {
                        format!(
                            "{{index: {}, failureSummary: {}, html: {}, targets: [{}]}}",
                            n,
                            node.failure_summary.as_deref().unwrap_or("none"),
                            node.html,
                            node.target.join(","),
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(", ");

                format!(
                    "{}. {} ({} impact): {}\n   Help: {}\n   Tags: {}\n   Elements affected: {}\n   Nodes: [{}]",
                    i + 1,
                    v.id,
                    v.impact,
                    v.description,
                    v.help,
                    v.tags.join(", "),
                    v.node_count,
                    nodes,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "URL: {}\nTotal Violations: {}\n\nViolations:\n{}",
            request.url, request.total_violations, violations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationDigest;

    #[test]
    fn test_input_lists_violations_with_detail() {
        let request = AdviceRequest {
            url: "https://example.com".to_string(),
            total_violations: 1,
            violations: vec![ViolationDigest {
                id: "color-contrast".to_string(),
                impact: "serious".to_string(),
                description: "Elements must have sufficient color contrast".to_string(),
                help: "Ensure contrast ratio meets WCAG 2 AA".to_string(),
                tags: vec!["wcag2aa".to_string()],
                node_count: 1,
                nodes: serde_json::from_str(r#"[{"html": "<p>x</p>", "target": ["p"]}]"#).unwrap(),
            }],
        };

        let input = PromptBuilder::build_advice_input(&request);
        assert!(input.starts_with("URL: https://example.com"));
        assert!(input.contains("1. color-contrast (serious impact)"));
        assert!(input.contains("Elements affected: 1"));
        assert!(input.contains("targets: [p]"));
    }

    #[test]
    fn test_instructions_name_every_required_field() {
        for field in crate::domain::AdviceResponse::REQUIRED_FIELDS {
            assert!(ADVICE_INSTRUCTIONS.contains(field), "missing {}", field);
        }
    }
}
