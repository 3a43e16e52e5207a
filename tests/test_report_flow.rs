//! Ingestion-to-export flow over a realistic audit document

use axess::application::{compose, filter, summarize, validate, ImpactFilter};
use axess::domain::{AdviceRequest, Impact, ValidationError};

const AUDIT_JSON: &str = r##"{
    "url": "https://example.com/checkout",
    "timestamp": "2025-03-10T14:30:00Z",
    "violations": [
        {
            "id": "color-contrast",
            "impact": "serious",
            "description": "Elements must have sufficient color contrast",
            "help": "Ensure contrast ratio meets WCAG 2 AA",
            "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/color-contrast",
            "tags": ["wcag2aa", "cat.color"],
            "nodes": [
                {
                    "html": "<p class=\"fine-print\">Terms apply</p>",
                    "target": [".fine-print"],
                    "failureSummary": "Fix any of the following: contrast of 2.5:1"
                }
            ]
        },
        {
            "id": "image-alt",
            "impact": "critical",
            "description": "Images must have alternate text",
            "help": "Ensure <img> elements have alternate text",
            "tags": ["wcag2a"],
            "nodes": [
                {"html": "<img src=\"hero.png\">", "target": ["img"]},
                {"html": "<img src=\"logo.png\">", "target": ["#logo"]}
            ]
        },
        {
            "id": "region",
            "impact": "fatal-ish-nonsense",
            "description": "All page content should be contained by landmarks",
            "help": "Ensure content is in landmarks",
            "tags": ["best-practice"],
            "nodes": []
        }
    ],
    "passes": [
        {"id": "document-title"},
        {"id": "html-has-lang"},
        {"id": "html-lang-valid"},
        {"id": "duplicate-id"},
        {"id": "aria-roles"},
        {"id": "button-name"}
    ]
}"##;

#[test]
fn test_validate_accepts_real_document() {
    let result = validate(AUDIT_JSON).unwrap();
    assert_eq!(result.url, "https://example.com/checkout");
    assert_eq!(result.violations.len(), 3);
    assert_eq!(result.passes.len(), 6);
    // unrecognized impact labels degrade to the unknown bucket
    assert_eq!(result.violations[2].impact_or_unknown(), Impact::Unknown);
}

#[test]
fn test_validate_rejects_non_report_shapes() {
    assert!(matches!(
        validate("{not json").unwrap_err(),
        ValidationError::MalformedJson(_)
    ));
    assert!(matches!(
        validate(r#"{"violations": "nope", "passes": []}"#).unwrap_err(),
        ValidationError::UnexpectedShape(_)
    ));
    assert!(matches!(
        validate(r#"{"violations": []}"#).unwrap_err(),
        ValidationError::UnexpectedShape(_)
    ));
}

#[test]
fn test_summary_scores_the_document() {
    let result = validate(AUDIT_JSON).unwrap();
    let summary = summarize(&result);

    assert_eq!(summary.total_violations, 3);
    assert_eq!(summary.total_passes, 6);
    assert_eq!(summary.total_checks, 9);
    // 6/9 rounds to 67
    assert_eq!(summary.score, 67);
    assert_eq!(summary.count_for(Impact::Critical), 1);
    assert_eq!(summary.count_for(Impact::Serious), 1);
    assert_eq!(summary.count_for(Impact::Unknown), 1);
}

#[test]
fn test_browse_filters_compose_over_the_document() {
    let result = validate(AUDIT_JSON).unwrap();

    let critical = filter(&result.violations, "", ImpactFilter::parse("critical"));
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].id, "image-alt");

    let landmarks = filter(&result.violations, "landmark", ImpactFilter::All);
    assert_eq!(landmarks.len(), 1);
    assert_eq!(landmarks[0].id, "region");
}

#[test]
fn test_advice_payload_projection() {
    let result = validate(AUDIT_JSON).unwrap();
    let request = AdviceRequest::from_result(&result).unwrap();

    assert_eq!(request.total_violations, 3);
    assert_eq!(request.violations[0].impact, "serious");
    assert_eq!(request.violations[1].node_count, 2);
    assert_eq!(request.violations[2].impact, "unknown");
}

#[test]
fn test_exported_report_is_self_contained() {
    let result = validate(AUDIT_JSON).unwrap();
    let report = compose(&result, None);
    let blob = report.to_json().unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed["url"], "https://example.com/checkout");
    assert_eq!(parsed["summary"]["score"], 67);
    assert_eq!(parsed["violations"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["passes"].as_array().unwrap().len(), 6);
    assert!(parsed.get("advice").is_none());
    assert!(parsed.get("generatedAt").is_some());
}
