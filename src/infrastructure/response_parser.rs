//! JSON extraction from model responses
//!
//! Models are asked for bare JSON but routinely wrap it in markdown fences
//! or narrative prose. Extraction strategies, in order: the whole trimmed
//! response, a ```json fence, any fence, then the first valid JSON value
//! found anywhere in the text.

use serde::de::DeserializeOwned;

use crate::domain::ProviderError;

pub struct ResponseParser;

impl ResponseParser {
    /// Parse a JSON value out of a model response.
    pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ProviderError> {
        let trimmed = content.trim();
        if let Ok(parsed) = serde_json::from_str::<T>(trimmed) {
            return Ok(parsed);
        }

        if let Some(json) = Self::extract_fenced_block(trimmed, Some("json")) {
            if let Ok(parsed) = serde_json::from_str::<T>(&json) {
                return Ok(parsed);
            }
        }

        if let Some(json) = Self::extract_fenced_block(trimmed, None) {
            if let Ok(parsed) = serde_json::from_str::<T>(&json) {
                return Ok(parsed);
            }
        }

        if let Some(json) = Self::extract_first_json_value(trimmed) {
            if let Ok(parsed) = serde_json::from_str::<T>(&json) {
                return Ok(parsed);
            }
        }

        Err(ProviderError::InvalidResponse(
            "no valid JSON found in model response".to_string(),
        ))
    }

    /// First valid JSON object or array embedded in free text.
    ///
    /// Uses `serde_json::Deserializer` to detect a valid JSON prefix rather
    /// than brace counting, so braces inside strings do not confuse it.
    fn extract_first_json_value(content: &str) -> Option<String> {
        for (idx, ch) in content.char_indices() {
            if ch == '{' || ch == '[' {
                let candidate = &content[idx..];
                let mut de =
                    serde_json::Deserializer::from_str(candidate).into_iter::<serde_json::Value>();
                if let Some(Ok(_)) = de.next() {
                    let end = de.byte_offset();
                    if end > 0 && end <= candidate.len() {
                        return Some(candidate[..end].to_string());
                    }
                }
            }
        }
        None
    }

    fn extract_fenced_block(content: &str, language: Option<&str>) -> Option<String> {
        let fence = "```";
        let mut search = content;

        loop {
            let start = search.find(fence)?;
            let after_start = &search[start + fence.len()..];

            let (lang_tag, rest) = match after_start.find('\n') {
                Some(line_end) => (after_start[..line_end].trim(), &after_start[line_end + 1..]),
                None => return None,
            };

            if let Some(expected) = language {
                if !lang_tag.eq_ignore_ascii_case(expected) {
                    search = after_start;
                    continue;
                }
            }

            let end = rest.find(fence)?;
            return Some(rest[..end].trim().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Payload {
        status: String,
    }

    #[test]
    fn test_parse_bare_json() {
        let parsed: Payload = ResponseParser::parse_json(r#"{ "status": "ok" }"#).unwrap();
        assert_eq!(parsed.status, "ok");
    }

    #[test]
    fn test_parse_json_fence() {
        let content = "Here is the result:\n```json\n{ \"status\": \"ok\" }\n```\n";
        let parsed: Payload = ResponseParser::parse_json(content).unwrap();
        assert_eq!(parsed.status, "ok");
    }

    #[test]
    fn test_parse_untagged_fence() {
        let content = "```\n{ \"status\": \"ok\" }\n```";
        let parsed: Payload = ResponseParser::parse_json(content).unwrap();
        assert_eq!(parsed.status, "ok");
    }

    #[test]
    fn test_parse_embedded_in_prose() {
        let content = "Sure! Here's my analysis: {\"status\":\"ok\"} hope that helps.";
        let parsed: Payload = ResponseParser::parse_json(content).unwrap();
        assert_eq!(parsed.status, "ok");
    }

    #[test]
    fn test_braces_inside_strings_do_not_confuse_extraction() {
        let content = r#"note {"status": "contains { brace"} end"#;
        let parsed: Payload = ResponseParser::parse_json(content).unwrap();
        assert_eq!(parsed.status, "contains { brace");
    }

    #[test]
    fn test_no_json_is_an_error() {
        let err = ResponseParser::parse_json::<Payload>("just words").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
