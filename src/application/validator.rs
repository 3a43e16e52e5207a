//! Untrusted-input validation for audit result documents
//!
//! Pasted text, uploaded files, and stored blobs all pass through here
//! before anything else touches them. Validation is deliberately shallow:
//! the root `violations` and `passes` arrays must exist, everything below
//! them is lenient (see the serde defaults on the domain types).

use serde_json::Value;

use crate::domain::{AuditResult, ValidationError};

/// Parse and structurally validate a raw result document.
///
/// A JSON parse failure yields [`ValidationError::MalformedJson`]; a parsed
/// document missing `violations` or `passes`, or where either is not an
/// array, yields [`ValidationError::UnexpectedShape`]. Pure function.
pub fn validate(raw: &str) -> Result<AuditResult, ValidationError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    for field in ["violations", "passes"] {
        match value.get(field) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(ValidationError::UnexpectedShape(format!(
                    "`{}` must be an array",
                    field
                )));
            }
            None => {
                return Err(ValidationError::UnexpectedShape(format!(
                    "missing `{}` array",
                    field
                )));
            }
        }
    }

    serde_json::from_value(value).map_err(|e| ValidationError::UnexpectedShape(e.to_string()))
}
