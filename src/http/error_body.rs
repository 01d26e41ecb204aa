//! Flattening of the service's error payloads into readable messages.
//!
//! The service reports failures in several shapes:
//!
//! ```json
//! {"errors": ["Unauthorized"]}
//! {"errors": {"name": ["is too short", "is taken"], "email": "is invalid"}}
//! {"errors": "Not found"}
//! {"error": "Incorrect API token"}
//! ```
//!
//! All of them are reduced to a flat, ordered list of strings.
use serde_json::{Map, Value};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Classified content of the `errors`/`error` key.
#[derive(Debug)]
enum ErrorPayload<'a> {
    List(&'a [Value]),
    Fields(&'a Map<String, Value>),
    Message(&'a Value),
}

impl<'a> ErrorPayload<'a> {
    /// Look up the payload, preferring `errors` over `error`.
    fn from_body(body: &'a Value) -> Option<Self> {
        let payload = body.get("errors").or_else(|| body.get("error"))?;

        Some(match payload {
            Value::Array(items) => ErrorPayload::List(items),
            Value::Object(fields) => ErrorPayload::Fields(fields),
            other => ErrorPayload::Message(other),
        })
    }

    fn flatten(&self) -> Vec<String> {
        match self {
            ErrorPayload::List(items) => items.iter().map(stringify).collect(),
            ErrorPayload::Fields(fields) => fields
                .iter()
                .flat_map(|(field, value)| match value {
                    Value::Array(messages) => messages
                        .iter()
                        .map(|message| format!("{field}: {}", stringify(message)))
                        .collect(),
                    other => vec![format!("{field}: {}", stringify(other))],
                })
                .collect(),
            ErrorPayload::Message(message) => vec![stringify(message)],
        }
    }
}

/// Extract a non-empty, ordered list of error messages from a decoded error body.
///
/// Only one level of nesting is flattened. Anything deeper is rendered as JSON text.
pub(crate) fn extract_errors(body: &Value) -> Vec<String> {
    let errors = ErrorPayload::from_body(body)
        .map(|payload| payload.flatten())
        .unwrap_or_default();

    if errors.is_empty() {
        vec![UNKNOWN_ERROR.to_owned()]
    } else {
        errors
    }
}

/// Strings are taken verbatim, everything else is rendered as compact JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::extract_errors;

    #[test]
    fn singular_error_key() {
        assert_eq!(
            extract_errors(&json!({"error": "Simple error message"})),
            vec!["Simple error message"]
        );
    }

    #[test]
    fn string_value() {
        assert_eq!(
            extract_errors(&json!({"errors": "Error message"})),
            vec!["Error message"]
        );
    }

    #[test]
    fn string_list_keeps_order() {
        assert_eq!(
            extract_errors(&json!({"errors": ["Error 1", "Error 2", "Error 3"]})),
            vec!["Error 1", "Error 2", "Error 3"]
        );
    }

    #[test]
    fn list_of_non_strings_is_stringified() {
        assert_eq!(
            extract_errors(&json!({"errors": [42, true, ["nested", "list"]]})),
            vec!["42", "true", r#"["nested","list"]"#]
        );
    }

    #[test]
    fn field_map_is_flattened_in_insertion_order() {
        let body = json!({
            "errors": {
                "name": ["is too short", "has already been taken"],
                "email": "is invalid",
                "merge_tag": ["is reserved"]
            }
        });

        assert_eq!(
            extract_errors(&body),
            vec![
                "name: is too short",
                "name: has already been taken",
                "email: is invalid",
                "merge_tag: is reserved",
            ]
        );
    }

    #[test]
    fn nested_map_under_field_is_rendered_as_json() {
        let body = json!({"errors": {"contact": {"email": "missing"}}});

        assert_eq!(
            extract_errors(&body),
            vec![r#"contact: {"email":"missing"}"#]
        );
    }

    #[test]
    fn error_map_is_flattened_too() {
        let body = json!({"error": {"base": ["limit reached"]}});

        assert_eq!(extract_errors(&body), vec!["base: limit reached"]);
    }

    #[test]
    fn errors_key_wins_over_error_key() {
        let body = json!({"error": "ignored", "errors": ["used"]});

        assert_eq!(extract_errors(&body), vec!["used"]);
    }

    #[test]
    fn unknown_format() {
        assert_eq!(
            extract_errors(&json!({"unknown_key": "Some error"})),
            vec!["Unknown error"]
        );
        assert_eq!(extract_errors(&json!(["not", "an", "object"])), vec!["Unknown error"]);
    }

    #[test]
    fn never_returns_empty() {
        assert_eq!(extract_errors(&json!({"errors": []})), vec!["Unknown error"]);
        assert_eq!(extract_errors(&json!({"errors": {}})), vec!["Unknown error"]);
        assert_eq!(extract_errors(&json!({"errors": null})), vec!["null"]);
    }
}
