//! Plain-text projection of flow results for toast display. Flow outcomes are
//! serialized to JSON and reduced to either verbatim text or `key: value`
//! entries; the toast components decide how to render each shape.

use super::errors::AppError;
use serde::Serialize;
use serde_json::Value;

/// Display shape of a flow result.
#[derive(Clone, Debug, PartialEq)]
pub enum PrettyValue {
    /// Rendered as-is.
    Text(String),
    /// Rendered as a bullet list, one entry per key.
    Entries(Vec<(String, String)>),
}

impl PrettyValue {
    /// Reduces a JSON value to its display shape: strings verbatim, objects as
    /// `key: value` entries, anything else as its serialized JSON text.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => PrettyValue::Text(text.clone()),
            Value::Object(map) => PrettyValue::Entries(
                map.iter()
                    .map(|(key, value)| (key.clone(), scalar_text(value)))
                    .collect(),
            ),
            other => PrettyValue::Text(other.to_string()),
        }
    }
}

/// Serializes a flow result and reduces it for display.
pub fn pretty_result<T: Serialize>(result: &T) -> Result<PrettyValue, AppError> {
    let value = serde_json::to_value(result)
        .map_err(|err| AppError::Serialization(format!("Failed to encode result: {err}")))?;
    Ok(PrettyValue::from_value(&value))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{PrettyValue, pretty_result};
    use serde_json::{Value, json};

    #[test]
    fn string_renders_verbatim() {
        let value = Value::String("all good".to_string());
        assert_eq!(
            PrettyValue::from_value(&value),
            PrettyValue::Text("all good".to_string())
        );
    }

    #[test]
    fn object_renders_one_entry_per_key() {
        let value = json!({
            "connection": null,
            "tag": "ok",
            "userNumber": 1234,
        });

        let pretty = PrettyValue::from_value(&value);

        assert_eq!(
            pretty,
            PrettyValue::Entries(vec![
                ("connection".to_string(), "null".to_string()),
                ("tag".to_string(), "ok".to_string()),
                ("userNumber".to_string(), "1234".to_string()),
            ])
        );
    }

    #[test]
    fn other_values_render_as_serialized_text() {
        assert_eq!(
            PrettyValue::from_value(&json!(42)),
            PrettyValue::Text("42".to_string())
        );
        assert_eq!(
            PrettyValue::from_value(&Value::Null),
            PrettyValue::Text("null".to_string())
        );
        assert_eq!(
            PrettyValue::from_value(&json!(true)),
            PrettyValue::Text("true".to_string())
        );
    }

    #[test]
    fn pretty_result_serializes_flow_outcomes() {
        let result = crate::features::auth::types::RegisterFlowResult::<()>::BadChallenge;

        let pretty = pretty_result(&result).expect("serializable");

        assert_eq!(
            pretty,
            PrettyValue::Entries(vec![("kind".to_string(), "badChallenge".to_string())])
        );
    }
}
