use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::shared::validation::ValidationErrorMap;

/// Backend registration record.
///
/// The client never builds one; it only carries what the server returned
/// on to the tracking screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationRecord(pub Value);

impl RegistrationRecord {
    pub fn id(&self) -> Option<i64> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Top-level scalar rendered as text
    pub fn field(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Scalar top-level fields in server order, for a read-only listing
    pub fn scalar_fields(&self) -> Vec<(String, String)> {
        let Value::Object(map) = &self.0 else {
            return Vec::new();
        };
        map.keys()
            .filter_map(|key| self.field(key).map(|value| (key.clone(), value)))
            .collect()
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

/// `{success, data?, message?, errors?}` returned by every endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiEnvelope {
    pub fn record(&self) -> Option<RegistrationRecord> {
        self.data.clone().map(RegistrationRecord)
    }

    /// First message per field, in the shape used for inline errors
    pub fn field_errors(&self) -> ValidationErrorMap {
        self.errors
            .iter()
            .flatten()
            .filter_map(|(field, messages)| {
                messages
                    .first()
                    .map(|message| (field.clone(), message.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_errors() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "success": false,
            "errors": {"cnic_no": ["already registered", "second"]}
        }))
        .unwrap();
        assert!(!envelope.success);
        assert!(envelope.record().is_none());
        assert_eq!(envelope.field_errors().get("cnic_no"), Some("already registered"));
    }

    #[test]
    fn test_null_data_is_no_record() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"success": true, "data": null})).unwrap();
        assert!(envelope.record().is_none());
    }

    #[test]
    fn test_record_accessors() {
        let record = RegistrationRecord(json!({"id": "42", "full_name": "Sana", "docs": {}}));
        assert_eq!(record.id(), Some(42));
        assert_eq!(record.field("full_name").as_deref(), Some("Sana"));
        assert_eq!(record.scalar_fields().len(), 2);
    }
}
