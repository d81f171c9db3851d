use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name -> human readable message.
///
/// An empty map means "the step is valid". Keys are ordered so two
/// validations of the same form always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrorMap(BTreeMap<String, String>);

impl ValidationErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record an error, replacing any earlier message for the field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Record an error only if the field has none yet.
    ///
    /// "X is required" must win over a format message for the same field.
    pub fn insert_if_absent(&mut self, field: &str, message: impl Into<String>) {
        if !self.0.contains_key(field) {
            self.0.insert(field.to_string(), message.into());
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    /// Merge another map into this one; existing entries are kept
    pub fn merge(&mut self, other: ValidationErrorMap) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ValidationErrorMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent_keeps_first_message() {
        let mut errors = ValidationErrorMap::new();
        errors.insert_if_absent("cnic_no", "CNIC is required");
        errors.insert_if_absent("cnic_no", "CNIC must be exactly 13 digits");
        assert_eq!(errors.get("cnic_no"), Some("CNIC is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_merge_does_not_overwrite() {
        let mut a = ValidationErrorMap::new();
        a.insert("email", "Please enter a valid email");
        let mut b = ValidationErrorMap::new();
        b.insert("email", "other");
        b.insert("cell_no", "Phone number is required");
        a.merge(b);
        assert_eq!(a.get("email"), Some("Please enter a valid email"));
        assert!(a.contains("cell_no"));
    }
}
