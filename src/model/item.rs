// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNTITLED: &str = "Untitled Task";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserFieldValue {
    Text(String),
    List(Vec<String>),
}

impl UserFieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UserFieldValue::Text(s) => Some(s),
            UserFieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            UserFieldValue::List(v) => Some(v),
            UserFieldValue::Text(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            UserFieldValue::Text(s) => s.trim().is_empty(),
            UserFieldValue::List(v) => v.iter().all(|s| s.trim().is_empty()),
        }
    }
}

/// Structured attributes extracted from one quick-entry line.
///
/// Dates are `YYYY-MM-DD` strings and times `HH:MM`, matching what ends up in
/// note frontmatter. A fresh value is built per parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTaskData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub contexts: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u32>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_fields: BTreeMap<String, UserFieldValue>,
}

impl ParsedTaskData {
    pub fn has_dates(&self) -> bool {
        self.due_date.is_some() || self.scheduled_date.is_some()
    }

    pub fn user_field(&self, id: &str) -> Option<&UserFieldValue> {
        self.user_fields.get(id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_and_skips_absent_fields() {
        let data = ParsedTaskData {
            title: "Call mom".into(),
            due_date: Some("2024-01-02".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains(r#""dueDate":"2024-01-02""#));
        assert!(!json.contains("scheduledDate"));
        assert!(!json.contains("userFields"));
        assert!(json.contains(r#""tags":[]"#));
    }

    #[test]
    fn user_field_values_are_untagged() {
        let mut data = ParsedTaskData::default();
        data.user_fields
            .insert("owner".into(), UserFieldValue::Text("ann".into()));
        data.user_fields.insert(
            "labels".into(),
            UserFieldValue::List(vec!["a".into(), "b".into()]),
        );
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains(r#""labels":["a","b"]"#));
        assert!(json.contains(r#""owner":"ann""#));
        let back: ParsedTaskData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
