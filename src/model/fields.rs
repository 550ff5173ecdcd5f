// File: ./src/model/fields.rs
// Caller-defined vocabularies: user fields and custom status/priority values.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    List,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::List => "list",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FieldType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "string" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            "list" => Ok(FieldType::List),
            other => Err(anyhow::anyhow!("Unknown field type '{}'", other)),
        }
    }
}

/// Schema entry for a non-built-in property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFieldSchema {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}

impl UserFieldSchema {
    pub fn new(id: &str, display_name: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            field_type,
        }
    }

    /// Display name, or the id when none was given.
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }
}

/// One configured status or priority. `value` is what lands in the parsed
/// result; `label` is an alternative spelling users may type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDef {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChoiceDef {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Every spelling that selects this choice, blanks removed.
    pub fn spellings(&self) -> Vec<&str> {
        let mut out = vec![self.value.as_str()];
        if let Some(label) = &self.label
            && !label.trim().is_empty()
            && label != &self.value
        {
            out.push(label.as_str());
        }
        out.retain(|s| !s.trim().is_empty());
        out
    }
}

pub type StatusDef = ChoiceDef;
pub type PriorityDef = ChoiceDef;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serializes_lowercase() {
        let schema = UserFieldSchema::new("effort", "Effort", FieldType::Number);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains(r#""type":"number""#));
        assert_eq!("Bool".parse::<FieldType>().unwrap(), FieldType::Boolean);
    }

    #[test]
    fn spellings_skip_blank_and_duplicate_labels() {
        assert_eq!(ChoiceDef::new("p1").with_label("p1").spellings(), vec!["p1"]);
        assert_eq!(ChoiceDef::new("p1").with_label(" ").spellings(), vec!["p1"]);
        assert_eq!(
            ChoiceDef::new("high").with_label("Important").spellings(),
            vec!["high", "Important"]
        );
    }
}
