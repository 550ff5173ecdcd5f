// File: ./src/model/triggers.rs
//! Maps property identifiers to the trigger strings that introduce them.
use crate::model::fields::{FieldType, UserFieldSchema};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TAGS: &str = "tags";
pub const CONTEXTS: &str = "contexts";
pub const PROJECTS: &str = "projects";
pub const STATUS: &str = "status";
pub const PRIORITY: &str = "priority";

pub const BUILT_IN: [&str; 5] = [TAGS, CONTEXTS, PROJECTS, STATUS, PRIORITY];

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDef {
    pub property_id: String,
    pub trigger: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl TriggerDef {
    pub fn new(property_id: &str, trigger: &str) -> Self {
        Self {
            property_id: property_id.to_string(),
            trigger: trigger.to_string(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn is_usable(&self) -> bool {
        self.enabled && !self.trigger.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            triggers: vec![
                TriggerDef::new(TAGS, "#"),
                TriggerDef::new(CONTEXTS, "@"),
                TriggerDef::new(PROJECTS, "+"),
                TriggerDef::new(STATUS, "*"),
                TriggerDef::new(PRIORITY, "!"),
            ],
        }
    }
}

impl TriggerConfig {
    pub fn new(triggers: Vec<TriggerDef>) -> Self {
        Self { triggers }
    }

    /// Replaces (or adds) the definition for one property.
    pub fn with(mut self, def: TriggerDef) -> Self {
        self.triggers.retain(|t| t.property_id != def.property_id);
        self.triggers.push(def);
        self
    }
}

/// Which interactive suggestion list applies to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggesterKind {
    Tag,
    Context,
    Project,
    Status,
    Priority,
    UserField(FieldType),
}

/// Lookup tables derived from a `TriggerConfig` and the user-field schema.
#[derive(Debug, Clone, Default)]
pub struct TriggerResolver {
    config: TriggerConfig,
    user_fields: Vec<UserFieldSchema>,
    by_property: HashMap<String, TriggerDef>,
    by_trigger: HashMap<String, String>,
}

impl TriggerResolver {
    pub fn new(config: TriggerConfig, user_fields: &[UserFieldSchema]) -> Self {
        let mut resolver = Self {
            config,
            user_fields: user_fields.to_vec(),
            by_property: HashMap::new(),
            by_trigger: HashMap::new(),
        };
        resolver.rebuild();
        resolver
    }

    /// Recomputes both lookup maps from scratch. Later definitions for the
    /// same property replace earlier ones.
    pub fn rebuild(&mut self) {
        self.by_property.clear();
        self.by_trigger.clear();
        for def in &self.config.triggers {
            self.by_property.insert(def.property_id.clone(), def.clone());
        }
        for def in self.by_property.values() {
            if def.is_usable() {
                self.by_trigger
                    .insert(def.trigger.clone(), def.property_id.clone());
            }
        }
        log::debug!(
            "Trigger lookup rebuilt: {} properties, {} active triggers",
            self.by_property.len(),
            self.by_trigger.len()
        );
    }

    pub fn set_config(&mut self, config: TriggerConfig) {
        self.config = config;
        self.rebuild();
    }

    /// The trigger to scan for, or `None` when the property is disabled or unset.
    pub fn trigger_for(&self, property_id: &str) -> Option<&str> {
        self.by_property
            .get(property_id)
            .filter(|d| d.is_usable())
            .map(|d| d.trigger.as_str())
    }

    pub fn property_for_trigger(&self, trigger: &str) -> Option<&str> {
        self.by_trigger.get(trigger).map(|s| s.as_str())
    }

    pub fn config_for(&self, property_id: &str) -> Option<&TriggerDef> {
        self.by_property.get(property_id)
    }

    pub fn is_user_field(&self, property_id: &str) -> bool {
        !BUILT_IN.contains(&property_id) && self.user_field(property_id).is_some()
    }

    pub fn user_field(&self, property_id: &str) -> Option<&UserFieldSchema> {
        self.user_fields.iter().find(|f| f.id == property_id)
    }

    pub fn user_fields(&self) -> &[UserFieldSchema] {
        &self.user_fields
    }

    pub fn suggester_for(&self, property_id: &str) -> Option<SuggesterKind> {
        match property_id {
            TAGS => Some(SuggesterKind::Tag),
            CONTEXTS => Some(SuggesterKind::Context),
            PROJECTS => Some(SuggesterKind::Project),
            STATUS => Some(SuggesterKind::Status),
            PRIORITY => Some(SuggesterKind::Priority),
            other => self
                .user_field(other)
                .map(|f| SuggesterKind::UserField(f.field_type)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_is_idempotent() {
        let mut r = TriggerResolver::new(TriggerConfig::default(), &[]);
        let before = (r.by_property.len(), r.by_trigger.len());
        r.rebuild();
        r.rebuild();
        assert_eq!(before, (r.by_property.len(), r.by_trigger.len()));
        assert_eq!(r.trigger_for(TAGS), Some("#"));
    }

    #[test]
    fn later_definition_wins() {
        let cfg = TriggerConfig::new(vec![
            TriggerDef::new(TAGS, "#"),
            TriggerDef::new(TAGS, "%"),
        ]);
        let r = TriggerResolver::new(cfg, &[]);
        assert_eq!(r.trigger_for(TAGS), Some("%"));
        assert_eq!(r.property_for_trigger("#"), None);
    }
}
