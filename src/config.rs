// File: ./src/config.rs
// User settings for the CLI, stored as TOML and turned into `ParserOptions`.
use crate::context::AppContext;
use crate::model::fields::{PriorityDef, StatusDef, UserFieldSchema};
use crate::model::parser::ParserOptions;
use crate::model::triggers::{TriggerConfig, TriggerDef};
use anyhow::{Context, Error, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const MISSING: &str = "Config file not found";

fn default_language() -> String {
    "en".to_string()
}

fn default_triggers() -> Vec<TriggerDef> {
    TriggerConfig::default().triggers
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub default_to_scheduled: bool,

    /// Replaces the built-in trigger list when present.
    #[serde(default = "default_triggers")]
    pub triggers: Vec<TriggerDef>,

    #[serde(default)]
    pub statuses: Vec<StatusDef>,
    #[serde(default)]
    pub priorities: Vec<PriorityDef>,
    #[serde(default)]
    pub user_fields: Vec<UserFieldSchema>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            default_to_scheduled: false,
            triggers: default_triggers(),
            statuses: Vec::new(),
            priorities: Vec::new(),
            user_fields: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        Self::load_from_path(&ctx.config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("{}: {}", MISSING, path.display());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        log::debug!(
            "Loaded config from {} (language {}, {} triggers)",
            path.display(),
            config.language,
            config.triggers.len()
        );
        Ok(config)
    }

    /// True when loading failed only because there is no file yet.
    pub fn is_missing_config_error(err: &Error) -> bool {
        err.to_string().starts_with(MISSING)
            || err.chain().any(|cause| {
                cause
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io| io.kind() == ErrorKind::NotFound)
            })
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.config_path()?;
        let body = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn path_string(ctx: &dyn AppContext) -> Result<String> {
        Ok(ctx.config_path()?.to_string_lossy().to_string())
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            language: self.language.clone(),
            default_to_scheduled: self.default_to_scheduled,
            triggers: TriggerConfig::new(self.triggers.clone()),
            statuses: self.statuses.clone(),
            priorities: self.priorities.clone(),
            user_fields: self.user_fields.clone(),
        }
    }
}
