// File: ./src/context.rs
/*! Where taskline looks for its configuration.

Code that reads or writes `config.toml` takes a `&dyn AppContext` instead of
resolving paths itself. The binary uses `StandardContext`; tests use
`TestContext`, which lives in a throwaway directory.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

pub trait AppContext: Send + Sync + std::fmt::Debug {
    /// Directory holding `config.toml`. Created on demand.
    fn config_dir(&self) -> Result<PathBuf>;

    fn config_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }
}

fn create_dir(path: PathBuf) -> Result<PathBuf> {
    if !path.is_dir() {
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(path)
}

#[derive(Clone, Debug)]
pub enum StandardContext {
    /// The platform config directory (`~/.config/taskline` on Linux).
    Platform,
    /// `<root>/config`, for `--root`.
    Rooted(PathBuf),
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        match override_root {
            Some(root) => Self::Rooted(root),
            None => Self::Platform,
        }
    }
}

impl AppContext for StandardContext {
    fn config_dir(&self) -> Result<PathBuf> {
        match self {
            Self::Rooted(root) => create_dir(root.join("config")),
            Self::Platform => {
                let dirs = ProjectDirs::from("com", "taskline", "taskline")
                    .ok_or_else(|| anyhow::anyhow!("No home directory"))?;
                create_dir(dirs.config_dir().to_path_buf())
            }
        }
    }
}

#[derive(Debug)]
pub struct TestContext {
    root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("taskline_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes raw text to this context's config file and returns its path.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path()?;
        fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn config_dir(&self) -> Result<PathBuf> {
        create_dir(self.root.join("config"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_context_uses_config_subdir() {
        let scratch = TestContext::new();
        let ctx = StandardContext::new(Some(scratch.root().to_path_buf()));
        let path = ctx.config_path().unwrap();
        assert_eq!(path, scratch.root().join("config").join("config.toml"));
        assert!(scratch.root().join("config").is_dir());
    }

    #[test]
    fn test_context_cleans_up() {
        let root = {
            let ctx = TestContext::new();
            ctx.write_config("language = \"de\"").unwrap();
            ctx.root().to_path_buf()
        };
        assert!(!root.exists());
    }
}
