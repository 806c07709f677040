//! Shared command plumbing: resolving the effective configuration.

use anyhow::{Context, Result};
use semifix_config::{find_config, load_config, AutofixConfig};
use std::path::PathBuf;

/// The configuration a command runs with, and where it came from.
pub struct CommandContext {
    /// The effective configuration
    pub config: AutofixConfig,
    /// The config file that was loaded, if any
    pub source: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve the configuration for one command invocation.
    ///
    /// An explicit `--config` path wins; otherwise the nearest config file
    /// above the working directory is used; otherwise defaults apply.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            let config = load_config(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            return Ok(Self {
                config,
                source: Some(path),
            });
        }

        let cwd = std::env::current_dir().context("cannot determine the working directory")?;
        let Some(path) = find_config(&cwd) else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self {
                config: AutofixConfig::default(),
                source: None,
            });
        };

        let config = load_config(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        Ok(Self {
            config,
            source: Some(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CommandContext;
    use std::fs;

    #[test]
    fn test_explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semifix.config.json");
        fs::write(&path, r#"{"fixOnSave": true}"#).unwrap();

        let ctx = CommandContext::load(Some(path.clone())).unwrap();
        assert!(ctx.config.fix_on_save);
        assert_eq!(ctx.source, Some(path));
    }

    #[test]
    fn test_explicit_path_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CommandContext::load(Some(dir.path().join("nope.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".semifixrc.json");
        fs::write(&path, "{ not json").unwrap();

        let result = CommandContext::load(Some(path));
        assert!(result.is_err());
    }
}
