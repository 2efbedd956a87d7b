//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use techstore_commerce::catalog::Catalog;
use techstore_commerce::StoreConfig;

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Product catalog.
    pub catalog: Catalog,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => config::find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => {
                output.debug(&format!("Using config: {}", path.display()));
                config::load(path)?
            }
            None => StoreConfig::default(),
        };

        let catalog = Catalog::bundled().context("Failed to load the bundled catalog")?;
        output.debug(&format!("Loaded {} products", catalog.len()));

        Ok(Self {
            config,
            config_path,
            catalog,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &std::path::Path, path: &str) -> PathBuf {
    if PathBuf::from(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
