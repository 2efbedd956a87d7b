//! Loading and saving the store configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use techstore_commerce::StoreConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["techstore.toml", ".techstore.toml", "techstore.json"];

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: StoreConfig = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
    };

    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    Ok(config)
}

/// Save config to a file.
pub fn save(config: &StoreConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

/// Find the nearest config file from `start` upwards.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Generate a default techstore.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# TechStore storefront configuration

[store]
name = "{name}"
base_url = "http://localhost:3000"

[contact]
# Digits only, international format without "+"
phone = "5493816378884"
endpoint = "https://wa.me"

[discount]
codes = ["DELFI"]
percent = 5

[hero]
rotation_ms = 5000
transition_ms = 300
progress_tick_ms = 100
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("techstore-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: StoreConfig = toml::from_str(&generate_default_config("TechStore")).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = scratch_dir("json");
        let path = dir.join("techstore.json");

        let mut config = StoreConfig::default();
        config.discount.percent = 10;
        save(&config, &path).unwrap();

        assert_eq!(load(&path).unwrap().discount.percent, 10);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = scratch_dir("invalid");
        let path = dir.join("techstore.toml");
        std::fs::write(&path, "[discount]\npercent = 0\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("discount.percent"));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_find_config_searches_parents() {
        let dir = scratch_dir("find");
        let nested = dir.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.join(".techstore.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(dir.join(".techstore.toml")));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
