use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use carnet_config::Config;
use serde::{Deserialize, Serialize};

/// Named config stored under `<data_dir>/profiles`
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn profiles_dir(config: &Config) -> PathBuf {
    config.store.data_dir.join("profiles")
}

/// Load a plain config file
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Load a profile by name, falling back to `base` when it does not exist
fn load_profile(base: Config, name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir(&base).join(format!("{name}.json"));

    if !profile_file.exists() {
        tracing::warn!("Profile {name} not found, using environment defaults");
        return Ok(base);
    }

    let data = fs::read_to_string(&profile_file)
        .with_context(|| format!("Failed to read profile {}", profile_file.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", profile_file.display()))?;
    Ok(profile.value)
}

/// Resolve the effective config: explicit file, then profile, then environment
pub fn resolve_config(config_file: Option<&Path>, profile: Option<&str>) -> anyhow::Result<Config> {
    if let Some(path) = config_file {
        return load_config_file(path);
    }

    let base = Config::new();
    match profile {
        Some(name) => load_profile(base, name),
        None => Ok(base),
    }
}
