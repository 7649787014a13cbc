use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Environment variable overriding the knowledge-base directory.
pub const DATA_DIR_ENV: &str = "FLOCKDX_DATA_DIR";
/// Used when neither flag, environment nor config name a directory.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockdxConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding diseases.json, symptoms.json, treatments.json
    /// and reference.json.
    pub data_dir: PathBuf,
    pub created_at: jiff::Timestamp,
}

impl FlockdxConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir,
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("flockdx"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<FlockdxConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<FlockdxConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FlockdxConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update flockdx."
        ));
    }

    // v0 → v1: `knowledge_dir` renamed to `data_dir`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(dir) = obj.remove("knowledge_dir") {
            obj.entry("data_dir").or_insert(dir);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (knowledge_dir → data_dir)");
    }

    Ok(json)
}

pub fn save_config(config: &FlockdxConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &FlockdxConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

/// Pick the knowledge-base directory: flag, then environment, then config
/// file, then `./data`.
pub fn resolve_data_dir(
    flag: Option<&Path>,
    env_value: Option<&str>,
    config: Option<&FlockdxConfig>,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env_value.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(config) = config {
        return config.data_dir.clone();
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}
