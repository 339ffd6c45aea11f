use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use medcheck_catalog::display::DEFAULT_DISPLAY_LIMIT;
use medcheck_ml::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedcheckConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// How many results each panel shows. Added in v1.
    pub display_limit: usize,
    /// Load the catalog from this JSON file instead of the built-in table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

impl Default for MedcheckConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            catalog_path: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.medcheck.app"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<MedcheckConfig> {
    load_config_from(&config_path()?)
}

/// The saved config if there is one, otherwise defaults.
pub fn load_or_default() -> eyre::Result<MedcheckConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(MedcheckConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<MedcheckConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MedcheckConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update medcheck."
        ));
    }

    // v0 → v1: add display_limit
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("display_limit")
            .or_insert(serde_json::Value::Number(DEFAULT_DISPLAY_LIMIT.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added display_limit)");
    }

    Ok(json)
}

pub fn save_config(config: &MedcheckConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Write `config.json` into `dir`, creating it if needed.
pub fn save_config_in(dir: &Path, config: &MedcheckConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

/// Apply `MEDCHECK_*` overrides read through `lookup`.
pub fn apply_overrides<F>(config: &mut MedcheckConfig, lookup: F) -> eyre::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("MEDCHECK_API_URL") {
        config.api_base_url = url;
    }
    if let Some(secs) = lookup("MEDCHECK_TIMEOUT_SECS") {
        config.timeout_secs = secs
            .parse()
            .map_err(|e| eyre::eyre!("MEDCHECK_TIMEOUT_SECS={secs}: {e}"))?;
    }
    if let Some(path) = lookup("MEDCHECK_CATALOG") {
        config.catalog_path = Some(PathBuf::from(path));
    }
    Ok(())
}

pub fn apply_env_overrides(config: &mut MedcheckConfig) -> eyre::Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}
