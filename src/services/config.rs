use crate::cli::SortKey;
use crate::services::storage::config_dir;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    /// Sort key used when `search` is run without `--sort`.
    #[serde(default)]
    pub default_sort: Option<String>,
    /// Catalog source used when `--catalog` is not given.
    #[serde(default)]
    pub catalog: Option<String>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn default_sort(config: &ConfigFile) -> SortKey {
    SortKey::parse_or_default(config.general.default_sort.as_deref().unwrap_or(""))
}
