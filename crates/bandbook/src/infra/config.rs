//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".bandbook/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub repl: Repl,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default = "Storage::default_data_file")]
    pub data_file: PathBuf,
}

impl Storage {
    fn default_data_file() -> PathBuf {
        PathBuf::from("data/bandbook.json")
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repl {
    #[serde(default = "Repl::default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    #[serde(default = "Repl::default_history_size")]
    pub history_size: usize,
}

impl Repl {
    fn default_prompt() -> String {
        "bandbook".into()
    }

    fn default_history_size() -> usize {
        500
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
            history_file: None,
            history_size: Self::default_history_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logging {
    #[serde(default = "Logging::default_level")]
    pub level: String,
}

impl Logging {
    fn default_level() -> String {
        "warn".into()
    }

    /// The configured level, falling back to `warn` for unrecognized values.
    pub fn tracing_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::WARN)
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    data_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            data_file: env::var_os("BANDBOOK_DATA_FILE").map(PathBuf::from),
            log_level: env::var("BANDBOOK_LOG").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(data_file: &str, log_level: &str) -> Self {
        Self {
            data_file: Some(PathBuf::from(data_file)),
            log_level: Some(log_level.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<ConfigLayer> = Vec::new();

        layers.push(ConfigLayer::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(ConfigLayer::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(ConfigLayer::from_file(&workspace_path)?);
        }

        let merged = layers
            .into_iter()
            .fold(Config::default(), |config, layer| layer.apply(config));
        Ok(apply_env_overrides(merged, env_overrides))
    }
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Default, Deserialize)]
struct ConfigLayer {
    #[serde(default)]
    storage: StorageLayer,
    #[serde(default)]
    repl: ReplLayer,
    #[serde(default)]
    logging: LoggingLayer,
}

#[derive(Debug, Default, Deserialize)]
struct StorageLayer {
    data_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplLayer {
    prompt: Option<String>,
    history_file: Option<PathBuf>,
    history_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingLayer {
    level: Option<String>,
}

impl ConfigLayer {
    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let layer: ConfigLayer =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(layer)
    }

    /// Every key present in this layer replaces the value below it, defaults included.
    fn apply(self, mut config: Config) -> Config {
        if let Some(data_file) = self.storage.data_file {
            config.storage.data_file = data_file;
        }
        if let Some(prompt) = self.repl.prompt {
            config.repl.prompt = prompt;
        }
        if let Some(history_file) = self.repl.history_file {
            config.repl.history_file = Some(history_file);
        }
        if let Some(history_size) = self.repl.history_size {
            config.repl.history_size = history_size;
        }
        if let Some(level) = self.logging.level {
            config.logging.level = level;
        }
        config
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("bandbook/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    Ok(Some(cwd.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(data_file) = env.data_file {
        config.storage.data_file = data_file;
    }
    if let Some(level) = env.log_level {
        config.logging.level = level;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default())
            .expect("load default config");
        assert_eq!(config.storage.data_file, PathBuf::from("data/bandbook.json"));
        assert_eq!(config.repl.prompt, "bandbook");
        assert_eq!(config.logging.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn merge_global_and_workspace() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(
            &global,
            r#"
[storage]
data_file = "/srv/bands.json"
[repl]
history_file = "/tmp/history"
"#,
        )?;

        let workspace = temp.path().join("workspace.toml");
        fs::write(
            &workspace,
            r#"
[repl]
prompt = "bands"
[logging]
level = "debug"
"#,
        )?;

        let config =
            Config::load_with_layers(Some(global), Some(workspace), EnvOverrides::default())?;

        assert_eq!(config.storage.data_file, PathBuf::from("/srv/bands.json"));
        assert_eq!(config.repl.prompt, "bands");
        assert_eq!(config.repl.history_file, Some(PathBuf::from("/tmp/history")));
        assert_eq!(config.logging.tracing_level(), tracing::Level::DEBUG);

        Ok(())
    }

    #[test]
    fn env_overrides_take_precedence() -> Result<()> {
        let overrides = EnvOverrides::for_tests("elsewhere.json", "trace");
        let config = Config::load_with_layers(None, None, overrides)?;
        assert_eq!(config.storage.data_file, PathBuf::from("elsewhere.json"));
        assert_eq!(config.logging.tracing_level(), tracing::Level::TRACE);
        Ok(())
    }

    #[test]
    fn invalid_config_returns_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("broken.toml");
        fs::write(&file, "this is not toml")?;
        let result = ConfigLayer::from_file(&file);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn later_layer_can_restore_a_default_value() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("global.toml");
        fs::write(
            &global,
            r#"
[repl]
prompt = "bands"
[logging]
level = "debug"
"#,
        )?;
        let workspace = temp.path().join("workspace.toml");
        fs::write(
            &workspace,
            r#"
[repl]
prompt = "bandbook"
"#,
        )?;

        let config =
            Config::load_with_layers(Some(global), Some(workspace), EnvOverrides::default())?;
        assert_eq!(config.repl.prompt, "bandbook");
        assert_eq!(config.logging.tracing_level(), tracing::Level::DEBUG);
        Ok(())
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        let logging = Logging {
            level: "loud".into(),
        };
        assert_eq!(logging.tracing_level(), tracing::Level::WARN);
    }
}
