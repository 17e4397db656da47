//! Launcher configuration and path resolution.
//!
//! The library entry points take the goals directory explicitly; this module
//! is how the binary decides which directory that is. An optional TOML file
//! under `$XDG_CONFIG_HOME/goal/` supplies defaults that CLI flags override.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot determine home directory")]
    #[diagnostic(
        code(goal::config::no_home),
        help("Set the HOME environment variable or pass the goals directory with `--dir`.")
    )]
    NoHome,

    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(goal::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(goal::config::parse),
        help("Check the TOML syntax. Known keys: `dir` (string), `verbose` (bool).")
    )]
    Parse { path: String, message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Directories the launcher works with.
#[derive(Debug, Clone)]
pub struct GoalPaths {
    /// The user's home directory.
    pub home: PathBuf,
    /// `$XDG_CONFIG_HOME/goal/`
    pub config_dir: PathBuf,
}

impl GoalPaths {
    /// Resolve from `HOME` and `XDG_CONFIG_HOME`.
    pub fn resolve() -> ConfigResult<Self> {
        Self::from_vars(
            std::env::var_os("HOME").map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        )
    }

    /// Resolve from explicit variable values.
    pub fn from_vars(home: Option<PathBuf>, xdg_config_home: Option<PathBuf>) -> ConfigResult<Self> {
        let home = home
            .filter(|h| !h.as_os_str().is_empty())
            .ok_or(ConfigError::NoHome)?;
        let config_dir = xdg_config_home
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| home.join(".config"))
            .join("goal");
        Ok(Self { home, config_dir })
    }

    /// Path to the config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// `~/goal`, used when neither flag nor config names a directory.
    pub fn default_goals_dir(&self) -> PathBuf {
        self.home.join("goal")
    }

    /// Expand a leading `~` to the home directory.
    pub fn expand(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("~") {
            Ok(rest) => self.home.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

/// Launcher settings, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory holding goal files.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Show satisfied tactics and goal details by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(path, &content)
    }

    /// Load from a TOML file, falling back to defaults if it doesn't exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    fn parse(path: &Path, content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
