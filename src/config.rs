use crate::error::ConfigError;
use crate::util::human::NIL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The original demonstration: enqueue/dequeue on a 13-slot queue.
pub const DEFAULT_SCRIPT: &str = "\
enqueue 1, peek, enqueue 2, enqueue 3, dequeue, dequeue, \
enqueue 4, enqueue 5, enqueue 6, enqueue 7, enqueue 8, enqueue 13, peek, \
enqueue 14, dequeue, peek, print";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Number of slots in the demo queue (0 is allowed: every enqueue fails)
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Printed in place of an empty slot
    pub empty_marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Shown in the "-- Example of ... --" header
    pub title: String,
    /// Commands separated by ',', ';' or newlines
    pub script: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing filter directive, e.g. "warn" or "ringq=debug"
    pub level: String,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { capacity: 13 }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { empty_marker: NIL.into() }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title:  "Implementing a Ring Buffer".into(),
            script: DEFAULT_SCRIPT.into(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".into() }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory; using defaults");
                Config::default()
            }
        }
    }

    /// Load from `path`. A missing or unreadable file yields the defaults, which are
    /// then written to `path` when nothing exists there yet (best-effort).
    pub fn load_from(path: &Path) -> Self {
        match try_load(path) {
            Ok(c) => {
                info!(path = %path.display(), "loaded config");
                c
            }
            Err(e) => {
                if !path.exists() {
                    if let Err(e) = write_defaults(path) {
                        warn!(error = %e, "could not write default config");
                    }
                } else {
                    warn!(error = %e, "using default config");
                }
                Config::default()
            }
        }
    }

    /// Load a file the user asked for by name. A missing file is created with the
    /// defaults; one that exists but cannot be read or parsed is an error.
    pub fn load_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Err(e) = write_defaults(path) {
                warn!(error = %e, "could not write default config");
            }
            return Ok(Config::default());
        }
        let cfg = try_load(path)?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ringq").join("ringq.toml"))
    }
}

fn try_load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    Config::from_toml_str(&text)
}

/// Write the default config to `path`, creating parent directories.
pub fn write_defaults(path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# ringq configuration\n# Generated on first run, edit freely\n\n{}", text))
        .map_err(io_err)?;
    Ok(())
}
