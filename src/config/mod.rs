//! Configuration management for winfetch
//!
//! Config file location:
//! - Unix: ~/.config/winfetch/config.toml
//! - Windows: %LOCALAPPDATA%\winfetch\config.toml
//!
//! `--config <path>` overrides the location. User values are deep-merged onto
//! the defaults, so a file only needs the keys it wants to change.

pub mod format;
pub mod merge;

use crate::error::{Result, WinfetchError};
use format::ConfigFormat;
use merge::deep_merge;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Colorize output unless `--no-color` is given
    pub colors_enabled: bool,
    /// Builtin art name or path used when `--ascii-art` is absent
    pub ascii_art: String,
    pub show_info: ShowInfo,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors_enabled: true,
            ascii_art: crate::art::DEFAULT_ART.to_string(),
            show_info: ShowInfo::default(),
            palette: Palette::default(),
        }
    }
}

/// Which facts are collected and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowInfo {
    pub user: bool,
    pub hostname: bool,
    pub os: bool,
    pub kernel: bool,
    pub uptime: bool,
    /// Off by default: enumerating installed packages can be slow
    pub packages: bool,
    pub shell: bool,
    pub terminal: bool,
    pub cpu: bool,
    pub memory: bool,
    pub gpu: bool,
    pub disk: bool,
    pub network: bool,
}

impl ShowInfo {
    pub fn all() -> Self {
        Self {
            packages: true,
            ..Self::default()
        }
    }
}

impl Default for ShowInfo {
    fn default() -> Self {
        Self {
            user: true,
            hostname: true,
            os: true,
            kernel: true,
            uptime: true,
            packages: false,
            shell: true,
            terminal: true,
            cpu: true,
            memory: true,
            gpu: true,
            disk: true,
            network: true,
        }
    }
}

/// Color names (or `#RRGGBB`) for each part of the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Info labels
    pub header: String,
    /// Info values
    pub info: String,
    /// ASCII art
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            header: "cyan".to_string(),
            info: "white".to_string(),
            accent: "bright_blue".to_string(),
        }
    }
}

impl Config {
    /// The defaults as a TOML table
    pub fn defaults_table() -> Table {
        table_of(&Config::default()).unwrap_or_default()
    }

    /// Deep-merge `overrides` onto the defaults and return both the typed
    /// configuration and the merged table
    pub fn from_overrides(mut overrides: Table) -> Result<(Config, Table)> {
        normalize_legacy_keys(&mut overrides);
        let mut merged = Config::defaults_table();
        deep_merge(&mut merged, overrides);
        let config: Config = Value::Table(merged.clone()).try_into()?;
        Ok((config, merged))
    }
}

fn table_of(config: &Config) -> Result<Table> {
    match Value::try_from(config)? {
        Value::Table(table) => Ok(table),
        _ => Err(WinfetchError::Config(
            "configuration did not serialize to a table".to_string(),
        )),
    }
}

/// Older files used one `colors` key for both the on/off switch (boolean)
/// and the palette (table).
fn normalize_legacy_keys(overrides: &mut Table) {
    match overrides.remove("colors") {
        Some(Value::Boolean(enabled)) => {
            overrides
                .entry("colors_enabled".to_string())
                .or_insert(Value::Boolean(enabled));
        }
        Some(Value::Table(palette)) => {
            let mut legacy = Table::new();
            legacy.insert("palette".to_string(), Value::Table(palette));
            deep_merge(&mut legacy, std::mem::take(overrides));
            *overrides = legacy;
        }
        Some(other) => {
            overrides.insert("colors".to_string(), other);
        }
        None => {}
    }
}

/// Platform default: `~/.config/winfetch/config.toml`, or
/// `%LOCALAPPDATA%\winfetch\config.toml` on Windows
pub fn default_config_path() -> Result<PathBuf> {
    #[cfg(windows)]
    let base = dirs::data_local_dir();
    #[cfg(not(windows))]
    let base = dirs::home_dir().map(|home| home.join(".config"));

    base.map(|dir| dir.join("winfetch").join("config.toml"))
        .ok_or_else(|| WinfetchError::Config("Could not determine home directory".to_string()))
}

struct Loaded {
    config: Config,
    table: Table,
}

/// Loads the configuration once and hands out copies afterwards
pub struct ConfigStore {
    path: PathBuf,
    format: ConfigFormat,
    loaded: RefCell<Option<Loaded>>,
}

impl ConfigStore {
    /// Explicit path (with `~` expanded) or the platform default; the file
    /// format follows the extension
    pub fn new(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned()),
            None => default_config_path()?,
        };
        let format = ConfigFormat::for_path(&path);
        Ok(Self::with_format(path, format))
    }

    pub fn with_format(path: PathBuf, format: ConfigFormat) -> Self {
        Self {
            path,
            format,
            loaded: RefCell::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Load the configuration. The first call reads the file (creating it
    /// with defaults when missing); later calls return the same result.
    /// Never fails: unreadable files fall back to defaults with a warning.
    pub fn load(&self) -> Config {
        if let Some(loaded) = self.loaded.borrow().as_ref() {
            return loaded.config.clone();
        }

        let loaded = self.load_uncached();
        let config = loaded.config.clone();
        *self.loaded.borrow_mut() = Some(loaded);
        config
    }

    fn load_uncached(&self) -> Loaded {
        let defaults = || Loaded {
            config: Config::default(),
            table: Config::defaults_table(),
        };

        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            if let Err(e) = self.write(&Config::default()) {
                warn!("Could not create default config file: {}", e);
            }
            return defaults();
        }

        match self.read() {
            Ok((config, table)) => Loaded { config, table },
            Err(e) => {
                warn!("Could not load config file {}: {}", self.path.display(), e);
                defaults()
            }
        }
    }

    fn read(&self) -> Result<(Config, Table)> {
        let text = fs::read_to_string(&self.path)?;
        let overrides = self.format.parse(&text)?;
        Config::from_overrides(overrides)
    }

    /// A top-level key of the merged configuration, or `default` when it is
    /// missing or has a different type
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.load();
        let loaded = self.loaded.borrow();
        loaded
            .as_ref()
            .and_then(|loaded| loaded.table.get(key))
            .and_then(|value| value.clone().try_into().ok())
            .unwrap_or(default)
    }

    /// Write `config` to the store's path, creating parent directories.
    /// Flat key=value files are read-only: saving only warns.
    pub fn save(&self, config: &Config) -> Result<()> {
        if !self.format.can_write() {
            warn!(
                "Cannot save config - {} uses the read-only key=value format",
                self.path.display()
            );
            return Ok(());
        }

        self.write(config)?;
        *self.loaded.borrow_mut() = Some(Loaded {
            config: config.clone(),
            table: table_of(config)?,
        });
        Ok(())
    }

    fn write(&self, config: &Config) -> Result<()> {
        if !self.format.can_write() {
            return Ok(());
        }

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml)?;
        Ok(())
    }
}
