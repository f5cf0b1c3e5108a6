//! Program constants and the optional TOML configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock tour. A config file only tunes the literals the sections use.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TourError};

pub const APP_NAME: &str = "Rust Language Tour";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// The five-digit literal shown by the basic-types section.
#[allow(clippy::approx_constant)]
pub const APPROX_PI: f64 = 3.14159;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub files: FileConfig,
    pub timing: TimingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Name of the scratch file written and deleted by the file section.
    pub name: String,
    pub content: String,
    /// Directory the scratch file lives in.
    pub dir: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            name: "example.txt".to_string(),
            content: "Hello, Rust File I/O!".to_string(),
            dir: PathBuf::from("."),
        }
    }
}

impl FileConfig {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub fetch_delay_ms: u64,
    /// One spawned task per entry.
    pub task_delays_ms: Vec<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 100,
            task_delays_ms: vec![100, 150, 200],
        }
    }
}

impl TimingConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn task_delays(&self) -> Vec<Duration> {
        self.task_delays_ms
            .iter()
            .copied()
            .map(Duration::from_millis)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl TourConfig {
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| TourError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TourError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
