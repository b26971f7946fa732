// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.ghtriage/config.toml` and includes:
//! - `database`: Optional path for the mirror database
//! - `[api]`: Upstream API base URL, user agent, and request timeout
//! - `[triage]`: Label namespaces, marker label, and classification scope
//!
//! Every field has a default, so running without a `.ghtriage/` directory
//! behaves as if an empty config file were present.

use gt_core::{LabelScope, TriagePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".ghtriage";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "mirror.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Project configuration stored in `.ghtriage/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional path for the database (relative to project root or absolute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub api: ApiConfig,
    pub triage: TriageConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout in seconds, enforced by the HTTP transport.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("ghtriage/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

/// Triage classification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Substring identifying priority labels (default: "priority/").
    pub priority_prefix: String,
    /// Substring identifying kind labels (default: "kind/").
    pub kind_prefix: String,
    /// Marker label added to issues needing triage (default: "need/triage").
    pub marker: String,
    /// Whether each issue is classified against its own labels (`issue`) or
    /// against every label seen so far in the run (`batch`).
    pub scope: LabelScope,
}

impl Default for TriageConfig {
    fn default() -> Self {
        let policy = TriagePolicy::default();
        TriageConfig {
            priority_prefix: policy.priority_prefix,
            kind_prefix: policy.kind_prefix,
            marker: policy.marker,
            scope: LabelScope::default(),
        }
    }
}

impl TriageConfig {
    /// The classification policy described by this section.
    pub fn policy(&self) -> TriagePolicy {
        TriagePolicy {
            priority_prefix: self.priority_prefix.clone(),
            kind_prefix: self.kind_prefix.clone(),
            marker: self.marker.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("triage.priority_prefix", &self.priority_prefix),
            ("triage.kind_prefix", &self.kind_prefix),
            ("triage.marker", &self.marker),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Loads configuration from the given `.ghtriage/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.triage.validate()?;
        if config.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url cannot be empty".to_string()));
        }
        Ok(config)
    }

    /// Saves configuration to the given `.ghtriage/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Replace the API base URL when an override is present.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }
}

/// A resolved `.ghtriage/` directory and its configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub work_dir: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Find `.ghtriage/` by walking up from `start`.
    ///
    /// Falls back to `start/.ghtriage` with the default config when no
    /// directory exists; nothing is created on disk.
    pub fn resolve(start: &Path) -> Result<Self> {
        match find_work_dir_from(start) {
            Some(work_dir) => {
                let config = Config::load(&work_dir)?;
                Ok(Workspace { work_dir, config })
            }
            None => Ok(Workspace {
                work_dir: start.join(WORK_DIR_NAME),
                config: Config::default(),
            }),
        }
    }

    /// Resolve from the current directory.
    pub fn current() -> Result<Self> {
        Self::resolve(&std::env::current_dir()?)
    }

    pub fn db_path(&self) -> PathBuf {
        get_db_path(&self.work_dir, &self.config)
    }
}

/// Find the .ghtriage directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Some(work_dir);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(database)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .ghtriage directory at the given path
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    Config::default().save(&work_dir)?;
    write_gitignore(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory.
///
/// The mirror database and its WAL files are local state.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    fs::write(
        &gitignore_path,
        "# Local issue mirror\nmirror.db\nmirror.db-wal\nmirror.db-shm\n",
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
