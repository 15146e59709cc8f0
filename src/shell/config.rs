// Runtime configuration for the binary.
//
// Responsibilities
// - Read HTTP_ADDR, SEED_FILE, MAX_REASON_LENGTH and IMPORT_XML_ROOT, after
//   dotenvy has loaded a `.env` file if one exists.
// - Load seed data (schedule table and employees) from a JSON file.

use crate::modules::attendance::adapters::outbound::schedule_table::{
    ScheduleConfigError, ScheduleTable,
};
use crate::modules::attendance::core::schedule::ScheduleEntry;
use crate::modules::personnel::core::employee::Employee;
use crate::shared::core::config::EngineConfig;
use serde::Deserialize;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}={value:?} is invalid: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read seed file {path}: {reason}")]
    SeedUnreadable { path: String, reason: String },

    #[error("seed file {path} is invalid: {reason}")]
    SeedInvalid { path: String, reason: String },

    #[error(transparent)]
    Schedule(#[from] ScheduleConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidVar {
                name: "HTTP_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut engine = EngineConfig::default();
        if let Some(raw) = lookup("MAX_REASON_LENGTH") {
            engine.max_reason_len = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    name: "MAX_REASON_LENGTH",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(root) = lookup("IMPORT_XML_ROOT").filter(|root| !root.trim().is_empty()) {
            engine.import.xml_root = root.trim().to_string();
        }

        Ok(Self {
            http_addr,
            seed_file: lookup("SEED_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            engine,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&path.display().to_string(), &content)
    }

    pub fn from_json(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::SeedInvalid {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn schedule_table(&self) -> Result<ScheduleTable, ConfigError> {
        Ok(ScheduleTable::from_entries(self.schedule.iter().cloned())?)
    }
}
