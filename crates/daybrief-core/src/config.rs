//! TOML-based configuration snapshot.
//!
//! Only the keys the planner consumes are typed:
//! - `user.wake_time`, `user.gym_time`, `user.preferred_work_blocks`
//! - `schedule.evening_reflect`
//! - `agents.scheduler.deep_work_morning`
//! - `agents.planner.max_tasks_per_day`
//!
//! Unknown keys are ignored, so the assistant's whole configuration file can be
//! handed over unchanged. Time strings stay raw here; they are parsed (and
//! rejected when malformed) by the constraint extractor at planning time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// `[user]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
    #[serde(default)]
    pub gym_time: Option<String>,
    /// Advisory windows, each "HH:MM-HH:MM".
    #[serde(default)]
    pub preferred_work_blocks: Vec<String>,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Start of the evening reflection block. Also the end of the planning
    /// horizon; when absent the horizon falls back to 21:00 and no reflection
    /// block is added.
    #[serde(default)]
    pub evening_reflect: Option<String>,
}

/// `[agents.scheduler]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerAgentConfig {
    #[serde(default = "default_true")]
    pub deep_work_morning: bool,
}

/// `[agents.planner]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerAgentConfig {
    #[serde(default = "default_max_tasks_per_day")]
    pub max_tasks_per_day: usize,
}

/// `[agents]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default)]
    pub scheduler: SchedulerAgentConfig,
    #[serde(default)]
    pub planner: PlannerAgentConfig,
}

/// Configuration snapshot read by the planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub agents: AgentsConfig,
}

// Default functions
fn default_wake_time() -> String {
    "08:00".into()
}
fn default_true() -> bool {
    true
}
fn default_max_tasks_per_day() -> usize {
    5
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: None,
            wake_time: default_wake_time(),
            gym_time: None,
            preferred_work_blocks: Vec::new(),
        }
    }
}

impl Default for SchedulerAgentConfig {
    fn default() -> Self {
        Self {
            deep_work_morning: true,
        }
    }
}

impl Default for PlannerAgentConfig {
    fn default() -> Self {
        Self {
            max_tasks_per_day: default_max_tasks_per_day(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Parse a snapshot from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] if the text is not valid TOML or a
    /// typed key has the wrong shape.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a snapshot from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoadFailed`] if the file cannot be read, or
    /// [`ConfigError::ParseFailed`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
