//! Validation table for task enum fields and normalization of raw records.
//!
//! Upstream task records come from a language model and are frequently
//! incomplete. Each enum field has one entry in [`FIELD_RULES`] naming its
//! allowed labels and the label used when the value is missing or unknown.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::path::Path;

use super::{Labeled, Task};
use crate::error::{CoreError, ValidationError};

/// Allowed labels and fallback for one task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub allowed: &'static [&'static str],
    pub default: &'static str,
}

impl FieldRule {
    /// Return `raw` if it is allowed, otherwise the default label.
    pub fn coerce<'a>(&self, raw: Option<&'a str>) -> &'a str {
        match raw {
            Some(label) if self.allowed.iter().any(|a| *a == label) => label,
            _ => self.default,
        }
    }
}

pub const FIELD_RULES: [FieldRule; 5] = [
    FieldRule {
        field: "priority",
        allowed: &["P1", "P2", "P3"],
        default: "P3",
    },
    FieldRule {
        field: "energy",
        allowed: &["deep", "steady", "light"],
        default: "steady",
    },
    FieldRule {
        field: "pillar",
        allowed: &["Connection", "Curiosity", "Presence", "Contribution"],
        default: "Contribution",
    },
    FieldRule {
        field: "status",
        allowed: &["todo", "doing", "done", "blocked"],
        default: "todo",
    },
    FieldRule {
        field: "source",
        allowed: &["goal", "reflection"],
        default: "goal",
    },
];

const DEFAULT_TITLE: &str = "Untitled task";
const DEFAULT_WHY: &str = "No reason provided";
const DEFAULT_DURATION_MIN: u32 = 30;

/// Look up the rule for a field name.
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}

/// Map a raw JSON value onto an enum through its table entry.
pub(crate) fn coerce_value<T: Labeled>(raw: Option<&Value>) -> T {
    let label = raw.and_then(Value::as_str);
    let coerced = match rule_for(T::FIELD) {
        Some(rule) => rule.coerce(label),
        None => label.unwrap_or_default(),
    };
    T::from_label(coerced).unwrap_or_default()
}

/// Normalize a raw task record, using the current local time as the fallback
/// due date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] if `raw` is not a JSON object.
pub fn normalize_task(raw: &Value) -> Result<Task, ValidationError> {
    normalize_task_with_due(raw, Local::now().naive_local())
}

/// Normalize a raw task record, filling every missing or malformed field.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] if `raw` is not a JSON object.
pub fn normalize_task_with_due(
    raw: &Value,
    fallback_due: NaiveDateTime,
) -> Result<Task, ValidationError> {
    let obj = raw.as_object().ok_or_else(|| ValidationError::InvalidValue {
        field: "task".to_string(),
        message: format!("expected an object, got {}", type_name(raw)),
    })?;

    let text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let task_id = text("task_id").unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let title = text("title")
        .or_else(|| text("task"))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let why = text("why").unwrap_or_else(|| DEFAULT_WHY.to_string());

    let duration_est_min = obj
        .get("duration_est_min")
        .and_then(Value::as_i64)
        .filter(|&m| m > 0)
        .and_then(|m| u32::try_from(m).ok())
        .unwrap_or(DEFAULT_DURATION_MIN);

    let due = match obj.get("due").and_then(Value::as_str) {
        Some(s) => parse_due(s).unwrap_or_else(|| {
            tracing::debug!(task_id = %task_id, due = s, "unparseable due date, using fallback");
            fallback_due
        }),
        None => fallback_due,
    };

    Ok(Task {
        priority: coerce_value(obj.get("priority")),
        energy: coerce_value(obj.get("energy")),
        pillar: coerce_value(obj.get("pillar")),
        status: coerce_value(obj.get("status")),
        source: coerce_value(obj.get("source")),
        steps: string_list(obj.get("steps")),
        deps: string_list(obj.get("deps")),
        artifact_link: text("artifact_link"),
        task_id,
        title,
        why,
        duration_est_min,
        due,
    })
}

/// Parse and normalize a task list from JSON text.
///
/// Accepts either a bare array of task records or an object with a `tasks`
/// array, which is the shape the upstream generator emits.
///
/// # Errors
///
/// Returns [`CoreError::Json`] for invalid JSON and [`CoreError::Validation`]
/// if the document or any element has the wrong shape.
pub fn parse_tasks(content: &str) -> Result<Vec<Task>, CoreError> {
    let doc: Value = serde_json::from_str(content)?;
    let items = match &doc {
        Value::Array(items) => items,
        Value::Object(obj) => obj
            .get("tasks")
            .and_then(Value::as_array)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "tasks".to_string(),
                message: "expected an array of task records".to_string(),
            })?,
        other => {
            return Err(ValidationError::InvalidValue {
                field: "tasks".to_string(),
                message: format!("expected an array or object, got {}", type_name(other)),
            }
            .into())
        }
    };

    let fallback_due = Local::now().naive_local();
    items
        .iter()
        .map(|item| normalize_task_with_due(item, fallback_due).map_err(CoreError::from))
        .collect()
}

/// Read and normalize a task list from a JSON file.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be read, otherwise see
/// [`parse_tasks`].
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, CoreError> {
    let content = std::fs::read_to_string(path)?;
    parse_tasks(&content)
}

fn string_list(raw: Option<&Value>) -> Vec<String> {
    raw.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_due(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
