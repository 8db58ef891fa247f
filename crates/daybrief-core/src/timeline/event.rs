//! Calendar event types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::scheduler::FixedBlock;
use crate::task::Task;

/// Kind of block an event occupies on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Work,
    Break,
    Fixed,
    Travel,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Break => "break",
            Self::Fixed => "fixed",
            Self::Travel => "travel",
        }
    }

    /// Whether events of this type must never overlap each other.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Work | Self::Fixed)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single block on the planned day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub event_id: String,
    /// Present for work events, absent for fixed blocks.
    pub task_id: Option<String>,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_min: i64,
    pub block_type: BlockType,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Create an event with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] if `end_time <= start_time`.
    pub fn try_new(
        task_id: Option<String>,
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        block_type: BlockType,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }

        Ok(Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            task_id,
            title: title.into(),
            start_time,
            end_time,
            duration_min: (end_time - start_time).num_minutes(),
            block_type,
            created_at,
        })
    }

    /// Event mirroring a fixed block.
    pub(crate) fn fixed(block: &FixedBlock, created_at: DateTime<Utc>) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            task_id: None,
            title: block.label.clone(),
            start_time: block.start,
            end_time: block.end,
            duration_min: block.duration_minutes(),
            block_type: BlockType::Fixed,
            created_at,
        }
    }

    /// Work event for a task placed at `[start, end)`.
    pub(crate) fn work(
        task: &Task,
        start: NaiveDateTime,
        end: NaiveDateTime,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            task_id: Some(task.task_id.clone()),
            title: format!("[{}] {}", task.priority, task.title),
            start_time: start,
            end_time: end,
            duration_min: (end - start).num_minutes(),
            block_type: BlockType::Work,
            created_at,
        }
    }

    /// Check if this event overlaps with a half-open time range
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && self.end_time > start
    }
}
