//! Task types consumed by the planner.
//!
//! Tasks arrive from the upstream generator and are read-only here. Every
//! enum field deserializes leniently: a label outside the allowed set is
//! replaced by the default from [`validation::FIELD_RULES`] instead of
//! rejecting the whole task.

pub mod validation;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use validation::{
    normalize_task, normalize_task_with_due, parse_tasks, read_tasks, FieldRule, FIELD_RULES,
};

/// An enum whose values are identified by a fixed string label.
pub trait Labeled: Sized + Copy + Default + 'static {
    /// Field name as it appears in task records.
    const FIELD: &'static str;
    /// Every value, in declaration order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}

/// Task priority; P1 is the most urgent.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    P1,
    P2,
    #[default]
    P3,
}

impl Priority {
    /// Sort rank, lower is scheduled first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
        }
    }
}

impl Labeled for Priority {
    const FIELD: &'static str = "priority";
    const ALL: &'static [Self] = &[Priority::P1, Priority::P2, Priority::P3];

    fn label(self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

/// Cognitive load of a task.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    /// Focused work, preferably placed in a morning window
    Deep,
    #[default]
    Steady,
    Light,
}

impl Energy {
    /// Sort rank, lower is scheduled first.
    pub fn rank(self) -> u8 {
        match self {
            Energy::Deep => 1,
            Energy::Steady => 2,
            Energy::Light => 3,
        }
    }
}

impl Labeled for Energy {
    const FIELD: &'static str = "energy";
    const ALL: &'static [Self] = &[Energy::Deep, Energy::Steady, Energy::Light];

    fn label(self) -> &'static str {
        match self {
            Energy::Deep => "deep",
            Energy::Steady => "steady",
            Energy::Light => "light",
        }
    }
}

/// Life domain a task belongs to. Display grouping only.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum Pillar {
    Connection,
    Curiosity,
    Presence,
    #[default]
    Contribution,
}

impl Labeled for Pillar {
    const FIELD: &'static str = "pillar";
    const ALL: &'static [Self] = &[
        Pillar::Connection,
        Pillar::Curiosity,
        Pillar::Presence,
        Pillar::Contribution,
    ];

    fn label(self) -> &'static str {
        match self {
            Pillar::Connection => "Connection",
            Pillar::Curiosity => "Curiosity",
            Pillar::Presence => "Presence",
            Pillar::Contribution => "Contribution",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
    Blocked,
}

impl Labeled for TaskStatus {
    const FIELD: &'static str = "status";
    const ALL: &'static [Self] = &[
        TaskStatus::Todo,
        TaskStatus::Doing,
        TaskStatus::Done,
        TaskStatus::Blocked,
    ];

    fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
            TaskStatus::Blocked => "blocked",
        }
    }
}

/// Where a task came from: weekly goals or last evening's reflection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    #[default]
    Goal,
    Reflection,
}

impl Labeled for TaskSource {
    const FIELD: &'static str = "source";
    const ALL: &'static [Self] = &[TaskSource::Goal, TaskSource::Reflection];

    fn label(self) -> &'static str {
        match self {
            TaskSource::Goal => "goal",
            TaskSource::Reflection => "reflection",
        }
    }
}

macro_rules! lenient_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
                    Ok(validation::coerce_value(raw.as_ref()))
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

lenient_deserialize!(Priority, Energy, Pillar, TaskStatus, TaskSource);

/// A unit of work produced upstream for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub task_id: String,
    pub title: String,
    #[serde(default)]
    pub why: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub energy: Energy,
    pub duration_est_min: u32,
    pub due: NaiveDateTime,
    #[serde(default)]
    pub pillar: Pillar,
    /// Not consulted by the allocator.
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub artifact_link: Option<String>,
    #[serde(default)]
    pub source: TaskSource,
}

impl Task {
    /// Create a todo task with default classification.
    pub fn new(
        task_id: impl Into<String>,
        title: impl Into<String>,
        duration_est_min: u32,
        due: NaiveDateTime,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            title: title.into(),
            why: String::new(),
            steps: Vec::new(),
            priority: Priority::default(),
            energy: Energy::default(),
            duration_est_min,
            due,
            pillar: Pillar::default(),
            deps: Vec::new(),
            status: TaskStatus::default(),
            artifact_link: None,
            source: TaskSource::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = energy;
        self
    }

    /// Composite key used by the task orderer.
    pub fn sort_key(&self) -> (u8, u8) {
        (self.priority.rank(), self.energy.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn due() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    #[test]
    fn task_deserializes_known_labels() {
        let task: Task = serde_json::from_value(json!({
            "task_id": "t-1",
            "title": "Draft outline",
            "why": "Unblocks the essay",
            "steps": ["open doc", "write headings"],
            "priority": "P1",
            "energy": "deep",
            "duration_est_min": 45,
            "due": "2026-10-19T18:00:00",
            "pillar": "Curiosity",
            "deps": [],
            "status": "doing",
            "artifact_link": null,
            "source": "reflection"
        }))
        .unwrap();

        assert_eq!(task.priority, Priority::P1);
        assert_eq!(task.energy, Energy::Deep);
        assert_eq!(task.pillar, Pillar::Curiosity);
        assert_eq!(task.status, TaskStatus::Doing);
        assert_eq!(task.source, TaskSource::Reflection);
        assert_eq!(task.due, due());
    }

    #[test]
    fn unknown_labels_fall_back_to_defaults() {
        let task: Task = serde_json::from_value(json!({
            "task_id": "t-2",
            "title": "Mystery",
            "priority": "urgent!!",
            "energy": 7,
            "duration_est_min": 20,
            "due": "2026-10-19T18:00:00",
            "pillar": "Wealth",
            "status": null
        }))
        .unwrap();

        assert_eq!(task.priority, Priority::P3);
        assert_eq!(task.energy, Energy::Steady);
        assert_eq!(task.pillar, Pillar::Contribution);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.source, TaskSource::Goal);
    }

    #[test]
    fn serialization_uses_labels() {
        let task = Task::new("t-3", "Call mom", 15, due())
            .with_priority(Priority::P2)
            .with_energy(Energy::Light);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "P2");
        assert_eq!(json["energy"], "light");
        assert_eq!(json["pillar"], "Contribution");
        assert_eq!(json["status"], "todo");
        assert_eq!(json["source"], "goal");
    }

    #[test]
    fn sort_key_ranks_priority_then_energy() {
        let a = Task::new("a", "a", 10, due())
            .with_priority(Priority::P1)
            .with_energy(Energy::Light);
        let b = Task::new("b", "b", 10, due())
            .with_priority(Priority::P2)
            .with_energy(Energy::Deep);
        assert!(a.sort_key() < b.sort_key());
        assert_eq!(a.sort_key(), (1, 3));
    }
}
