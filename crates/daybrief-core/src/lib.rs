//! # Daybrief Core Library
//!
//! This library turns a day's task list into a non-overlapping timeline of
//! work blocks around fixed commitments. Task generation, brief formatting,
//! delivery and persistence live outside this crate; the planner only reads a
//! configuration snapshot and a task list and returns events.
//!
//! ## Architecture
//!
//! - **Constraints**: day boundaries, fixed blocks and advisory work windows
//!   parsed from configuration for one reference date
//! - **Ordering**: stable priority-then-energy sort of the task list
//! - **Allocation**: greedy one-pass placement with a morning preference for
//!   deep work and a forward scan fallback
//! - **Timeline**: chronological merge of fixed and work events
//!
//! ## Key Components
//!
//! - [`DayPlanner`]: Runs all four stages for one day
//! - [`DayPlan`]: Events plus ids of tasks that did not fit
//! - [`Config`]: Configuration snapshot
//! - [`Task`]: Input task record with lenient enum fields

pub mod config;
pub mod error;
pub mod scheduler;
pub mod task;
pub mod timeline;

pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use scheduler::{DayConstraints, DayPlanner, FixedBlock, WorkWindow};
pub use task::{normalize_task, Energy, Pillar, Priority, Task, TaskSource, TaskStatus};
pub use timeline::{BlockType, CalendarEvent, DayPlan, PlanSummary};
