//! Output timeline for one planned day.
//!
//! This module provides:
//! - Calendar events emitted for fixed blocks and allocated tasks
//! - The assembler that merges them into one chronological sequence
//! - The day plan returned to callers, including unscheduled task ids

mod assembler;
mod event;
mod plan;

pub use assembler::assemble;
pub use event::{BlockType, CalendarEvent};
pub use plan::{DayPlan, PlanSummary};
