//! Day plan returned by the planner.

use serde::{Deserialize, Serialize};

use super::{BlockType, CalendarEvent};

/// Result of planning one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Fixed and work events, sorted by start time.
    pub events: Vec<CalendarEvent>,
    /// Ids of tasks that could not be placed, in the order they were attempted.
    pub unscheduled: Vec<String>,
}

/// Counts describing a plan.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    pub work_events: usize,
    pub fixed_events: usize,
    pub unscheduled: usize,
    pub scheduled_minutes: i64,
}

impl DayPlan {
    pub fn work_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events_of(BlockType::Work)
    }

    pub fn fixed_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events_of(BlockType::Fixed)
    }

    fn events_of(&self, block_type: BlockType) -> impl Iterator<Item = &CalendarEvent> {
        self.events
            .iter()
            .filter(move |e| e.block_type == block_type)
    }

    /// The work event placed for a task, if any.
    pub fn event_for(&self, task_id: &str) -> Option<&CalendarEvent> {
        self.work_events()
            .find(|e| e.task_id.as_deref() == Some(task_id))
    }

    pub fn is_scheduled(&self, task_id: &str) -> bool {
        self.event_for(task_id).is_some()
    }

    pub fn is_unscheduled(&self, task_id: &str) -> bool {
        self.unscheduled.iter().any(|id| id == task_id)
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            work_events: self.work_events().count(),
            fixed_events: self.fixed_events().count(),
            unscheduled: self.unscheduled.len(),
            scheduled_minutes: self.work_events().map(|e| e.duration_min).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, Utc};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn event(task_id: Option<&str>, start: NaiveDateTime, end: NaiveDateTime, block_type: BlockType) -> CalendarEvent {
        CalendarEvent::try_new(task_id.map(str::to_string), "e", start, end, block_type, Utc::now())
            .unwrap()
    }

    #[test]
    fn queries_and_summary() {
        let plan = DayPlan {
            events: vec![
                event(None, at(7, 0), at(8, 0), BlockType::Fixed),
                event(Some("a"), at(8, 0), at(9, 30), BlockType::Work),
                event(Some("b"), at(9, 40), at(10, 0), BlockType::Work),
            ],
            unscheduled: vec!["c".to_string()],
        };

        assert!(plan.is_scheduled("a"));
        assert!(!plan.is_scheduled("c"));
        assert!(plan.is_unscheduled("c"));
        assert_eq!(plan.event_for("b").unwrap().start_time, at(9, 40));
        assert_eq!(
            plan.summary(),
            PlanSummary {
                work_events: 2,
                fixed_events: 1,
                unscheduled: 1,
                scheduled_minutes: 110,
            }
        );
    }

    #[test]
    fn empty_plan_summary_is_zero() {
        assert_eq!(DayPlan::default().summary(), PlanSummary::default());
    }
}
