//! Merge fixed-block events and allocated work events into one timeline.

use super::{CalendarEvent, DayPlan};

/// Concatenate fixed events and work events and sort them by start time.
///
/// The sort is stable, so events sharing a start time keep fixed-before-work
/// order and their relative input order.
pub fn assemble(
    fixed_events: Vec<CalendarEvent>,
    work_events: Vec<CalendarEvent>,
    unscheduled: Vec<String>,
) -> DayPlan {
    let mut events = fixed_events;
    events.extend(work_events);
    events.sort_by_key(|e| e.start_time);

    DayPlan {
        events,
        unscheduled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::BlockType;
    use chrono::{NaiveDate, NaiveDateTime, Utc};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn event(title: &str, start: NaiveDateTime, end: NaiveDateTime, block_type: BlockType) -> CalendarEvent {
        CalendarEvent::try_new(None, title, start, end, block_type, Utc::now()).unwrap()
    }

    #[test]
    fn interleaves_by_start_time() {
        let fixed = vec![
            event("Gym", at(12, 0), at(13, 0), BlockType::Fixed),
            event("Evening Reflection", at(21, 0), at(21, 30), BlockType::Fixed),
        ];
        let work = vec![
            event("a", at(8, 0), at(9, 0), BlockType::Work),
            event("b", at(13, 10), at(14, 0), BlockType::Work),
        ];

        let plan = assemble(fixed, work, vec!["c".into()]);
        let titles: Vec<_> = plan.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "Gym", "b", "Evening Reflection"]);
        assert_eq!(plan.unscheduled, vec!["c".to_string()]);
    }

    #[test]
    fn equal_start_times_keep_input_order() {
        let fixed = vec![event("fixed", at(9, 0), at(9, 30), BlockType::Fixed)];
        let work = vec![event("travel", at(9, 0), at(9, 15), BlockType::Travel)];
        let plan = assemble(fixed, work, Vec::new());
        assert_eq!(plan.events[0].title, "fixed");
        assert_eq!(plan.events[1].title, "travel");
    }

    #[test]
    fn fixed_blocks_survive_without_work() {
        let fixed = vec![event("Gym", at(7, 0), at(8, 0), BlockType::Fixed)];
        let plan = assemble(fixed, Vec::new(), Vec::new());
        assert_eq!(plan.events.len(), 1);
    }
}
