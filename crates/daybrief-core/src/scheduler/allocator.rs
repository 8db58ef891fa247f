//! Greedy slot allocation for ordered tasks.
//!
//! One cursor walks the day from wake time. Each task is tried first in a
//! morning work window (deep tasks only, when enabled) and then by a forward
//! scan bounded by the day end. Placed tasks push the cursor past their end
//! plus a buffer; unplaced tasks leave it where it was.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tracing::{debug, warn};

use super::constraints::{DayConstraints, FixedBlock};
use crate::task::{Energy, Task};
use crate::timeline::CalendarEvent;

/// Gap enforced after every placed task.
pub const TASK_BUFFER_MINUTES: i64 = 10;
/// Cursor step used when the scan is blocked by a fixed block that starts
/// after the cursor.
pub const SCAN_STEP_MINUTES: i64 = 15;
/// Work windows starting before this hour count as morning windows.
const MORNING_CUTOFF_HOUR: u32 = 12;

/// Work events placed by the allocator plus the tasks it had to skip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    pub work_events: Vec<CalendarEvent>,
    pub unscheduled: Vec<String>,
}

/// Where a placed task ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    MorningWindow,
    Scan,
}

pub struct SlotAllocator<'a> {
    constraints: &'a DayConstraints,
    prefer_morning_for_deep_work: bool,
    created_at: DateTime<Utc>,
}

impl<'a> SlotAllocator<'a> {
    pub fn new(
        constraints: &'a DayConstraints,
        prefer_morning_for_deep_work: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            constraints,
            prefer_morning_for_deep_work,
            created_at,
        }
    }

    /// Place tasks in the given order. The order is never revisited.
    pub fn allocate(&self, ordered: &[&Task]) -> Allocation {
        let mut allocation = Allocation::default();
        let mut cursor = self.constraints.day_start;
        let buffer = Duration::minutes(TASK_BUFFER_MINUTES);

        for task in ordered {
            match self.place(task, cursor) {
                Some((start, end, placement)) => {
                    debug!(
                        task_id = %task.task_id,
                        start = %start,
                        end = %end,
                        ?placement,
                        "task placed"
                    );
                    allocation
                        .work_events
                        .push(CalendarEvent::work(task, start, end, self.created_at));
                    cursor = end + buffer;
                }
                None => {
                    warn!(
                        task_id = %task.task_id,
                        title = %task.title,
                        duration_min = task.duration_est_min,
                        "no available time slot, task left unscheduled"
                    );
                    allocation.unscheduled.push(task.task_id.clone());
                }
            }
        }

        allocation
    }

    fn place(
        &self,
        task: &Task,
        cursor: NaiveDateTime,
    ) -> Option<(NaiveDateTime, NaiveDateTime, Placement)> {
        if task.duration_est_min == 0 {
            return None;
        }
        let duration = Duration::minutes(i64::from(task.duration_est_min));

        if let Some((start, end)) = self.place_in_morning_window(task, cursor, duration) {
            return Some((start, end, Placement::MorningWindow));
        }
        self.scan_forward(cursor, duration)
            .map(|(start, end)| (start, end, Placement::Scan))
    }

    /// First morning window, in configured order, that fits the task after
    /// the cursor without touching a fixed block.
    fn place_in_morning_window(
        &self,
        task: &Task,
        cursor: NaiveDateTime,
        duration: Duration,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if !self.prefer_morning_for_deep_work || task.energy != Energy::Deep {
            return None;
        }
        let noon = self
            .constraints
            .day_start
            .date()
            .and_hms_opt(MORNING_CUTOFF_HOUR, 0, 0)?;

        self.constraints
            .work_windows
            .iter()
            .filter(|w| w.start < noon)
            .find_map(|w| {
                let start = cursor.max(w.start);
                let end = start + duration;
                (end <= w.end && self.constraints.is_free(start, end)).then_some((start, end))
            })
    }

    /// Walk forward from the cursor until the task fits or the day ends.
    fn scan_forward(
        &self,
        mut cursor: NaiveDateTime,
        duration: Duration,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let buffer = Duration::minutes(TASK_BUFFER_MINUTES);
        let step = Duration::minutes(SCAN_STEP_MINUTES);

        while cursor + duration <= self.constraints.day_end {
            let end = cursor + duration;
            if self.constraints.is_free(cursor, end) {
                return Some((cursor, end));
            }

            cursor = match self.block_containing(cursor) {
                Some(block) => block.end + buffer,
                // The conflicting block starts later inside the slot.
                None => cursor + step,
            };
        }
        None
    }

    fn block_containing(&self, t: NaiveDateTime) -> Option<&FixedBlock> {
        self.constraints.fixed_blocks.iter().find(|b| b.contains(t))
    }
}
