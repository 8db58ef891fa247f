//! Daily timeline planner.
//!
//! Planning one day runs four stages, each a plain function of its inputs:
//! - Extract day boundaries, fixed blocks and work windows from configuration
//! - Order tasks by priority, then energy
//! - Allocate ordered tasks to conflict-free slots
//! - Assemble fixed and work events into one chronological plan
//!
//! Nothing is kept between runs, so a planner can be shared across threads
//! and invoked for many users or days at once.

mod allocator;
mod constraints;
mod order;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::info;

pub use allocator::{Allocation, SlotAllocator, SCAN_STEP_MINUTES, TASK_BUFFER_MINUTES};
pub use constraints::{
    extract_constraints, DayConstraints, FixedBlock, WorkWindow, DEFAULT_DAY_END,
    DEFAULT_WAKE_TIME, GYM_LABEL, REFLECTION_LABEL,
};
pub use order::order_tasks;

use crate::config::Config;
use crate::error::ConfigError;
use crate::task::Task;
use crate::timeline::{assemble, CalendarEvent, DayPlan};

/// Plans a day of tasks against one configuration snapshot.
#[derive(Debug, Clone)]
pub struct DayPlanner {
    config: Config,
}

impl DayPlanner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract the constraints this planner would use for `date`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any configured time is malformed.
    pub fn constraints(&self, date: NaiveDate) -> Result<DayConstraints, ConfigError> {
        extract_constraints(&self.config, date)
    }

    /// Plan `tasks` on `date`.
    ///
    /// Fixed blocks are part of the plan even when `tasks` is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any configured time is malformed; no
    /// partial plan is produced in that case.
    pub fn plan(&self, tasks: &[Task], date: NaiveDate) -> Result<DayPlan, ConfigError> {
        self.plan_at(tasks, date, Utc::now())
    }

    /// Plan `tasks` for the current local date.
    ///
    /// # Errors
    ///
    /// See [`DayPlanner::plan`].
    pub fn plan_today(&self, tasks: &[Task]) -> Result<DayPlan, ConfigError> {
        self.plan(tasks, Local::now().date_naive())
    }

    /// Plan with an explicit creation timestamp stamped on every event.
    ///
    /// # Errors
    ///
    /// See [`DayPlanner::plan`].
    pub fn plan_at(
        &self,
        tasks: &[Task],
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<DayPlan, ConfigError> {
        let constraints = self.constraints(date)?;

        let fixed_events: Vec<CalendarEvent> = constraints
            .fixed_blocks
            .iter()
            .map(|block| CalendarEvent::fixed(block, created_at))
            .collect();

        let ordered = order_tasks(tasks);
        let allocation = SlotAllocator::new(
            &constraints,
            self.config.agents.scheduler.deep_work_morning,
            created_at,
        )
        .allocate(&ordered);

        let plan = assemble(fixed_events, allocation.work_events, allocation.unscheduled);

        let summary = plan.summary();
        info!(
            %date,
            work_events = summary.work_events,
            fixed_events = summary.fixed_events,
            unscheduled = summary.unscheduled,
            scheduled_minutes = summary.scheduled_minutes,
            "day planned"
        );

        Ok(plan)
    }
}

impl Default for DayPlanner {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
