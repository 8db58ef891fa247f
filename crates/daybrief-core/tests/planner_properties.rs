//! Property tests for the day planner.

use std::collections::HashSet;

use chrono::NaiveDate;
use daybrief_core::task::normalize_task_with_due;
use daybrief_core::{Config, DayPlan, DayPlanner, Task};
use proptest::prelude::*;
use serde_json::json;

const PRIORITIES: &[&str] = &["P1", "P2", "P3", "urgent", ""];
const ENERGIES: &[&str] = &["deep", "steady", "light", "zen"];

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[derive(Debug, Clone)]
struct DaySetup {
    wake: u32,
    gym: Option<u32>,
    reflect: Option<u32>,
    windows: Vec<(u32, u32)>,
    deep_work_morning: bool,
}

impl DaySetup {
    fn config(&self) -> Config {
        let mut config = Config::default();
        config.user.wake_time = clock(self.wake);
        config.user.gym_time = self.gym.map(clock);
        config.schedule.evening_reflect = self.reflect.map(clock);
        config.user.preferred_work_blocks = self
            .windows
            .iter()
            .map(|&(start, len)| format!("{}-{}", clock(start), clock(start + len)))
            .collect();
        config.agents.scheduler.deep_work_morning = self.deep_work_morning;
        config
    }
}

fn day_setup() -> impl Strategy<Value = DaySetup> {
    (
        (5u32 * 60..10 * 60),
        prop::option::of(5u32 * 60..19 * 60),
        prop::option::of(17u32 * 60..22 * 60),
        prop::collection::vec((7u32 * 60..15 * 60, 30u32..180), 0..3),
        any::<bool>(),
    )
        .prop_map(|(wake, gym, reflect, windows, deep_work_morning)| DaySetup {
            wake,
            gym,
            reflect,
            windows,
            deep_work_morning,
        })
}

fn tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (
            prop::sample::select(PRIORITIES),
            prop::sample::select(ENERGIES),
            5i64..300,
        ),
        0..12,
    )
    .prop_map(|specs| {
        let due = date().and_hms_opt(23, 0, 0).unwrap();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (priority, energy, minutes))| {
                normalize_task_with_due(
                    &json!({
                        "task_id": format!("t{i}"),
                        "title": format!("Task {i}"),
                        "priority": priority,
                        "energy": energy,
                        "duration_est_min": minutes,
                    }),
                    due,
                )
                .unwrap()
            })
            .collect()
    })
}

/// Plan, skipping configurations the extractor rightly rejects.
fn try_plan(setup: &DaySetup, tasks: &[Task]) -> Option<DayPlan> {
    DayPlanner::new(setup.config()).plan(tasks, date()).ok()
}

proptest! {
    #[test]
    fn exclusive_events_never_overlap(setup in day_setup(), tasks in tasks()) {
        let Some(plan) = try_plan(&setup, &tasks) else { return Ok(()); };
        let exclusive: Vec<_> = plan.events.iter().filter(|e| e.block_type.is_exclusive()).collect();
        for (i, a) in exclusive.iter().enumerate() {
            for b in &exclusive[i + 1..] {
                prop_assert!(
                    a.end_time <= b.start_time || b.end_time <= a.start_time,
                    "{} [{} - {}) overlaps {} [{} - {})",
                    a.title, a.start_time, a.end_time, b.title, b.start_time, b.end_time
                );
            }
        }
    }

    #[test]
    fn every_task_is_scheduled_or_unscheduled_exactly_once(setup in day_setup(), tasks in tasks()) {
        let Some(plan) = try_plan(&setup, &tasks) else { return Ok(()); };

        let scheduled: Vec<_> = plan.work_events().filter_map(|e| e.task_id.clone()).collect();
        let unique: HashSet<_> = scheduled.iter().chain(plan.unscheduled.iter()).collect();
        prop_assert_eq!(scheduled.len() + plan.unscheduled.len(), tasks.len());
        prop_assert_eq!(unique.len(), tasks.len());
        for task in &tasks {
            prop_assert!(plan.is_scheduled(&task.task_id) != plan.is_unscheduled(&task.task_id));
        }
    }

    #[test]
    fn placement_follows_stable_priority_energy_order(setup in day_setup(), tasks in tasks()) {
        let Some(plan) = try_plan(&setup, &tasks) else { return Ok(()); };

        // Expected allocation order: sort key, then input position.
        let mut expected: Vec<(usize, &Task)> = tasks.iter().enumerate().collect();
        expected.sort_by_key(|(i, t)| (t.sort_key(), *i));

        let placed: Vec<_> = expected
            .iter()
            .filter_map(|(_, t)| plan.event_for(&t.task_id))
            .collect();
        for pair in placed.windows(2) {
            prop_assert!(pair[0].end_time < pair[1].start_time);
        }
    }

    #[test]
    fn events_are_sorted_and_consistent(setup in day_setup(), tasks in tasks()) {
        let Some(plan) = try_plan(&setup, &tasks) else { return Ok(()); };
        let day_start = date().and_time(chrono::NaiveTime::parse_from_str(&clock(setup.wake), "%H:%M").unwrap());

        for pair in plan.events.windows(2) {
            prop_assert!(pair[0].start_time <= pair[1].start_time);
        }
        for event in &plan.events {
            prop_assert!(event.start_time < event.end_time);
            prop_assert_eq!(event.duration_min, (event.end_time - event.start_time).num_minutes());
        }
        for event in plan.work_events() {
            prop_assert!(event.start_time >= day_start);
        }
    }
}

#[test]
fn reordering_equal_key_tasks_reorders_their_placement() {
    let setup = DaySetup {
        wake: 8 * 60,
        gym: Some(12 * 60),
        reflect: Some(21 * 60),
        windows: vec![],
        deep_work_morning: true,
    };
    let due = date().and_hms_opt(23, 0, 0).unwrap();
    let make = |id: &str| {
        normalize_task_with_due(
            &json!({"task_id": id, "priority": "P2", "energy": "steady", "duration_est_min": 50}),
            due,
        )
        .unwrap()
    };

    let forward = try_plan(&setup, &[make("x"), make("y"), make("z")]).unwrap();
    let reversed = try_plan(&setup, &[make("z"), make("y"), make("x")]).unwrap();

    let order = |plan: &DayPlan| -> Vec<String> {
        plan.work_events().filter_map(|e| e.task_id.clone()).collect()
    };
    assert_eq!(order(&forward), vec!["x", "y", "z"]);
    assert_eq!(order(&reversed), vec!["z", "y", "x"]);
    assert_eq!(
        forward.event_for("x").unwrap().start_time,
        reversed.event_for("z").unwrap().start_time
    );
}
