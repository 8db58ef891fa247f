//! Allocation order for a day's tasks.

use crate::task::Task;

/// Order tasks by priority, then energy; ties keep their input order.
pub fn order_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    // `sort_by_key` is stable.
    ordered.sort_by_key(|t| t.sort_key());
    ordered
}
