use clap::Args;
use daybrief_core::task::read_tasks;
use daybrief_core::DayPlanner;
use std::path::PathBuf;

use super::{load_config, resolve_date};

#[derive(Args)]
pub struct PlanArgs {
    /// Path to config.toml (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to a JSON task list
    #[arg(long)]
    tasks: PathBuf,
    /// Day to plan (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
    /// Cap on tasks taken from the list (default: agents.planner.max_tasks_per_day)
    #[arg(long)]
    max_tasks: Option<usize>,
    /// Print only the one-line summary
    #[arg(long)]
    summary: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let date = resolve_date(args.date.as_deref())?;

    let mut tasks = read_tasks(&args.tasks)?;
    let limit = args
        .max_tasks
        .unwrap_or(config.agents.planner.max_tasks_per_day);
    if tasks.len() > limit {
        tracing::info!(total = tasks.len(), limit, "truncating task list");
        tasks.truncate(limit);
    }

    let plan = DayPlanner::new(config).plan(&tasks, date)?;

    if args.summary {
        let s = plan.summary();
        println!(
            "{date}: {} work blocks ({} min), {} fixed, {} unscheduled",
            s.work_events, s.scheduled_minutes, s.fixed_events, s.unscheduled
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}
