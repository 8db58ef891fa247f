use clap::Args;
use daybrief_core::scheduler::extract_constraints;
use std::path::PathBuf;

use super::{load_config, resolve_date};

#[derive(Args)]
pub struct ConstraintsArgs {
    /// Path to config.toml (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Day to resolve times against (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
}

pub fn run(args: ConstraintsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let date = resolve_date(args.date.as_deref())?;
    let constraints = extract_constraints(&config, date)?;
    println!("{}", serde_json::to_string_pretty(&constraints)?);
    Ok(())
}
