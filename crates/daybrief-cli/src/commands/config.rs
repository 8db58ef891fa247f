use clap::Subcommand;
use std::path::PathBuf;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "user.wake_time", "agents.scheduler.deep_work_morning")
        key: String,
        /// Path to config.toml (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show the effective configuration
    Show {
        /// Path to config.toml (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key, config } => {
            let config = load_config(config.as_deref())?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown or unset key: {key}").into()),
            }
        }
        ConfigAction::Show { config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
