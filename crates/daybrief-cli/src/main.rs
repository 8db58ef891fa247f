use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "daybrief-cli", version, about = "Daybrief CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a day of tasks into a timeline
    Plan(commands::plan::PlanArgs),
    /// Show the constraints extracted for a day
    Constraints(commands::constraints::ConstraintsArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Constraints(args) => commands::constraints::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
