mod commands;
mod notify;
mod render;
mod scheduler;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kumbu-notify")]
#[command(about = "Desktop reminders for your kumbu events and birthdays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reminder scheduler until interrupted
    Run {
        /// Override the configured check interval (e.g. "30m", "1h")
        #[arg(long)]
        interval: Option<String>,
    },
    /// Evaluate reminders once and exit
    Check,
    /// List upcoming events and birthdays
    Upcoming {
        /// How many days ahead to look
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { interval } => commands::run::run(interval.as_deref()).await,
        Commands::Check => commands::check::run().await,
        Commands::Upcoming { days } => commands::upcoming::run(days).await,
    }
}
