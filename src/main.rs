mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use monthgrid_core::WeekStart;

#[derive(Parser)]
#[command(name = "monthgrid")]
#[command(about = "Show a month calendar grid with your events")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a month as a grid
    Show {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// JSON file with an array of events
        #[arg(short, long)]
        events: Option<PathBuf>,

        /// First day of the week: "sunday" or "monday"
        #[arg(short, long)]
        week_start: Option<WeekStart>,

        /// Events shown per day before collapsing into "+N more"
        #[arg(long)]
        max_per_cell: Option<usize>,

        /// strftime pattern for the weekday headers (e.g. "%a", "%A")
        #[arg(long)]
        header_format: Option<String>,

        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// List every event of a single day
    Day {
        /// Day to list (YYYY-MM-DD)
        date: String,

        /// JSON file with an array of events
        #[arg(short, long)]
        events: PathBuf,
    },
    /// Show the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    let color = !cli.no_color;

    match cli.command {
        Commands::Show {
            month,
            events,
            week_start,
            max_per_cell,
            header_format,
            today,
        } => commands::show::run(commands::show::ShowArgs {
            month,
            events,
            week_start,
            max_per_cell,
            header_format,
            today,
            color,
        }),
        Commands::Day { date, events } => commands::day::run(&date, &events, color),
        Commands::Config => commands::config::run(color),
    }
}
