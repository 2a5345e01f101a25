//! Weft CLI — scenario runs and config validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "Weft — cloth particle dynamics engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a drop/drape scenario.
    Run {
        /// Which scenario to run (floor_drop, sphere_drape, box_drape, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the number of timesteps.
        #[arg(long)]
        steps: Option<u32>,

        /// Output CSV file path for run metrics.
        #[arg(short, long)]
        output: Option<String>,

        /// Write telemetry as JSON lines to this file.
        #[arg(long)]
        telemetry: Option<String>,
    },

    /// Validate a simulation parameter file (JSON).
    Validate {
        /// Path to a SimParams JSON file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            scenario,
            steps,
            output,
            telemetry,
        } => commands::run(&scenario, steps, output.as_deref(), telemetry.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
