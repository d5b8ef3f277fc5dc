use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use modpath_cli::commands::{config, plan};
use modpath_cli::telemetry;
use modpath_planner::PlannerError;

#[derive(Parser)]
#[command(name = "modpath-cpp")]
#[command(about = "Analyze compile_commands.json and emit a practical C++20 modules migration plan.", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    plan: PlanArgs,
}

#[derive(Args)]
struct PlanArgs {
    /// Path to compile_commands.json
    #[arg(default_value = "./compile_commands.json")]
    compile_commands: PathBuf,

    /// Output machine-readable JSON for CI
    #[arg(long = "json")]
    as_json: bool,

    /// Maximum number of candidates to report
    #[arg(long, default_value_t = 10)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the migration plan (the default when no subcommand is given)
    Plan(PlanArgs),
    /// Show the build-time configuration constants
    Config {
        /// Output JSON instead of a table
        #[arg(long = "json")]
        as_json: bool,
    },
}

fn main() -> ExitCode {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Plan(args)) => plan::run(&args.compile_commands, args.as_json, args.top),
        Some(Commands::Config { as_json }) => config::run(as_json),
        None => plan::run(&cli.plan.compile_commands, cli.plan.as_json, cli.plan.top),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.downcast_ref::<PlannerError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
