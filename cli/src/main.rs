use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_runtime::{load_schedules, Session};
use std::path::PathBuf;

mod console;
mod render;

/// Roster lookup - find a student's section and weekly schedule by id
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML schedule table to use instead of the built-in one
    #[arg(long, global = true)]
    schedules: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a roster and look up ids
    Lookup {
        /// Path to the roster CSV file
        roster_path: PathBuf,
        /// Comma-separated list of ids (e.g., "1001,2002")
        input_string: Option<String>,
    },
    /// Start an interactive lookup prompt
    Console {
        /// Roster CSV file to load on start
        roster_path: Option<PathBuf>,
    },
    /// Print the schedule table
    Sections,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("roster error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Args::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let schedules = load_schedules(cli.schedules.as_deref()).context("failed to load schedules")?;
    let mut session = Session::new(schedules);

    match cli.command {
        Commands::Lookup {
            roster_path,
            input_string,
        } => {
            session.upload_file(&roster_path)?;
            if let Some(message) = session.message() {
                println!("{}", message);
            }

            let input_string = input_string.unwrap_or_default();
            for query in input_string.split(',') {
                tracing::debug!(query, "looking up id");
                if let Some(result) = session.search(query) {
                    print!("{}", render::render_result(result));
                }
            }
        }
        Commands::Console { roster_path } => {
            console::Console::new(session).start(roster_path)?;
        }
        Commands::Sections => {
            print!("{}", render::render_schedules(&session.schedules));
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ROSTER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
