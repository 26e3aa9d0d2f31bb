use anyhow::Result;
use clap::Parser;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;
mod output;
mod quiz;

use crate::output::console::ConsoleOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::settings::Settings;
use crate::quiz::Quiz;

#[derive(Parser)]
#[command(name = "timed-quiz")]
#[command(version)]
#[command(about = "Ask the questions of a CSV file against the clock", long_about = None)]
struct Cli {
    /// A CSV file in the format of 'question,answer'
    #[arg(long, default_value = "problems.csv")]
    csv: PathBuf,
    /// The time limit per question, in seconds
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    time: i64,
    /// Seconds to wait before the first question
    #[arg(long, default_value_t = 3)]
    startup_delay: u64,
    /// Ask the questions in a random order
    #[arg(long)]
    shuffle: bool,
    /// Diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let output = ConsoleOutput::new();

    let mut settings = Settings::from_time_limit(cli.time, &output);
    settings.startup_delay = Duration::from_secs(cli.startup_delay);
    settings.shuffle = cli.shuffle;

    let definition = QuizDefinition::open(&cli.csv)?;
    info!(
        "Starting quiz from {} with {} questions ({:?} per question)",
        cli.csv.display(),
        definition.get_questions().len(),
        settings.time_limit
    );

    let quiz = Quiz::new(definition, settings, output);
    quiz.run(BufReader::new(io::stdin()))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
