//! goal CLI: report outstanding tactics for your goals.

use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use goal::config::{Config, GoalPaths};
use goal::error::GoalResult;
use goal::example::EXAMPLE;
use goal::loader::{LoadOutcome, load_goals};
use goal::report::render;

#[derive(Parser)]
#[command(
    name = "goal",
    version,
    about = "Achieve your goals by using strategy and tactics"
)]
struct Cli {
    /// Directory holding goal YAML files [default: ~/goal].
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Print example YAML file content and exit.
    #[arg(long)]
    example: bool,

    /// Also show done tactics, dates, intervals and strategies.
    #[arg(short, long)]
    verbose: bool,

    /// Config file [default: $XDG_CONFIG_HOME/goal/config.toml].
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .init();

    let cli = Cli::parse();

    if cli.example {
        print!("{EXAMPLE}");
        return Ok(());
    }

    let (dir, outcome) = run(&cli)?;
    if !outcome.is_clean() {
        let count = outcome.failures.len();
        for failure in outcome.failures {
            eprintln!("{:?}", miette::Report::new(failure));
        }
        miette::bail!(
            "{count} goal file(s) in {} could not be loaded",
            dir.display()
        );
    }

    Ok(())
}

/// Resolve the goals directory, load it and print the report to stdout.
///
/// Returns the directory and the load outcome so the caller can report
/// skipped files after the goals that did load.
fn run(cli: &Cli) -> GoalResult<(PathBuf, LoadOutcome)> {
    let paths = GoalPaths::resolve();
    let config = match (&cli.config, &paths) {
        (Some(file), _) => Config::load(file)?,
        (None, Ok(paths)) => Config::load_or_default(&paths.config_file())?,
        (None, Err(_)) => Config::default(),
    };

    let dir = match cli.dir.clone().or(config.dir) {
        Some(dir) => match &paths {
            Ok(paths) => paths.expand(&dir),
            Err(_) => dir,
        },
        None => paths?.default_goals_dir(),
    };
    let verbose = cli.verbose || config.verbose;

    let outcome = load_goals(&dir)?;

    let now = chrono::Local::now().naive_local();
    render(&outcome.goals, verbose, now, &mut std::io::stdout().lock())?;

    Ok((dir, outcome))
}
