mod config;
mod filter;
mod inspect;
mod output;
mod range;
mod satisfies;
mod sort;

use config::ModverConfig;
use output::{Output, OutputFormat};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "modver")]
#[command(about = "Check mod versions against dependency ranges")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides modver.toml)
    #[arg(short = 'f', long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a version satisfies a range (exit code 1 if not)
    Satisfies(satisfies::SatisfiesArgs),

    /// Print the versions that satisfy a range
    Filter(filter::FilterArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Show the parts of a version
    Inspect(inspect::InspectArgs),

    /// Show the clauses of a range
    Range(range::RangeArgs),
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG takes precedence over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ModverConfig::load_from_cwd()?;
    let output = Output::resolve(config.as_ref(), args.format, args.no_color);
    if !output.color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Satisfies(cmd) => satisfies::execute(cmd, &output),
        Commands::Filter(cmd) => filter::execute(cmd, &output),
        Commands::Sort(cmd) => sort::execute(cmd, &output),
        Commands::Inspect(cmd) => inspect::execute(cmd, &output),
        Commands::Range(cmd) => range::execute(cmd, &output),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
