//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use modver_semver::{SemanticVersion, Semver};

use crate::output::Output;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort from newest to oldest
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs, output: &Output) -> Result<i32> {
    let sorted = sort(&args.versions, args.reverse);

    if output.is_json() {
        output.print_json(&sorted)?;
    } else {
        for version in &sorted {
            println!("{}", version);
        }
    }

    Ok(0)
}

fn sort(versions: &[String], reverse: bool) -> Vec<String> {
    for candidate in versions {
        if let Err(e) = candidate.parse::<SemanticVersion>() {
            log::warn!("Skipping {}: {}", candidate, e);
        }
    }

    let versions: Vec<&str> = versions.iter().map(String::as_str).collect();
    if reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    }
}
