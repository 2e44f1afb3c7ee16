//! Satisfies command - check one version against a range.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use modver_semver::{RangeParser, SemanticVersion, VersionMatcher};
use serde::Serialize;

use crate::output::Output;

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Version to check, e.g. 1.16.5
    pub version: String,

    /// Range to check against, e.g. ">=1.16.0 <1.17.0"
    pub range: String,
}

#[derive(Debug, Serialize)]
struct SatisfiesReport<'a> {
    version: &'a str,
    range: &'a str,
    satisfies: bool,
}

pub fn execute(args: SatisfiesArgs, output: &Output) -> Result<i32> {
    let satisfies = check(&args.version, &args.range)?;

    if output.is_json() {
        output.print_json(&SatisfiesReport {
            version: &args.version,
            range: &args.range,
            satisfies,
        })?;
    } else if satisfies {
        println!("{}", "yes".green());
    } else {
        println!("{}", "no".red());
    }

    Ok(if satisfies { 0 } else { 1 })
}

fn check(version: &str, range: &str) -> Result<bool> {
    let version: SemanticVersion = version
        .parse()
        .with_context(|| format!("Invalid version \"{}\"", version))?;
    let predicate = RangeParser::new()
        .parse(range)
        .with_context(|| format!("Invalid range \"{}\"", range))?;

    log::debug!("Checking {} against {}", version, predicate);
    Ok(predicate.matches(&version))
}
