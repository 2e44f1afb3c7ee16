//! Filter command - keep the versions that satisfy a range.

use anyhow::{Context, Result};
use clap::Args;
use modver_semver::{RangeParser, SemanticVersion, VersionMatcher};

use crate::output::Output;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Range the versions must satisfy
    pub range: String,

    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: FilterArgs, output: &Output) -> Result<i32> {
    let matching = filter(&args.range, &args.versions)?;

    if output.is_json() {
        output.print_json(&matching)?;
    } else {
        for version in &matching {
            println!("{}", version);
        }
    }

    Ok(0)
}

fn filter<'a>(range: &str, versions: &'a [String]) -> Result<Vec<&'a str>> {
    let predicate = RangeParser::new()
        .parse(range)
        .with_context(|| format!("Invalid range \"{}\"", range))?;

    let mut matching = Vec::new();
    for candidate in versions {
        match candidate.parse::<SemanticVersion>() {
            Ok(version) if predicate.matches(&version) => matching.push(candidate.as_str()),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping {}: {}", candidate, e),
        }
    }

    Ok(matching)
}
