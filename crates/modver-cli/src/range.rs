//! Range command - show the clauses a range expression parses into.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use modver_semver::{RangeParser, VersionMatcher, VersionPredicate};
use serde::Serialize;

use crate::output::Output;

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Range expression, e.g. ">=1.2.0 <2.0.0"
    pub range: String,
}

#[derive(Debug, Serialize)]
struct ClauseReport {
    operator: &'static str,
    version: String,
}

#[derive(Debug, Serialize)]
struct RangeReport {
    range: String,
    normalized: String,
    match_all: bool,
    clauses: Vec<ClauseReport>,
    prerelease_versions: Vec<String>,
}

impl From<&VersionPredicate> for RangeReport {
    fn from(predicate: &VersionPredicate) -> Self {
        RangeReport {
            range: predicate.pretty_string(),
            normalized: predicate.to_string(),
            match_all: predicate.is_match_all(),
            clauses: predicate
                .clauses()
                .iter()
                .map(|c| ClauseReport {
                    operator: c.operator().as_str(),
                    version: c.target().to_string(),
                })
                .collect(),
            prerelease_versions: predicate
                .prerelease_versions()
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

pub fn execute(args: RangeArgs, output: &Output) -> Result<i32> {
    let predicate = RangeParser::new()
        .parse(&args.range)
        .with_context(|| format!("Invalid range \"{}\"", args.range))?;
    let report = RangeReport::from(&predicate);

    if output.is_json() {
        output.print_json(&report)?;
        return Ok(0);
    }

    if report.match_all {
        println!("{}", "matches any version".green());
        return Ok(0);
    }

    for clause in &report.clauses {
        println!("{:>2} {}", clause.operator.cyan(), clause.version);
    }
    if !report.prerelease_versions.is_empty() {
        println!("{} {}", "prereleases:".bold(), report.prerelease_versions.join(", "));
    }

    Ok(0)
}
