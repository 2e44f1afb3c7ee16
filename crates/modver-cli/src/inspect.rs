//! Inspect command - show how a version string is understood.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use modver_semver::SemanticVersion;
use serde::Serialize;

use crate::output::Output;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Version to inspect
    pub version: String,

    /// Accept x, X and * as components, as range clauses do
    #[arg(short, long)]
    pub wildcard: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct VersionReport {
    version: String,
    components: Vec<String>,
    prerelease: Option<String>,
    build: Option<String>,
    has_wildcard: bool,
    is_prerelease: bool,
}

impl From<&SemanticVersion> for VersionReport {
    fn from(version: &SemanticVersion) -> Self {
        VersionReport {
            version: version.to_string(),
            components: version.components().iter().map(|c| c.to_string()).collect(),
            prerelease: version.prerelease().map(str::to_string),
            build: version.build().map(str::to_string),
            has_wildcard: version.has_wildcard(),
            is_prerelease: version.is_prerelease(),
        }
    }
}

pub fn execute(args: InspectArgs, output: &Output) -> Result<i32> {
    let version = SemanticVersion::parse(&args.version, args.wildcard)
        .with_context(|| format!("Invalid version \"{}\"", args.version))?;
    let report = VersionReport::from(&version);

    if output.is_json() {
        output.print_json(&report)?;
        return Ok(0);
    }

    println!("{} {}", "version:".bold(), report.version);
    println!("{} {}", "components:".bold(), report.components.join(", "));
    println!("{} {}", "prerelease:".bold(), report.prerelease.as_deref().unwrap_or("-"));
    println!("{} {}", "build:".bold(), report.build.as_deref().unwrap_or("-"));
    println!("{} {}", "wildcard:".bold(), report.has_wildcard);

    Ok(0)
}
