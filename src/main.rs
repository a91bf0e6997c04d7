//! Modsieve CLI
//!
//! Thin entry point over the engine: resolves the module set for a host
//! binary and writes a JSON report for the downstream build pipeline.
//!
//! Usage:
//!   modsieve <host-binary> <plugins> <config> <output>
//!
//! `<plugins>` is a semicolon-delimited list of plugin binary paths and
//! may be empty.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use modsieve::resolve::ResolvedModule;
use modsieve::source::{ModuleSource, PathListSource};
use modsieve::utils::init_logging;
use modsieve::{initialize, EngineConfig, HostProgram, SpecifierRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "modsieve",
    about = "Resolve the set of modules activated for a host program"
)]
struct Args {
    /// Host program binary
    host: PathBuf,

    /// Semicolon-delimited plugin binary paths (may be empty)
    plugins: String,

    /// Engine configuration file
    config: PathBuf,

    /// Report output path
    output: PathBuf,
}

#[derive(Serialize)]
struct Report<'a> {
    modules: &'a [ResolvedModule],
    source_failures: Vec<String>,
    resolution_failures: Vec<String>,
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let started = Instant::now();

    let config = EngineConfig::from_file(&args.config)?;
    let host = HostProgram::new(&args.host);
    let specifiers = SpecifierRegistry::new();

    let plugin_paths: Vec<PathBuf> = args
        .plugins
        .split(';')
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect();

    info!("Performing module resolution for {:?}", args.host);
    for path in &plugin_paths {
        info!("Using plugin from {:?}", path);
    }

    let mut extra_sources: Vec<Box<dyn ModuleSource>> = Vec::new();
    if !plugin_paths.is_empty() {
        extra_sources.push(Box::new(PathListSource::new(plugin_paths)));
    }

    let set = initialize(host, &config, &specifiers, extra_sources)?;

    let report = Report {
        modules: set.modules(),
        source_failures: set.source_failures().iter().map(|f| f.to_string()).collect(),
        resolution_failures: set
            .resolution_failures()
            .iter()
            .map(|f| f.to_string())
            .collect(),
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write report to {:?}", args.output))?;

    info!(
        "Resolved {} modules ({} source failures, {} resolution failures)",
        set.len(),
        set.source_failures().len(),
        set.resolution_failures().len()
    );
    info!("Time elapsed {:?}", started.elapsed());

    Ok(())
}

fn main() {
    init_logging(None);

    if let Err(error) = run() {
        eprintln!("Error performing module resolution");
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}
