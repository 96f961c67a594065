//! `license-gen`: generate license files and check dependency license compatibility.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. `generate` / `list` / `info` read the license catalog ([`license::registry`])
//!    and render templates ([`generator`]).
//! 4. `check` / `stats` scan the project ([`analyzer`]), then run the
//!    compatibility engine ([`license::compat`]) or aggregate counts ([`license::stats`]).
//! 5. Render text ([`report`]) or JSON.
//! 6. Exit `0`, or `1` on errors, incompatible licenses, or findings the config
//!    marks as fatal.

mod analyzer;
mod cli;
mod config;
mod error;
mod generator;
mod license;
mod models;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use analyzer::node::NodeAnalyzer;
use analyzer::Analyzer;
use cli::{Cli, Command};
use config::{load_config, Config};
use license::compat::{check_compatibility, info, resolve_project};
use license::registry::Registry;
use license::stats::aggregate_stats;
use models::ProjectScan;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // RUST_LOG, when set, replaces the level picked by --verbose
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Execute the parsed command. `Ok(false)` means the command ran but the
/// project failed the check.
fn run(cli: Cli) -> Result<bool> {
    let registry = Registry::builtin();

    match cli.command {
        Command::Generate {
            license,
            author,
            year,
            output,
        } => {
            let config = load_config(Path::new("."), cli.config.as_deref())?;
            let Some(key) = license.or(config.generate.license) else {
                bail!(
                    "no license type given; pass --type with one of: {}",
                    registry.keys().join(", ")
                );
            };
            let author = author.or(config.generate.author);
            let output = output
                .or_else(|| config.generate.output.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("LICENSE"));

            let spinner = spinner("Generating license...", cli.quiet || cli.json);
            let generated = generator::generate(
                &registry,
                &key,
                author.as_deref(),
                year.as_deref(),
                &output,
            );
            spinner.finish_and_clear();
            let generated = generated?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                println!("{} {}", "✓".green(), "License generated successfully!".green());
                if !cli.quiet {
                    println!("{}", format!("License: {}", generated.license).cyan());
                    println!("{}", format!("Path: {}", generated.path.display()).cyan());
                }
            }
            Ok(true)
        }

        Command::List => {
            let licenses = generator::list(&registry);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&licenses)?);
            } else {
                report::terminal::render_list(&licenses);
            }
            Ok(true)
        }

        Command::Info { license } => {
            let Some(details) = info(&registry, &license) else {
                bail!("License \"{}\" not found.", license);
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                report::terminal::render_info(&details);
            }
            Ok(true)
        }

        Command::Check { path } => {
            let config = load_config(&path, cli.config.as_deref())?;
            let scan = scan(&path, &config, cli.quiet || cli.json, "Checking dependencies...")?;
            let project = resolve_project(&registry, &scan.project_license)?;
            let result = check_compatibility(&registry, project.key, &scan.licenses())?;

            if cli.json {
                let report = serde_json::json!({
                    "project_license": scan.project_license,
                    "dependencies": scan.dependencies,
                    "result": result,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::terminal::render_check(
                    &registry,
                    project,
                    &scan,
                    &result,
                    cli.verbose,
                    cli.quiet,
                );
            }

            let failed = !result.valid
                || (config.check.fail_on_warnings && !result.warnings.is_empty())
                || (config.check.fail_on_unknown && !result.unknown.is_empty());
            debug!(valid = result.valid, failed, "check finished");
            Ok(!failed)
        }

        Command::Stats { path } => {
            let config = load_config(&path, cli.config.as_deref())?;
            let scan = scan(&path, &config, cli.quiet || cli.json, "Analyzing dependencies...")?;
            let stats = aggregate_stats(&scan.licenses());

            if cli.json {
                let report = serde_json::json!({
                    "project_license": scan.project_license,
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::terminal::render_stats(&scan.project_license, &stats, cli.quiet);
            }
            Ok(true)
        }
    }
}

/// Scan the project behind a spinner and drop ignored dependencies.
fn scan(path: &Path, config: &Config, hidden: bool, message: &'static str) -> Result<ProjectScan> {
    let spinner = spinner(message, hidden);
    let scanned = NodeAnalyzer::new().analyze(path);
    spinner.finish_and_clear();

    let mut scan = scanned?;
    let before = scan.dependencies.len();
    scan.dependencies.retain(|d| !config.check.is_ignored(&d.name));
    debug!(ignored = before - scan.dependencies.len(), "applied ignore list");
    Ok(scan)
}

fn spinner(message: &'static str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
