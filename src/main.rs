// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Duration;

mod cli;
mod conversion;
mod error;
mod mirror;

use crate::cli::{Args, CliConfig, CliUtils};
use crate::mirror::discover::find_spreadsheet_files;
use crate::mirror::{MirrorReport, TreeMirror};

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        eprintln!("Verbose mode enabled");
    }

    // Create mirror configuration
    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            cli::handle_error(&err);
            return Err(err.into());
        }
    };

    run_mirror(&config)
}

fn run_mirror(config: &CliConfig) -> Result<()> {
    // Report what the pass is about to cover
    let files = find_spreadsheet_files(
        &config.mirror_config.source_root,
        &config.mirror_config.source_extensions,
        true,
    )?;

    if !config.is_quiet() {
        println!("Found {} spreadsheet files", files.len());
    }

    let report = match TreeMirror::new(config.mirror_config.clone()).run() {
        Ok(report) => report,
        Err(err) => {
            cli::handle_error(&err);
            return Err(err.into());
        }
    };

    if config.is_verbose() {
        CliUtils::show_success(&report.summary(), config.is_quiet());
    }

    // Output statistics if requested
    if config.want_stats() {
        output_statistics(&report, config.is_quiet());
    }

    if let Some(path) = &config.args.report {
        write_report(path, &report)?;
        CliUtils::show_success(
            &format!("Report written to {}", path.display()),
            config.is_quiet(),
        );
    }

    Ok(())
}

fn output_statistics(report: &MirrorReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nMirror Statistics:");
    println!("Converted: {} files", report.converted);
    println!("Skipped: {} files", report.skipped);
    println!("Ignored: {} files", report.ignored);
    println!("Failed: {} files", report.failed);
    println!("Directories created: {}", report.directories_created);
    println!("Rows written: {}", report.rows_written);
    println!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(report.elapsed_ms))
    );
}

fn write_report(path: &Path, report: &MirrorReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
