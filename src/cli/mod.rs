//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MirrorError, MirrorResult};
use crate::mirror::config::{MirrorConfig, DEFAULT_DEST_ROOT, DEFAULT_SOURCE_ROOT};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "xlsmirror")]
#[command(about = "Mirror a spreadsheet directory tree into CSV files")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Source root directory holding spreadsheet files
    #[arg(default_value = DEFAULT_SOURCE_ROOT)]
    pub source: PathBuf,

    /// Destination root directory for converted CSV files
    #[arg(default_value = DEFAULT_DEST_ROOT)]
    pub dest: PathBuf,

    /// Spreadsheet extensions to convert (comma separated, default: xls,xlsx)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Reconvert files whose destination already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Continue mirroring remaining files when one conversion fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Output run statistics after the mirror pass
    #[arg(long)]
    pub stats: bool,

    /// Write the run report as JSON to the given path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub mirror_config: MirrorConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> MirrorResult<Self> {
        let mirror_config = Self::create_mirror_config(&args)?;

        Ok(Self {
            args,
            mirror_config,
        })
    }

    /// Create mirror configuration from CLI arguments
    fn create_mirror_config(args: &Args) -> MirrorResult<MirrorConfig> {
        let mut config = MirrorConfig::new(args.source.clone(), args.dest.clone());

        if let Some(extensions) = &args.extensions {
            config.source_extensions = normalize_extensions(extensions);
        }
        config.overwrite = args.overwrite;
        config.continue_on_error = args.continue_on_error;
        config.quiet = args.quiet;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// Lowercase the configured extensions and strip any leading dot so that
/// `--extensions .XLS,xlsx` matches files the same way the defaults do.
fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if quiet {
            return;
        }
        if Self::should_use_color() {
            println!("{} {}", console::style("✓").green(), message);
        } else {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Get the terminal size
    pub fn get_terminal_size() -> (u16, u16) {
        terminal_size::terminal_size()
            .map(|(width, height)| (width.0, height.0))
            .unwrap_or((80, 24))
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &MirrorError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error {
        MirrorError::Configuration { .. } => {
            eprintln!("\nTip: pass the source and destination roots explicitly, e.g. 'xlsmirror xls_file csv_file'");
        }
        MirrorError::Convert(_) => {
            eprintln!("\nTip: use --continue-on-error to keep mirroring past a bad workbook");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'xlsmirror --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, MirrorError>;
