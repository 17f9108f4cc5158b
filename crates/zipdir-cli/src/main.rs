//! zipdir-cli - Command-line interface for the zipdir archiver
//!
//! This crate provides the command-line wrapper around zipdir-core:
//! - Packing a file or directory tree into a ZIP archive
//! - Bundling an explicit ordered list of files into a flat archive
//!
//! The archiving logic itself lives entirely in zipdir-core; this binary
//! only parses arguments, sets up logging, and maps errors to exit codes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zipdir_core::{utils, Error};

/// zipdir - a streaming directory-to-zip archiver
#[derive(Parser)]
#[command(name = "zipdir")]
#[command(author, version, about = "A streaming directory-to-zip archiver", long_about = None)]
struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a file or directory into a zip archive
    Pack {
        /// Input file or directory
        input: PathBuf,

        /// Output archive file
        #[arg(short, long)]
        output: PathBuf,

        /// Drop the directory structure: every file lands at the archive
        /// root under its base name, empty directories are skipped
        #[arg(long)]
        flatten: bool,
    },

    /// Pack an explicit list of files, in order, without directory prefixes
    Bundle {
        /// Files to pack, in archive order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output archive file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let result = run();

    match result {
        Ok(_) => process::exit(0),
        Err(e) => {
            error!("Error: {}", e);

            let exit_code = map_error_to_exit_code(&e);
            process::exit(exit_code);
        }
    }
}

fn map_error_to_exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::SourceNotFound(_) | Error::InvalidPath(_)) => 2,
        Some(Error::Cancelled) => 130,
        _ => 1,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Pack {
            input,
            output,
            flatten,
        } => {
            info!(
                "Packing {:?} ({} bytes) into {:?}",
                input,
                utils::total_size(&input),
                output
            );

            let sink = create_output(&output)?;
            zipdir_core::pack_dir(&input, sink, !flatten)?;

            info!("Pack complete: {:?}", output);
        }

        Commands::Bundle { files, output } => {
            info!("Bundling {} files into {:?}", files.len(), output);

            let sink = create_output(&output)?;
            zipdir_core::pack_files(&files, sink)?;

            info!("Bundle complete: {:?}", output);
        }
    }

    Ok(())
}

/// Create the output archive file, creating parent directories as needed
fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}
