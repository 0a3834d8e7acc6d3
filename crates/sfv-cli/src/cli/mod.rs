//! CLI for sfvcheck.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sfv_core::config::{self, SfvConfig};
use std::path::PathBuf;

use commands::{run_check, run_completions, run_crc, run_create, run_man, run_verify};

/// Top-level CLI for sfvcheck.
#[derive(Debug, Parser)]
#[command(name = "sfv")]
#[command(about = "Verify files against CRC32 checksums in SFV manifests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Checksum files and compare them with a manifest given among the paths.
    Verify {
        /// Data files, optionally including one `.sfv` manifest.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Checksum up to N files concurrently (default from config).
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Verify every file listed in a manifest, relative to its directory.
    Check {
        /// Path to the `.sfv` manifest.
        manifest: PathBuf,
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Checksum files and write a new SFV manifest.
    Create {
        /// Files to include, in output order.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Manifest file to write.
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Print the CRC32 of a single file.
    Crc {
        /// Path to the file.
        path: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) on stdout.
    Man,
}

fn load_config() -> Result<SfvConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    /// Returns `Ok(false)` when verification found mismatches or missing files.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();

        let ok = match cli.command {
            CliCommand::Verify { paths, jobs, json } => {
                let cfg = load_config()?;
                run_verify(&cfg, &paths, cfg.verify_options(jobs), json)?
            }
            CliCommand::Check {
                manifest,
                jobs,
                json,
            } => {
                let cfg = load_config()?;
                run_check(&manifest, cfg.verify_options(jobs), json)?
            }
            CliCommand::Create {
                paths,
                output,
                jobs,
            } => {
                let cfg = load_config()?;
                run_create(&paths, &output, cfg.verify_options(jobs))?;
                true
            }
            CliCommand::Crc { path } => {
                run_crc(&path)?;
                true
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                true
            }
            CliCommand::Man => {
                run_man()?;
                true
            }
        };

        Ok(ok)
    }
}

#[cfg(test)]
mod tests;
