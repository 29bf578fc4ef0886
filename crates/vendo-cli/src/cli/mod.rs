//! CLI host for the vendo vendor-file finder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vendo_core::config::ProjectConfig;
use vendo_core::finder::RemoteFileFinder;
use vendo_core::registry::DirRegistry;

use commands::{run_check, run_collect, run_fetch, run_list, run_url};

/// Top-level CLI for the vendo vendor-file finder.
#[derive(Debug, Parser)]
#[command(name = "vendo")]
#[command(about = "vendo: remote vendor-file finder for static asset pipelines", long_about = None)]
pub struct Cli {
    /// Project configuration file.
    #[arg(long, global = true, default_value = "vendo.toml", value_name = "PATH")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List every declared vendor file.
    List,

    /// Download the vendor file(s) declared for a relative path.
    Fetch {
        /// Relative static path, e.g. `js/bootstrap.min.js`.
        path: String,

        /// Download every matching declaration instead of the first.
        #[arg(long)]
        all: bool,
    },

    /// Download every declared vendor file.
    Collect,

    /// Validate the vendor declarations of all apps.
    Check,

    /// Print the static URL a tag resolves to.
    Url {
        /// Declared tag name.
        tag: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = ProjectConfig::load_or_default(&cli.config)?;
        tracing::debug!("loaded config: {:?}", cfg);
        let finder = RemoteFileFinder::new(DirRegistry::new(cfg.apps.clone()));

        match cli.command {
            CliCommand::List => run_list(&finder)?,
            CliCommand::Fetch { path, all } => run_fetch(&finder, &path, all)?,
            CliCommand::Collect => run_collect(&finder)?,
            CliCommand::Check => run_check(&finder)?,
            CliCommand::Url { tag } => run_url(&finder, &cfg.static_url, &tag)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
