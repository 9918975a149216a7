//! Command-line surface over the version model

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::version::{Version, compare_versions, upgrade_range_with_limit};

#[derive(Debug, Parser)]
#[command(name = "oobmigration")]
#[command(version, about = "Version ordering and upgrade ranges for out-of-band migrations")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two versions (before, equal or after)
    Compare { left: Version, right: Version },
    /// Print the version following the given one
    Next { current: Version },
    /// Print the version preceding the given one
    Previous { current: Version },
    /// Print every version from one to another, inclusive
    Range { from: Version, to: Version },
}

impl Cli {
    /// Load the config file named by `--config`, or defaults.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Ok(Config::load(path)?),
            None => Ok(Config::default()),
        }
    }

    /// Log the outcome of [`Cli::load_config`]. Call once a subscriber is installed.
    pub fn report_config(&self, loaded: anyhow::Result<Config>) -> anyhow::Result<Config> {
        match loaded {
            Ok(config) => {
                if let Some(path) = &self.config {
                    info!("Loaded config from {:?}", path);
                }
                Ok(config)
            }
            Err(e) => {
                error!("{:#}", e);
                Err(e)
            }
        }
    }

    /// Run the command and render its output.
    pub fn execute(&self, config: &Config) -> anyhow::Result<String> {
        match &self.command {
            Command::Compare { left, right } => {
                let order = compare_versions(*left, *right);
                self.render(&order, || order.to_string())
            }
            Command::Next { current } => {
                let Some(next) = current.checked_next() else {
                    bail!("{} has no next version", current);
                };
                self.render(&next, || next.to_string())
            }
            Command::Previous { current } => {
                let Some(previous) = current.previous() else {
                    bail!("{} has no previous version", current);
                };
                self.render(&previous, || previous.to_string())
            }
            Command::Range { from, to } => {
                let versions = upgrade_range_with_limit(*from, *to, config.range.max_len)
                    .with_context(|| format!("Cannot upgrade from {} to {}", from, to))?;
                self.render(&versions, || {
                    versions
                        .iter()
                        .map(Version::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                })
            }
        }
    }

    fn render<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> anyhow::Result<String> {
        if self.json {
            Ok(serde_json::to_string(value)?)
        } else {
            Ok(text())
        }
    }
}
