//! Command-line interface for sitecorpus.
//!
//! With no subcommand the corpus is extracted and written to stdout as a
//! single JSON document. Diagnostics go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{load_config, ResolvedConfig};
use crate::extract::Extractor;

/// sitecorpus - Extract site content into a search corpus
#[derive(Parser, Debug)]
#[command(name = "sitecorpus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content root (site checkout)
    #[arg(long, env = "SITECORPUS_ROOT", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Config file (defaults to <root>/.sitecorpus/config.yaml when present)
    #[arg(long, env = "SITECORPUS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON payload
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract pages and blog posts (default)
    Extract,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = load_config(&self.root, self.config.as_deref())?;

        match self.command.unwrap_or(Commands::Extract) {
            Commands::Extract => extract(config, self.pretty).await,
            Commands::Config => show_config(&config),
        }
    }
}

/// Extract the corpus and write it to stdout.
///
/// Nothing is written unless extraction and serialization both succeed.
async fn extract(config: ResolvedConfig, pretty: bool) -> Result<()> {
    let corpus = Extractor::new(config)
        .run()
        .await
        .context("Failed to extract content")?;

    let json = if pretty {
        corpus.to_json_pretty()
    } else {
        corpus.to_json()
    }
    .context("Failed to serialize corpus")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write corpus to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Show the resolved configuration
fn show_config(config: &ResolvedConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to render configuration")?;

    match &config.config_file {
        Some(path) => println!("# config file: {}", path.display()),
        None => println!("# config file: none (defaults)"),
    }
    print!("{}", yaml);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_extracts_from_cwd() {
        let cli = Cli::try_parse_from(["sitecorpus"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.pretty);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_root_flag() {
        let cli = Cli::try_parse_from(["sitecorpus", "config", "--root", "/srv/site"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config)));
        assert_eq!(cli.root, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_pretty_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["sitecorpus", "extract", "--pretty"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Extract)));
        assert!(cli.pretty);
    }
}
