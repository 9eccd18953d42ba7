use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use webapp_config::keys;

use crate::bootstrap::bootstrap;
use crate::resolver::{ConfigResolver, ResolverOptions};
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "webapp")]
#[command(about = "Webapp settings - resolve and inspect the environment-driven configuration", long_about = None)]
pub struct Cli {
    /// Project base directory; `.env` and `.envs/` are read from here
    #[arg(short = 'b', long, global = true, default_value = ".")]
    pub base_dir: PathBuf,

    /// Local overlay file used outside production instead of `.envs/.local/.mariadb`
    #[arg(long, global = true)]
    pub overlay: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the settings, install logging and print a summary
    Check,
    /// Print the resolved settings as JSON with secrets redacted
    Show {
        /// Print a single section, e.g. `database` or `email`
        #[arg(short = 's', long)]
        section: Option<String>,
    },
    /// List the environment variables the settings consume
    Keys {
        /// Only list required variables
        #[arg(short = 'r', long)]
        required: bool,
    },
}

impl Cli {
    fn options(&self) -> ResolverOptions {
        let options = ResolverOptions::new(&self.base_dir);
        match &self.overlay {
            Some(path) => options.with_overlay(path),
            None => options,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check => {
            let settings = bootstrap(cli.options()).context("configuration check failed")?;
            println!("{}", summary(&settings));
        }
        Commands::Show { ref section } => {
            let settings = ConfigResolver::new(cli.options())
                .resolve_from_process()
                .context("failed to resolve settings")?;
            println!("{}", render(&settings, section.as_deref())?);
        }
        Commands::Keys { required } => {
            for line in key_lines(required) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// One line per consumed environment variable: name, required or
/// optional, description.
pub fn key_lines(required_only: bool) -> Vec<String> {
    keys::ALL
        .iter()
        .filter(|key| !required_only || key.required)
        .map(|key| {
            let marker = if key.required { "required" } else { "optional" };
            format!("{:<22} {:<9} {}", key.name, marker, key.description)
        })
        .collect()
}

pub fn summary(settings: &Settings) -> String {
    let db = &settings.database;
    // the URL carries credentials, so only its use is reported
    let database = match db.url() {
        Some(_) => format!("url(conn_max_age={})", db.conn_max_age.unwrap_or(0)),
        None => format!("{}@{}:{}/{}", db.user, db.host, db.port, db.name),
    };

    format!(
        "mode={} debug={} hosts={} origins={} database={} log={}",
        settings.mode,
        settings.security.debug,
        settings.security.allowed_hosts.join(","),
        settings.cors.allowed_origins.len(),
        database,
        settings.logging.file.display(),
    )
}

/// Pretty JSON for the whole record or one top-level section.
pub fn render(settings: &Settings, section: Option<&str>) -> Result<String> {
    let value = serde_json::to_value(settings)?;
    let value = match section {
        Some(name) => value
            .get(name)
            .cloned()
            .with_context(|| format!("unknown section `{name}`"))?,
        None => value,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
