//! Vaccination registry.
//!
//! Reads one command per line from stdin and writes one line per result to
//! stdout. Pass `pt` as the first argument for Portuguese messages.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use vaxreg::exit_codes;
use vaxreg::io::config::{DEFAULT_CONFIG_PATH, RegistryConfig, load_config, write_config};
use vaxreg::io::session::run_session;
use vaxreg::logging;
use vaxreg::messages::Locale;

#[derive(Parser)]
#[command(
    name = "vaxreg",
    version,
    about = "Vaccine batch and inoculation registry"
)]
struct Cli {
    /// Message language: `pt` for Portuguese, anything else for English.
    language: Option<String>,

    /// Path to the TOML config file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the default config to `--config` and exit without reading commands.
    #[arg(long)]
    write_default_config: bool,

    /// Overwrite an existing config file.
    #[arg(short, long, requires = "write_default_config")]
    force: bool,
}

impl Cli {
    fn locale(&self, configured: Locale) -> Locale {
        match &self.language {
            Some(arg) => Locale::from_arg(arg),
            None => configured,
        }
    }
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    if cli.write_default_config {
        cmd_write_default_config(&cli.config, cli.force)?;
        return Ok(exit_codes::OK);
    }

    let cfg = load_config(&cli.config).context("load config")?;
    let locale = cli.locale(cfg.locale);
    let mut system = cfg.build_system()?;
    debug!(config = %cli.config.display(), ?locale, "starting registry");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = run_session(stdin.lock(), stdout.lock(), &mut system, locale)?;
    Ok(end.exit_code())
}

/// Returns whether the file was written. An existing file is kept unless `force`.
fn cmd_write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        debug!(config = %path.display(), "config exists; leaving it unchanged");
        return Ok(false);
    }
    write_config(path, &RegistryConfig::default())
        .with_context(|| format!("write default config {}", path.display()))?;
    Ok(true)
}
