use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::Level;

const DEFAULT_HTML_PATH: &str = "../term.html";
const DEFAULT_DEPS_DIR: &str = "./node_modules";

#[derive(Debug, Parser)]
#[command(
    name = "term-inject",
    version,
    about = "Embed the xterm terminal assets into the term HTML shell between its marker comments."
)]
pub struct Cli {
    /// HTML file containing the marker comments. Overwritten in place.
    #[arg(long = "html", env = "TERM_INJECT_HTML", default_value = DEFAULT_HTML_PATH)]
    pub html_path: PathBuf,

    /// Directory the xterm packages are installed under.
    #[arg(long, env = "TERM_INJECT_DEPS_DIR", default_value = DEFAULT_DEPS_DIR)]
    pub deps_dir: PathBuf,

    /// Only log warnings and errors.
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub html_path: PathBuf,
    pub deps_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        Config::from_args(Cli::parse())
    }

    pub fn from_args(cli: Cli) -> Result<Self> {
        if cli.html_path.as_os_str().is_empty() {
            return Err(anyhow!("html path must not be empty"));
        }

        if cli.deps_dir.as_os_str().is_empty() {
            return Err(anyhow!("dependency directory must not be empty"));
        }

        Ok(Self {
            html_path: cli.html_path,
            deps_dir: cli.deps_dir,
            log_level: if cli.quiet { Level::WARN } else { Level::INFO },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            deps_dir: PathBuf::from(DEFAULT_DEPS_DIR),
            log_level: Level::INFO,
        }
    }
}
