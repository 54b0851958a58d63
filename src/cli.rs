//! Command-line overrides for the compiled-in configuration.

use std::path::PathBuf;

use clap::Parser;
use cupfinals_config::AppConfig;

/// cupfinals CLI.
#[derive(Parser, Debug, Default)]
#[command(name = "cupfinals")]
#[command(about = "Scrape World Cup finals, confirm each in the browser, append to Google Sheets")]
#[command(version)]
pub(crate) struct Cli {
    /// Number of table rows to attempt, starting at the first
    #[arg(long)]
    pub rows: Option<u32>,

    /// Run Chrome headless (only applies when this process launches it)
    #[arg(long)]
    pub headless: bool,

    /// Chrome remote debugging port
    #[arg(long)]
    pub debug_port: Option<u16>,

    /// Directory holding google.sheets.properties.json and credentials.json
    #[arg(long)]
    pub resources: Option<PathBuf>,
}

impl Cli {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(rows) = self.rows {
            config.scrape.rows = rows;
        }
        if self.headless {
            config.browser.headless = true;
        }
        if let Some(port) = self.debug_port {
            config.browser.debug_port = port;
        }
        if let Some(dir) = &self.resources {
            config.resources.dir = dir.clone();
        }
    }
}
