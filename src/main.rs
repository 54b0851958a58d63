//! cupfinals
//!
//! Scrapes the FIFA World Cup finals table, asks for confirmation of each
//! final in the browser, and appends the approved ones to Google Sheets.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cupfinals_browser::{BrowserManagerConfig, ChromeDriver};
use cupfinals_config::{AppConfig, ConfigLoader, ConfigValidator, SheetTarget, cupfinals_home};
use cupfinals_core::{ConfirmationBridge, FlowState, Orchestrator};
use cupfinals_protocols::PageDriver;
use cupfinals_sheets::{ServiceAccountAuth, SheetWriter, SheetsClient};

mod cli;

use cli::Cli;

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = cupfinals_home().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cupfinals")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Flushes the file writer on exit.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Destination sheet, or an unresolved one when the properties can't be read.
fn load_sheet_target(config: &AppConfig) -> SheetTarget {
    let path = config.resources.sheet_properties_path();
    match ConfigLoader::load_sheet_target(&path) {
        Ok(target) => {
            if !target.is_resolved() {
                error!(
                    "{} does not name a usable SPREADSHEET_ID; appending will fail",
                    path.display()
                );
            }
            target
        }
        Err(e) => {
            error!("Could not load sheet properties from {}: {}", path.display(), e);
            SheetTarget::unresolved()
        }
    }
}

fn browser_config(config: &AppConfig) -> BrowserManagerConfig {
    BrowserManagerConfig {
        debug_port: config.browser.debug_port,
        profile_dir: config.browser.profile_dir(),
        headless: config.browser.headless,
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();
    let mut config = AppConfig::default();
    cli.apply(&mut config);

    let validation = ConfigValidator::validate(&config)?;
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        for err in &validation.errors {
            error!("Config {}: {}", err.path, err.message);
        }
        return Err("invalid configuration".into());
    }

    let target = load_sheet_target(&config);
    info!(
        "Destination: spreadsheet {}, sheet '{}'",
        target.spreadsheet_id.as_deref().unwrap_or("<unset>"),
        target.sheet_name
    );

    let credentials = config.resources.credentials_path();
    if let Err(e) = ConfigLoader::require_file(&credentials) {
        warn!("Service account key not found ({}); appending will fail", e);
    }
    let client = SheetsClient::new(Arc::new(ServiceAccountAuth::from_file(credentials)))?;
    let writer = SheetWriter::new(client, target);

    let driver = Arc::new(
        ChromeDriver::new(browser_config(&config))
            .with_element_poll(config.scrape.element_poll_interval()),
    );
    if let Err(e) = driver.start().await {
        error!("Failed to start browser session: {}", e);
        if let Err(e) = driver.quit().await {
            warn!("Error while closing browser session: {}", e);
        }
        return Err(e.into());
    }

    let bridge = ConfirmationBridge::new(driver.clone(), &config.confirm);
    let mut orchestrator = Orchestrator::new(driver, bridge, writer, &config.scrape);
    let report = orchestrator.run().await;

    info!(
        "Run finished in state {}: {} processed, {} offered, {} confirmed",
        report.state, report.rows_processed, report.offered, report.confirmed
    );

    match (report.state, report.write_succeeded) {
        (FlowState::Aborted, _) => Err("flow aborted".into()),
        (_, Some(false)) => Err("appending to Google Sheets failed".into()),
        _ => Ok(()),
    }
}
