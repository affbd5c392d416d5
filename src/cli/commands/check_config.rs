use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::{build_sheet_appender, load_settings};

pub fn check_config(config_path: Option<&Path>) -> Result<()> {
    let settings = load_settings(config_path)?;
    // Fails on an unusable spreadsheet base url
    let sheets = build_sheet_appender(&settings.sheets)?;

    info!("Configuration is valid");
    println!("{:#?}", settings.redacted());
    println!(
        "spreadsheet backend: {}",
        if sheets.is_configured() { "configured" } else { "log-only" }
    );
    Ok(())
}
