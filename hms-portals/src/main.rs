use std::io;

use anyhow::Context;
use hms_core::config::HmsConfig;
use hms_core::logging::init_logging;
use hms_core::store::RecordStore;
use hms_portals::{Console, Session};

fn main() -> anyhow::Result<()> {
    let config = HmsConfig::from_env().context("Failed to load configuration")?;

    // The console still works without a log file
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }

    let store = RecordStore::from_config(&config.store);
    let console = Console::new(io::stdin().lock(), io::stdout().lock())
        .with_clear_screen(config.console.clear_screen);

    Session::new(console, store)
        .run()
        .context("Console session failed")?;
    Ok(())
}
