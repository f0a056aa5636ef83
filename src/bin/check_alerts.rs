// Small dev utility: print the current staleness alerts as JSON.
//
// Usage:
//   cargo run --bin check_alerts -- [db_path]
//
// With no argument the database path is resolved from the environment
// (APIARY_DB_PATH) or the platform data directory.

use apiary_monitor::{logging, ApiaryApi, MonitorConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    tracing::info!(version = apiary_monitor::VERSION, "apiary monitor alert check");

    let config = match std::env::args().nth(1) {
        Some(db_path) => MonitorConfig::new(db_path),
        None => MonitorConfig::from_env(),
    };

    let api = ApiaryApi::new(config);
    let alerts = api.check_alerts();

    println!("{}", serde_json::to_string_pretty(&alerts)?);
    Ok(())
}
