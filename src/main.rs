mod app;
mod catalog;
mod filter;
mod table;
mod thumbnail;

use std::path::Path;
use std::process::ExitCode;

const CATALOG_PATH: &str = "assets/mock_asset_data.json";
const ASSET_DIR: &str = "assets/data";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    // A catalog that cannot be loaded is fatal; no window is opened.
    let records = match catalog::load(Path::new(CATALOG_PATH)) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} assets from {}", records.len(), CATALOG_PATH);

    match app::run(records, Path::new(ASSET_DIR)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI error: {e}");
            ExitCode::FAILURE
        }
    }
}
