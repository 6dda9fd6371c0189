use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use swapi_browser::ColorMode;
use swapi_browser::core::config::{self, BrowserConfig, CliOverrides};
use swapi_browser::tui;

#[derive(Parser)]
#[command(name = "swapi-browser", about = "Browse Star Wars characters from SWAPI")]
struct Args {
    /// API base URL (default: https://swapi.dev/api)
    #[arg(long)]
    base_url: Option<String>,

    /// Color scheme
    #[arg(short, long, value_enum)]
    theme: Option<ColorMode>,

    /// Search term for the first page
    #[arg(short, long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (BrowserConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            theme: args.theme,
            search: args.search,
        },
    );

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("swapi-browser.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }
    log::info!("SWAPI browser starting up: {:?}", resolved);

    tui::run(resolved)
}
