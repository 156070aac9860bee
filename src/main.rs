use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use chawen::core::config;
use chawen::core::lang::Lang;
use chawen::tui;

#[derive(Parser)]
#[command(name = "chawen", about = "Terminal client for the herbal-tea QA service")]
struct Args {
    /// Backend base URL (overrides config file and CHAWEN_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Chrome language
    #[arg(short, long, value_enum)]
    lang: Option<Lang>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to chawen.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("chawen.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A broken config file falls back to defaults; the warning lands in the log.
    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config unusable ({}), falling back to defaults", e);
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.lang);

    log::info!(
        "Chawen starting up (backend {}, lang {:?})",
        resolved.base_url,
        resolved.lang
    );

    tui::run(resolved)
}
