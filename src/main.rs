use clap::Parser;
use folio::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Lina's interactive terminal portfolio")]
struct Args {
    /// Model used by the chat assistant
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}; continuing with defaults");
        config::FolioConfig::default()
    });
    let resolved = config::resolve(&file_config, args.model.as_deref());

    log::info!("Folio starting up with model: {}", resolved.model_name);

    folio::tui::run(resolved)
}
