use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use triptych::core::config;
use triptych::tui;

#[derive(Parser)]
#[command(name = "triptych", about = "Three-pane terminal dashboard")]
struct Args {
    /// File to load into the content pane (overrides config `content_file`)
    #[arg(short, long)]
    content: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - the TUI owns the terminal, so logs go to
    // triptych.log in the current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("triptych.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            // Surfaced before the alternate screen takes over; a broken
            // config degrades to defaults rather than blocking startup.
            log::warn!("{e}, using defaults");
            eprintln!("triptych: {e}, using defaults");
            config::TriptychConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.content.as_deref());

    log::info!(
        "Triptych starting up ({} choices, {} content lines)",
        resolved.choices.len(),
        resolved.content.len()
    );

    tui::run(resolved)
}
