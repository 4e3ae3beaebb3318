use clap::Parser;
use folio::ThemeArg;
use folio::core::config::{load_config, resolve};
use folio::core::prefs::{FsPrefStore, MemoryPrefStore, PrefStore, load_dark_mode};
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Chat-style developer portfolio for the terminal")]
struct Args {
    /// Color theme for this run; omit to use the saved preference
    #[arg(short, long, value_enum)]
    theme: Option<ThemeArg>,
    /// Milliseconds the canned replies pretend to think
    #[arg(long)]
    reply_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Config unavailable, falling back to defaults: {}", e);
            Default::default()
        }
    };
    let config = resolve(&config, args.reply_delay_ms);

    // Preferences survive restarts; fall back to a session-only store when
    // the home directory is unusable.
    let prefs: Box<dyn PrefStore> = match FsPrefStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Preference store unavailable ({}), keeping prefs in memory", e);
            Box::new(MemoryPrefStore::default())
        }
    };

    // The CLI flag wins for this run only; the saved preference is untouched.
    let dark_mode = match args.theme {
        Some(ThemeArg::Dark) => true,
        Some(ThemeArg::Light) => false,
        None => load_dark_mode(prefs.as_ref()),
    };

    log::info!(
        "Folio starting up (persona: {}, dark_mode: {})",
        config.persona,
        dark_mode
    );

    tui::run(config, prefs, dark_mode)
}
