use clap::Parser;
use evplan::{App, AppConfig, AppState, init_logging, load_dataset};
use evplan_core::Session;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evplan")]
#[command(about = "A terminal decision calculator: expected value, sensitivity and decision trees")]
struct Args {
    /// Path to the data directory (default: ~/.evplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// YAML dataset file loaded at start-up and used by export/import
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Probability points for the sensitivity sweep, comma separated
    #[arg(long, value_delimiter = ',')]
    points: Option<Vec<f64>>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".evplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::load_or_default(&data_dir).with_overrides(args.dataset, args.points);

    let mut session = Session::new();
    let mut startup_error = None;
    if let Some(path) = config.dataset_path.as_ref().filter(|p| p.exists()) {
        match load_dataset(path) {
            Ok(records) => session.replace(records),
            Err(e) => startup_error = Some(format!("Could not load dataset: {e}")),
        }
    }

    let mut state = AppState::new(config, session);
    if let Some(message) = startup_error {
        state.set_error(message);
    }
    let mut app = App::new(state);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
