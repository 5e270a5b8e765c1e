use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use memwatch::app::App;
use memwatch::config::{Config, ConfigError, load_config, load_config_from_path};
use memwatch::event::EventHandler;
use memwatch::logging::init_file_logging;
use memwatch::monitor::Monitor;
use memwatch::report::Report;
use memwatch::system::collector::Collector;
use memwatch::ui;

#[derive(Parser)]
#[command(
    name = "memwatch",
    about = "Terminal memory monitor with RAM/swap history and top processes"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Memory chart sampling interval in milliseconds
    #[arg(long)]
    chart_interval: Option<u64>,

    /// Process list refresh interval in milliseconds
    #[arg(long)]
    process_interval: Option<u64>,

    /// Number of samples kept for the history chart
    #[arg(long)]
    history_size: Option<usize>,

    /// Number of processes shown in the top list
    #[arg(long)]
    top: Option<usize>,

    /// Write logs to this file (filter via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Sample once, print a JSON report and exit.
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let (config, config_error) = load_config_for_cli(&cli);

    if let Some(path) = &config.general.log_file {
        init_file_logging(path)?;
    }
    if let Some(err) = &config_error {
        tracing::warn!(
            path = %err.path.display(),
            err = %err.source,
            "invalid config, using defaults"
        );
    }
    tracing::info!(
        chart_interval_ms = config.general.chart_interval_ms,
        process_interval_ms = config.general.process_interval_ms,
        history_size = config.general.history_size,
        top_processes = config.general.top_processes,
        "memwatch starting"
    );

    if cli.once {
        return run_once(&config);
    }

    // ratatui::init installs a panic hook that restores the terminal.
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &config).await;
    ratatui::restore();
    tracing::info!("memwatch stopped");

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new(
        config.general.chart_interval(),
        config.general.process_interval(),
    );

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        if app.handle_event(event) {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    events.shutdown();
    Ok(())
}

fn run_once(config: &Config) -> Result<()> {
    let mut monitor = Monitor::new(
        Collector::new(),
        config.general.history_size,
        config.general.top_processes,
    );
    let report = Report::collect(&mut monitor);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Merge CLI overrides over the file config. A parse error is handed back
/// so it can be logged once the subscriber is installed.
fn load_config_for_cli(cli: &Cli) -> (Config, Option<ConfigError>) {
    let loaded = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let mut config = loaded.config;

    if let Some(ms) = cli.chart_interval {
        config.general.chart_interval_ms = ms;
    }
    if let Some(ms) = cli.process_interval {
        config.general.process_interval_ms = ms;
    }
    if let Some(size) = cli.history_size {
        config.general.history_size = size;
    }
    if let Some(n) = cli.top {
        config.general.top_processes = n;
    }
    if let Some(ref path) = cli.log_file {
        config.general.log_file = Some(path.clone());
    }

    (config.sanitized(), loaded.error)
}
