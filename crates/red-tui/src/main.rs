use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use red_tui::app::{run_tui, App, CrosstermEventSource};
use red_tui::config::AppConfig;
use red_tui::dashboard::Dashboard;
use red_tui::logging::init_logging;

/// Terminal dashboard for fixed renewable energy and weather series.
#[derive(Parser, Debug)]
#[command(name = "red-tui", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for rolling JSON log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Force the ASCII glyph set.
    #[arg(long)]
    ascii: bool,

    /// Print the dashboard once and exit (no alternate screen).
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", AppConfig::default().to_toml()?);
        return Ok(());
    }

    let config = AppConfig::load(args.config.as_deref())?;

    // Theme is resolved once, before the first chart renders.
    if args.ascii || config.theme.mode.eq_ignore_ascii_case("ascii") {
        std::env::set_var("RED_THEME", "ascii");
    } else if config.theme.mode.eq_ignore_ascii_case("unicode") {
        std::env::set_var("RED_THEME", "unicode");
    }

    let log_dir = args
        .log_dir
        .or_else(|| config.logging.log_dir.as_ref().map(PathBuf::from));

    if args.headless {
        init_logging(&config.logging.level, log_dir.as_deref(), true)?;
        print!("{}", Dashboard::render());
        return Ok(());
    }

    // The alternate screen owns stdout, so console logging stays off.
    init_logging(&config.logging.level, log_dir.as_deref(), false)?;
    tracing::info!("starting interactive dashboard");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app =
        App::new().with_refresh_interval(Duration::from_millis(config.ui.refresh_interval_ms));
    let result = run_tui(&mut terminal, &mut CrosstermEventSource, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
