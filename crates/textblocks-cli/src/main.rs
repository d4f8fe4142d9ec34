use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use textblocks_config::Config;

mod app;
mod ui;

use app::App;

/// Split plain text into numbered titles and paragraphs and edit them
#[derive(Debug, Parser)]
#[command(name = "textblocks", version, about)]
struct Args {
    /// Text file to open on start-up
    file: Option<PathBuf>,

    /// Use this config file instead of ~/.config/textblocks/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Log to a file beside the config file, since the terminal is busy
/// drawing the UI. Falls back to stderr if the file can't be opened.
fn init_logging(config_path: &Path) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let log_path = Config::log_path_for(config_path);
    let log_file = log_path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| fs::OpenOptions::new().create(true).append(true).open(&log_path));
    if let Ok(file) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    init_logging(&config_path);

    log::info!("textblocks starting up!");

    let config = match Config::load_or_create_at(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config load failed: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let mut app = App::new(config);
    if let Some(file) = &args.file {
        let path = app.config.resolve_path(&file.to_string_lossy());
        app.open(&path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Paste(text) => app.handle_paste(&text),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
