mod app;
mod audio;
mod cli;
mod config;
mod controller;
mod error;
mod logging;
mod models;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use app::App;
use audio::{AudioOutput, RodioOutput};
use config::Settings;
use controller::PlaybackController;
use models::Catalog;

/// Event poll interval; bounds how late the deferred deselect can fire
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let cli = cli::parse_args()?;
    let settings = Settings::resolve(&cli).context("failed to load settings")?;
    let catalog = Catalog::builtin();

    if cli.list_only {
        print!("{}", ui::catalog_listing(&catalog, &settings.sounds_dir));
        return Ok(());
    }

    if let Some(path) = settings.log_path() {
        if let Err(e) = logging::init_logging(&path, &settings.log_filter) {
            eprintln!("Warning: {:#}, continuing without logs", e);
        }
    }
    info!(
        sounds_dir = %settings.sounds_dir.display(),
        volume = settings.volume,
        groups = catalog.group_count(),
        entries = catalog.len(),
        "starting soundboard"
    );

    let audio = RodioOutput::new(&settings.sounds_dir, settings.volume);
    info!(device = audio.has_device(), "audio output ready");
    let mut app = App::new(PlaybackController::new(catalog, audio));

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    let restored = restore_terminal(&mut stdout());

    app.stop();
    info!("soundboard exited");

    result.context("terminal error")?;
    restored.context("failed to restore terminal")
}

/// Undo the terminal setup. Every step runs; the first failure is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let mouse = out.execute(DisableMouseCapture).map(|_| ());
    let raw = disable_raw_mode();
    let screen = out.execute(LeaveAlternateScreen).map(|_| ());
    mouse.and(raw).and(screen)
}

fn run<A: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<A>,
) -> io::Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app, Instant::now()))?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
