mod animation;
mod app;
mod config;
mod content;
mod error;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animation::Entrance;
use app::{App, Popup};
use config::{AppConfig, RevealTrigger};
use ui::layout::ScreenLayout;

/// Poll interval while a card transition is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval otherwise
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "devpath")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "Programming in practice, from concept to code, in your terminal")]
struct Args {
    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Pointer event that reveals step details
    #[arg(short, long, value_enum)]
    reveal: Option<RevealTrigger>,

    /// Disable card easing
    #[arg(long)]
    no_animation: bool,

    /// Use plain Unicode glyphs instead of Nerd Font icons
    #[arg(long)]
    ascii_glyphs: bool,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,

    /// Print all infographic content as JSON and exit
    #[arg(short, long)]
    dump: bool,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    if args.dump {
        return dump_content();
    }

    let config_path = match &args.config {
        Some(path) => Ok(path.clone()),
        None => AppConfig::config_path(),
    };
    let loaded = match &config_path {
        Ok(path) => AppConfig::load_from(path),
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            AppConfig::default()
        }
    };
    let config = apply_args(loaded, &args);

    if args.write_config {
        let path = config_path?;
        config.save_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    run_tui(&config)
}

/// The TUI owns stdout, so logs go to a file in the cache directory
fn init_logging() {
    let log_file = dirs::cache_dir()
        .map(|dir| dir.join("devpath"))
        .and_then(|dir| {
            std::fs::create_dir_all(&dir).ok()?;
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("devpath.log"))
                .ok()
        });

    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::from_default_env());

    match log_file {
        Some(file) => registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(std::sync::Mutex::new(file)))
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn apply_args(mut config: AppConfig, args: &Args) -> AppConfig {
    if args.light {
        config.dark_mode = false;
    }
    if let Some(reveal) = args.reveal {
        config.reveal = reveal;
    }
    if args.no_animation {
        config.entrance = Entrance::None;
    }
    if args.ascii_glyphs {
        config.nerd_font = false;
    }
    config
}

fn dump_content() -> Result<()> {
    let json = serde_json::to_string_pretty(&content::document())?;
    println!("{}", json);
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    tracing::info!("Starting devpath");

    enable_raw_mode()?;
    let result = run_in_alternate_screen(config);

    // Restore terminal, including when setup failed part way
    let restored = disable_raw_mode()
        .and_then(|_| leave_screen(&mut io::stdout()))
        .context("Failed to restore terminal");

    tracing::info!("Exiting devpath");
    result.and(restored)
}

fn run_in_alternate_screen(config: &AppConfig) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    run_app(&mut terminal, &mut app)
}

/// Undo `EnterAlternateScreen` and `EnableMouseCapture`, and show the cursor
fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app)).context("Failed to draw frame")?;

        let interval = if app.is_animating() { FRAME_INTERVAL } else { IDLE_INTERVAL };
        if event::poll(interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    _ => app.handle_key(key),
                },
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let layout = ScreenLayout::compute(Rect::new(0, 0, size.width, size.height), app);
                    app.handle_mouse(mouse, &layout);
                }
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from(["devpath", "--light", "--reveal", "click", "--no-animation", "--ascii-glyphs"]);
        let config = apply_args(AppConfig::default(), &args);
        assert!(!config.dark_mode);
        assert_eq!(config.reveal, RevealTrigger::Click);
        assert_eq!(config.entrance, Entrance::None);
        assert!(!config.nerd_font);
    }

    #[test]
    fn test_leave_screen_sequence() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\x1b[?1049l"));
        assert!(out.contains("\x1b[?1000l"));
        assert!(out.ends_with("\x1b[?25h"));
    }

    #[test]
    fn test_no_args_keep_config() {
        let args = Args::parse_from(["devpath"]);
        let config = AppConfig { reveal: RevealTrigger::Click, ..AppConfig::default() };
        assert_eq!(apply_args(config.clone(), &args), config);
    }
}
