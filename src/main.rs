//! Emitab - a terminal-based emissions data table.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use emitab::app::{App, Theme};
use emitab::data::ColumnKey;
use emitab::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "emitab")]
#[command(about = "A terminal-based emissions data table", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Start with the light color theme
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Emitab");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let theme = if args.light {
        Theme::GruvboxLight
    } else {
        Theme::GruvboxDark
    };
    let app = App::new(theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Emitab exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Form edit mode - handle separately
                if app.form.is_editing() {
                    match key.code {
                        KeyCode::Enter | KeyCode::Esc => {
                            app.form.blur();
                            app.status = "Ready".to_string();
                        }
                        KeyCode::Tab => app.form.focus_next(),
                        KeyCode::BackTab => app.form.focus_prev(),
                        KeyCode::Backspace => app.form.backspace(),
                        KeyCode::Char(c) => app.form.input(c),
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Navigation
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.cursor_up();
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.cursor_down();
                    },

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.cursor_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.cursor_last();
                    },

                    // Filter form
                    (KeyModifiers::NONE, KeyCode::Tab)
                    | (KeyModifiers::NONE, KeyCode::Char('/')) => {
                        app.form.start_editing();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.reset_filters();
                    },

                    // Sorting: number keys stand in for header clicks
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
                        let idx = c as usize - '1' as usize;
                        app.toggle_sort(ColumnKey::ALL[idx]);
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_visible();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, j/k=nav, Tab=edit filters, 1-5=sort column, r=reset, y=copy rows, T=theme".to_string();
                    },

                    _ => {
                        pending_g = false;
                    },
                }
            }
        }
    }
}
