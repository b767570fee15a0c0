//! Terminal UI for noughts.

mod app;
mod input;
mod scheduler;
mod surface;
mod ui;

pub use app::{App, Flow};
pub use input::{KeyAction, map_key, move_cursor};
pub use scheduler::TokioScheduler;
pub use surface::TerminalSurface;
pub use ui::{ScreenLayout, hit_test, layout};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::ReplyTicket;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

/// Runs the terminal game until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,noughts=debug,noughts_core=debug")
            }),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(mode = %config.mode(), delay_ms = config.computer_delay_ms(), "Starting noughts");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, leave_terminal)?;

    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, reply_tx);

    let res = run_app(&mut terminal, &mut app, &mut reply_rx).await;

    leave_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting noughts");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Runs `setup`, calling `restore` before returning if it fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Terminal restore failed");
        }
    })
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    replies: &mut mpsc::UnboundedReceiver<ReplyTicket>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(ticket) = replies.try_recv() {
            app.handle_reply(ticket);
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if app.handle_key(key.code) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(ui_event) = hit_test(area, mouse.column, mouse.row) {
                        app.dispatch(ui_event);
                    }
                }
                _ => {}
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
