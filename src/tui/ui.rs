//! Stateless UI rendering.
//!
//! [`layout`] is shared by drawing and mouse hit-testing so a click always
//! lands on the cell the user sees.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use noughts_core::{GameMode, Player, Position, UiEvent};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 16;
const HELP: &str =
    "1-9 / arrows+Enter: move | H: two players | C: vs computer | R: reset | Q: quit";

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Mode buttons, two-player first.
    pub modes: [Rect; 2],
    /// Reset button.
    pub reset: Rect,
    /// Board cells in index order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Computes the screen layout for a frame of size `area`.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(3),            // Controls
            Constraint::Min(CELL_HEIGHT * 3), // Board
            Constraint::Length(3),            // Status
            Constraint::Length(3),            // Help
        ])
        .split(area);

    let controls = center_rect(chunks[1], BUTTON_WIDTH * 3 + 2, 3);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(controls);

    let board = center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let mut cells = [Rect::default(); 9];
    for position in Position::ALL {
        cells[position.index()] = Rect::new(
            board.x + position.col() as u16 * CELL_WIDTH,
            board.y + position.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH.min(board.width),
            CELL_HEIGHT.min(board.height),
        )
        .intersection(board);
    }

    ScreenLayout {
        title: chunks[0],
        modes: [buttons[0], buttons[2]],
        reset: buttons[4],
        cells,
        status: chunks[3],
        help: chunks[4],
    }
}

/// Translates a mouse click at (`column`, `row`) into a presentation event.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<UiEvent> {
    let screen = layout(area);
    let inside =
        |r: Rect| column >= r.x && column < r.right() && row >= r.y && row < r.bottom();

    if let Some(position) = Position::ALL
        .into_iter()
        .find(|p| inside(screen.cells[p.index()]))
    {
        return Some(UiEvent::CellClicked(position.index()));
    }
    if inside(screen.modes[0]) {
        return Some(UiEvent::ModeSelected(GameMode::HumanVsHuman));
    }
    if inside(screen.modes[1]) {
        return Some(UiEvent::ModeSelected(GameMode::HumanVsComputer));
    }
    if inside(screen.reset) {
        return Some(UiEvent::ResetPressed);
    }
    None
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, screen.title);

    let active = app.surface().mode();
    for (area, mode) in screen
        .modes
        .into_iter()
        .zip([GameMode::HumanVsHuman, GameMode::HumanVsComputer])
    {
        draw_button(frame, area, mode.label(), active == mode);
    }
    draw_button(frame, screen.reset, "Reset", false);

    for position in Position::ALL {
        draw_cell(frame, screen.cells[position.index()], app, position);
    }

    let status = Paragraph::new(app.surface().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, screen.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, screen.help);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, active: bool) {
    let style = if active {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, position: Position) {
    let surface = app.surface();

    let (symbol, mut style) = match surface.cell(position) {
        None => (
            (position.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if surface.is_highlighted(position) {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border = if position == app.cursor() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
