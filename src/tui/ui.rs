//! Stateless rendering of the board, status line and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timeline_tictactoe::{Player, Position, Square};
use tracing::debug;

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_PANEL_WIDTH: u16 = 29;

/// Screen regions of the last frame that respond to mouse clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Cell rectangles in row-major order.
    pub cells: [Rect; 9],
    /// The reverse-order control.
    pub reverse_button: Rect,
    /// Inner area of the move list (one row per entry).
    pub list_inner: Rect,
    /// Index of the first entry shown in the list.
    pub list_offset: usize,
}

impl HitMap {
    /// Board cell under a screen position.
    pub fn cell_at(&self, at: ScreenPosition) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| rect.contains(at))
            .and_then(Position::from_index)
    }

    /// Display row of the move list under a screen position.
    pub fn list_row_at(&self, at: ScreenPosition) -> Option<usize> {
        self.list_inner
            .contains(at)
            .then(|| self.list_offset + usize::from(at.y - self.list_inner.y))
    }
}

/// Renders the whole screen and records the clickable regions in `app`.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(14),   // Board and moves
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(30)])
        .split(chunks[1]);

    let cells = draw_board(frame, body[0], app);
    let (reverse_button, list_inner) = draw_moves(frame, body[1], app);

    let help = Paragraph::new(
        "1-9: Play | ←↑↓→: Move | Enter: Select | Tab: Switch panel | r: Reverse | n: New | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    let list_offset = app.moves_mut().state_mut().offset();
    app.set_hit_map(HitMap {
        cells,
        reverse_button,
        list_inner,
        list_offset,
    });
}

/// Rectangles of the nine cells of a grid whose top-left corner is `grid`'s.
///
/// Cells falling outside `grid` are clipped.
pub fn cell_rects(grid: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        Rect::new(
            grid.x + pos.col() as u16 * CELL_WIDTH,
            grid.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    })
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let view = app.game().board_view();
    debug!(squares = ?view.board().squares(), "Rendering board");

    let block = Block::default().borders(Borders::ALL).title(board_title(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Min(0), // Grid
        ])
        .split(inner);

    let status_style = if view.status().is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status_text())
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[0]);

    let grid_area = rows[2];
    let width = (CELL_WIDTH * 3).min(grid_area.width);
    let height = (CELL_HEIGHT * 3).min(grid_area.height);
    let grid = Rect::new(
        grid_area.x + (grid_area.width - width) / 2,
        grid_area.y,
        width,
        height,
    );

    let cells = cell_rects(grid);
    let show_cursor = app.focus() == Focus::Board;
    for pos in Position::ALL {
        let cell = cells[pos.to_index()];
        if cell.is_empty() {
            continue;
        }
        let square = view.board().get(pos);
        let highlighted = view.is_highlighted(pos);
        let cursor = show_cursor && pos == app.cursor();
        draw_cell(frame, cell, pos, square, highlighted, cursor);
    }
    cells
}

fn board_title(app: &App) -> String {
    format!("Move {}", app.game().current_move())
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    pos: Position,
    square: Square,
    highlighted: bool,
    cursor: bool,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border_style = if cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(if highlighted {
            Style::default().bg(Color::Green)
        } else {
            Style::default()
        });

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &mut App) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let order = app.moves().order();
    let reverse = Paragraph::new(format!("⇅ Reverse order ({})", order.label()))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reverse, chunks[0]);

    let items: Vec<ListItem> = app
        .moves()
        .entries(app.game())
        .into_iter()
        .map(|entry| {
            let style = if entry.actionable {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(Span::styled(entry.description, style)))
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let block = Block::default().borders(Borders::ALL).title("Moves");
    let list_inner = block.inner(chunks[1]);
    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol(if focused { "> " } else { "  " });

    frame.render_stateful_widget(list, chunks[1], app.moves_mut().state_mut());
    (chunks[0], list_inner)
}
