//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position as ScreenPosition;
use timeline_tictactoe::{Game, MoveOrder, Position};
use tracing::{debug, info, instrument, warn};

use super::input::{self, KeyCommand};
use super::move_list_view::MoveListView;
use super::ui::HitMap;

/// Panel receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move history list.
    Moves,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Main application state.
///
/// The game controller is the only owner of game state; the move list view
/// and cursor are presentation state.
#[derive(Debug)]
pub struct App {
    game: Game,
    moves: MoveListView,
    cursor: Position,
    focus: Focus,
    hit_map: HitMap,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(order: MoveOrder) -> Self {
        Self {
            game: Game::new(),
            moves: MoveListView::new(order),
            cursor: Position::Center,
            focus: Focus::Board,
            hit_map: HitMap::default(),
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the move list view state.
    pub fn moves(&self) -> &MoveListView {
        &self.moves
    }

    /// Mutable move list view state, for rendering.
    pub fn moves_mut(&mut self) -> &mut MoveListView {
        &mut self.moves
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Clickable regions of the last frame.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Records where the last frame put clickable regions.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(command) = input::command_for(key) else {
            return AppAction::Continue;
        };
        debug!(?command, focus = ?self.focus, "Key command");

        match command {
            KeyCommand::Quit => return AppAction::Quit,
            KeyCommand::SwitchFocus => self.focus = self.focus.toggle(),
            KeyCommand::ToggleOrder => self.toggle_order(),
            KeyCommand::NewGame => {
                let old_len = self.history_len();
                self.game.restart();
                self.moves.history_changed(old_len, self.history_len());
            }
            KeyCommand::Click(pos) => {
                self.cursor = pos;
                self.click_cell(pos);
            }
            KeyCommand::Navigate(code) => self.navigate(code),
            KeyCommand::Activate => match self.focus {
                Focus::Board => self.click_cell(self.cursor),
                Focus::Moves => {
                    if let Some(row) = self.moves.selected() {
                        self.activate_row(row);
                    }
                }
            },
        }
        AppAction::Continue
    }

    /// Handles a mouse event using the regions from the last frame.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppAction::Continue;
        }
        let at = ScreenPosition::new(mouse.column, mouse.row);

        if let Some(pos) = self.hit_map.cell_at(at) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.click_cell(pos);
        } else if self.hit_map.reverse_button.contains(at) {
            self.toggle_order();
        } else if let Some(row) = self.hit_map.list_row_at(at) {
            let len = self.history_len();
            if row < len {
                self.focus = Focus::Moves;
                self.moves.select(row, len);
                self.activate_row(row);
            }
        }
        AppAction::Continue
    }

    fn history_len(&self) -> usize {
        self.game.history().len()
    }

    fn click_cell(&mut self, pos: Position) {
        let old_len = self.history_len();
        if self.game.click(pos) {
            info!(
                position = %pos,
                current_move = self.game.current_move(),
                status = %self.game.status(),
                "Move played"
            );
            self.moves.history_changed(old_len, self.history_len());
        }
    }

    fn toggle_order(&mut self) {
        self.moves.toggle_order(self.history_len());
    }

    fn activate_row(&mut self, row: usize) {
        let Some(mv) = self.moves.jump_target(&self.game, row) else {
            debug!(row, "Row is the viewed move");
            return;
        };
        if let Err(e) = self.game.jump_to(mv) {
            warn!(error = %e, "Jump failed");
        }
    }

    fn navigate(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = input::move_cursor(self.cursor, code),
            Focus::Moves => {
                let len = self.history_len();
                match code {
                    KeyCode::Up => self.moves.select_previous(len),
                    KeyCode::Down => self.moves.select_next(len),
                    KeyCode::Home => self.moves.select(0, len),
                    KeyCode::End => self.moves.select(len.saturating_sub(1), len),
                    _ => {}
                }
            }
        }
    }
}
