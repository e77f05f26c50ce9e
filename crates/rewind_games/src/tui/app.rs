//! Interactive state: the game plus what the player is pointing at.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameController, MoveResult, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board selection.
    Board,
    /// Arrows move through the move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// TUI application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameController,
    selected: Position,
    focus: Focus,
    list_selected: usize,
    message: Option<String>,
}

impl App {
    /// Fresh game with the center cell selected.
    pub fn new() -> Self {
        Self {
            game: GameController::new(),
            selected: Position::Center,
            focus: Focus::Board,
            list_selected: 0,
            message: None,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Selected board cell.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn list_selected(&self) -> usize {
        self.list_selected
    }

    /// Feedback from the last ignored action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, cursor = self.game.cursor()))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.selected = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('p') => {
                if let Some(step) = self.game.cursor().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char('n') => self.jump(self.game.cursor() + 1),
            _ => match self.focus {
                Focus::Board => self.board_key(key),
                Focus::Moves => self.moves_key(key),
            },
        }
        Control::Continue
    }

    fn board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.selected),
            _ => self.selected = move_cursor(self.selected, key),
        }
    }

    fn moves_key(&mut self, key: KeyCode) {
        let last = self.game.history().last_step();
        match key {
            KeyCode::Up => self.list_selected = self.list_selected.saturating_sub(1),
            KeyCode::Down => self.list_selected = (self.list_selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.list_selected),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.list_selected = self.game.cursor();
    }

    fn restart(&mut self) {
        info!("Restarting game");
        *self = Self {
            focus: self.focus,
            ..Self::new()
        };
    }

    fn play(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            MoveResult::Accepted(mov) => {
                debug!(%mov, "Move played");
                self.list_selected = self.game.cursor();
                self.message = None;
            }
            MoveResult::Ignored(rejection) => {
                self.message = Some(rejection.to_string());
            }
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => {
                self.list_selected = step;
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.message = Some(e.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
