//! Screen coordination
//!
//! Routes key events to the session according to the current phase and
//! owns the state the session does not: the level-select cursor and the
//! quit flag.

use crate::app::session::{GameSession, Phase};
use crate::game::word_bank::Level;

/// Top-level coordinator between the event loop and the session.
pub struct Coordinator {
    pub session: GameSession,
    /// Cursor position on the level-select screen
    pub menu_selected: usize,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            menu_selected: 0,
            should_quit: false,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The level currently under the menu cursor
    pub fn selected_level(&self) -> Level {
        Level::all()[self.menu_selected]
    }

    /// Up arrow: menu navigation at level select
    pub fn on_up(&mut self) {
        if self.session.phase() == Phase::LevelSelect && self.menu_selected > 0 {
            self.menu_selected -= 1;
        }
    }

    /// Down arrow: menu navigation at level select, skip while playing
    pub fn on_down(&mut self) {
        match self.session.phase() {
            Phase::LevelSelect => {
                if self.menu_selected < Level::all().len() - 1 {
                    self.menu_selected += 1;
                }
            }
            Phase::Playing => self.session.skip(),
            Phase::Summary => {}
        }
    }

    /// Enter: start a round, submit an answer, or play again
    pub fn on_enter(&mut self) {
        match self.session.phase() {
            Phase::LevelSelect => self.session.start(self.selected_level()),
            Phase::Playing => self.session.submit(),
            Phase::Summary => self.session.reset(),
        }
    }

    /// Tab: reveal a hint letter while playing
    pub fn on_tab(&mut self) {
        if self.session.phase() == Phase::Playing {
            self.session.reveal_hint();
        }
    }

    /// Esc: quit from the menus, abandon the round while playing
    pub fn on_escape(&mut self) {
        match self.session.phase() {
            Phase::LevelSelect | Phase::Summary => self.quit(),
            Phase::Playing => self.session.reset(),
        }
    }

    /// Typed letter while playing
    pub fn on_char(&mut self, c: char) {
        if self.session.phase() == Phase::Playing {
            self.session.on_char(c);
        }
    }

    /// Backspace while playing
    pub fn on_backspace(&mut self) {
        if self.session.phase() == Phase::Playing {
            self.session.on_backspace();
        }
    }
}
