use ratatui::Frame;

use crate::{app::App, game::GameState};

use super::{menu, playing, results};

/// A UI Screen boundary: one per game state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Language and difficulty selection
pub struct MenuScreen;

impl Screen for MenuScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        menu::render(app, f);
    }
}

/// Live stats, current word and input line
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        playing::render(app, f);
    }
}

/// Game over summary
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        results::render(app, f);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: GameState) -> Box<dyn Screen> {
    match state {
        GameState::Idle => Box::new(MenuScreen),
        GameState::Playing => Box::new(PlayingScreen),
        GameState::Finished => Box::new(ResultsScreen),
    }
}
