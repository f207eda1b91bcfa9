use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::Config;
use crate::game::{Game, GameState, Submission, Tick};
use crate::runtime::{AppEvent, GameTimer};

/// Longest input line accepted while typing
const MAX_INPUT_CHARS: usize = 64;

/// Which selector on the menu reacts to ←/→
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuFocus {
    #[default]
    Language,
    Difficulty,
}

impl MenuFocus {
    fn toggle(self) -> Self {
        match self {
            MenuFocus::Language => MenuFocus::Difficulty,
            MenuFocus::Difficulty => MenuFocus::Language,
        }
    }
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Presentation state around a `Game`: the input line, menu focus and the countdown timer.
#[derive(Debug)]
pub struct App {
    pub game: Game,
    pub input: String,
    pub menu_focus: MenuFocus,
    events: Sender<AppEvent>,
    tick_interval: Duration,
    timer: Option<GameTimer>,
    timer_generation: u64,
}

impl App {
    pub fn new(game: Game, events: Sender<AppEvent>, tick_interval: Duration) -> Self {
        Self {
            game,
            input: String::new(),
            menu_focus: MenuFocus::default(),
            events,
            tick_interval,
            timer: None,
            timer_generation: 0,
        }
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Menu selections worth remembering across runs
    pub fn config(&self) -> Config {
        Config::from(&self.game)
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Tick(generation) => {
                self.on_tick(generation);
                Control::Continue
            }
            AppEvent::Resize => Control::Continue,
        }
    }

    fn on_tick(&mut self, generation: u64) {
        if self.timer.as_ref().map(GameTimer::generation) != Some(generation) {
            debug!(generation, "ignoring tick from a cancelled timer");
            return;
        }

        if self.game.tick() == Tick::Finished {
            self.input.clear();
        }
        self.sync_timer();
    }

    fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        if self.game.is_confirming_exit() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.game.confirm_exit();
                    self.input.clear();
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.game.cancel_exit(),
                _ => {}
            }
            self.sync_timer();
            return Control::Continue;
        }

        let control = match self.game.state() {
            GameState::Idle => self.on_menu_key(key),
            GameState::Playing => {
                self.on_typing_key(key);
                Control::Continue
            }
            GameState::Finished => self.on_results_key(key),
        };
        self.sync_timer();
        control
    }

    fn on_menu_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.menu_focus = self.menu_focus.toggle();
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match self.menu_focus {
                    MenuFocus::Language => {
                        let current = self.game.language();
                        let lang = if forward { current.next() } else { current.prev() };
                        self.game.select_language(lang);
                    }
                    MenuFocus::Difficulty => {
                        let current = self.game.difficulty();
                        let difficulty = if forward { current.next() } else { current.prev() };
                        self.game.select_difficulty(difficulty);
                    }
                }
            }
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
        Control::Continue
    }

    fn on_typing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.game.request_exit(),
            KeyCode::Enter => {
                if self.game.submit_word(&self.input) != Submission::Ignored {
                    self.input.clear();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.input.chars().count() < MAX_INPUT_CHARS {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn on_results_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') => return Control::Quit,
            // Enter submits while typing, so a late press must not skip the summary
            KeyCode::Char('r') => self.start_game(),
            KeyCode::Char('m') | KeyCode::Esc => self.game.request_exit(),
            _ => {}
        }
        Control::Continue
    }

    fn start_game(&mut self) {
        // the old timer must be gone before the new one starts
        self.timer = None;
        self.input.clear();
        self.game.start_game();

        self.timer_generation += 1;
        self.timer = Some(GameTimer::start(
            self.events.clone(),
            self.tick_interval,
            self.timer_generation,
        ));
    }

    /// The timer only lives while a game is being played
    fn sync_timer(&mut self) {
        if self.game.state() != GameState::Playing && self.timer.take().is_some() {
            debug!(generation = self.timer_generation, "countdown cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::language::{Language, WordBank};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::mpsc::{self, Receiver};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn create_test_app() -> (App, Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let game = Game::new(
            WordBank::load().unwrap(),
            Language::English,
            Difficulty::Hard,
            StdRng::seed_from_u64(1),
        );
        // long interval: tests drive ticks by hand
        (App::new(game, tx, Duration::from_secs(3600)), rx)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    fn current_tick(app: &App) -> AppEvent {
        AppEvent::Tick(app.timer.as_ref().unwrap().generation())
    }

    #[test]
    fn test_menu_navigation_changes_selection() {
        let (mut app, _rx) = create_test_app();

        app.handle_event(key(KeyCode::Right));
        assert_eq!(app.game.language(), Language::Spanish);
        app.handle_event(key(KeyCode::Left));
        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.game.language(), Language::German);

        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.menu_focus, MenuFocus::Difficulty);
        app.handle_event(key(KeyCode::Right));
        assert_eq!(app.game.difficulty(), Difficulty::Easy);
        assert_eq!(app.game.language(), Language::German);
    }

    #[test]
    fn test_enter_starts_game_and_timer() {
        let (mut app, _rx) = create_test_app();
        assert!(!app.is_timer_running());

        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.game.state(), GameState::Playing);
        assert!(app.is_timer_running());
        assert_eq!(app.game.time_remaining(), 30);
    }

    #[test]
    fn test_typing_and_submitting_a_word() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));

        let word = app.game.current_word().to_string();
        type_str(&mut app, &word);
        assert_eq!(app.input, word);

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.game.correct_words(), 1);
        assert_eq!(app.game.words_typed(), 1);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_enter_on_blank_input_is_noop() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        let word = app.game.current_word().to_string();

        type_str(&mut app, "  ");
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.game.words_typed(), 0);
        assert_eq!(app.game.current_word(), word);
        assert_eq!(app.input, "  ");
    }

    #[test]
    fn test_backspace_edits_input() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));

        type_str(&mut app, "abc");
        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.input, "ab");
    }

    #[test]
    fn test_input_length_is_bounded() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));

        type_str(&mut app, &"x".repeat(MAX_INPUT_CHARS + 10));
        assert_eq!(app.input.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_ticks_run_game_to_results_and_cancel_timer() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        type_str(&mut app, "partial");

        for _ in 0..30 {
            let tick = current_tick(&app);
            app.handle_event(tick);
        }

        assert_eq!(app.game.state(), GameState::Finished);
        assert!(!app.is_timer_running());
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        let stale = current_tick(&app);

        // leave and start a fresh game
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('y')));
        app.handle_event(key(KeyCode::Enter));

        app.handle_event(stale);
        assert_eq!(app.game.time_remaining(), 30);

        let tick = current_tick(&app);
        app.handle_event(tick);
        assert_eq!(app.game.time_remaining(), 29);
    }

    #[test]
    fn test_exit_confirmed_returns_to_menu() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        type_str(&mut app, "abc");

        app.handle_event(key(KeyCode::Esc));
        assert!(app.game.is_confirming_exit());
        // typing is blocked while the dialog is open
        type_str(&mut app, "z");
        assert_eq!(app.input, "abc");

        app.handle_event(key(KeyCode::Char('y')));
        assert_eq!(app.game.state(), GameState::Idle);
        assert!(!app.is_timer_running());
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_exit_cancelled_keeps_playing() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));

        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('n')));

        assert_eq!(app.game.state(), GameState::Playing);
        assert!(!app.game.is_confirming_exit());
        assert!(app.is_timer_running());
    }

    #[test]
    fn test_results_replay_and_menu() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        for _ in 0..30 {
            let tick = current_tick(&app);
            app.handle_event(tick);
        }
        assert_eq!(app.game.state(), GameState::Finished);

        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(app.game.state(), GameState::Playing);
        assert!(app.is_timer_running());

        for _ in 0..30 {
            let tick = current_tick(&app);
            app.handle_event(tick);
        }
        app.handle_event(key(KeyCode::Char('m')));
        assert!(app.game.is_confirming_exit());
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.game.state(), GameState::Idle);
    }

    #[test]
    fn test_enter_after_expiry_keeps_results() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        type_str(&mut app, "abc");
        for _ in 0..30 {
            let tick = current_tick(&app);
            app.handle_event(tick);
        }
        assert_eq!(app.game.state(), GameState::Finished);

        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.game.state(), GameState::Finished);
        assert_eq!(app.game.time_remaining(), 0);
        assert!(!app.is_timer_running());
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _rx) = create_test_app();
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Control::Quit);

        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Enter));
        // q is just a letter while typing
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Control::Continue);
        let ctrl_c = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.handle_event(ctrl_c), Control::Quit);
    }

    #[test]
    fn test_timer_delivers_ticks_to_channel() {
        let (tx, rx) = mpsc::channel();
        let game = Game::new(
            WordBank::load().unwrap(),
            Language::English,
            Difficulty::Hard,
            StdRng::seed_from_u64(1),
        );
        let mut app = App::new(game, tx, Duration::from_millis(5));
        app.handle_event(key(KeyCode::Enter));

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        app.handle_event(event);
        assert_eq!(app.game.time_remaining(), 29);
    }

    #[test]
    fn test_config_reflects_selection() {
        let (mut app, _rx) = create_test_app();
        app.handle_event(key(KeyCode::Right));

        let cfg = app.config();
        assert_eq!(cfg.language, Language::Spanish);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
    }
}
