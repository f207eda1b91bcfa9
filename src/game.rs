use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::difficulty::Difficulty;
use crate::language::{Language, WordBank};
use crate::stats;

/// Base points of a word typed in one second
const BASE_POINTS: f64 = 50.0;
/// Floor on the points of any correct word, before the multiplier
const MIN_WORD_POINTS: f64 = 10.0;
/// Shortest time a word can take, so an instant submission cannot divide by zero
const MIN_WORD_SECS: f64 = 0.001;
/// How long a "+N points" award stays on screen
const AWARD_DISPLAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Playing,
    Finished,
}

/// What happened to a submitted word
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Submission {
    /// Blank input, or no game in progress
    Ignored,
    Correct { points: f64 },
    Incorrect,
}

/// What a timer tick did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Ignored,
    Running,
    Finished,
}

/// Points for a correct word: `max(10, floor(50 / secs)) * multiplier`
pub fn word_score(seconds_taken: f64, difficulty: Difficulty) -> f64 {
    let secs = seconds_taken.max(MIN_WORD_SECS);
    let base = (BASE_POINTS / secs).floor().max(MIN_WORD_POINTS);
    base * difficulty.settings().word_multiplier
}

/// The typing game controller: menu selection, the running session and its results.
///
/// All mutation goes through user actions (`select_*`, `start_game`,
/// `submit_word`, the exit dialog) or one-second ticks. The `*_at` variants
/// take the current instant explicitly; the plain ones use `Instant::now()`.
#[derive(Debug)]
pub struct Game {
    bank: WordBank,
    rng: StdRng,
    state: GameState,
    language: Language,
    difficulty: Difficulty,
    current_word: String,
    score: f64,
    time_remaining: u32,
    words_typed: u32,
    correct_words: u32,
    started_at: Option<Instant>,
    word_started_at: Option<Instant>,
    finished_at: Option<Instant>,
    last_award: Option<(f64, Instant)>,
    confirming_exit: bool,
}

impl Game {
    pub fn new(bank: WordBank, language: Language, difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            bank,
            rng,
            state: GameState::Idle,
            language,
            difficulty,
            current_word: String::new(),
            score: 0.0,
            time_remaining: 0,
            words_typed: 0,
            correct_words: 0,
            started_at: None,
            word_started_at: None,
            finished_at: None,
            last_award: None,
            confirming_exit: false,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn words_typed(&self) -> u32 {
        self.words_typed
    }

    pub fn correct_words(&self) -> u32 {
        self.correct_words
    }

    pub fn is_confirming_exit(&self) -> bool {
        self.confirming_exit
    }

    pub fn last_award(&self) -> Option<f64> {
        self.last_award.map(|(points, _)| points)
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn select_language(&mut self, language: Language) {
        if self.state == GameState::Idle {
            self.language = language;
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.state == GameState::Idle {
            self.difficulty = difficulty;
        }
    }

    pub fn start_game(&mut self) {
        self.start_game_at(Instant::now());
    }

    pub fn start_game_at(&mut self, now: Instant) {
        self.state = GameState::Playing;
        self.score = 0.0;
        self.words_typed = 0;
        self.correct_words = 0;
        self.time_remaining = self.difficulty.settings().time_limit_secs;
        self.current_word = self.random_word();
        self.started_at = Some(now);
        self.word_started_at = Some(now);
        self.finished_at = None;
        self.last_award = None;
        self.confirming_exit = false;

        info!(
            language = %self.language,
            difficulty = %self.difficulty,
            time_limit = self.time_remaining,
            "game started"
        );
    }

    pub fn submit_word(&mut self, input: &str) -> Submission {
        self.submit_word_at(input, Instant::now())
    }

    pub fn submit_word_at(&mut self, input: &str, now: Instant) -> Submission {
        let typed = input.trim();
        if self.state != GameState::Playing || typed.is_empty() {
            return Submission::Ignored;
        }

        self.words_typed += 1;

        let outcome = if typed.to_lowercase() == self.current_word.to_lowercase() {
            let secs = self
                .word_started_at
                .map(|t| now.saturating_duration_since(t).as_secs_f64())
                .unwrap_or_default();
            let points = word_score(secs, self.difficulty);

            self.score += points;
            self.correct_words += 1;
            self.last_award = Some((points, now));
            Submission::Correct { points }
        } else {
            self.last_award = None;
            Submission::Incorrect
        };

        debug!(
            word = %self.current_word,
            typed,
            ?outcome,
            "word submitted"
        );

        self.current_word = self.random_word();
        self.word_started_at = Some(now);

        outcome
    }

    pub fn tick(&mut self) -> Tick {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Tick {
        if self.state != GameState::Playing {
            return Tick::Ignored;
        }

        if matches!(self.last_award, Some((_, at)) if now.saturating_duration_since(at) >= AWARD_DISPLAY)
        {
            self.last_award = None;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return Tick::Running;
        }

        self.state = GameState::Finished;
        self.finished_at = Some(now);
        self.last_award = None;

        info!(
            score = self.score.floor(),
            correct = self.correct_words,
            attempted = self.words_typed,
            wpm = self.wpm(),
            "game finished"
        );

        Tick::Finished
    }

    /// Opens the "return to main menu" confirmation
    pub fn request_exit(&mut self) {
        if self.state != GameState::Idle {
            self.confirming_exit = true;
        }
    }

    /// Leaves the session for the menu, discarding its progress
    pub fn confirm_exit(&mut self) {
        if !self.confirming_exit {
            return;
        }

        info!(
            from = ?self.state,
            score = self.score.floor(),
            "returned to main menu"
        );

        self.confirming_exit = false;
        self.state = GameState::Idle;
        self.score = 0.0;
        self.words_typed = 0;
        self.correct_words = 0;
        self.time_remaining = 0;
        self.current_word.clear();
        self.started_at = None;
        self.word_started_at = None;
        self.finished_at = None;
        self.last_award = None;
    }

    pub fn cancel_exit(&mut self) {
        self.confirming_exit = false;
    }

    pub fn accuracy(&self) -> f64 {
        stats::accuracy(self.correct_words, self.words_typed)
    }

    /// Only meaningful once the game has finished; 0 before that
    pub fn wpm(&self) -> f64 {
        if self.state != GameState::Finished {
            return 0.0;
        }
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => {
                stats::words_per_minute(self.correct_words, end.saturating_duration_since(start))
            }
            _ => 0.0,
        }
    }

    /// Remaining share of the time limit, in [0, 1]
    pub fn time_fraction(&self) -> f64 {
        let limit = self.difficulty.settings().time_limit_secs;
        if limit == 0 {
            return 0.0;
        }
        (self.time_remaining as f64 / limit as f64).clamp(0.0, 1.0)
    }

    fn random_word(&mut self) -> String {
        self.bank
            .pick(self.language, self.difficulty.word_tier(), &mut self.rng)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}
