use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use melotype::{
    app::{App, Control},
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    difficulty::Difficulty,
    game::Game,
    language::{Language, WordBank},
    logging,
    runtime::{CrosstermEventSource, EventSource, Runner, TICK_INTERVAL},
    ui,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};
use tracing::{info, warn};

/// retro typing game: race the clock, score fast words, track accuracy and wpm
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the displayed words before the countdown runs out. Faster words score more points; harder difficulties give less time, longer words and a bigger multiplier."
)]
pub struct Cli {
    /// language to pull words from (defaults to the last one played)
    #[clap(short = 'l', long, value_enum)]
    language: Option<Language>,

    /// difficulty to preselect on the menu (defaults to the last one played)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// seed the word picker for a reproducible word sequence
    #[clap(long)]
    seed: Option<u64>,

    /// write debug-level entries to the log file
    #[clap(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = AppDirs::log_path() {
        logging::init(&path, cli.verbose);
    }

    let store = FileConfigStore::new();
    let cfg = store.load();
    let bank = WordBank::load()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::new(
        bank,
        cli.language.unwrap_or(cfg.language),
        cli.difficulty.unwrap_or(cfg.difficulty),
        rng,
    );

    let runner = Runner::new(CrosstermEventSource::new(), TICK_INTERVAL);
    let mut app = App::new(game, runner.sender(), TICK_INTERVAL);
    info!(
        language = %app.game.language(),
        difficulty = %app.game.difficulty(),
        "starting"
    );

    enable_raw_mode()?;
    let result = run(&mut app, &runner);
    let restored = restore_terminal();

    if let Err(e) = store.save(&app.config()) {
        warn!(error = %e, "could not save config");
    }

    result.and(restored)
}

/// Enters the alternate screen and runs the event loop. The caller owns raw
/// mode so it is switched off whatever happens here.
fn run<E: EventSource>(app: &mut App, runner: &Runner<E>) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    start_tui(&mut terminal, app, runner)
}

/// Runs every restore step, reporting the first failure afterwards
fn restore_terminal() -> Result<(), Box<dyn Error>> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen).map_err(Into::into)
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    while let Some(event) = runner.wait() {
        if app.handle_event(event) == Control::Quit {
            break;
        }
        terminal.draw(|f| ui::draw(app, f))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use melotype::runtime::{AppEvent, TestEventSource};
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["melotype"]);

        assert_eq!(cli.language, None);
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_language() {
        let cli = Cli::parse_from(["melotype", "-l", "spanish"]);
        assert_eq!(cli.language, Some(Language::Spanish));

        let cli = Cli::parse_from(["melotype", "--language", "german"]);
        assert_eq!(cli.language, Some(Language::German));
    }

    #[test]
    fn test_cli_difficulty() {
        let cli = Cli::parse_from(["melotype", "-d", "hard"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));

        let cli = Cli::parse_from(["melotype", "--difficulty", "easy"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn test_cli_rejects_unknown_language() {
        let err = Cli::try_parse_from(["melotype", "-l", "klingon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_cli_seed_and_verbose() {
        let cli = Cli::parse_from(["melotype", "--seed", "99", "-v"]);
        assert_eq!(cli.seed, Some(99));
        assert!(cli.verbose);
    }

    #[cfg(unix)]
    #[test]
    fn test_restore_terminal_without_raw_mode_succeeds() {
        // nothing was switched on, so every restore step is a no-op
        assert!(restore_terminal().is_ok());
        assert!(restore_terminal().is_ok());
    }

    #[test]
    fn test_start_tui_runs_until_quit() {
        let runner = Runner::new(TestEventSource::new(), Duration::from_millis(10));
        let game = Game::new(
            WordBank::load().unwrap(),
            Language::French,
            Difficulty::Easy,
            StdRng::seed_from_u64(5),
        );
        let mut app = App::new(game, runner.sender(), Duration::from_secs(3600));

        let tx = runner.sender();
        let key = |code| AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        tx.send(key(KeyCode::Enter)).unwrap();
        tx.send(key(KeyCode::Char('x'))).unwrap();
        tx.send(AppEvent::Resize).unwrap();
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        start_tui(&mut terminal, &mut app, &runner).unwrap();

        assert_eq!(app.input, "x");
        assert_eq!(app.game.language(), Language::French);
    }
}
