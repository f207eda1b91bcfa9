// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod stats;
pub mod ui;
