use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Route `tracing` output to an append-only file; the terminal belongs to the TUI.
///
/// Returns false (and logs nothing) when the file cannot be opened or a
/// global subscriber is already installed.
pub fn init(path: &Path, verbose: bool) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .try_init()
        .is_ok()
}
