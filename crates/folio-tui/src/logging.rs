// ABOUTME: Tracing setup for the folio binary
// ABOUTME: Subcommands log to stderr, the TUI logs to a file in the state dir

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Filter for the folio crates at `level`, everything else at warn.
/// An explicit RUST_LOG wins outright.
fn folio_filter(level: &str) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!("warn,folio_tui={level},folio_core={level}")),
    }
}

/// Stderr logging for the non-interactive subcommands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(folio_filter("info"))
        .with_target(false)
        .init();
}

/// The TUI owns the terminal, so it appends to `folio.log` under the user's
/// state directory instead. Logging is best-effort: if setup fails the app
/// runs without it. Returns the log path when active.
pub fn init_tui() -> Option<PathBuf> {
    let dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)?
        .join("folio");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: not logging, could not create {}: {e}", dir.display());
        return None;
    }
    let path = dir.join("folio.log");

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: not logging, could not open {}: {e}", path.display());
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(folio_filter("debug"))
        .with_ansi(false)
        .with_target(false)
        .init();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folio_filter_builds_for_both_levels() {
        let _ = folio_filter("info");
        let _ = folio_filter("debug");
    }

    #[test]
    fn exports_both_entry_points() {
        let _ = init_stderr as fn();
        let _ = init_tui as fn() -> Option<PathBuf>;
    }
}
