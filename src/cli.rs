//! The terminal front end.

pub mod args;
mod repl;

pub use repl::{handle_line, load_history, run, save_history, Reply};

/// Installs the global logger. RUST_LOG overrides the default level.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
