//! # Keystroke-driven calculator engine
//!
//! The engine behind a basic and a scientific calculator. Both take input
//! one key at a time through an [`editor::EditorState`], keep a display
//! buffer, and write a `"{expression} = {result}"` line to a
//! [`history::HistorySink`] for every completed calculation.
//!
//! * The basic calculator holds one pending operator and applies operators
//!   strictly left to right: `5 + 3 + 2 =` collapses `5 + 3` to `8` when the
//!   second `+` is pressed.
//! * The scientific calculator accumulates a whole expression and evaluates
//!   it with operator precedence, functions and implicit multiplication when
//!   equals is pressed. See [`calculator`] for the grammar.
//!
//! Expressions are tokenized and parsed; nothing typed is ever run as code.

pub mod app;
pub mod calculator;
pub mod cli;
pub mod display;
pub mod editor;
pub mod errors;
pub mod history;
pub mod lexer;
pub mod session;

#[cfg(test)]
mod test {
    /// Helper function to compare floating-point results that may differ in
    /// the last few bits
    pub fn assert_close(got: f64, want: f64) {
        assert!(
            (got - want).abs() <= 1e-12 * want.abs().max(1.0),
            "got {}, want {}",
            got,
            want
        );
    }
}
