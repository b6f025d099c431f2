use crate::calculator::{evaluate, format_number};
use crate::editor::{EditorState, Input};
use crate::history::{HistoryRecord, HistorySink};
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

mod basic;

pub use basic::BasicAccumulator;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
/// A calculator mode with its own session
pub enum Mode {
    /// One pending operator, applied left to right as operators are entered
    Basic,
    /// A whole expression, evaluated with precedence when equals is pressed
    Scientific,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Scientific => "scientific",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Mode, String> {
        match s.to_lowercase().as_str() {
            "basic" | "normal" => Ok(Mode::Basic),
            "scientific" | "sci" => Ok(Mode::Scientific),
            _ => Err(format!("unknown mode '{}'", s)),
        }
    }
}

/// How equals is handled for a session
#[derive(Debug, Clone)]
enum Variant {
    Basic(BasicAccumulator),
    Scientific,
}

#[derive(Debug, Clone)]
/// One calculator's editing and evaluation state. Every input is a single
/// complete transition, and evaluation errors never escape: they are shown
/// as a marker and the next operand starts clean.
pub struct CalculatorSession {
    editor: EditorState,
    variant: Variant,
}

impl CalculatorSession {
    /// Returns a session in its initial state for the given mode
    pub fn new(mode: Mode) -> CalculatorSession {
        CalculatorSession {
            editor: EditorState::new(),
            variant: match mode {
                Mode::Basic => Variant::Basic(BasicAccumulator::new()),
                Mode::Scientific => Variant::Scientific,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self.variant {
            Variant::Basic(_) => Mode::Basic,
            Variant::Scientific => Mode::Scientific,
        }
    }

    /// Returns the text to display
    pub fn buffer(&self) -> &str {
        self.editor.buffer()
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Returns the pending operation of a basic session
    pub fn accumulator(&self) -> Option<&BasicAccumulator> {
        match &self.variant {
            Variant::Basic(acc) => Some(acc),
            Variant::Scientific => None,
        }
    }

    /// Applies one input, recording completed calculations to the history
    /// sink, and returns the text to display
    pub fn apply(&mut self, input: Input, history: &mut dyn HistorySink) -> &str {
        let next = match &mut self.variant {
            Variant::Basic(acc) => acc.apply(&self.editor, &input, history),
            Variant::Scientific => match input {
                Input::Equals if self.editor.is_error() => self.editor.clone(),
                Input::Equals => evaluate_buffer(&self.editor, history),
                _ => self.editor.apply(&input),
            },
        };

        debug!("{} session: {} -> {:?}", self.mode(), input, next.buffer());
        self.editor = next;

        self.editor.buffer()
    }
}

/// Evaluates a scientific buffer. A result seeds the next expression; a
/// failure shows its marker and is not recorded.
fn evaluate_buffer(editor: &EditorState, history: &mut dyn HistorySink) -> EditorState {
    let expression = editor.buffer();

    match evaluate(expression) {
        Ok(value) => {
            let result = format_number(value);
            history.record(HistoryRecord::calculation(expression, &result));
            EditorState::showing(&result)
        }
        Err(e) => {
            warn!("scientific: {}: {}", expression, e);
            EditorState::showing_error(e.marker())
        }
    }
}
