use crate::lexer::Operator;
use log::debug;

mod input;

pub use input::Input;

/// The text shown for an empty buffer
const EMPTY_BUFFER: &str = "0";

#[derive(Debug, PartialEq, Eq, Clone)]
/// The in-progress text of an operand or expression. The buffer is never
/// empty, never holds two binary operators in a row and never holds two
/// decimal points in one number.
pub struct EditorState {
    buffer: String,
    awaiting_fresh_operand: bool,
    error: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Returns the initial state: a buffer of "0" with nothing pending
    pub fn new() -> EditorState {
        EditorState {
            buffer: String::from(EMPTY_BUFFER),
            awaiting_fresh_operand: false,
            error: false,
        }
    }

    /// Returns a state showing the given text, such as a result, which the
    /// next operand replaces
    pub fn showing(text: &str) -> EditorState {
        EditorState {
            buffer: if text.is_empty() {
                String::from(EMPTY_BUFFER)
            } else {
                text.to_string()
            },
            awaiting_fresh_operand: true,
            error: false,
        }
    }

    /// Returns a state showing an error marker. The marker is never an
    /// operand: the next input starts from an empty buffer.
    pub fn showing_error(marker: &str) -> EditorState {
        EditorState {
            error: true,
            ..EditorState::showing(marker)
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns true if the next operand input replaces the buffer rather
    /// than extending it
    pub fn is_awaiting_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand
    }

    /// Returns true if the buffer holds an error marker
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Returns a copy of this state with the awaiting-fresh-operand flag set
    pub fn awaiting_fresh_operand(&self) -> EditorState {
        EditorState {
            buffer: self.buffer.clone(),
            awaiting_fresh_operand: true,
            error: self.error,
        }
    }

    /// Returns the state that results from applying an input to this one.
    /// Equals has no effect on the buffer; evaluation is up to the caller.
    pub fn apply(&self, input: &Input) -> EditorState {
        let next = match input {
            Input::Clear => EditorState::new(),
            Input::Backspace if self.error => EditorState::new(),
            Input::Backspace => self.backspace(),
            Input::Equals => self.clone(),
            Input::Operator(op) if self.error => EditorState::new().append_operator(*op),
            Input::Operator(op) => self.append_operator(*op),
            Input::DecimalPoint if !self.can_take_decimal_point() => self.clone(),
            Input::DecimalPoint if self.replaces_buffer() => EditorState {
                buffer: String::from("0."),
                awaiting_fresh_operand: false,
                error: false,
            },
            _ => match input.text() {
                Some(text) => self.enter(&text),
                None => self.clone(),
            },
        };

        debug!(
            "editor: {:?} + {} -> {:?}{}",
            self.buffer,
            input,
            next.buffer,
            if next.awaiting_fresh_operand {
                " (awaiting operand)"
            } else {
                ""
            }
        );

        next
    }

    /// Removes the last character, leaving "0" rather than an empty buffer
    fn backspace(&self) -> EditorState {
        let mut buffer = self.buffer.clone();
        buffer.pop();
        if buffer.is_empty() {
            buffer.push_str(EMPTY_BUFFER);
        }

        EditorState {
            buffer,
            awaiting_fresh_operand: self.awaiting_fresh_operand,
            error: false,
        }
    }

    /// Returns true if the next operand replaces the buffer
    fn replaces_buffer(&self) -> bool {
        self.awaiting_fresh_operand || self.buffer == EMPTY_BUFFER
    }

    /// Replaces or extends the buffer with operand text
    fn enter(&self, text: &str) -> EditorState {
        let buffer = if self.replaces_buffer() {
            text.to_string()
        } else {
            format!("{}{}", self.buffer, text)
        };

        EditorState {
            buffer,
            awaiting_fresh_operand: false,
            error: false,
        }
    }

    /// Appends a binary operator, replacing one that directly precedes it.
    /// A result left in the buffer becomes the left operand.
    fn append_operator(&self, op: Operator) -> EditorState {
        let mut buffer = self.buffer.clone();
        if buffer
            .chars()
            .last()
            .is_some_and(|c| Operator::from_char(c).is_some())
        {
            buffer.pop();
        }
        buffer.push_str(op.symbol());

        EditorState {
            buffer,
            awaiting_fresh_operand: false,
            error: false,
        }
    }

    /// Returns false if the number being typed already has a decimal point
    fn can_take_decimal_point(&self) -> bool {
        if self.replaces_buffer() {
            return true;
        }

        !self
            .buffer
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .any(|c| c == '.')
    }
}
