use crate::calculator::{format_number, parse_operand};
use crate::editor::{EditorState, Input};
use crate::errors::{Error, Result};
use crate::history::{HistoryRecord, HistorySink};
use crate::lexer::Operator;
use log::{debug, warn};

#[derive(Debug, PartialEq, Eq, Clone, Default)]
/// The pending half of a two-operand calculation. Operators are applied
/// strictly left to right as they are entered, with no precedence.
pub struct BasicAccumulator {
    previous_operand: Option<String>,
    pending_operator: Option<Operator>,
}

impl BasicAccumulator {
    pub fn new() -> BasicAccumulator {
        Default::default()
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true if an operator is waiting for its right operand
    pub fn is_pending(&self) -> bool {
        self.pending_operator.is_some()
    }

    /// Applies an input and returns the editor state to show next. Inputs
    /// the basic calculator has no key for leave everything unchanged.
    pub fn apply(
        &mut self,
        editor: &EditorState,
        input: &Input,
        history: &mut dyn HistorySink,
    ) -> EditorState {
        match input {
            Input::Clear => {
                self.reset();
                EditorState::new()
            }
            Input::Digit(_) | Input::DecimalPoint | Input::Backspace => editor.apply(input),
            Input::Operator(op) if *op != Operator::Power => self.operator(editor, *op),
            Input::Equals => self.equals(editor, history),
            _ => {
                debug!("basic: ignoring {}", input);
                editor.clone()
            }
        }
    }

    /// Records an operator, first collapsing a pending operation if its
    /// right operand has been entered
    fn operator(&mut self, editor: &EditorState, op: Operator) -> EditorState {
        if self.is_pending() && !editor.is_awaiting_fresh_operand() {
            match self.collapse(editor.buffer()) {
                Ok(value) => {
                    let text = format_number(value);
                    debug!("basic: collapsed to {}, pending {}", text, op);
                    self.previous_operand = Some(text.clone());
                    self.pending_operator = Some(op);
                    EditorState::showing(&text)
                }
                Err(e) => {
                    warn!("basic: {}", e);
                    self.reset();
                    EditorState::showing_error(e.marker())
                }
            }
        } else {
            // An error marker on display counts as an empty operand
            let left = if editor.is_error() {
                EditorState::new()
            } else {
                editor.clone()
            };
            self.previous_operand = Some(left.buffer().to_string());
            self.pending_operator = Some(op);
            left.awaiting_fresh_operand()
        }
    }

    /// Completes a pending operation and records it. A failed operation is
    /// still recorded, with the error marker in place of the result.
    fn equals(&mut self, editor: &EditorState, history: &mut dyn HistorySink) -> EditorState {
        let (Some(previous), Some(op)) = (&self.previous_operand, self.pending_operator) else {
            return editor.clone();
        };

        let expression = format!("{} {} {}", previous, op, editor.buffer());
        let next = match self.collapse(editor.buffer()) {
            Ok(value) => EditorState::showing(&format_number(value)),
            Err(e) => {
                warn!("basic: {}: {}", expression, e);
                EditorState::showing_error(e.marker())
            }
        };

        history.record(HistoryRecord::calculation(&expression, next.buffer()));
        self.reset();

        next
    }

    /// Applies the pending operator to the previous operand and the given
    /// right operand
    fn collapse(&self, right: &str) -> Result<f64> {
        let (Some(previous), Some(op)) = (&self.previous_operand, self.pending_operator) else {
            return parse_operand(right);
        };

        let value = op.apply(parse_operand(previous)?, parse_operand(right)?)?;
        if !value.is_finite() {
            return Err(Error::InvalidOperand(format!(
                "{} {} {} overflows",
                previous, op, right
            )));
        }

        Ok(value)
    }

    fn reset(&mut self) {
        self.previous_operand = None;
        self.pending_operator = None;
    }
}
