//! Safe arithmetic expression evaluation.
//!
//! An expression is split into tokens by the lexer, parsed into a [`Node`]
//! tree by precedence climbing and reduced to a double. No part of the input
//! is ever executed as code.
//!
//! Operators, from highest priority:
//! * unary `-`, `+` and function application (`sin`, `cos`, `tan`, `sqrt`,
//!   `log` (base 10), `ln`)
//! * `^` - power, right-associative
//! * `*`, `/`, `%` (or `mod`) - left-associative
//! * `+`, `-` - left-associative
//!
//! The display glyphs `×`, `÷` and `−` are accepted for their ASCII
//! counterparts, and `π` (or `pi`) is the only constant. Multiplication may be
//! left implicit next to a constant, function or parenthesis: `2π`, `2(3+4)`
//! and `(2)(3)` are all products.

use crate::errors::{Error, Result};
use crate::lexer::tokenize;
use log::debug;

mod node;
mod number;
mod parser;

pub use node::Node;
pub use number::{format_number, parse_operand};
pub use parser::{parse, MAX_DEPTH};

/// Evaluates an expression to a finite double
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    let tree = parse(&tokens)?;
    let value = tree.reduce()?;

    if !value.is_finite() {
        return Err(Error::InvalidOperand(format!(
            "'{}' has no finite value",
            input.trim()
        )));
    }

    debug!("evaluated {:?} as {} = {}", input, tree, value);

    Ok(value)
}
