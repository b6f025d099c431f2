use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum Error {
    #[error("division by zero")]
    DivideByZero,
    #[error("invalid operand: {0}")]
    InvalidOperand(String),
    #[error("syntax error: {0}")]
    SyntaxError(String),
    #[error("unknown token '{0}'")]
    UnknownToken(String),
}

impl Error {
    /// Returns the short marker shown on the display in place of a result
    pub fn marker(&self) -> &'static str {
        match self {
            Error::DivideByZero => "Error: Div by zero",
            _ => "Error",
        }
    }
}
