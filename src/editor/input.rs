use crate::errors::{Error, Result};
use crate::lexer::{Constant, Function, Operator};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A single keystroke or button press
pub enum Input {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Function(Function),
    Constant(Constant),
    LeftParen,
    RightParen,
    Equals,
    Clear,
    Backspace,
}

impl Input {
    /// Maps a key or button name to an input. Accepts the names a keyboard
    /// reports ("Enter", "Escape", "Backspace", ...), the labels on the
    /// calculator buttons, and the display glyphs for operators.
    pub fn from_key(key: &str) -> Option<Input> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            match c {
                '0'..='9' => return Some(Input::Digit(c)),
                '.' => return Some(Input::DecimalPoint),
                '(' => return Some(Input::LeftParen),
                ')' => return Some(Input::RightParen),
                '=' => return Some(Input::Equals),
                'π' => return Some(Input::Constant(Constant::Pi)),
                'C' | 'c' => return Some(Input::Clear),
                _ => {
                    if let Some(op) = Operator::from_char(c) {
                        return Some(Input::Operator(op));
                    }
                }
            }
        }

        match key.to_lowercase().as_str() {
            "enter" => Some(Input::Equals),
            "backspace" | "back" => Some(Input::Backspace),
            "escape" | "delete" | "clear" => Some(Input::Clear),
            "mod" => Some(Input::Operator(Operator::Modulo)),
            "pi" => Some(Input::Constant(Constant::Pi)),
            name => Function::from_name(name).map(Input::Function),
        }
    }

    /// Splits a line of whitespace-separated key names into inputs. A word
    /// made only of digits and decimal points is typed one key at a time.
    pub fn parse_line(line: &str) -> Result<Vec<Input>> {
        let mut inputs = Vec::new();

        for word in line.split_whitespace() {
            if let Some(input) = Input::from_key(word) {
                inputs.push(input);
            } else if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
                inputs.extend(word.chars().map(|c| match c {
                    '.' => Input::DecimalPoint,
                    _ => Input::Digit(c),
                }));
            } else {
                return Err(Error::UnknownToken(word.to_string()));
            }
        }

        Ok(inputs)
    }

    /// Returns the text this input adds to an expression buffer, if it adds
    /// any. Functions open a group that the user closes later.
    pub fn text(&self) -> Option<String> {
        match self {
            Input::Digit(c) => Some(c.to_string()),
            Input::DecimalPoint => Some(String::from(".")),
            Input::Operator(op) => Some(op.symbol().to_string()),
            Input::Function(function) => Some(format!("{}(", function.name())),
            Input::Constant(c) => Some(c.symbol().to_string()),
            Input::LeftParen => Some(String::from("(")),
            Input::RightParen => Some(String::from(")")),
            Input::Equals | Input::Clear | Input::Backspace => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Input::Equals => write!(f, "="),
            Input::Clear => write!(f, "C"),
            Input::Backspace => write!(f, "⌫"),
            _ => write!(f, "{}", self.text().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_key("."), Some(Input::DecimalPoint));
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Backspace));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("Delete"), Some(Input::Clear));
        assert_eq!(Input::from_key("C"), Some(Input::Clear));
        assert_eq!(
            Input::from_key("%"),
            Some(Input::Operator(Operator::Modulo))
        );
        assert_eq!(
            Input::from_key("×"),
            Some(Input::Operator(Operator::Multiply))
        );
        assert_eq!(
            Input::from_key("mod"),
            Some(Input::Operator(Operator::Modulo))
        );
        assert_eq!(
            Input::from_key("sqrt"),
            Some(Input::Function(Function::Sqrt))
        );
        assert_eq!(Input::from_key("pi"), Some(Input::Constant(Constant::Pi)));
        assert_eq!(Input::from_key("12"), None);
        assert_eq!(Input::from_key("Shift"), None);
    }

    #[test]
    fn test_parse_line() -> Result<()> {
        assert_eq!(
            Input::parse_line("12.5 + sin pi ) =")?,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::DecimalPoint,
                Input::Digit('5'),
                Input::Operator(Operator::Add),
                Input::Function(Function::Sin),
                Input::Constant(Constant::Pi),
                Input::RightParen,
                Input::Equals,
            ]
        );
        assert_eq!(Input::parse_line("   ")?, vec![]);
        assert_eq!(
            Input::parse_line("2 + x"),
            Err(Error::UnknownToken(String::from("x")))
        );

        Ok(())
    }

    #[test]
    fn test_text() {
        assert_eq!(
            Input::Function(Function::Log10).text(),
            Some(String::from("log("))
        );
        assert_eq!(
            Input::Operator(Operator::Divide).text(),
            Some(String::from("/"))
        );
        assert_eq!(Input::Equals.text(), None);
        assert_eq!(Input::Constant(Constant::Pi).to_string(), "π");
    }
}
