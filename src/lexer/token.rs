use crate::errors::{Error, Result};
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
/// A lexical token with the 1-based character position where it began
pub struct TokenInfo {
    pub token: Token,
    pub pos: usize,
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// A lexical token for an arithmetic expression
pub enum Token {
    Constant(Constant),
    Function(Function),
    LeftParen,
    Number(f64),
    Operator(Operator),
    RightParen,
}

impl Token {
    /// Returns true if the token can end an operand, which makes it a
    /// candidate left-hand side for implicit multiplication
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Constant(_) | Token::RightParen
        )
    }
}

impl fmt::Display for Token {
    /// Formats the token using the given formatter
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Constant(c) => write!(f, "{}", c),
            Token::Function(func) => write!(f, "{}", func),
            Token::LeftParen => write!(f, "("),
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::RightParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
/// A binary arithmetic operator
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// Returns the canonical text used for the operator in buffers and
    /// history lines
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Power => "^",
        }
    }

    /// Returns the operator for a single character, accepting both ASCII and
    /// display glyphs
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// Returns the binding strength of the operator; higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 2,
            Operator::Power => 3,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        *self == Operator::Power
    }

    /// Applies the operator to two operands. Division and modulo by zero
    /// are errors rather than infinities or NaN.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide | Operator::Modulo if right == 0.0 => Err(Error::DivideByZero),
            Operator::Divide => Ok(left / right),
            Operator::Modulo => Ok(left % right),
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
/// A unary function. Trigonometric functions operate on radians.
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log10,
    Ln,
}

impl Function {
    /// Returns the name of the function as typed by the user
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Sqrt => "sqrt",
            Function::Log10 => "log",
            Function::Ln => "ln",
        }
    }

    /// Looks up a function by name, ignoring case
    pub fn from_name(name: &str) -> Option<Function> {
        match name.to_lowercase().as_str() {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "sqrt" | "√" => Some(Function::Sqrt),
            "log" | "log10" => Some(Function::Log10),
            "ln" => Some(Function::Ln),
            _ => None,
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Sqrt => x.sqrt(),
            Function::Log10 => x.log10(),
            Function::Ln => x.ln(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
/// A named mathematical constant
pub enum Constant {
    Pi,
}

impl Constant {
    pub fn symbol(&self) -> &'static str {
        match self {
            Constant::Pi => "π",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => PI,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_operator_apply() -> Result<()> {
        assert_eq!(Operator::Add.apply(0.1, 0.2)?, 0.1 + 0.2);
        assert_eq!(Operator::Subtract.apply(3.0, 7.0)?, -4.0);
        assert_eq!(Operator::Multiply.apply(-3.0, 7.0)?, -21.0);
        assert_eq!(Operator::Divide.apply(2.0, -8.0)?, -0.25);
        assert_eq!(Operator::Modulo.apply(-7.0, 3.0)?, -1.0);
        assert_eq!(Operator::Modulo.apply(7.5, 2.0)?, 1.5);
        assert_eq!(Operator::Power.apply(10.0, -2.0)?, 0.01);

        assert_eq!(Operator::Divide.apply(1.0, 0.0), Err(Error::DivideByZero));
        assert_eq!(Operator::Divide.apply(1.0, -0.0), Err(Error::DivideByZero));
        assert_eq!(Operator::Modulo.apply(5.0, 0.0), Err(Error::DivideByZero));

        Ok(())
    }

    #[test]
    fn test_operator_precedence() {
        assert!(Operator::Add.precedence() < Operator::Multiply.precedence());
        assert_eq!(
            Operator::Multiply.precedence(),
            Operator::Modulo.precedence()
        );
        assert!(Operator::Divide.precedence() < Operator::Power.precedence());
        assert!(Operator::Power.is_right_associative());
        assert!(!Operator::Subtract.is_right_associative());
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('−'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('x'), None);
    }

    #[test]
    fn test_function_lookup() {
        assert_eq!(Function::from_name("SIN"), Some(Function::Sin));
        assert_eq!(Function::from_name("log10"), Some(Function::Log10));
        assert_eq!(Function::from_name("log"), Some(Function::Log10));
        assert_eq!(Function::from_name("exp"), None);

        assert_eq!(Function::Log10.apply(1000.0), 3.0);
        assert_eq!(Function::Ln.apply(1.0), 0.0);
        assert_eq!(Function::Sqrt.apply(16.0), 4.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Operator(Operator::Power).to_string(), "^");
        assert_eq!(Token::Function(Function::Sqrt).to_string(), "sqrt");
        assert_eq!(Token::Constant(Constant::Pi).to_string(), "π");
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
        assert_eq!(Token::LeftParen.to_string(), "(");
    }
}
