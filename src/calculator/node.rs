use crate::errors::Result;
use crate::lexer::{Constant, Function, Operator};
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
/// A node in an expression tree
pub enum Node {
    Number(f64),
    Constant(Constant),
    Negate(Box<Node>),
    Call(Function, Box<Node>),
    Binary(Operator, Box<Node>, Box<Node>),
}

impl Node {
    /// Returns a new binary operation node
    pub fn binary(op: Operator, left: Node, right: Node) -> Node {
        Node::Binary(op, Box::new(left), Box::new(right))
    }

    /// Recursively evaluates the tree rooted at this node
    pub fn reduce(&self) -> Result<f64> {
        match self {
            Node::Number(n) => Ok(*n),
            Node::Constant(c) => Ok(c.value()),
            Node::Negate(operand) => Ok(-operand.reduce()?),
            Node::Call(function, argument) => Ok(function.apply(argument.reduce()?)),
            Node::Binary(op, left, right) => {
                // Evaluate left to right so the first failure is reported
                let left = left.reduce()?;
                let right = right.reduce()?;
                op.apply(left, right)
            }
        }
    }
}

impl fmt::Display for Node {
    /// Formats the tree fully parenthesized, which makes the grouping the
    /// parser chose visible
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Number(n) => write!(f, "{}", n),
            Node::Constant(c) => write!(f, "{}", c),
            Node::Negate(operand) => write!(f, "(-{})", operand),
            Node::Call(function, argument) => write!(f, "{}({})", function, argument),
            Node::Binary(op, left, right) => write!(f, "({} {} {})", left, op, right),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_reduce() -> Result<()> {
        let tree = Node::binary(
            Operator::Add,
            Node::Number(2.0),
            Node::binary(Operator::Multiply, Node::Number(3.0), Node::Number(4.0)),
        );
        assert_eq!(tree.reduce()?, 14.0);

        let tree = Node::Negate(Box::new(Node::Call(
            Function::Cos,
            Box::new(Node::Constant(Constant::Pi)),
        )));
        assert_eq!(tree.reduce()?, 1.0);

        Ok(())
    }

    #[test]
    fn test_reduce_fail() {
        let tree = Node::binary(
            Operator::Divide,
            Node::Number(1.0),
            Node::binary(Operator::Subtract, Node::Number(2.0), Node::Number(2.0)),
        );
        assert_eq!(tree.reduce(), Err(Error::DivideByZero));
    }

    #[test]
    fn test_display() {
        let tree = Node::binary(
            Operator::Power,
            Node::Negate(Box::new(Node::Number(2.0))),
            Node::Call(Function::Sqrt, Box::new(Node::Constant(Constant::Pi))),
        );
        assert_eq!(tree.to_string(), "((-2) ^ sqrt(π))");
    }
}
