use super::node::Node;
use crate::errors::{Error, Result};
use crate::lexer::{Operator, Token, TokenInfo};

/// The deepest expression tree the parser builds. Parentheses, prefix
/// operators and each operator in a chain all add a level.
pub const MAX_DEPTH: usize = 256;

/// A precedence-climbing parser over a token stream
struct Parser<'t> {
    tokens: &'t [TokenInfo],
    cursor: usize,
    depth: usize,
}

/// Parses a token stream into an expression tree. The whole stream must
/// form a single expression, and every '(' must be closed.
pub fn parse(tokens: &[TokenInfo]) -> Result<Node> {
    if tokens.is_empty() {
        return Err(Error::SyntaxError(String::from("empty expression")));
    }

    let mut parser = Parser::new(tokens);
    let node = parser.parse_expression(1)?;

    // Ensure we consumed all the input during the parse
    if let Some(trailing) = parser.lookahead() {
        return Err(match trailing.token {
            Token::RightParen => Error::SyntaxError(format!(
                "unmatched ')' at position {}",
                trailing.pos
            )),
            _ => unexpected(&trailing),
        });
    }

    Ok(node)
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [TokenInfo]) -> Parser<'t> {
        Parser {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    /// Enters one level of nesting, failing past MAX_DEPTH
    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::SyntaxError(String::from(
                "expression nested too deeply",
            )));
        }

        Ok(())
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Returns a copy of the lookahead token, if any
    fn lookahead(&self) -> Option<TokenInfo> {
        self.tokens.get(self.cursor).copied()
    }

    /// Returns the lookahead token and advances past it
    fn read(&mut self) -> Option<TokenInfo> {
        let token = self.lookahead();
        if token.is_some() {
            self.cursor += 1;
        }

        token
    }

    /// Parses a sequence of operands joined by binary operators whose
    /// precedence is at least min_precedence
    fn parse_expression(&mut self, min_precedence: u8) -> Result<Node> {
        self.descend()?;
        let mut left = self.parse_unary()?;
        let mut levels = 1;

        while let Some(TokenInfo {
            token: Token::Operator(op),
            ..
        }) = self.lookahead()
        {
            if op.precedence() < min_precedence {
                break;
            }
            self.read();
            self.descend()?;
            levels += 1;

            // A right-associative operator lets an operator of equal
            // precedence bind its right operand first
            let next_precedence = if op.is_right_associative() {
                op.precedence()
            } else {
                op.precedence() + 1
            };

            let right = self.parse_expression(next_precedence)?;
            left = Node::binary(op, left, right);
        }

        self.ascend(levels);
        Ok(left)
    }

    /// Parses an operand preceded by any number of prefix operators. Unary
    /// minus and function application bind tighter than any binary operator.
    fn parse_unary(&mut self) -> Result<Node> {
        let Some(lookahead) = self.lookahead() else {
            return self.parse_primary();
        };

        let node = match lookahead.token {
            Token::Operator(Operator::Subtract) => {
                self.read();
                self.descend()?;
                Node::Negate(Box::new(self.parse_unary()?))
            }
            Token::Operator(Operator::Add) => {
                self.read();
                self.descend()?;
                self.parse_unary()?
            }
            Token::Function(function) => {
                self.read();
                self.descend()?;
                Node::Call(function, Box::new(self.parse_unary()?))
            }
            _ => return self.parse_primary(),
        };

        self.ascend(1);
        Ok(node)
    }

    /// Parses a number, a constant or a parenthesized expression
    fn parse_primary(&mut self) -> Result<Node> {
        let Some(info) = self.read() else {
            return Err(Error::SyntaxError(String::from(
                "unexpected end of expression",
            )));
        };

        match info.token {
            Token::Number(n) => Ok(Node::Number(n)),
            Token::Constant(c) => Ok(Node::Constant(c)),
            Token::LeftParen => {
                let inner = self.parse_expression(1)?;
                match self.read() {
                    Some(TokenInfo {
                        token: Token::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(&other)),
                    None => Err(Error::SyntaxError(format!(
                        "missing ')' for '(' at position {}",
                        info.pos
                    ))),
                }
            }
            _ => Err(Error::SyntaxError(format!(
                "expected operand, found '{}' at position {}",
                info.token, info.pos
            ))),
        }
    }
}

/// Returns an error describing a token that cannot appear where it was found
fn unexpected(info: &TokenInfo) -> Error {
    Error::SyntaxError(format!(
        "unexpected '{}' at position {}",
        info.token, info.pos
    ))
}
