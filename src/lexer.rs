use crate::errors::{Error, Result};
use log::trace;

mod token;

pub use token::{Constant, Function, Operator, Token, TokenInfo};

/// Words recognised inside an alphabetic run. Longer words sharing a prefix
/// with a shorter one must come first.
const KEYWORDS: &[(&str, Token)] = &[
    ("log10", Token::Function(Function::Log10)),
    ("sqrt", Token::Function(Function::Sqrt)),
    ("sin", Token::Function(Function::Sin)),
    ("cos", Token::Function(Function::Cos)),
    ("tan", Token::Function(Function::Tan)),
    ("log", Token::Function(Function::Log10)),
    ("mod", Token::Operator(Operator::Modulo)),
    ("ln", Token::Function(Function::Ln)),
    ("pi", Token::Constant(Constant::Pi)),
];

/// A lexer for arithmetic expressions
pub struct Lexer {
    input: Vec<char>,
    cursor: usize,
}

impl Lexer {
    /// Returns a new lexer for the given input string
    pub fn new(input: &str) -> Lexer {
        Lexer {
            input: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Returns the next lexical token, if any
    pub fn next_token(&mut self) -> Result<Option<TokenInfo>> {
        self.discard_whitespace();

        let Some(lookahead) = self.lookahead() else {
            return Ok(None);
        };

        let pos = self.cursor + 1;
        let token = match lookahead {
            '(' => {
                self.read();
                Token::LeftParen
            }
            ')' => {
                self.read();
                Token::RightParen
            }
            'π' => {
                self.read();
                Token::Constant(Constant::Pi)
            }
            '√' => {
                self.read();
                Token::Function(Function::Sqrt)
            }
            c if c.is_ascii_digit() || c == '.' => self.lex_number()?,
            c if c.is_alphabetic() => self.lex_word()?,
            c => match Operator::from_char(c) {
                Some(op) => {
                    self.read();
                    Token::Operator(op)
                }
                None => return Err(Error::UnknownToken(c.to_string())),
            },
        };

        Ok(Some(TokenInfo { token, pos }))
    }

    /// Reads and discards any whitespace characters
    fn discard_whitespace(&mut self) {
        while let Some(lookahead) = self.lookahead() {
            if !lookahead.is_whitespace() {
                break;
            }
            self.read();
        }
    }

    /// Lexes a decimal number with an optional fractional part and an
    /// optional exponent, such as "12", "3.", ".5" or "1.5e-8"
    fn lex_number(&mut self) -> Result<Token> {
        let start = self.cursor;
        let mut seen_point = false;

        while let Some(lookahead) = self.lookahead() {
            if lookahead == '.' {
                if seen_point {
                    self.read();
                    return Err(Error::SyntaxError(format!(
                        "malformed number '{}' at position {}",
                        self.text_from(start),
                        start + 1
                    )));
                }
                seen_point = true;
            } else if !lookahead.is_ascii_digit() {
                break;
            }
            self.read();
        }

        // An exponent is only consumed when digits follow, so "2e" still
        // lexes as a number followed by a word
        if matches!(self.lookahead(), Some('e') | Some('E')) {
            let digits_at = match self.peek(1) {
                Some('+') | Some('-') => 2,
                _ => 1,
            };
            if self.peek(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digits_at {
                    self.read();
                }
                while self.lookahead().is_some_and(|c| c.is_ascii_digit()) {
                    self.read();
                }
            }
        }

        let text = self.text_from(start);
        match text.parse::<f64>() {
            Ok(n) => Ok(Token::Number(n)),
            Err(_) => Err(Error::SyntaxError(format!(
                "malformed number '{}' at position {}",
                text,
                start + 1
            ))),
        }
    }

    /// Lexes a function name, constant name or the word operator "mod".
    /// Known words are matched as prefixes of the alphabetic run so that
    /// adjacent words such as "pisin" split without whitespace.
    fn lex_word(&mut self) -> Result<Token> {
        for (word, token) in KEYWORDS {
            if self.matches_word(word) {
                for _ in 0..word.chars().count() {
                    self.read();
                }
                return Ok(*token);
            }
        }

        let start = self.cursor;
        while self.lookahead().is_some_and(|c| c.is_alphabetic()) {
            self.read();
        }

        Err(Error::UnknownToken(self.text_from(start)))
    }

    /// Returns true if the input at the cursor begins with the given word,
    /// ignoring case
    fn matches_word(&self, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(i, w)| self.peek(i).is_some_and(|c| c.to_ascii_lowercase() == w))
    }

    /// Returns the lookahead character
    fn lookahead(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the character the given distance past the cursor
    fn peek(&self, distance: usize) -> Option<char> {
        self.input.get(self.cursor + distance).copied()
    }

    /// Returns the input from the given index up to the cursor
    fn text_from(&self, start: usize) -> String {
        self.input[start..self.cursor].iter().collect()
    }

    /// Advances the cursor past the next input character. The caller must
    /// ensure the lookahead is valid.
    fn read(&mut self) -> char {
        let c = self.input[self.cursor];
        self.cursor += 1;
        c
    }
}

/// Splits an expression into tokens and inserts the multiplication
/// operators it leaves implicit, so that "2π" becomes "2*π", ")5" becomes
/// ")*5" and ")sin(" becomes ")*sin("
pub fn tokenize(input: &str) -> Result<Vec<TokenInfo>> {
    let mut lexer = Lexer::new(input);
    let mut tokens: Vec<TokenInfo> = Vec::new();

    while let Some(info) = lexer.next_token()? {
        if let Some(prev) = tokens.last() {
            if is_implicit_product(&prev.token, &info.token) {
                tokens.push(TokenInfo {
                    token: Token::Operator(Operator::Multiply),
                    pos: info.pos,
                });
            }
        }
        tokens.push(info);
    }

    trace!(
        "tokenized {:?} into [{}]",
        input,
        tokens
            .iter()
            .map(|t| t.token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(tokens)
}

/// Returns true if a multiplication operator is implied between two
/// adjacent tokens
fn is_implicit_product(left: &Token, right: &Token) -> bool {
    if !left.ends_operand() {
        return false;
    }

    match right {
        Token::Constant(_) | Token::Function(_) | Token::LeftParen => true,
        // Two numbers side by side are a typo, not a product
        Token::Number(_) => !matches!(left, Token::Number(_)),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<Token>> {
        Ok(tokenize(input)?.into_iter().map(|t| t.token).collect())
    }

    const MUL: Token = Token::Operator(Operator::Multiply);
    const PI: Token = Token::Constant(Constant::Pi);

    #[test]
    fn test_numbers() -> Result<()> {
        assert_eq!(tokens("42")?, vec![Token::Number(42.0)]);
        assert_eq!(tokens("3.")?, vec![Token::Number(3.0)]);
        assert_eq!(tokens(".5")?, vec![Token::Number(0.5)]);
        assert_eq!(tokens("1.5e-8")?, vec![Token::Number(1.5e-8)]);
        assert_eq!(tokens("2E+3")?, vec![Token::Number(2000.0)]);
        assert_eq!(tokens("1e21")?, vec![Token::Number(1e21)]);

        Ok(())
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            tokens("1.2.3"),
            Err(Error::SyntaxError(String::from(
                "malformed number '1.2.' at position 1"
            )))
        );
        assert_eq!(
            tokens("3+."),
            Err(Error::SyntaxError(String::from(
                "malformed number '.' at position 3"
            )))
        );
    }

    #[test]
    fn test_operators_and_glyphs() -> Result<()> {
        assert_eq!(
            tokens("1 + 2 − 3 × 4 ÷ 5 mod 6 ^ 7 % 8")?,
            vec![
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::Number(2.0),
                Token::Operator(Operator::Subtract),
                Token::Number(3.0),
                MUL,
                Token::Number(4.0),
                Token::Operator(Operator::Divide),
                Token::Number(5.0),
                Token::Operator(Operator::Modulo),
                Token::Number(6.0),
                Token::Operator(Operator::Power),
                Token::Number(7.0),
                Token::Operator(Operator::Modulo),
                Token::Number(8.0),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_words() -> Result<()> {
        assert_eq!(
            tokens("sin(pi)")?,
            vec![
                Token::Function(Function::Sin),
                Token::LeftParen,
                PI,
                Token::RightParen
            ]
        );
        assert_eq!(
            tokens("log10(100)")?,
            vec![
                Token::Function(Function::Log10),
                Token::LeftParen,
                Token::Number(100.0),
                Token::RightParen
            ]
        );
        assert_eq!(
            tokens("LN(1)")?[0],
            Token::Function(Function::Ln)
        );

        Ok(())
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(tokens("2+foo"), Err(Error::UnknownToken(String::from("foo"))));
        assert_eq!(tokens("3$4"), Err(Error::UnknownToken(String::from("$"))));
        assert_eq!(tokens("Error"), Err(Error::UnknownToken(String::from("Error"))));
    }

    #[test]
    fn test_implicit_multiplication() -> Result<()> {
        assert_eq!(tokens("2π")?, vec![Token::Number(2.0), MUL, PI]);
        assert_eq!(
            tokens("2(3)")?,
            vec![
                Token::Number(2.0),
                MUL,
                Token::LeftParen,
                Token::Number(3.0),
                Token::RightParen
            ]
        );
        assert_eq!(
            tokens("(2)5")?,
            vec![
                Token::LeftParen,
                Token::Number(2.0),
                Token::RightParen,
                MUL,
                Token::Number(5.0)
            ]
        );
        assert_eq!(
            tokens(")sin(")?,
            vec![
                Token::RightParen,
                MUL,
                Token::Function(Function::Sin),
                Token::LeftParen
            ]
        );
        assert_eq!(tokens("ππ")?, vec![PI, MUL, PI]);

        // Operators and separated numbers are left alone
        assert_eq!(tokens("2 3")?, vec![Token::Number(2.0), Token::Number(3.0)]);
        assert_eq!(tokens("1-(2)")?.len(), 5);

        Ok(())
    }

    #[test]
    fn test_positions() -> Result<()> {
        let infos = tokenize(" 12 +(3)")?;
        let positions: Vec<usize> = infos.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![2, 5, 6, 7, 8]);

        Ok(())
    }
}
