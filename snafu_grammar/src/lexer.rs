//! Snafu lexer
//!
//! ```text
//! ID      : [a-zA-Z_] [a-zA-Z0-9_]* ;
//! INT     : [0-9]+ ;
//! STRING  : '"' ( '\\' . | ~["\\\r\n] )* '"' ;
//! WS      : [ \t\r\n]+ -> channel(HIDDEN) ;
//! COMMENT : '//' ~[\r\n]* -> channel(HIDDEN) ;
//! ```

use crate::tokens::*;
use infallible_harness::runtime::{CharStream, ConstructionFailure, Token, TokenSource, INVALID_TYPE};

pub struct SnafuLexer {
    input: CharStream,
}

impl SnafuLexer {
    pub fn new(input: CharStream) -> Self {
        Self { input }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) {
        while matches!(self.input.la(1), Some(c) if predicate(c)) {
            self.input.consume();
        }
    }

    /// Scan the rest of a string literal after the opening quote
    fn string_literal(&mut self) -> i32 {
        loop {
            match self.input.la(1) {
                Some('"') => {
                    self.input.consume();
                    return STRING;
                }
                Some('\\') => {
                    self.input.consume();
                    if self.input.consume().is_none() {
                        return INVALID_TYPE;
                    }
                }
                Some('\r') | Some('\n') | None => return INVALID_TYPE,
                Some(_) => {
                    self.input.consume();
                }
            }
        }
    }
}

impl TokenSource for SnafuLexer {
    fn next_token(&mut self) -> Token {
        let (line, column, start) = (self.input.line(), self.input.column(), self.input.index());
        let c = match self.input.consume() {
            Some(c) => c,
            None => return Token::eof(line, column),
        };

        let kind = match c {
            ';' => SEMI,
            '=' => ASSIGN,
            '+' => PLUS,
            '-' => MINUS,
            '*' => STAR,
            '(' => LPAREN,
            ')' => RPAREN,
            '/' if self.input.la(1) == Some('/') => {
                self.take_while(|c| c != '\r' && c != '\n');
                COMMENT
            }
            '/' => SLASH,
            '"' => self.string_literal(),
            c if c.is_ascii_digit() => {
                self.take_while(|c| c.is_ascii_digit());
                INT
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                ID
            }
            ' ' | '\t' | '\r' | '\n' => {
                self.take_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
                WS
            }
            _ => INVALID_TYPE,
        };

        let text = self.input.text(start, self.input.index());
        let kind = match kind {
            ID => keyword(&text).unwrap_or(ID),
            other => other,
        };

        let token = Token::new(kind, text, line, column);
        if kind == WS || kind == COMMENT {
            token.hidden()
        } else {
            token
        }
    }

    fn source_name(&self) -> &str {
        self.input.source_name()
    }
}

/// Factory registered as `<namespace>.SnafuLexer`
pub fn create(input: CharStream) -> Result<Box<dyn TokenSource>, ConstructionFailure> {
    Ok(Box::new(SnafuLexer::new(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<i32> {
        let mut lexer = SnafuLexer::new(CharStream::new("test.snf", text));
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                return kinds;
            }
            if !token.is_hidden() {
                kinds.push(token.kind);
            }
        }
    }

    #[test]
    fn test_statement_tokens() {
        assert_eq!(
            kinds("let x = 1 + y2;"),
            vec![LET, ID, ASSIGN, INT, PLUS, ID, SEMI]
        );
    }

    #[test]
    fn test_comments_and_strings() {
        assert_eq!(
            kinds("print \"a \\\"b\\\"\"; // trailing\n"),
            vec![PRINT, STRING, SEMI]
        );
        assert_eq!(kinds("6 / 2"), vec![INT, SLASH, INT]);
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(kinds("let @"), vec![LET, INVALID_TYPE]);
        assert_eq!(kinds("\"open"), vec![INVALID_TYPE]);
    }

    #[test]
    fn test_positions() {
        let mut lexer = SnafuLexer::new(CharStream::new("test.snf", "print\n  x"));
        let print = lexer.next_token();
        let ws = lexer.next_token();
        let x = lexer.next_token();

        assert_eq!((print.line, print.column), (1, 0));
        assert!(ws.is_hidden());
        assert_eq!((x.line, x.column, x.text.as_str()), (2, 2, "x"));
    }
}
