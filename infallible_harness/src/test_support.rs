//! A tiny word grammar used by unit tests
//!
//! `sentence : WORD* ';' EOF ;` plus rules exercising every invoker outcome.

use crate::runtime::{
    BufferedTokenStream, CharStream, ConstructionFailure, ErrorStrategy, Parser, ParserCore,
    RecognitionError, RuleEntry, RuleFailure, Token, TokenSource, EOF, INVALID_TYPE,
};
use crate::symbols::SymbolRegistry;
use std::path::{Path, PathBuf};

pub const WORD: i32 = 1;
pub const SEMI: i32 = 2;
pub const WS: i32 = 3;

const VOCABULARY: &[&str] = &["<INVALID>", "WORD", "';'", "WS"];

const RULES: &[RuleEntry] = &[
    RuleEntry::public("sentence"),
    RuleEntry::private("clause"),
    RuleEntry::public("phrase").with_arity(1),
    RuleEntry::public("fail"),
    RuleEntry::public("crash"),
];

pub struct WordLexer {
    input: CharStream,
}

impl TokenSource for WordLexer {
    fn next_token(&mut self) -> Token {
        let (line, column, start) = (self.input.line(), self.input.column(), self.input.index());
        let c = match self.input.consume() {
            Some(c) => c,
            None => return Token::eof(line, column),
        };

        if c.is_ascii_lowercase() {
            while matches!(self.input.la(1), Some(n) if n.is_ascii_lowercase()) {
                self.input.consume();
            }
            return Token::new(WORD, self.input.text(start, self.input.index()), line, column);
        }

        match c {
            ';' => Token::new(SEMI, ";", line, column),
            c if c.is_whitespace() => Token::new(WS, c.to_string(), line, column).hidden(),
            c => Token::new(INVALID_TYPE, c.to_string(), line, column),
        }
    }

    fn source_name(&self) -> &str {
        self.input.source_name()
    }
}

pub struct WordParser {
    core: ParserCore,
}

impl Parser for WordParser {
    fn source_name(&self) -> &str {
        self.core.source_name()
    }

    fn set_error_strategy(&mut self, strategy: Box<dyn ErrorStrategy>) {
        self.core.set_error_strategy(strategy);
    }

    fn rule_table(&self) -> &'static [RuleEntry] {
        RULES
    }

    fn invoke_rule(&mut self, name: &str) -> Result<(), RuleFailure> {
        match name {
            "sentence" => {
                while self.core.la(1) == WORD {
                    self.core.consume();
                }
                self.core.match_token(SEMI)?;
                self.core.match_token(EOF)?;
                Ok(())
            }
            "clause" => self.core.match_token(WORD).map(|_| ()),
            "fail" => Err(RuleFailure::Internal("fail always fails".to_string())),
            "crash" => panic!("crash always panics"),
            other => Err(RuleFailure::Internal(format!("no rule '{}'", other))),
        }
    }

    fn syntax_errors(&self) -> &[RecognitionError] {
        self.core.syntax_errors()
    }
}

pub fn word_lexer(input: CharStream) -> Result<Box<dyn TokenSource>, ConstructionFailure> {
    Ok(Box::new(WordLexer { input }))
}

pub fn word_parser(input: BufferedTokenStream) -> Result<Box<dyn Parser>, ConstructionFailure> {
    Ok(Box::new(WordParser {
        core: ParserCore::new(input, VOCABULARY),
    }))
}

pub fn refusing_lexer(_input: CharStream) -> Result<Box<dyn TokenSource>, ConstructionFailure> {
    Err(ConstructionFailure::new("lexer refuses to start"))
}

pub fn panicking_parser(_input: BufferedTokenStream) -> Result<Box<dyn Parser>, ConstructionFailure> {
    panic!("parser factory exploded")
}

pub fn refusing_parser(_input: BufferedTokenStream) -> Result<Box<dyn Parser>, ConstructionFailure> {
    Err(ConstructionFailure::new("parser refuses to start"))
}

/// Registry holding `test.WordLexer` and `test.WordParser`
pub fn word_registry() -> SymbolRegistry {
    let mut registry = SymbolRegistry::new();
    registry
        .register_lexer("test.WordLexer", word_lexer)
        .expect("fresh registry");
    registry
        .register_parser("test.WordParser", word_parser)
        .expect("fresh registry");
    registry
}

pub fn write_source(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write fixture");
    path
}
