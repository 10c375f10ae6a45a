//! Snafu parser
//!
//! ```text
//! startRule : statement* EOF ;
//! statement : 'let' ID '=' expr ';'
//!           | 'print' expr ';'
//!           ;
//! expr      : expr ('*' | '/') expr
//!           | expr ('+' | '-') expr
//!           | factor
//!           ;
//! factor    : INT | ID | STRING | '(' expr ')' | '-' factor ;
//! ```
//!
//! The left-recursive `expr` is parsed by precedence climbing; like any
//! generated parser it exposes a public zero-argument `expr` plus a private
//! one taking the minimum precedence.

use crate::tokens::*;
use infallible_harness::runtime::{
    BufferedTokenStream, ConstructionFailure, ErrorStrategy, Parser, ParserCore,
    RecognitionError, RuleEntry, RuleFailure, EOF,
};

/// Deepest nesting of parentheses and unary minus accepted
pub const MAX_NESTING_DEPTH: usize = 256;

pub const RULES: &[RuleEntry] = &[
    RuleEntry::public("startRule"),
    RuleEntry::public("statement"),
    RuleEntry::public("expr"),
    RuleEntry::private("expr").with_arity(1),
    RuleEntry::public("factor"),
];

const STATEMENT_START: &[i32] = &[LET, PRINT];
const FACTOR_START: &[i32] = &[INT, ID, STRING, LPAREN, MINUS];
const STATEMENT_FOLLOW: &[i32] = &[LET, PRINT, EOF];
const FACTOR_FOLLOW: &[i32] = &[SEMI, RPAREN, PLUS, MINUS, STAR, SLASH];

pub struct SnafuParser {
    core: ParserCore,
    depth: usize,
}

impl SnafuParser {
    pub fn new(input: BufferedTokenStream) -> Self {
        Self {
            core: ParserCore::new(input, VOCABULARY),
            depth: 0,
        }
    }

    pub fn start_rule(&mut self) -> Result<(), RuleFailure> {
        loop {
            let next = self.core.la(1);
            if STATEMENT_START.contains(&next) {
                self.statement()?;
            } else if next == EOF {
                break;
            } else {
                let mut expected = STATEMENT_START.to_vec();
                expected.push(EOF);
                self.core.no_viable_alternative(&expected, STATEMENT_FOLLOW)?;
            }
        }
        self.core.match_token(EOF)?;
        Ok(())
    }

    pub fn statement(&mut self) -> Result<(), RuleFailure> {
        match self.core.la(1) {
            LET => {
                self.core.match_token(LET)?;
                self.core.match_token(ID)?;
                self.core.match_token(ASSIGN)?;
                self.expr()?;
                self.core.match_token(SEMI)?;
            }
            PRINT => {
                self.core.match_token(PRINT)?;
                self.expr()?;
                self.core.match_token(SEMI)?;
            }
            _ => self
                .core
                .no_viable_alternative(STATEMENT_START, STATEMENT_FOLLOW)?,
        }
        Ok(())
    }

    pub fn expr(&mut self) -> Result<(), RuleFailure> {
        self.expr_with_precedence(0)
    }

    fn expr_with_precedence(&mut self, min_precedence: u8) -> Result<(), RuleFailure> {
        self.factor()?;
        loop {
            let precedence = match self.core.la(1) {
                PLUS | MINUS => 1,
                STAR | SLASH => 2,
                _ => break,
            };
            if precedence < min_precedence {
                break;
            }
            self.core.consume();
            self.expr_with_precedence(precedence + 1)?;
        }
        Ok(())
    }

    pub fn factor(&mut self) -> Result<(), RuleFailure> {
        self.enter()?;
        let result = self.factor_alternatives();
        self.depth -= 1;
        result
    }

    fn factor_alternatives(&mut self) -> Result<(), RuleFailure> {
        match self.core.la(1) {
            INT | ID | STRING => {
                self.core.consume();
            }
            LPAREN => {
                self.core.consume();
                self.expr()?;
                self.core.match_token(RPAREN)?;
            }
            MINUS => {
                self.core.consume();
                self.factor()?;
            }
            _ => self.core.no_viable_alternative(FACTOR_START, FACTOR_FOLLOW)?,
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<(), RuleFailure> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(RuleFailure::Internal(format!(
                "maximum nesting depth {} exceeded at line {}",
                MAX_NESTING_DEPTH,
                self.core.lt(1).line
            )));
        }
        self.depth += 1;
        Ok(())
    }
}

impl Parser for SnafuParser {
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
            "startRule" => self.start_rule(),
            "statement" => self.statement(),
            "expr" => self.expr(),
            "factor" => self.factor(),
            other => Err(RuleFailure::Internal(format!(
                "SnafuParser has no rule '{}'",
                other
            ))),
        }
    }

    fn syntax_errors(&self) -> &[RecognitionError] {
        self.core.syntax_errors()
    }
}

/// Factory registered as `<namespace>.SnafuParser`
pub fn create(input: BufferedTokenStream) -> Result<Box<dyn Parser>, ConstructionFailure> {
    Ok(Box::new(SnafuParser::new(input)))
}
