//! Parser capability and the recognizer helper generated parsers build on

use super::error::{ConstructionFailure, RecognitionError, RuleFailure};
use super::strategy::{DefaultErrorStrategy, ErrorStrategy};
use super::token::{Token, EOF};
use super::token_stream::BufferedTokenStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Static description of one rule procedure a parser exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry {
    pub name: &'static str,
    pub visibility: Visibility,
    /// Number of arguments the procedure takes
    pub arity: usize,
}

impl RuleEntry {
    pub const fn public(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            arity: 0,
        }
    }

    pub const fn private(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Private,
            arity: 0,
        }
    }

    pub const fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Callable by name with no arguments
    pub fn is_entry_point(&self) -> bool {
        self.arity == 0
    }
}

/// Parser capability
///
/// `invoke_rule` runs a rule procedure by name against the token stream the
/// parser was built over. A rejection under the fail-fast strategy comes back
/// as `RuleFailure::Cancelled`.
pub trait Parser {
    fn source_name(&self) -> &str;

    fn set_error_strategy(&mut self, strategy: Box<dyn ErrorStrategy>);

    fn rule_table(&self) -> &'static [RuleEntry];

    fn invoke_rule(&mut self, name: &str) -> Result<(), RuleFailure>;

    /// Errors reported and recovered from by the installed strategy
    fn syntax_errors(&self) -> &[RecognitionError];
}

/// Construct a parser over a buffered token stream
pub type ParserFactory = fn(BufferedTokenStream) -> Result<Box<dyn Parser>, ConstructionFailure>;

/// Token stream, error strategy and vocabulary shared by generated parsers
pub struct ParserCore {
    input: BufferedTokenStream,
    strategy: Box<dyn ErrorStrategy>,
    /// Display names indexed by token kind
    vocabulary: &'static [&'static str],
}

impl ParserCore {
    pub fn new(input: BufferedTokenStream, vocabulary: &'static [&'static str]) -> Self {
        Self {
            input,
            strategy: Box::new(DefaultErrorStrategy::new()),
            vocabulary,
        }
    }

    pub fn source_name(&self) -> &str {
        self.input.source_name()
    }

    pub fn set_error_strategy(&mut self, strategy: Box<dyn ErrorStrategy>) {
        self.strategy = strategy;
    }

    pub fn syntax_errors(&self) -> &[RecognitionError] {
        self.strategy.reported()
    }

    pub fn la(&mut self, k: usize) -> i32 {
        self.input.la(k)
    }

    pub fn lt(&mut self, k: usize) -> Token {
        self.input.lt(k)
    }

    pub fn consume(&mut self) -> Token {
        self.input.consume()
    }

    pub fn display_name(&self, kind: i32) -> String {
        if kind == EOF {
            return "<EOF>".to_string();
        }
        usize::try_from(kind)
            .ok()
            .and_then(|i| self.vocabulary.get(i))
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("<{}>", kind))
    }

    fn describe(&self, kinds: &[i32]) -> String {
        match kinds {
            [single] => self.display_name(*single),
            _ => {
                let names: Vec<String> = kinds.iter().map(|k| self.display_name(*k)).collect();
                format!("{{{}}}", names.join(", "))
            }
        }
    }

    /// Match the current token against `kind` or hand the mismatch to the
    /// error strategy
    pub fn match_token(&mut self, kind: i32) -> Result<Token, RuleFailure> {
        if self.input.la(1) == kind {
            return Ok(self.input.consume());
        }

        let error = RecognitionError::mismatched(self.input.lt(1), vec![kind], &self.describe(&[kind]));
        self.strategy.recover_inline(&mut self.input, error)
    }

    /// Report that no alternative of a decision matched. `expected` lists the
    /// kinds that would have started one; `follow` is where to resynchronize.
    pub fn no_viable_alternative(
        &mut self,
        expected: &[i32],
        follow: &[i32],
    ) -> Result<(), RuleFailure> {
        let offending = self.input.lt(1);
        let error = if offending.is_eof() || expected.is_empty() {
            RecognitionError::no_viable_alternative(offending, expected.to_vec())
        } else {
            RecognitionError::mismatched(offending, expected.to_vec(), &self.describe(expected))
        };
        self.strategy.recover(&mut self.input, error, follow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::strategy::BailErrorStrategy;
    use crate::runtime::token_stream::tests::ScriptedSource;
    use assert_matches::assert_matches;

    const VOCABULARY: &[&str] = &["<INVALID>", "ID", "';'"];
    const ID: i32 = 1;
    const SEMI: i32 = 2;

    fn core(tokens: Vec<Token>) -> ParserCore {
        ParserCore::new(
            BufferedTokenStream::new(ScriptedSource::boxed(tokens)),
            VOCABULARY,
        )
    }

    #[test]
    fn test_match_token_consumes() {
        let mut core = core(vec![Token::new(ID, "x", 1, 0), Token::new(SEMI, ";", 1, 1)]);

        assert_eq!(core.match_token(ID).unwrap().text, "x");
        assert_eq!(core.match_token(SEMI).unwrap().text, ";");
        assert!(core.match_token(EOF).unwrap().is_eof());
    }

    #[test]
    fn test_bail_mismatch_message_names_expectation() {
        let mut core = core(vec![Token::new(ID, "x", 1, 4)]);
        core.set_error_strategy(Box::new(BailErrorStrategy::new()));

        let failure = core.match_token(SEMI).unwrap_err();
        assert_matches!(failure, RuleFailure::Cancelled(ref c)
            if c.message() == "line 1:4 mismatched input 'x' expecting ';'");
    }

    #[test]
    fn test_no_viable_alternative_lists_set() {
        let mut core = core(vec![Token::new(SEMI, ";", 2, 0)]);
        core.set_error_strategy(Box::new(BailErrorStrategy::new()));

        let failure = core.no_viable_alternative(&[ID, EOF], &[]).unwrap_err();
        assert_matches!(failure, RuleFailure::Cancelled(ref c)
            if c.message() == "line 2:0 mismatched input ';' expecting {ID, <EOF>}");
    }

    #[test]
    fn test_default_strategy_collects_errors() {
        let mut core = core(vec![Token::new(ID, "x", 1, 0)]);

        core.match_token(SEMI).unwrap();
        assert_eq!(core.syntax_errors().len(), 1);
    }

    #[test]
    fn test_rule_entry_constructors() {
        assert!(RuleEntry::public("startRule").is_entry_point());
        assert!(!RuleEntry::public("expr").with_arity(1).is_entry_point());
        assert_eq!(RuleEntry::private("helper").visibility, Visibility::Private);
    }
}
