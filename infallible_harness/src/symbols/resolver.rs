//! Grammar identity + role -> qualified name -> constructible symbol

use super::error::ResolutionError;
use super::registry::{Capability, Constructor, SymbolSpace};
use crate::config::constants::compile_time::resolution::{
    LEXER_SUFFIX, MAX_SYMBOL_SUGGESTIONS, PARSER_SUFFIX,
};
use crate::config::GrammarIdentity;
use crate::logging::codes;
use crate::runtime::{
    BufferedTokenStream, CharStream, ConstructionFailure, LexerFactory, Parser, ParserFactory,
    TokenSource,
};
use crate::{log_error, log_info, log_success};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Lexer,
    Parser,
}

impl Role {
    pub fn suffix(&self) -> &'static str {
        match self {
            Role::Lexer => LEXER_SUFFIX,
            Role::Parser => PARSER_SUFFIX,
        }
    }

    fn capability(&self) -> Capability {
        match self {
            Role::Lexer => Capability::Lexer,
            Role::Parser => Capability::Parser,
        }
    }

    fn constructor_shape(&self) -> &'static str {
        match self {
            Role::Lexer => "char-stream",
            Role::Parser => "token-stream",
        }
    }
}

/// `namespace.grammarSuffix`, or `grammarSuffix` in the default namespace
pub fn qualified_name(namespace: &str, grammar_name: &str, suffix: &str) -> String {
    let mut buffer = String::with_capacity(namespace.len() + grammar_name.len() + suffix.len() + 1);
    if !namespace.is_empty() {
        buffer.push_str(namespace);
        buffer.push('.');
    }
    buffer.push_str(grammar_name);
    buffer.push_str(suffix);
    buffer
}

#[derive(Debug, Clone)]
pub struct LexerSymbol {
    name: String,
    factory: LexerFactory,
}

impl LexerSymbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn construct(&self, input: CharStream) -> Result<Box<dyn TokenSource>, ConstructionFailure> {
        (self.factory)(input)
    }
}

#[derive(Debug, Clone)]
pub struct ParserSymbol {
    name: String,
    factory: ParserFactory,
}

impl ParserSymbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn construct(
        &self,
        input: BufferedTokenStream,
    ) -> Result<Box<dyn Parser>, ConstructionFailure> {
        (self.factory)(input)
    }
}

/// A resolved implementation tagged by role
#[derive(Debug, Clone)]
pub enum ImplementationSymbol {
    Lexer(LexerSymbol),
    Parser(ParserSymbol),
}

impl ImplementationSymbol {
    pub fn name(&self) -> &str {
        match self {
            ImplementationSymbol::Lexer(symbol) => symbol.name(),
            ImplementationSymbol::Parser(symbol) => symbol.name(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ImplementationSymbol::Lexer(_) => Role::Lexer,
            ImplementationSymbol::Parser(_) => Role::Parser,
        }
    }
}

pub struct SymbolResolver<'a> {
    space: &'a dyn SymbolSpace,
}

impl<'a> SymbolResolver<'a> {
    pub fn new(space: &'a dyn SymbolSpace) -> Self {
        Self { space }
    }

    /// Resolve the implementation playing `role` for a grammar
    pub fn resolve(
        &self,
        namespace: &str,
        grammar_name: &str,
        role: Role,
    ) -> Result<ImplementationSymbol, ResolutionError> {
        let name = qualified_name(namespace, grammar_name, role.suffix());
        let kind = match role {
            Role::Lexer => "lexer",
            Role::Parser => "parser",
        };
        log_info!(&format!("Using {} class '{}'", kind, name));

        let result = self.lookup(&name, grammar_name, role);
        match &result {
            Ok(_) => {
                log_success!(codes::success::SYMBOL_RESOLVED, "Symbol resolved",
                    "symbol" => &name,
                    "role" => role.suffix()
                );
            }
            Err(error) => {
                log_error!(error.error_code(), &error.to_string(),
                    "symbol" => error.symbol_name()
                );
            }
        }
        result
    }

    fn lookup(
        &self,
        name: &str,
        grammar_name: &str,
        role: Role,
    ) -> Result<ImplementationSymbol, ResolutionError> {
        let descriptor = self
            .space
            .lookup(name)
            .ok_or_else(|| ResolutionError::NotFound {
                name: name.to_string(),
                suggestions: self.suggestions(grammar_name),
            })?;

        if descriptor.capability != role.capability() {
            return Err(ResolutionError::WrongCapability {
                name: name.to_string(),
                required: role.capability().as_str(),
            });
        }

        match (role, descriptor.constructor) {
            (Role::Lexer, Some(Constructor::Lexer(factory))) => {
                Ok(ImplementationSymbol::Lexer(LexerSymbol {
                    name: name.to_string(),
                    factory,
                }))
            }
            (Role::Parser, Some(Constructor::Parser(factory))) => {
                Ok(ImplementationSymbol::Parser(ParserSymbol {
                    name: name.to_string(),
                    factory,
                }))
            }
            _ => Err(ResolutionError::MissingConstructor {
                name: name.to_string(),
                expected: role.constructor_shape(),
            }),
        }
    }

    fn suggestions(&self, grammar_name: &str) -> Vec<String> {
        self.space
            .names()
            .into_iter()
            .filter(|candidate| !grammar_name.is_empty() && candidate.contains(grammar_name))
            .take(MAX_SYMBOL_SUGGESTIONS)
            .map(str::to_string)
            .collect()
    }

    pub fn resolve_lexer(&self, identity: &GrammarIdentity) -> Result<LexerSymbol, ResolutionError> {
        match self.resolve(identity.namespace(), identity.grammar_name(), Role::Lexer)? {
            ImplementationSymbol::Lexer(symbol) => Ok(symbol),
            ImplementationSymbol::Parser(symbol) => Err(ResolutionError::WrongCapability {
                name: symbol.name,
                required: Capability::Lexer.as_str(),
            }),
        }
    }

    pub fn resolve_parser(
        &self,
        identity: &GrammarIdentity,
    ) -> Result<ParserSymbol, ResolutionError> {
        match self.resolve(identity.namespace(), identity.grammar_name(), Role::Parser)? {
            ImplementationSymbol::Parser(symbol) => Ok(symbol),
            ImplementationSymbol::Lexer(symbol) => Err(ResolutionError::WrongCapability {
                name: symbol.name,
                required: Capability::Parser.as_str(),
            }),
        }
    }
}
