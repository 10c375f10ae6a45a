//! In-process symbol space that generated grammars register into

use super::error::RegistryError;
use crate::logging::codes;
use crate::log_error;
use crate::runtime::{LexerFactory, ParserFactory};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Lexer,
    Parser,
    /// Anything else living in the same namespace (listeners, visitors)
    Opaque,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Lexer => "lexer",
            Capability::Parser => "parser",
            Capability::Opaque => "type",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Constructor {
    /// Builds from a character source
    Lexer(LexerFactory),
    /// Builds from a buffered token stream
    Parser(ParserFactory),
}

/// What the symbol space knows about one registered name
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub name: String,
    pub capability: Capability,
    pub constructor: Option<Constructor>,
}

impl TypeDescriptor {
    pub fn lexer(name: &str, factory: LexerFactory) -> Self {
        Self {
            name: name.to_string(),
            capability: Capability::Lexer,
            constructor: Some(Constructor::Lexer(factory)),
        }
    }

    pub fn parser(name: &str, factory: ParserFactory) -> Self {
        Self {
            name: name.to_string(),
            capability: Capability::Parser,
            constructor: Some(Constructor::Parser(factory)),
        }
    }

    /// A name with a capability but no usable constructor
    pub fn without_constructor(name: &str, capability: Capability) -> Self {
        Self {
            name: name.to_string(),
            capability,
            constructor: None,
        }
    }
}

/// Name lookup over loadable implementations
pub trait SymbolSpace {
    fn lookup(&self, name: &str) -> Option<&TypeDescriptor>;

    /// Every registered name, sorted
    fn names(&self) -> Vec<&str>;
}

#[derive(Debug, Default)]
pub struct SymbolRegistry {
    symbols: BTreeMap<String, TypeDescriptor>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_lexer(&mut self, name: &str, factory: LexerFactory) -> Result<(), RegistryError> {
        self.register_type(TypeDescriptor::lexer(name, factory))
    }

    pub fn register_parser(
        &mut self,
        name: &str,
        factory: ParserFactory,
    ) -> Result<(), RegistryError> {
        self.register_type(TypeDescriptor::parser(name, factory))
    }

    pub fn register_type(&mut self, descriptor: TypeDescriptor) -> Result<(), RegistryError> {
        if descriptor.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if self.symbols.contains_key(&descriptor.name) {
            log_error!(codes::resolution::DUPLICATE_SYMBOL, "Duplicate symbol registration",
                "symbol" => &descriptor.name
            );
            return Err(RegistryError::DuplicateSymbol {
                name: descriptor.name,
            });
        }

        self.symbols.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.symbols.values()
    }
}

impl SymbolSpace for SymbolRegistry {
    fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.symbols.get(name)
    }

    fn names(&self) -> Vec<&str> {
        self.symbols.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{BufferedTokenStream, CharStream, ConstructionFailure, Parser, TokenSource};
    use assert_matches::assert_matches;

    fn failing_lexer(_input: CharStream) -> Result<Box<dyn TokenSource>, ConstructionFailure> {
        Err(ConstructionFailure::new("unused"))
    }

    fn failing_parser(_input: BufferedTokenStream) -> Result<Box<dyn Parser>, ConstructionFailure> {
        Err(ConstructionFailure::new("unused"))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SymbolRegistry::new();
        registry.register_lexer("foo.SnafuLexer", failing_lexer).unwrap();
        registry.register_parser("foo.SnafuParser", failing_parser).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["foo.SnafuLexer", "foo.SnafuParser"]);
        assert_eq!(
            registry.lookup("foo.SnafuLexer").map(|d| d.capability),
            Some(Capability::Lexer)
        );
        assert!(registry.lookup("SnafuLexer").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = SymbolRegistry::new();
        registry.register_lexer("SnafuLexer", failing_lexer).unwrap();

        let result = registry.register_type(TypeDescriptor::without_constructor(
            "SnafuLexer",
            Capability::Opaque,
        ));
        assert_matches!(result, Err(RegistryError::DuplicateSymbol { ref name }) if name == "SnafuLexer");
        assert_eq!(
            registry.lookup("SnafuLexer").map(|d| d.capability),
            Some(Capability::Lexer)
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = SymbolRegistry::new();
        assert_matches!(
            registry.register_lexer(" ", failing_lexer),
            Err(RegistryError::EmptyName)
        );
        assert!(registry.is_empty());
    }
}
