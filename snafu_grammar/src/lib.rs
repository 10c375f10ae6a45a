//! Snafu: a small statement language used to exercise the conformance harness
//!
//! The lexer and parser are written in the shape a parser generator emits
//! for the harness runtime. `register` publishes them under
//! `foo.bar.baz.SnafuLexer` and `foo.bar.baz.SnafuParser`.

pub mod lexer;
pub mod parser;
pub mod tokens;

use infallible_harness::symbols::{
    qualified_name, Capability, RegistryError, SymbolRegistry, TypeDescriptor,
};

pub const NAMESPACE: &str = "foo.bar.baz";
pub const GRAMMAR_NAME: &str = "Snafu";

/// Register the Snafu lexer and parser, plus the listener type a generator
/// would emit next to them
pub fn register(registry: &mut SymbolRegistry) -> Result<(), RegistryError> {
    registry.register_lexer(&qualified_name(NAMESPACE, GRAMMAR_NAME, "Lexer"), lexer::create)?;
    registry.register_parser(
        &qualified_name(NAMESPACE, GRAMMAR_NAME, "Parser"),
        parser::create,
    )?;
    registry.register_type(TypeDescriptor::without_constructor(
        &qualified_name(NAMESPACE, GRAMMAR_NAME, "Listener"),
        Capability::Opaque,
    ))
}
