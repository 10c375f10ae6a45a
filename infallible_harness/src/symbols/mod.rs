//! Symbol space and resolution of a grammar's lexer and parser
//!
//! Grammars are found by name only: namespace + grammar name + role suffix.
//! Resolution happens once per run and the resulting symbols are reused for
//! every source file.

mod error;
mod registry;
mod resolver;

pub use error::{RegistryError, ResolutionError};
pub use registry::{Capability, Constructor, SymbolRegistry, SymbolSpace, TypeDescriptor};
pub use resolver::{
    qualified_name, ImplementationSymbol, LexerSymbol, ParserSymbol, Role, SymbolResolver,
};
