use thiserror::Error;

/// Errors raised while digesting, validating or canonicalizing a
/// Hermann-Mauguin symbol.
///
/// `Malformed` is lexical: the text cannot be read as a symbol at all.
/// `InvalidGroup` is semantic: the text parses, but the operations it
/// implies do not form a self-consistent space group.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The text does not follow the symbol grammar.
    #[error("malformed symbol: {0}")]
    Malformed(String),

    /// The symbol parses but does not describe a real space group.
    #[error("invalid group: {0}")]
    InvalidGroup(String),
}
