//! Hermann-Mauguin space group symbol engine
//!
//! This library parses, validates and canonicalizes space group symbols and
//! generates the full symmetry operation list a symbol stands for. Symbols
//! pass through a fixed pipeline: free-form input is tokenized into the
//! formatted form, digested into operators, classified into a Laue family,
//! standardized onto the conventional setting, closed into the full group
//! and finally re-spelled from the operations themselves.

pub mod canonical;
pub mod config;
pub mod error;
pub mod groups;
pub mod matrices;
pub mod symbol;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, error::SymbolError>;

pub use canonical::{canonicalize, generate_operations, is_valid};
pub use error::SymbolError;
pub use matrices::{MatrixKind, SymmetryMatrix};
pub use symbol::{digest, normalize_to_formatted, Centering, Operator, Reflection, Symbol};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
