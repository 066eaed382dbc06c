// Canonical module: Contains setting standardization, the special-case
// table and the canonicalization pipeline built on top of the group engine

// ======================== MODULE DECLARATIONS ========================
pub mod canonicalizer;
pub mod setting;
pub mod special_cases;

mod _tests_setting;

// ======================== CANONICALIZATION API ========================
pub use canonicalizer::{
    canonicalize,        // fn(formatted: &str) -> Result<String> - canonical spelling of a symbol
    generate_operations, // fn(formatted: &str) -> Result<Vec<SymmetryMatrix>> - full operation list
    is_valid,            // fn(formatted: &str) -> bool - whether the symbol names a space group
};

// validity oracle shared with the tokenizer
pub(crate) use canonicalizer::symbol_is_valid;
