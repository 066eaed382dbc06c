// Symbol module: Contains the textual side of Hermann-Mauguin handling
// This module provides the symbol value types, the strict parser for the
// formatted form and the tokenizer for free-form input

// ======================== MODULE DECLARATIONS ========================
pub mod digest;
pub mod normalize;
pub mod symbol_types;


// ======================== SYMBOL VALUE TYPES ========================
pub use symbol_types::{
    Centering,  // enum - lattice centering letters (P, A, B, C, I, F, R)
    Direction,  // enum - viewing directions of operator slots (A, B, C, diagonals)
    Operator,   // struct - one directional operator: order, screw, rotoinversion, plane
    Reflection, // enum - plane letters (m, a, b, c, n, d plus internal g and e)
    Symbol,     // struct - centering plus ordered operators
};

// ======================== PARSING ========================
pub use digest::digest; // fn(formatted: &str) -> Result<Symbol> - parses a formatted symbol

// ======================== TOKENIZATION ========================
pub use normalize::normalize_to_formatted; // fn(raw: &str) -> Result<String> - splits free-form input into the formatted form
