// Constants

// Translation arithmetic
pub const TWELFTHS: i8 = 12; // translations are stored in twelfths of a cell edge

// Group generation
pub const MAX_GROUP_ORDER: usize = 192; // order of F m -3 m, the largest space group

// Symbol shape
pub const MAX_OPERATORS: usize = 3; // a symbol carries at most three directional operators
pub const MAX_TOKEN_LEN: usize = 4; // longest operator token, e.g. "63/m"

// Canonicalization
pub const MAX_CANONICAL_PASSES: usize = 3; // re-runs until the spelling reaches a fixed point

// Command line defaults
pub const DEFAULT_LOG_FILTER: &str = "info";
