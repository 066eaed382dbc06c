// Groups module: Contains the Laue classification of symbols, generator
// derivation and the closure of generators into full space groups

// ======================== MODULE DECLARATIONS ========================
pub mod analyzer;
pub mod laue_class;
pub mod space_group;

mod _tests_space_group;

// ======================== LAUE CLASSIFICATION ========================
pub use laue_class::{
    classify,   // fn(centering: Centering, operators: &[Operator]) -> Result<&'static LaueClass>
    LaueClass,  // struct - directions, expected orders and centerings of one family
    LaueFamily, // enum - the fifteen descriptor families
};

// ======================== GENERATOR DERIVATION ========================
pub use analyzer::derive_generators; // fn(symbol: &mut Symbol, class: &LaueClass) -> Result<Vec<SymmetryMatrix>>

// ======================== SPACE GROUPS ========================
pub use space_group::{
    derive_centering, // fn(translations: &[Vector3<i8>]) -> Result<Centering> - reads centering off translations
    Extraction,       // struct - per-direction operator buckets, translations, inversion flag
    SpaceGroup,       // struct - generated operation list with its class
};
