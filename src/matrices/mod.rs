// Matrices module: Contains the integer matrix representation of symmetry
// operations and the reference frames that translate between matrices and
// symbol operators

// ======================== MODULE DECLARATIONS ========================
pub mod matrix_manager;
pub mod symmetry_matrix;

// Test modules
mod _tests_matrix_manager;

// ======================== SYMMETRY MATRICES ========================
pub use symmetry_matrix::{
    MatrixKind,     // enum - classification by determinant and trace (rotation, reflection, ...)
    SymmetryMatrix, // struct - integer linear part with translation in twelfths
};

// ======================== REFERENCE FRAMES ========================
pub use matrix_manager::{
    MatrixManager, // struct - builds and recognizes operations in one crystal frame
    HEXAGONAL,     // static - frame for trigonal and hexagonal families
    STANDARD,      // static - frame for the orthogonal families
};
