// Space group construction: closes the generator set of a symbol into the
// full list of symmetry operations and reads the result back apart.

use log::debug;
use nalgebra::Vector3;

use crate::config::MAX_GROUP_ORDER;
use crate::error::SymbolError;
use crate::groups::analyzer::derive_generators;
use crate::groups::laue_class::LaueClass;
use crate::matrices::symmetry_matrix::{MatrixKind, SymmetryMatrix};
use crate::symbol::symbol_types::{Centering, Direction, Operator, Symbol};
use crate::Result;

/// A fully generated space group and the class it was built under.
pub struct SpaceGroup {
    pub operations: Vec<SymmetryMatrix>,
    pub class: &'static LaueClass,
}

/// Everything the verification and canonicalization steps want to know about
/// a generated group: its directional operations sorted into one bucket per
/// slot direction, the pure lattice translations, and whether an inversion
/// center is present.
pub struct Extraction {
    pub buckets: [Vec<(Operator, SymmetryMatrix)>; 6],
    pub translations: Vec<Vector3<i8>>,
    pub has_inversion: bool,
}

impl Extraction {
    pub fn bucket(&self, direction: Direction) -> &[(Operator, SymmetryMatrix)] {
        &self.buckets[direction.index()]
    }
}

impl SpaceGroup {
    /// Generates the full operation list of a standardized symbol.
    ///
    /// The point generators are closed first, then the centering cosets are
    /// layered on top. Exceeding the largest possible group order, or
    /// failing to close at all, rejects the symbol.
    ///
    /// # Arguments
    /// * `symbol` - standardized symbol; slot directions are written into it
    /// * `class` - the Laue class the symbol belongs to
    pub fn generate(symbol: &mut Symbol, class: &'static LaueClass) -> Result<Self> {
        if !class.centerings.contains(symbol.centering.as_char()) {
            return Err(SymbolError::InvalidGroup(format!(
                "{} centering does not occur in the {} family",
                symbol.centering.as_char(),
                class.name
            )));
        }
        let generators = derive_generators(symbol, class)?;
        let mut operations = vec![SymmetryMatrix::identity()];
        loop {
            let before = operations.len();
            for generator in &generators {
                saturate(&mut operations, generator)?;
            }
            if operations.len() == before {
                break;
            }
        }
        for vector in symbol.centering.coset_vectors() {
            let shift =
                SymmetryMatrix::pure_translation(Vector3::new(vector[0], vector[1], vector[2]));
            saturate(&mut operations, &shift)?;
        }
        for left in &operations {
            for right in &operations {
                if !operations.contains(&left.times(right)) {
                    return Err(SymbolError::InvalidGroup(format!(
                        "operations of '{}' do not close into a group",
                        symbol.format()
                    )));
                }
            }
        }
        debug!(
            "'{}' closed into {} operations from {} generators",
            symbol.format(),
            operations.len(),
            generators.len()
        );
        Ok(SpaceGroup {
            operations,
            class,
        })
    }

    /// Sorts the operations back into per-direction buckets of operators.
    pub fn extract(&self) -> Result<Extraction> {
        let manager = self.class.manager();
        let mut extraction = Extraction {
            buckets: Default::default(),
            translations: Vec::new(),
            has_inversion: false,
        };
        for matrix in &self.operations {
            match matrix.kind {
                MatrixKind::Identity => {}
                MatrixKind::Translation => extraction.translations.push(matrix.translation),
                MatrixKind::Inversion => extraction.has_inversion = true,
                _ => {
                    let (operator, raw) = manager.determine_operator(matrix)?;
                    let representative = self.class.representative(raw);
                    extraction.buckets[representative.index()].push((operator, matrix.clone()));
                }
            }
        }
        Ok(extraction)
    }
}

/// Left-multiplies every known operation by `generator` until nothing new
/// appears. Newly added products are themselves multiplied, so one call
/// saturates the set under arbitrary powers of the generator.
fn saturate(operations: &mut Vec<SymmetryMatrix>, generator: &SymmetryMatrix) -> Result<()> {
    let mut index = 0;
    while index < operations.len() {
        let product = generator.times(&operations[index]);
        if !operations.contains(&product) {
            operations.push(product);
            if operations.len() > MAX_GROUP_ORDER {
                return Err(SymbolError::InvalidGroup(format!(
                    "group exceeds {MAX_GROUP_ORDER} operations"
                )));
            }
        }
        index += 1;
    }
    Ok(())
}

/// Reads the centering off the pure translations a group accumulated.
///
/// Rejects the group when the translations match no conventional lattice,
/// which happens when a symbol mixes a centering with operators that
/// generate a different one.
pub fn derive_centering(translations: &[Vector3<i8>]) -> Result<Centering> {
    let mut face_a = false;
    let mut face_b = false;
    let mut face_c = false;
    let mut body = false;
    let mut rhombo_up = false;
    let mut rhombo_down = false;
    for translation in translations {
        match (translation[0], translation[1], translation[2]) {
            (0, 6, 6) => face_a = true,
            (6, 0, 6) => face_b = true,
            (6, 6, 0) => face_c = true,
            (6, 6, 6) => body = true,
            (8, 4, 4) => rhombo_up = true,
            (4, 8, 8) => rhombo_down = true,
            _ => {
                return Err(SymbolError::InvalidGroup(format!(
                    "unrecognized lattice translation ({}, {}, {})",
                    translation[0], translation[1], translation[2]
                )))
            }
        }
    }
    match (face_a, face_b, face_c, body, rhombo_up, rhombo_down) {
        (false, false, false, false, false, false) => Ok(Centering::P),
        (true, true, true, false, false, false) => Ok(Centering::F),
        (true, false, false, false, false, false) => Ok(Centering::A),
        (false, true, false, false, false, false) => Ok(Centering::B),
        (false, false, true, false, false, false) => Ok(Centering::C),
        (false, false, false, true, false, false) => Ok(Centering::I),
        (false, false, false, false, true, true) => Ok(Centering::R),
        _ => Err(SymbolError::InvalidGroup(
            "lattice translations match no conventional centering".to_string(),
        )),
    }
}
