// Generator derivation: turns a classified symbol into the minimal set of
// symmetry matrices whose closure reproduces the named group.

use nalgebra::Vector3;

use crate::groups::laue_class::{LaueClass, LaueFamily};
use crate::matrices::matrix_manager::{screw_step, MatrixManager};
use crate::matrices::symmetry_matrix::SymmetryMatrix;
use crate::symbol::symbol_types::{Direction, Reflection, Symbol};
use crate::Result;

/// Derives the generator matrices of a symbol.
///
/// Pins the viewing direction of each operator slot first, so that later
/// verification can compare operators against the operations found along
/// their own direction. Slots beyond the class schema keep no direction.
///
/// # Arguments
/// * `symbol` - standardized symbol; slot directions are written back into it
/// * `class` - the Laue class the symbol was classified into
///
/// # Returns
/// * `Ok(Vec<SymmetryMatrix>)` - generators, possibly empty for P 1
/// * `Err(SymbolError::InvalidGroup)` - an operator cannot be built in this frame
pub fn derive_generators(
    symbol: &mut Symbol,
    class: &'static LaueClass,
) -> Result<Vec<SymmetryMatrix>> {
    for (slot, operator) in symbol.operators.iter_mut().enumerate() {
        operator.direction = class.directions.get(slot).copied();
    }
    let manager = class.manager();
    match class.family {
        LaueFamily::Triclinic => Ok(triclinic(symbol)),
        LaueFamily::CubicLow => cubic_low(symbol, manager),
        LaueFamily::CubicRotation => cubic_rotation(symbol, manager),
        LaueFamily::CubicHigh => cubic_high(symbol, manager),
        LaueFamily::Monoclinic
        | LaueFamily::TetragonalLow
        | LaueFamily::TrigonalLow
        | LaueFamily::RhombohedralLow
        | LaueFamily::HexagonalLow
        | LaueFamily::RhombohedralHigh => per_operator(symbol, manager),
        LaueFamily::Orthorhombic
        | LaueFamily::TetragonalHigh
        | LaueFamily::HexagonalHigh
        | LaueFamily::TrigonalTertiary
        | LaueFamily::TrigonalSecondary => three_slot(symbol, class, manager),
    }
}

fn triclinic(symbol: &Symbol) -> Vec<SymmetryMatrix> {
    if symbol
        .operators
        .iter()
        .any(|operator| operator.rotoinversion)
    {
        vec![SymmetryMatrix::inversion()]
    } else {
        Vec::new()
    }
}

/// Families whose slots act independently: every slot contributes its own
/// axis and plane.
fn per_operator(symbol: &Symbol, manager: &MatrixManager) -> Result<Vec<SymmetryMatrix>> {
    let mut generators = Vec::new();
    for operator in &symbol.operators {
        let direction = match operator.direction {
            Some(direction) => direction,
            None => continue,
        };
        if operator.has_rotation() {
            generators.push(manager.build_rotation(
                operator.order,
                direction,
                operator.screw,
                operator.rotoinversion,
            )?);
        }
        if let Some(letter) = operator.reflection {
            generators.push(manager.build_mirror(direction, letter)?);
        }
    }
    Ok(generators)
}

fn three_slot(
    symbol: &Symbol,
    class: &'static LaueClass,
    manager: &MatrixManager,
) -> Result<Vec<SymmetryMatrix>> {
    let has_planes = symbol
        .operators
        .iter()
        .any(|operator| operator.reflection.is_some());
    if has_planes {
        with_planes(symbol, manager)
    } else {
        pure_rotations(symbol, class, manager)
    }
}

/// Rotation-only symbols. The leading axis and one secondary axis suffice
/// for the tetragonal and hexagonal families; their product restores the
/// principal rotation, screw translations included once the secondary
/// generator is lifted by the principal screw step.
fn pure_rotations(
    symbol: &Symbol,
    class: &'static LaueClass,
    manager: &MatrixManager,
) -> Result<Vec<SymmetryMatrix>> {
    let operators = &symbol.operators;
    let first = &operators[0];
    let mut generators = Vec::new();
    match class.family {
        LaueFamily::TrigonalTertiary | LaueFamily::TrigonalSecondary => {
            generators.push(manager.build_rotation(
                first.order,
                Direction::C,
                first.screw,
                first.rotoinversion,
            )?);
            for operator in &operators[1..] {
                if let (true, Some(direction)) = (operator.has_rotation(), operator.direction) {
                    generators.push(manager.build_rotation(
                        operator.order,
                        direction,
                        operator.screw,
                        false,
                    )?);
                }
            }
        }
        LaueFamily::Orthorhombic => {
            if first.has_rotation() {
                generators.push(manager.build_rotation(2, Direction::A, first.screw, false)?);
            }
            let second = &operators[1];
            if second.has_rotation() {
                let base = manager.build_rotation(2, Direction::B, second.screw, false)?;
                let lift = Vector3::new(0, 0, screw_step(2, operators[2].screw));
                generators.push(SymmetryMatrix::new(base.linear, base.translation + lift));
            }
        }
        _ => {
            // tetragonal or hexagonal: skip the principal slot
            let second = &operators[1];
            if let (true, Some(direction)) = (second.has_rotation(), second.direction) {
                generators.push(manager.build_rotation(2, direction, second.screw, false)?);
            }
            let third = &operators[2];
            if let (true, Some(direction)) = (third.has_rotation(), third.direction) {
                let base = manager.build_rotation(2, direction, third.screw, false)?;
                let lift = Vector3::new(0, 0, screw_step(first.order, first.screw));
                generators.push(SymmetryMatrix::new(base.linear, base.translation + lift));
            }
        }
    }
    Ok(generators)
}

/// Symbols that name at least one plane. Planes generate compactly, so every
/// named plane becomes a generator and rotations are added only where no
/// pair of planes can reproduce them.
fn with_planes(symbol: &Symbol, manager: &MatrixManager) -> Result<Vec<SymmetryMatrix>> {
    let operators = &symbol.operators;
    let mut generators = Vec::new();
    for operator in operators {
        if let (Some(letter), Some(direction)) = (operator.reflection, operator.direction) {
            generators.push(manager.build_mirror(direction, letter)?);
        }
    }
    let first = &operators[0];
    let direction = match first.direction {
        Some(direction) => direction,
        None => return Ok(generators),
    };
    if first.rotoinversion {
        generators.push(manager.build_rotation(first.order, direction, 0, true)?);
    } else if first.has_rotation() {
        let trailing_planes =
            operators[1].reflection.is_some() && operators[2].reflection.is_some();
        if !trailing_planes {
            generators.push(manager.build_rotation(first.order, direction, first.screw, false)?);
        }
    }
    Ok(generators)
}

/// The m-3 family: a two-fold or plane along the axes and a three-fold on
/// the body diagonals. The axial screw convention places the 21 of P213 at
/// (1/2, 0, 1/2), where the cubic closure works out.
fn cubic_low(symbol: &Symbol, manager: &MatrixManager) -> Result<Vec<SymmetryMatrix>> {
    let axial = &symbol.operators[0];
    let principal = &symbol.operators[1];
    let mut generators = Vec::new();
    if axial.has_rotation() {
        let base = manager.build_rotation(2, Direction::C, 0, false)?;
        let translation = if axial.screw > 0 {
            Vector3::new(6, 0, 6)
        } else {
            Vector3::zeros()
        };
        generators.push(SymmetryMatrix::new(base.linear, translation));
    }
    if let Some(letter) = axial.reflection {
        generators.push(axial_cubic_mirror(manager, letter)?);
    }
    generators.push(manager.build_rotation(
        3,
        Direction::BodyDiagonal,
        0,
        principal.rotoinversion,
    )?);
    Ok(generators)
}

/// Axial cubic glides a and b close against the body-diagonal three-fold
/// with their plane at z = 1/4, as in Pa-3. The other letters stay at the
/// origin.
fn axial_cubic_mirror(manager: &MatrixManager, letter: Reflection) -> Result<SymmetryMatrix> {
    let base = manager.build_mirror(Direction::C, letter)?;
    let offset = match letter {
        Reflection::A | Reflection::B => Vector3::new(0, 0, 6),
        _ => Vector3::zeros(),
    };
    Ok(SymmetryMatrix::new(base.linear, base.translation + offset))
}

/// 432 and -43m: the tertiary slot carries the whole translation content.
/// A screwed principal axis shifts the tertiary two-fold off the origin by
/// quarter steps, which is what tells P4132 from P4332. A tertiary plane
/// keeps the three-fold axis in place, so the -4 must come along as its own
/// generator, at the quarter position for d glides.
fn cubic_rotation(symbol: &Symbol, manager: &MatrixManager) -> Result<Vec<SymmetryMatrix>> {
    let first = &symbol.operators[0];
    let tertiary = &symbol.operators[2];
    let mut generators = vec![manager.build_rotation(3, Direction::BodyDiagonal, 0, false)?];
    if let Some(letter) = tertiary.reflection {
        generators.push(manager.build_mirror(Direction::AltFaceDiagonal, letter)?);
        let axis = manager.build_rotation(4, Direction::C, 0, true)?;
        let offset = if letter == Reflection::D {
            Vector3::new(9, 3, 9)
        } else {
            Vector3::zeros()
        };
        generators.push(SymmetryMatrix::new(axis.linear, offset));
    } else if tertiary.has_rotation() {
        let step = 3 * first.screw as i8;
        let base = manager.build_rotation(2, Direction::FaceDiagonal, 0, false)?;
        let translation = Vector3::new(12 - step, step, step);
        generators.push(SymmetryMatrix::new(base.linear, translation));
    }
    Ok(generators)
}

/// m-3m: an axial plane, the body-diagonal three-fold and a tertiary plane
/// close into the full 192-strong family once centering is applied.
fn cubic_high(symbol: &Symbol, manager: &MatrixManager) -> Result<Vec<SymmetryMatrix>> {
    let axial = &symbol.operators[0];
    let principal = &symbol.operators[1];
    let tertiary = &symbol.operators[2];
    let mut generators = Vec::new();
    if let Some(letter) = axial.reflection {
        generators.push(axial_cubic_mirror(manager, letter)?);
    } else if axial.has_rotation() {
        generators.push(manager.build_rotation(
            axial.order,
            Direction::C,
            axial.screw,
            axial.rotoinversion,
        )?);
    }
    generators.push(manager.build_rotation(
        3,
        Direction::BodyDiagonal,
        0,
        principal.rotoinversion,
    )?);
    if let Some(letter) = tertiary.reflection {
        generators.push(manager.build_mirror(Direction::AltFaceDiagonal, letter)?);
    } else if tertiary.has_rotation() {
        generators.push(manager.build_rotation(
            2,
            Direction::FaceDiagonal,
            tertiary.screw,
            false,
        )?);
    }
    Ok(generators)
}
