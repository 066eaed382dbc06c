// Laue class registry: the symbol families recognized by the engine
// Each class fixes the viewing directions of a symbol, the rotation order
// expected along each of them, and the lattice centerings that occur.

use crate::error::SymbolError;
use crate::matrices::matrix_manager::{MatrixManager, HEXAGONAL, STANDARD};
use crate::symbol::symbol_types::{Centering, Direction, Operator, Reflection};
use crate::Result;

/// Discriminates the fifteen descriptor families used to classify symbols.
///
/// The split is finer than the eleven Laue classes proper: trigonal symbols
/// with secondary versus tertiary two-fold axes get separate descriptors, as
/// do rhombohedral lattices and the two flavours of high cubic symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaueFamily {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    TetragonalLow,
    TetragonalHigh,
    TrigonalLow,
    RhombohedralLow,
    TrigonalTertiary,
    TrigonalSecondary,
    RhombohedralHigh,
    HexagonalLow,
    HexagonalHigh,
    CubicLow,
    CubicRotation,
    CubicHigh,
}

/// Descriptor for one symbol family.
///
/// `directions` lists the viewing direction of each operator slot in symbol
/// order, `expected_orders` the highest rotation order a group of this family
/// shows along each of them. `hexagonal` selects the reference frame and
/// `requires_both` marks families whose leading slot prints axis and plane
/// together (`21/c`, `4/m`, `63/m`).
pub struct LaueClass {
    pub name: &'static str,
    pub family: LaueFamily,
    pub directions: &'static [Direction],
    pub expected_orders: &'static [u8],
    pub centerings: &'static str,
    pub hexagonal: bool,
    pub requires_both: bool,
}

pub static TRICLINIC: LaueClass = LaueClass {
    name: "-1",
    family: LaueFamily::Triclinic,
    directions: &[],
    expected_orders: &[],
    centerings: "P",
    hexagonal: false,
    requires_both: false,
};

pub static MONOCLINIC: LaueClass = LaueClass {
    name: "2/m",
    family: LaueFamily::Monoclinic,
    directions: &[Direction::B],
    expected_orders: &[2],
    centerings: "PC",
    hexagonal: false,
    requires_both: true,
};

pub static ORTHORHOMBIC: LaueClass = LaueClass {
    name: "mmm",
    family: LaueFamily::Orthorhombic,
    directions: &[Direction::A, Direction::B, Direction::C],
    expected_orders: &[2, 2, 2],
    centerings: "PABCIF",
    hexagonal: false,
    requires_both: false,
};

pub static TETRAGONAL_LOW: LaueClass = LaueClass {
    name: "4/m",
    family: LaueFamily::TetragonalLow,
    directions: &[Direction::C],
    expected_orders: &[4],
    centerings: "PI",
    hexagonal: false,
    requires_both: true,
};

pub static TETRAGONAL_HIGH: LaueClass = LaueClass {
    name: "4/mmm",
    family: LaueFamily::TetragonalHigh,
    directions: &[Direction::C, Direction::A, Direction::FaceDiagonal],
    expected_orders: &[4, 2, 2],
    centerings: "PI",
    hexagonal: false,
    requires_both: true,
};

pub static TRIGONAL_LOW: LaueClass = LaueClass {
    name: "-3",
    family: LaueFamily::TrigonalLow,
    directions: &[Direction::C],
    expected_orders: &[3],
    centerings: "P",
    hexagonal: true,
    requires_both: false,
};

pub static RHOMBOHEDRAL_LOW: LaueClass = LaueClass {
    name: "-3 (rhombohedral)",
    family: LaueFamily::RhombohedralLow,
    directions: &[Direction::C],
    expected_orders: &[3],
    centerings: "R",
    hexagonal: true,
    requires_both: false,
};

pub static TRIGONAL_TERTIARY: LaueClass = LaueClass {
    name: "-31m",
    family: LaueFamily::TrigonalTertiary,
    directions: &[Direction::C, Direction::A, Direction::AltFaceDiagonal],
    expected_orders: &[3, 1, 2],
    centerings: "P",
    hexagonal: true,
    requires_both: false,
};

pub static TRIGONAL_SECONDARY: LaueClass = LaueClass {
    name: "-3m1",
    family: LaueFamily::TrigonalSecondary,
    directions: &[Direction::C, Direction::A, Direction::AltFaceDiagonal],
    expected_orders: &[3, 2, 1],
    centerings: "P",
    hexagonal: true,
    requires_both: false,
};

pub static RHOMBOHEDRAL_HIGH: LaueClass = LaueClass {
    name: "-3m (rhombohedral)",
    family: LaueFamily::RhombohedralHigh,
    directions: &[Direction::C, Direction::A],
    expected_orders: &[3, 2],
    centerings: "R",
    hexagonal: true,
    requires_both: false,
};

pub static HEXAGONAL_LOW: LaueClass = LaueClass {
    name: "6/m",
    family: LaueFamily::HexagonalLow,
    directions: &[Direction::C],
    expected_orders: &[6],
    centerings: "P",
    hexagonal: true,
    requires_both: true,
};

pub static HEXAGONAL_HIGH: LaueClass = LaueClass {
    name: "6/mmm",
    family: LaueFamily::HexagonalHigh,
    directions: &[Direction::C, Direction::A, Direction::AltFaceDiagonal],
    expected_orders: &[6, 2, 2],
    centerings: "P",
    hexagonal: true,
    requires_both: true,
};

pub static CUBIC_LOW: LaueClass = LaueClass {
    name: "m-3",
    family: LaueFamily::CubicLow,
    directions: &[Direction::A, Direction::BodyDiagonal],
    expected_orders: &[2, 3],
    centerings: "PIF",
    hexagonal: false,
    requires_both: false,
};

pub static CUBIC_ROTATION: LaueClass = LaueClass {
    name: "m-3m (rotational)",
    family: LaueFamily::CubicRotation,
    directions: &[Direction::A, Direction::BodyDiagonal, Direction::FaceDiagonal],
    expected_orders: &[4, 3, 2],
    centerings: "PIF",
    hexagonal: false,
    requires_both: false,
};

pub static CUBIC_HIGH: LaueClass = LaueClass {
    name: "m-3m",
    family: LaueFamily::CubicHigh,
    directions: &[Direction::A, Direction::BodyDiagonal, Direction::FaceDiagonal],
    expected_orders: &[4, 3, 2],
    centerings: "PIF",
    hexagonal: false,
    requires_both: false,
};

impl LaueClass {
    /// Returns the reference frame matching this family.
    pub fn manager(&self) -> &'static MatrixManager {
        if self.hexagonal {
            &HEXAGONAL
        } else {
            &STANDARD
        }
    }

    /// Folds a raw operation direction onto the slot direction that stands
    /// for its symmetry family, so that equivalent axes share one bucket.
    pub fn representative(&self, raw: Direction) -> Direction {
        match self.family {
            LaueFamily::CubicLow | LaueFamily::CubicRotation | LaueFamily::CubicHigh => match raw {
                Direction::A | Direction::B | Direction::C => Direction::A,
                Direction::BodyDiagonal => Direction::BodyDiagonal,
                Direction::FaceDiagonal | Direction::AltFaceDiagonal => Direction::FaceDiagonal,
            },
            LaueFamily::TetragonalLow | LaueFamily::TetragonalHigh => match raw {
                Direction::B => Direction::A,
                Direction::AltFaceDiagonal => Direction::FaceDiagonal,
                other => other,
            },
            _ if self.hexagonal => match raw {
                // [010] and [110] close the secondary star around [100]
                Direction::B | Direction::FaceDiagonal => Direction::A,
                other => other,
            },
            _ => raw,
        }
    }

    /// Preference order used when a slot offers several glide letters.
    pub fn mirror_sequence(&self, centering: Centering, direction: Direction) -> &'static [Reflection] {
        const DEFAULT: [Reflection; 8] = [
            Reflection::M,
            Reflection::A,
            Reflection::B,
            Reflection::C,
            Reflection::N,
            Reflection::D,
            Reflection::G,
            Reflection::E,
        ];
        // Body centering pairs every b glide with a c glide and the
        // conventional tetragonal names quote the c (I4cm, I41/acd).
        const C_BEFORE_B: [Reflection; 8] = [
            Reflection::M,
            Reflection::A,
            Reflection::C,
            Reflection::B,
            Reflection::N,
            Reflection::D,
            Reflection::G,
            Reflection::E,
        ];
        let tetragonal = matches!(
            self.family,
            LaueFamily::TetragonalLow | LaueFamily::TetragonalHigh
        );
        if tetragonal
            && centering == Centering::I
            && matches!(direction, Direction::C | Direction::A)
        {
            &C_BEFORE_B
        } else {
            &DEFAULT
        }
    }
}

/// Determines the Laue class of a digested symbol from the shape of its
/// operator list.
///
/// # Arguments
/// * `centering` - lattice centering of the symbol
/// * `operators` - directional operators in symbol order
///
/// # Returns
/// * `Ok(&LaueClass)` - the matching descriptor
/// * `Err(SymbolError::InvalidGroup)` - no family fits the operator shape
pub fn classify(centering: Centering, operators: &[Operator]) -> Result<&'static LaueClass> {
    match operators {
        [single] => Ok(classify_single(centering, single)),
        [first, second] => classify_pair(centering, first, second),
        [first, second, third] => classify_triple(centering, first, second, third),
        _ => Err(SymbolError::InvalidGroup(
            "a symbol carries one to three operators".to_string(),
        )),
    }
}

fn classify_single(centering: Centering, operator: &Operator) -> &'static LaueClass {
    if operator.order <= 1 {
        if operator.reflection.is_some() {
            // a lone plane sits perpendicular to the unique monoclinic axis
            return &MONOCLINIC;
        }
        return &TRICLINIC;
    }
    match operator.order {
        2 => &MONOCLINIC,
        3 if centering == Centering::R => &RHOMBOHEDRAL_LOW,
        3 => &TRIGONAL_LOW,
        4 => &TETRAGONAL_LOW,
        _ => &HEXAGONAL_LOW,
    }
}

fn classify_pair(
    centering: Centering,
    first: &Operator,
    second: &Operator,
) -> Result<&'static LaueClass> {
    if second.order == 3 && second.reflection.is_none() && first.order <= 2 {
        // two-fold or plane along an axis, three-fold on the body diagonal
        return Ok(&CUBIC_LOW);
    }
    let secondary_two = second.order == 2 || (second.order <= 1 && second.reflection.is_some());
    if first.order == 3 && centering == Centering::R && secondary_two {
        return Ok(&RHOMBOHEDRAL_HIGH);
    }
    Err(SymbolError::InvalidGroup(format!(
        "cannot determine the Laue class of '{} {}'",
        first.format(),
        second.format()
    )))
}

fn classify_triple(
    centering: Centering,
    first: &Operator,
    second: &Operator,
    third: &Operator,
) -> Result<&'static LaueClass> {
    let shape_error = || {
        SymbolError::InvalidGroup(format!(
            "cannot determine the Laue class of '{} {} {}'",
            first.format(),
            second.format(),
            third.format()
        ))
    };
    let operators = [first, second, third];
    if operators.iter().all(|operator| operator.is_order_one()) {
        return Ok(&TRICLINIC);
    }
    let active = operators
        .iter()
        .filter(|operator| !operator.is_order_one())
        .count();
    if active == 1 {
        // one live slot padded with placeholders, e.g. P 1 21/c 1
        if operators
            .iter()
            .filter(|operator| operator.is_order_one())
            .all(|operator| operator.is_unity())
        {
            return Ok(&MONOCLINIC);
        }
        return Err(shape_error());
    }
    if second.order == 3 {
        if second.rotoinversion || first.reflection.is_some() {
            return Ok(&CUBIC_HIGH);
        }
        return Ok(&CUBIC_ROTATION);
    }
    match first.order {
        4 => {
            if second.is_unity() && third.is_unity() {
                Ok(&TETRAGONAL_LOW)
            } else {
                Ok(&TETRAGONAL_HIGH)
            }
        }
        6 => {
            if second.is_unity() && third.is_unity() {
                Ok(&HEXAGONAL_LOW)
            } else {
                Ok(&HEXAGONAL_HIGH)
            }
        }
        3 => {
            if second.is_unity() && third.is_unity() {
                if centering == Centering::R {
                    Ok(&RHOMBOHEDRAL_LOW)
                } else {
                    Ok(&TRIGONAL_LOW)
                }
            } else if second.is_unity() {
                Ok(&TRIGONAL_TERTIARY)
            } else if third.is_unity() {
                Ok(&TRIGONAL_SECONDARY)
            } else {
                Err(shape_error())
            }
        }
        _ => {
            let axial = operators.iter().all(|operator| operator.order <= 2);
            let bare_inversion = operators
                .iter()
                .any(|operator| operator.is_order_one() && operator.rotoinversion);
            if axial && !bare_inversion {
                Ok(&ORTHORHOMBIC)
            } else {
                Err(shape_error())
            }
        }
    }
}
