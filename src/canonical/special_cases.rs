// Special-case symbols: the handful of I-centered groups whose canonical
// spelling cannot be chosen slot by slot.
//
// Body centering pairs every operation with a shifted twin, so Ibca offers
// two glide letters along every axis and I222/I23 share their operator
// lists with I212121/I213. These groups are recognized from the geometry
// of their operations and answered from a fixed table.

use std::sync::LazyLock;

use crate::groups::laue_class::{LaueClass, LaueFamily};
use crate::groups::space_group::Extraction;
use crate::matrices::matrix_manager::STANDARD;
use crate::matrices::symmetry_matrix::SymmetryMatrix;
use crate::symbol::digest::digest;
use crate::symbol::symbol_types::{Centering, Direction, Reflection, Symbol};

struct SpecialCases {
    ibca: Symbol,
    i222: Symbol,
    i212121: Symbol,
    i23: Symbol,
    i213: Symbol,
}

static SPECIAL_CASES: LazyLock<SpecialCases> = LazyLock::new(|| SpecialCases {
    ibca: bootstrap("I b c a"),
    i222: bootstrap("I 2 2 2"),
    i212121: bootstrap("I 21 21 21"),
    i23: bootstrap("I 2 3"),
    i213: bootstrap("I 21 3"),
});

fn bootstrap(formatted: &str) -> Symbol {
    // the five spellings are fixed; failing to digest one is a defect in
    // the table itself
    digest(formatted).expect("special-case symbol table")
}

/// Checks whether a generated group is one of the special cases and returns
/// its fixed spelling if so.
pub(crate) fn match_special(
    symbol: &Symbol,
    class: &'static LaueClass,
    extraction: &Extraction,
) -> Option<Symbol> {
    if symbol.centering != Centering::I {
        return None;
    }
    match class.family {
        LaueFamily::Orthorhombic => {
            let all_planes = symbol
                .operators
                .iter()
                .all(|operator| operator.reflection.is_some());
            if all_planes {
                return match_ibca(extraction);
            }
            let all_axes = symbol
                .operators
                .iter()
                .all(|operator| operator.order == 2 && operator.reflection.is_none());
            if all_axes {
                let meeting = axes_compose(extraction)?;
                return Some(if meeting {
                    SPECIAL_CASES.i222.clone()
                } else {
                    SPECIAL_CASES.i212121.clone()
                });
            }
            None
        }
        LaueFamily::CubicLow => {
            let axial = symbol.operators.first()?;
            if axial.has_rotation() && axial.reflection.is_none() {
                let meeting = axes_compose(extraction)?;
                return Some(if meeting {
                    SPECIAL_CASES.i23.clone()
                } else {
                    SPECIAL_CASES.i213.clone()
                });
            }
            None
        }
        _ => None,
    }
}

/// Ibca shows a b and a c glide perpendicular to a, and the matching pairs
/// along b and c, with no plain mirror anywhere. Any group doing the same
/// is Ibca in one of its relabelings.
fn match_ibca(extraction: &Extraction) -> Option<Symbol> {
    let letters = |direction: Direction| -> Vec<Reflection> {
        extraction
            .bucket(direction)
            .iter()
            .filter_map(|(operator, _)| operator.reflection)
            .collect()
    };
    let along_a = letters(Direction::A);
    let along_b = letters(Direction::B);
    let along_c = letters(Direction::C);
    let mirror_free = [&along_a, &along_b, &along_c]
        .iter()
        .all(|letters| !letters.contains(&Reflection::M));
    let full_pairs = along_a.contains(&Reflection::B)
        && along_a.contains(&Reflection::C)
        && along_b.contains(&Reflection::A)
        && along_b.contains(&Reflection::C)
        && along_c.contains(&Reflection::A)
        && along_c.contains(&Reflection::B);
    if mirror_free && full_pairs {
        Some(SPECIAL_CASES.ibca.clone())
    } else {
        None
    }
}

/// Picks the screw-free two-fold along each cell axis and tests whether the
/// a and b representatives compose into the c one. They do exactly when the
/// three axes meet in one point, which separates I222 from I212121 and I23
/// from I213.
fn axes_compose(extraction: &Extraction) -> Option<bool> {
    let axes = [
        STANDARD.build_rotation(2, Direction::A, 0, false).ok()?,
        STANDARD.build_rotation(2, Direction::B, 0, false).ok()?,
        STANDARD.build_rotation(2, Direction::C, 0, false).ok()?,
    ];
    let mut representatives: [Option<SymmetryMatrix>; 3] = [None, None, None];
    for bucket in &extraction.buckets {
        for (operator, matrix) in bucket {
            let plain_axis = operator.order == 2
                && !operator.rotoinversion
                && operator.screw == 0
                && operator.reflection.is_none();
            if !plain_axis {
                continue;
            }
            for (index, axis) in axes.iter().enumerate() {
                if matrix.linear == axis.linear && representatives[index].is_none() {
                    representatives[index] = Some(matrix.clone());
                }
            }
        }
    }
    match representatives {
        [Some(along_a), Some(along_b), Some(along_c)] => {
            Some(along_a.times(&along_b) == along_c)
        }
        _ => None,
    }
}
