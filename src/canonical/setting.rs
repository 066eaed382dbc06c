// Setting standardization: moves a symbol written in a non-conventional
// axis setting onto the conventional one before the group is generated.
//
// A permutation renames the three cell axes at once, so operator slots,
// axial glide letters and the centering all move together.

use crate::groups::laue_class::{LaueClass, LaueFamily};
use crate::symbol::symbol_types::{Centering, Operator, Reflection, Symbol};

/// Axis permutation; entry `i` is the new index of old axis `i`.
type Permutation = [usize; 3];

const IDENTITY: Permutation = [0, 1, 2];
const SWAP_AB: Permutation = [1, 0, 2];
const SWAP_AC: Permutation = [2, 1, 0];
const SWAP_BC: Permutation = [0, 2, 1];
const CYCLE_FORWARD: Permutation = [1, 2, 0];
const CYCLE_BACKWARD: Permutation = [2, 0, 1];

const ALL: [Permutation; 6] = [
    IDENTITY,
    SWAP_AB,
    SWAP_AC,
    SWAP_BC,
    CYCLE_FORWARD,
    CYCLE_BACKWARD,
];

pub(crate) fn standardize(symbol: Symbol, class: &'static LaueClass) -> Symbol {
    match class.family {
        LaueFamily::Monoclinic => standardize_monoclinic(symbol),
        LaueFamily::Orthorhombic => standardize_orthorhombic(symbol),
        LaueFamily::Triclinic
        | LaueFamily::TetragonalLow
        | LaueFamily::TrigonalLow
        | LaueFamily::RhombohedralLow
        | LaueFamily::HexagonalLow => collapse_principal(symbol),
        _ => symbol,
    }
}

/// Relabels a symbol under an axis permutation. Operator slots move to the
/// new axis positions, axial glide letters follow the renaming, and the
/// centering letter is rederived from its permuted face.
fn apply_permutation(symbol: &Symbol, permutation: Permutation) -> Symbol {
    let mut operators = vec![Operator::unity(); symbol.operators.len()];
    for (index, operator) in symbol.operators.iter().enumerate() {
        let mut moved = *operator;
        moved.reflection = operator
            .reflection
            .map(|letter| permute_letter(letter, permutation));
        if operators.len() == 3 {
            operators[permutation[index]] = moved;
        } else {
            operators[index] = moved;
        }
    }
    Symbol::new(permute_centering(symbol.centering, permutation), operators)
}

fn permute_letter(letter: Reflection, permutation: Permutation) -> Reflection {
    const AXIAL: [Reflection; 3] = [Reflection::A, Reflection::B, Reflection::C];
    match letter {
        Reflection::A => AXIAL[permutation[0]],
        Reflection::B => AXIAL[permutation[1]],
        Reflection::C => AXIAL[permutation[2]],
        other => other,
    }
}

fn permute_centering(centering: Centering, permutation: Permutation) -> Centering {
    const FACES: [Centering; 3] = [Centering::A, Centering::B, Centering::C];
    match centering {
        Centering::A => FACES[permutation[0]],
        Centering::B => FACES[permutation[1]],
        Centering::C => FACES[permutation[2]],
        other => other,
    }
}

/// Monoclinic settings use the unique axis b. A one-slot symbol can only
/// trade a and c; a three-slot symbol first rotates its unique slot onto b
/// and then collapses to the short one-slot form.
fn standardize_monoclinic(symbol: Symbol) -> Symbol {
    match symbol.operators.len() {
        1 => {
            let swapped = apply_permutation(&symbol, SWAP_AC);
            pick_monoclinic(vec![symbol, swapped])
        }
        3 => {
            let unique = symbol
                .operators
                .iter()
                .position(|operator| !operator.is_order_one())
                .unwrap_or(1);
            let candidates = permutations_onto_b(unique)
                .iter()
                .map(|permutation| {
                    let moved = apply_permutation(&symbol, *permutation);
                    Symbol::new(moved.centering, vec![moved.operators[1]])
                })
                .collect();
            pick_monoclinic(candidates)
        }
        _ => symbol,
    }
}

/// The two permutations sending `slot` to the b position.
fn permutations_onto_b(slot: usize) -> [Permutation; 2] {
    match slot {
        0 => [SWAP_AB, CYCLE_FORWARD],
        2 => [SWAP_BC, CYCLE_BACKWARD],
        _ => [IDENTITY, SWAP_AC],
    }
}

fn pick_monoclinic(candidates: Vec<Symbol>) -> Symbol {
    let score = |candidate: &Symbol| {
        let acceptable = matches!(candidate.centering, Centering::P | Centering::C);
        let letter = candidate
            .operators
            .first()
            .and_then(|operator| operator.reflection)
            .map_or(0, monoclinic_letter_rank);
        let centering = match candidate.centering {
            Centering::P => 0,
            Centering::C => 1,
            _ => 9,
        };
        (!acceptable, letter, centering)
    };
    let mut candidates = candidates.into_iter();
    let mut chosen = match candidates.next() {
        Some(first) => first,
        None => return Symbol::new(Centering::P, Vec::new()),
    };
    let mut best = score(&chosen);
    for candidate in candidates {
        let value = score(&candidate);
        if value < best {
            best = value;
            chosen = candidate;
        }
    }
    chosen
}

fn monoclinic_letter_rank(letter: Reflection) -> u8 {
    match letter {
        Reflection::M => 0,
        Reflection::C => 1,
        Reflection::A => 2,
        Reflection::N => 3,
        Reflection::D => 4,
        _ => 9,
    }
}

/// Orthorhombic symbols admit all six axis relabelings. The winner is the
/// one with the lexicographically earliest plane letters, screws placed as
/// the conventional tables place them, and the cheapest centering.
fn standardize_orthorhombic(symbol: Symbol) -> Symbol {
    let mut chosen: Option<(Symbol, ([u8; 3], u8, u8))> = None;
    for permutation in ALL {
        let candidate = apply_permutation(&symbol, permutation);
        if glide_along_own_axis(&candidate) {
            continue;
        }
        let value = orthorhombic_score(&candidate);
        let better = match &chosen {
            Some((_, best)) => value < *best,
            None => true,
        };
        if better {
            chosen = Some((candidate, value));
        }
    }
    match chosen {
        Some((candidate, _)) => candidate,
        None => symbol,
    }
}

/// An axial glide running along its own plane normal is geometrically
/// impossible; permutations that produce one are discarded.
fn glide_along_own_axis(symbol: &Symbol) -> bool {
    const AXIAL: [Reflection; 3] = [Reflection::A, Reflection::B, Reflection::C];
    symbol
        .operators
        .iter()
        .enumerate()
        .any(|(slot, operator)| operator.reflection == Some(AXIAL[slot]))
}

fn orthorhombic_score(symbol: &Symbol) -> ([u8; 3], u8, u8) {
    let mut letters = [9u8; 3];
    for (slot, operator) in symbol.operators.iter().enumerate() {
        if let Some(letter) = operator.reflection {
            letters[slot] = letter_rank(letter);
        }
    }
    let screws = symbol
        .operators
        .iter()
        .filter(|operator| operator.screw > 0)
        .count();
    let last_screwed = symbol.operators[2].screw > 0;
    // one screw belongs on c, a single plain axis among screws likewise
    let misplacement = match screws {
        1 if !last_screwed => 1,
        2 if last_screwed => 1,
        _ => 0,
    };
    let centering = match symbol.centering {
        Centering::P => 0,
        Centering::C => 1,
        Centering::A => 2,
        Centering::B => 3,
        Centering::I => 4,
        Centering::F => 5,
        Centering::R => 9,
    };
    (letters, misplacement, centering)
}

fn letter_rank(letter: Reflection) -> u8 {
    match letter {
        Reflection::M => 0,
        Reflection::A => 1,
        Reflection::B => 2,
        Reflection::C => 3,
        Reflection::N => 4,
        Reflection::D => 5,
        Reflection::G => 6,
        Reflection::E => 7,
    }
}

/// Families with a single schema slot print one operator; trailing unity
/// slots of a long spelling are dropped. The triclinic case keeps a -1
/// wherever it was written.
fn collapse_principal(symbol: Symbol) -> Symbol {
    if symbol.operators.len() <= 1 {
        return symbol;
    }
    let principal = symbol
        .operators
        .iter()
        .find(|operator| !operator.is_unity())
        .copied()
        .unwrap_or_else(Operator::unity);
    Symbol::new(symbol.centering, vec![principal])
}
