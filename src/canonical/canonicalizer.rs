// Canonicalization pipeline: digest, classify, standardize, generate,
// verify, and finally re-spell a symbol from what the group actually does.

use std::cmp::Reverse;

use log::{debug, warn};

use crate::canonical::setting::standardize;
use crate::canonical::special_cases::match_special;
use crate::config::MAX_CANONICAL_PASSES;
use crate::error::SymbolError;
use crate::groups::laue_class::{classify, LaueClass, LaueFamily};
use crate::groups::space_group::{derive_centering, Extraction, SpaceGroup};
use crate::matrices::symmetry_matrix::SymmetryMatrix;
use crate::symbol::digest::digest;
use crate::symbol::symbol_types::{Direction, Operator, Symbol};
use crate::Result;

/// Outcome of a full analysis run: the standardized symbol, its class, the
/// generated group and the per-direction view of its operations.
pub(crate) struct Analysis {
    symbol: Symbol,
    class: &'static LaueClass,
    group: SpaceGroup,
    extraction: Extraction,
}

/// Rewrites a formatted symbol into its canonical spelling.
///
/// The result of one pass can itself admit a simpler spelling, for example
/// when a screw axis names a group that also carries the plain axis and the
/// re-spelled symbol then standardizes onto a cheaper setting. The pass is
/// therefore repeated until the spelling stops moving.
///
/// # Arguments
/// * `formatted` - formatted symbol, e.g. "P 1 21/c 1"
///
/// # Returns
/// * `Ok(String)` - canonical spelling, e.g. "P 21/c"
/// * `Err(SymbolError)` - the symbol is malformed or names no group
pub fn canonicalize(formatted: &str) -> Result<String> {
    let mut canonical = canonical_pass(formatted)?;
    for _ in 0..MAX_CANONICAL_PASSES {
        match canonical_pass(&canonical) {
            Ok(next) if next == canonical => break,
            Ok(next) => canonical = next,
            Err(_) => break,
        }
    }
    Ok(canonical)
}

/// Checks whether a formatted symbol names a space group.
pub fn is_valid(formatted: &str) -> bool {
    let digested = match digest(formatted) {
        Ok(digested) => digested,
        Err(error) => {
            warn!("'{formatted}' rejected: {error}");
            return false;
        }
    };
    match analyze_symbol(digested) {
        Ok(_) => true,
        Err(error) => {
            warn!("'{formatted}' rejected: {error}");
            false
        }
    }
}

/// Generates the full operation list of a formatted symbol, centering
/// translations included.
pub fn generate_operations(formatted: &str) -> Result<Vec<SymmetryMatrix>> {
    let analysis = analyze_symbol(digest(formatted)?)?;
    Ok(analysis.group.operations)
}

/// Validity oracle for digested symbols; errors are deliberately silent
/// since callers probe many candidate readings.
pub(crate) fn symbol_is_valid(symbol: &Symbol) -> bool {
    analyze_symbol(symbol.clone()).is_ok()
}

fn canonical_pass(formatted: &str) -> Result<String> {
    let analysis = analyze_symbol(digest(formatted)?)?;
    Ok(choose_canonical(&analysis))
}

/// Runs a digested symbol through the whole pipeline.
fn analyze_symbol(symbol: Symbol) -> Result<Analysis> {
    let class = classify(symbol.centering, &symbol.operators)?;
    let mut symbol = standardize(symbol, class);
    // standardization may collapse slots or move the centering
    let class = classify(symbol.centering, &symbol.operators)?;
    debug!("'{}' classified as {}", symbol.format(), class.name);
    let group = SpaceGroup::generate(&mut symbol, class)?;
    let extraction = group.extract()?;
    let derived = derive_centering(&extraction.translations)?;
    if derived.lattice_points() != symbol.centering.lattice_points() {
        return Err(SymbolError::InvalidGroup(format!(
            "operations of '{}' build a {} lattice",
            symbol.format(),
            derived.as_char()
        )));
    }
    verify_symmetry(&symbol, class, &extraction)?;
    Ok(Analysis {
        symbol,
        class,
        group,
        extraction,
    })
}

/// Confirms that the generated group realizes every operator of the symbol
/// along its own direction, and nothing beyond the class schema.
fn verify_symmetry(
    symbol: &Symbol,
    class: &'static LaueClass,
    extraction: &Extraction,
) -> Result<()> {
    for operator in &symbol.operators {
        if operator.is_order_one() {
            continue;
        }
        let direction = match operator.direction {
            Some(direction) => direction,
            None => continue,
        };
        let bucket = extraction.bucket(direction);
        if operator.has_rotation() {
            let realized = bucket.iter().any(|(candidate, _)| {
                candidate.order == operator.order
                    && candidate.rotoinversion == operator.rotoinversion
                    && (candidate.rotoinversion || candidate.screw == operator.screw)
            });
            if !realized {
                return Err(SymbolError::InvalidGroup(format!(
                    "no {} axis along {direction:?} in the group of '{}'",
                    operator.format(),
                    symbol.format()
                )));
            }
            if operator.reflection.is_none() {
                // a bare axis must not hide a plane, except that -6 is 3/m
                let tolerated = operator.rotoinversion && operator.order == 6;
                let shadowed = bucket
                    .iter()
                    .any(|(candidate, _)| candidate.reflection.is_some());
                if shadowed && !tolerated {
                    return Err(SymbolError::InvalidGroup(format!(
                        "'{}' omits a plane along {direction:?}",
                        symbol.format()
                    )));
                }
            }
        }
        if let Some(letter) = operator.reflection {
            let realized = bucket
                .iter()
                .any(|(candidate, _)| candidate.reflection == Some(letter));
            if !realized {
                return Err(SymbolError::InvalidGroup(format!(
                    "no {} plane perpendicular to {direction:?} in the group of '{}'",
                    letter.as_char(),
                    symbol.format()
                )));
            }
        }
    }
    for (slot, direction) in class.directions.iter().enumerate() {
        let observed = extraction
            .bucket(*direction)
            .iter()
            .map(|(candidate, _)| {
                if candidate.has_rotation() {
                    candidate.order
                } else {
                    2
                }
            })
            .max()
            .unwrap_or(1);
        if observed != class.expected_orders[slot] {
            return Err(SymbolError::InvalidGroup(format!(
                "order {observed} along {direction:?} where {} expects {}",
                class.name, class.expected_orders[slot]
            )));
        }
    }
    for direction in Direction::ALL {
        let bucket = extraction.bucket(direction);
        if !class.directions.contains(&direction) && !bucket.is_empty() {
            return Err(SymbolError::InvalidGroup(format!(
                "unexpected operations along {direction:?} for class {}",
                class.name
            )));
        }
    }
    Ok(())
}

/// Spells the canonical symbol from the extracted operations.
fn choose_canonical(analysis: &Analysis) -> String {
    if analysis.class.family == LaueFamily::Triclinic {
        let spelling = if analysis.extraction.has_inversion {
            "P -1"
        } else {
            "P 1"
        };
        return spelling.to_string();
    }
    if let Some(special) = match_special(&analysis.symbol, analysis.class, &analysis.extraction) {
        return special.format();
    }
    let mut operators = Vec::new();
    for (slot, direction) in analysis.class.directions.iter().enumerate() {
        let bucket = analysis.extraction.bucket(*direction);
        operators.push(slot_operator(analysis, *direction, bucket, slot));
    }
    Symbol::new(analysis.symbol.centering, operators).format()
}

/// Condenses one bucket into the operator the canonical symbol prints for
/// its slot.
fn slot_operator(
    analysis: &Analysis,
    direction: Direction,
    bucket: &[(Operator, SymmetryMatrix)],
    slot: usize,
) -> Operator {
    let class = analysis.class;
    let letter = class
        .mirror_sequence(analysis.symbol.centering, direction)
        .iter()
        .copied()
        .find(|letter| {
            bucket
                .iter()
                .any(|(candidate, _)| candidate.reflection == Some(*letter))
        });
    let axis = best_rotation(bucket);
    match (axis, letter) {
        (None, None) => Operator::unity(),
        (None, Some(letter)) => Operator::mirror(letter),
        (Some(axis), None) => axis,
        (Some(axis), Some(letter)) => {
            if class.requires_both && slot == 0 && axis.order >= 2 {
                if axis.rotoinversion && axis.order == 6 {
                    // -6 already carries its plane
                    axis
                } else {
                    Operator::compound(axis.order, axis.screw, letter)
                }
            } else {
                Operator::mirror(letter)
            }
        }
    }
}

/// The preferred axis of a bucket: highest order first, proper before
/// improper at even orders, improper before proper at odd ones, and the
/// smallest screw among what remains. The screw rule is what merges
/// enantiomorphic pairs.
fn best_rotation(bucket: &[(Operator, SymmetryMatrix)]) -> Option<Operator> {
    bucket
        .iter()
        .map(|(candidate, _)| *candidate)
        .filter(Operator::has_rotation)
        .min_by_key(|candidate| {
            let flavour = if candidate.order % 2 == 0 {
                candidate.rotoinversion
            } else {
                !candidate.rotoinversion
            };
            (Reverse(candidate.order), flavour, candidate.screw)
        })
}
