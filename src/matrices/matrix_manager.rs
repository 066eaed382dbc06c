use nalgebra::{Matrix3, Vector3};
use std::sync::LazyLock;

use crate::config::TWELFTHS;
use crate::error::SymbolError;
use crate::matrices::symmetry_matrix::{MatrixKind, SymmetryMatrix};
use crate::symbol::symbol_types::{Direction, Operator, Reflection};
use crate::Result;

/// Reference frame for building and recognizing operations.
///
/// Groups on hexagonal axes use different integer matrices than the
/// orthogonal families, so one manager exists per frame. Both are
/// stateless; use the [`STANDARD`] and [`HEXAGONAL`] statics.
pub struct MatrixManager {
    hexagonal: bool,
}

pub static STANDARD: MatrixManager = MatrixManager { hexagonal: false };
pub static HEXAGONAL: MatrixManager = MatrixManager { hexagonal: true };

/// Which glide-pattern table applies to a mirror, keyed by the plane
/// normal. Diagonal planes and the two hexagonal in-plane families read
/// their glide vectors differently from the axial planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlidePlane {
    AxialA,
    AxialB,
    AxialC,
    DiagAB,
    DiagBC,
    DiagCA,
    HexGx,
    HexGy,
}

struct ReverseEntry {
    linear: Matrix3<i8>,
    direction: Direction,
    plane: Option<GlidePlane>,
}

impl ReverseEntry {
    fn rotation(linear: Matrix3<i8>, direction: Direction) -> Self {
        Self {
            linear,
            direction,
            plane: None,
        }
    }

    fn mirror(linear: Matrix3<i8>, direction: Direction, plane: GlidePlane) -> Self {
        Self {
            linear,
            direction,
            plane: Some(plane),
        }
    }
}

static STANDARD_ENTRIES: LazyLock<Vec<ReverseEntry>> = LazyLock::new(standard_entries);
static HEXAGONAL_ENTRIES: LazyLock<Vec<ReverseEntry>> = LazyLock::new(hexagonal_entries);

fn standard_entries() -> Vec<ReverseEntry> {
    let mut entries = Vec::new();

    // Axial 2-folds; negating one gives the mirror normal to the same axis.
    for (axis, direction, plane) in [
        (
            Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1),
            Direction::A,
            GlidePlane::AxialA,
        ),
        (
            Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, -1),
            Direction::B,
            GlidePlane::AxialB,
        ),
        (
            Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1),
            Direction::C,
            GlidePlane::AxialC,
        ),
    ] {
        entries.push(ReverseEntry::rotation(axis, direction));
        entries.push(ReverseEntry::mirror(-axis, direction, plane));
    }

    // Axial 4-folds, both senses; negating gives the rotoinversions.
    for (axis, direction) in [
        (Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1), Direction::C),
        (Matrix3::new(0, 1, 0, -1, 0, 0, 0, 0, 1), Direction::C),
        (Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0), Direction::A),
        (Matrix3::new(1, 0, 0, 0, 0, 1, 0, -1, 0), Direction::A),
        (Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0), Direction::B),
        (Matrix3::new(0, 0, -1, 0, 1, 0, 1, 0, 0), Direction::B),
    ] {
        entries.push(ReverseEntry::rotation(axis, direction));
        entries.push(ReverseEntry::rotation(-axis, direction));
    }

    // Face-diagonal 2-folds and their mirrors.
    for (axis, direction, plane) in [
        (
            Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1),
            Direction::FaceDiagonal,
            GlidePlane::DiagAB,
        ),
        (
            Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1),
            Direction::AltFaceDiagonal,
            GlidePlane::DiagAB,
        ),
        (
            Matrix3::new(-1, 0, 0, 0, 0, 1, 0, 1, 0),
            Direction::FaceDiagonal,
            GlidePlane::DiagBC,
        ),
        (
            Matrix3::new(-1, 0, 0, 0, 0, -1, 0, -1, 0),
            Direction::AltFaceDiagonal,
            GlidePlane::DiagBC,
        ),
        (
            Matrix3::new(0, 0, 1, 0, -1, 0, 1, 0, 0),
            Direction::FaceDiagonal,
            GlidePlane::DiagCA,
        ),
        (
            Matrix3::new(0, 0, -1, 0, -1, 0, -1, 0, 0),
            Direction::AltFaceDiagonal,
            GlidePlane::DiagCA,
        ),
    ] {
        entries.push(ReverseEntry::rotation(axis, direction));
        entries.push(ReverseEntry::mirror(-axis, direction, plane));
    }

    // Body-diagonal 3-folds, both senses per axis; negations are the -3s.
    for axis in [
        Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0),
        Matrix3::new(0, 1, 0, 0, 0, 1, 1, 0, 0),
        Matrix3::new(0, 0, 1, -1, 0, 0, 0, -1, 0),
        Matrix3::new(0, 0, -1, 1, 0, 0, 0, -1, 0),
        Matrix3::new(0, 0, -1, -1, 0, 0, 0, 1, 0),
        Matrix3::new(0, 1, 0, 0, 0, -1, -1, 0, 0),
        Matrix3::new(0, -1, 0, 0, 0, 1, -1, 0, 0),
        Matrix3::new(0, -1, 0, 0, 0, -1, 1, 0, 0),
    ] {
        entries.push(ReverseEntry::rotation(axis, Direction::BodyDiagonal));
        entries.push(ReverseEntry::rotation(-axis, Direction::BodyDiagonal));
    }

    entries
}

fn hexagonal_entries() -> Vec<ReverseEntry> {
    let mut entries = Vec::new();

    // Principal 3- and 6-folds, both senses; negations are -3 and -6.
    for axis in [
        Matrix3::new(0, -1, 0, 1, -1, 0, 0, 0, 1),
        Matrix3::new(-1, 1, 0, -1, 0, 0, 0, 0, 1),
        Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1),
        Matrix3::new(0, 1, 0, -1, 1, 0, 0, 0, 1),
    ] {
        entries.push(ReverseEntry::rotation(axis, Direction::C));
        entries.push(ReverseEntry::rotation(-axis, Direction::C));
    }

    // The principal 2-fold and the mirror normal to c.
    let two_c = Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1);
    entries.push(ReverseEntry::rotation(two_c, Direction::C));
    entries.push(ReverseEntry::mirror(-two_c, Direction::C, GlidePlane::AxialC));

    // In-plane 2-folds of both direction families and their mirrors.
    // [100], [010] and [110] make up the secondary family; [1-10], [210]
    // and [120] the tertiary one.
    for (axis, direction, plane) in [
        (
            Matrix3::new(1, -1, 0, 0, -1, 0, 0, 0, -1),
            Direction::A,
            GlidePlane::HexGx,
        ),
        (
            Matrix3::new(-1, 0, 0, -1, 1, 0, 0, 0, -1),
            Direction::B,
            GlidePlane::HexGy,
        ),
        (
            Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1),
            Direction::FaceDiagonal,
            GlidePlane::DiagAB,
        ),
        (
            Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1),
            Direction::AltFaceDiagonal,
            GlidePlane::DiagAB,
        ),
        (
            Matrix3::new(1, 0, 0, 1, -1, 0, 0, 0, -1),
            Direction::AltFaceDiagonal,
            GlidePlane::HexGy,
        ),
        (
            Matrix3::new(-1, 1, 0, 0, 1, 0, 0, 0, -1),
            Direction::AltFaceDiagonal,
            GlidePlane::HexGx,
        ),
    ] {
        entries.push(ReverseEntry::rotation(axis, direction));
        entries.push(ReverseEntry::mirror(-axis, direction, plane));
    }

    entries
}

impl MatrixManager {
    fn entries(&self) -> &'static [ReverseEntry] {
        if self.hexagonal {
            &HEXAGONAL_ENTRIES
        } else {
            &STANDARD_ENTRIES
        }
    }

    /// Recognize a group element: which symbol operator it stands for and
    /// along which raw direction.
    ///
    /// Fails with `InvalidGroup` when the linear part does not belong to
    /// this frame, which happens when generators of incompatible families
    /// were combined.
    pub fn determine_operator(&self, matrix: &SymmetryMatrix) -> Result<(Operator, Direction)> {
        let entry = self
            .entries()
            .iter()
            .find(|entry| entry.linear == matrix.linear)
            .ok_or_else(|| {
                SymbolError::InvalidGroup(format!(
                    "operation {} lies outside the reference frame",
                    matrix.to_triplet()
                ))
            })?;

        let operator = match matrix.kind {
            MatrixKind::Rotation(order) => {
                let screw = screw_component(matrix, order);
                Operator::rotation(order, screw, false)
            }
            MatrixKind::Rotoinversion(order) => Operator::rotation(order, 0, true),
            MatrixKind::Reflection => match entry.plane {
                Some(plane) => Operator::mirror(glide_letter(plane, matrix)),
                None => {
                    return Err(SymbolError::InvalidGroup(format!(
                        "reflection {} matched a rotation frame",
                        matrix.to_triplet()
                    )))
                }
            },
            _ => {
                return Err(SymbolError::InvalidGroup(format!(
                    "operation {} carries no direction",
                    matrix.to_triplet()
                )))
            }
        };
        Ok((operator, entry.direction))
    }

    /// Build the matrix of a (screw) rotation or rotoinversion along a
    /// schema direction.
    pub fn build_rotation(
        &self,
        order: u8,
        direction: Direction,
        screw: u8,
        rotoinversion: bool,
    ) -> Result<SymmetryMatrix> {
        let mut linear = self.rotation_linear(order, direction)?;
        if rotoinversion {
            linear = -linear;
        }
        let translation = if screw > 0 {
            axis_vector(direction) * screw_step(order, screw)
        } else {
            Vector3::zeros()
        };
        Ok(SymmetryMatrix::new(linear, translation))
    }

    /// Build the matrix of a mirror or glide plane normal to a schema
    /// direction.
    pub fn build_mirror(&self, direction: Direction, letter: Reflection) -> Result<SymmetryMatrix> {
        let linear = self.mirror_linear(direction)?;
        let translation = self.mirror_translation(direction, letter)?;
        Ok(SymmetryMatrix::new(linear, translation))
    }

    fn rotation_linear(&self, order: u8, direction: Direction) -> Result<Matrix3<i8>> {
        let linear = match (self.hexagonal, order, direction) {
            (_, 1, _) => Matrix3::identity(),
            (_, 2, Direction::C) => Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1),
            (false, 2, Direction::A) => Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1),
            (false, 2, Direction::B) => Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, -1),
            (_, 2, Direction::FaceDiagonal) => Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1),
            (_, 2, Direction::AltFaceDiagonal) => Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1),
            (false, 3, Direction::BodyDiagonal) => Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0),
            (false, 4, Direction::C) => Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
            (false, 4, Direction::A) => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0),
            (false, 4, Direction::B) => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0),
            (true, 2, Direction::A) => Matrix3::new(1, -1, 0, 0, -1, 0, 0, 0, -1),
            (true, 2, Direction::B) => Matrix3::new(-1, 0, 0, -1, 1, 0, 0, 0, -1),
            (true, 3, Direction::C) => Matrix3::new(0, -1, 0, 1, -1, 0, 0, 0, 1),
            (true, 6, Direction::C) => Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1),
            _ => {
                return Err(SymbolError::InvalidGroup(format!(
                    "no {order}-fold axis along {direction:?} in this frame"
                )))
            }
        };
        Ok(linear)
    }

    fn mirror_linear(&self, direction: Direction) -> Result<Matrix3<i8>> {
        let linear = match (self.hexagonal, direction) {
            (_, Direction::C) => Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1),
            (false, Direction::A) => Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, 1),
            (false, Direction::B) => Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, 1),
            (true, Direction::A) => Matrix3::new(-1, 1, 0, 0, 1, 0, 0, 0, 1),
            (true, Direction::B) => Matrix3::new(1, 0, 0, 1, -1, 0, 0, 0, 1),
            (_, Direction::FaceDiagonal) => Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, 1),
            (_, Direction::AltFaceDiagonal) => Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1),
            (_, Direction::BodyDiagonal) => {
                return Err(SymbolError::InvalidGroup(
                    "no mirror lies normal to a body diagonal".to_string(),
                ))
            }
        };
        Ok(linear)
    }

    /// Representative glide translation for a plane letter. Closure fills
    /// in the other members of each glide family.
    fn mirror_translation(&self, direction: Direction, letter: Reflection) -> Result<Vector3<i8>> {
        use Reflection::*;
        let (x, y, z) = match (self.hexagonal, direction, letter) {
            (_, _, M) => (0, 0, 0),
            (false, Direction::C, A) => (6, 0, 0),
            (false, Direction::C, B) => (0, 6, 0),
            (false, Direction::C, N) => (6, 6, 0),
            (false, Direction::C, D) => (3, 3, 0),
            (false, Direction::A, B) => (0, 6, 0),
            (false, Direction::A, C) => (0, 0, 6),
            (false, Direction::A, N) => (0, 6, 6),
            (false, Direction::A, D) => (0, 3, 3),
            (false, Direction::B, A) => (6, 0, 0),
            (false, Direction::B, C) => (0, 0, 6),
            (false, Direction::B, N) => (6, 0, 6),
            (false, Direction::B, D) => (3, 0, 3),
            (false, Direction::FaceDiagonal, C) => (0, 0, 6),
            (false, Direction::FaceDiagonal, N) => (6, 6, 6),
            (false, Direction::FaceDiagonal, D) => (9, 3, 3),
            (false, Direction::AltFaceDiagonal, C) => (0, 0, 6),
            (false, Direction::AltFaceDiagonal, N) => (6, 6, 6),
            (false, Direction::AltFaceDiagonal, D) => (3, 3, 3),
            (
                true,
                Direction::A
                | Direction::B
                | Direction::FaceDiagonal
                | Direction::AltFaceDiagonal,
                C,
            ) => (0, 0, 6),
            _ => {
                return Err(SymbolError::InvalidGroup(format!(
                    "no {} glide normal to {direction:?} in this frame",
                    letter.as_char()
                )))
            }
        };
        Ok(Vector3::new(x, y, z))
    }
}

/// Lattice step of a screw axis in twelfths, e.g. 4 for a 3-fold with
/// screw 1 and 9 for a 4-fold with screw 3.
pub(crate) fn screw_step(order: u8, screw: u8) -> i8 {
    (i32::from(TWELFTHS) * i32::from(screw) / i32::from(order)) as i8
}

fn axis_vector(direction: Direction) -> Vector3<i8> {
    match direction {
        Direction::A => Vector3::new(1, 0, 0),
        Direction::B => Vector3::new(0, 1, 0),
        Direction::C => Vector3::new(0, 0, 1),
        Direction::BodyDiagonal => Vector3::new(1, 1, 1),
        Direction::FaceDiagonal => Vector3::new(1, 1, 0),
        Direction::AltFaceDiagonal => Vector3::new(1, -1, 0),
    }
}

/// Screw component of a proper rotation. Composing the rotation with
/// itself over a full turn cancels the in-plane translation parts; what
/// accumulates along the axis is the screw pitch times the order.
fn screw_component(matrix: &SymmetryMatrix, order: u8) -> u8 {
    let mut accumulated = matrix.clone();
    for _ in 1..order {
        accumulated = matrix.times_unnormalized(&accumulated);
    }
    let along = accumulated
        .translation
        .iter()
        .copied()
        .find(|&component| component != 0)
        .unwrap_or(0);
    let full_turn = i32::from(TWELFTHS) * i32::from(order);
    (i32::from(along).rem_euclid(full_turn) / i32::from(TWELFTHS)) as u8
}

/// Classify the glide vector of a reflection. The component normal to
/// the plane only shifts the plane off the origin and drops out of
/// `(t + Mt) / 2`; the surviving in-plane part names the letter.
fn glide_letter(plane: GlidePlane, matrix: &SymmetryMatrix) -> Reflection {
    use Reflection::*;

    let t = matrix.translation.map(i32::from);
    let folded = matrix.linear.map(i32::from) * t + t;
    if folded.iter().any(|component| component % 2 != 0) {
        return E;
    }
    let gamma = folded.map(|component| (component / 2).rem_euclid(i32::from(TWELFTHS)));
    let quarter = |component: i32| component == 3 || component == 9;

    match plane {
        GlidePlane::AxialA => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (0, 6, 0) => B,
            (0, 0, 6) => C,
            (0, 6, 6) => N,
            (0, y, z) if quarter(y) && quarter(z) => D,
            _ => E,
        },
        GlidePlane::AxialB => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (6, 0, 0) => A,
            (0, 0, 6) => C,
            (6, 0, 6) => N,
            (x, 0, z) if quarter(x) && quarter(z) => D,
            _ => E,
        },
        GlidePlane::AxialC => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (6, 0, 0) => A,
            (0, 6, 0) => B,
            (6, 6, 0) => N,
            (x, y, 0) if quarter(x) && quarter(y) => D,
            _ => E,
        },
        // In the diagonal planes the in-plane axis plays the c role, so a
        // half step along it reads as a c glide whatever its name.
        GlidePlane::DiagAB => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (0, 0, 6) => C,
            (6, 6, 6) => N,
            (6, 6, 0) => G,
            (x, y, z) if quarter(x) && quarter(y) && quarter(z) => D,
            _ => E,
        },
        GlidePlane::DiagBC => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (6, 0, 0) => C,
            (6, 6, 6) => N,
            (0, 6, 6) => G,
            (x, y, z) if quarter(x) && quarter(y) && quarter(z) => D,
            _ => E,
        },
        GlidePlane::DiagCA => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (0, 6, 0) => C,
            (6, 6, 6) => N,
            (6, 0, 6) => G,
            (x, y, z) if quarter(x) && quarter(y) && quarter(z) => D,
            _ => E,
        },
        GlidePlane::HexGx => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (0, 0, 6) => C,
            (6, 0, 0) => G,
            (6, 0, 6) => N,
            _ => E,
        },
        GlidePlane::HexGy => match (gamma[0], gamma[1], gamma[2]) {
            (0, 0, 0) => M,
            (0, 0, 6) => C,
            (0, 6, 0) => G,
            (0, 6, 6) => N,
            _ => E,
        },
    }
}
