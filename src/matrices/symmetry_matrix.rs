use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::TWELFTHS;

/// Geometric character of an operation, read off the determinant and the
/// trace of its linear part.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatrixKind {
    Identity,
    Translation,
    Inversion,
    Reflection,
    Rotation(u8),
    Rotoinversion(u8),
}

/// One symmetry operation: an integer linear part together with a
/// translation in twelfths of the cell edges, kept in `0..12`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymmetryMatrix {
    pub linear: Matrix3<i8>,
    pub translation: Vector3<i8>,
    pub kind: MatrixKind,
}

impl SymmetryMatrix {
    /// Wrap a linear part and translation, reducing the translation into
    /// the `0..12` range.
    pub fn new(linear: Matrix3<i8>, translation: Vector3<i8>) -> Self {
        let translation = translation.map(|twelfth| twelfth.rem_euclid(TWELFTHS));
        let kind = classify(&linear, &translation);
        Self {
            linear,
            translation,
            kind,
        }
    }

    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    pub fn inversion() -> Self {
        Self::new(-Matrix3::identity(), Vector3::zeros())
    }

    pub fn pure_translation(translation: Vector3<i8>) -> Self {
        Self::new(Matrix3::identity(), translation)
    }

    /// Compose two operations, `self` applied after `other`.
    pub fn times(&self, other: &SymmetryMatrix) -> SymmetryMatrix {
        SymmetryMatrix::new(
            self.linear * other.linear,
            self.linear * other.translation + self.translation,
        )
    }

    /// Compose without reducing the translation. Screw components are
    /// read off accumulated translations, which the `0..12` reduction
    /// would destroy.
    pub(crate) fn times_unnormalized(&self, other: &SymmetryMatrix) -> SymmetryMatrix {
        let linear = self.linear * other.linear;
        let translation = self.linear * other.translation + self.translation;
        let kind = classify(&linear, &translation);
        SymmetryMatrix {
            linear,
            translation,
            kind,
        }
    }

    /// Render the operation as a coordinate triplet, e.g. `-y,x,z+1/2`.
    pub fn to_triplet(&self) -> String {
        let axes = ['x', 'y', 'z'];
        let mut parts = Vec::with_capacity(3);
        for row in 0..3 {
            let mut term = String::new();
            for (column, axis) in axes.iter().enumerate() {
                // Entries of a crystallographic linear part are -1, 0 or 1.
                match self.linear[(row, column)] {
                    0 => {}
                    coefficient if coefficient > 0 => {
                        if !term.is_empty() {
                            term.push('+');
                        }
                        term.push(*axis);
                    }
                    _ => {
                        term.push('-');
                        term.push(*axis);
                    }
                }
            }
            let twelfths = self.translation[row];
            if twelfths != 0 {
                let divisor = gcd(twelfths, TWELFTHS);
                if !term.is_empty() {
                    term.push('+');
                }
                term.push_str(&format!("{}/{}", twelfths / divisor, TWELFTHS / divisor));
            }
            if term.is_empty() {
                term.push('0');
            }
            parts.push(term);
        }
        parts.join(",")
    }
}

/// Determinant of an integer linear part, widened to avoid overflow.
pub(crate) fn det3(linear: &Matrix3<i8>) -> i32 {
    let m = linear.map(i32::from);
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

fn trace(linear: &Matrix3<i8>) -> i32 {
    i32::from(linear[(0, 0)]) + i32::from(linear[(1, 1)]) + i32::from(linear[(2, 2)])
}

/// Classify a linear part by determinant and trace. The pairing is
/// unambiguous for the eleven crystallographic possibilities.
fn classify(linear: &Matrix3<i8>, translation: &Vector3<i8>) -> MatrixKind {
    match (det3(linear), trace(linear)) {
        (1, 3) if *translation == Vector3::zeros() => MatrixKind::Identity,
        (1, 3) => MatrixKind::Translation,
        (1, 2) => MatrixKind::Rotation(6),
        (1, 1) => MatrixKind::Rotation(4),
        (1, 0) => MatrixKind::Rotation(3),
        (1, -1) => MatrixKind::Rotation(2),
        (-1, -3) => MatrixKind::Inversion,
        (-1, -2) => MatrixKind::Rotoinversion(6),
        (-1, -1) => MatrixKind::Rotoinversion(4),
        (-1, 0) => MatrixKind::Rotoinversion(3),
        (-1, 1) => MatrixKind::Reflection,
        (det, trace) => {
            debug_assert!(false, "non-crystallographic linear part: det {det}, trace {trace}");
            MatrixKind::Identity
        }
    }
}

fn gcd(first: i8, second: i8) -> i8 {
    let (mut a, mut b) = (first.abs(), second.abs());
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
