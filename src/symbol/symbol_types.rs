use serde::{Deserialize, Serialize};

use crate::error::SymbolError;
use crate::Result;

/// The seven lattice centerings a Hermann-Mauguin symbol can open with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Centering {
    P,
    A,
    B,
    C,
    I,
    F,
    R,
}

impl Centering {
    /// Parse the leading letter of a formatted symbol.
    pub fn from_char(letter: char) -> Result<Self> {
        match letter {
            'P' => Ok(Centering::P),
            'A' => Ok(Centering::A),
            'B' => Ok(Centering::B),
            'C' => Ok(Centering::C),
            'I' => Ok(Centering::I),
            'F' => Ok(Centering::F),
            'R' => Ok(Centering::R),
            other => Err(SymbolError::Malformed(format!(
                "unknown centering letter '{other}'"
            ))),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Centering::P => 'P',
            Centering::A => 'A',
            Centering::B => 'B',
            Centering::C => 'C',
            Centering::I => 'I',
            Centering::F => 'F',
            Centering::R => 'R',
        }
    }

    /// Lattice points per conventional cell.
    pub fn lattice_points(&self) -> usize {
        match self {
            Centering::P => 1,
            Centering::A | Centering::B | Centering::C | Centering::I => 2,
            Centering::R => 3,
            Centering::F => 4,
        }
    }

    /// Non-trivial centering translations, in twelfths of the cell edges.
    ///
    /// `F` lists only two face vectors; the third face is their product and
    /// appears once the group is closed. `R` carries the two obverse thirds.
    pub fn coset_vectors(&self) -> &'static [[i8; 3]] {
        match self {
            Centering::P => &[],
            Centering::A => &[[0, 6, 6]],
            Centering::B => &[[6, 0, 6]],
            Centering::C => &[[6, 6, 0]],
            Centering::I => &[[6, 6, 6]],
            Centering::F => &[[0, 6, 6], [6, 0, 6]],
            Centering::R => &[[8, 4, 4], [4, 8, 8]],
        }
    }
}

/// Symmetry directions an operator of a symbol can act along.
///
/// The diagonal members are families, not single axes: `FaceDiagonal`
/// stands for the [110] family and `AltFaceDiagonal` for [1-10], which on
/// hexagonal axes also covers [120] and [210].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    A,
    B,
    C,
    BodyDiagonal,
    FaceDiagonal,
    AltFaceDiagonal,
}

impl Direction {
    /// Every direction, in the order used by per-direction tables.
    pub const ALL: [Direction; 6] = [
        Direction::A,
        Direction::B,
        Direction::C,
        Direction::BodyDiagonal,
        Direction::FaceDiagonal,
        Direction::AltFaceDiagonal,
    ];

    /// Stable index into per-direction tables.
    pub fn index(&self) -> usize {
        match self {
            Direction::A => 0,
            Direction::B => 1,
            Direction::C => 2,
            Direction::BodyDiagonal => 3,
            Direction::FaceDiagonal => 4,
            Direction::AltFaceDiagonal => 5,
        }
    }
}

/// Mirror and glide plane letters.
///
/// Only the first six letters may appear in input. `G` is the in-plane
/// diagonal glide that has no letter in the printed convention and `E` is
/// the catch-all for glide vectors matching no standard pattern; both sort
/// after the printable letters when a canonical symbol is assembled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Reflection {
    M,
    A,
    B,
    C,
    N,
    D,
    G,
    E,
}

impl Reflection {
    /// Parse a plane letter from input. `g` and `e` are never accepted.
    pub fn from_char(letter: char) -> Option<Self> {
        match letter {
            'm' => Some(Reflection::M),
            'a' => Some(Reflection::A),
            'b' => Some(Reflection::B),
            'c' => Some(Reflection::C),
            'n' => Some(Reflection::N),
            'd' => Some(Reflection::D),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Reflection::M => 'm',
            Reflection::A => 'a',
            Reflection::B => 'b',
            Reflection::C => 'c',
            Reflection::N => 'n',
            Reflection::D => 'd',
            Reflection::G => 'g',
            Reflection::E => 'e',
        }
    }
}

/// One directional operator of a symbol: a rotation axis, a reflection
/// plane, or both stacked as `n/letter`.
///
/// `order` 0 marks a bare plane with no rotation part; order 1 is the
/// placeholder `1` filling an unused slot (or `-1` when `rotoinversion`
/// is set). A screw component is stored as the subscript digit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Operator {
    pub order: u8,
    pub rotoinversion: bool,
    pub screw: u8,
    pub reflection: Option<Reflection>,
    pub direction: Option<Direction>,
}

impl Operator {
    /// A bare mirror or glide plane.
    pub fn mirror(reflection: Reflection) -> Self {
        Self {
            order: 0,
            rotoinversion: false,
            screw: 0,
            reflection: Some(reflection),
            direction: None,
        }
    }

    /// A rotation, screw or rotoinversion axis.
    pub fn rotation(order: u8, screw: u8, rotoinversion: bool) -> Self {
        Self {
            order,
            rotoinversion,
            screw,
            reflection: None,
            direction: None,
        }
    }

    /// An axis and a plane sharing one direction, printed as `n/letter`.
    pub fn compound(order: u8, screw: u8, reflection: Reflection) -> Self {
        Self {
            order,
            rotoinversion: false,
            screw,
            reflection: Some(reflection),
            direction: None,
        }
    }

    /// The placeholder `1` for an unused slot.
    pub fn unity() -> Self {
        Self {
            order: 1,
            rotoinversion: false,
            screw: 0,
            reflection: None,
            direction: None,
        }
    }

    /// True when the operator carries an actual rotation axis.
    pub fn has_rotation(&self) -> bool {
        self.order >= 2
    }

    /// True for the bare placeholder `1`.
    pub fn is_unity(&self) -> bool {
        self.order <= 1 && !self.rotoinversion && self.reflection.is_none()
    }

    /// True for `1` and `-1` alike, i.e. no axis and no plane.
    pub fn is_order_one(&self) -> bool {
        self.order <= 1 && self.reflection.is_none()
    }

    /// Render the operator as one token of a formatted symbol.
    pub fn format(&self) -> String {
        let mut token = String::new();
        if self.order >= 2 || self.rotoinversion {
            if self.rotoinversion {
                token.push('-');
            }
            token.push_str(&self.order.max(1).to_string());
            if self.screw > 0 {
                token.push_str(&self.screw.to_string());
            }
            if let Some(reflection) = self.reflection {
                token.push('/');
                token.push(reflection.as_char());
            }
        } else if let Some(reflection) = self.reflection {
            token.push(reflection.as_char());
        } else {
            token.push('1');
        }
        token
    }
}

/// A digested Hermann-Mauguin symbol: a centering plus up to three
/// directional operators in schema order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symbol {
    pub centering: Centering,
    pub operators: Vec<Operator>,
}

impl Symbol {
    pub fn new(centering: Centering, operators: Vec<Operator>) -> Self {
        Self {
            centering,
            operators,
        }
    }

    /// Render the symbol in the formatted convention, e.g. `P 21/c`.
    pub fn format(&self) -> String {
        let mut text = self.centering.as_char().to_string();
        for operator in &self.operators {
            text.push(' ');
            text.push_str(&operator.format());
        }
        text
    }
}
