use crate::config::{MAX_OPERATORS, MAX_TOKEN_LEN};
use crate::error::SymbolError;
use crate::symbol::symbol_types::{Centering, Operator, Reflection, Symbol};
use crate::Result;

/// Digest a formatted Hermann-Mauguin symbol into its structured form.
///
/// Expects the formatted convention: an uppercase centering letter
/// followed by one to three operator tokens separated by spaces, e.g.
/// `P 21/c` or `F -4 3 m`. Looser spellings must be rewritten with the
/// normalizer first.
///
/// # Arguments
/// * `formatted` - Symbol text in the formatted convention
///
/// # Returns
/// The centering and operator list, or `Malformed` when the text does not
/// follow the grammar.
pub fn digest(formatted: &str) -> Result<Symbol> {
    let text = formatted.trim();
    let mut chars = text.chars();
    let centering = match chars.next() {
        Some(letter) => Centering::from_char(letter)?,
        None => return Err(SymbolError::Malformed("empty symbol".to_string())),
    };

    let tokens: Vec<&str> = chars.as_str().split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > MAX_OPERATORS {
        return Err(SymbolError::Malformed(format!(
            "expected 1 to {MAX_OPERATORS} operator tokens in '{text}'"
        )));
    }

    let operators = tokens
        .iter()
        .map(|token| parse_operator(token))
        .collect::<Result<Vec<_>>>()?;

    Ok(Symbol::new(centering, operators))
}

/// Parse one operator token: a plane letter, a rotation with optional
/// screw digit, or a rotation over a plane like `21/c`.
pub(crate) fn parse_operator(token: &str) -> Result<Operator> {
    let malformed = || SymbolError::Malformed(format!("bad operator token '{token}'"));
    if token.is_empty() || token.len() > MAX_TOKEN_LEN {
        return Err(malformed());
    }

    // A lone plane letter is a complete token.
    if token.len() == 1 {
        if let Some(reflection) = token.chars().next().and_then(Reflection::from_char) {
            return Ok(Operator::mirror(reflection));
        }
    }

    let mut chars = token.chars().peekable();
    let rotoinversion = chars.peek() == Some(&'-');
    if rotoinversion {
        chars.next();
    }

    let order = match chars.next() {
        Some(digit @ '0'..='9') => digit as u8 - b'0',
        _ => return Err(malformed()),
    };
    if !matches!(order, 1 | 2 | 3 | 4 | 6) {
        return Err(SymbolError::Malformed(format!(
            "unsupported rotation order in '{token}'"
        )));
    }
    // -2 is a reflection and is always written as a plane letter.
    if rotoinversion && order == 2 {
        return Err(malformed());
    }

    let mut screw = 0u8;
    if let Some(digit @ '0'..='9') = chars.peek().copied() {
        chars.next();
        screw = digit as u8 - b'0';
        if rotoinversion || screw == 0 || screw >= order {
            return Err(SymbolError::Malformed(format!(
                "impossible screw component in '{token}'"
            )));
        }
    }

    let mut reflection = None;
    if chars.peek() == Some(&'/') {
        chars.next();
        if rotoinversion {
            return Err(malformed());
        }
        let letter = chars.next().ok_or_else(malformed)?;
        reflection = Some(Reflection::from_char(letter).ok_or_else(malformed)?);
    }

    if chars.next().is_some() {
        return Err(malformed());
    }

    Ok(match reflection {
        Some(reflection) if order >= 2 => Operator::compound(order, screw, reflection),
        // "1/m" carries no rotation worth keeping.
        Some(reflection) => Operator::mirror(reflection),
        None if order >= 2 || rotoinversion => Operator::rotation(order, screw, rotoinversion),
        None => Operator::unity(),
    })
}
