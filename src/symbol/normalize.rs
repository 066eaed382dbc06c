use crate::canonical::symbol_is_valid;
use crate::config::{MAX_OPERATORS, MAX_TOKEN_LEN};
use crate::error::SymbolError;
use crate::symbol::digest::parse_operator;
use crate::symbol::symbol_types::{Centering, Operator, Symbol};
use crate::Result;

/// Rewrite a loosely spelled symbol into the formatted convention.
///
/// Accepts compact and annotated spellings: missing or extra spaces, a
/// lowercase centering letter, screw digits in parentheses. The body is
/// split into operator tokens by trying longer tokens first; among the
/// complete splits, one that names a valid group beats one that does not,
/// and a split with more tokens beats a shorter one. `R32` therefore
/// reads as `R 3 2` rather than as a lone `32` screw, while `P3121`
/// stays `P 31 2 1`.
///
/// This is a lexical rewrite. The result is well formed but not
/// necessarily a valid group; validity is judged during canonicalization.
///
/// # Arguments
/// * `raw` - Symbol text in any accepted spelling
///
/// # Returns
/// The symbol in the formatted convention, or `Malformed` when no split
/// into operator tokens exists.
pub fn normalize_to_formatted(raw: &str) -> Result<String> {
    let stripped: String = raw
        .chars()
        .filter(|letter| !matches!(letter, '(' | ')'))
        .collect();
    let text = stripped.trim();
    if !text.is_ascii() {
        return Err(SymbolError::Malformed(format!(
            "non-ascii character in '{raw}'"
        )));
    }

    let mut chars = text.chars();
    let centering = match chars.next() {
        Some(letter) => Centering::from_char(letter.to_ascii_uppercase())?,
        None => return Err(SymbolError::Malformed("empty symbol".to_string())),
    };

    let body: String = chars
        .as_str()
        .chars()
        .filter(|letter| !letter.is_whitespace())
        .map(|letter| letter.to_ascii_lowercase())
        .collect();
    if body.is_empty() {
        return Err(SymbolError::Malformed(format!("no operators in '{text}'")));
    }

    let mut candidates = Vec::new();
    decompose(&body, &mut Vec::new(), &mut candidates);
    if candidates.is_empty() {
        return Err(SymbolError::Malformed(format!(
            "cannot split '{text}' into operator tokens"
        )));
    }

    // Candidates arrive greediest first, so a strict comparison keeps the
    // earliest split on ties.
    let mut chosen: Option<(usize, (bool, usize))> = None;
    for (index, tokens) in candidates.iter().enumerate() {
        let operators = tokens
            .iter()
            .map(|token| parse_operator(token))
            .collect::<Result<Vec<Operator>>>()?;
        let score = (
            symbol_is_valid(&Symbol::new(centering, operators)),
            tokens.len(),
        );
        if chosen.map_or(true, |(_, best)| score > best) {
            chosen = Some((index, score));
        }
    }
    let (index, _) = chosen.ok_or_else(|| {
        SymbolError::Malformed(format!("cannot split '{text}' into operator tokens"))
    })?;

    let mut formatted = centering.as_char().to_string();
    for token in &candidates[index] {
        formatted.push(' ');
        formatted.push_str(token);
    }
    Ok(formatted)
}

/// Enumerate every split of `body` into 1 to `MAX_OPERATORS` parseable
/// tokens, longest leading token first.
fn decompose(body: &str, tokens: &mut Vec<String>, found: &mut Vec<Vec<String>>) {
    if body.is_empty() {
        found.push(tokens.clone());
        return;
    }
    if tokens.len() == MAX_OPERATORS {
        return;
    }
    let longest = body.len().min(MAX_TOKEN_LEN);
    for length in (1..=longest).rev() {
        let (head, tail) = body.split_at(length);
        if parse_operator(head).is_ok() {
            tokens.push(head.to_string());
            decompose(tail, tokens, found);
            tokens.pop();
        }
    }
}
