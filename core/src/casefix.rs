//! Case classification and one-way case propagation for English candidates.
//!
//! The translator that produces English candidates is case-insensitive, so
//! its output rarely matches the capitalization the user actually typed.
//! These functions classify candidate text and rewrite it to follow the
//! typed form. All of them are pure and total over `&str`.

/// Punctuation accepted inside a word-shaped candidate.
const WORD_PUNCT: &[char] = &['\'', '-', '.', ',', '!', '?', ':', ';', '"', '(', ')'];

/// True iff every character of `s` is an ASCII letter, digit, space, or one
/// of the fixed punctuation set. Candidates that fail this test bypass case
/// fixing entirely and are deduplicated verbatim.
pub fn is_word_shape(s: &str) -> bool {
    s.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == ' ' || WORD_PUNCT.contains(&ch))
}

/// True iff `s` contains at least one ASCII uppercase letter.
pub fn has_uppercase(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_uppercase())
}

/// Lowercase ASCII letters only; every other byte passes through unchanged.
///
/// Non-ASCII content never reaches this path in practice because word-shape
/// screening happens upstream, but the function stays total regardless.
pub fn casefold_ascii(s: &str) -> String {
    s.chars()
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// True iff the first byte of `s` is outside the ASCII range.
pub fn starts_non_ascii(s: &str) -> bool {
    s.as_bytes().first().is_some_and(|b| *b >= 0x80)
}

/// Rewrite `candidate` so its capitalization follows `typed`, position by
/// position.
///
/// For each index below the shorter of the two lengths, an alphabetic
/// candidate character is uppercased when the typed character at the same
/// index is ASCII uppercase. Typed lowercase never demotes an uppercase
/// candidate letter, and positions beyond `typed` are copied verbatim.
/// Alignment is strictly positional: if the candidate text diverges from
/// the typed run (inserted apostrophes, expansions), promotion lands on the
/// shifted position. That is an accepted limitation of the policy.
pub fn fix_case(candidate: &str, typed: &str) -> String {
    let typed_bytes = typed.as_bytes();
    candidate
        .char_indices()
        .map(|(i, ch)| {
            if ch.is_ascii_alphabetic()
                && typed_bytes.get(i).is_some_and(|b| b.is_ascii_uppercase())
            {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}
