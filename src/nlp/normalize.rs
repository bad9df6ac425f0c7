//! Term normalization shared by graph construction and phrase merging.
//!
//! Both stages must agree on the normalized form, otherwise ranked terms
//! would not match tokens during the merge scan.

/// Lowercase a token and strip its trailing punctuation.
///
/// Abbreviation dots and sentence-final punctuation cling to tokens in most
/// tagger outputs ("Nov.", "systems,"); stripping them keeps one graph node
/// per term. Returns an empty string for pure-punctuation tokens.
pub fn normalize(raw: &str) -> String {
    raw.trim_end_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}
