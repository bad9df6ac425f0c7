//! Pairwise term distance functions.
//!
//! Edge weights in the term graph come from a pluggable distance function.
//! The default is Levenshtein edit distance over the normalized terms; any
//! closure over two string slices works as a drop-in replacement.

/// A pairwise distance (or similarity) function over terms.
///
/// Implementations must return a finite, non-negative value; anything else
/// is rejected at edge insertion.
pub trait Similarity {
    /// Distance between two terms
    fn distance(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64,
{
    fn distance(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Levenshtein edit distance over Unicode scalar values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Similarity for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> f64 {
        levenshtein(a, b) as f64
    }
}

/// Number of single-character insertions, deletions, and substitutions
/// needed to turn `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the edit matrix are enough
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(levenshtein("graph", "graph"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_classic_cases() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("book", "back"), 2);
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(levenshtein("", "word"), 4);
        assert_eq!(levenshtein("word", ""), 4);
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(
            levenshtein("machine", "learning"),
            levenshtein("learning", "machine")
        );
    }

    #[test]
    fn test_unicode_scalars() {
        // One substitution, not a byte-level comparison
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn test_levenshtein_metric() {
        let metric = Levenshtein;
        assert_eq!(metric.distance("kitten", "sitting"), 3.0);
    }

    #[test]
    fn test_closure_as_metric() {
        let constant = |_: &str, _: &str| 2.5;
        assert_eq!(constant.distance("a", "b"), 2.5);

        let length_gap = |a: &str, b: &str| (a.len() as f64 - b.len() as f64).abs();
        assert_eq!(length_gap.distance("four", "fo"), 2.0);
    }
}
