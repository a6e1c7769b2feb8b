//! Name similarity scoring.
//!
//! The matcher only needs a 0-100 score, so the implementation can be
//! swapped out (or removed entirely) without touching the matching rules.

/// Scores how alike two names are on a 0-100 scale.
pub trait NameSimilarity: Send + Sync {
    /// Some(score), or None when the capability is unavailable.
    fn score(&self, a: &str, b: &str) -> Option<u8>;
}

/// Best alignment of the shorter name against every same-length window of
/// the longer one, scored by normalized edit distance.
pub struct PartialRatio;

impl NameSimilarity for PartialRatio {
    fn score(&self, a: &str, b: &str) -> Option<u8> {
        Some(partial_ratio(a, b))
    }
}

/// Null implementation: fuzzy matching unavailable, exact comparisons only.
pub struct NoSimilarity;

impl NameSimilarity for NoSimilarity {
    fn score(&self, _a: &str, _b: &str) -> Option<u8> {
        None
    }
}

/// Partial-ratio similarity in [0, 100]. Empty input scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let mut best = 0u8;

    for window in long.windows(short.len()) {
        let dist = levenshtein(short, window);
        let score = (100 * (short.len() - dist) / short.len()) as u8;
        if score > best {
            best = score;
        }
        if best == 100 {
            break;
        }
    }

    best
}

/// Two-row Levenshtein over chars.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
