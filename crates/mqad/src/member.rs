//! Member filtering.

use crate::similarity::{NameSimilarity, PartialRatio};
use std::sync::Arc;

/// Similarity score at or above which two names count as the same member.
const MATCH_THRESHOLD: u8 = 85;

/// Decides whether a message author matches the asked-about member.
pub struct MemberMatcher {
    similarity: Arc<dyn NameSimilarity>,
}

impl MemberMatcher {
    pub fn new(similarity: Arc<dyn NameSimilarity>) -> Self {
        Self { similarity }
    }

    /// No target means every message is in scope. Otherwise compare
    /// case-insensitively, falling back to the similarity capability
    /// when present.
    pub fn matches(&self, target: Option<&str>, member_name: &str) -> bool {
        let Some(target) = target else {
            return true;
        };

        let name = member_name.to_lowercase();
        let target = target.to_lowercase();
        if name == target {
            return true;
        }

        match self.similarity.score(&name, &target) {
            Some(score) => score >= MATCH_THRESHOLD,
            None => false,
        }
    }
}

impl Default for MemberMatcher {
    fn default() -> Self {
        Self::new(Arc::new(PartialRatio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::NoSimilarity;

    #[test]
    fn test_no_target_matches_everything() {
        let matcher = MemberMatcher::default();
        assert!(matcher.matches(None, "Layla"));
        assert!(matcher.matches(None, ""));
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let matcher = MemberMatcher::default();
        assert!(matcher.matches(Some("layla"), "LAYLA"));
    }

    #[test]
    fn test_fuzzy_match_on_partial_name() {
        let matcher = MemberMatcher::default();
        assert!(matcher.matches(Some("Amira"), "Amira Khan"));
        assert!(!matcher.matches(Some("Zed"), "Maria"));
    }

    #[test]
    fn test_degrades_to_exact_without_similarity() {
        let matcher = MemberMatcher::new(Arc::new(NoSimilarity));
        assert!(matcher.matches(Some("Amira Khan"), "amira khan"));
        assert!(!matcher.matches(Some("Amira"), "Amira Khan"));
        assert!(matcher.matches(None, "anyone"));
    }
}
