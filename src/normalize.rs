//! Pick-label normalization.
//!
//! Deck members are free-form display labels typed by players, so
//! "Red Hood", "redhood" and " RED HOOD " must all compare as the same
//! pick. [`normalize_token`] maps a label to its comparison key and
//! [`MemberSet`] holds the keys of one deck.

use std::collections::HashSet;

/// Canonical comparison key for a pick label.
///
/// Removes every whitespace character, plus the byte-order mark U+FEFF
/// that pasted labels sometimes carry, and lower-cases the rest. The
/// function is total (the empty label maps to the empty token) and
/// idempotent.
///
/// ```
/// use deckpick::normalize::normalize_token;
///
/// assert_eq!(normalize_token("  Red Hood "), "redhood");
/// assert_eq!(normalize_token(&normalize_token("Red Hood")), "redhood");
/// ```
pub fn normalize_token(label: &str) -> String {
    label
        .chars()
        .filter(|&c| !c.is_whitespace() && c != '\u{FEFF}')
        .flat_map(char::to_lowercase)
        .collect()
}

/// The normalized members of one deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSet {
    tokens: HashSet<String>,
}

impl MemberSet {
    /// Normalizes each label and collects the tokens.
    ///
    /// Labels that normalize to the same token collapse into one entry.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            tokens: labels.iter().map(|l| normalize_token(l.as_ref())).collect(),
        }
    }

    /// Whether the two sets share at least one token.
    pub fn overlaps(&self, other: &MemberSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.tokens.iter().any(|t| large.tokens.contains(t))
    }

    /// Whether `label` (normalized) is a member.
    pub fn contains(&self, label: &str) -> bool {
        self.tokens.contains(&normalize_token(label))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates the normalized tokens in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Whether two member sets intersect.
pub fn has_overlap(a: &MemberSet, b: &MemberSet) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace_and_case() {
        assert_eq!(normalize_token("Anchor"), "anchor");
        assert_eq!(normalize_token("anchor "), "anchor");
        assert_eq!(normalize_token(" Snow\tWhite\n"), "snowwhite");
        assert_eq!(normalize_token("SNOW WHITE"), "snowwhite");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_token(""), "");
        assert_eq!(normalize_token("   \t"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for label in ["Red Hood", "  mAsT  ", "", "Scarlet: Black Shadow", "홍 련"] {
            let once = normalize_token(label);
            assert_eq!(
                normalize_token(&once),
                once,
                "normalizing twice changed {label:?}"
            );
        }
    }

    #[test]
    fn test_normalize_non_ascii() {
        // Hangul has no case; full-width space is whitespace.
        assert_eq!(normalize_token("홍\u{3000}련"), "홍련");
        assert_eq!(normalize_token("ÉCLAIR"), "éclair");
    }

    #[test]
    fn test_normalize_strips_byte_order_mark() {
        assert_eq!(normalize_token("\u{FEFF}Rapi"), "rapi");
        assert_eq!(normalize_token("Red\u{FEFF} Hood"), "redhood");
        let pasted = MemberSet::from_labels(&["\u{FEFF}Anchor"]);
        assert!(pasted.contains("anchor"));
    }

    #[test]
    fn test_member_set_overlap() {
        let a = MemberSet::from_labels(&["Anchor", "Liter", "Crown", "Rapi", "Alice"]);
        let b = MemberSet::from_labels(&["anchor ", "Helm", "Noise", "Dolla", "Mast"]);
        let c = MemberSet::from_labels(&["Helm", "Noise", "Dolla", "Mast", "Tove"]);

        assert!(a.overlaps(&b));
        assert!(has_overlap(&b, &a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_member_set_contains_normalizes_query() {
        let set = MemberSet::from_labels(&["Red Hood"]);
        assert!(set.contains("redhood"));
        assert!(set.contains(" RED HOOD"));
        assert!(!set.contains("Red"));
    }

    #[test]
    fn test_member_set_collapses_equivalent_labels() {
        let set = MemberSet::from_labels(&["Rapi", "rapi", " RAPI "]);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_empty_sets_never_overlap() {
        let empty = MemberSet::default();
        let one = MemberSet::from_labels(&["Rapi"]);
        assert!(!empty.overlaps(&one));
        assert!(!empty.overlaps(&empty));
    }
}
