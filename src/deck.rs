//! The deck record consumed by the selection engine.

use std::collections::HashSet;

use crate::error::DeckError;
use crate::normalize::{normalize_token, MemberSet};

/// Number of picks in a deck.
pub const DECK_SIZE: usize = 5;

/// A logged team: five picks and the score it achieved.
///
/// `id` is carried through to the result for identity only; two decks
/// with the same members and score but different ids are distinct
/// candidates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Opaque caller-assigned identifier.
    pub id: String,
    /// Pick labels in display form.
    pub members: Vec<String>,
    /// Achieved score; must be finite and positive.
    pub score: f64,
}

impl Deck {
    /// Creates a deck without validating it.
    pub fn new<I, S>(id: impl Into<String>, members: I, score: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            members: members.into_iter().map(Into::into).collect(),
            score,
        }
    }

    /// Checks member count and score.
    ///
    /// Member uniqueness within the deck is the caller's responsibility
    /// and is not checked here.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.members.len() != DECK_SIZE {
            return Err(DeckError::MemberCount {
                expected: DECK_SIZE,
                actual: self.members.len(),
            });
        }
        if !self.score.is_finite() {
            return Err(DeckError::NonFiniteScore { score: self.score });
        }
        if self.score <= 0.0 {
            return Err(DeckError::NonPositiveScore { score: self.score });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Normalized members of this deck.
    pub fn member_set(&self) -> MemberSet {
        MemberSet::from_labels(&self.members)
    }

    /// Whether the two decks share a pick.
    ///
    /// Normalizes both decks on every call. When testing one deck against
    /// many, build its [`member_set`](Self::member_set) once and use
    /// [`MemberSet::overlaps`] instead.
    pub fn overlaps(&self, other: &Deck) -> bool {
        self.member_set().overlaps(&other.member_set())
    }

    /// Content identity: score followed by the normalized members in
    /// their listed order, `|`-separated.
    ///
    /// ```
    /// use deckpick::deck::Deck;
    ///
    /// let d = Deck::new("a", ["Red Hood", "Rapi", "Alice", "Crown", "Helm"], 1200.0);
    /// assert_eq!(d.content_key(), "1200|redhood|rapi|alice|crown|helm");
    /// ```
    pub fn content_key(&self) -> String {
        let mut key = self.score.to_string();
        for m in &self.members {
            key.push('|');
            key.push_str(&normalize_token(m));
        }
        key
    }
}

/// Drops decks whose [`content_key`](Deck::content_key) was already seen,
/// keeping the first occurrence and the original order.
pub fn dedup_pool(decks: Vec<Deck>) -> Vec<Deck> {
    let mut seen = HashSet::with_capacity(decks.len());
    decks
        .into_iter()
        .filter(|d| seen.insert(d.content_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(id: &str, members: &[&str], score: f64) -> Deck {
        Deck::new(id, members.iter().copied(), score)
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let d = deck("d1", &["a", "b", "c", "d", "e"], 10.0);
        assert_eq!(d.validate(), Ok(()));
        assert!(d.is_valid());
    }

    #[test]
    fn test_validate_member_count() {
        let d = deck("d1", &["a", "b", "c", "d"], 10.0);
        assert_eq!(
            d.validate(),
            Err(DeckError::MemberCount {
                expected: 5,
                actual: 4
            })
        );

        let d = deck("d2", &["a", "b", "c", "d", "e", "f"], 10.0);
        assert!(!d.is_valid());
    }

    #[test]
    fn test_validate_score() {
        let members = ["a", "b", "c", "d", "e"];
        assert!(matches!(
            deck("z", &members, 0.0).validate(),
            Err(DeckError::NonPositiveScore { .. })
        ));
        assert!(matches!(
            deck("n", &members, -1.0).validate(),
            Err(DeckError::NonPositiveScore { .. })
        ));
        assert!(matches!(
            deck("nan", &members, f64::NAN).validate(),
            Err(DeckError::NonFiniteScore { .. })
        ));
        assert!(matches!(
            deck("inf", &members, f64::INFINITY).validate(),
            Err(DeckError::NonFiniteScore { .. })
        ));
    }

    #[test]
    fn test_overlap_ignores_case_and_whitespace() {
        let a = deck("a", &["Anchor", "b", "c", "d", "e"], 1.0);
        let b = deck("b", &["anchor ", "f", "g", "h", "i"], 1.0);
        let c = deck("c", &["f", "g", "h", "i", "j"], 1.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_content_key_formats_fractional_scores() {
        let d = deck("x", &["A", "B", "C", "D", "E"], 12.5);
        assert_eq!(d.content_key(), "12.5|a|b|c|d|e");
    }

    #[test]
    fn test_dedup_pool_keeps_first() {
        let pool = vec![
            deck("1", &["Rapi", "b", "c", "d", "e"], 100.0),
            deck("2", &["rapi", "B", "c", "d", "e"], 100.0),
            deck("3", &["Rapi", "b", "c", "d", "e"], 90.0),
            deck("4", &["b", "Rapi", "c", "d", "e"], 100.0),
        ];
        let ids: Vec<String> = dedup_pool(pool).into_iter().map(|d| d.id).collect();
        // Member order is part of the key, so "4" survives.
        assert_eq!(ids, vec!["1", "3", "4"]);
    }
}
