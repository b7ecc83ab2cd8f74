use serde::{Deserialize, Serialize};

use crate::*;

/// One physical card on the table.
///
/// Cards compare equal when they belong to the same pair, regardless of their
/// face-up, matched or mismatch state.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pair_id: PairId,
    face_up: bool,
    matched: bool,
    mismatches: MismatchCount,
}

impl Card {
    pub const fn new(pair_id: PairId) -> Self {
        Self {
            pair_id,
            face_up: false,
            matched: false,
            mismatches: 0,
        }
    }

    pub const fn pair_id(&self) -> PairId {
        self.pair_id
    }

    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    pub const fn mismatch_count(&self) -> MismatchCount {
        self.mismatches
    }

    /// Whether a renderer may show this card's pair token.
    pub const fn is_visible(&self) -> bool {
        self.face_up || self.matched
    }

    pub fn mark_matched(&mut self) {
        self.matched = true;
    }

    pub fn record_mismatch(&mut self) {
        self.mismatches = self.mismatches.saturating_add(1);
    }

    pub(crate) fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_face_down(&mut self) {
        self.face_up = false;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.pair_id == other.pair_id
    }
}

impl Eq for Card {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_starts_face_down_and_clean() {
        let card = Card::new(3);

        assert_eq!(card.pair_id(), 3);
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert_eq!(card.mismatch_count(), 0);
        assert!(!card.is_visible());
    }

    #[test]
    fn equality_ignores_mutable_state() {
        let mut a = Card::new(1);
        let b = Card::new(1);
        a.turn_face_up();
        a.record_mismatch();

        assert_eq!(a, b);
        assert_ne!(a, Card::new(2));
    }

    #[test]
    fn mark_matched_is_idempotent() {
        let mut card = Card::new(0);

        card.mark_matched();
        card.mark_matched();

        assert!(card.is_matched());
        assert!(card.is_visible());
    }

    #[test]
    fn record_mismatch_accumulates() {
        let mut card = Card::new(0);

        for _ in 0..3 {
            card.record_mismatch();
        }

        assert_eq!(card.mismatch_count(), 3);
    }
}
