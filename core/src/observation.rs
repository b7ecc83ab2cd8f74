use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer is allowed to know about a single table position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardView {
    Hidden,
    FaceUp(PairId),
    Matched(PairId),
}

impl CardView {
    pub const fn from_card(card: &Card) -> Self {
        if card.is_matched() {
            Self::Matched(card.pair_id())
        } else if card.is_face_up() {
            Self::FaceUp(card.pair_id())
        } else {
            Self::Hidden
        }
    }

    /// Pair id to draw, if the card is showing.
    pub const fn visible_pair(self) -> Option<PairId> {
        match self {
            Self::Hidden => None,
            Self::FaceUp(id) | Self::Matched(id) => Some(id),
        }
    }
}

/// Snapshot of a game, with face-down cards masked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub cards: Vec<CardView>,
    pub score: Score,
    pub flip_count: u32,
    pub pairs_remaining: PairCount,
    pub state: EngineState,
}

impl BoardView {
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self {
            cards: engine.cards().iter().map(CardView::from_card).collect(),
            score: engine.score(),
            flip_count: engine.flip_count(),
            pairs_remaining: engine.pairs_remaining(),
            state: engine.state(),
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|&&card| card == CardView::Hidden)
            .count()
    }
}
