use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Points awarded for a matched pair.
pub const MATCH_REWARD: Score = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Cards turned over during the current attempt.
///
/// A completed attempt stays in `Two` until the next selection turns it back,
/// including when the two cards matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceUp {
    Empty,
    One(CardIndex),
    Two(CardIndex, CardIndex),
}

impl FaceUp {
    pub const fn contains(self, index: CardIndex) -> bool {
        match self {
            Self::Empty => false,
            Self::One(first) => first == index,
            Self::Two(first, second) => first == index || second == index,
        }
    }

    pub const fn len(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for FaceUp {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawGameEngine")]
pub struct GameEngine {
    deck: Deck,
    cards: Vec<Card>,
    face_up: FaceUp,
    score: Score,
    flip_count: Saturating<u32>,
    pairs_matched: PairCount,
    state: EngineState,
}

#[derive(Deserialize)]
struct RawGameEngine {
    deck: Deck,
    cards: Vec<Card>,
    face_up: FaceUp,
    score: Score,
    flip_count: Saturating<u32>,
    pairs_matched: PairCount,
    state: EngineState,
}

impl TryFrom<RawGameEngine> for GameEngine {
    type Error = GameError;

    fn try_from(raw: RawGameEngine) -> Result<Self> {
        let engine = Self {
            deck: raw.deck,
            cards: raw.cards,
            face_up: raw.face_up,
            score: raw.score,
            flip_count: raw.flip_count,
            pairs_matched: raw.pairs_matched,
            state: raw.state,
        };
        engine.validate()?;
        Ok(engine)
    }
}

impl GameEngine {
    pub fn new(deck: Deck) -> Self {
        log::debug!("Starting game with {} pairs", deck.pair_count());
        let cards = deck.pair_ids().iter().map(|&id| Card::new(id)).collect();
        Self {
            deck,
            cards,
            face_up: Default::default(),
            score: 0,
            flip_count: Saturating(0),
            pairs_matched: 0,
            state: Default::default(),
        }
    }

    /// Deals a freshly shuffled deck of `pairs` pairs.
    pub fn with_pairs(pairs: PairCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new(pairs)?;
        Ok(Self::new(RandomDeckGenerator::new(seed).generate(config)))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn face_up(&self) -> FaceUp {
        self.face_up
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn flip_count(&self) -> u32 {
        self.flip_count.0
    }

    pub fn pairs_matched(&self) -> PairCount {
        self.pairs_matched
    }

    pub fn pairs_remaining(&self) -> PairCount {
        self.deck.pair_count().saturating_sub(self.pairs_matched)
    }

    /// Checks that the cards, held indices and tallies agree with the deck.
    pub fn validate(&self) -> Result<()> {
        let consistent_cards = self.cards.len() == self.deck.len()
            && self
                .cards
                .iter()
                .zip(self.deck.pair_ids())
                .all(|(card, &id)| card.pair_id() == id);
        if !consistent_cards {
            return Err(GameError::InconsistentState);
        }

        let held_in_range = match self.face_up {
            FaceUp::Empty => true,
            FaceUp::One(first) => first < self.cards.len(),
            FaceUp::Two(first, second) => {
                first != second && first < self.cards.len() && second < self.cards.len()
            }
        };
        if !held_in_range {
            return Err(GameError::InconsistentState);
        }

        let matched_cards = self.cards.iter().filter(|card| card.is_matched()).count();
        if self.pairs_matched > self.deck.pair_count()
            || matched_cards != card_total(self.pairs_matched)
            || self.state.is_finished() != (self.pairs_matched == self.deck.pair_count())
        {
            return Err(GameError::InconsistentState);
        }

        Ok(())
    }

    /// Turns the card at `index` face up and settles the attempt it belongs to.
    ///
    /// Selecting a card that is already showing in this attempt, or one that
    /// has been matched, changes nothing.
    pub fn select(&mut self, index: CardIndex) -> Result<SelectOutcome> {
        let index = self.deck.validate_index(index)?;

        if self.face_up.contains(index) || self.cards[index].is_matched() {
            return Ok(SelectOutcome::NoChange);
        }

        self.cards[index].turn_face_up();

        let outcome = match self.face_up {
            FaceUp::Two(first, second) => {
                self.cards[first].turn_face_down();
                self.cards[second].turn_face_down();
                self.face_up = FaceUp::One(index);
                SelectOutcome::Flipped
            }
            FaceUp::One(held) => {
                let outcome = self.check_for_match(held, index);
                self.face_up = FaceUp::Two(held, index);
                outcome
            }
            FaceUp::Empty => {
                self.face_up = FaceUp::One(index);
                SelectOutcome::Flipped
            }
        };

        self.flip_count += 1;
        self.mark_started();
        log::trace!("Flipped card {} ({:?})", index, outcome);

        Ok(outcome)
    }

    fn check_for_match(&mut self, first: CardIndex, second: CardIndex) -> SelectOutcome {
        if first == second {
            return SelectOutcome::Flipped;
        }

        if self.cards[first] == self.cards[second] {
            self.score += MATCH_REWARD;
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();
            self.pairs_matched += 1;
            log::debug!(
                "Matched cards {} and {}, score {}",
                first,
                second,
                self.score
            );

            if self.pairs_matched == self.deck.pair_count() {
                self.end_game();
                SelectOutcome::Won
            } else {
                SelectOutcome::Matched
            }
        } else {
            // penalty uses the history from before this attempt
            let penalty = Score::from(self.cards[first].mismatch_count())
                + Score::from(self.cards[second].mismatch_count());
            self.score -= penalty;
            self.cards[first].record_mismatch();
            self.cards[second].record_mismatch();
            log::debug!(
                "Mismatched cards {} and {}, penalty {}, score {}",
                first,
                second,
                penalty,
                self.score
            );
            SelectOutcome::Mismatched
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self) {
        if self.state.is_finished() {
            return;
        }

        self.state = EngineState::Won;
        log::debug!(
            "All {} pairs matched, final score {}",
            self.pairs_matched,
            self.score
        );
    }
}
