#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use observation::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod observation;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pairs: PairCount,
}

impl GameConfig {
    pub fn new(pairs: PairCount) -> Result<Self> {
        if pairs == 0 {
            return Err(GameError::InvalidPairCount);
        }
        Ok(Self { pairs })
    }

    /// Six pairs on a twelve card table.
    pub const fn classic() -> Self {
        Self { pairs: 6 }
    }

    pub const fn pairs(&self) -> PairCount {
        self.pairs
    }

    pub const fn total_cards(&self) -> usize {
        card_total(self.pairs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Fixed display order of a deck: the pair id found at every table position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    pair_ids: Vec<PairId>,
    pairs: PairCount,
}

#[derive(Deserialize)]
struct RawDeck {
    pair_ids: Vec<PairId>,
    pairs: PairCount,
}

impl TryFrom<RawDeck> for Deck {
    type Error = GameError;

    fn try_from(raw: RawDeck) -> Result<Self> {
        let deck = Self::from_pair_ids(&raw.pair_ids)?;
        if deck.pairs != raw.pairs {
            return Err(GameError::InvalidDeck);
        }
        Ok(deck)
    }
}

impl Deck {
    /// Unshuffled deck `0, 0, 1, 1, ...`.
    ///
    /// Pair ids are handed out from zero for every deck, so two games never
    /// share an id sequence.
    pub fn ordered(config: GameConfig) -> Self {
        let pair_ids = (0..config.pairs()).flat_map(|id| [id, id]).collect();
        Self {
            pair_ids,
            pairs: config.pairs(),
        }
    }

    /// Builds a deck from an explicit layout.
    ///
    /// Every id in `0..len / 2` has to appear exactly twice.
    pub fn from_pair_ids(pair_ids: &[PairId]) -> Result<Self> {
        if pair_ids.is_empty() || pair_ids.len() % 2 != 0 {
            return Err(GameError::InvalidDeck);
        }
        let pairs: PairCount = (pair_ids.len() / 2)
            .try_into()
            .map_err(|_| GameError::InvalidDeck)?;

        let mut seen = vec![0u8; usize::from(pairs)];
        for &id in pair_ids {
            let slot = seen
                .get_mut(usize::from(id))
                .ok_or(GameError::InvalidDeck)?;
            *slot += 1;
            if *slot > 2 {
                return Err(GameError::InvalidDeck);
            }
        }

        Ok(Self {
            pair_ids: pair_ids.to_vec(),
            pairs,
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig { pairs: self.pairs }
    }

    pub fn validate_index(&self, index: CardIndex) -> Result<CardIndex> {
        if index < self.pair_ids.len() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange)
        }
    }

    pub fn len(&self) -> usize {
        self.pair_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pair_ids.is_empty()
    }

    pub fn pair_count(&self) -> PairCount {
        self.pairs
    }

    pub fn pair_at(&self, index: CardIndex) -> Option<PairId> {
        self.pair_ids.get(index).copied()
    }

    pub fn pair_ids(&self) -> &[PairId] {
        &self.pair_ids
    }

    /// Positions of both cards belonging to `pair_id`.
    pub fn positions_of(&self, pair_id: PairId) -> Option<(CardIndex, CardIndex)> {
        let mut positions = self
            .pair_ids
            .iter()
            .enumerate()
            .filter(|&(_, &id)| id == pair_id)
            .map(|(index, _)| index);
        Some((positions.next()?, positions.next()?))
    }

    pub(crate) fn shuffle_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;

        self.pair_ids.shuffle(rng);
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        Self::from_pair_ids(&self.pair_ids).is_ok_and(|deck| deck.pairs == self.pairs)
    }
}

impl Index<CardIndex> for Deck {
    type Output = PairId;

    fn index(&self, index: CardIndex) -> &Self::Output {
        &self.pair_ids[index]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Flipped,
    Matched,
    Mismatched,
    Won,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_pairs() {
        assert_eq!(GameConfig::new(0), Err(GameError::InvalidPairCount));
        assert_eq!(GameConfig::new(4).map(|c| c.total_cards()), Ok(8));
        assert_eq!(GameConfig::default().pairs(), 6);
    }

    #[test]
    fn ordered_deck_numbers_pairs_from_zero() {
        let deck = Deck::ordered(GameConfig::new(3).unwrap());

        assert_eq!(deck.pair_ids(), &[0, 0, 1, 1, 2, 2]);
        assert_eq!(deck.pair_count(), 3);
        assert_eq!(deck.positions_of(2), Some((4, 5)));
        assert_eq!(deck.positions_of(3), None);
    }

    #[test]
    fn from_pair_ids_accepts_any_arrangement_of_pairs() {
        let deck = Deck::from_pair_ids(&[1, 0, 0, 1]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck[0], 1);
        assert_eq!(deck.game_config(), GameConfig::new(2).unwrap());
    }

    #[test]
    fn from_pair_ids_rejects_malformed_layouts() {
        assert_eq!(Deck::from_pair_ids(&[]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_pair_ids(&[0, 0, 1]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_pair_ids(&[0, 0, 0, 1]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_pair_ids(&[0, 0, 2, 2]), Err(GameError::InvalidDeck));
    }

    #[test]
    fn validate_index_checks_bounds() {
        let deck = Deck::from_pair_ids(&[0, 0]).unwrap();

        assert_eq!(deck.validate_index(1), Ok(1));
        assert_eq!(deck.validate_index(2), Err(GameError::IndexOutOfRange));
        assert_eq!(deck.pair_at(2), None);
    }

    #[test]
    fn deserialize_validates_layout() {
        let deck: Deck = serde_json::from_str(r#"{"pair_ids":[1,0,1,0],"pairs":2}"#).unwrap();
        assert_eq!(deck, Deck::from_pair_ids(&[1, 0, 1, 0]).unwrap());

        for json in [
            r#"{"pair_ids":[7,7,7],"pairs":0}"#,
            r#"{"pair_ids":[0,0],"pairs":3}"#,
            r#"{"pair_ids":[],"pairs":0}"#,
        ] {
            assert!(serde_json::from_str::<Deck>(json).is_err(), "accepted {json}");
        }
    }
}
