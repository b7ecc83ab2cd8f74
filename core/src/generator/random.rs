use super::*;

/// Uniformly shuffled deck, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: GameConfig) -> Deck {
        use rand::prelude::*;

        let mut deck = Deck::ordered(config);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        deck.shuffle_with(&mut rng);

        // double check the shuffle kept every pair intact
        if !deck.is_well_formed() {
            log::warn!(
                "Shuffled deck lost its pairing, requested {} pairs, got {:?}",
                config.pairs(),
                deck.pair_ids()
            );
        }
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn generate(pairs: PairCount, seed: u64) -> Deck {
        RandomDeckGenerator::new(seed).generate(GameConfig::new(pairs).unwrap())
    }

    #[test]
    fn every_pair_appears_twice() {
        for pairs in [1, 2, 6, 50] {
            let deck = generate(pairs, 9);
            assert_eq!(deck.len(), usize::from(pairs) * 2);

            let mut counts = vec![0; usize::from(pairs)];
            for &id in deck.pair_ids() {
                counts[usize::from(id)] += 1;
            }
            assert!(counts.iter().all(|&count| count == 2), "pairs {pairs}");
        }
    }

    #[test]
    fn same_seed_gives_same_deck() {
        assert_eq!(generate(12, 77), generate(12, 77));
        assert_ne!(generate(12, 77), generate(12, 78));
    }

    #[test]
    fn positions_are_uniform_across_seeds() {
        const PAIRS: PairCount = 3;
        const TRIALS: u64 = 6000;
        let cards = usize::from(PAIRS) * 2;

        // hits[position][pair]
        let mut hits: Vec<Vec<u32>> = vec![vec![0; usize::from(PAIRS)]; cards];
        for seed in 0..TRIALS {
            let deck = generate(PAIRS, seed);
            for (position, &id) in deck.pair_ids().iter().enumerate() {
                hits[position][usize::from(id)] += 1;
            }
        }

        // each pair owns two of the six cards, so 1/3 of the trials per cell
        let expected = (TRIALS / u64::from(PAIRS)) as u32;
        for row in &hits {
            for &count in row {
                assert!(
                    count.abs_diff(expected) < expected / 10,
                    "skewed shuffle: {hits:?}"
                );
            }
        }
    }
}
