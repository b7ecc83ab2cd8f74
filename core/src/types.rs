/// Identifier shared by the two cards of a pair.
pub type PairId = u16;

/// Count type used for pair counts and matched-pair tallies.
pub type PairCount = u16;

/// Position of a card in the shuffled display order.
pub type CardIndex = usize;

/// Running score, can go negative after repeated mismatches.
pub type Score = i64;

/// Number of failed match attempts a single card took part in.
pub type MismatchCount = u32;

pub const fn card_total(pairs: PairCount) -> usize {
    (pairs as usize) * 2
}
