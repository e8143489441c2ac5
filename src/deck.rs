//! Paired deck generation.

use alloc::format;
use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::{ConfigError, GameError};
use crate::kind::CardKind;

/// Builds a shuffled deck of `pair_count` pairs.
///
/// Pair `n` (1-based) takes its kind from `kinds` round-robin and its value
/// from `n`, so pairs stay distinct even when kinds repeat. The two cards of
/// a pair get provisional ids `pair{n}_a` and `pair{n}_b` until the board
/// assigns grid positions.
///
/// # Errors
///
/// Returns a configuration error if `pair_count` is zero or does not fit in
/// a `u32`, or if `kinds` is empty.
pub fn generate_deck<R: RngCore + ?Sized>(
    pair_count: usize,
    kinds: &[&'static CardKind],
    rng: &mut R,
) -> Result<Vec<Card>, GameError> {
    if pair_count == 0 {
        return Err(ConfigError::ZeroPairs.into());
    }
    if kinds.is_empty() {
        return Err(ConfigError::NoKinds.into());
    }
    let last_value =
        u32::try_from(pair_count).map_err(|_| ConfigError::TooManyPairs(pair_count))?;

    let mut cards = Vec::with_capacity(pair_count * 2);
    for (value, kind) in (1..=last_value).zip(kinds.iter().cycle()) {
        cards.push(Card::new(format!("pair{value}_a"), *kind, value));
        cards.push(Card::new(format!("pair{value}_b"), *kind, value));
    }

    cards.shuffle(rng);
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{ALL_KINDS, CLUBS, HEARTS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rejects_zero_pairs_and_no_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            generate_deck(0, &ALL_KINDS, &mut rng).unwrap_err(),
            GameError::Configuration(ConfigError::ZeroPairs)
        );
        assert_eq!(
            generate_deck(2, &[], &mut rng).unwrap_err(),
            GameError::Configuration(ConfigError::NoKinds)
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_pair_count_beyond_u32() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pair_count = u32::MAX as usize + 1;
        assert_eq!(
            generate_deck(pair_count, &ALL_KINDS, &mut rng).unwrap_err(),
            GameError::Configuration(ConfigError::TooManyPairs(pair_count))
        );
    }

    #[test]
    fn kinds_cycle_when_pairs_exceed_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = generate_deck(5, &[&HEARTS, &CLUBS], &mut rng).unwrap();
        deck.sort_by_key(Card::value);

        let kinds: Vec<&str> = deck.iter().step_by(2).map(|c| c.kind().name()).collect();
        assert_eq!(kinds, ["Hearts", "Clubs", "Hearts", "Clubs", "Hearts"]);
    }

    #[test]
    fn same_seed_same_order() {
        let a = generate_deck(8, &ALL_KINDS, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = generate_deck(8, &ALL_KINDS, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let ids_a: Vec<&str> = a.iter().map(Card::id).collect();
        let ids_b: Vec<&str> = b.iter().map(Card::id).collect();
        assert_eq!(ids_a, ids_b);
    }
}
