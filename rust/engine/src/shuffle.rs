use crate::rng::{ShuffleAlgorithm, UnitRandom};

/// Generator key for a round: `"<seed>-<round>"`.
pub fn round_key(seed: &str, round: u32) -> String {
    format!("{}-{}", seed, round)
}

/// Permutes a copy of `items` for the given seed and round using the
/// seedrandom-compatible generator.
///
/// The same `(items, seed, round)` always yields the same order.
///
/// ```
/// use cardroom_engine::shuffle::shuffle;
///
/// let cards = ["🍎", "🍋", "🍌"];
/// assert_eq!(shuffle(&cards, "SEED", 1), vec!["🍋", "🍌", "🍎"]);
/// assert_eq!(shuffle(&cards, "SEED", 2), vec!["🍌", "🍎", "🍋"]);
/// ```
pub fn shuffle<T: Clone>(items: &[T], seed: &str, round: u32) -> Vec<T> {
    shuffle_with(items, seed, round, ShuffleAlgorithm::Arc4)
}

pub fn shuffle_with<T: Clone>(
    items: &[T],
    seed: &str,
    round: u32,
    algorithm: ShuffleAlgorithm,
) -> Vec<T> {
    let mut out = items.to_vec();
    if out.len() < 2 {
        return out;
    }
    let mut rng = algorithm.generator(&round_key(seed, round));
    fisher_yates(&mut out, rng.as_mut());
    out
}

/// In-place Fisher-Yates walking from the back: `j = floor(u * (i + 1))`.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut dyn UnitRandom) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_unit() * (i + 1) as f64).floor() as usize;
        items.swap(i, j.min(i));
    }
}
