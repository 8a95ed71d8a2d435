//! Seed word suggestions.

use rand::seq::SliceRandom;

const SEED_WORDS: [&str; 38] = [
    "brave", "storm", "flame", "stone", "swift", "honor", "might", "glory", "fierce", "noble",
    "strong", "valor", "power", "grace", "force", "pride", "steel", "blade", "shield", "crown",
    "heart", "soul", "wind", "light", "shadow", "frost", "thunder", "crystal", "diamond", "golden",
    "silver", "crimson", "azure", "emerald", "ivory", "obsidian", "amber", "jade",
];

/// Picks `count` distinct words to offer as seeds.
pub fn suggest(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    SEED_WORDS
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}
