//! The fixed vocabulary of guessable country names and the word picker.
//!
//! Words are uppercase ASCII with no other characters, so every position of a
//! sampled word can be revealed by letter guesses. Picking goes through a
//! caller-supplied [`Rng`] so the binary can seed it for reproducible rounds
//! and tests can pin the sequence.

use rand::Rng;

/// The pool of guessable words: 41 country names.
pub const WORDS: [&str; 41] = [
    "FINLAND", "SWEDEN", "NORWAY", "DENMARK", "CHINA", "JAPAN",
    "INDIA", "TURKEY", "GERMANY", "RUSSIA", "POLAND", "SPAIN",
    "FRANCE", "PORTUGAL", "EGYPT", "ARGENTINA", "AMERICA", "CANADA",
    "GREECE", "ITALY", "SERBIA", "ESTONIA", "MEXICO", "UKRAINE",
    "HUNGARY", "ICELAND", "LUXEMBOURG", "MADAGASCAR", "INDONESIA",
    "AUSTRALIA", "ISRAEL", "CHILE", "IRELAND", "CROATIA", "ALBANIA",
    "NIGERIA", "MAROCCO", "SOMALIA", "BELGIUM", "LATVIA", "MALAYSIA",
];

/// Picks one word uniformly at random from [`WORDS`].
pub fn sample<R: Rng>(rng: &mut R) -> &'static str {
    WORDS[rng.gen_range(0..WORDS.len())]
}
