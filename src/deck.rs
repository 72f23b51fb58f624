use crate::cards::{Card, Rank, Suit};
use crate::flip::TableCard;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in the War deck: ranks Two through King across the four
/// suits. Aces are not dealt in this variant.
pub const DECK_SIZE: usize = 48;

const DEALT_RANKS: [Rank; 12] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// The full 48-card deck, built once per game.
///
/// ```
/// use war_rs::deck::{Deck, DECK_SIZE};
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &s in &Suit::ALL {
            for &r in &DEALT_RANKS {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Split the deck 24/24 into two hands of table cards, consuming it.
    /// Each hand is shuffled again on its own after the split.
    pub fn split_into_hands<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> (Vec<TableCard>, Vec<TableCard>) {
        let mut second = self.cards.split_off(self.cards.len() / 2);
        let mut first = self.cards;
        first.shuffle(rng);
        second.shuffle(rng);
        let first = first.into_iter().map(TableCard::new).collect();
        let second = second.into_iter().map(TableCard::new).collect();
        (first, second)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
