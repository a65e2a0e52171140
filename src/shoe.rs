//! The single-deck shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered sequence of cards consumed from the top (the end of the
/// backing vector).
///
/// A fresh shoe holds exactly one of each suit and rank pair. The shoe only
/// shrinks during a round; exhausting it mid-round indicates a sizing bug,
/// so [`Shoe::draw`] reports it rather than papering over it.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates an unshuffled 52-card shoe in suit-major, rank-minor order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a shoe that yields the given cards in order.
    ///
    /// The first element of `draws` is the first card drawn. Intended for
    /// tests and replaying recorded rounds.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the shoe with a uniform Fisher-Yates permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` when the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top of the shoe last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
