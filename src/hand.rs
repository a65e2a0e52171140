//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::HandOutcome;
use crate::score;

/// A player's wagered hand.
///
/// Owned exclusively by the round that created it, mutated only by the
/// hit/double/split actions and by settlement.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Bet amount riding on this hand.
    bet: u64,
    /// Whether the hand has finished acting.
    done: bool,
    /// Whether the hand busted (over 21).
    bust: bool,
    /// Whether the bet was doubled.
    doubled: bool,
    /// Settlement outcome, set once the round is settled.
    outcome: Option<HandOutcome>,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: u64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            done: false,
            bust: false,
            doubled: false,
            outcome: None,
        }
    }

    /// Creates the sibling hand of a split, seeded with one card and the
    /// same bet as the original.
    #[must_use]
    pub fn from_split(card: Card, bet: u64) -> Self {
        let mut hand = Self::new(bet);
        hand.cards.push(card);
        hand
    }

    /// Adds a card to the hand, marking it bust when the total exceeds 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if self.value() > 21 {
            self.bust = true;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the blackjack total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score::value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score::evaluate(&self.cards).1
    }

    /// Returns the bet amount riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns whether the hand has finished acting.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns whether the hand busted.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.bust
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the settlement outcome, if the round has been settled.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Marks the hand as finished.
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Doubles the bet and marks the hand doubled.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Records the settlement outcome.
    pub const fn set_outcome(&mut self, outcome: HandOutcome) {
        self.outcome = Some(outcome);
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand may double down.
    ///
    /// Doubling is only available as the first decision on a two-card hand,
    /// so any hit permanently forfeits it.
    #[must_use]
    pub fn can_double(&self, balance: u64) -> bool {
        self.cards.len() == 2 && !self.done && balance >= self.bet
    }

    /// Returns whether the hand may split.
    ///
    /// Splitting compares base values, not ranks, so a ten and a king
    /// qualify while a nine and a ten do not. One split per round: a second
    /// hand on the table disqualifies further splits.
    #[must_use]
    pub fn can_split(&self, balance: u64, hand_count: usize) -> bool {
        self.cards.len() == 2
            && !self.done
            && hand_count < 2
            && balance >= self.bet
            && self.cards[0].base_value() == self.cards[1].base_value()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card; it stays hidden from snapshots
/// until the dealer's turn reveals it, and only the second card shows.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (second card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the total counting only the cards a player may see.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.get(1).map_or(0, Card::base_value)
        }
    }

    /// Returns the full blackjack total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score::value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score::evaluate(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
