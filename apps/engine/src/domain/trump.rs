//! Trump context and the effective card identity under trump.
//!
//! `effective_rank` is the only place where the bower rules live. Hand
//! ordering, follow-suit legality and trick resolution all go through it (or
//! through `TrumpContext::effective_suit`), so the three can never disagree.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Suit};

/// Right bower: the trump-suit Jack.
const RIGHT_BOWER: i8 = -7;
/// Left bower: the Jack of the same-color suit.
const LEFT_BOWER: i8 = -6;
/// Shift applied to the remaining trump cards so they sit between the bowers
/// and every non-trump card.
const TRUMP_SHIFT: i8 = 6;

/// Round-scoped trump information, resolved once bidding concludes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrumpContext {
    trump_suit: Suit,
    left_bower_suit: Suit,
}

/// Fixed same-color table: Spades↔Clubs, Hearts↔Diamonds.
pub fn left_bower_suit(trump_suit: Suit) -> Suit {
    match trump_suit {
        Suit::Spades => Suit::Clubs,
        Suit::Hearts => Suit::Diamonds,
        Suit::Clubs => Suit::Spades,
        Suit::Diamonds => Suit::Hearts,
    }
}

impl TrumpContext {
    pub fn resolve(trump_suit: Suit) -> Self {
        Self {
            trump_suit,
            left_bower_suit: left_bower_suit(trump_suit),
        }
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    pub fn left_bower_suit(&self) -> Suit {
        self.left_bower_suit
    }

    pub fn is_right_bower(&self, card: Card) -> bool {
        card.rank == Rank::Jack && card.suit == self.trump_suit
    }

    pub fn is_left_bower(&self, card: Card) -> bool {
        card.rank == Rank::Jack && card.suit == self.left_bower_suit
    }

    /// The suit a card plays as: the left bower plays as trump.
    pub fn effective_suit(&self, card: Card) -> Suit {
        if self.is_left_bower(card) {
            self.trump_suit
        } else {
            card.suit
        }
    }

    pub fn is_trump(&self, card: Card) -> bool {
        self.effective_suit(card) == self.trump_suit
    }
}

fn base_rank(rank: Rank) -> i8 {
    match rank {
        Rank::Ace => 1,
        Rank::King => 2,
        Rank::Queen => 3,
        Rank::Jack => 4,
        Rank::Ten => 5,
        Rank::Nine => 6,
    }
}

fn suit_bucket(suit: Suit) -> i8 {
    match suit {
        Suit::Spades => 0,
        Suit::Hearts => 6,
        Suit::Clubs => 12,
        Suit::Diamonds => 18,
    }
}

/// Strength of a card; lower is stronger.
///
/// Without trump (before bidding completes) cards group by suit bucket and
/// rank within it. With trump: right bower, left bower, the other trump cards,
/// then the three plain suits in their buckets. Values are unique per card for
/// a given context, so comparisons never tie.
pub fn effective_rank(card: Card, trump: Option<&TrumpContext>) -> i8 {
    let plain = base_rank(card.rank) + suit_bucket(card.suit);
    let Some(ctx) = trump else {
        return plain;
    };
    if ctx.is_right_bower(card) {
        RIGHT_BOWER
    } else if ctx.is_left_bower(card) {
        LEFT_BOWER
    } else if card.suit == ctx.trump_suit {
        base_rank(card.rank) - TRUMP_SHIFT
    } else {
        plain
    }
}

/// Effective suit with an optional context (printed suit when no trump).
pub fn effective_suit(card: Card, trump: Option<&TrumpContext>) -> Suit {
    trump.map_or(card.suit, |ctx| ctx.effective_suit(card))
}
