#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Mutex;

use euchre_engine::ai::{AiError, AiPlayer, AlwaysAccept};
use euchre_engine::domain::dealing::full_deck;
use euchre_engine::domain::player_view::CurrentRoundInfo;
use euchre_engine::domain::rules::DEAL_PATTERN;
use euchre_engine::domain::{Card, Seat, Suit};
use euchre_engine::Players;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

// Logging is auto-installed for every test binary including this module
#[ctor::ctor]
fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn seat(i: u8) -> Seat {
    Seat::new(i).expect("valid seat")
}

/// Deck order that deals exactly `hands` (indexed by seat) with `dealer`
/// dealing and `up_card` turned. Unused cards follow in canonical order.
pub fn stack_deck(dealer: Seat, hands: [&[&str]; 4], up_card: &str) -> Vec<Card> {
    let hands: Vec<Vec<Card>> = hands.iter().map(|h| h.iter().map(|t| card(t)).collect()).collect();
    let mut taken = [0usize; 4];
    let mut deck = Vec::with_capacity(24);
    for packets in DEAL_PATTERN {
        for (i, &count) in packets.iter().enumerate() {
            let s = dealer.offset(i as u8 + 1).index();
            deck.extend_from_slice(&hands[s][taken[s]..taken[s] + count]);
            taken[s] += count;
        }
    }
    deck.push(card(up_card));
    for c in full_deck() {
        if !deck.contains(&c) {
            deck.push(c);
        }
    }
    assert_eq!(deck.len(), 24, "stacked deck must use distinct cards");
    deck
}

pub fn players(make: impl Fn() -> Box<dyn AiPlayer>) -> Players {
    [make(), make(), make(), make()]
}

pub fn always_accept() -> Players {
    players(|| Box::new(AlwaysAccept::new()))
}

/// Passes every bid, plays the first legal card.
pub struct AlwaysPass;

impl AiPlayer for AlwaysPass {
    fn choose_trump(&self, _state: &CurrentRoundInfo) -> Result<Option<Suit>, AiError> {
        Ok(None)
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        state
            .legal_plays()
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no legal plays".into()))
    }
}

/// Answers with an illegal decision `bad_answers` times, then behaves.
pub struct Stubborn {
    bad_answers: u32,
    given: Mutex<u32>,
}

impl Stubborn {
    pub fn new(bad_answers: u32) -> Self {
        Self {
            bad_answers,
            given: Mutex::new(0),
        }
    }

    fn misbehave(&self) -> bool {
        let mut given = self.given.lock().expect("lock");
        if *given < self.bad_answers {
            *given += 1;
            true
        } else {
            false
        }
    }

    pub fn bad_answers_given(&self) -> u32 {
        *self.given.lock().expect("lock")
    }
}

impl AiPlayer for Stubborn {
    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Option<Suit>, AiError> {
        if self.misbehave() {
            // Never legal: the turned-down suit, or a non-up-card suit in pass 1
            let wrong = state
                .turned_down
                .unwrap_or_else(|| if state.up_card.suit == Suit::Spades { Suit::Hearts } else { Suit::Spades });
            return Ok(Some(wrong));
        }
        Ok(state.legal_trumps().first().copied())
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        if self.misbehave() {
            if let Some(illegal) = full_deck().into_iter().find(|c| !legal.contains(c)) {
                return Ok(illegal);
            }
        }
        legal
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no legal plays".into()))
    }
}
