//! The single-player game session: credits, bet, and the deal/hold/draw cycle.
//!
//! A [`Session`] is a plain state machine. Every command runs to completion and
//! hands back a [`Snapshot`] for the presentation layer to render; nothing in
//! here touches a terminal, a file or a clock.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, HandRank};

pub const MIN_BET: u32 = 1;
pub const MAX_BET: u32 = 5;
pub const HAND_SIZE: usize = 5;
/// Starting bankroll of a fresh session.
pub const DEFAULT_CREDITS: u32 = 100;

/// Phase of the current round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a bet change or a deal (initial state, and after every settlement)
    Betting,
    /// Cards are out; holds may be toggled until the draw
    Drawing,
}

/// Hand slots kept across the draw, stored as a bitmask over indices 0..=4.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct HoldSet(u8);

impl HoldSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Result<Self, GameError> {
        let mut set = Self::new();
        for i in indices {
            if i >= HAND_SIZE {
                return Err(GameError::InvalidHoldIndex(i));
            }
            set.0 |= 1 << i;
        }
        Ok(set)
    }

    /// Flips membership of `index`; returns whether it is now held.
    pub fn toggle(&mut self, index: usize) -> Result<bool, GameError> {
        if index >= HAND_SIZE {
            return Err(GameError::InvalidHoldIndex(index));
        }
        self.0 ^= 1 << index;
        Ok(self.contains(index))
    }

    pub fn contains(&self, index: usize) -> bool {
        index < HAND_SIZE && self.0 & (1 << index) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Held indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&i| self.contains(i)).collect()
    }
}

/// Settlement of one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub rank: HandRank,
    /// `rank.multiplier() * bet`
    pub amount_won: u32,
}

/// Read-only view of the session handed to the presentation layer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub credits: u32,
    pub bet: u32,
    pub state: GameState,
    /// `None` until the first deal
    pub hand: Option<[Card; HAND_SIZE]>,
    pub held: Vec<usize>,
    /// Most recent settlement; cleared by the next deal
    pub last_result: Option<RoundResult>,
}

/// Everything [`Session::draw`] settled, plus the state afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DrawOutcome {
    pub result: RoundResult,
    pub bet: u32,
    /// Hand as originally dealt
    pub dealt: [Card; HAND_SIZE],
    pub held: Vec<usize>,
    pub final_hand: [Card; HAND_SIZE],
    pub snapshot: Snapshot,
}

/// Running totals across the rounds of one session.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds: u32,
    pub wagered: u64,
    pub won: u64,
    pub by_rank: BTreeMap<HandRank, u32>,
}

impl SessionStats {
    /// Adds one settled round to the totals.
    pub fn record(&mut self, bet: u32, result: RoundResult) {
        self.rounds += 1;
        self.wagered += u64::from(bet);
        self.won += u64::from(result.amount_won);
        *self.by_rank.entry(result.rank).or_insert(0) += 1;
    }

    /// Return to player as a percentage of credits wagered.
    pub fn rtp(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.won as f64 * 100.0 / self.wagered as f64
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionConfig {
    pub credits: u32,
    /// Clamped into `MIN_BET..=MAX_BET`
    pub bet: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credits: DEFAULT_CREDITS,
            bet: MIN_BET,
        }
    }
}

/// A draw-poker session driven by an injected random generator.
///
/// # Examples
///
/// ```
/// use drawpoker_engine::session::{GameState, Session, SessionConfig};
///
/// let mut session = Session::from_seed(SessionConfig::default(), 7);
/// let dealt = session.deal().unwrap();
/// assert_eq!(dealt.state, GameState::Drawing);
/// assert_eq!(dealt.credits, 99);
///
/// session.toggle_hold(0).unwrap();
/// let outcome = session.draw().unwrap();
/// assert_eq!(outcome.snapshot.state, GameState::Betting);
/// assert_eq!(outcome.final_hand[0], dealt.hand.unwrap()[0]);
/// ```
#[derive(Debug)]
pub struct Session<R: Rng> {
    credits: u32,
    bet: u32,
    state: GameState,
    hand: Option<[Card; HAND_SIZE]>,
    dealt: Option<[Card; HAND_SIZE]>,
    held: HoldSet,
    deck: Option<Deck>,
    last_result: Option<RoundResult>,
    stats: SessionStats,
    rng: R,
}

impl Session<ChaCha20Rng> {
    /// Session backed by a ChaCha20 generator; the same seed replays the same cards.
    pub fn from_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_config(config, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(credits: u32, rng: R) -> Self {
        Self::with_config(
            SessionConfig {
                credits,
                bet: MIN_BET,
            },
            rng,
        )
    }

    pub fn with_config(config: SessionConfig, rng: R) -> Self {
        Self {
            credits: config.credits,
            bet: config.bet.clamp(MIN_BET, MAX_BET),
            state: GameState::Betting,
            hand: None,
            dealt: None,
            held: HoldSet::new(),
            deck: None,
            last_result: None,
            stats: SessionStats::default(),
            rng,
        }
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn state(&self) -> GameState {
        self.state
    }
    pub fn hand(&self) -> Option<&[Card; HAND_SIZE]> {
        self.hand.as_ref()
    }
    pub fn held(&self) -> HoldSet {
        self.held
    }
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// True when the bankroll covers the current bet.
    pub fn can_deal(&self) -> bool {
        self.credits >= self.bet
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            credits: self.credits,
            bet: self.bet,
            state: self.state,
            hand: self.hand,
            held: self.held.indices(),
            last_result: self.last_result,
        }
    }

    /// Moves the bet by `delta`. Ignored outside `Betting` or when the result
    /// would leave `MIN_BET..=MAX_BET`.
    pub fn adjust_bet(&mut self, delta: i32) -> Snapshot {
        if self.state == GameState::Betting {
            let next = i64::from(self.bet) + i64::from(delta);
            if (i64::from(MIN_BET)..=i64::from(MAX_BET)).contains(&next) {
                self.bet = next as u32;
                tracing::debug!(bet = self.bet, "bet adjusted");
            }
        }
        self.snapshot()
    }

    /// Debits the bet, shuffles a fresh deck and deals five cards.
    ///
    /// Either all of that happens or none of it: on error the session is unchanged.
    pub fn deal(&mut self) -> Result<Snapshot, GameError> {
        self.check_deal()?;
        let deck = Deck::new_shuffled(&mut self.rng)?;
        self.deal_from(deck)
    }

    /// Same as [`Session::deal`] but with a pre-arranged deck (replays, fixtures).
    pub fn deal_with_deck(&mut self, deck: Deck) -> Result<Snapshot, GameError> {
        self.check_deal()?;
        self.deal_from(deck)
    }

    pub fn toggle_hold(&mut self, index: usize) -> Result<Snapshot, GameError> {
        self.require(GameState::Drawing)?;
        let now_held = self.held.toggle(index)?;
        tracing::debug!(index, now_held, "hold toggled");
        Ok(self.snapshot())
    }

    /// Replaces every slot not held, settles the round and returns to `Betting`.
    pub fn draw(&mut self) -> Result<DrawOutcome, GameError> {
        self.require(GameState::Drawing)?;
        let (Some(mut hand), Some(dealt)) = (self.hand, self.dealt) else {
            tracing::error!(state = ?self.state, "drawing without a dealt hand");
            return Err(GameError::MissingHand);
        };
        let needed = HAND_SIZE - self.held.len();
        let deck = self.deck.as_mut().ok_or(GameError::DeckExhausted {
            requested: needed,
            remaining: 0,
        })?;
        let mut replacements = deck.draw(needed)?.into_iter();
        for (i, slot) in hand.iter_mut().enumerate() {
            if !self.held.contains(i) {
                if let Some(card) = replacements.next() {
                    *slot = card;
                }
            }
        }

        let rank = evaluate(&hand);
        let result = RoundResult {
            rank,
            amount_won: rank.multiplier() * self.bet,
        };
        let held = self.held.indices();

        self.credits = self.credits.saturating_add(result.amount_won);
        self.hand = Some(hand);
        self.held.clear();
        self.deck = None;
        self.last_result = Some(result);
        self.state = GameState::Betting;
        self.stats.record(self.bet, result);
        tracing::info!(
            rank = %rank,
            bet = self.bet,
            won = result.amount_won,
            credits = self.credits,
            "round settled"
        );

        Ok(DrawOutcome {
            result,
            bet: self.bet,
            dealt,
            held,
            final_hand: hand,
            snapshot: self.snapshot(),
        })
    }

    fn check_deal(&self) -> Result<(), GameError> {
        self.require(GameState::Betting)?;
        if !self.can_deal() {
            return Err(GameError::InsufficientCredits {
                credits: self.credits,
                bet: self.bet,
            });
        }
        Ok(())
    }

    fn deal_from(&mut self, mut deck: Deck) -> Result<Snapshot, GameError> {
        let cards = deck.draw(HAND_SIZE)?;
        let mut hand = [cards[0]; HAND_SIZE];
        hand.copy_from_slice(&cards);

        self.credits -= self.bet;
        self.hand = Some(hand);
        self.dealt = Some(hand);
        self.held.clear();
        self.deck = Some(deck);
        self.last_result = None;
        self.state = GameState::Drawing;
        tracing::debug!(bet = self.bet, credits = self.credits, "hand dealt");
        Ok(self.snapshot())
    }

    fn require(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::WrongState {
                expected,
                actual: self.state,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Rank, Suit};

    fn c(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    /// Deck whose top ten cards are `top` followed by the rest of the canonical order.
    fn stacked(top: &[Card]) -> Deck {
        let mut cards = top.to_vec();
        cards.extend(full_deck().into_iter().filter(|x| !top.contains(x)));
        Deck::from_cards(cards).unwrap()
    }

    #[test]
    fn draw_without_hand_is_an_invariant_fault() {
        let mut s = Session::new(10, rand::rng());
        s.state = GameState::Drawing;
        let err = s.draw().unwrap_err();
        assert_eq!(err, GameError::MissingHand);
        assert!(err.is_invariant_violation());
        assert_eq!(s.credits(), 10);
        assert_eq!(s.stats().rounds, 0);
    }

    #[test]
    fn can_deal_tracks_bankroll_against_bet() {
        let mut s = Session::new(2, rand::rng());
        assert!(s.can_deal());
        s.adjust_bet(1);
        assert!(s.can_deal());
        s.adjust_bet(1);
        assert!(!s.can_deal());
    }

    #[test]
    fn rtp_is_a_percentage() {
        let mut stats = SessionStats::default();
        assert_eq!(stats.rtp(), 0.0);
        stats.record(
            2,
            RoundResult {
                rank: HandRank::NoWin,
                amount_won: 0,
            },
        );
        stats.record(
            2,
            RoundResult {
                rank: HandRank::TwoPair,
                amount_won: 4,
            },
        );
        assert_eq!(stats.rtp(), 100.0);
        assert_eq!(stats.by_rank.get(&HandRank::TwoPair), Some(&1));
    }

    #[test]
    fn hold_set_toggles_and_orders() {
        let mut h = HoldSet::new();
        assert!(h.toggle(3).unwrap());
        assert!(h.toggle(1).unwrap());
        assert!(!h.toggle(3).unwrap());
        assert_eq!(h.indices(), vec![1]);
        assert_eq!(h.toggle(5), Err(GameError::InvalidHoldIndex(5)));
        assert_eq!(HoldSet::from_indices([4, 0]).unwrap().indices(), vec![0, 4]);
        assert!(HoldSet::from_indices([7]).is_err());
    }

    #[test]
    fn held_cards_keep_their_slots() {
        let mut s = Session::new(10, rand::rng());
        let deck = stacked(&[
            c(Rank::Ace, Suit::Spades),
            c(Rank::Two, Suit::Clubs),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Seven, Suit::Diamonds),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Ace, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
        ]);
        s.deal_with_deck(deck).unwrap();
        s.toggle_hold(0).unwrap();
        s.toggle_hold(2).unwrap();
        let out = s.draw().unwrap();

        assert_eq!(
            out.final_hand,
            [
                c(Rank::Ace, Suit::Spades),
                c(Rank::Ace, Suit::Clubs),
                c(Rank::Ace, Suit::Hearts),
                c(Rank::Ace, Suit::Diamonds),
                c(Rank::Three, Suit::Hearts),
            ]
        );
        assert_eq!(out.result.rank, HandRank::FourOfAKind);
        assert_eq!(out.held, vec![0, 2]);
        assert_eq!(out.snapshot.credits, 10 - 1 + 25);
        assert!(out.snapshot.held.is_empty());
    }

    #[test]
    fn holding_everything_draws_nothing() {
        let royal = [
            c(Rank::Ten, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Queen, Suit::Spades),
            c(Rank::King, Suit::Spades),
            c(Rank::Ace, Suit::Spades),
        ];
        let mut s = Session::with_config(SessionConfig { credits: 5, bet: 5 }, rand::rng());
        s.deal_with_deck(stacked(&royal)).unwrap();
        for i in 0..HAND_SIZE {
            s.toggle_hold(i).unwrap();
        }
        let out = s.draw().unwrap();
        assert_eq!(out.final_hand, royal);
        assert_eq!(out.result.amount_won, 4000);
        assert_eq!(s.credits(), 4000);
    }

    #[test]
    fn stats_accumulate_across_rounds() {
        let mut s = Session::from_seed(SessionConfig::default(), 11);
        for _ in 0..3 {
            s.deal().unwrap();
            s.draw().unwrap();
        }
        let st = s.stats();
        assert_eq!(st.rounds, 3);
        assert_eq!(st.wagered, 3);
        assert_eq!(st.by_rank.values().sum::<u32>(), 3);
        assert_eq!(u64::from(s.credits()), 100 - st.wagered + st.won);
    }

    #[test]
    fn config_bet_is_clamped() {
        let s = Session::with_config(SessionConfig { credits: 1, bet: 9 }, rand::rng());
        assert_eq!(s.bet(), MAX_BET);
        let s = Session::with_config(SessionConfig { credits: 1, bet: 0 }, rand::rng());
        assert_eq!(s.bet(), MIN_BET);
    }
}
