//! Rule-based hold policy.
//!
//! Keeps paying hands, then any pair, then four-card flush and open-ended
//! straight draws, then high cards. Not optimal play, but close enough to give
//! a realistic return for simulations.

use crate::HoldPolicy;
use drawpoker_engine::cards::{Card, Rank};
use drawpoker_engine::hand::{HandRank, evaluate};
use drawpoker_engine::session::{HAND_SIZE, HoldSet};

#[derive(Debug, Default, Clone, Copy)]
pub struct Baseline;

impl Baseline {
    pub fn new() -> Self {
        Self
    }
}

impl HoldPolicy for Baseline {
    fn choose_holds(&self, hand: &[Card; HAND_SIZE]) -> HoldSet {
        let indices = match evaluate(hand) {
            HandRank::RoyalFlush
            | HandRank::StraightFlush
            | HandRank::FourOfAKind
            | HandRank::FullHouse
            | HandRank::Flush
            | HandRank::Straight => (0..HAND_SIZE).collect(),
            // trips, two pair and any single pair: keep every matched card
            HandRank::ThreeOfAKind | HandRank::TwoPair | HandRank::JacksOrBetter => {
                matched(hand)
            }
            HandRank::NoWin => draw_holds(hand),
        };
        HoldSet::from_indices(indices).unwrap_or_default()
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

fn count_of(hand: &[Card; HAND_SIZE], rank: Rank) -> usize {
    hand.iter().filter(|c| c.rank == rank).count()
}

/// Slots whose rank appears more than once.
fn matched(hand: &[Card; HAND_SIZE]) -> Vec<usize> {
    (0..HAND_SIZE)
        .filter(|&i| count_of(hand, hand[i].rank) > 1)
        .collect()
}

fn draw_holds(hand: &[Card; HAND_SIZE]) -> Vec<usize> {
    let pair = matched(hand);
    if !pair.is_empty() {
        return pair;
    }
    if let Some(flush) = four_to_flush(hand) {
        return flush;
    }
    if let Some(straight) = open_ended_straight(hand) {
        return straight;
    }
    high_cards(hand)
}

fn four_to_flush(hand: &[Card; HAND_SIZE]) -> Option<Vec<usize>> {
    hand.iter().find_map(|anchor| {
        let same: Vec<usize> = (0..HAND_SIZE)
            .filter(|&i| hand[i].suit == anchor.suit)
            .collect();
        (same.len() == 4).then_some(same)
    })
}

/// Four consecutive ranks that can be completed at either end (2-3-4-5 up to 10-J-Q-K).
fn open_ended_straight(hand: &[Card; HAND_SIZE]) -> Option<Vec<usize>> {
    for low in 2u8..=10 {
        let mut slots = Vec::with_capacity(4);
        for v in low..low + 4 {
            match (0..HAND_SIZE).find(|&i| hand[i].rank.value() == v) {
                Some(i) => slots.push(i),
                None => break,
            }
        }
        if slots.len() == 4 {
            return Some(slots);
        }
    }
    None
}

/// The two highest cards of Jack or better.
fn high_cards(hand: &[Card; HAND_SIZE]) -> Vec<usize> {
    let mut high: Vec<usize> = (0..HAND_SIZE)
        .filter(|&i| hand[i].rank >= Rank::Jack)
        .collect();
    high.sort_by(|&a, &b| hand[b].rank.cmp(&hand[a].rank));
    high.truncate(2);
    high.sort_unstable();
    high
}
