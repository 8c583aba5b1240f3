use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Pay classes of a Jacks-or-Better hand, lowest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    NoWin,
    JacksOrBetter,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

/// Winning classes, highest payout first.
pub const PAY_TABLE: [HandRank; 9] = [
    HandRank::RoyalFlush,
    HandRank::StraightFlush,
    HandRank::FourOfAKind,
    HandRank::FullHouse,
    HandRank::Flush,
    HandRank::Straight,
    HandRank::ThreeOfAKind,
    HandRank::TwoPair,
    HandRank::JacksOrBetter,
];

impl HandRank {
    pub fn name(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::TwoPair => "Two Pair",
            HandRank::JacksOrBetter => "Jacks or Better",
            HandRank::NoWin => "No Win",
        }
    }

    /// Payout per credit wagered.
    pub fn multiplier(self) -> u32 {
        match self {
            HandRank::RoyalFlush => 800,
            HandRank::StraightFlush => 50,
            HandRank::FourOfAKind => 25,
            HandRank::FullHouse => 9,
            HandRank::Flush => 6,
            HandRank::Straight => 4,
            HandRank::ThreeOfAKind => 3,
            HandRank::TwoPair => 2,
            HandRank::JacksOrBetter => 1,
            HandRank::NoWin => 0,
        }
    }

    pub fn is_win(self) -> bool {
        self.multiplier() > 0
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];
const BROADWAY: [u8; 5] = [10, 11, 12, 13, 14];

/// Classifies five cards. Pure and independent of card order.
///
/// # Examples
///
/// ```
/// use drawpoker_engine::cards::Card;
/// use drawpoker_engine::hand::{evaluate, HandRank};
///
/// let cards: Vec<Card> = ["As", "2c", "3h", "4d", "5s"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let hand: [Card; 5] = cards.try_into().unwrap();
/// assert_eq!(evaluate(&hand), HandRank::Straight);
/// assert_eq!(evaluate(&hand).multiplier(), 4);
/// ```
pub fn evaluate(hand: &[Card; 5]) -> HandRank {
    let mut values = hand.map(|c| c.rank.value());
    values.sort_unstable();

    let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let is_straight = is_straight(&values);

    // counts[v] = occurrences of value v
    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }
    let mut freq: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
    freq.sort_unstable_by(|a, b| b.cmp(a));
    let top = freq[0];
    let second = freq.get(1).copied().unwrap_or(0);

    if is_flush && is_straight && values == BROADWAY {
        return HandRank::RoyalFlush;
    }
    if is_flush && is_straight {
        return HandRank::StraightFlush;
    }
    if top == 4 {
        return HandRank::FourOfAKind;
    }
    if top == 3 && second == 2 {
        return HandRank::FullHouse;
    }
    if is_flush {
        return HandRank::Flush;
    }
    if is_straight {
        return HandRank::Straight;
    }
    if top == 3 {
        return HandRank::ThreeOfAKind;
    }
    if top == 2 && second == 2 {
        return HandRank::TwoPair;
    }
    // only one value can be paired at this point
    if top == 2 && counts[Rank::Jack.value() as usize..].contains(&2) {
        return HandRank::JacksOrBetter;
    }
    HandRank::NoWin
}

fn is_straight(sorted: &[u8; 5]) -> bool {
    let distinct = sorted.windows(2).all(|w| w[0] != w[1]);
    (distinct && sorted[4] - sorted[0] == 4) || *sorted == WHEEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_table_is_sorted_by_multiplier() {
        for pair in PAY_TABLE.windows(2) {
            assert!(pair[0].multiplier() > pair[1].multiplier());
            assert!(pair[0] > pair[1]);
        }
        assert!(PAY_TABLE.iter().all(|r| r.is_win()));
        assert!(!HandRank::NoWin.is_win());
    }

    #[test]
    fn straight_detection() {
        assert!(is_straight(&[2, 3, 4, 5, 6]));
        assert!(is_straight(&[10, 11, 12, 13, 14]));
        assert!(is_straight(&WHEEL));
        assert!(!is_straight(&[3, 4, 5, 14, 14]));
        assert!(!is_straight(&[2, 3, 4, 5, 13]));
        // span of four with a duplicate is not a straight
        assert!(!is_straight(&[2, 3, 3, 5, 6]));
    }

    #[test]
    fn names_match_display() {
        assert_eq!(HandRank::JacksOrBetter.to_string(), "Jacks or Better");
        assert_eq!(HandRank::NoWin.to_string(), "No Win");
    }
}
