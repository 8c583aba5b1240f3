//! Card, hand, and session formatters for terminal display.
//!
//! Pure functions that turn engine values into text. Unicode suit symbols are
//! used where the terminal supports them, with an ASCII fallback.
//!
//! - **Unicode mode**: ♠ ♣ ♥ ♦
//! - **ASCII mode**: s c h d
//!
//! ## Example
//!
//! ```rust
//! use drawpoker_engine::cards::{Card, Rank, Suit};
//! use drawpoker_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use drawpoker_engine::cards::{Card, Rank, Suit};
use drawpoker_engine::hand::{HandRank, PAY_TABLE};
use drawpoker_engine::session::{GameState, MAX_BET, MIN_BET, Snapshot};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Clubs => "c",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        other => other.label().to_string(),
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Five cards separated by spaces; held slots are marked with `*`.
///
/// ```rust
/// # use drawpoker_cli::formatters::format_hand;
/// use drawpoker_engine::cards::Card;
///
/// let hand: [Card; 5] = ["As", "Kd", "7c", "7h", "2s"].map(|c| c.parse().unwrap());
/// let text = format_hand(&hand, &[2, 3]);
/// assert_eq!(text.matches('*').count(), 2);
/// ```
pub fn format_hand(hand: &[Card], held: &[usize]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| {
            let mark = if held.contains(&i) { "*" } else { "" };
            format!("{}{}", format_card(c), mark)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slot numbers (1-based) under a formatted hand, for the hold prompt.
pub fn format_slot_labels(hand: &[Card], held: &[usize]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| {
            let width = format_card(c).chars().count() + usize::from(held.contains(&i));
            format!("{:<width$}", i + 1, width = width)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_state(state: GameState) -> &'static str {
    match state {
        GameState::Betting => "betting",
        GameState::Drawing => "drawing",
    }
}

/// Multi-line rendering of a session snapshot.
pub fn format_snapshot(snap: &Snapshot) -> String {
    let mut lines = vec![format!(
        "Credits: {}  Bet: {}  State: {}",
        snap.credits,
        snap.bet,
        format_state(snap.state)
    )];
    match &snap.hand {
        Some(hand) => {
            lines.push(format!("Hand: {}", format_hand(hand, &snap.held)));
            if snap.state == GameState::Drawing {
                lines.push(format!("      {}", format_slot_labels(hand, &snap.held)));
            }
        }
        None => lines.push("Hand: -".to_string()),
    }
    if let Some(result) = snap.last_result {
        lines.push(format!("Win: {}", result.amount_won));
    }
    lines.join("\n")
}

/// "Full House (x9)"
pub fn format_rank_payout(rank: HandRank) -> String {
    format!("{} (x{})", rank.name(), rank.multiplier())
}

/// Pay schedule with one column per bet size.
pub fn format_pay_table() -> String {
    let mut header = format!("{:<16}", "Hand");
    for bet in MIN_BET..=MAX_BET {
        header.push_str(&format!("{:>6}", format!("x{}", bet)));
    }
    let mut lines = vec![header];
    for rank in PAY_TABLE {
        let mut row = format!("{:<16}", rank.name());
        for bet in MIN_BET..=MAX_BET {
            row.push_str(&format!("{:>6}", rank.multiplier() * bet));
        }
        lines.push(row);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_engine::session::RoundResult;

    fn hand() -> [Card; 5] {
        ["As", "Kd", "Tc", "7h", "2s"].map(|c| c.parse().unwrap())
    }

    #[test]
    fn rank_uses_single_character() {
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Ace), "A");
        assert_eq!(format_rank(&Rank::Seven), "7");
    }

    #[test]
    fn held_cards_are_starred() {
        let text = format_hand(&hand(), &[0, 4]);
        let parts: Vec<&str> = text.split(' ').collect();
        assert_eq!(parts.len(), 5);
        assert!(parts[0].ends_with('*'));
        assert!(!parts[1].ends_with('*'));
        assert!(parts[4].ends_with('*'));
    }

    #[test]
    fn snapshot_before_first_deal() {
        let snap = Snapshot {
            credits: 100,
            bet: 1,
            state: GameState::Betting,
            hand: None,
            held: vec![],
            last_result: None,
        };
        let text = format_snapshot(&snap);
        assert!(text.contains("Credits: 100"));
        assert!(text.contains("Hand: -"));
        assert!(!text.contains("Win:"));
    }

    #[test]
    fn snapshot_after_settlement_shows_win() {
        let snap = Snapshot {
            credits: 103,
            bet: 1,
            state: GameState::Betting,
            hand: Some(hand()),
            held: vec![],
            last_result: Some(RoundResult {
                rank: HandRank::ThreeOfAKind,
                amount_won: 3,
            }),
        };
        let text = format_snapshot(&snap);
        assert!(text.contains("Win: 3"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn pay_table_lists_every_winning_hand() {
        let table = format_pay_table();
        assert_eq!(table.lines().count(), PAY_TABLE.len() + 1);
        assert!(table.contains("Royal Flush"));
        assert!(table.contains("4000"));
        assert!(!table.contains("No Win"));
    }

    #[test]
    fn rank_payout_text() {
        assert_eq!(format_rank_payout(HandRank::FullHouse), "Full House (x9)");
    }
}
