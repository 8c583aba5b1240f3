//! Input parsing for interactive play and card arguments.
//!
//! - Player intents typed at the `play` prompt
//! - Five-card hand strings for `eval`

use drawpoker_engine::cards::Card;
use drawpoker_engine::session::HAND_SIZE;

/// Something the player asked the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    BetUp,
    BetDown,
    Deal,
    /// Zero-based slots to toggle
    Hold(Vec<usize>),
    Draw,
}

/// Result of parsing one line at the play prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid intent parsed from input
    Intent(Intent),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into an [`Intent`] or the quit command.
///
/// Accepted (case-insensitive):
/// - "+" / "bet+" / "up" → raise bet by one
/// - "-" / "bet-" / "down" → lower bet by one
/// - "d" / "deal" → deal
/// - "h N..." / "hold N..." → toggle holds, slots numbered 1-5
/// - "r" / "draw" → draw
/// - "q" / "quit" → quit
///
/// # Example
///
/// ```rust
/// # use drawpoker_cli::validation::{parse_intent, Intent, ParseResult};
/// assert_eq!(parse_intent("deal"), ParseResult::Intent(Intent::Deal));
/// assert_eq!(parse_intent("hold 1 3"), ParseResult::Intent(Intent::Hold(vec![0, 2])));
/// assert_eq!(parse_intent("q"), ParseResult::Quit);
/// ```
pub fn parse_intent(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some((&cmd, args)) = parts.split_first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    let intent = match cmd {
        "q" | "quit" | "exit" => return ParseResult::Quit,
        "+" | "bet+" | "up" => Intent::BetUp,
        "-" | "bet-" | "down" => Intent::BetDown,
        "d" | "deal" => Intent::Deal,
        "r" | "draw" => Intent::Draw,
        "h" | "hold" => match parse_slots(args) {
            Ok(slots) => Intent::Hold(slots),
            Err(msg) => return ParseResult::Invalid(msg),
        },
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized command: {}. Use +, -, deal, hold N, draw, or q",
                other
            ));
        }
    };
    if !args.is_empty() && !matches!(intent, Intent::Hold(_)) {
        return ParseResult::Invalid(format!("{} takes no arguments", cmd));
    }
    ParseResult::Intent(intent)
}

/// 1-based slot numbers → 0-based indices. Accepts "1 3" and "13".
fn parse_slots(args: &[&str]) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("hold requires at least one slot (1-5)".to_string());
    }
    let mut slots = Vec::new();
    for ch in args.iter().flat_map(|a| a.chars()) {
        let slot = ch
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=HAND_SIZE).contains(d))
            .ok_or_else(|| format!("Invalid slot: {} (use 1-5)", ch))?;
        slots.push(slot - 1);
    }
    Ok(slots)
}

/// Parse exactly five distinct cards separated by spaces or commas.
///
/// ```rust
/// # use drawpoker_cli::validation::parse_hand;
/// assert!(parse_hand("As Ks Qs Js Ts").is_ok());
/// assert!(parse_hand("As Ks Qs Js").is_err());
/// assert!(parse_hand("As As Qs Js Ts").is_err());
/// ```
pub fn parse_hand(input: &str) -> Result<[Card; HAND_SIZE], String> {
    let cards = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Card>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<Card>, String>>()?;
    if cards.len() != HAND_SIZE {
        return Err(format!("Expected 5 cards, got {}", cards.len()));
    }
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(format!("Duplicate card: {}", c));
        }
    }
    let mut hand = [cards[0]; HAND_SIZE];
    hand.copy_from_slice(&cards);
    Ok(hand)
}
