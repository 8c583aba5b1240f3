//! # drawpoker-engine: Jacks-or-Better Draw Poker Core
//!
//! A single-player five-card draw engine. A player bets 1 to 5 credits, is dealt
//! five cards, picks which to hold, redraws the rest and is paid by the rank of
//! the final hand. The engine is synchronous and free of I/O; a presentation layer
//! drives it with commands and renders the snapshots it returns.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the canonical deck
//! - [`deck`] - Validated Fisher-Yates shuffle and top-of-deck drawing
//! - [`hand`] - Five-card classification and the fixed pay table
//! - [`session`] - Credits, bet and the deal/hold/draw state machine
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for session and deck operations
//!
//! ## Quick Start
//!
//! ```rust
//! use drawpoker_engine::session::{Session, SessionConfig};
//!
//! let mut session = Session::from_seed(SessionConfig::default(), 42);
//! session.adjust_bet(1);
//! let snap = session.deal().unwrap();
//! assert_eq!(snap.credits, 98);
//!
//! // keep the first two cards, replace the rest
//! session.toggle_hold(0).unwrap();
//! session.toggle_hold(1).unwrap();
//! let outcome = session.draw().unwrap();
//! println!("{}! won {}", outcome.result.rank, outcome.result.amount_won);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The random source is injected. Any `rand::Rng` works; seeded ChaCha20 sessions
//! replay identically:
//!
//! ```rust
//! use drawpoker_engine::session::{Session, SessionConfig};
//!
//! let mut a = Session::from_seed(SessionConfig::default(), 7);
//! let mut b = Session::from_seed(SessionConfig::default(), 7);
//! assert_eq!(a.deal().unwrap().hand, b.deal().unwrap().hand);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod session;
