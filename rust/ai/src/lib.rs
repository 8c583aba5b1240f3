//! # drawpoker-ai: Hold Selection Policies
//!
//! Automated players for the draw-poker engine. A policy looks at the five dealt
//! cards and decides which slots to keep; the session does the rest.
//!
//! ## Core Components
//!
//! - [`HoldPolicy`] - Trait for choosing holds from a dealt hand
//! - [`baseline`] - Rule-based policy that keeps made hands and strong draws
//! - [`create_policy`] - Factory for policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use drawpoker_ai::create_policy;
//! use drawpoker_engine::session::{Session, SessionConfig};
//!
//! let policy = create_policy("baseline").unwrap();
//! let mut session = Session::from_seed(SessionConfig::default(), 42);
//! let hand = session.deal().unwrap().hand.unwrap();
//!
//! for i in policy.choose_holds(&hand).indices() {
//!     session.toggle_hold(i).unwrap();
//! }
//! let outcome = session.draw().unwrap();
//! println!("{} chose {:?}: {}", policy.name(), outcome.held, outcome.result.rank);
//! ```

use drawpoker_engine::cards::Card;
use drawpoker_engine::session::{HAND_SIZE, HoldSet};

pub mod baseline;

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: &[&str] = &["baseline", "hold_none"];

/// Decides which dealt cards to keep through the draw.
pub trait HoldPolicy: Send + Sync {
    fn choose_holds(&self, hand: &[Card; HAND_SIZE]) -> HoldSet;

    fn name(&self) -> &str;
}

/// Redraws all five cards every round.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoldNone;

impl HoldPolicy for HoldNone {
    fn choose_holds(&self, _hand: &[Card; HAND_SIZE]) -> HoldSet {
        HoldSet::new()
    }

    fn name(&self) -> &str {
        "hold_none"
    }
}

/// Creates a policy by name.
///
/// # Examples
///
/// ```rust
/// use drawpoker_ai::create_policy;
///
/// assert_eq!(create_policy("baseline").unwrap().name(), "baseline");
/// assert!(create_policy("psychic").is_err());
/// ```
pub fn create_policy(name: &str) -> Result<Box<dyn HoldPolicy>, String> {
    match name {
        "baseline" => Ok(Box::new(baseline::Baseline::new())),
        "hold_none" => Ok(Box::new(HoldNone)),
        other => Err(format!(
            "Unknown policy: {} (expected one of: {})",
            other,
            POLICY_NAMES.join(", ")
        )),
    }
}
