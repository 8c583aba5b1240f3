//! Command handler modules for the drawpoker CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via `CliError`
//!
//! `play` is the interactive presentation adapter over the engine session;
//! the rest are one-shot tools around it.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod paytable;
pub mod play;
pub mod rng;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use paytable::handle_paytable_command;
pub use play::{PlayOptions, handle_play_command};
pub use rng::handle_rng_command;
pub use sim::{SimOptions, handle_sim_command};
pub use stats::handle_stats_command;
