//! Monte Carlo basketball matchup simulator.
//!
//! Rosters go in, a [`report::SimulationResult`] comes out: win counts,
//! average scores, and expected per-player box scores estimated by
//! replaying a simplified possession model over many simulated games.

pub mod accumulator;
pub mod engine;
pub mod error;
pub mod game;
pub mod minutes;
pub mod params;
pub mod possession;
pub mod report;
pub mod roster;

pub use engine::{CancelToken, MonteCarloEngine};
pub use error::SimError;
pub use params::SimParams;
pub use report::{PlayerReport, SimulationResult, TeamReport};
pub use roster::{Player, PlayerAverages, Team};
