use serde::{Deserialize, Serialize};

/// Tunable constants of the possession model.
///
/// `Default` is the calibrated model; a matchup case file may override
/// individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Total on-court minutes in one game (48 minutes x 5 players).
    pub game_minutes: f64,
    /// Possession length is drawn uniformly from [min, max) minutes.
    pub possession_min_minutes: f64,
    pub possession_max_minutes: f64,
    /// Probability the home side receives a given possession.
    pub home_possession_bias: f64,
    /// Base make probability for a league-average scorer.
    pub base_fg_pct: f64,
    /// Points-per-game benchmark that scales shooting efficiency.
    pub scoring_benchmark: f64,
    /// Share of made shots that are threes.
    pub three_point_rate: f64,
    /// Incidental per-possession event rates for the ball-handler.
    pub rebound_rate: f64,
    pub assist_rate: f64,
    pub steal_rate: f64,
    pub block_rate: f64,
    pub turnover_rate: f64,
    /// Flat minutes credited to the ball-handler per possession.
    pub minutes_per_possession: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            game_minutes: 240.0,
            possession_min_minutes: 2.0,
            possession_max_minutes: 3.0,
            home_possession_bias: 0.5,
            base_fg_pct: 0.45,
            scoring_benchmark: 20.0,
            three_point_rate: 0.35,
            rebound_rate: 0.30,
            assist_rate: 0.15,
            steal_rate: 0.08,
            block_rate: 0.08,
            turnover_rate: 0.10,
            minutes_per_possession: 0.5,
        }
    }
}
