use rand::Rng;

use crate::accumulator::TeamAccumulator;
use crate::minutes::MinutesDistribution;
use crate::params::SimParams;
use crate::possession;
use crate::roster::Team;

/// Final score of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameScore {
    pub home: u32,
    pub away: u32,
}

/// Play one game on a 240-minute clock of randomly sized possessions, each
/// handed to a side by a fair coin rather than strict alternation.
///
/// The possession length is added to the clock before the below-limit gate,
/// so the trailing possession that would cross the limit produces no stats
/// for either side.
#[allow(clippy::too_many_arguments)]
pub fn simulate_game<R: Rng + ?Sized>(
    params: &SimParams,
    home: &Team,
    away: &Team,
    home_minutes: &MinutesDistribution,
    away_minutes: &MinutesDistribution,
    home_acc: &mut TeamAccumulator,
    away_acc: &mut TeamAccumulator,
    rng: &mut R,
) -> GameScore {
    let mut home_score = 0u32;
    let mut away_score = 0u32;
    let mut elapsed = 0.0;

    while elapsed < params.game_minutes {
        elapsed += rng.gen_range(params.possession_min_minutes..params.possession_max_minutes);
        let home_ball = rng.gen_bool(params.home_possession_bias);
        if elapsed >= params.game_minutes {
            continue;
        }
        if home_ball {
            home_score += possession::resolve(params, home, home_minutes, home_acc, rng);
        } else {
            away_score += possession::resolve(params, away, away_minutes, away_acc, rng);
        }
    }

    GameScore {
        home: home_score,
        away: away_score,
    }
}
