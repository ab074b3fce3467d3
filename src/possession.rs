use rand::Rng;

use crate::accumulator::TeamAccumulator;
use crate::minutes::MinutesDistribution;
use crate::params::SimParams;
use crate::roster::Team;

/// Resolve one possession for `team`: pick a ball-handler weighted by
/// allotted minutes, resolve the shot, and credit incidental stats.
/// Returns the points scored (0, 2, or 3).
pub fn resolve<R: Rng + ?Sized>(
    params: &SimParams,
    team: &Team,
    distribution: &MinutesDistribution,
    acc: &mut TeamAccumulator,
    rng: &mut R,
) -> u32 {
    let idx = select_ball_handler(distribution, rng);
    let player = &team.players[idx];

    let efficiency = player.averages.points / params.scoring_benchmark;
    // An elite scorer can push the raw probability past 1; the clamp keeps
    // the Bernoulli parameter valid and the shot always made.
    let make_prob = (params.base_fg_pct * efficiency).clamp(0.0, 1.0);
    let made = rng.gen_bool(make_prob);

    let line = acc.line_mut(idx);
    let mut points = 0u32;
    if made {
        let is_three = rng.gen_bool(params.three_point_rate);
        points = if is_three { 3 } else { 2 };
        line.field_goals_made += 1.0;
        if is_three {
            line.three_points_made += 1.0;
        }
    }

    line.field_goals_attempted += 1.0;
    line.points += f64::from(points);
    line.minutes += params.minutes_per_possession;

    // Incidental events are independent of the shot and of each other.
    if rng.gen_bool(params.rebound_rate) {
        line.rebounds += 1.0;
    }
    if rng.gen_bool(params.assist_rate) {
        line.assists += 1.0;
    }
    if rng.gen_bool(params.steal_rate) {
        line.steals += 1.0;
    }
    if rng.gen_bool(params.block_rate) {
        line.blocks += 1.0;
    }
    if rng.gen_bool(params.turnover_rate) {
        line.turnovers += 1.0;
    }

    points
}

/// Weighted draw over allotted minutes: subtract each player's share from a
/// uniform draw in [0, total) until it runs out. Floating-point slack can
/// exhaust the roster without a hit; the first player is the fallback so the
/// draw always terminates.
fn select_ball_handler<R: Rng + ?Sized>(
    distribution: &MinutesDistribution,
    rng: &mut R,
) -> usize {
    let mut remaining = rng.gen_range(0.0..distribution.total());
    for (idx, allotted) in distribution.minutes().iter().enumerate() {
        remaining -= allotted;
        if remaining <= 0.0 {
            return idx;
        }
    }
    0
}
