use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::accumulator::TeamAccumulator;
use crate::error::SimError;
use crate::game::{self, GameScore};
use crate::minutes::MinutesDistribution;
use crate::params::SimParams;
use crate::report::{PlayerReport, SimulationResult, TeamReport};
use crate::roster::Team;

/// Progress notifications fire after every block of this many completed
/// games, never on partial progress within a game.
pub const PROGRESS_INTERVAL: u32 = 100;

/// Thread-safe cancellation handle. The engine checks it between games,
/// never mid-possession, so a cancelled run leaves no half-applied stats.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Monte Carlo matchup engine. A run simulates N independent games sharing
/// one minutes distribution and one accumulator pair per side, then
/// normalizes the totals into per-game expectations.
#[derive(Debug, Default)]
pub struct MonteCarloEngine {
    params: SimParams,
    cancel: CancelToken,
}

impl MonteCarloEngine {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            cancel: CancelToken::new(),
        }
    }

    /// Handle for cancelling this engine's runs from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Entropy-seeded run. See [`Self::simulate_seeded`] for the
    /// deterministic form the tests and the parallel path build on.
    pub fn simulate<F>(
        &self,
        home: &Team,
        away: &Team,
        iterations: u32,
        on_progress: F,
    ) -> Result<SimulationResult, SimError>
    where
        F: FnMut(f64),
    {
        let seed = rand::thread_rng().next_u64();
        log::debug!("entropy seed {seed:#018x}");
        self.simulate_seeded(home, away, iterations, seed, on_progress)
    }

    /// Deterministic run: the same seed, inputs, and parameters produce a
    /// bit-identical [`SimulationResult`]. Each game draws from its own
    /// ChaCha8 stream derived from the master seed.
    pub fn simulate_seeded<F>(
        &self,
        home: &Team,
        away: &Team,
        iterations: u32,
        seed: u64,
        mut on_progress: F,
    ) -> Result<SimulationResult, SimError>
    where
        F: FnMut(f64),
    {
        let setup = RunSetup::prepare(&self.params, home, away, iterations)?;
        log::info!(
            "starting simulation: {} vs {} ({iterations} iterations)",
            home.name,
            away.name
        );

        let mut tally = RunTally::new(home.players.len(), away.players.len());
        for game_index in 0..iterations {
            if self.cancel.is_cancelled() {
                log::warn!("simulation cancelled after {game_index} of {iterations} games");
                return Err(SimError::Cancelled);
            }

            let mut rng = game_rng(seed, game_index);
            let score = game::simulate_game(
                &self.params,
                home,
                away,
                &setup.home_minutes,
                &setup.away_minutes,
                &mut tally.home_acc,
                &mut tally.away_acc,
                &mut rng,
            );
            tally.record(score);

            let completed = game_index + 1;
            if completed % PROGRESS_INTERVAL == 0 {
                on_progress(f64::from(completed) / f64::from(iterations) * 100.0);
            }
        }

        Ok(self.finalize(home, away, iterations, tally))
    }

    /// Rayon map-reduce over the game index range. Each worker owns private
    /// accumulators merged elementwise at the end, which is bit-identical to
    /// [`Self::simulate_seeded`] with the same seed: games replay the same
    /// per-game RNG streams and every merged increment is a multiple of 0.5.
    ///
    /// Progress reports the atomic completed-game count; a milestone that
    /// lost the race to a later one is dropped to keep the sequence
    /// strictly increasing.
    pub fn simulate_parallel<F>(
        &self,
        home: &Team,
        away: &Team,
        iterations: u32,
        seed: u64,
        on_progress: F,
    ) -> Result<SimulationResult, SimError>
    where
        F: Fn(f64) + Sync,
    {
        let setup = RunSetup::prepare(&self.params, home, away, iterations)?;
        log::info!(
            "starting parallel simulation: {} vs {} ({iterations} iterations)",
            home.name,
            away.name
        );

        let completed = AtomicU32::new(0);
        let last_reported = Mutex::new(0u32);

        let tally = (0..iterations)
            .into_par_iter()
            .try_fold(
                || RunTally::new(home.players.len(), away.players.len()),
                |mut tally, game_index| {
                    if self.cancel.is_cancelled() {
                        return Err(SimError::Cancelled);
                    }

                    let mut rng = game_rng(seed, game_index);
                    let score = game::simulate_game(
                        &self.params,
                        home,
                        away,
                        &setup.home_minutes,
                        &setup.away_minutes,
                        &mut tally.home_acc,
                        &mut tally.away_acc,
                        &mut rng,
                    );
                    tally.record(score);

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % PROGRESS_INTERVAL == 0 {
                        if let Ok(mut last) = last_reported.lock() {
                            if done > *last {
                                *last = done;
                                on_progress(f64::from(done) / f64::from(iterations) * 100.0);
                            }
                        }
                    }
                    Ok(tally)
                },
            )
            .try_reduce(
                || RunTally::new(home.players.len(), away.players.len()),
                |a, b| Ok(a.merge(b)),
            )?;

        Ok(self.finalize(home, away, iterations, tally))
    }

    fn finalize(
        &self,
        home: &Team,
        away: &Team,
        iterations: u32,
        tally: RunTally,
    ) -> SimulationResult {
        let n = f64::from(iterations);
        let home_players = player_reports(home, &tally.home_acc, iterations);
        let away_players = player_reports(away, &tally.away_acc, iterations);
        let home_stats = TeamReport::from_players(&home_players);
        let away_stats = TeamReport::from_players(&away_players);

        log::debug!(
            "run complete: {} home wins, {} away wins, {} ties",
            tally.home_wins,
            tally.away_wins,
            tally.ties
        );

        SimulationResult {
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            home_wins: tally.home_wins,
            away_wins: tally.away_wins,
            ties: tally.ties,
            total_simulations: iterations,
            home_avg_score: tally.home_score_sum as f64 / n,
            away_avg_score: tally.away_score_sum as f64 / n,
            home_stats,
            away_stats,
            home_players,
            away_players,
        }
    }
}

/// Per-run immutable inputs: validation plus the minutes distributions,
/// computed once and shared by every game in the run.
struct RunSetup {
    home_minutes: MinutesDistribution,
    away_minutes: MinutesDistribution,
}

impl RunSetup {
    fn prepare(
        params: &SimParams,
        home: &Team,
        away: &Team,
        iterations: u32,
    ) -> Result<Self, SimError> {
        if iterations < 1 {
            return Err(SimError::InvalidIterations(iterations));
        }
        for team in [home, away] {
            if team.players.is_empty() {
                return Err(SimError::EmptyRoster {
                    team: team.name.clone(),
                });
            }
        }
        Ok(Self {
            home_minutes: MinutesDistribution::compute(&home.players, params.game_minutes),
            away_minutes: MinutesDistribution::compute(&away.players, params.game_minutes),
        })
    }
}

/// Mutable state of one run segment: the accumulator pair plus win and
/// score tallies. Parallel workers each own one and merge at the end.
struct RunTally {
    home_acc: TeamAccumulator,
    away_acc: TeamAccumulator,
    home_wins: u32,
    away_wins: u32,
    ties: u32,
    home_score_sum: u64,
    away_score_sum: u64,
}

impl RunTally {
    fn new(home_len: usize, away_len: usize) -> Self {
        Self {
            home_acc: TeamAccumulator::new(home_len),
            away_acc: TeamAccumulator::new(away_len),
            home_wins: 0,
            away_wins: 0,
            ties: 0,
            home_score_sum: 0,
            away_score_sum: 0,
        }
    }

    fn record(&mut self, score: GameScore) {
        self.home_score_sum += u64::from(score.home);
        self.away_score_sum += u64::from(score.away);
        if score.home > score.away {
            self.home_wins += 1;
        } else if score.home < score.away {
            self.away_wins += 1;
        } else {
            self.ties += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.home_acc.merge(&other.home_acc);
        self.away_acc.merge(&other.away_acc);
        self.home_wins += other.home_wins;
        self.away_wins += other.away_wins;
        self.ties += other.ties;
        self.home_score_sum += other.home_score_sum;
        self.away_score_sum += other.away_score_sum;
        self
    }
}

fn player_reports(team: &Team, acc: &TeamAccumulator, iterations: u32) -> Vec<PlayerReport> {
    let mut reports: Vec<PlayerReport> = team
        .players
        .iter()
        .zip(acc.lines())
        .map(|(player, line)| PlayerReport::from_line(player, line, iterations))
        .collect();
    // Stable sort keeps roster order among equals, so output is deterministic.
    reports.sort_by(|a, b| b.points.total_cmp(&a.points));
    reports
}

fn game_rng(seed: u64, game_index: u32) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(game_index));
    rng
}
