use serde::{Deserialize, Serialize};

use crate::accumulator::StatLine;
use crate::roster::Player;

/// Per-game averages for one player over a full run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub name: String,
    pub position: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub three_points_made: f64,
    pub minutes: f64,
}

impl PlayerReport {
    pub(crate) fn from_line(player: &Player, line: &StatLine, iterations: u32) -> Self {
        let n = f64::from(iterations);
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            points: line.points / n,
            rebounds: line.rebounds / n,
            assists: line.assists / n,
            steals: line.steals / n,
            blocks: line.blocks / n,
            turnovers: line.turnovers / n,
            field_goals_made: line.field_goals_made / n,
            field_goals_attempted: line.field_goals_attempted / n,
            three_points_made: line.three_points_made / n,
            minutes: line.minutes / n,
        }
    }

    /// Field-goal percentage, defined as 0 when no shot was attempted.
    pub fn field_goal_pct(&self) -> f64 {
        if self.field_goals_attempted > 0.0 {
            self.field_goals_made / self.field_goals_attempted
        } else {
            0.0
        }
    }
}

/// Team-level per-game averages. Built by summing the player averages, so
/// the additive identity between the two levels holds exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub three_points_made: f64,
}

impl TeamReport {
    pub(crate) fn from_players(players: &[PlayerReport]) -> Self {
        let mut report = TeamReport::default();
        for p in players {
            report.points += p.points;
            report.rebounds += p.rebounds;
            report.assists += p.assists;
            report.steals += p.steals;
            report.blocks += p.blocks;
            report.turnovers += p.turnovers;
            report.field_goals_made += p.field_goals_made;
            report.field_goals_attempted += p.field_goals_attempted;
            report.three_points_made += p.three_points_made;
        }
        report
    }

    pub fn field_goal_pct(&self) -> f64 {
        if self.field_goals_attempted > 0.0 {
            self.field_goals_made / self.field_goals_attempted
        } else {
            0.0
        }
    }
}

/// Everything one Monte Carlo run produces. Built once at the end of the
/// run and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub home_team: String,
    pub away_team: String,
    /// Strict-win counts; ties are first-class and belong to neither side.
    pub home_wins: u32,
    pub away_wins: u32,
    pub ties: u32,
    pub total_simulations: u32,
    pub home_avg_score: f64,
    pub away_avg_score: f64,
    pub home_stats: TeamReport,
    pub away_stats: TeamReport,
    /// Player reports sorted by descending average points. The ordering is
    /// display convenience only.
    pub home_players: Vec<PlayerReport>,
    pub away_players: Vec<PlayerReport>,
}

impl SimulationResult {
    pub fn home_win_pct(&self) -> f64 {
        f64::from(self.home_wins) / f64::from(self.total_simulations) * 100.0
    }

    pub fn away_win_pct(&self) -> f64 {
        f64::from(self.away_wins) / f64::from(self.total_simulations) * 100.0
    }

    /// Look up a player's report by name on either side.
    pub fn player(&self, name: &str) -> Option<&PlayerReport> {
        self.home_players
            .iter()
            .chain(&self.away_players)
            .find(|p| p.name == name)
    }
}
