use crate::roster::Player;

// Normalizes combined production so a ~30 pts+reb+ast player carries weight 1.
const USAGE_DIVISOR: f64 = 30.0;

/// Relative usage weight from season averages. Only meaningful relative to
/// the rest of the roster, never as a probability on its own.
pub fn usage_weight(player: &Player) -> f64 {
    (player.averages.points + player.averages.rebounds + player.averages.assists) / USAGE_DIVISOR
}

/// Allotted playing time per player, in roster order, summing to the full
/// game. Computed once per run and shared by every simulated game in it.
#[derive(Debug, Clone, PartialEq)]
pub struct MinutesDistribution {
    minutes: Vec<f64>,
    total: f64,
}

impl MinutesDistribution {
    /// Split `game_minutes` proportionally to usage weights. A roster whose
    /// weights sum to zero gets an equal split instead of a division by zero.
    pub fn compute(players: &[Player], game_minutes: f64) -> Self {
        let weights: Vec<f64> = players.iter().map(usage_weight).collect();
        let weight_sum: f64 = weights.iter().sum();

        let minutes = if weight_sum > 0.0 {
            weights
                .iter()
                .map(|w| game_minutes * w / weight_sum)
                .collect()
        } else {
            players
                .iter()
                .map(|_| game_minutes / players.len() as f64)
                .collect()
        };

        Self {
            minutes,
            total: game_minutes,
        }
    }

    pub fn minutes(&self) -> &[f64] {
        &self.minutes
    }

    /// Total game minutes the split was computed against.
    pub fn total(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::PlayerAverages;

    fn stub_player(name: &str, points: f64, rebounds: f64, assists: f64) -> Player {
        Player {
            name: name.to_string(),
            position: "G".to_string(),
            averages: PlayerAverages {
                points,
                rebounds,
                assists,
                ..PlayerAverages::default()
            },
        }
    }

    #[test]
    fn uniform_roster_gets_equal_minutes() {
        let players: Vec<Player> = (0..5)
            .map(|i| stub_player(&format!("P{i}"), 12.0, 4.0, 3.0))
            .collect();
        let dist = MinutesDistribution::compute(&players, 240.0);
        for m in dist.minutes() {
            assert!((m - 48.0).abs() < 1e-9);
        }
    }

    #[test]
    fn higher_usage_earns_more_minutes() {
        let players = vec![
            stub_player("star", 30.0, 8.0, 7.0),
            stub_player("bench", 4.0, 1.0, 1.0),
        ];
        let dist = MinutesDistribution::compute(&players, 240.0);
        assert!(dist.minutes()[0] > dist.minutes()[1]);
        let sum: f64 = dist.minutes().iter().sum();
        assert!((sum - 240.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weights_fall_back_to_equal_split() {
        let players = vec![
            stub_player("a", 0.0, 0.0, 0.0),
            stub_player("b", 0.0, 0.0, 0.0),
            stub_player("c", 0.0, 0.0, 0.0),
        ];
        let dist = MinutesDistribution::compute(&players, 240.0);
        for m in dist.minutes() {
            assert!((m - 80.0).abs() < 1e-9);
        }
    }
}
