use fastbreak::engine::MonteCarloEngine;
use fastbreak::params::SimParams;
use fastbreak::roster::Team;

static CASE_JSON: &str = include_str!("fixtures/matchup_case.json");

#[derive(Debug, serde::Deserialize)]
struct CaseFile {
    home: Team,
    away: Team,
    iterations: u32,
    #[serde(default)]
    seed: Option<u64>,
}

#[test]
fn bundled_case_parses_and_runs() {
    let case: CaseFile = serde_json::from_str(CASE_JSON).unwrap();
    assert_eq!(case.home.players.len(), 8);
    assert_eq!(case.away.players.len(), 8);
    assert_eq!(case.iterations, 1000);

    let engine = MonteCarloEngine::new(SimParams::default());
    let result = engine
        .simulate_seeded(&case.home, &case.away, 50, case.seed.unwrap_or(1), |_| {})
        .unwrap();

    assert_eq!(result.total_simulations, 50);
    assert!(result.home_avg_score > 0.0);
    assert!(result.away_avg_score > 0.0);
    // Full rotations: every roster spot shows up in the report.
    assert_eq!(result.home_players.len(), 8);
    assert_eq!(result.away_players.len(), 8);
}

#[test]
fn stars_handle_more_possessions_than_the_bench() {
    let case: CaseFile = serde_json::from_str(CASE_JSON).unwrap();
    let engine = MonteCarloEngine::new(SimParams::default());
    let result = engine
        .simulate_seeded(&case.home, &case.away, 50, 9, |_| {})
        .unwrap();

    // Usage weighting shows up as touches: the lead guard accrues far more
    // possession minutes than the last big off the bench.
    let star = result.player("D. Carter").unwrap();
    let bench = result.player("L. Hoffman").unwrap();
    assert!(star.minutes > bench.minutes);
    assert!(star.field_goals_attempted > bench.field_goals_attempted);
}
