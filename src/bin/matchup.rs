use std::fs;
use std::path::PathBuf;

use rand::RngCore;

use fastbreak::engine::MonteCarloEngine;
use fastbreak::params::SimParams;
use fastbreak::roster::Team;

#[derive(Debug, serde::Deserialize)]
struct MatchupCase {
    home: Team,
    away: Team,
    #[serde(default = "default_iterations")]
    iterations: u32,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    params: Option<SimParams>,
}

fn default_iterations() -> u32 {
    1000
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/matchup_case.json"));

    let raw = fs::read_to_string(&path)?;
    let case: MatchupCase = serde_json::from_str(&raw)?;

    let iterations = std::env::var("MATCHUP_ITERATIONS")
        .ok()
        .and_then(|val| val.parse::<u32>().ok())
        .unwrap_or(case.iterations)
        .max(1);
    let seed = std::env::var("MATCHUP_SEED")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .or(case.seed);
    let parallel = std::env::var("MATCHUP_PARALLEL")
        .ok()
        .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let engine = MonteCarloEngine::new(case.params.unwrap_or_default());
    let on_progress = |pct: f64| eprintln!("{pct:.0}% complete");

    // This binary is intentionally simple: it loads one matchup snapshot and
    // prints the engine output. It avoids network data and is meant for quick
    // manual model-tuning iterations.
    let result = if parallel {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        engine.simulate_parallel(&case.home, &case.away, iterations, seed, on_progress)?
    } else if let Some(seed) = seed {
        engine.simulate_seeded(&case.home, &case.away, iterations, seed, on_progress)?
    } else {
        engine.simulate(&case.home, &case.away, iterations, on_progress)?
    };

    println!(
        "{} vs {} over {} simulated games",
        result.home_team, result.away_team, result.total_simulations
    );
    println!(
        "Home wins: {} ({:.1}%)",
        result.home_wins,
        result.home_win_pct()
    );
    println!(
        "Away wins: {} ({:.1}%)",
        result.away_wins,
        result.away_win_pct()
    );
    println!("Ties: {}", result.ties);
    println!(
        "Average score: {:.1} - {:.1}",
        result.home_avg_score, result.away_avg_score
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
