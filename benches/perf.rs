use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use fastbreak::engine::MonteCarloEngine;
use fastbreak::minutes::MinutesDistribution;
use fastbreak::params::SimParams;
use fastbreak::roster::{Player, PlayerAverages, Team};

fn sample_team(name: &str, size: usize) -> Team {
    Team {
        name: name.to_string(),
        players: (0..size)
            .map(|idx| Player {
                name: format!("{name} {}", idx + 1),
                position: ["PG", "SG", "SF", "PF", "C"][idx % 5].to_string(),
                averages: PlayerAverages {
                    points: 6.0 + (idx % 7) as f64 * 3.0,
                    rebounds: 2.0 + (idx % 5) as f64 * 2.0,
                    assists: 1.0 + (idx % 4) as f64 * 2.0,
                    steals: 0.6,
                    blocks: 0.4,
                    turnovers: 1.3,
                },
            })
            .collect(),
    }
}

fn bench_minutes_distribution(c: &mut Criterion) {
    let team = sample_team("Bench FC", 12);
    c.bench_function("minutes_distribution", |b| {
        b.iter(|| {
            let dist = MinutesDistribution::compute(black_box(&team.players), 240.0);
            black_box(dist.total());
        })
    });
}

fn bench_run_100_games(c: &mut Criterion) {
    let home = sample_team("Home", 10);
    let away = sample_team("Away", 10);
    let engine = MonteCarloEngine::new(SimParams::default());

    c.bench_function("run_100_games", |b| {
        b.iter(|| {
            let result = engine
                .simulate_seeded(black_box(&home), black_box(&away), 100, 42, |_| {})
                .unwrap();
            black_box(result.home_wins);
        })
    });
}

fn bench_parallel_run_1000_games(c: &mut Criterion) {
    let home = sample_team("Home", 10);
    let away = sample_team("Away", 10);
    let engine = MonteCarloEngine::new(SimParams::default());

    c.bench_function("parallel_run_1000_games", |b| {
        b.iter(|| {
            let result = engine
                .simulate_parallel(black_box(&home), black_box(&away), 1000, 42, |_| {})
                .unwrap();
            black_box(result.home_wins);
        })
    });
}

criterion_group!(
    perf,
    bench_minutes_distribution,
    bench_run_100_games,
    bench_parallel_run_1000_games
);
criterion_main!(perf);
