use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cricket_core::comparison::{rank_by_bpi, score_players, summarize};
use cricket_core::metric::{component_breakdown, compute_bpi, compute_dppi, score_record};
use cricket_core::record::BattingRecord;
use cricket_core::roster::{sample_players, Player};
use cricket_core::validation::ValidationPolicy;

fn create_test_record() -> BattingRecord {
    BattingRecord::new(126.13, 37.60, 2, 0, 47.99, 41)
}

fn create_large_roster() -> Vec<Player> {
    (0..10_000)
        .map(|i| {
            let sr = 100.0 + (i % 100) as f64;
            let avg = 20.0 + (i % 40) as f64;
            let record = BattingRecord::new(sr, avg, i % 50, i % 10, 40.0 + (i % 30) as f64, i % 20);
            Player::new(format!("Player{}", i), record)
        })
        .collect()
}

fn bench_compute_bpi(c: &mut Criterion) {
    let record = create_test_record();

    c.bench_function("compute_bpi", |b| b.iter(|| compute_bpi(black_box(&record))));
    c.bench_function("compute_dppi", |b| {
        b.iter(|| compute_dppi(black_box(37.60), black_box(126.13)))
    });
    c.bench_function("component_breakdown", |b| {
        b.iter(|| component_breakdown(black_box(&record)))
    });
    c.bench_function("score_record", |b| {
        b.iter(|| score_record(black_box(&record), ValidationPolicy::default()))
    });
}

fn bench_sample_comparison(c: &mut Criterion) {
    let players = sample_players();

    c.bench_function("sample_roster_comparison", |b| {
        b.iter(|| {
            let scores = score_players(black_box(players), ValidationPolicy::default()).unwrap();
            let ranked = rank_by_bpi(&scores);
            summarize(&ranked)
        })
    });
}

fn bench_large_roster(c: &mut Criterion) {
    let roster = create_large_roster();

    c.bench_function("score_players_10k", |b| {
        b.iter(|| score_players(black_box(&roster), ValidationPolicy::default()))
    });
}

criterion_group!(benches, bench_compute_bpi, bench_sample_comparison, bench_large_roster);
criterion_main!(benches);
