use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use scoutdex::core::config::Config;
use scoutdex::core::types::{User, UserId};
use scoutdex::ingest;
use scoutdex::index::hash_index::HashIndex;
use scoutdex::index::hasher::PolynomialHasher;
use rand::Rng;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

// Helper to write a CSV dataset of the given size
fn write_dataset(dir: &Path, players: u32, ratings: u32) -> Config {
    let mut rng = rand::thread_rng();

    let mut csv = String::from("sofifa_id,short_name,long_name,player_positions,nationality,club_name,league_name\n");
    for id in 1..=players {
        writeln!(csv, "{id},P. {id},Player Number {id},\"CM, CAM\",Brazil,Club {},League {}", id % 40, id % 8).unwrap();
    }
    fs::write(dir.join("players.csv"), csv).unwrap();

    let mut csv = String::from("user_id,sofifa_id,rating\n");
    for _ in 0..ratings {
        let user = rng.gen_range(1..=ratings / 10 + 1);
        let player = rng.gen_range(1..=players);
        writeln!(csv, "{},{},{:.1}", user, player, rng.gen_range(0.5..=5.0)).unwrap();
    }
    fs::write(dir.join("rating.csv"), csv).unwrap();

    let mut csv = String::from("user_id,sofifa_id,tag\n");
    for i in 0..players {
        writeln!(csv, "{},{},Tag {}", i, i + 1, i % 25).unwrap();
    }
    fs::write(dir.join("tags.csv"), csv).unwrap();

    Config {
        players_path: dir.join("players.csv"),
        ratings_path: dir.join("rating.csv"),
        tags_path: dir.join("tags.csv"),
        ..Config::default()
    }
}

fn bench_index_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_loading");
    group.sample_size(10);

    for (players, ratings) in [(1_000u32, 10_000u32), (10_000, 100_000)] {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = write_dataset(temp_dir.path(), players, ratings);

        group.throughput(Throughput::Elements(ratings as u64));
        group.bench_with_input(BenchmarkId::new("csv_load", ratings), &config, |b, config| {
            b.iter(|| black_box(ingest::load(config).unwrap()))
        });
    }

    group.finish();
}

fn bench_hash_index(c: &mut Criterion) {
    let hasher = PolynomialHasher::default();
    c.bench_function("polynomial_hash", |b| {
        b.iter(|| black_box(hasher.hash(black_box(258_970), 276_989)))
    });

    let mut index = HashIndex::new(37_879).unwrap();
    for id in 0..20_000u32 {
        index.insert(User::new(UserId(id)));
    }
    c.bench_function("hash_index_lookup", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| black_box(index.lookup(rng.gen_range(0..40_000)).is_some()))
    });
}

criterion_group!(benches, bench_index_loading, bench_hash_index);
criterion_main!(benches);
