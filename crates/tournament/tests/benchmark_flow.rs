//! Config file to CSV, end to end.

use tournament::{Benchmark, BenchmarkConfig, PlayerSpec, Winner, CSV_HEADER};

#[test]
fn config_file_drives_batches_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("results.csv");
    let config_path = dir.path().join("bench.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
            output = "{}"
            games_per_batch = 2
            seed = 42

            [[batches]]
            player1 = "random"
            player2 = "ai:2"

            [[batches]]
            name = "tuned mirror"
            player1 = "ai:1:tuned"
            player2 = "ai:1:tuned"
            "#,
            csv.display()
        ),
    )
    .unwrap();

    let config = BenchmarkConfig::load(&config_path).unwrap();
    assert_eq!(config.batches[0].player2, PlayerSpec::ai(2));

    let mut bench = Benchmark::with_seed(config.seed.unwrap());
    let summaries = bench
        .run_multi_batch(config.games_per_batch, &config.batches)
        .unwrap();
    assert_eq!(summaries.len(), 2);
    assert!(summaries.iter().all(|s| s.games == 2));
    bench.save_csv(&config.output).unwrap();

    let text = std::fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert!(lines[1..].iter().all(|l| l.split(',').count() == CSV_HEADER.len()));
}

#[test]
fn seeded_benchmarks_are_reproducible() {
    let run = || {
        let mut bench = Benchmark::with_seed(8);
        bench
            .run_batch(3, PlayerSpec::ai(1), PlayerSpec::Random, "repeat")
            .unwrap();
        bench
            .results()
            .iter()
            .map(|r| (r.winner, r.black_score, r.white_score))
            .collect::<Vec<(Winner, u32, u32)>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = BenchmarkConfig::load("/no/such/bench.toml").unwrap_err();
    assert!(matches!(err, tournament::BenchError::Io { .. }));
}
