use super::*;

fn record(winner: Winner, black: u32, white: u32) -> GameRecord {
    GameRecord {
        timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        player1_type: "RandomAI".to_string(),
        player1_depth: None,
        player2_type: "AIPlayer".to_string(),
        player2_depth: Some(2),
        winner,
        black_score: black,
        white_score: white,
        winner_score: black.max(white),
        loser_score: black.min(white),
        player1_total_time: 0.012,
        player1_moves: 30,
        player1_avg_time_ms: 0.4,
        player2_total_time: 1.5,
        player2_moves: 30,
        player2_avg_time_ms: 50.0,
    }
}

#[test]
fn test_summary_counts_and_averages() {
    let records = [
        record(Winner::Black, 40, 24),
        record(Winner::White, 20, 44),
        record(Winner::White, 10, 54),
        record(Winner::Tie, 32, 32),
    ];
    let s = BatchSummary::from_records("mix", &records);
    assert_eq!(s.games, 4);
    assert_eq!((s.black_wins, s.white_wins, s.ties), (1, 2, 1));
    assert_eq!(s.avg_black_score, 25.5);
    assert_eq!(s.avg_white_score, 38.5);
    assert_eq!(s.white_win_pct(), 50.0);
    assert_eq!(s.tie_pct(), 25.0);
    assert!(s.generate_report().contains("White wins"));
}

#[test]
fn test_empty_summary() {
    let s = BatchSummary::from_records("none", &[]);
    assert_eq!(s.games, 0);
    assert_eq!(s.black_win_pct(), 0.0);
    assert_eq!(s.avg_black_score, 0.0);
}

#[test]
fn test_run_batch_collects_records() {
    let mut bench = Benchmark::with_seed(1);
    let summary = bench
        .run_batch(3, PlayerSpec::Random, PlayerSpec::Random, "random mirror")
        .unwrap();
    assert_eq!(summary.games, 3);
    assert_eq!(summary.black_wins + summary.white_wins + summary.ties, 3);
    assert_eq!(bench.results().len(), 3);
    assert_eq!(bench.summaries(), &[summary]);
}

#[test]
fn test_multi_batch() {
    let mut bench = Benchmark::with_seed(5);
    let batches = [
        BatchConfig {
            name: None,
            player1: PlayerSpec::Random,
            player2: PlayerSpec::ai(1),
        },
        BatchConfig {
            name: Some("depth one mirror".to_string()),
            player1: PlayerSpec::ai(1),
            player2: PlayerSpec::ai(1),
        },
    ];
    let summaries = bench.run_multi_batch(2, &batches).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "random vs ai:1");
    assert_eq!(summaries[1].name, "depth one mirror");
    assert_eq!(bench.results().len(), 4);
}

#[test]
fn test_csv_layout() {
    let mut bench = Benchmark::new();
    bench.results.push(record(Winner::White, 20, 44));
    let mut out = Vec::new();
    bench.write_csv(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), CSV_HEADER.join(","));
    let row: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(row.len(), CSV_HEADER.len());
    assert_eq!(row[1], "RandomAI");
    assert_eq!(row[2], "-");
    assert_eq!(row[4], "2");
    assert_eq!(row[5], "WHITE");
    assert_eq!(row[8], "44");
    assert_eq!(row[15], "50");
    assert!(lines.next().is_none());
}

#[test]
fn test_save_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut bench = Benchmark::with_seed(2);
    bench
        .run_batch(2, PlayerSpec::Random, PlayerSpec::Random, "files")
        .unwrap();

    let csv = dir.path().join("out.csv");
    bench.save_csv(&csv).unwrap();
    let text = std::fs::read_to_string(&csv).unwrap();
    assert_eq!(text.lines().count(), 3);

    let json = dir.path().join("out.json");
    bench.save_json(&json).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["games"].as_array().unwrap().len(), 2);
    assert_eq!(value["summaries"][0]["name"], "files");
}

#[test]
fn test_save_csv_without_results_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    Benchmark::new().save_csv(&path).unwrap();
    assert!(!path.exists());
}
