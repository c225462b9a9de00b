use super::*;

#[test]
fn test_parse_player_specs() {
    assert_eq!("random".parse::<PlayerSpec>().unwrap(), PlayerSpec::Random);
    assert_eq!("RandomAI".parse::<PlayerSpec>().unwrap(), PlayerSpec::Random);
    assert_eq!("ai:3".parse::<PlayerSpec>().unwrap(), PlayerSpec::ai(3));
    assert_eq!(
        "AI:4:Tuned".parse::<PlayerSpec>().unwrap(),
        PlayerSpec::Ai {
            depth: 4,
            profile: Profile::Tuned
        }
    );
}

#[test]
fn test_reject_bad_specs() {
    for bad in ["", "ai", "ai:", "ai:x", "ai:0", "ai:2:godlike", "human", "ai:2:tuned:x"] {
        assert!(bad.parse::<PlayerSpec>().is_err(), "{bad:?} parsed");
    }
    assert!(matches!(
        "ai:2:godlike".parse::<PlayerSpec>(),
        Err(BenchError::Engine(_))
    ));
}

#[test]
fn test_spec_display_round_trips() {
    for spec in [
        PlayerSpec::Random,
        PlayerSpec::ai(2),
        PlayerSpec::Ai {
            depth: 5,
            profile: Profile::Corners,
        },
    ] {
        assert_eq!(spec.to_string().parse::<PlayerSpec>().unwrap(), spec);
    }
    assert_eq!(PlayerSpec::ai(2).to_string(), "ai:2");
}

#[test]
fn test_labels_and_depth() {
    assert_eq!(PlayerSpec::Random.type_label(), "RandomAI");
    assert_eq!(PlayerSpec::Random.depth(), None);
    assert_eq!(PlayerSpec::ai(3).type_label(), "AIPlayer");
    assert_eq!(PlayerSpec::ai(3).depth(), Some(3));
}

#[test]
fn test_build_players() {
    let random = PlayerSpec::Random.build(Some(1));
    assert!(!random.is_search_based());
    let ai = PlayerSpec::ai(2).build(None);
    assert!(ai.is_search_based());
    assert_eq!(ai.name(), "ai:2");
}

#[test]
fn test_benchmark_config_from_toml() {
    let config = BenchmarkConfig::from_toml_str(
        r#"
        output = "out.csv"
        games_per_batch = 4
        seed = 9

        [[batches]]
        name = "baseline"
        player1 = "random"
        player2 = "ai:2"

        [[batches]]
        player1 = "ai:1:mobility"
        player2 = "random"
        "#,
    )
    .unwrap();
    assert_eq!(config.output, PathBuf::from("out.csv"));
    assert_eq!(config.json_output, None);
    assert_eq!(config.games_per_batch, 4);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.batches.len(), 2);
    assert_eq!(config.batches[0].display_name(), "baseline");
    assert_eq!(config.batches[1].display_name(), "ai:1:mobility vs random");
}

#[test]
fn test_benchmark_config_defaults() {
    let config = BenchmarkConfig::from_toml_str("").unwrap();
    assert_eq!(config.output, PathBuf::from("benchmark_results.csv"));
    assert_eq!(config.games_per_batch, 10);
    assert!(config.batches.is_empty());
}

#[test]
fn test_bad_player_in_config() {
    let err = BenchmarkConfig::from_toml_str(
        r#"
        [[batches]]
        player1 = "ai:nine"
        player2 = "random"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, BenchError::Toml(_)));
}
