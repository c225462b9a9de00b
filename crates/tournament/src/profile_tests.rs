use super::*;

#[test]
fn test_phase_positions_have_expected_disc_counts() {
    let mut rng = StdRng::seed_from_u64(4);
    let (opening, color) = phase_position(ProfilePhase::Opening, &mut rng);
    assert_eq!(opening, Board::new());
    assert_eq!(color, Color::Black);

    let (mid, _) = phase_position(ProfilePhase::Midgame, &mut rng);
    assert_eq!(mid.empty_count(), 60 - 12);

    let (end, _) = phase_position(ProfilePhase::Endgame, &mut rng);
    assert!(end.empty_count() <= 60 - 12);
}

#[test]
fn test_variant_configs() {
    assert_eq!(Variant::Base.config(), SearchConfig::plain());
    assert!(Variant::Tt.config().use_tt);
    assert_eq!(Variant::Ordering.config().ordering, OrderingPolicy::Always);
    assert!(!Variant::Ordering.config().use_tt);
    assert_eq!(Variant::Both.label(), "TT+MO");
}

#[test]
fn test_profile_variants_agree() {
    let rows = profile_phases(&[1, 3], 11, EvaluationWeights::default()).unwrap();
    assert_eq!(rows.len(), 6);
    for row in &rows {
        assert_eq!(row.runs.len(), 4);
        let base = row.run(Variant::Base).unwrap();
        assert!(base.nodes > 0);
        assert_eq!(base.tt_entries, 0);
        for run in &row.runs {
            assert_eq!(run.score, base.score);
        }
        assert_eq!(row.node_reduction(Variant::Base), 0.0);
    }
}

#[test]
fn test_profile_csv_layout() {
    let rows = profile_phases(&[2], 3, EvaluationWeights::default()).unwrap();
    let mut out = Vec::new();
    write_profile_csv(&rows, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Phase,Depth,Base_Time,Base_Nodes,TT_Time,TT_Nodes,MO_Time,MO_Nodes,Both_Time,Both_Nodes"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("midgame,2,"));
    assert_eq!(lines[1].split(',').count(), 10);
    assert!(generate_profile_report(&rows).contains("TT+MO"));
}
