use super::*;

#[test]
fn test_parse_d3() {
    let mv = parse_move("D3").unwrap();
    assert_eq!((mv.row(), mv.col()), (2, 3));
}

#[test]
fn test_parse_is_case_and_separator_tolerant() {
    assert_eq!(parse_move("d3"), parse_move("D3"));
    assert_eq!(parse_move(" d, 3 "), parse_move("D3"));
}

#[test]
fn test_corners_round_trip_through_display() {
    for text in ["A1", "H1", "A8", "H8"] {
        assert_eq!(format_move(parse_move(text).unwrap()), text);
    }
}

#[test]
fn test_rejects_bad_format() {
    assert!(matches!(parse_move(""), Err(NotationError::Format(_))));
    assert!(matches!(parse_move("D33"), Err(NotationError::Format(_))));
    assert!(matches!(parse_move("3D"), Err(NotationError::Format(_))));
    assert!(matches!(parse_move("??"), Err(NotationError::Format(_))));
}

#[test]
fn test_rejects_out_of_range_row() {
    assert_eq!(parse_move("D9"), Err(NotationError::Row('9')));
    assert_eq!(parse_move("D0"), Err(NotationError::Row('0')));
}

#[test]
fn test_rejects_out_of_range_column() {
    assert_eq!(parse_move("Z3"), Err(NotationError::Column('Z')));
    assert_eq!(parse_move("i1"), Err(NotationError::Column('I')));
}

#[test]
fn test_format_moves_joins_with_commas() {
    let moves = [parse_move("C4").unwrap(), parse_move("D3").unwrap()];
    assert_eq!(format_moves(&moves), "C4, D3");
}
