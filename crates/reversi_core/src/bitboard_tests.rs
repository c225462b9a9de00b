use super::*;

#[test]
fn test_set_and_contains() {
    let mut bb = Bitboard::EMPTY;
    let d3 = Move::new(2, 3).unwrap();
    assert!(!bb.contains(d3));
    bb.set(d3);
    assert!(bb.contains(d3));
    assert_eq!(bb.popcount(), 1);
}

#[test]
fn test_iter_yields_squares_in_index_order() {
    let squares = [
        Move::new(7, 7).unwrap(),
        Move::new(0, 0).unwrap(),
        Move::new(3, 4).unwrap(),
    ];
    let mut bb = Bitboard::EMPTY;
    for mv in squares {
        bb.set(mv);
    }
    let got: Vec<Move> = bb.iter().collect();
    assert_eq!(
        got,
        vec![
            Move::new(0, 0).unwrap(),
            Move::new(3, 4).unwrap(),
            Move::new(7, 7).unwrap()
        ]
    );
}

#[test]
fn test_xor_toggles() {
    let a = Bitboard(0b1010);
    let b = Bitboard(0b0110);
    assert_eq!(a ^ b, Bitboard(0b1100));
    let mut c = a;
    c ^= b;
    c ^= b;
    assert_eq!(c, a);
}
