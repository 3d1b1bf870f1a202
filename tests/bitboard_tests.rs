use seabattle::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    assert!(BitBoard::<u64>::try_new(8).is_ok());
    assert!(BitBoard::<u128>::try_new(11).is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8>::try_new(3);
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));
    assert!(BitBoard::<u128>::try_new(12).is_err());
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16>::try_new(4).unwrap();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_iter_set_bits() {
    let mut bb = BitBoard::<u128>::try_new(6).unwrap();
    bb.set(3, 5).unwrap();
    bb.set(0, 1).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 5)]);
}
