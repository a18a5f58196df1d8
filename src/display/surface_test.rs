use std::error::Error;

use crate::display::surface::SurfacePair;

#[test]
fn test_front_and_back_are_distinct() -> Result<(), Box<dyn Error>> {
    let mut pair = SurfacePair::new(vec![0u8; 4], vec![0u8; 4]);
    for _ in 0..4 {
        assert_ne!(pair.front_index(), pair.back_index());
        assert!(
            !std::ptr::eq(pair.front(), pair.back()),
            "front and back should resolve to different slots"
        );
        pair.swap();
    }

    Ok(())
}

#[test]
fn test_swap_toggles_front() -> Result<(), Box<dyn Error>> {
    let mut pair = SurfacePair::new("first", "second");
    assert_eq!(pair.front_index(), 0);
    assert_eq!(*pair.front(), "first");
    assert_eq!(*pair.back(), "second");

    pair.swap();
    assert_eq!(pair.front_index(), 1);
    assert_eq!(*pair.front(), "second");
    assert_eq!(*pair.back(), "first");

    pair.swap();
    assert_eq!(*pair.front(), "first", "two swaps should restore the pair");

    Ok(())
}

#[test]
fn test_draw_into_back() -> Result<(), Box<dyn Error>> {
    let mut pair = SurfacePair::new(vec![0u8; 4], vec![0u8; 4]);
    pair.back_mut().fill(0xff);
    assert_eq!(pair.front(), &vec![0u8; 4], "drawing should not touch the front");

    pair.swap();
    assert_eq!(pair.front(), &vec![0xffu8; 4]);
    assert_eq!(pair.into_inner(), [vec![0u8; 4], vec![0xffu8; 4]]);

    Ok(())
}
