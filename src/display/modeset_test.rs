use std::error::Error;

use crate::display::modeset::Card;
use crate::display::DisplayError;

#[test]
fn test_open_missing_card() -> Result<(), Box<dyn Error>> {
    let result = Card::open("/dev/dri/does-not-exist");
    assert!(
        matches!(result, Err(DisplayError::CardOpen { .. })),
        "opening a missing card should fail"
    );

    Ok(())
}
