// File: crates/sentinel-chart/tests/color.rs
// Purpose: Color parsing used by panel palettes.

use sentinel_chart::{ColorParseError, Rgba};

#[test]
fn parses_hex_and_names() {
    assert_eq!(Rgba::parse("#ca01e2"), Ok(Rgba::rgb(0xca, 0x01, 0xe2)));
    assert_eq!(Rgba::parse("#F00"), Ok(Rgba::RED));
    assert_eq!(Rgba::parse("#00000080"), Ok(Rgba::new(0, 0, 0, 0x80)));
    assert_eq!("red".parse::<Rgba>(), Ok(Rgba::RED));
    assert_eq!(Rgba::rgb(0xff, 0x96, 0x01).to_hex(), "#ff9601");
}

#[test]
fn rejects_garbage() {
    assert_eq!(Rgba::parse(""), Err(ColorParseError::Empty));
    assert!(matches!(Rgba::parse("#12345"), Err(ColorParseError::InvalidHex(_))));
    assert!(matches!(Rgba::parse("#zzzzzz"), Err(ColorParseError::InvalidHex(_))));
    assert!(matches!(Rgba::parse("chartreuse"), Err(ColorParseError::UnknownName(_))));
}
