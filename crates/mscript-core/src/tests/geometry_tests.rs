//! Tests for [`MagickGeometry`].

use rstest::rstest;

use crate::MagickGeometry;

#[rstest]
#[case("100x50", MagickGeometry::new(100, 50))]
#[case("100", MagickGeometry::new(100, 100))]
#[case("100x", MagickGeometry::new(100, 100))]
#[case("100x+10+20", MagickGeometry::new(100, 100).with_offset(10, 20))]
#[case("x50", MagickGeometry::new(0, 50))]
#[case("100x50+10+20", MagickGeometry::new(100, 50).with_offset(10, 20))]
#[case("100x50-10-20", MagickGeometry::new(100, 50).with_offset(-10, -20))]
#[case("0x0+5", MagickGeometry::new(0, 0).with_offset(5, 0))]
fn parses_size_and_offset(#[case] input: &str, #[case] expected: MagickGeometry) {
    let parsed: MagickGeometry = input.parse().expect("geometry should parse");
    assert_eq!(parsed, expected);
}

#[test]
fn parses_flags_in_any_position() {
    let parsed: MagickGeometry = "50%x25%>".parse().expect("geometry should parse");
    assert_eq!((parsed.width, parsed.height), (50, 25));
    assert!(parsed.is_percentage);
    assert!(parsed.greater);
    assert!(!parsed.less);
    assert!(!parsed.ignore_aspect_ratio);
}

#[rstest]
#[case("")]
#[case("!")]
#[case("x")]
#[case("x!")]
#[case("axb")]
#[case("100x50+")]
#[case("-100x50")]
#[case("99999999999x1")]
fn rejects_malformed_geometry(#[case] input: &str) {
    assert!(input.parse::<MagickGeometry>().is_err(), "{input:?} should fail");
}

#[rstest]
#[case("640x480")]
#[case("640x480+10-5")]
#[case("10x10^")]
#[case("1000x1@")]
#[case("20x30%!<")]
fn display_round_trips(#[case] input: &str) {
    let parsed: MagickGeometry = input.parse().expect("geometry should parse");
    let reparsed: MagickGeometry = parsed.to_string().parse().expect("display should parse");
    assert_eq!(parsed, reparsed);
}
