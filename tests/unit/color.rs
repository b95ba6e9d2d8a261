use super::*;

#[test]
fn equivalent_specs_resolve_to_the_same_color() {
    let named: Color = "red".parse().unwrap();
    let hex: Color = "#FF0000".parse().unwrap();
    let triple: Color = "rgb(255,0,0)".parse().unwrap();

    assert_eq!(named, hex);
    assert_eq!(hex, triple);
    assert_eq!(named.to_string(), "0xFF0000");
}

#[test]
fn spec_variants_are_tagged_by_shape() {
    assert!(matches!(
        ColorSpec::parse("LightGrey").unwrap(),
        ColorSpec::Named {
            name: "lightgrey",
            ..
        }
    ));
    assert!(matches!(
        ColorSpec::parse("0x1a1911").unwrap(),
        ColorSpec::Hex(Color {
            r: 0x1a,
            g: 0x19,
            b: 0x11,
            a: 255
        })
    ));
    assert_eq!(
        ColorSpec::parse("rgb( 1, 2 ,3 )").unwrap(),
        ColorSpec::RgbTriple(1, 2, 3)
    );
}

#[test]
fn hex_alpha_is_kept_in_canonical_form() {
    let c: Color = "#0000ff80".parse().unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_string(), "0x0000FF80");

    let opaque: Color = "#ffffee".parse().unwrap();
    assert_eq!(opaque.to_string(), "0xFFFFEE");
}

#[test]
fn rejects_malformed_colors() {
    for bad in [
        "",
        "#12345",
        "#GGGGGG",
        "0x12",
        "rgb(1,2)",
        "rgb(1,2,3,4)",
        "rgb(256,0,0)",
        "rgb(-1,0,0)",
        "lightred",
        "not-a-color",
    ] {
        let err = bad.parse::<Color>().unwrap_err();
        assert!(
            matches!(err, RsvpError::InvalidColor(_)),
            "expected InvalidColor for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn serializes_as_canonical_string() {
    let c = Color::rgb(0x12, 0x34, 0x56);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"0x123456\"");
}
