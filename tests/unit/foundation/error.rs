use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RsvpError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        RsvpError::invalid_color("x")
            .to_string()
            .contains("invalid color:")
    );
    assert!(
        RsvpError::external_tool("x", None)
            .to_string()
            .contains("external tool failure:")
    );
    assert!(
        RsvpError::config("x")
            .to_string()
            .contains("configuration error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RsvpError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn usage_errors_exit_with_two() {
    assert_eq!(RsvpError::invalid_input("x").exit_code(), 2);
    assert_eq!(RsvpError::invalid_color("x").exit_code(), 2);
    assert_eq!(RsvpError::config("x").exit_code(), 2);
}

#[test]
fn encoder_exit_code_is_propagated() {
    assert_eq!(RsvpError::external_tool("x", Some(69)).exit_code(), 69);
    // Killed by a signal, or not spawned at all.
    assert_eq!(RsvpError::external_tool("x", None).exit_code(), 1);
    // Windows-style codes that do not fit a status byte.
    assert_eq!(RsvpError::external_tool("x", Some(-1073741819)).exit_code(), 1);
    assert_eq!(RsvpError::external_tool("x", Some(0)).exit_code(), 1);
}

#[test]
fn other_exits_with_one() {
    let err = RsvpError::Other(anyhow::anyhow!("io"));
    assert_eq!(err.exit_code(), 1);
}
