//! Tests for the phone command.

use rosterline_cli::commands::phone::run;

#[test]
fn test_formats_each_argument() {
    let out = run(&[
        "555-123-4567".to_string(),
        "1234567 x89".to_string(),
        "".to_string(),
    ]);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].text, "(555) 123-4567");
    assert_eq!(out[0].href.as_deref(), Some("tel:+15551234567"));
    assert_eq!(out[1].text, "123-4567 x89");
    assert_eq!(out[1].href.as_deref(), Some("tel:+11234567,89"));
    assert_eq!(out[2].text, "No Number Entered.");
    assert_eq!(out[2].href, None);
}

#[test]
fn test_mixed_segments() {
    let out = run(&["555-123-4567;abc".to_string()]);
    assert_eq!(out[0].text, "(555) 123-4567 • abc");
    assert_eq!(out[0].href.as_deref(), Some("tel:+15551234567"));
}
