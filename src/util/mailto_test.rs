use super::*;

#[test]
fn new_encodes_subject_and_body() {
    let link = MailtoLink::new("me@example.com", "Hi there", "line one\nline two & more");
    assert_eq!(
        link.as_str(),
        "mailto:me@example.com?subject=Hi%20there&body=line%20one%0Aline%20two%20%26%20more"
    );
}

#[test]
fn param_round_trips_reserved_characters() {
    let body = "a=b&c?d#e";
    let link = MailtoLink::new("me@example.com", "s", body);
    assert_eq!(link.param("body").as_deref(), Some(body));
    assert_eq!(link.param("subject").as_deref(), Some("s"));
}

#[test]
fn param_missing_returns_none() {
    let link = MailtoLink::new("me@example.com", "s", "b");
    assert_eq!(link.param("cc"), None);
}

#[test]
fn display_matches_as_str() {
    let link = MailtoLink::new("me@example.com", "s", "b");
    assert_eq!(link.to_string(), link.as_str());
}
