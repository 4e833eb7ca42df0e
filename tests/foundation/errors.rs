//! Tests for error types

use delve_foundation::{Error, ErrorContext, ErrorKind, RoomId};

#[test]
fn duplicate_room_names_the_id() {
    let err = Error::duplicate_room(RoomId::new("hall"));
    assert!(matches!(&err.kind, ErrorKind::DuplicateRoom(id) if id.as_str() == "hall"));
    assert_eq!(err.to_string(), "duplicate room id: hall");
}

#[test]
fn invalid_slot_quotes_the_name() {
    let err = Error::invalid_slot("../x");
    assert_eq!(err.to_string(), "invalid save slot name: \"../x\"");
}

#[test]
fn context_is_optional() {
    let err = Error::invalid_document("expected object");
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_source("game.json"));
    assert_eq!(err.context.unwrap().source.as_deref(), Some("game.json"));
}

#[test]
fn kinds_display_their_payload() {
    let cases = [
        (Error::serialization("eof"), "serialization error: eof"),
        (Error::io("disk full"), "i/o error: disk full"),
        (
            Error::new(ErrorKind::Internal("oops".into())),
            "internal error: oops",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}
