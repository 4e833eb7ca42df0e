//! Tests for the command vocabulary

use delve_parser::{Command, HELP_TEXT, PendingTag};

#[test]
fn every_word_parses_back() {
    for command in Command::ALL {
        assert_eq!(Command::parse(command.as_str()), Some(command));
        assert!(HELP_TEXT.contains(command.as_str()) || command == Command::Help);
    }
}

#[test]
fn unknown_words_do_not_parse() {
    for word in ["fly", "North", "go north", "", "take"] {
        assert_eq!(Command::parse(word), None, "{word:?}");
    }
}

#[test]
fn directions_and_prompts_are_disjoint() {
    for command in Command::ALL {
        assert!(!(command.direction().is_some() && command.prompt().is_some()));
    }
    assert_eq!(Command::North.direction(), Some("north"));
    assert_eq!(
        Command::Grab.prompt(),
        Some(("What do you want to pick up?", PendingTag::Item))
    );
    assert_eq!(
        Command::Attack.prompt(),
        Some(("What do you want to attack?", PendingTag::Attack))
    );
    assert_eq!(
        Command::Examine.prompt(),
        Some(("What do you want to examine?", PendingTag::Examine))
    );
    assert_eq!(Command::Help.prompt(), None);
}

#[test]
fn help_text_is_exact() {
    assert_eq!(
        HELP_TEXT,
        "Available commands: north, south, east, west, grab, attack, examine"
    );
}
