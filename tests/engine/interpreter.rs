//! Tests for the command interpreter state machine

use delve_engine::{Game, GameConfig, MovePolicy, State};
use delve_parser::{HELP_TEXT, PendingStack, PendingTag};

use crate::cave;

fn game() -> Game {
    Game::new(&cave(), GameConfig::default()).unwrap()
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(ToString::to_string).collect()
}

#[test]
fn help_is_idle() {
    let mut game = game();
    assert_eq!(game.next_step(Some("HELP")), lines(&[HELP_TEXT]));
    assert_eq!(game.state(), State::Idle);
}

#[test]
fn one_way_connections() {
    let mut game = game();
    game.next_step(Some("north"));
    assert_eq!(game.next_step(Some("down")), lines(&["Bottom of a pit"]));
    assert_eq!(game.next_step(Some("up")), lines(&["I don't know the word \"up\"."]));
    assert_eq!(game.next_step(Some("south")), lines(&["Bottom of a pit"]));
}

#[test]
fn narrated_blocked_move() {
    let config = GameConfig::default().with_move_policy(MovePolicy::narrated());
    let mut game = Game::new(&cave(), config).unwrap();
    assert_eq!(game.next_step(Some("east")), lines(&["You can't go that way."]));
    assert_eq!(game.current_room().id().as_str(), "mouth");

    let config = GameConfig::default().with_move_policy(MovePolicy::Narrate("Solid rock.".into()));
    let mut game = Game::new(&cave(), config).unwrap();
    assert_eq!(game.next_step(Some("west")), lines(&["Solid rock."]));
}

#[test]
fn each_line_pops_one_tag() {
    let mut game = game();
    game.next_step(Some("grab"));
    assert_eq!(game.state(), State::Awaiting(&PendingTag::Item));

    // The answer is never parsed as a command.
    assert_eq!(game.next_step(Some("grab")), lines(&["You can't see any \"grab\" here."]));
    assert_eq!(game.state(), State::Idle);
}

#[test]
fn deep_stack_unwinds_in_order() {
    let mut snapshot = game().snapshot();
    snapshot.stack = PendingStack::from(vec!["ITEM", "EXAMINE", "ATTACK"]);
    let mut game = Game::resume(&cave(), &snapshot, GameConfig::default()).unwrap().game;

    assert_eq!(game.next_step(Some("The Wall!")), lines(&["the wall"]));
    assert_eq!(game.state(), State::Awaiting(&PendingTag::Examine));
    assert_eq!(game.next_step(Some("torch")), lines(&["A sputtering torch"]));
    assert_eq!(game.next_step(Some("Torch")), lines(&["Taken"]));
    assert_eq!(game.state(), State::Idle);
}

#[test]
fn unknown_tag_drops_to_next() {
    let mut snapshot = game().snapshot();
    snapshot.stack = PendingStack::from(vec!["ITEM", "TALK"]);
    let mut game = Game::resume(&cave(), &snapshot, GameConfig::default()).unwrap().game;

    assert_eq!(game.next_step(Some("Hello?")), lines(&["Unexpected input: \"Hello?\"."]));
    assert_eq!(game.pending().to_strings(), vec!["ITEM"]);
}

#[test]
fn examine_looks_in_inventory_too() {
    let mut game = game();
    game.next_step(Some("grab"));
    game.next_step(Some("torch"));
    game.next_step(Some("north"));

    game.next_step(Some("examine"));
    assert_eq!(game.next_step(Some("torch")), lines(&["A sputtering torch"]));
    game.next_step(Some("examine"));
    assert_eq!(game.next_step(Some("bone")), lines(&["A thigh bone"]));
    game.next_step(Some("examine"));
    assert_eq!(game.next_step(Some("paintings")), lines(&["paintings"]));
}

#[test]
fn grab_matches_lowercased_names() {
    let mut game = game();
    game.next_step(Some("north"));
    game.next_step(Some("grab"));
    assert_eq!(game.next_step(Some("BONE")), lines(&["Taken"]));
    assert_eq!(game.player().inventory()[0].id.as_str(), "bone");
    assert_eq!(game.current_room().inventory().len(), 1);
}

#[test]
fn taken_items_stay_taken() {
    let mut game = game();
    game.next_step(Some("grab"));
    game.next_step(Some("torch"));
    game.next_step(Some("grab"));
    assert_eq!(game.next_step(Some("torch")), lines(&["You can't see any \"torch\" here."]));
    assert_eq!(game.player().inventory().len(), 1);
}

#[test]
fn starting_health_is_configurable() {
    let game = Game::new(&cave(), GameConfig::default().with_starting_health(3)).unwrap();
    assert_eq!(game.player().health(), 3);

    let mut game = Game::new(&cave(), GameConfig::default().with_starting_health(0)).unwrap();
    assert!(game.next_step(Some("help")).is_empty());
}
