use crate::helpers::cli_runner::Sandbox;
use serial_test::serial;

const FRUIT: &str = "🍎🍋🍌";

fn start(sb: &Sandbox) -> String {
    sb.ok(&["new", FRUIT, "--seed", "SEED"])
}

#[test]
#[serial]
fn new_game_shows_card_and_invitation() {
    let sb = Sandbox::new();
    let stdout = start(&sb);
    assert!(stdout.contains("Room:  SEED\n"), "{}", stdout);
    assert!(stdout.contains("Player: 1\n"));
    assert!(stdout.contains("Card:  🍋\n"));
    assert!(stdout.contains("Room: SEED\nCards: 🍎🍋🍌\n\nhttp://localhost:3000/?s=SEED&c="));
    assert!(sb.state_file().is_file());
}

#[test]
#[serial]
fn rounds_advance_and_persist() {
    let sb = Sandbox::new();
    start(&sb);

    let next = sb.ok(&["next"]);
    assert!(next.contains("Round: 2\n"));
    assert!(next.contains("Card:  🍌\n"));
    assert!(next.contains("everyone else also goes to the next round"));

    let shown = sb.ok(&["show"]);
    assert!(shown.contains("Round: 2\n"));
    assert!(shown.contains("Card:  🍌\n"));

    let prev = sb.ok(&["prev"]);
    assert!(prev.contains("Round: 1\n"));
    assert!(prev.contains("Card:  🍋\n"));

    let floor = sb.ok(&["prev"]);
    assert!(floor.contains("Round: 1\n"));
}

#[test]
#[serial]
fn choosing_a_seat_changes_the_card() {
    let sb = Sandbox::new();
    start(&sb);
    assert!(sb.ok(&["player", "3"]).contains("Card:  🍎\n"));
    assert!(sb.ok(&["player", "5"]).contains("(no card: only 3 in play)"));
    let cleared = sb.ok(&["player", "0"]);
    assert!(cleared.contains("Pick your seat with: cardroom player <N>"));
}

#[test]
#[serial]
fn commands_need_a_game() {
    let sb = Sandbox::new();
    assert_eq!(sb.ok(&["show"]), "No game in progress.\n");
    for cmd in ["next", "prev", "link", "invite"] {
        let res = sb.run(&[cmd]);
        assert_eq!(res.exit_code, 2, "{} without a game", cmd);
        assert!(res.stderr.contains("No game in progress"), "{}", res.stderr);
    }
    let res = sb.run(&["player", "2"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
#[serial]
fn generated_seed_uses_configured_length() {
    let sb = Sandbox::new().with_env("CARDROOM_SEED_LENGTH", "6");
    let stdout = sb.ok(&["new", FRUIT]);
    let room = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Room:  "))
        .expect("room line");
    assert_eq!(room.chars().count(), 6);
    assert!(room.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
#[serial]
fn new_game_rejects_blank_cards() {
    let sb = Sandbox::new();
    let res = sb.run(&["new", " \t "]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Enter some emojis"));
    assert!(!sb.state_file().exists());
}

#[test]
#[serial]
fn dispatch_accepts_json_intents() {
    let sb = Sandbox::new();
    let begun = sb.ok(&[
        "dispatch",
        r#"{"type":"beginGame","payload":{"seed":"SEED","orderedCards":["🍎","🍋","🍌"],"player":2}}"#,
    ]);
    assert!(begun.contains("Card:  🍌\n"), "{}", begun);

    let moved = sb.ok(&["dispatch", r#"{"type":"nextRound"}"#]);
    assert!(moved.contains("Round: 2\n"));

    let res = sb.run(&["dispatch", r#"{"type":"rollDice"}"#]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Unknown action type"), "{}", res.stderr);
    assert!(sb.ok(&["show"]).contains("Round: 2\n"));
}

#[test]
#[serial]
fn corrupt_state_starts_over() {
    let sb = Sandbox::new();
    start(&sb);
    std::fs::write(sb.state_file(), "{ not json").unwrap();
    assert_eq!(sb.ok(&["show"]), "No game in progress.\n");
    start(&sb);
    assert!(sb.ok(&["show"]).contains("Card:  🍋\n"));
}
