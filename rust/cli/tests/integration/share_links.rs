use crate::helpers::cli_runner::Sandbox;
use serial_test::serial;

const FRUIT_LINK: &str =
    "http://localhost:3000/?s=SEED&c=%F0%9F%8D%8E%F0%9F%8D%8B%F0%9F%8D%8C";

#[test]
#[serial]
fn link_encodes_game() {
    let sb = Sandbox::new();
    sb.ok(&["new", "🍎🍋🍌", "--seed", "SEED"]);
    assert_eq!(sb.ok(&["link"]), format!("{}\n", FRUIT_LINK));
    sb.ok(&["next"]);
    assert_eq!(sb.ok(&["link"]), format!("{}&r=2\n", FRUIT_LINK));
    assert_eq!(
        sb.ok(&["invite"]),
        format!(
            "Room: SEED\nCards: 🍎🍋🍌\nRound: 2\n\n{}&r=2\n",
            FRUIT_LINK
        )
    );
}

#[test]
#[serial]
fn guest_sees_host_shuffle() {
    let mut sb = Sandbox::new();
    sb.ok(&["new", "🍎🍋🍌🍇", "--seed", "k7x2", "--round", "3"]);
    let link = sb.ok(&["link"]);

    sb.use_state_dir("guest");
    let joined = sb.ok(&["join", link.trim()]);
    assert!(joined.contains("Round: 3\n"));
    assert!(joined.contains("Pick your seat"));

    let seated = sb.ok(&["player", "1"]);
    assert!(seated.contains("Card:  🍌\n"), "{}", seated);
}

#[test]
#[serial]
fn rejoining_keeps_seat() {
    let sb = Sandbox::new();
    sb.ok(&["new", "🍎🍋🍌", "--seed", "SEED", "--player", "3"]);
    let link = sb.ok(&["link"]);
    sb.ok(&["next"]);

    // an older link for the same game does not pull this device back
    let res = sb.run(&["join", link.trim()]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("already playing this game"));
    assert!(res.stdout.contains("Round: 2\n"));
    assert!(res.stdout.contains("Player: 3\n"));
}

#[test]
#[serial]
fn later_round_link_advances_guest() {
    let mut sb = Sandbox::new();
    sb.ok(&["new", "🍎🍋🍌", "--seed", "SEED"]);
    sb.use_state_dir("guest");
    sb.ok(&["join", FRUIT_LINK]);
    sb.ok(&["player", "2"]);

    let res = sb.run(&["join", &format!("{}&r=4", FRUIT_LINK)]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Round: 4\n"));
    // a link-started game resets the seat
    assert!(res.stdout.contains("Pick your seat"));
}

#[test]
#[serial]
fn bad_links_are_reported() {
    let sb = Sandbox::new();
    for link in ["not a link", "http://localhost:3000/?c=abc", "?s=abc"] {
        let res = sb.run(&["join", link]);
        assert_eq!(res.exit_code, 2, "{}", link);
        assert!(res.stderr.contains("not a game link"), "{}", res.stderr);
    }
    assert!(!sb.state_file().exists());
}

#[test]
#[serial]
fn query_only_link_is_accepted() {
    let sb = Sandbox::new();
    let joined = sb.ok(&["join", "?s=SEED&c=🍎🍋🍌&r=2"]);
    assert!(joined.contains("Room:  SEED\n"));
    assert!(joined.contains("Round: 2\n"));
}

#[cfg(unix)]
#[test]
#[serial]
fn new_game_is_offered_to_share_command() {
    let sb = Sandbox::new();
    let shared = sb.path().join("shared.txt");
    let command = format!("tee {}", shared.display());
    let sb = sb.with_env("CARDROOM_SHARE_COMMAND", &command);
    sb.ok(&["new", "🍎🍋🍌", "--seed", "SEED"]);
    let text = std::fs::read_to_string(&shared).unwrap();
    assert_eq!(text, format!("Room: SEED\nCards: 🍎🍋🍌\n\n{}", FRUIT_LINK));
}
