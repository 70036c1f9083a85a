use crate::helpers::cli_runner::Sandbox;
use serde_json::Value;
use serial_test::serial;

fn cfg(sb: &Sandbox) -> Value {
    serde_json::from_str(&sb.ok(&["cfg"])).expect("cfg prints JSON")
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let sb = Sandbox::new();
    let json = cfg(&sb);
    assert_eq!(json["base_url"]["value"], "http://localhost:3000/");
    assert_eq!(json["base_url"]["source"], "default");
    assert_eq!(json["algorithm"]["value"], "arc4");
    assert_eq!(json["seed_length"]["value"], 4);
    assert_eq!(json["share_command"]["value"], serde_json::json!([]));
    assert_eq!(json["log_level"]["value"], "warn");
    // the sandbox points the state directory somewhere private
    assert_eq!(json["state_dir"]["source"], "env");
}

#[test]
#[serial]
fn env_overrides_file() {
    let sb = Sandbox::new();
    let path = sb.path().join("cardroom.toml");
    std::fs::write(
        &path,
        "base_url = \"https://cards.example/play\"\nalgorithm = \"chacha20\"\nseed_length = 6\n",
    )
    .unwrap();
    let sb = sb
        .with_env("CARDROOM_CONFIG", path.to_str().unwrap())
        .with_env("CARDROOM_ALGORITHM", "arc4");

    let json = cfg(&sb);
    assert_eq!(json["base_url"]["value"], "https://cards.example/play");
    assert_eq!(json["base_url"]["source"], "file");
    assert_eq!(json["seed_length"]["value"], 6);
    assert_eq!(json["seed_length"]["source"], "file");
    assert_eq!(json["algorithm"]["value"], "arc4");
    assert_eq!(json["algorithm"]["source"], "env");
}

#[test]
#[serial]
fn base_url_shapes_links() {
    let sb = Sandbox::new().with_env("CARDROOM_BASE_URL", "https://cards.example/play");
    sb.ok(&["new", "ab", "--seed", "q"]);
    assert_eq!(sb.ok(&["link"]), "https://cards.example/play?s=q&c=ab\n");
}

#[test]
#[serial]
fn configured_algorithm_drives_shuffle() {
    let sb = Sandbox::new().with_env("CARDROOM_ALGORITHM", "chacha20");
    let configured = sb.ok(&["shuffle", "abcdefghij", "--seed", "s"]);
    let explicit = sb.ok(&[
        "shuffle",
        "abcdefghij",
        "--seed",
        "s",
        "--algorithm",
        "chacha20",
    ]);
    assert_eq!(configured, explicit);
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    for (key, value) in [
        ("CARDROOM_SEED_LENGTH", "0"),
        ("CARDROOM_SEED_LENGTH", "many"),
        ("CARDROOM_ALGORITHM", "mt19937"),
        ("CARDROOM_BASE_URL", "/relative"),
    ] {
        let sb = Sandbox::new().with_env(key, value);
        let res = sb.run(&["show"]);
        assert_eq!(res.exit_code, 2, "{}={}", key, value);
        assert!(
            res.stderr.contains("Invalid configuration"),
            "{}={}: {}",
            key,
            value,
            res.stderr
        );
    }
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    let sb = Sandbox::new();
    let missing = sb.path().join("missing.toml");
    let sb = sb.with_env("CARDROOM_CONFIG", missing.to_str().unwrap());
    let res = sb.run(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}

#[test]
#[serial]
fn config_error_is_reported_once() {
    let sb = Sandbox::new().with_env("CARDROOM_SEED_LENGTH", "0");
    let res = sb.run(&["show"]);
    assert_eq!(res.exit_code, 2);
    assert_eq!(
        res.stderr,
        "Error: Invalid configuration: seed_length must be within 1..=16\n"
    );
}
