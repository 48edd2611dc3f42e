//! Config file to running session.

use std::fs;

use lantern_engine::{
    ClickTarget, ConfigError, ContentCategory, EnvOverrides, LanternConfig, LinkClickPolicy,
    Reveal, Settings, Variant,
};

use crate::common::{Screen, mount, ms};

fn load(body: &str) -> Result<LanternConfig, ConfigError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    LanternConfig::load_from(path)
}

#[test]
fn configured_session_end_to_end() {
    let config = load(
        r#"
[app]
variant = "classic"
credit = "Made in a terminal"
continue_hint = "click anywhere"
reduced_motion = true
link_clicks = "suppress"
seed = 7

[timing]
secondary_delay_ms = 250
continue_hint_delay_ms = 2000

[content]
greetings = ["Good evening"]
farewells = ["See you"]
"#,
    )
    .unwrap();

    let settings = Settings::resolve(Some(&config), &EnvOverrides::default()).unwrap();
    assert_eq!(settings.variant, Variant::Classic);
    assert_eq!(settings.link_clicks, LinkClickPolicy::Suppress);

    let mut screen = Screen::new(mount(settings, 0));
    assert_eq!(
        screen.app.selection().get(ContentCategory::Greeting),
        "Good evening"
    );

    let text = screen.text();
    assert!(text.contains("Good evening"), "{text}");
    assert!(text.contains("Made in a terminal"));
    assert!(!screen.wait(1999).contains("click anywhere"));
    assert!(screen.wait(1).contains("click anywhere"));

    screen.app.click(ClickTarget::Surface);
    assert_eq!(screen.app.advance_time(ms(250)), vec![Reveal::Secondary]);

    for _ in 0..3 {
        screen.app.click(ClickTarget::Surface);
    }
    assert!(screen.text().contains("See you"));
}

#[test]
fn seeded_config_repeats_content() {
    let config = load("[app]\nseed = 99\n").unwrap();
    let settings = Settings::resolve(Some(&config), &EnvOverrides::default()).unwrap();
    let a = lantern_engine::App::new(settings.clone());
    let b = lantern_engine::App::new(settings);
    assert_eq!(a.selection(), b.selection());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = load("[app]\nvariant = \"classic\"\n\n[colours]\nlink = \"blue\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.path().ends_with("config.toml"));
}

#[test]
fn empty_pool_is_rejected() {
    let config = load("[content]\ntools = []\n").unwrap();
    assert!(Settings::resolve(Some(&config), &EnvOverrides::default()).is_err());
}
