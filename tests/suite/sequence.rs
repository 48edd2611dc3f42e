//! Panel sequencing through the public session API.

use lantern_engine::{
    ClickTarget, ContentCategory, PanelSequencer, Reveal, SequenceState, Variant,
};

use crate::common::{mount, ms, still_settings};

#[test]
fn walkthrough_from_mount_back_to_greeting() {
    for variant in [Variant::Classic, Variant::Extended] {
        let mut app = mount(still_settings(variant), 11);
        let n = app.panel_count();

        assert_eq!(app.state(), SequenceState::at(0));

        assert_eq!(app.advance_time(ms(4999)), Vec::<Reveal>::new());
        assert_eq!(app.advance_time(ms(1)), vec![Reveal::ContinueHint]);
        assert!(app.state().continue_hint_visible);

        assert!(app.click(ClickTarget::Surface));
        assert_eq!(app.state(), SequenceState::at(1));
        assert_eq!(app.sequencer().pending(Reveal::ContinueHint), None);

        app.advance_time(ms(1000));
        assert!(app.state().secondary_visible);
        assert!(!app.state().continue_hint_visible);

        for _ in 0..n - 1 {
            app.click(ClickTarget::Surface);
        }
        assert_eq!(app.state(), SequenceState::at(0));
        assert_eq!(
            app.sequencer().pending(Reveal::ContinueHint),
            Some(ms(5000)),
            "hint re-arms on return to the greeting"
        );
    }
}

#[test]
fn early_click_cancels_secondary_reveal() {
    let mut app = mount(still_settings(Variant::Extended), 2);
    app.click(ClickTarget::Surface);
    app.advance_time(ms(600));
    app.click(ClickTarget::Surface);
    assert_eq!(app.state(), SequenceState::at(2));

    // The old 1000ms deadline would land here; the new tenure has 600ms to go.
    assert!(app.advance_time(ms(400)).is_empty());
    assert!(!app.state().secondary_visible);
    assert_eq!(app.advance_time(ms(600)), vec![Reveal::Secondary]);
}

#[test]
fn hint_never_fires_after_leaving_the_greeting() {
    let mut app = mount(still_settings(Variant::Classic), 4);
    app.advance_time(ms(4000));
    app.click(ClickTarget::Surface);
    let fired: Vec<Reveal> = (0..20).flat_map(|_| app.advance_time(ms(500))).collect();
    assert_eq!(fired, vec![Reveal::Secondary]);
    assert!(!app.state().continue_hint_visible);
}

#[test]
fn rapid_clicks_wrap_and_leave_one_tenure() {
    let mut app = mount(still_settings(Variant::Extended), 5);
    let n = app.panel_count();
    for i in 1..=3 * n + 2 {
        app.click(ClickTarget::Surface);
        assert_eq!(app.state(), SequenceState::at(i % n));
    }
    // Exactly the current panel's reveal is live.
    assert_eq!(app.state().panel_index, 2);
    assert_eq!(app.advance_time(ms(10_000)), vec![Reveal::Secondary]);
}

#[test]
fn content_is_picked_once_per_mount() {
    let mut app = mount(still_settings(Variant::Extended), 21);
    let picked = app.selection().clone();
    for _ in 0..50 {
        app.click(ClickTarget::Link("https://blog.mitufun.top/".into()));
        app.advance_time(ms(333));
    }
    assert_eq!(app.selection(), &picked);
    for category in ContentCategory::ALL {
        assert!(!picked.get(category).is_empty());
    }
}

#[test]
fn teardown_is_final_and_idempotent() {
    let table = Variant::Classic.table().unwrap();
    let mut sequencer = PanelSequencer::mount(table);
    sequencer.teardown();
    sequencer.teardown();
    assert!(!sequencer.is_mounted());
    sequencer.advance();
    assert!(sequencer.tick(ms(60_000)).is_empty());
    assert_eq!(sequencer.state(), SequenceState::at(0));
}
