//! Frames drawn through a virtual terminal.

use lantern_engine::{ContentCategory, LinkClickPolicy, Variant};

use crate::common::{HEIGHT, Screen, mount, still_settings};

fn screen(variant: Variant, policy: LinkClickPolicy) -> Screen {
    let mut settings = still_settings(variant);
    settings.link_clicks = policy;
    Screen::new(mount(settings, 17))
}

fn advance_to(screen: &mut Screen, index: usize) {
    while screen.app.state().panel_index != index {
        screen.app.click(lantern_engine::ClickTarget::Surface);
    }
}

#[test]
fn greeting_then_continue_hint() {
    let mut screen = screen(Variant::Extended, LinkClickPolicy::Advance);
    let greeting = screen
        .app
        .selection()
        .get(ContentCategory::Greeting)
        .to_string();
    let hint = screen.app.continue_hint().to_string();

    let text = screen.text();
    assert!(text.contains(&greeting), "{text}");
    assert!(!text.contains(&hint));

    let text = screen.wait(4999);
    assert!(!text.contains(&hint));
    let text = screen.wait(1);
    assert!(text.contains(&hint), "{text}");
}

#[test]
fn credit_in_bottom_row() {
    let mut screen = screen(Variant::Classic, LinkClickPolicy::Advance);
    let row = screen.render().row(HEIGHT - 1);
    assert!(row.ends_with("Developed by MituFun"), "{row:?}");
}

#[test]
fn introduction_line_appears_after_a_second() {
    let mut screen = screen(Variant::Classic, LinkClickPolicy::Advance);
    screen.click_background();

    let text = screen.text();
    assert!(text.contains("见字如面"), "{text}");
    assert!(!text.contains("你好，我是 MituFun。"));

    let text = screen.wait(999);
    assert!(!text.contains("你好，我是 MituFun。"));
    let text = screen.wait(1);
    assert!(text.contains("你好，我是 MituFun。"), "{text}");
}

#[test]
fn study_links_render_only_when_revealed() {
    let mut screen = screen(Variant::Extended, LinkClickPolicy::Advance);
    advance_to(&mut screen, 2);

    let text = screen.text();
    assert!(!text.contains("https://github.com/MituFun"));
    assert!(screen.app.link_regions().is_empty());

    let text = screen.wait(1000);
    let study = screen.app.selection().get(ContentCategory::Study).to_string();
    assert!(text.contains(&study), "{text}");
    assert!(text.contains("My Blog"));
    assert!(text.contains("https://github.com/MituFun"));
    assert_eq!(screen.app.link_regions().len(), 2);
}

#[test]
fn suppressed_link_click_keeps_the_panel() {
    let mut screen = screen(Variant::Extended, LinkClickPolicy::Suppress);
    advance_to(&mut screen, 3);
    screen.wait(1000);

    assert!(!screen.click_on("https://yuxincraft.mitufun.top/"));
    assert_eq!(screen.app.state().panel_index, 3);
    assert!(screen.app.state().secondary_visible);

    assert!(screen.click_background());
    assert_eq!(screen.app.state().panel_index, 4);
}

#[test]
fn link_click_advances_by_default() {
    let mut screen = screen(Variant::Extended, LinkClickPolicy::Advance);
    advance_to(&mut screen, 4);
    screen.wait(1000);

    assert!(screen.click_on("https://recite.mitufun.top/"));
    assert_eq!(screen.app.state().panel_index, 5);
    assert!(!screen.app.state().secondary_visible);
}

#[test]
fn farewell_carries_footnote_and_wraps() {
    let mut screen = screen(Variant::Classic, LinkClickPolicy::Advance);
    advance_to(&mut screen, 4);
    let farewell = screen
        .app
        .selection()
        .get(ContentCategory::Farewell)
        .to_string();

    let text = screen.text();
    assert!(text.contains(&farewell), "{text}");
    assert!(text.contains("这是最后一页了"));

    screen.click_background();
    let greeting = screen
        .app
        .selection()
        .get(ContentCategory::Greeting)
        .to_string();
    assert!(screen.text().contains(&greeting));
}

#[test]
fn ascii_mode_uses_plain_icons() {
    let mut settings = still_settings(Variant::Classic);
    settings.ui.ascii_only = true;
    let mut screen = Screen::new(mount(settings, 3));
    advance_to(&mut screen, 2);

    let text = screen.wait(1000);
    assert!(text.contains("@ My Blog"), "{text}");
    assert!(text.contains("# My GitHub"));
}
