//! Built-in panel tables.

use std::time::Duration;

use lantern_types::{
    ContentCategory, Link, LinkIcon, PanelSpec, PanelTable, PanelTableError, SecondaryBlock,
    TextSource, ui::PanelEffectKind,
};

pub const DEFAULT_SECONDARY_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_CONTINUE_HINT_DELAY: Duration = Duration::from_millis(5000);

/// Which built-in panel table to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Greeting, introduction, study links, game server, farewell.
    Classic,
    /// [`Variant::Classic`] plus a tools panel before the farewell.
    #[default]
    Extended,
}

impl Variant {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "classic" | "short" => Some(Variant::Classic),
            "extended" | "full" => Some(Variant::Extended),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Extended => "extended",
        }
    }

    pub fn table(self) -> Result<PanelTable, PanelTableError> {
        let mut panels = vec![
            greeting_panel(),
            introduction_panel(),
            study_panel(),
            server_panel(),
        ];
        if self == Variant::Extended {
            panels.push(tools_panel());
        }
        panels.push(farewell_panel());
        PanelTable::new(panels)
    }
}

fn greeting_panel() -> PanelSpec {
    PanelSpec::new(Some(TextSource::Pick(ContentCategory::Greeting)))
        .with_continue_hint(DEFAULT_CONTINUE_HINT_DELAY)
        .with_entry(PanelEffectKind::RiseIn)
}

fn introduction_panel() -> PanelSpec {
    PanelSpec::new(Some(TextSource::fixed("「见字如面，吾念君安。」")))
        .with_secondary(
            DEFAULT_SECONDARY_DELAY,
            SecondaryBlock::line("你好，我是 MituFun。"),
        )
        .with_entry(PanelEffectKind::SlideInLeft)
}

fn study_panel() -> PanelSpec {
    PanelSpec::new(None).with_secondary(
        DEFAULT_SECONDARY_DELAY,
        SecondaryBlock {
            heading: Some(TextSource::Pick(ContentCategory::Study)),
            caption: Some("一些学习成果".to_string()),
            links: vec![
                Link::new(LinkIcon::Globe, "My Blog", "https://blog.mitufun.top/"),
                Link::new(LinkIcon::Github, "My GitHub", "https://github.com/MituFun"),
            ],
        },
    )
}

fn server_panel() -> PanelSpec {
    PanelSpec::new(Some(TextSource::fixed("「逍遥于天地之间，而心意自得。」")))
        .with_secondary(
            DEFAULT_SECONDARY_DELAY,
            SecondaryBlock {
                links: vec![Link::new(
                    LinkIcon::Boxes,
                    "我的 Minecraft Server",
                    "https://yuxincraft.mitufun.top/",
                )],
                ..SecondaryBlock::default()
            },
        )
        .with_entry(PanelEffectKind::SpinIn)
}

fn tools_panel() -> PanelSpec {
    PanelSpec::new(None).with_secondary(
        DEFAULT_SECONDARY_DELAY,
        SecondaryBlock {
            heading: Some(TextSource::Pick(ContentCategory::Tool)),
            caption: Some("一些工具".to_string()),
            links: vec![Link::new(
                LinkIcon::Book,
                "背诵工具",
                "https://recite.mitufun.top/",
            )],
        },
    )
}

fn farewell_panel() -> PanelSpec {
    PanelSpec::new(Some(TextSource::Pick(ContentCategory::Farewell)))
        .with_footnote("这是最后一页了")
        .with_entry(PanelEffectKind::SpinIn)
}
