//! TUI rendering for Lantern using ratatui.

mod effects;
mod input;
mod snow;
mod theme;

pub use effects::{apply_panel_effect, is_fading};
pub use input::{InputPump, apply_event, handle_events};
pub use snow::Snowfall;
pub use theme::{Glyphs, Palette, bounce_offset, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use lantern_engine::{App, Link, LinkHitRegion, PanelSpec, SecondaryBlock};

/// Rows between the bottom of the panel and the continue hint.
const HINT_GAP: u16 = 2;

/// One centered row of panel content, optionally clickable.
struct Row {
    line: Line<'static>,
    url: Option<String>,
}

impl Row {
    fn text(text: impl Into<String>, style: Style) -> Self {
        Self {
            line: Line::from(Span::styled(text.into(), style)),
            url: None,
        }
    }

    fn blank() -> Self {
        Self {
            line: Line::default(),
            url: None,
        }
    }

    fn width(&self) -> u16 {
        u16::try_from(self.line.width()).unwrap_or(u16::MAX)
    }
}

/// Main draw function.
///
/// Records the link hit regions of this frame back into `app` so the next
/// click can be resolved against what was actually on screen.
pub fn draw(frame: &mut Frame, app: &mut App, snow: &mut Snowfall) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    if options.snow_enabled() {
        snow.update(area, app.last_delta());
        snow.render(frame.buffer_mut(), &palette, &glyphs);
    }

    // Bottom row belongs to the footer credit.
    let stage = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };

    let rows = panel_rows(app, &palette, &glyphs);
    let base = centered(stage, &rows);
    let rect = match app.entry_effect() {
        Some(effect) => apply_panel_effect(effect, base, stage),
        None => base,
    };

    let mut regions = Vec::new();
    for (offset, row) in rows.into_iter().enumerate() {
        let Ok(offset) = u16::try_from(offset) else {
            break;
        };
        if offset >= rect.height {
            break;
        }
        let row_rect = Rect {
            y: rect.y + offset,
            height: 1,
            ..rect
        };
        let width = row.width().min(row_rect.width);
        if let Some(url) = row.url {
            regions.push(LinkHitRegion {
                // Same offset Paragraph uses for centered lines.
                x: row_rect.x + (row_rect.width / 2).saturating_sub(width / 2),
                y: row_rect.y,
                width,
                url,
            });
        }
        frame.render_widget(
            Paragraph::new(row.line).alignment(Alignment::Center),
            row_rect,
        );
    }
    app.set_link_regions(regions);

    if app.current_panel().is_first_panel() && app.state().continue_hint_visible {
        draw_continue_hint(frame, app, rect, stage, &palette, &glyphs);
    }
    draw_credit(frame, app, area, &palette);
}

fn panel_rows(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Row> {
    let panel: &PanelSpec = app.current_panel();
    let selection = app.selection();
    let mut rows = Vec::new();

    if let Some(heading) = panel.heading() {
        rows.push(Row::text(
            heading.resolve(selection),
            styles::heading(palette),
        ));
    }

    if !panel.links().is_empty() {
        if !rows.is_empty() {
            rows.push(Row::blank());
        }
        rows.extend(
            panel
                .links()
                .iter()
                .map(|link| link_row(link, palette, glyphs, false)),
        );
    }

    if app.state().secondary_visible
        && let Some(block) = panel.secondary_block()
    {
        let dim = is_fading(app.reveal_effect());
        if !rows.is_empty() {
            rows.push(Row::blank());
        }
        push_secondary(&mut rows, block, app, palette, glyphs, dim);
    }

    if let Some(footnote) = panel.footnote() {
        rows.push(Row::blank());
        rows.push(Row::text(
            footnote,
            styles::muted(palette).add_modifier(Modifier::ITALIC),
        ));
    }
    rows
}

fn push_secondary(
    rows: &mut Vec<Row>,
    block: &SecondaryBlock,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    dim: bool,
) {
    if let Some(heading) = &block.heading {
        rows.push(Row::text(
            heading.resolve(app.selection()),
            faded(dim, styles::heading(palette)),
        ));
    }
    if let Some(caption) = &block.caption {
        rows.push(Row::text(caption.clone(), faded(dim, styles::secondary_line(palette))));
    }
    if !block.links.is_empty() && (block.heading.is_some() || block.caption.is_some()) {
        rows.push(Row::blank());
    }
    rows.extend(
        block
            .links
            .iter()
            .map(|link| link_row(link, palette, glyphs, dim)),
    );
}

/// Revealed content is drawn dimmed for the first half of its rise effect.
fn faded(dim: bool, style: Style) -> Style {
    if dim {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn link_row(link: &Link, palette: &Palette, glyphs: &Glyphs, dim: bool) -> Row {
    let color = palette.link_color(link.icon);
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", glyphs.link_icon(link.icon)),
            faded(dim, Style::default().fg(color)),
        ),
        Span::styled(link.label.clone(), faded(dim, styles::link(palette, color))),
        Span::styled(format!("  {}", link.url), faded(dim, styles::muted(palette))),
    ]);
    Row {
        line,
        url: Some(link.url.clone()),
    }
}

/// Center a block sized to fit `rows` inside `stage`.
fn centered(stage: Rect, rows: &[Row]) -> Rect {
    let content_width = rows.iter().map(Row::width).max().unwrap_or(0);
    let width = content_width.saturating_add(4).min(stage.width);
    let height = u16::try_from(rows.len())
        .unwrap_or(u16::MAX)
        .max(1)
        .min(stage.height);
    Rect {
        x: stage.x + (stage.width - width) / 2,
        y: stage.y + (stage.height - height) / 2,
        width,
        height,
    }
}

fn draw_continue_hint(
    frame: &mut Frame,
    app: &App,
    panel: Rect,
    stage: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let bounce = bounce_offset(app.tick_count(), app.ui_options());
    let y = panel.bottom().saturating_add(HINT_GAP).saturating_add(bounce);
    if y >= stage.bottom() {
        return;
    }
    let text = format!("{} {}", glyphs.continue_arrow, app.continue_hint());
    let hint = Paragraph::new(Line::from(Span::styled(text, styles::muted(palette))))
        .alignment(Alignment::Center);
    frame.render_widget(
        hint,
        Rect {
            y,
            height: 1,
            ..stage
        },
    );
}

fn draw_credit(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let credit = app.credit();
    if credit.is_empty() || area.height == 0 {
        return;
    }
    let width = u16::try_from(credit.width() + 1)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let footer = Rect {
        x: area.right() - width,
        y: area.bottom() - 1,
        width,
        height: 1,
    };
    let line = Line::from(vec![
        Span::styled(credit.to_string(), styles::muted(palette)),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), footer);
}
