//! Panel entry effects as rectangle transforms.

use ratatui::layout::Rect;

use lantern_engine::{PanelEffect, PanelEffectKind};

/// Apply a panel effect to transform the base rectangle.
///
/// The result always stays inside `viewport`.
#[must_use]
pub fn apply_panel_effect(effect: &PanelEffect, base: Rect, viewport: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    let rect = match effect.kind() {
        PanelEffectKind::ScaleIn => scale_rect(base, 0.8 + 0.2 * t),
        PanelEffectKind::RiseIn => {
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.min(base.height.saturating_div(2)).min(4);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                y: base.y.saturating_add(y_offset),
                ..base
            }
        }
        PanelEffectKind::SlideInLeft => slide(base, viewport, -1.0, t),
        PanelEffectKind::SlideInRight => slide(base, viewport, 1.0, t),
        PanelEffectKind::SpinIn => {
            let raw = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - raw;
            let oscillations = 2.0;
            let amplitude = 3.0;
            let offset = (f32::sin(raw * std::f32::consts::TAU * oscillations) * amplitude * decay)
                .round() as i32;
            let scaled = scale_rect(base, 0.8 + 0.2 * t);
            shift_x(scaled, viewport, offset)
        }
    };
    clamp_to(rect, viewport)
}

/// Whether content under this effect should still be drawn dimmed (the fade-in half).
#[must_use]
pub fn is_fading(effect: Option<&PanelEffect>) -> bool {
    effect.is_some_and(|effect| effect.progress() < 0.5)
}

fn slide(base: Rect, viewport: Rect, direction: f32, t: f32) -> Rect {
    let distance = f32::from(base.width.min(8));
    let offset = ((1.0 - t) * distance * direction).round() as i32;
    shift_x(base, viewport, offset)
}

fn shift_x(base: Rect, viewport: Rect, offset: i32) -> Rect {
    let viewport_left = i32::from(viewport.x);
    let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
    let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
    let x = (i32::from(base.x) + offset).clamp(viewport_left, max_x) as u16;
    Rect { x, ..base }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn clamp_to(rect: Rect, viewport: Rect) -> Rect {
    rect.intersection(viewport)
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
