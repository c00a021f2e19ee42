//! Hotspot map panel: the fixed 800×400 canvas scaled to the cell rect.

use super::{draw_frame, Rect};
use crate::geo;
use crate::snapshot::Hotspot;
use crate::terminal::Terminal;
use crate::theme::{hex_color, Theme};

pub fn draw(term: &mut Terminal, rect: Rect, hotspots: &[Hotspot], theme: &Theme) {
    draw_frame(term, rect, "HOTSPOT MAP", theme);
    let inner = rect.inner();
    if inner.w < 20 || inner.h < 4 {
        return;
    }
    // bottom row is reserved for the legend
    let plot_h = inner.h - 1;

    if hotspots.is_empty() {
        let msg = "no hotspots reported";
        term.set_str_dim(
            inner.x + (inner.w - msg.len() as i32) / 2,
            inner.y + plot_h / 2,
            msg,
            Some(theme.muted()),
        );
    }

    for hotspot in hotspots {
        let (x, y) = geo::project(hotspot.lat, hotspot.lng);
        if !geo::on_canvas(x, y) {
            // off-frame by construction, culled rather than clamped
            continue;
        }
        let cx = inner.x + (x / geo::CANVAS_W * f64::from(inner.w - 1)) as i32;
        let cy = inner.y + (y / geo::CANVAS_H * f64::from(plot_h - 1).max(1.0)) as i32;

        let marker = geo::classify(&hotspot.intensity);
        let color = hex_color(marker.color);
        term.set(cx, cy, marker_glyph(marker.size), Some(color), marker.size >= 20);

        let label = format!(" {} ({})", hotspot.name, hotspot.incidents);
        if cx + 1 + (label.chars().count() as i32) < inner.x + inner.w {
            term.set_str_dim(cx + 1, cy, &label, Some(theme.muted()));
        }
    }

    draw_legend(term, inner, theme);
}

/// Marker footprint for the classified size, largest first.
pub fn marker_glyph(size: u16) -> char {
    match size {
        20.. => '◉',
        16.. => '●',
        12.. => '•',
        _ => '·',
    }
}

fn draw_legend(term: &mut Terminal, inner: Rect, theme: &Theme) {
    let y = inner.y + inner.h - 1;
    let mut x = inner.x + 1;
    for intensity in ["high", "medium", "low"] {
        let marker = geo::classify(intensity);
        term.set(x, y, marker_glyph(marker.size), Some(hex_color(marker.color)), false);
        term.set_str_dim(x + 2, y, intensity, Some(theme.muted()));
        x += intensity.len() as i32 + 5;
    }
}

#[cfg(test)]
mod tests {
    use super::marker_glyph;

    #[test]
    fn glyph_tracks_marker_size() {
        assert_eq!(marker_glyph(20), '◉');
        assert_eq!(marker_glyph(16), '●');
        assert_eq!(marker_glyph(12), '•');
        assert_eq!(marker_glyph(10), '·');
    }
}
