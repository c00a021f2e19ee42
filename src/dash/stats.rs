//! Statistics panel: extracted counters and categorical levels.

use super::{draw_frame, Rect};
use crate::snapshot::Statistics;
use crate::terminal::Terminal;
use crate::theme::Theme;

pub fn draw(term: &mut Terminal, rect: Rect, stats: &Statistics, theme: &Theme) {
    draw_frame(term, rect, "CONFLICT STATISTICS", theme);
    let inner = rect.inner();
    if inner.w < 24 || inner.h < 2 {
        return;
    }

    let counters = [
        ("Deaths", stats.deaths),
        ("Injuries", stats.injuries),
        ("Military incidents", stats.military_incidents),
        ("Diplomatic meetings", stats.diplomatic_meetings),
        ("Border violations", stats.border_violations),
        ("Key developments", stats.key_developments),
    ];

    // two counter columns, then the derived lines underneath
    let col_w = inner.w / 2;
    let rows = counters.len() as i32 / 2;
    for (i, (label, value)) in counters.iter().enumerate() {
        let x = inner.x + 1 + (i as i32 / rows) * col_w;
        let y = inner.y + (i as i32 % rows);
        if y >= inner.y + inner.h {
            break;
        }
        term.set_str_dim(x, y, label, Some(theme.muted()));
        let value_text = value.to_string();
        term.set_str(
            x + col_w - value_text.len() as i32 - 3,
            y,
            &value_text,
            Some(theme.text()),
            true,
        );
    }

    let intensity = stats.conflict_intensity.label();
    let activity = stats.diplomatic_activity_level.label();
    let average = format!("{:.1}", stats.avg_casualties_per_incident);
    let derived = [
        ("Conflict intensity:", intensity, theme.level(intensity), true),
        ("Diplomatic activity:", activity, theme.level(activity), true),
        ("Avg casualties/incident:", average.as_str(), theme.text(), true),
        ("Period:", stats.recent_period.as_str(), theme.muted(), false),
    ];

    let x = inner.x + 1;
    let mut y = inner.y + rows;
    for (label, value, color, bold) in derived {
        if y >= inner.y + inner.h || value.is_empty() {
            continue;
        }
        term.set_str_dim(x, y, label, Some(theme.muted()));
        term.set_str(x + label.chars().count() as i32 + 1, y, value, Some(color), bold);
        y += 1;
    }
}
