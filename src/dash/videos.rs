//! Video reports panel.

use super::{draw_frame, Rect};
use crate::snapshot::{relative_age, Video};
use crate::terminal::Terminal;
use crate::theme::Theme;

pub fn draw(term: &mut Terminal, rect: Rect, videos: &[Video], theme: &Theme) {
    draw_frame(term, rect, "VIDEO REPORTS", theme);
    let inner = rect.inner();
    if inner.w < 12 || inner.h < 1 {
        return;
    }

    if videos.is_empty() {
        term.set_str_dim(inner.x + 1, inner.y, "no videos", Some(theme.muted()));
        return;
    }

    let mut y = inner.y;
    for video in videos {
        if y >= inner.y + inner.h {
            break;
        }
        term.set(inner.x + 1, y, '▶', Some(theme.accent()), false);
        let title_w = (inner.w - 4).max(1) as usize;
        let title: String = video.title.chars().take(title_w).collect();
        term.set_str(inner.x + 3, y, &title, Some(theme.text()), false);
        y += 1;

        if y < inner.y + inner.h {
            let age = video
                .publish_date
                .as_deref()
                .map(relative_age)
                .unwrap_or_default();
            let detail = if age.is_empty() {
                video.channel.clone()
            } else if video.channel.is_empty() {
                age
            } else {
                format!("{} · {}", video.channel, age)
            };
            let detail: String = detail.chars().take(title_w).collect();
            term.set_str_dim(inner.x + 3, y, &detail, Some(theme.muted()));
            y += 1;
        }
    }
}
