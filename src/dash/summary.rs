//! Summary panel: typewriter reveal with a blinking caret.

use super::{draw_frame, wrap, Rect};
use crate::terminal::Terminal;
use crate::theme::Theme;
use crate::typewriter::Typewriter;

pub fn draw(
    term: &mut Terminal,
    rect: Rect,
    typewriter: &Typewriter,
    caret_on: bool,
    theme: &Theme,
) {
    draw_frame(term, rect, "LATEST SUMMARY", theme);
    let inner = rect.inner();
    if inner.w < 4 || inner.h < 1 {
        return;
    }

    let text_w = (inner.w - 2) as usize;
    let lines = wrap(typewriter.visible(), text_w);
    let mut caret_pos = (inner.x + 1, inner.y);
    for (i, line) in lines.iter().enumerate() {
        if i as i32 >= inner.h {
            return; // text overflows the panel, skip the caret too
        }
        term.set_str(inner.x + 1, inner.y + i as i32, line, Some(theme.text()), false);
        caret_pos = (inner.x + 1 + line.chars().count() as i32, inner.y + i as i32);
    }

    // caret blinks while the reveal is running, then disappears
    if !typewriter.is_complete() && caret_on {
        term.set(caret_pos.0, caret_pos.1, '▌', Some(theme.accent()), false);
    }
}
