//! Media carousel panel: slide cards positioned by the offset transform.

use super::{draw_frame, Rect};
use crate::carousel::{transform, Carousel};
use crate::terminal::Terminal;
use crate::theme::Theme;

pub fn draw(term: &mut Terminal, rect: Rect, images: &[String], carousel: &Carousel, theme: &Theme) {
    draw_frame(term, rect, "MEDIA CAROUSEL", theme);
    let inner = rect.inner();
    if inner.w < 14 || inner.h < 5 {
        return;
    }

    if carousel.is_empty() {
        let msg = "no media in this snapshot";
        term.set_str_dim(
            inner.x + (inner.w - msg.len() as i32) / 2,
            inner.y + inner.h / 2,
            msg,
            Some(theme.muted()),
        );
        return;
    }

    let card_w = (inner.w / 3).clamp(12, 30);
    let card_h = (inner.h - 2).max(3);
    let cx = inner.x + inner.w / 2;
    // neighbor spacing in cells, scaled from the 240-unit canvas step
    let cells_per_unit = f64::from(card_w + 2) / 240.0;

    // farthest slides first, so nearer cards paint over them
    let mut order: Vec<usize> = (0..carousel.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(transform(carousel.offset_of(i)).depth));

    for &slide in &order {
        let t = transform(carousel.offset_of(slide));
        if !t.visible() {
            continue;
        }
        let w = (f64::from(card_w) * t.scale) as i32;
        let h = if t.is_active() {
            card_h
        } else {
            (f64::from(card_h) * t.scale).max(3.0) as i32
        };
        let center = cx + (t.translate_x * cells_per_unit) as i32;
        let card = Rect {
            x: center - w / 2,
            y: inner.y + (card_h - h) / 2,
            w,
            h,
        };
        draw_card(term, card, slide, &images[slide], t.is_active(), t.opacity, theme);
    }

    if carousel.has_controls() {
        term.set(inner.x, inner.y + card_h / 2, '◀', Some(theme.accent()), true);
        term.set(
            inner.x + inner.w - 1,
            inner.y + card_h / 2,
            '▶',
            Some(theme.accent()),
            true,
        );
        draw_dots(term, inner, carousel, theme);
    }
}

fn draw_card(
    term: &mut Terminal,
    card: Rect,
    index: usize,
    url: &str,
    active: bool,
    opacity: f64,
    theme: &Theme,
) {
    let dimmed = opacity < 0.7;
    let frame = if active { theme.accent() } else { theme.frame() };

    for y in card.y..card.y + card.h {
        for x in card.x..card.x + card.w {
            let edge_x = x == card.x || x == card.x + card.w - 1;
            let edge_y = y == card.y || y == card.y + card.h - 1;
            let ch = match (edge_x, edge_y) {
                (true, true) => '+',
                (true, false) => '│',
                (false, true) => '─',
                (false, false) => ' ',
            };
            if ch != ' ' {
                if dimmed {
                    term.set_dim(x, y, ch, Some(frame));
                } else {
                    term.set(x, y, ch, Some(frame), active);
                }
            }
        }
    }

    let text_w = (card.w - 4).max(1) as usize;
    let (host, file) = url_parts(url);
    let title = format!("IMAGE {}", index + 1);
    let file_line = clip(file, text_w);
    let host_line = clip(host, text_w);
    let lines = [title.as_str(), file_line.as_str(), host_line.as_str()];
    for (i, line) in lines.iter().enumerate() {
        let y = card.y + 1 + i as i32;
        if y >= card.y + card.h - 1 {
            break;
        }
        let x = card.x + 2;
        if i == 0 && !dimmed {
            term.set_str(x, y, line, Some(theme.heading()), active);
        } else {
            term.set_str_dim(x, y, line, Some(theme.muted()));
        }
    }
}

fn draw_dots(term: &mut Terminal, inner: Rect, carousel: &Carousel, theme: &Theme) {
    let n = carousel.len() as i32;
    let start = inner.x + (inner.w - n * 2) / 2;
    let y = inner.y + inner.h - 1;
    for i in 0..n {
        let (ch, color, bold) = if i as usize == carousel.active() {
            ('●', theme.accent(), true)
        } else {
            ('○', theme.muted(), false)
        };
        term.set(start + i * 2, y, ch, Some(color), bold);
    }
}

/// Split a URL into (host, last path segment) for the card face.
pub fn url_parts(url: &str) -> (&str, &str) {
    let rest = url.split_once("//").map_or(url, |(_, r)| r);
    let host = rest.split('/').next().unwrap_or(rest);
    let file = rest.rsplit('/').next().unwrap_or("");
    let file = if file == host { "" } else { file };
    (host, file)
}

fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::url_parts;

    #[test]
    fn splits_host_and_file() {
        let (host, file) = url_parts("https://cdn.example.com/img/a1.jpg");
        assert_eq!(host, "cdn.example.com");
        assert_eq!(file, "a1.jpg");
    }

    #[test]
    fn bare_host_has_no_file() {
        let (host, file) = url_parts("https://example.com");
        assert_eq!(host, "example.com");
        assert_eq!(file, "");
    }

    #[test]
    fn schemeless_urls_still_split() {
        let (host, file) = url_parts("example.com/x.png");
        assert_eq!(host, "example.com");
        assert_eq!(file, "x.png");
    }
}
