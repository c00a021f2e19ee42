//! Trending-keyword cloud with weight-driven emphasis.

use super::{draw_frame, Rect};
use crate::snapshot::Keyword;
use crate::terminal::Terminal;
use crate::theme::{font_emphasis, keyword_color, keyword_font_size, Theme};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
pub struct Placed {
    pub index: usize,
    pub x: i32,
    pub y: i32,
}

pub type Layout = Vec<Placed>;

/// Scatter the strongest keywords over the panel. Heavier words come
/// first and land in the left half, the tail fills the right half; the
/// seeded jitter keeps the layout stable frame to frame.
pub fn layout(keywords: &[Keyword], inner: Rect, seed: u64) -> Layout {
    let mut placed = Vec::new();
    if inner.w < 12 || inner.h < 1 {
        return placed;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order: Vec<usize> = (0..keywords.len()).collect();
    order.sort_by(|&a, &b| {
        keywords[b]
            .weight
            .partial_cmp(&keywords[a].weight)
            .unwrap_or(Ordering::Equal)
    });

    let rows = inner.h;
    let half = inner.w / 2;
    for (slot, &index) in order.iter().take(rows as usize * 2).enumerate() {
        let word_len = keywords[index].text.chars().count() as i32;
        let (base, span) = if (slot as i32) < rows {
            (0, half - word_len)
        } else {
            (half, inner.w - half - word_len)
        };
        if span < 1 {
            continue;
        }
        placed.push(Placed {
            index,
            x: inner.x + base + rng.gen_range(0..span),
            y: inner.y + (slot as i32 % rows),
        });
    }
    placed
}

pub fn draw(term: &mut Terminal, rect: Rect, layout: &Layout, keywords: &[Keyword], theme: &Theme) {
    draw_frame(term, rect, "TRENDING KEYWORDS", theme);

    for placed in layout {
        let Some(keyword) = keywords.get(placed.index) else {
            continue;
        };
        let size = keyword_font_size(keyword.weight);
        let (bold, dim) = font_emphasis(size);
        let color = keyword_color(keyword.weight, theme);
        if dim {
            term.set_str_dim(placed.x, placed.y, &keyword.text, Some(color));
        } else {
            term.set_str(placed.x, placed.y, &keyword.text, Some(color), bold);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<Keyword> {
        ["Kashmir", "Ceasefire", "Border", "Talks", "Drone", "Peace"]
            .iter()
            .enumerate()
            .map(|(i, text)| Keyword {
                text: (*text).to_string(),
                weight: 90.0 - i as f64 * 15.0,
                frequency: 5,
            })
            .collect()
    }

    #[test]
    fn layout_stays_inside_the_rect() {
        let inner = Rect { x: 3, y: 2, w: 30, h: 3 };
        let placed = layout(&keywords(), inner, 42);
        assert!(!placed.is_empty());
        for p in &placed {
            let len = keywords()[p.index].text.chars().count() as i32;
            assert!(p.x >= inner.x);
            assert!(p.x + len <= inner.x + inner.w);
            assert!(p.y >= inner.y && p.y < inner.y + inner.h);
        }
    }

    #[test]
    fn layout_is_deterministic_for_a_seed() {
        let inner = Rect { x: 0, y: 0, w: 40, h: 4 };
        let kws = keywords();
        let a = layout(&kws, inner, 7);
        let b = layout(&kws, inner, 7);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!((pa.index, pa.x, pa.y), (pb.index, pb.x, pb.y));
        }
    }

    #[test]
    fn heaviest_words_are_placed_first() {
        let inner = Rect { x: 0, y: 0, w: 40, h: 1 };
        let kws = keywords();
        let placed = layout(&kws, inner, 1);
        // one row, two halves: at most two words, starting with the heaviest
        assert!(placed.len() <= 2);
        assert_eq!(kws[placed[0].index].text, "Kashmir");
    }

    #[test]
    fn degenerate_rect_places_nothing() {
        assert!(layout(&keywords(), Rect { x: 0, y: 0, w: 4, h: 0 }, 1).is_empty());
    }
}
