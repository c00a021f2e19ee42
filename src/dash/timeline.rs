//! Article timeline panel.

use super::{draw_frame, Rect};
use crate::snapshot::{relative_age, Article};
use crate::terminal::Terminal;
use crate::theme::Theme;

/// The timeline shows the first four articles of the snapshot.
pub const VISIBLE_ARTICLES: usize = 4;

pub fn visible(articles: &[Article]) -> &[Article] {
    &articles[..articles.len().min(VISIBLE_ARTICLES)]
}

pub fn draw(term: &mut Terminal, rect: Rect, articles: &[Article], theme: &Theme) {
    draw_frame(term, rect, "ARTICLE TIMELINE", theme);
    let inner = rect.inner();
    if inner.w < 12 || inner.h < 1 {
        return;
    }

    if articles.is_empty() {
        term.set_str_dim(inner.x + 1, inner.y, "no articles", Some(theme.muted()));
        return;
    }

    // two rows per entry when there is room, title-only otherwise
    let two_rows = inner.h as usize >= visible(articles).len() * 2;
    let mut y = inner.y;
    for article in visible(articles) {
        if y >= inner.y + inner.h {
            break;
        }
        let age = article
            .publish_date
            .as_deref()
            .map(relative_age)
            .unwrap_or_default();
        let bullet = if article.image.is_some() { '▣' } else { '•' };
        term.set(inner.x + 1, y, bullet, Some(theme.accent()), true);
        let mut x = inner.x + 3;
        if !age.is_empty() {
            term.set_str_dim(x, y, &age, Some(theme.muted()));
            x += age.chars().count() as i32 + 2;
        }
        let title_w = (inner.x + inner.w - x - 1).max(1) as usize;
        let title: String = article.title.chars().take(title_w).collect();
        term.set_str(x, y, &title, Some(theme.text()), true);
        y += 1;

        if two_rows && y < inner.y + inner.h {
            let preview_w = (inner.w - 4).max(1) as usize;
            let preview: String = article.preview().chars().take(preview_w).collect();
            term.set_str_dim(inner.x + 3, y, &preview, Some(theme.muted()));
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            text: String::new(),
            url: String::new(),
            image: None,
            publish_date: None,
        }
    }

    #[test]
    fn shows_at_most_four_articles() {
        let articles: Vec<Article> =
            (1..=5).map(|i| article(&format!("a{}", i))).collect();
        let shown = visible(&articles);
        assert_eq!(shown.len(), 4);
        assert_eq!(shown[0].title, "a1");
        assert_eq!(shown[3].title, "a4");
    }

    #[test]
    fn short_lists_show_everything() {
        let articles = vec![article("only")];
        assert_eq!(visible(&articles).len(), 1);
        assert!(visible(&[]).is_empty());
    }
}
