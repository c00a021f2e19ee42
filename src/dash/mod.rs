//! Interactive dashboard: event loop, layout, loading and error screens.
//!
//! Each panel is its own module with a `draw()` into the shared cell
//! buffer; this module owns the frame loop, key handling and the screen
//! split.

pub mod cloud;
pub mod map;
pub mod slides;
pub mod stats;
pub mod summary;
pub mod timeline;
pub mod videos;

use crate::app::{App, DisplayState};
use crate::fetch::SnapshotClient;
use crate::progress::ProgressSimulator;
use crate::terminal::Terminal;
use crate::theme::Theme;
use crate::timer::Ticker;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use crossterm::terminal::size;
use std::io;
use std::time::{Duration, Instant};

pub struct DashConfig {
    pub base_url: String,
    pub dark: bool,
    pub time_step: f32,
    pub seed: Option<u64>,
}

/// Rectangular cell region a panel draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// The region inside this rect's one-cell frame.
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.x + 1,
            y: self.y + 1,
            w: (self.w - 2).max(0),
            h: (self.h - 2).max(0),
        }
    }
}

const HELP: &str = "\
 NEWSDASH CONTROLS
 ─────────────────────────
 Left/Right, h/l  Change slide
 1-9              Jump to slide
 t                Toggle dark/light
 d                Dismiss notice
 ?                Close help
 q/Esc            Quit";

pub fn run(config: DashConfig) -> io::Result<()> {
    let mut term = Terminal::new(true)?;
    let client = SnapshotClient::new(&config.base_url);
    let mut app = App::new(client, config.dark, Instant::now());
    let seed = config.seed.unwrap_or_else(rand::random);

    let mut caret = Ticker::new(Duration::from_millis(500));
    let mut caret_on = true;
    let mut show_help = false;
    let mut cloud_cache: Option<cloud::Layout> = None;

    loop {
        if let Ok(Some((code, _mods))) = term.check_key() {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('?') => show_help = !show_help,
                KeyCode::Char('t') => app.toggle_theme(),
                KeyCode::Char('d') => app.dismiss_error(),
                KeyCode::Left | KeyCode::Char('h') => app.prev_slide(),
                KeyCode::Right | KeyCode::Char('l') => app.next_slide(),
                KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                    app.go_to_slide(c.to_digit(10).unwrap() as usize - 1);
                }
                _ => {}
            }
        }

        // Handle resize
        if let Ok((new_w, new_h)) = size() {
            let (cur_w, cur_h) = term.size();
            if new_w != cur_w || new_h != cur_h {
                term.resize(new_w, new_h);
                term.clear_screen()?;
                cloud_cache = None;
            }
        }

        let now = Instant::now();
        app.on_tick(now);
        if caret.due(now) {
            caret_on = !caret_on;
        }

        let theme = app.theme;
        term.clear_with(theme.background());
        let (w16, h16) = term.size();
        let (w, h) = (w16 as i32, h16 as i32);

        match &app.state {
            DisplayState::Loading(sim) => draw_loading(&mut term, sim, &theme, w, h),
            DisplayState::Error(message) => draw_error_panel(&mut term, message, &theme, w, h),
            DisplayState::Ready(_) => {}
        }

        if let Some(snapshot) = app.snapshot() {
            draw_header(&mut term, &snapshot.statistics.recent_period, &theme, w);

            let body = Rect { x: 0, y: 1, w, h: h - 1 };
            let (left, right) = split_columns(body);

            let rows_l = split_rows(left, &[4, 4, 3]);
            summary::draw(&mut term, rows_l[0], &app.typewriter, caret_on, &theme);
            timeline::draw(&mut term, rows_l[1], &snapshot.articles, &theme);
            stats::draw(&mut term, rows_l[2], &snapshot.statistics, &theme);

            let rows_r = split_rows(right, &[4, 4, 3]);
            slides::draw(&mut term, rows_r[0], &snapshot.images, &app.carousel, &theme);
            map::draw(&mut term, rows_r[1], &snapshot.geographic_hotspots, &theme);

            let (cloud_rect, video_rect) = split_columns(rows_r[2]);
            let layout = cloud_cache.get_or_insert_with(|| {
                cloud::layout(&snapshot.trending_keywords, cloud_rect.inner(), seed)
            });
            cloud::draw(&mut term, cloud_rect, layout, &snapshot.trending_keywords, &theme);
            videos::draw(&mut term, video_rect, &snapshot.youtube_videos, &theme);
        }

        if let Some(notice) = &app.notice {
            draw_notice(&mut term, &notice.message, &theme, w);
        }
        if show_help {
            draw_help(&mut term, &theme, w, h);
        }

        term.present()?;
        term.sleep(config.time_step);
    }

    app.shutdown();
    Ok(())
}

fn split_columns(rect: Rect) -> (Rect, Rect) {
    let left_w = rect.w * 45 / 100;
    (
        Rect { x: rect.x, y: rect.y, w: left_w, h: rect.h },
        Rect { x: rect.x + left_w, y: rect.y, w: rect.w - left_w, h: rect.h },
    )
}

fn split_rows(rect: Rect, weights: &[i32]) -> Vec<Rect> {
    let total: i32 = weights.iter().sum();
    let mut out = Vec::with_capacity(weights.len());
    let mut y = rect.y;
    for (i, weight) in weights.iter().enumerate() {
        let h = if i + 1 == weights.len() {
            rect.y + rect.h - y
        } else {
            rect.h * weight / total.max(1)
        };
        out.push(Rect { x: rect.x, y, w: rect.w, h });
        y += h;
    }
    out
}

fn draw_header(term: &mut Terminal, period: &str, theme: &Theme, w: i32) {
    term.set_str(1, 0, "NEWS SNAPSHOT", Some(theme.heading()), true);
    let mode = if theme.dark { "dark" } else { "light" };
    let right = if period.is_empty() {
        format!("{} · ? help ", mode)
    } else {
        format!("last {} · {} · ? help ", period, mode)
    };
    term.set_str_dim(w - right.chars().count() as i32 - 1, 0, &right, Some(theme.muted()));
}

fn draw_loading(term: &mut Terminal, sim: &ProgressSimulator, theme: &Theme, w: i32, h: i32) {
    let Some(step) = sim.current() else { return };
    let cx = w / 2;
    let cy = (h / 2 - 2).max(0);

    let title = "ASSEMBLING NEWS SNAPSHOT";
    term.set_str(cx - title.chars().count() as i32 / 2, cy, title, Some(theme.heading()), true);

    let bar_w = 40.min(w - 6).max(10);
    let bar_x = cx - bar_w / 2;
    draw_meter(term, bar_x, cy + 2, bar_w, f32::from(step.progress) / 100.0, theme);
    let pct = format!("{:>3}%", step.progress);
    term.set_str(bar_x + bar_w + 1, cy + 2, &pct, Some(theme.text()), true);

    let label = format!("{}...", step.label);
    term.set_str(cx - label.chars().count() as i32 / 2, cy + 4, &label, Some(theme.text()), false);

    term.set_str_dim(cx - 4, cy + 6, "q to quit", Some(theme.muted()));
}

fn draw_meter(term: &mut Terminal, x: i32, y: i32, width: i32, fraction: f32, theme: &Theme) {
    const METER_CHAR: char = '■';
    let filled = (fraction * width as f32) as i32;
    for i in 0..width {
        let color = if i < filled { theme.accent() } else { theme.frame() };
        term.set(x + i, y, METER_CHAR, Some(color), false);
    }
}

/// Persistent failure panel: replaces every data view for the rest of
/// the session.
fn draw_error_panel(term: &mut Terminal, message: &str, theme: &Theme, w: i32, h: i32) {
    let cx = w / 2;
    let cy = (h / 2 - 2).max(0);

    let title = "✖ SNAPSHOT UNAVAILABLE";
    term.set_str(cx - title.chars().count() as i32 / 2, cy, title, Some(theme.alert()), true);

    let wrap_w = (w - 8).clamp(10, 70) as usize;
    for (i, line) in wrap(message, wrap_w).iter().take(4).enumerate() {
        term.set_str(
            cx - line.chars().count() as i32 / 2,
            cy + 2 + i as i32,
            line,
            Some(theme.text()),
            false,
        );
    }

    term.set_str_dim(cx - 4, cy + 7, "q to quit", Some(theme.muted()));
}

/// Transient banner across the top row; auto-dismisses via the app's
/// notice timer.
fn draw_notice(term: &mut Terminal, message: &str, theme: &Theme, w: i32) {
    for x in 0..w {
        term.set(x, 0, ' ', None, false);
    }
    term.fill_bg(0, 0, w, theme.alert());
    let text = format!(" ⚠ {} — d to dismiss", message);
    let trimmed: String = text.chars().take((w - 1).max(0) as usize).collect();
    term.set_str(0, 0, &trimmed, Some(Color::White), true);
}

fn draw_help(term: &mut Terminal, theme: &Theme, w: i32, h: i32) {
    let lines: Vec<&str> = HELP.lines().collect();
    let box_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32 + 4;
    let box_h = lines.len() as i32 + 2;
    let x = (w - box_w) / 2;
    let y = (h - box_h) / 2;

    draw_frame(term, Rect { x, y, w: box_w, h: box_h }, "HELP", theme);
    for (i, line) in lines.iter().enumerate() {
        let row = y + 1 + i as i32;
        for col in 0..box_w - 2 {
            term.set(x + 1 + col, row, ' ', None, false);
        }
        term.fill_bg(x + 1, row, box_w - 2, theme.background());
        term.set_str(x + 2, row, line, Some(theme.text()), false);
    }
}

/// Box frame with a title on the top edge; panels draw inside `inner()`.
pub fn draw_frame(term: &mut Terminal, rect: Rect, title: &str, theme: &Theme) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let color = Some(theme.frame());
    let (x1, y1) = (rect.x, rect.y);
    let (x2, y2) = (rect.x + rect.w - 1, rect.y + rect.h - 1);

    for x in x1 + 1..x2 {
        term.set(x, y1, '─', color, false);
        term.set(x, y2, '─', color, false);
    }
    for y in y1 + 1..y2 {
        term.set(x1, y, '│', color, false);
        term.set(x2, y, '│', color, false);
    }
    term.set(x1, y1, '┌', color, false);
    term.set(x2, y1, '┐', color, false);
    term.set(x1, y2, '└', color, false);
    term.set(x2, y2, '┘', color, false);

    if !title.is_empty() && rect.w > title.chars().count() as i32 + 6 {
        term.set_str(x1 + 2, y1, &format!(" {} ", title), Some(theme.heading()), true);
    }
}

/// Greedy word wrap on spaces; words longer than the width are cut.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if word_len > width {
            // hard-cut an overlong word
            for ch in word.chars() {
                if line_len == width {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                line.push(ch);
                line_len += 1;
            }
            continue;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
