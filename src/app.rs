//! Top-level dashboard state: one snapshot, one display state, one theme.

use crate::carousel::Carousel;
use crate::fetch::{FetchError, SnapshotClient};
use crate::progress::ProgressSimulator;
use crate::snapshot::NewsSnapshot;
use crate::theme::Theme;
use crate::timer::Ticker;
use crate::typewriter::{self, Typewriter};
use std::time::{Duration, Instant};

/// How long the transient error banner stays up before auto-dismissing.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Exactly one of these holds at any time. Ready and Error are terminal
/// for the session; there is no automatic refetch.
pub enum DisplayState {
    Loading(ProgressSimulator),
    Ready(NewsSnapshot),
    Error(String),
}

/// Transient error banner; the persistent error panel outlives it.
pub struct Notice {
    pub message: String,
    expiry: Ticker,
}

impl Notice {
    fn new(message: String, now: Instant) -> Self {
        Self {
            message,
            expiry: Ticker::starting_at(NOTICE_TTL, now),
        }
    }

    fn expired(&mut self, now: Instant) -> bool {
        self.expiry.due(now)
    }
}

pub struct App {
    pub state: DisplayState,
    pub theme: Theme,
    pub carousel: Carousel,
    pub typewriter: Typewriter,
    pub notice: Option<Notice>,
    client: SnapshotClient,
}

impl App {
    pub fn new(client: SnapshotClient, dark: bool, now: Instant) -> Self {
        Self {
            state: DisplayState::Loading(ProgressSimulator::new(now)),
            theme: Theme::new(dark),
            carousel: Carousel::new(0),
            typewriter: Typewriter::new(typewriter::DEFAULT_CADENCE),
            notice: None,
            client,
        }
    }

    /// Drive every timed machine. The single fetch is issued on the tick
    /// the simulated sequence completes, never alongside it; perceived
    /// loading time is script plus network.
    pub fn on_tick(&mut self, now: Instant) {
        let fetch_due = match &mut self.state {
            DisplayState::Loading(sim) => sim.poll(now),
            _ => false,
        };
        if fetch_due {
            let result = self.client.fetch();
            self.resolve(result, now);
        }

        self.typewriter.poll(now);

        if let Some(notice) = &mut self.notice {
            if notice.expired(now) {
                self.notice = None;
            }
        }
    }

    /// Settle the session from the fetch outcome.
    pub(crate) fn resolve(&mut self, result: Result<NewsSnapshot, FetchError>, now: Instant) {
        match result {
            Ok(snapshot) => {
                self.carousel = Carousel::new(snapshot.images.len());
                self.typewriter.set_target(&snapshot.summary, now);
                self.state = DisplayState::Ready(snapshot);
            }
            Err(err) => {
                let message = err.to_string();
                self.notice = Some(Notice::new(message.clone(), now));
                self.state = DisplayState::Error(message);
            }
        }
    }

    pub fn snapshot(&self) -> Option<&NewsSnapshot> {
        match &self.state {
            DisplayState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn next_slide(&mut self) {
        self.carousel.next();
    }

    pub fn prev_slide(&mut self) {
        self.carousel.prev();
    }

    pub fn go_to_slide(&mut self, index: usize) {
        self.carousel.go_to(index);
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn dismiss_error(&mut self) {
        self.notice = None;
    }

    /// Teardown: stop reveal timers so nothing fires after the screen is
    /// gone.
    pub fn shutdown(&mut self) {
        self.typewriter.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{LOADING_STEPS, STEP_HOLD};
    use serde_json::json;

    fn app() -> App {
        App::new(
            SnapshotClient::new("http://127.0.0.1:9"),
            true,
            Instant::now(),
        )
    }

    fn sample_snapshot() -> NewsSnapshot {
        serde_json::from_value(json!({
            "summary": "Three image snapshot.",
            "articles": [
                {"title": "a1", "text": "t", "url": "u"},
                {"title": "a2", "text": "t", "url": "u"},
                {"title": "a3", "text": "t", "url": "u"},
                {"title": "a4", "text": "t", "url": "u"},
                {"title": "a5", "text": "t", "url": "u"}
            ],
            "images": ["i1", "i2", "i3"]
        }))
        .unwrap()
    }

    #[test]
    fn starts_loading_with_first_step() {
        let app = app();
        match &app.state {
            DisplayState::Loading(sim) => {
                assert_eq!(sim.current().unwrap().label, LOADING_STEPS[0].label);
            }
            _ => panic!("expected loading state"),
        }
        assert!(app.snapshot().is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn happy_path_settles_ready_with_seeded_views() {
        let mut app = app();
        let now = Instant::now();
        app.resolve(Ok(sample_snapshot()), now);

        let snapshot = app.snapshot().expect("ready state holds the snapshot");
        assert_eq!(snapshot.articles.len(), 5);
        assert_eq!(app.carousel.len(), 3);
        assert_eq!(app.carousel.active(), 0);
        assert!(!app.typewriter.is_complete());
        app.typewriter.tick();
        assert_eq!(app.typewriter.visible(), "T");
    }

    #[test]
    fn service_error_settles_error_without_snapshot() {
        let mut app = app();
        let now = Instant::now();
        app.resolve(Err(FetchError::Service("rate limited".into())), now);

        match &app.state {
            DisplayState::Error(message) => assert_eq!(message, "rate limited"),
            _ => panic!("expected error state"),
        }
        assert!(app.snapshot().is_none());
        assert_eq!(app.notice.as_ref().unwrap().message, "rate limited");
    }

    #[test]
    fn notice_auto_dismisses_but_error_state_persists() {
        let mut app = app();
        let now = Instant::now();
        app.resolve(Err(FetchError::Network("timed out".into())), now);
        assert!(app.notice.is_some());

        app.on_tick(now + NOTICE_TTL);
        assert!(app.notice.is_none());
        assert!(matches!(app.state, DisplayState::Error(_)));
    }

    #[test]
    fn dismiss_clears_notice_only() {
        let mut app = app();
        app.resolve(
            Err(FetchError::Service("backend down".into())),
            Instant::now(),
        );
        app.dismiss_error();
        assert!(app.notice.is_none());
        assert!(matches!(app.state, DisplayState::Error(_)));
    }

    #[test]
    fn loading_progresses_without_fetching_early() {
        let mut app = app();
        let t0 = Instant::now();
        // one step shy of completion: still loading, nothing fetched
        for i in 1..LOADING_STEPS.len() {
            app.on_tick(t0 + STEP_HOLD * i as u32);
        }
        match &app.state {
            DisplayState::Loading(sim) => {
                assert_eq!(sim.current().unwrap().progress, 100);
                assert!(!sim.is_done());
            }
            _ => panic!("fetch must not start before the script completes"),
        }
    }

    #[test]
    fn slide_actions_follow_carousel_rules() {
        let mut app = app();
        app.resolve(Ok(sample_snapshot()), Instant::now());
        app.prev_slide();
        assert_eq!(app.carousel.active(), 2);
        app.next_slide();
        assert_eq!(app.carousel.active(), 0);
        app.go_to_slide(1);
        assert_eq!(app.carousel.active(), 1);
    }

    #[test]
    fn theme_toggle_is_independent_of_state() {
        let mut app = app();
        assert!(app.theme.dark);
        app.toggle_theme();
        assert!(!app.theme.dark);
        app.resolve(Ok(sample_snapshot()), Instant::now());
        assert!(!app.theme.dark);
    }
}
