//! Wire data model for the analysis service.
//!
//! One `NewsSnapshot` is fetched per session and never mutated: the app
//! replaces it wholesale, every panel reads it.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Article preview length in the timeline panel, in characters.
pub const PREVIEW_CHARS: usize = 180;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsSnapshot {
    pub summary: String,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub youtube_videos: Vec<Video>,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub trending_keywords: Vec<Keyword>,
    #[serde(default)]
    pub geographic_hotspots: Vec<Hotspot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

impl Article {
    /// Fixed-length preview of the body text, cut on a char boundary.
    pub fn preview(&self) -> String {
        truncate_chars(&self.text, PREVIEW_CHARS)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub title: String,
    pub url: String,
    #[serde(default)]
    #[allow(dead_code)] // wire field; thumbnails have no terminal rendering
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub channel: String,
}

/// Counters extracted by the backend. The wire object may be `{}`, so
/// every field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub injuries: u32,
    #[serde(default)]
    pub total_casualties: u32,
    #[serde(default)]
    pub military_incidents: u32,
    #[serde(default)]
    pub diplomatic_meetings: u32,
    #[serde(default)]
    pub border_violations: u32,
    #[serde(default)]
    pub key_developments: u32,
    #[serde(default)]
    pub avg_casualties_per_incident: f64,
    #[serde(default)]
    pub economic_impact: Vec<f64>,
    #[serde(default)]
    pub conflict_intensity: ActivityLevel,
    #[serde(default)]
    pub diplomatic_activity_level: ActivityLevel,
    #[serde(default)]
    pub recent_period: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
            ActivityLevel::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keyword {
    pub text: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub frequency: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hotspot {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub intensity: String,
    #[serde(default)]
    pub incidents: u32,
    #[serde(default)]
    pub description: String,
}

/// Truncate to `max` characters, appending an ellipsis when cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte, _)) => format!("{}…", &s[..byte].trim_end()),
        None => s.to_string(),
    }
}

/// Render an ISO8601 publish date as a relative age ("3h ago").
/// Unparseable input falls back to its date prefix.
pub fn relative_age(iso: &str) -> String {
    let Some(then) = parse_publish_date(iso) else {
        return iso.chars().take(10).collect();
    };
    let minutes = (Utc::now() - then).num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

fn parse_publish_date(iso: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Utc));
    }
    // backend emits naive isoformat() timestamps
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
