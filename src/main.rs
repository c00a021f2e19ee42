mod app;
mod carousel;
mod dash;
mod fetch;
mod geo;
mod progress;
mod settings;
mod snapshot;
mod terminal;
mod theme;
mod timer;
mod typewriter;

use clap::{Parser, Subcommand};
use dash::DashConfig;
use fetch::SnapshotClient;
use settings::{Settings, DEFAULT_BASE_URL};
use snapshot::NewsSnapshot;
use std::io;

#[derive(Parser)]
#[command(name = "newsdash")]
#[command(version = "0.1.0")]
#[command(about = "Terminal dashboard for a news-snapshot analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Dash {
        /// Analysis service base URL
        #[arg(short, long)]
        url: Option<String>,

        /// Start in dark mode
        #[arg(long)]
        dark: bool,

        /// Start in light mode
        #[arg(long, conflicts_with = "dark")]
        light: bool,

        /// Frame delay in seconds
        #[arg(short, long)]
        time: Option<f32>,

        /// Keyword-cloud layout seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Fetch one snapshot and print a plain-text digest
    Fetch {
        /// Analysis service base URL
        #[arg(short, long)]
        url: Option<String>,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Dash {
            url,
            dark,
            light,
            time,
            seed,
        } => {
            let dark = if light {
                false
            } else if dark {
                true
            } else {
                settings.dash.dark.unwrap_or(true)
            };
            let config = DashConfig {
                base_url: base_url(url, &settings),
                dark,
                time_step: time.or(settings.dash.time_step).unwrap_or(0.05),
                seed: seed.or(settings.dash.seed),
            };
            dash::run(config)?;
        }

        Commands::Fetch { url } => {
            let client = SnapshotClient::new(&base_url(url, &settings));
            match client.fetch() {
                Ok(snapshot) => print_digest(&snapshot),
                Err(e) => {
                    eprintln!("newsdash: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// CLI flag beats config file beats built-in default.
fn base_url(cli_url: Option<String>, settings: &Settings) -> String {
    cli_url
        .or_else(|| settings.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn print_digest(snapshot: &NewsSnapshot) {
    println!("{}", snapshot.summary);
    println!();

    let stats = &snapshot.statistics;
    println!(
        "statistics ({}): {} deaths, {} injuries, {} casualties total, \
         {} military incidents, {} diplomatic meetings, {} border violations",
        if stats.recent_period.is_empty() { "n/a" } else { stats.recent_period.as_str() },
        stats.deaths,
        stats.injuries,
        stats.total_casualties,
        stats.military_incidents,
        stats.diplomatic_meetings,
        stats.border_violations,
    );
    println!(
        "intensity: {} conflict, {} diplomatic activity",
        stats.conflict_intensity.label(),
        stats.diplomatic_activity_level.label()
    );
    if !stats.economic_impact.is_empty() {
        println!("economic figures cited: {}", stats.economic_impact.len());
    }
    println!();

    if !snapshot.trending_keywords.is_empty() {
        let top: Vec<String> = snapshot
            .trending_keywords
            .iter()
            .take(8)
            .map(|k| format!("{} ({})", k.text, k.frequency))
            .collect();
        println!("trending: {}", top.join(", "));
    }

    for hotspot in &snapshot.geographic_hotspots {
        println!(
            "hotspot: {} [{} {}] {} incidents: {}",
            hotspot.name, hotspot.kind, hotspot.intensity, hotspot.incidents,
            hotspot.description
        );
    }

    if !snapshot.articles.is_empty() {
        println!();
        for article in &snapshot.articles {
            println!("article: {} <{}>", article.title, article.url);
        }
    }

    if !snapshot.youtube_videos.is_empty() {
        println!();
        for video in &snapshot.youtube_videos {
            println!("video: {} ({}) <{}>", video.title, video.channel, video.url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_url(url: &str) -> Settings {
        toml::from_str(&format!("[server]\nbase_url = \"{}\"", url)).unwrap()
    }

    #[test]
    fn cli_url_beats_config_file() {
        let settings = settings_with_url("https://from-config.example");
        assert_eq!(
            base_url(Some("https://from-cli.example".into()), &settings),
            "https://from-cli.example"
        );
    }

    #[test]
    fn config_file_beats_default() {
        let settings = settings_with_url("https://from-config.example");
        assert_eq!(base_url(None, &settings), "https://from-config.example");
    }

    #[test]
    fn default_url_when_nothing_is_set() {
        assert_eq!(base_url(None, &Settings::default()), DEFAULT_BASE_URL);
    }
}
