//! Folio CLI
//!
//! Thin wrapper around folio-core for checking page behaviors without a
//! browser.
//!
//! ## Usage
//!
//! ```bash
//! # Print the typewriter timeline for the first ten seconds
//! folio typewriter --words '["Design","Build"]' --colors '["blue","green"]'
//!
//! # Badge text for the years-active counter
//! folio years --now 2026-10-19T12:00:00Z
//!
//! # Which nav link is highlighted at a scroll offset
//! folio highlight --scroll 700 --section home:0:800 --section work:800:1200
//!
//! # Badge transforms for a scroll offset
//! folio parallax --scroll 200 --viewport 900
//!
//! # Navbar shadow state for a scroll offset
//! folio navbar --scroll 60
//!
//! # Validate a page config, or print the defaults
//! folio config check page-config.json
//! folio config default
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use folio_core::parallax::layer_transforms;
use folio_core::rotator::{color_class, run_typewriter, Typewriter, TypewriterView, VirtualClock};
use folio_core::sections::{active_section, SectionExtent};
use folio_core::{navbar, years, PageConfig, WordList};

/// Folio - portfolio page behaviors
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - run the portfolio page behaviors against synthetic input")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Page config JSON (default: built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rotating-word timeline over a virtual clock
    Typewriter {
        /// JSON array of words, as in data-words
        #[arg(long)]
        words: String,

        /// JSON array of colors, as in data-colors
        #[arg(long)]
        colors: String,

        /// How much virtual time to simulate, in milliseconds
        #[arg(long, default_value_t = 10_000)]
        duration: u64,
    },

    /// Print the years-active badge text
    Years {
        /// Start date (YYYY-MM-DD), overrides the config
        #[arg(long)]
        since: Option<String>,

        /// Evaluation instant (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<String>,
    },

    /// Print the section highlighted at a scroll offset
    Highlight {
        /// Vertical scroll offset in pixels
        #[arg(long, allow_hyphen_values = true)]
        scroll: f64,

        /// Section as id:top:height, in document order (repeatable)
        #[arg(long = "section", value_parser = parse_section)]
        sections: Vec<SectionExtent>,

        /// Look-ahead added to the scroll offset, overrides the config
        #[arg(long)]
        offset: Option<f64>,
    },

    /// Print the parallax transforms at a scroll offset
    Parallax {
        /// Vertical scroll offset in pixels
        #[arg(long, allow_hyphen_values = true)]
        scroll: f64,

        /// Viewport height in pixels
        #[arg(long)]
        viewport: f64,
    },

    /// Print whether the navbar carries its shadow at a scroll offset
    Navbar {
        /// Vertical scroll offset in pixels
        #[arg(long, allow_hyphen_values = true)]
        scroll: f64,
    },

    /// Page config helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file
    Check {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Print the default config as JSON
    Default,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse `id:top:height`; the id may itself contain colons
fn parse_section(s: &str) -> Result<SectionExtent, String> {
    let mut parts = s.rsplitn(3, ':');
    let height = parts.next();
    let top = parts.next();
    let id = parts.next();

    match (id, top, height) {
        (Some(id), Some(top), Some(height)) if !id.is_empty() => {
            let top: f64 = top.parse().map_err(|_| format!("invalid top in '{s}'"))?;
            let height: f64 = height
                .parse()
                .map_err(|_| format!("invalid height in '{s}'"))?;
            Ok(SectionExtent::new(id, top, height))
        }
        _ => Err(format!("expected id:top:height, got '{s}'")),
    }
}

fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            PageConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(PageConfig::default()),
    }
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid instant '{}'", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Prints each effect with its virtual timestamp; stops the loop once the
/// simulated window is used up.
struct TimelineView<'a> {
    clock: &'a VirtualClock,
    until: Duration,
    color_prefix: &'a str,
    cancel: CancellationToken,
}

impl TimelineView<'_> {
    /// Returns the timestamp to print, or `None` past the window.
    fn now(&self) -> Option<u128> {
        let elapsed = self.clock.elapsed();
        if elapsed > self.until {
            self.cancel.cancel();
            return None;
        }
        Some(elapsed.as_millis())
    }
}

impl TypewriterView for TimelineView<'_> {
    fn render_text(&mut self, text: &str) {
        if let Some(ms) = self.now() {
            println!("{:>8}ms  text   {:?}", ms, text);
        }
    }

    fn swap_color(&mut self, from: Option<&str>, to: &str) {
        if let Some(ms) = self.now() {
            let to = color_class(self.color_prefix, to);
            match from {
                Some(from) => println!(
                    "{:>8}ms  color  {} -> {}",
                    ms,
                    color_class(self.color_prefix, from),
                    to
                ),
                None => println!("{:>8}ms  color  {}", ms, to),
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Typewriter {
            words,
            colors,
            duration,
        } => {
            let list = WordList::from_attributes(Some(&words), Some(&colors))?;
            println!("Rotating {} word(s):", list.len());
            for entry in list.iter() {
                println!("  {} ({})", entry.word, color_class(&config.classes.color_prefix, &entry.color));
            }
            println!();

            let clock = VirtualClock::new();
            let cancel = CancellationToken::new();
            let mut view = TimelineView {
                clock: &clock,
                until: Duration::from_millis(duration),
                color_prefix: &config.classes.color_prefix,
                cancel: cancel.clone(),
            };

            let typewriter = run_typewriter(
                Typewriter::new(list),
                config.typewriter,
                &clock,
                &mut view,
                cancel,
            )
            .await;

            println!();
            println!("Completed cycles: {}", typewriter.completed_cycles());
        }

        Commands::Years { since, now } => {
            let since: NaiveDate = match since {
                Some(s) => years::parse_date(&s)?,
                None => config.career_start,
            };
            let now = parse_now(now.as_deref())?;
            println!("{}", years::years_label(years::years_since(since, now)));
        }

        Commands::Highlight {
            scroll,
            sections,
            offset,
        } => {
            let offset = offset.unwrap_or(config.scroll.highlight_offset);
            match active_section(&sections, scroll, offset) {
                Some(id) => println!("{}", id),
                None => println!("none"),
            }
        }

        Commands::Parallax { scroll, viewport } => {
            match layer_transforms(&config.scroll.parallax, scroll, viewport) {
                Some(transforms) => {
                    for (layer, transform) in config.scroll.parallax.iter().zip(transforms) {
                        println!("{}: {}", layer.selector, transform);
                    }
                }
                None => println!("frozen"),
            }
        }

        Commands::Navbar { scroll } => {
            if navbar::has_shadow(scroll, config.scroll.navbar_shadow_threshold) {
                println!("shadow");
            } else {
                println!("none");
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Check { file } => {
                let checked = load_config(Some(&file))?;
                println!("Config OK: {}", file.display());
                println!("  Parallax layers: {}", checked.scroll.parallax.len());
                println!("  Career start: {}", checked.career_start);
            }

            ConfigAction::Default => {
                println!("{}", PageConfig::default().to_json_pretty()?);
            }
        },
    }

    Ok(())
}
