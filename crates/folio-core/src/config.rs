//! Page configuration.
//!
//! Every field has a default matching the portfolio markup, so a page without
//! a config block behaves exactly like the stock site. A page may override any
//! subset of fields with a JSON object:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "scroll": { "highlight_offset": 120 }, "log_level": "debug" }
//! </script>
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::greeting::ConsoleLine;
use crate::rotator::TypewriterTiming;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Top-level configuration for the behavior controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub scroll: ScrollConfig,
    pub typewriter: TypewriterTiming,
    /// Upward offset applied to buttons on hover, in pixels
    pub hover_lift_px: f64,
    /// Date the years-active badge counts from
    pub career_start: NaiveDate,
    /// `EnvFilter` directive for browser-side tracing
    pub log_level: String,
    pub console_greeting: Vec<ConsoleLine>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            scroll: ScrollConfig::default(),
            typewriter: TypewriterTiming::default(),
            hover_lift_px: 2.0,
            career_start: default_career_start(),
            log_level: "info".to_string(),
            console_greeting: crate::greeting::default_greeting(),
        }
    }
}

fn default_career_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 8, 3).unwrap_or_default()
}

/// CSS selectors for the elements each behavior binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle: String,
    pub nav_panel: String,
    /// Links inside the nav panel, also the candidates for highlighting
    pub nav_link: String,
    pub navbar: String,
    pub cards: String,
    pub sections: String,
    pub in_page_links: String,
    pub years_display: String,
    pub rotating_word: String,
    pub buttons: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: ".mobile-menu-btn".to_string(),
            nav_panel: ".nav-links".to_string(),
            nav_link: ".nav-link".to_string(),
            navbar: ".navbar".to_string(),
            cards: ".case-study".to_string(),
            sections: "section[id]".to_string(),
            in_page_links: "a[href^=\"#\"]".to_string(),
            years_display: ".years-count".to_string(),
            rotating_word: ".rotating-word".to_string(),
            buttons: ".btn".to_string(),
        }
    }
}

/// Class names toggled by the behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    /// Menu toggle and nav panel while the menu is open
    pub open: String,
    /// Nav link of the section currently in view
    pub active_link: String,
    /// Card that has entered the viewport
    pub revealed: String,
    /// Tag added to every observed card at startup
    pub animate: String,
    /// Navbar once the page has scrolled past the shadow threshold
    pub scrolled: String,
    /// Prefix of the rotating word's color class (`color-blue`)
    pub color_prefix: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            open: "active".to_string(),
            active_link: "active".to_string(),
            revealed: "visible".to_string(),
            animate: "animate-on-scroll".to_string(),
            scrolled: "scrolled".to_string(),
            color_prefix: "color-".to_string(),
        }
    }
}

/// A decorative element moved proportionally to the scroll offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub selector: String,
    pub factor: f64,
}

impl ParallaxLayer {
    pub fn new(selector: impl Into<String>, factor: f64) -> Self {
        Self {
            selector: selector.into(),
            factor,
        }
    }
}

/// Scroll-driven thresholds and offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Navbar gets its shadow once scrollY strictly exceeds this
    pub navbar_shadow_threshold: f64,
    /// Added to scrollY before looking up the section in view
    pub highlight_offset: f64,
    /// Fraction of a card that must be visible before it fades in
    pub reveal_threshold: f64,
    pub parallax: Vec<ParallaxLayer>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_shadow_threshold: 50.0,
            highlight_offset: 150.0,
            reveal_threshold: 0.1,
            parallax: vec![
                ParallaxLayer::new(".badge-years", 0.1),
                ParallaxLayer::new(".badge-location", 0.05),
            ],
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the full config, defaults included.
    pub fn to_json_pretty(&self) -> FolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values no behavior can work with.
    pub fn validate(&self) -> FolioResult<()> {
        let scroll = &self.scroll;
        for (name, value) in [
            ("scroll.navbar_shadow_threshold", scroll.navbar_shadow_threshold),
            ("scroll.highlight_offset", scroll.highlight_offset),
            ("hover_lift_px", self.hover_lift_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&scroll.reveal_threshold) {
            return Err(FolioError::InvalidConfig(format!(
                "scroll.reveal_threshold must be within 0..=1, got {}",
                scroll.reveal_threshold
            )));
        }

        if let Some(layer) = scroll.parallax.iter().find(|l| !l.factor.is_finite()) {
            return Err(FolioError::InvalidConfig(format!(
                "parallax factor for {} is not finite",
                layer.selector
            )));
        }

        if self.typewriter.type_ms == 0 || self.typewriter.delete_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "typewriter.type_ms and typewriter.delete_ms must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
