//! Developer console greeting printed once at startup.

use serde::{Deserialize, Serialize};

/// One `%c`-styled console line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleLine {
    pub text: String,
    /// Inline CSS applied through the `%c` directive
    pub style: String,
}

impl ConsoleLine {
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }

    /// Format string handed to `console.log` as the first argument.
    pub fn format_arg(&self) -> String {
        format!("%c{}", self.text)
    }
}

pub fn default_greeting() -> Vec<ConsoleLine> {
    vec![
        ConsoleLine::new(
            "👋 Hey there, curious developer!",
            "font-size: 20px; font-weight: bold;",
        ),
        ConsoleLine::new(
            "This portfolio was crafted with care by Gloria Yunhan Gao.",
            "font-size: 14px;",
        ),
        ConsoleLine::new(
            "Interested in working together? Let's connect!",
            "font-size: 14px;",
        ),
    ]
}
