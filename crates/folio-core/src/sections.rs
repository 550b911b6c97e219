//! Active-section lookup for nav highlighting.

use serde::{Deserialize, Serialize};

/// Vertical extent of a page section, as measured from the document top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: the top edge belongs to the section, the bottom
    /// edge to whatever follows.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section containing `scroll_y + offset`.
///
/// When sections overlap the last match in document order wins. Returns
/// `None` when the anchor point falls outside every section.
pub fn active_section(sections: &[SectionExtent], scroll_y: f64, offset: f64) -> Option<&str> {
    let anchor = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(anchor))
        .map(|section| section.id.as_str())
}

/// `href` of the nav link pointing at a section.
pub fn link_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Active marker for each nav link, given the links' `href` attributes.
///
/// Only the first link pointing at `current` is marked; with no current
/// section every link is cleared.
pub fn link_marks(hrefs: &[Option<String>], current: Option<&str>) -> Vec<bool> {
    let Some(target) = current.map(link_href) else {
        return vec![false; hrefs.len()];
    };
    let mut marked = false;
    hrefs
        .iter()
        .map(|href| {
            let on = !marked && href.as_deref() == Some(target.as_str());
            marked |= on;
            on
        })
        .collect()
}

/// Remembers the highlighted section between scroll events.
#[derive(Debug, Clone, Default)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recompute the active section. Returns `true` if it changed.
    pub fn update(&mut self, sections: &[SectionExtent], scroll_y: f64, offset: f64) -> bool {
        let next = active_section(sections, scroll_y, offset);
        if self.current.as_deref() == next {
            return false;
        }
        self.current = next.map(str::to_string);
        true
    }
}
