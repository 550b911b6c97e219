//! In-page anchor handling for smooth scrolling.

use crate::menu::MenuState;

/// Id referenced by an in-page link, or `None` when the click should be left
/// to the browser.
///
/// Only same-document fragments qualify: `#about` yields `about`, while the
/// bare `#`, an empty href and anything not starting with `#` yield `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Decide what a click on an in-page link does.
///
/// For a same-document fragment the menu is closed and the target id is
/// returned; the caller then suppresses default navigation and scrolls to
/// it. Any other href leaves the menu and the browser alone.
pub fn on_link_click<'a>(href: Option<&'a str>, menu: &mut MenuState) -> Option<&'a str> {
    let id = href.and_then(fragment_target)?;
    menu.close();
    Some(id)
}

/// Scroll offset that places a target's top edge just below the fixed top
/// bar.
pub fn scroll_destination(target_top: f64, top_bar_height: f64) -> f64 {
    target_top - top_bar_height
}
