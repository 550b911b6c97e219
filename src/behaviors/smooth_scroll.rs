//! Smooth scrolling for in-page links.

use std::rc::Rc;

use folio_core::anchor::{on_link_click, scroll_destination};
use folio_core::{FolioResult, MenuState};
use gloo::events::{EventListener, EventListenerOptions};
use tracing::debug;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::menu::Menu;
use super::Binding;
use crate::context::{as_html, SharedContext};

pub fn bind(ctx: &SharedContext, menu: Option<Rc<Menu>>) -> FolioResult<Option<Binding>> {
    let links = ctx.query_all(&ctx.config.selectors.in_page_links);
    if links.is_empty() {
        return Ok(None);
    }

    let mut binding = Binding::new();
    for link in &links {
        let ctx = ctx.clone();
        let menu = menu.clone();
        let target = link.clone();
        binding.push(EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = target.get_attribute("href");
                let id = match &menu {
                    Some(menu) => menu.update(|state| on_link_click(href.as_deref(), state)),
                    None => on_link_click(href.as_deref(), &mut MenuState::new()),
                };
                let Some(id) = id else {
                    return;
                };

                event.prevent_default();

                match ctx.by_id(id) {
                    Some(section) => scroll_to(&ctx, &section),
                    None => debug!(id, "In-page link target missing"),
                }
            },
        ));
    }

    Ok(Some(binding))
}

fn scroll_to(ctx: &SharedContext, section: &Element) {
    let top = as_html(section).map(|s| s.offset_top() as f64).unwrap_or(0.0);
    let bar = ctx
        .query(&ctx.config.selectors.navbar)
        .as_ref()
        .and_then(as_html)
        .map(|bar| bar.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(top, bar));
    options.set_behavior(ScrollBehavior::Smooth);
    ctx.window.scroll_to_with_scroll_to_options(&options);
}
