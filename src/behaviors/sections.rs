//! Highlight the nav link of the section currently on screen.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::sections::link_marks;
use folio_core::{ActiveSection, FolioResult, SectionExtent};
use gloo::events::EventListener;
use tracing::{debug, warn};
use web_sys::Element;

use super::Binding;
use crate::context::{as_html, set_class, SharedContext};

struct Highlighter {
    sections: Vec<Element>,
    links: Vec<Element>,
    active: RefCell<ActiveSection>,
}

impl Highlighter {
    /// Extents are read on every update since layout may shift after load.
    fn extents(&self) -> Vec<SectionExtent> {
        self.sections
            .iter()
            .filter_map(|section| {
                let html = as_html(section)?;
                Some(SectionExtent::new(
                    section.id(),
                    html.offset_top() as f64,
                    html.offset_height() as f64,
                ))
            })
            .collect()
    }

    fn update(&self, ctx: &SharedContext) -> FolioResult<()> {
        let extents = self.extents();
        let mut active = self.active.borrow_mut();
        let changed = active.update(
            &extents,
            ctx.scroll_y(),
            ctx.config.scroll.highlight_offset,
        );
        if changed {
            debug!(section = active.current().unwrap_or("none"), "Active section changed");
        }

        let hrefs: Vec<_> = self.links.iter().map(|l| l.get_attribute("href")).collect();
        let class = &ctx.config.classes.active_link;
        for (link, on) in self.links.iter().zip(link_marks(&hrefs, active.current())) {
            set_class(link, class, on)?;
        }
        Ok(())
    }
}

pub fn bind(ctx: &SharedContext) -> FolioResult<Option<Binding>> {
    let selectors = &ctx.config.selectors;
    let sections = ctx.query_all(&selectors.sections);
    let links = ctx.query_all(&format!("{}[href^=\"#\"]", selectors.nav_link));
    if sections.is_empty() || links.is_empty() {
        return Ok(None);
    }

    let highlighter = Rc::new(Highlighter {
        sections,
        links,
        active: RefCell::new(ActiveSection::new()),
    });
    highlighter.update(ctx)?;

    let listener = EventListener::new(&ctx.window, "scroll", {
        let ctx = ctx.clone();
        move |_| {
            if let Err(e) = highlighter.update(&ctx) {
                warn!(error = %e, "Section highlight failed");
            }
        }
    });

    Ok(Some(Binding::new().listen(listener)))
}
