//! Mobile menu toggle.
//!
//! The hamburger button flips the menu; any link inside the nav panel closes
//! it again.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::{FolioResult, MenuState};
use gloo::events::EventListener;
use tracing::{debug, warn};
use web_sys::Element;

use super::Binding;
use crate::context::{query_all_in, set_class, PageContext};

/// Menu state plus the two elements mirroring it.
pub struct Menu {
    state: Cell<MenuState>,
    toggle: Element,
    panel: Element,
    class: String,
}

impl Menu {
    pub fn toggle(&self) {
        let open = self.update(MenuState::toggle);
        debug!(open, "Menu toggled");
    }

    /// Close the menu, whatever its state.
    pub fn close(&self) {
        if self.update(MenuState::close) {
            debug!("Menu closed by link");
        }
    }

    /// Run `f` on the state, then mirror the result onto both elements.
    pub fn update<R>(&self, f: impl FnOnce(&mut MenuState) -> R) -> R {
        let mut state = self.state.get();
        let result = f(&mut state);
        self.state.set(state);
        self.apply(state.is_open());
        result
    }

    fn apply(&self, open: bool) {
        for element in [&self.toggle, &self.panel] {
            if let Err(e) = set_class(element, &self.class, open) {
                warn!(error = %e, "Failed to update menu class");
            }
        }
    }
}

pub fn bind(ctx: &PageContext) -> FolioResult<Option<(Binding, Rc<Menu>)>> {
    let selectors = &ctx.config.selectors;
    let (Some(toggle), Some(panel)) = (
        ctx.query(&selectors.menu_toggle),
        ctx.query(&selectors.nav_panel),
    ) else {
        return Ok(None);
    };

    let links = query_all_in(&panel, &selectors.nav_link);
    let menu = Rc::new(Menu {
        state: Cell::new(MenuState::new()),
        toggle: toggle.clone(),
        panel,
        class: ctx.config.classes.open.clone(),
    });

    let mut binding = Binding::new().listen({
        let menu = menu.clone();
        EventListener::new(&toggle, "click", move |_| menu.toggle())
    });

    for link in &links {
        let menu = menu.clone();
        binding.push(EventListener::new(link, "click", move |_| menu.close()));
    }

    Ok(Some((binding, menu)))
}
