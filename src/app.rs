use std::cell::RefCell;
use std::rc::Rc;

use folio_core::FolioResult;
use gloo::events::EventListener;
use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::PageTransitionEvent;

use crate::behaviors::{
    greeting, hover, menu, navbar, parallax, reveal, sections, smooth_scroll, typewriter, years,
    Binding,
};
use crate::context::{PageContext, SharedContext};
use crate::logging;

thread_local! {
    /// The running controller. Dropping it unbinds every behavior.
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Owns every bound behavior for the page lifetime.
pub struct PageController {
    bindings: Vec<(&'static str, Binding)>,
}

impl PageController {
    /// Bind all behaviors. Each one is independent: a missing element skips
    /// it and a failure is logged without affecting the rest.
    pub fn start(ctx: &SharedContext) -> Self {
        let mut controller = Self {
            bindings: Vec::new(),
        };

        let menu = match menu::bind(ctx) {
            Ok(Some((binding, menu))) => {
                controller.keep("menu", binding);
                Some(menu)
            }
            other => {
                controller.collect("menu", other.map(|b| b.map(|(binding, _)| binding)));
                None
            }
        };

        controller.collect("smooth-scroll", smooth_scroll::bind(ctx, menu));
        controller.collect("reveal", reveal::bind(ctx));
        controller.collect("sections", sections::bind(ctx));
        controller.collect("navbar", navbar::bind(ctx));
        controller.collect("typewriter", typewriter::bind(ctx));
        controller.collect("parallax", parallax::bind(ctx));
        controller.collect("hover", hover::bind(ctx));

        match years::render(ctx) {
            Ok(true) => {}
            Ok(false) => debug!("Years badge absent, skipped"),
            Err(e) => warn!(error = %e, "Years badge failed"),
        }

        info!(behaviors = controller.bindings.len(), "Page behaviors bound");
        controller
    }

    fn keep(&mut self, name: &'static str, binding: Binding) {
        debug!(behavior = name, listeners = binding.listener_count(), "Behavior bound");
        self.bindings.push((name, binding));
    }

    fn collect(&mut self, name: &'static str, result: FolioResult<Option<Binding>>) {
        match result {
            Ok(Some(binding)) => self.keep(name, binding),
            Ok(None) => debug!(behavior = name, "Elements absent, skipped"),
            Err(e) => warn!(behavior = name, error = %e, "Behavior failed to bind"),
        }
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        let names: Vec<_> = self.bindings.iter().map(|(name, _)| *name).collect();
        debug!(?names, "Unbinding page behaviors");
    }
}

/// Start once the DOM is parsed.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

fn start() {
    let (ctx, config_error) = match PageContext::from_window() {
        Ok(parts) => parts,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
            return;
        }
    };

    logging::init(&ctx.config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "Page config rejected, using defaults");
    }

    greeting::print(&ctx.config.console_greeting);

    let ctx = Rc::new(ctx);
    let controller = PageController::start(&ctx);
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    EventListener::new(&ctx.window, "pagehide", |event| {
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if !persisted {
            teardown();
        }
    })
    .forget();
}

fn teardown() {
    // Take first so the controller drops after the borrow ends
    let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
    drop(controller);
}
