//! Fade-in of case-study cards as they scroll into view.

use folio_core::{FolioResult, RevealTracker};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Binding, ObserverHandle};
use crate::context::{set_class, JsResultExt, PageContext};

pub fn bind(ctx: &PageContext) -> FolioResult<Option<Binding>> {
    let cards = ctx.query_all(&ctx.config.selectors.cards);
    if cards.is_empty() {
        return Ok(None);
    }

    let classes = &ctx.config.classes;
    for card in &cards {
        set_class(card, &classes.animate, true)?;
    }

    let revealed = classes.revealed.clone();
    let threshold = ctx.config.scroll.reveal_threshold;

    let observer = match observe(cards.clone(), revealed.clone(), threshold) {
        Ok(observer) => observer,
        Err(e) => {
            warn!(error = %e, "IntersectionObserver unavailable, revealing all cards");
            for card in &cards {
                set_class(card, &revealed, true)?;
            }
            return Ok(Some(Binding::new()));
        }
    };

    debug!(cards = cards.len(), threshold, "Observing cards");
    Ok(Some(Binding::new().with_observer(observer)))
}

fn observe(cards: Vec<Element>, revealed: String, threshold: f64) -> FolioResult<ObserverHandle> {
    let mut tracker = RevealTracker::new(threshold);
    let observed = cards.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = cards.iter().position(|card| *card == target) else {
                    continue;
                };

                if tracker.observe(index, entry.is_intersecting(), entry.intersection_ratio()) {
                    if let Err(e) = set_class(&target, &revealed, true) {
                        warn!(error = %e, "Failed to reveal card");
                    }
                    observer.unobserve(&target);
                    debug!(index, total = tracker.revealed_count(), "Card revealed");
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .dom("create IntersectionObserver")?;
    for card in &observed {
        observer.observe(card);
    }

    Ok(ObserverHandle::new(observer, callback))
}
