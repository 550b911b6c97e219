//! Rotating-word typewriter in the hero heading.

use std::future::Future;
use std::time::Duration;

use folio_core::rotator::{
    color_class, run_typewriter, Clock, TypewriterView, COLORS_ATTRIBUTE, WORDS_ATTRIBUTE,
};
use folio_core::{FolioResult, Typewriter, WordList};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use web_sys::Element;

use super::Binding;
use crate::context::{set_class, PageContext};

/// Browser timers.
struct GlooClock;

impl Clock for GlooClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo::timers::future::sleep(duration)
    }
}

struct DomView {
    element: Element,
    prefix: String,
}

impl TypewriterView for DomView {
    fn render_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn swap_color(&mut self, from: Option<&str>, to: &str) {
        if let Some(from) = from {
            if let Err(e) = set_class(&self.element, &color_class(&self.prefix, from), false) {
                warn!(error = %e, "Failed to remove color class");
            }
        }
        if let Err(e) = set_class(&self.element, &color_class(&self.prefix, to), true) {
            warn!(error = %e, "Failed to add color class");
        }
    }
}

pub fn bind(ctx: &PageContext) -> FolioResult<Option<Binding>> {
    let Some(element) = ctx.query(&ctx.config.selectors.rotating_word) else {
        return Ok(None);
    };

    let words = WordList::from_attributes(
        element.get_attribute(WORDS_ATTRIBUTE).as_deref(),
        element.get_attribute(COLORS_ATTRIBUTE).as_deref(),
    )?;
    debug!(words = words.len(), "Typewriter scheduled");

    let cancel = CancellationToken::new();
    let timing = ctx.config.typewriter;
    let mut view = DomView {
        element,
        prefix: ctx.config.classes.color_prefix.clone(),
    };

    wasm_bindgen_futures::spawn_local({
        let cancel = cancel.clone();
        async move {
            run_typewriter(Typewriter::new(words), timing, &GlooClock, &mut view, cancel).await;
        }
    });

    Ok(Some(Binding::new().with_task(cancel)))
}
