//! Parallax drift of the hero badges.
//!
//! Scroll events only claim the next animation frame; the transforms are
//! computed once inside that frame however many events arrived before it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::parallax::layer_transforms;
use folio_core::{FolioResult, FrameGate, ParallaxLayer};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use tracing::{debug, warn};
use web_sys::Element;

use super::Binding;
use crate::context::{set_transform, SharedContext};

struct Parallax {
    layers: Vec<ParallaxLayer>,
    elements: Vec<Option<Element>>,
    gate: FrameGate,
    // Replaced, never cleared, so a frame handle is not dropped from its own callback
    frame: RefCell<Option<AnimationFrame>>,
}

impl Parallax {
    fn apply(&self, ctx: &SharedContext) -> FolioResult<()> {
        let Some(transforms) = layer_transforms(&self.layers, ctx.scroll_y(), ctx.viewport_height())
        else {
            return Ok(());
        };
        for (element, transform) in self.elements.iter().zip(&transforms) {
            if let Some(element) = element {
                set_transform(element, transform)?;
            }
        }
        Ok(())
    }

    fn schedule(self: &Rc<Self>, ctx: &SharedContext) {
        if !self.gate.request() {
            return;
        }
        let this: Weak<Self> = Rc::downgrade(self);
        let ctx = ctx.clone();
        let frame = request_animation_frame(move |_| {
            let Some(this) = this.upgrade() else {
                return;
            };
            this.gate.complete();
            if let Err(e) = this.apply(&ctx) {
                warn!(error = %e, "Parallax update failed");
            }
        });
        *self.frame.borrow_mut() = Some(frame);
    }
}

pub fn bind(ctx: &SharedContext) -> FolioResult<Option<Binding>> {
    let layers = ctx.config.scroll.parallax.clone();
    let elements: Vec<Option<Element>> = layers.iter().map(|l| ctx.query(&l.selector)).collect();
    if elements.iter().all(Option::is_none) {
        return Ok(None);
    }
    debug!(
        layers = elements.iter().flatten().count(),
        "Parallax layers found"
    );

    let parallax = Rc::new(Parallax {
        layers,
        elements,
        gate: FrameGate::new(),
        frame: RefCell::new(None),
    });
    parallax.apply(ctx)?;

    let listener = EventListener::new(&ctx.window, "scroll", {
        let ctx = ctx.clone();
        move |_| parallax.schedule(&ctx)
    });

    Ok(Some(Binding::new().listen(listener)))
}
