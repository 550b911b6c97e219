//! Button lift on hover.

use folio_core::hover::hover_transform;
use folio_core::FolioResult;
use gloo::events::EventListener;
use tracing::warn;
use web_sys::Element;

use super::Binding;
use crate::context::{set_transform, PageContext};

pub fn bind(ctx: &PageContext) -> FolioResult<Option<Binding>> {
    let buttons = ctx.query_all(&ctx.config.selectors.buttons);
    if buttons.is_empty() {
        return Ok(None);
    }

    let lift = ctx.config.hover_lift_px;
    let mut binding = Binding::new();
    for button in &buttons {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = button.clone();
            binding.push(EventListener::new(button, event, move |_| {
                lift_to(&target, hovered, lift)
            }));
        }
    }

    Ok(Some(binding))
}

fn lift_to(button: &Element, hovered: bool, lift: f64) {
    if let Err(e) = set_transform(button, &hover_transform(hovered, lift)) {
        warn!(error = %e, "Failed to set hover transform");
    }
}
