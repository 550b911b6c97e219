//! Navbar shadow once the page has scrolled.

use folio_core::navbar::has_shadow;
use folio_core::FolioResult;
use gloo::events::EventListener;
use tracing::warn;
use web_sys::Element;

use super::Binding;
use crate::context::{set_class, SharedContext};

pub fn bind(ctx: &SharedContext) -> FolioResult<Option<Binding>> {
    let Some(navbar) = ctx.query(&ctx.config.selectors.navbar) else {
        return Ok(None);
    };

    update(ctx, &navbar)?;

    let listener = EventListener::new(&ctx.window, "scroll", {
        let ctx = ctx.clone();
        move |_| {
            if let Err(e) = update(&ctx, &navbar) {
                warn!(error = %e, "Navbar update failed");
            }
        }
    });

    Ok(Some(Binding::new().listen(listener)))
}

fn update(ctx: &SharedContext, navbar: &Element) -> FolioResult<()> {
    let scrolled = has_shadow(ctx.scroll_y(), ctx.config.scroll.navbar_shadow_threshold);
    set_class(navbar, &ctx.config.classes.scrolled, scrolled)
}
