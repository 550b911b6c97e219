//! Years-of-experience badge, written once at startup.

use folio_core::years::{from_epoch_millis, years_label, years_since};
use folio_core::FolioResult;
use tracing::debug;

use crate::context::PageContext;

/// Returns whether the badge was found and written.
pub fn render(ctx: &PageContext) -> FolioResult<bool> {
    let Some(display) = ctx.query(&ctx.config.selectors.years_display) else {
        return Ok(false);
    };

    let now = from_epoch_millis(js_sys::Date::now())?;
    let years = years_since(ctx.config.career_start, now);
    display.set_text_content(Some(&years_label(years)));
    debug!(years, "Years badge rendered");
    Ok(true)
}
