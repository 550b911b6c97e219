//! Hover lift for call-to-action buttons.

use crate::parallax::translate_y;

/// Resting transform written back on pointer leave.
pub const NEUTRAL_TRANSFORM: &str = "translateY(0)";

/// Transform for a button in the given hover state.
pub fn hover_transform(hovered: bool, lift_px: f64) -> String {
    if hovered && lift_px != 0.0 {
        translate_y(-lift_px)
    } else {
        NEUTRAL_TRANSFORM.to_string()
    }
}
