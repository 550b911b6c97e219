//! Parallax offsets for the hero badges.
//!
//! Offsets are only recomputed while the hero is on screen; past one viewport
//! height the badges keep whatever transform they last received.

use std::cell::Cell;

use crate::config::ParallaxLayer;

/// CSS `transform` value for a vertical offset in pixels.
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// Transform for every layer at this scroll offset, in layer order, or
/// `None` once the hero has scrolled out of view.
pub fn layer_transforms(
    layers: &[ParallaxLayer],
    scroll_y: f64,
    viewport_height: f64,
) -> Option<Vec<String>> {
    if scroll_y >= viewport_height {
        return None;
    }
    Some(
        layers
            .iter()
            .map(|layer| translate_y(scroll_y * layer.factor))
            .collect(),
    )
}

/// Coalesces scroll events into at most one recomputation per animation
/// frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    scheduled: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame. Returns `true` if the caller must schedule the
    /// frame callback, `false` if one is already pending.
    pub fn request(&self) -> bool {
        !self.scheduled.replace(true)
    }

    /// Release the gate from inside the frame callback.
    pub fn complete(&self) {
        self.scheduled.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badges() -> Vec<ParallaxLayer> {
        vec![
            ParallaxLayer::new(".badge-years", 0.1),
            ParallaxLayer::new(".badge-location", 0.05),
        ]
    }

    #[test]
    fn test_scroll_zero_is_identity() {
        let transforms = layer_transforms(&badges(), 0.0, 900.0).unwrap();
        assert_eq!(transforms, vec!["translateY(0px)", "translateY(0px)"]);
    }

    #[test]
    fn test_offsets_scale_per_layer() {
        let transforms = layer_transforms(&badges(), 200.0, 900.0).unwrap();
        assert_eq!(transforms, vec!["translateY(20px)", "translateY(10px)"]);
    }

    #[test]
    fn test_fractional_offsets_keep_decimals() {
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
    }

    #[test]
    fn test_frozen_past_viewport() {
        assert!(layer_transforms(&badges(), 900.0, 900.0).is_none());
        assert!(layer_transforms(&badges(), 1500.0, 900.0).is_none());
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());

        gate.complete();
        assert!(gate.request());
    }
}
