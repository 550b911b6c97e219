//! Navbar shadow toggle.

/// Whether the navbar should carry its shadow at this scroll offset.
pub fn has_shadow(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!has_shadow(0.0, 50.0));
        assert!(!has_shadow(50.0, 50.0));
        assert!(has_shadow(50.5, 50.0));
        assert!(has_shadow(3000.0, 50.0));
    }
}
