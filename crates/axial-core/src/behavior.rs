//! Capabilities for child kinds whose own bounds are not what the layout
//! should see.
//!
//! A host attaches a [`NodeBehavior`] to a node when that node needs a
//! measurement override or wants to hear about the scale the layout
//! committed to it. The solver stays shape-agnostic and only talks to the
//! trait.

use glam::Vec2;

/// Optional hooks a node kind can implement for the layout solver.
pub trait NodeBehavior: std::fmt::Debug {
    /// Size the layout should measure instead of the node's scaled content
    /// size. The returned size is used as-is, independent of any scale the
    /// solver is probing.
    fn measured_size(&self) -> Option<Vec2> {
        None
    }

    /// Called after the layout wrote a new scale onto the node.
    fn scale_committed(&mut self, _scale: f32) {}
}

/// Two-state toggle control. Its own bounds are unreliable, so the layout
/// measures the scaled size of its "off" visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleBehavior {
    /// Scaled content size of the off-state visual
    pub off_size: Vec2,
}

impl ToggleBehavior {
    /// Create a toggle measured by its off-state size.
    pub fn new(off_size: Vec2) -> Self {
        Self { off_size }
    }
}

impl NodeBehavior for ToggleBehavior {
    fn measured_size(&self) -> Option<Vec2> {
        Some(self.off_size)
    }
}

/// Pressable button that animates around a base scale. Hit-testing and the
/// press animation read `base_scale`, so it must follow the layout scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonBehavior {
    /// Scale the button returns to when released
    pub base_scale: f32,
}

impl Default for ButtonBehavior {
    fn default() -> Self {
        Self { base_scale: 1.0 }
    }
}

impl NodeBehavior for ButtonBehavior {
    fn scale_committed(&mut self, scale: f32) {
        self.base_scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reports_off_size() {
        let toggle = ToggleBehavior::new(Vec2::new(30.0, 20.0));
        assert_eq!(toggle.measured_size(), Some(Vec2::new(30.0, 20.0)));
    }

    #[test]
    fn test_button_tracks_committed_scale() {
        let mut button = ButtonBehavior::default();
        assert!(button.measured_size().is_none());
        button.scale_committed(0.8);
        assert!((button.base_scale - 0.8).abs() < 0.001);
    }
}
