//! The seam between the solver and a host scene graph.

use axial_core::NodeId;
use glam::Vec2;

use crate::options::LayoutOptions;

/// Scene-graph capabilities the axis layout consumes and mutates.
///
/// Queries on unknown nodes should return neutral values (no children,
/// zero size, unit scale) rather than panic; the solver treats them as
/// empty.
pub trait LayoutHost {
    /// Ordered children of `node`, snapshotted by the caller.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Unscaled content size.
    fn content_size(&self, node: NodeId) -> Vec2;

    /// Anchor point as a fraction of the content size.
    fn anchor_point(&self, node: NodeId) -> Vec2;

    /// Current uniform scale.
    fn scale(&self, node: NodeId) -> f32;

    /// Layout options attached to `node`, if any.
    fn layout_options(&self, node: NodeId) -> Option<LayoutOptions>;

    /// Measurement override for child kinds whose bounds are unreliable.
    fn measured_size_override(&self, _node: NodeId) -> Option<Vec2> {
        None
    }

    fn set_position(&mut self, node: NodeId, position: Vec2);

    fn set_scale(&mut self, node: NodeId, scale: f32);

    fn set_content_size(&mut self, node: NodeId, size: Vec2);

    /// Notification sent right after the layout committed `scale`.
    fn scale_committed(&mut self, _node: NodeId, _scale: f32) {}

    /// Content size multiplied by the current scale.
    fn scaled_content_size(&self, node: NodeId) -> Vec2 {
        self.content_size(node) * self.scale(node)
    }
}
