//! Axis-relative measurement of nodes.
//!
//! The solver never reads widths or heights directly; it asks for lengths
//! and anchors along the layout axis and its cross axis, so Row and Column
//! layouts share one code path.

use axial_core::{Axis, NodeId};
use glam::Vec2;

use crate::host::LayoutHost;

/// A node measured relative to a layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisPosition {
    /// Length along the axis
    pub axis_length: f32,
    /// Anchor fraction along the axis
    pub axis_anchor: f32,
    /// Length along the cross axis
    pub cross_length: f32,
    /// Anchor fraction along the cross axis
    pub cross_anchor: f32,
}

/// Measure `node` at its current scale multiplied by `scale`.
pub fn node_axis<H: LayoutHost + ?Sized>(
    host: &H,
    node: NodeId,
    axis: Axis,
    scale: f32,
) -> AxisPosition {
    measure(host, node, axis, host.scaled_content_size(node) * scale)
}

/// Measure `node` from an already scaled size.
///
/// An axis length override from the node's options replaces the measured
/// axis length, and a host measurement override replaces the size itself.
/// Negative lengths are clamped to zero.
pub fn measure<H: LayoutHost + ?Sized>(
    host: &H,
    node: NodeId,
    axis: Axis,
    scaled_size: Vec2,
) -> AxisPosition {
    let size = host.measured_size_override(node).unwrap_or(scaled_size);
    let length = host.layout_options(node).and_then(|opts| opts.length);
    let anchor = host.anchor_point(node);

    AxisPosition {
        axis_length: length.unwrap_or(axis.main_of(size)).max(0.0),
        axis_anchor: axis.main_of(anchor),
        cross_length: axis.cross_of(size).max(0.0),
        cross_anchor: axis.cross_of(anchor),
    }
}
