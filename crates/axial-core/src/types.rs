//! Core value types for Axial scene graphs.

use glam::Vec2;

/// Unique identifier for a node in a host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primary direction children are laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal layout; rows wrap along the vertical axis
    #[default]
    Row,
    /// Vertical layout; columns wrap along the horizontal axis
    Column,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Component of `v` along this axis.
    pub fn main_of(self, v: Vec2) -> f32 {
        match self {
            Axis::Row => v.x,
            Axis::Column => v.y,
        }
    }

    /// Component of `v` along the cross axis.
    pub fn cross_of(self, v: Vec2) -> f32 {
        self.cross().main_of(v)
    }

    /// Build a vector from an axis component and a cross component.
    pub fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Row => Vec2::new(main, cross),
            Axis::Column => Vec2::new(cross, main),
        }
    }
}

/// Alignment of children (on the axis) or rows (on the cross axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisAlignment {
    /// Pack against the start edge
    Start,
    /// Center as a block
    #[default]
    Center,
    /// Pack against the end edge
    End,
    /// Distribute with equal space per item
    Even,
}
