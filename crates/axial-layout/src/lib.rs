//! Wrapping axis layout for Axial scene graphs.
//!
//! Arranges a container's children along a row or column, wraps overflowing
//! children into further rows along the cross axis, and shrinks content by
//! tiered auto-scaling and squishing until it fits.
//!
//! # Architecture
//!
//! 1. **Options**: per-child [`LayoutOptions`] resolved against the layout
//!    defaults by pure functions in [`policy`]
//! 2. **Packing**: [`row::pack_row`] greedily fills one row at a given
//!    scale, squish, and tier
//! 3. **Fitting**: [`solver::solve`] repeats packing with smaller scale,
//!    lower tiers, or more squish until the rows fit the cross axis
//! 4. **Placement**: [`placement::place`] aligns rows and children and is
//!    the only stage that writes to the host
//!
//! # Example
//!
//! ```
//! use axial_layout::{AxisLayout, SceneNode, SceneTree};
//! use glam::Vec2;
//!
//! let mut tree = SceneTree::new();
//! let menu = tree.add_root(SceneNode::new().with_content_size(Vec2::new(300.0, 40.0)));
//! for _ in 0..3 {
//!     tree.add_child(menu, SceneNode::new().with_content_size(Vec2::new(80.0, 40.0)))
//!         .unwrap();
//! }
//!
//! let summary = AxisLayout::row().with_gap(10.0).apply(&mut tree, menu);
//! assert_eq!(summary.rows.len(), 1);
//! ```

mod axis_layout;
mod geometry;
mod host;
mod options;
pub mod placement;
pub mod policy;
pub mod row;
pub mod solver;
mod tree;

pub use axial_core::{
    Axis, AxisAlignment, ButtonBehavior, LayoutError, NodeBehavior, NodeId, ToggleBehavior,
};
pub use axis_layout::{AxisLayout, LayoutSummary};
pub use geometry::{measure, node_axis, AxisPosition};
pub use host::LayoutHost;
pub use options::{LayoutOptions, DEFAULT_MIN_SCALE, DEFAULT_PRIORITY};
pub use tree::{SceneNode, SceneTree};
