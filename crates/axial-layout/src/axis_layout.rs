//! The axis layout: configuration and the `apply` entry point.
//!
//! Arranges a container's children along a row or column, wraps them into
//! further rows along the cross axis when allowed, and shrinks them by
//! tiered scale and squish until they fit.

use axial_core::{Axis, AxisAlignment, NodeId};
use tracing::debug_span;

use crate::geometry::node_axis;
use crate::host::LayoutHost;
use crate::options::LayoutOptions;
use crate::placement::place;
use crate::row::{pack_row, Child, PackContext, TierBounds};
use crate::solver::{max_scale_for_tier, solve, FitState};

/// Axis layout configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AxisLayout {
    /// Primary direction
    pub axis: Axis,
    /// Placement of children within a row
    pub axis_alignment: AxisAlignment,
    /// Placement of rows, and of children within a row's cross extent
    pub cross_alignment: AxisAlignment,
    /// Default spacing between children and between rows
    pub gap: f32,
    /// Reverse child order within each row
    pub axis_reverse: bool,
    /// Reverse row order
    pub cross_reverse: bool,
    /// Auto-scale default for children without an override
    pub auto_scale: bool,
    /// Allow wrapping into multiple rows
    pub grow_cross_axis: bool,
    /// Grow the container's cross size to fit instead of shrinking content
    pub allow_cross_axis_overflow: bool,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self::new(Axis::Row)
    }
}

/// What a call to [`AxisLayout::apply`] committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSummary {
    /// Node ids per row, in placement order
    pub rows: Vec<Vec<NodeId>>,
    /// Fit passes run before placement
    pub passes: usize,
    /// Scale of the accepted pass
    pub scale: f32,
    /// Squish of the accepted pass
    pub squish: f32,
    /// Scale tier of the accepted pass
    pub tier: i32,
    /// Content still overflows the cross axis after fitting
    pub overflowing: bool,
}

impl AxisLayout {
    /// Create a layout along `axis` with default settings.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            axis_alignment: AxisAlignment::Center,
            cross_alignment: AxisAlignment::Center,
            gap: 5.0,
            axis_reverse: false,
            cross_reverse: false,
            auto_scale: true,
            grow_cross_axis: false,
            allow_cross_axis_overflow: true,
        }
    }

    /// Create a horizontal layout.
    pub fn row() -> Self {
        Self::new(Axis::Row)
    }

    /// Create a vertical layout.
    pub fn column() -> Self {
        Self::new(Axis::Column)
    }

    /// Set the primary axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the alignment of children within a row.
    pub fn with_axis_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.axis_alignment = alignment;
        self
    }

    /// Set the cross-axis alignment.
    pub fn with_cross_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Set the default gap.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Reverse child order within rows.
    pub fn with_axis_reverse(mut self, reverse: bool) -> Self {
        self.axis_reverse = reverse;
        self
    }

    /// Reverse row order.
    pub fn with_cross_reverse(mut self, reverse: bool) -> Self {
        self.cross_reverse = reverse;
        self
    }

    /// Set the auto-scale default.
    pub fn with_auto_scale(mut self, enabled: bool) -> Self {
        self.auto_scale = enabled;
        self
    }

    /// Allow or forbid wrapping into multiple rows.
    pub fn with_grow_cross_axis(mut self, grow: bool) -> Self {
        self.grow_cross_axis = grow;
        self
    }

    /// Allow the container to grow along the cross axis.
    pub fn with_cross_axis_overflow(mut self, allow: bool) -> Self {
        self.allow_cross_axis_overflow = allow;
        self
    }

    /// Whether a child with `opts` is auto-scaled by this layout.
    pub fn should_auto_scale(&self, opts: Option<&LayoutOptions>) -> bool {
        opts.and_then(|o| o.auto_scale).unwrap_or(self.auto_scale)
    }

    /// Lay out the children of `container` and write their positions and
    /// scales back to the host.
    ///
    /// Never fails: unknown containers and empty child lists are a no-op,
    /// and content that cannot be made to fit is placed best-effort.
    pub fn apply<H: LayoutHost + ?Sized>(&self, host: &mut H, container: NodeId) -> LayoutSummary {
        let children = snapshot(host, container);
        let _span = debug_span!("axis_layout", %container, children = children.len()).entered();

        let Some(tiers) = TierBounds::of(&children) else {
            return LayoutSummary {
                scale: 1.0,
                squish: 1.0,
                ..LayoutSummary::default()
            };
        };
        let auto_scale = children.iter().any(|child| self.should_auto_scale(child.options()));
        let initial = FitState {
            scale: max_scale_for_tier(&children, tiers.max).unwrap_or(1.0),
            squish: 1.0,
            tier: tiers.max,
        };
        let available = node_axis(&*host, container, self.axis, 1.0);

        let outcome = {
            let ctx = PackContext {
                host: &*host,
                layout: self,
                children: &children,
                tiers,
                available,
            };
            solve(&ctx, auto_scale, initial)
        };

        place(host, self, container, &children, available, outcome)
    }

    /// Axis length of every child of `container` packed into a single row
    /// at the top tier's max scale, ignoring wrapping and breaks.
    pub fn natural_axis_length<H: LayoutHost + ?Sized>(&self, host: &H, container: NodeId) -> f32 {
        let children = snapshot(host, container);
        let Some(tiers) = TierBounds::of(&children) else {
            return 0.0;
        };
        let scale = max_scale_for_tier(&children, tiers.max).unwrap_or(1.0);
        let ctx = PackContext {
            host,
            layout: self,
            children: &children,
            tiers,
            available: node_axis(host, container, self.axis, 1.0),
        };
        pack_row(&ctx, 0, scale, 1.0, tiers.max, true).axis_length
    }
}

fn snapshot<H: LayoutHost + ?Sized>(host: &H, container: NodeId) -> Vec<Child> {
    host.children(container)
        .into_iter()
        .map(|id| Child {
            id,
            options: host.layout_options(id),
        })
        .collect()
}
