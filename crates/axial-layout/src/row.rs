//! Greedy packing of children into one row (or column).

use axial_core::NodeId;
use glam::Vec2;
use smallvec::SmallVec;

use crate::axis_layout::AxisLayout;
use crate::geometry::{measure, AxisPosition};
use crate::host::LayoutHost;
use crate::options::LayoutOptions;
use crate::policy::{is_break_line, is_same_line, next_gap, priority_of, scale_for_child};

/// A child snapshotted at the start of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Child {
    pub id: NodeId,
    /// Options read once from the host
    pub options: Option<LayoutOptions>,
}

impl Child {
    /// Borrowed options, as the policy functions take them.
    pub fn options(&self) -> Option<&LayoutOptions> {
        self.options.as_ref()
    }

    /// Scale tier of this child.
    pub fn priority(&self) -> i32 {
        priority_of(self.options())
    }
}

/// Lowest and highest scale priority among a set of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBounds {
    /// Lowest tier; gaps only shrink with scale here
    pub min: i32,
    /// Highest tier; the solver starts here
    pub max: i32,
}

impl TierBounds {
    /// Tier bounds of `children`, or `None` when there are none.
    pub fn of(children: &[Child]) -> Option<Self> {
        let mut tiers = children.iter().map(Child::priority);
        let first = tiers.next()?;
        Some(tiers.fold(Self { min: first, max: first }, |bounds, tier| Self {
            min: bounds.min.min(tier),
            max: bounds.max.max(tier),
        }))
    }
}

/// Everything a packing pass reads. Holding only a shared borrow of the
/// host keeps exploration passes from mutating it.
pub struct PackContext<'a, H: LayoutHost + ?Sized> {
    pub host: &'a H,
    pub layout: &'a AxisLayout,
    pub children: &'a [Child],
    pub tiers: TierBounds,
    /// The container measured at unit scale
    pub available: AxisPosition,
}

impl<'a, H: LayoutHost + ?Sized> PackContext<'a, H> {
    /// Size a child is measured from before the probe scale applies.
    ///
    /// Auto-scaled children get their scale rewritten on placement, so
    /// they are measured from raw content size.
    pub fn base_size(&self, child: &Child) -> Vec2 {
        if self.layout.should_auto_scale(child.options()) {
            self.host.content_size(child.id)
        } else {
            self.host.scaled_content_size(child.id)
        }
    }
}

/// One packed row. Members index into the pass's child snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub members: SmallVec<[usize; 8]>,
    /// Accumulated axis length of members and gaps
    pub axis_length: f32,
    /// Largest cross length among members
    pub cross_length: f32,
    /// Half widths of the first and last member combined
    pub axis_ends_length: f32,
    /// Scale at which the child that ended this row would have fit
    pub next_overflow_scale_down_factor: f32,
    /// Squish at which the child that ended this row would have fit
    pub next_overflow_squish_factor: f32,
}

impl Row {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the row has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Node ids of the members in row order.
    pub fn node_ids<'c>(&'c self, children: &'c [Child]) -> impl Iterator<Item = NodeId> + 'c {
        self.members.iter().map(move |&index| children[index].id)
    }
}

/// Pack children starting at `cursor` into one row.
///
/// Children are measured at `scale_for_child(..) * squish`. When wrapping
/// is enabled and this is not a final pass, the row ends before a child
/// that would overflow the available axis length (unless it is the row's
/// first child or is marked same-line) and after a child marked
/// break-line. A final pass takes every remaining child and skips the
/// reversal and row-ends bookkeeping.
pub fn pack_row<H: LayoutHost + ?Sized>(
    ctx: &PackContext<'_, H>,
    cursor: usize,
    scale: f32,
    squish: f32,
    tier: i32,
    final_pass: bool,
) -> Row {
    let axis = ctx.layout.axis;
    let available = ctx.available.axis_length;
    let wrap = !final_pass && ctx.layout.grow_cross_axis;

    let mut next_axis_length = 0.0_f32;
    let mut axis_length = 0.0_f32;
    let mut cross_length = 0.0_f32;
    let mut members: SmallVec<[usize; 8]> = SmallVec::new();
    let mut prev: Option<&LayoutOptions> = None;

    for (index, child) in ctx.children.iter().enumerate().skip(cursor) {
        let opts = child.options();
        let child_scale = scale_for_child(opts, scale, tier);
        let pos = measure(ctx.host, child.id, axis, ctx.base_size(child) * (child_scale * squish));
        next_axis_length += pos.axis_length;

        // the first child always fits, otherwise an oversized child would
        // never be placed
        let overflows = next_axis_length > available && !members.is_empty() && !is_same_line(opts);
        if wrap && (overflows || is_break_line(prev)) {
            break;
        }

        if !members.is_empty() {
            let gap = next_gap(prev, opts, ctx.layout.gap);
            // gaps only shrink with scale once every tier is exhausted
            let gap = if tier == ctx.tiers.min {
                gap * scale * squish
            } else {
                gap * squish
            };
            next_axis_length += gap;
            axis_length += gap;
        }
        members.push(index);
        axis_length += pos.axis_length;
        if pos.cross_length > cross_length {
            cross_length = pos.cross_length;
        }
        prev = opts;
    }

    let mut axis_ends_length = 0.0;
    if !final_pass {
        if ctx.layout.axis_reverse {
            members.reverse();
        }
        if let (Some(&first), Some(&last)) = (members.first(), members.last()) {
            let first = ctx.base_size(&ctx.children[first]);
            let last = ctx.base_size(&ctx.children[last]);
            axis_ends_length = first.x * scale / 2.0 + last.x * scale / 2.0;
        }
    }

    let fit_factor = available / next_axis_length * scale * squish;
    Row {
        members,
        axis_length,
        cross_length,
        axis_ends_length,
        next_overflow_scale_down_factor: fit_factor,
        next_overflow_squish_factor: fit_factor,
    }
}
