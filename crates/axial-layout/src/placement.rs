//! Committing an accepted fit pass to the host.
//!
//! This is the only stage that writes positions, scales, and the
//! container size. The edge-correction terms (the `1.5` row factor and
//! the per-child ends share) are calibrated against the reference engine
//! and kept as-is for pixel compatibility.

use axial_core::{AxisAlignment, NodeId};
use tracing::debug;

use crate::axis_layout::{AxisLayout, LayoutSummary};
use crate::geometry::{node_axis, AxisPosition};
use crate::host::LayoutHost;
use crate::options::{LayoutOptions, DEFAULT_MIN_SCALE};
use crate::policy::{next_gap, scale_for_child};
use crate::row::{Child, Row};
use crate::solver::{FitOutcome, FitPass, FitState};

/// Calibrated multiplier for the row-ends correction on the cross axis.
const ROW_ENDS_CROSS_FACTOR: f32 = 1.5;

/// Scale, squish, and axis length a single row is placed with.
///
/// A row that still overflows the axis is rescaled (when the layout
/// auto-scales) and then squished on its own, independent of the other
/// rows.
pub fn fit_row_to_axis(
    layout: &AxisLayout,
    row: &Row,
    available_axis: f32,
    scale: f32,
    squish: f32,
) -> (f32, f32, f32) {
    let mut row_scale = scale;
    let mut row_squish = squish;
    let mut axis_length = row.axis_length;

    if axis_length > available_axis && scale * squish > 0.0 {
        axis_length /= scale * squish;
        if layout.auto_scale {
            row_scale = available_axis / axis_length;
            if row_scale < DEFAULT_MIN_SCALE {
                row_scale = DEFAULT_MIN_SCALE;
            }
            axis_length *= row_scale;
        }
        // squishing has to account for the row ends
        if axis_length > available_axis {
            row_squish = available_axis / axis_length;
        }
        axis_length *= row_squish;
    }

    (row_scale, row_squish, axis_length)
}

/// Position every child of the accepted pass and write the results back.
pub fn place<H: LayoutHost + ?Sized>(
    host: &mut H,
    layout: &AxisLayout,
    container: NodeId,
    children: &[Child],
    available: AxisPosition,
    outcome: FitOutcome,
) -> LayoutSummary {
    let FitOutcome { state, pass, passes } = outcome;
    let FitState { scale, squish, tier } = state;
    let FitPass {
        mut rows,
        mut total_cross_length,
        ..
    } = pass;
    let mut available = available;

    let overflowing =
        !layout.allow_cross_axis_overflow && total_cross_length > available.cross_length;

    if layout.cross_reverse {
        rows.reverse();
    }

    if layout.allow_cross_axis_overflow {
        available.cross_length = total_cross_length;
        host.set_content_size(
            container,
            layout.axis.pack(available.axis_length, total_cross_length),
        );
    }

    let mut column_squish = 1.0_f32;
    if overflowing {
        column_squish = available.cross_length / total_cross_length;
        total_cross_length *= column_squish;
    }

    let rows_ends_length = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => first.cross_length / 2.0 + last.cross_length / 2.0,
        _ => 0.0,
    };
    let rows_edge = rows_ends_length * ROW_ENDS_CROSS_FACTOR * scale * (1.0 - column_squish);

    let mut row_cross_pos = match layout.cross_alignment {
        AxisAlignment::Start => total_cross_length - rows_edge,
        AxisAlignment::Even => {
            total_cross_length = available.cross_length;
            total_cross_length - rows_edge
        }
        AxisAlignment::Center => {
            available.cross_length / 2.0 + total_cross_length / 2.0 - rows_edge
        }
        AxisAlignment::End => available.cross_length - rows_edge,
    };

    let row_count = rows.len() as f32;
    let child_count = children.len() as f32;
    let row_even_space = available.cross_length / row_count;

    for row in &rows {
        if layout.cross_alignment == AxisAlignment::Even {
            row_cross_pos -= row_even_space / 2.0 + row.cross_length / 2.0;
        } else {
            row_cross_pos -= row.cross_length * column_squish;
        }

        let (row_scale, row_squish, row_axis_length) =
            fit_row_to_axis(layout, row, available.axis_length, scale, squish);

        let mut row_axis_pos = match layout.axis_alignment {
            AxisAlignment::Start | AxisAlignment::Even => 0.0,
            AxisAlignment::Center => available.axis_length / 2.0 - row_axis_length / 2.0,
            AxisAlignment::End => available.axis_length - row_axis_length,
        };

        let even_space = available.axis_length / row.len() as f32;

        let mut prev: Option<&LayoutOptions> = None;
        for (ix, &member) in row.members.iter().enumerate() {
            let child = &children[member];
            let opts = child.options();

            let mut child_scale = row_scale;
            if layout.should_auto_scale(opts) {
                child_scale = scale_for_child(opts, child_scale, tier);
                host.set_scale(child.id, child_scale);
                host.scale_committed(child.id, child_scale);
            }

            if ix == 0 {
                row_axis_pos += row.axis_ends_length * child_scale / 2.0 * (1.0 - row_squish);
            }
            let ends_share = row.axis_ends_length * child_scale * (1.0 - row_squish) / child_count;

            let pos = node_axis(&*host, child.id, layout.axis, row_squish);
            let axis_pos;
            if layout.axis_alignment == AxisAlignment::Even {
                axis_pos =
                    row_axis_pos + even_space / 2.0 - pos.axis_length * (0.5 - pos.axis_anchor);
                row_axis_pos += even_space - ends_share;
            } else {
                if ix > 0 {
                    row_axis_pos += next_gap(prev, opts, layout.gap) * child_scale * row_squish;
                }
                axis_pos = row_axis_pos + pos.axis_length * pos.axis_anchor;
                row_axis_pos += pos.axis_length - ends_share;
            }

            let cross_offset = match layout.cross_alignment {
                AxisAlignment::Start => pos.cross_length * pos.cross_anchor,
                AxisAlignment::Center | AxisAlignment::Even => {
                    row.cross_length / 2.0 - pos.cross_length * (0.5 - pos.cross_anchor)
                }
                AxisAlignment::End => {
                    row.cross_length - pos.cross_length * (1.0 - pos.cross_anchor)
                }
            };

            host.set_position(child.id, layout.axis.pack(axis_pos, row_cross_pos + cross_offset));
            prev = opts;
        }

        if layout.cross_alignment == AxisAlignment::Even {
            row_cross_pos -= row_even_space / 2.0 - row.cross_length / 2.0 - rows_edge / row_count;
        } else {
            row_cross_pos -= layout.gap * column_squish - rows_edge / row_count;
        }
    }

    debug!(
        rows = rows.len(),
        passes,
        scale,
        squish,
        tier,
        overflowing,
        "placed axis layout"
    );

    LayoutSummary {
        rows: rows.iter().map(|row| row.node_ids(children).collect()).collect(),
        passes,
        scale,
        squish,
        tier,
        overflowing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn row(axis_length: f32) -> Row {
        Row {
            members: smallvec![0, 1],
            axis_length,
            cross_length: 10.0,
            axis_ends_length: 0.0,
            next_overflow_scale_down_factor: 1.0,
            next_overflow_squish_factor: 1.0,
        }
    }

    #[test]
    fn test_fitting_row_is_untouched() {
        let layout = AxisLayout::row();
        let (scale, squish, length) = fit_row_to_axis(&layout, &row(80.0), 100.0, 1.0, 1.0);
        assert!((scale - 1.0).abs() < 0.001);
        assert!((squish - 1.0).abs() < 0.001);
        assert!((length - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_overflowing_row_rescales() {
        let layout = AxisLayout::row();
        let (scale, squish, length) = fit_row_to_axis(&layout, &row(125.0), 100.0, 1.0, 1.0);
        assert!((scale - 0.8).abs() < 0.001);
        assert!((squish - 1.0).abs() < 0.001);
        assert!((length - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_rescale_floor_then_squish() {
        let layout = AxisLayout::row();
        let (scale, squish, length) = fit_row_to_axis(&layout, &row(200.0), 100.0, 1.0, 1.0);
        assert!((scale - DEFAULT_MIN_SCALE).abs() < 0.001);
        assert!((squish - 100.0 / 130.0).abs() < 0.001);
        assert!((length - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_without_auto_scale_only_squishes() {
        let layout = AxisLayout::row().with_auto_scale(false);
        let (scale, squish, length) = fit_row_to_axis(&layout, &row(200.0), 100.0, 1.0, 1.0);
        assert!((scale - 1.0).abs() < 0.001);
        assert!((squish - 0.5).abs() < 0.001);
        assert!((length - 100.0).abs() < 0.001);
    }
}
