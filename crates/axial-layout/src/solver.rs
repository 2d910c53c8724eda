//! Fitting rows into the container's cross axis.
//!
//! A fit pass partitions every child into rows at a given
//! [`FitState`]. While the rows overflow the cross axis, the solver
//! retries with a smaller scale in the active tier, then with the next
//! lower tier, and finally with a smaller squish. Each retry strictly
//! reduces scale or squish (or lowers the tier), and the loop is capped
//! at [`MAX_FIT_PASSES`]; when nothing else helps, the last pass is placed
//! as-is.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::host::LayoutHost;
use crate::options::DEFAULT_MIN_SCALE;
use crate::policy::{max_scale_of, min_scale_of};
use crate::row::{pack_row, Child, PackContext, Row};

/// Upper bound on fit passes for a single layout.
pub const MAX_FIT_PASSES: usize = 64;

/// Squish below which the solver stops compressing and accepts overflow.
pub const MIN_SQUISH: f32 = 0.01;

/// Parameters of one fit pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitState {
    /// Scale probed in the active tier
    pub scale: f32,
    /// Uniform compression applied on top of scale
    pub squish: f32,
    /// Active scale tier
    pub tier: i32,
}

/// Rows produced by one fit pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitPass {
    pub rows: Vec<Row>,
    /// Summed row cross lengths plus inter-row gaps
    pub total_cross_length: f32,
    /// Largest row scale-down factor still below the pass scale, or zero
    pub cross_scale_down_factor: f32,
    /// Largest row squish factor still below the pass squish, or zero
    pub cross_squish_factor: f32,
}

/// The accepted pass and the state it was packed at.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub state: FitState,
    pub pass: FitPass,
    /// Number of fit passes run, including the accepted one
    pub passes: usize,
}

/// Smallest min scale among children in `tier`.
pub fn min_scale_for_tier(children: &[Child], tier: i32) -> f32 {
    children
        .iter()
        .filter(|child| child.priority() == tier)
        .map(|child| min_scale_of(child.options()))
        .reduce(f32::min)
        .unwrap_or(DEFAULT_MIN_SCALE)
}

/// Largest max scale among children in `tier`, if the tier is populated.
pub fn max_scale_for_tier(children: &[Child], tier: i32) -> Option<f32> {
    children
        .iter()
        .filter(|child| child.priority() == tier)
        .map(|child| max_scale_of(child.options()))
        .reduce(f32::max)
}

/// The next populated tier below `tier` with a non-zero max scale,
/// together with that max scale.
pub fn lower_tier(children: &[Child], tier: i32) -> Option<(i32, f32)> {
    let mut tiers: SmallVec<[i32; 4]> = children
        .iter()
        .map(Child::priority)
        .filter(|&t| t < tier)
        .collect();
    tiers.sort_unstable_by(|a, b| b.cmp(a));
    tiers.dedup();

    tiers.into_iter().find_map(|t| {
        max_scale_for_tier(children, t)
            .filter(|&max| max != 0.0)
            .map(|max| (t, max))
    })
}

/// Partition every child into rows at `state`.
pub fn pack_rows<H: LayoutHost + ?Sized>(ctx: &PackContext<'_, H>, state: FitState) -> FitPass {
    let mut pass = FitPass::default();
    let mut cursor = 0;

    while cursor < ctx.children.len() {
        let row = pack_row(ctx, cursor, state.scale, state.squish, state.tier, false);
        debug_assert!(!row.is_empty(), "packed an empty row");
        cursor += row.len();

        if row.next_overflow_scale_down_factor > pass.cross_scale_down_factor
            && row.next_overflow_scale_down_factor < state.scale
        {
            pass.cross_scale_down_factor = row.next_overflow_scale_down_factor;
        }
        if row.next_overflow_squish_factor > pass.cross_squish_factor
            && row.next_overflow_squish_factor < state.squish
        {
            pass.cross_squish_factor = row.next_overflow_squish_factor;
        }

        pass.total_cross_length += row.cross_length;
        if !pass.rows.is_empty() {
            pass.total_cross_length += ctx.layout.gap;
        }
        pass.rows.push(row);
    }

    pass
}

/// Run fit passes from `initial` until the rows fit the cross axis or no
/// further reduction is possible.
pub fn solve<H: LayoutHost + ?Sized>(
    ctx: &PackContext<'_, H>,
    auto_scale: bool,
    initial: FitState,
) -> FitOutcome {
    let available_cross = ctx.available.cross_length;
    let mut state = initial;
    let mut passes = 0;

    loop {
        let pass = pack_rows(ctx, state);
        passes += 1;
        trace!(
            scale = state.scale,
            squish = state.squish,
            tier = state.tier,
            rows = pass.rows.len(),
            total_cross_length = pass.total_cross_length,
            "fit pass"
        );

        let overflowing =
            !ctx.layout.allow_cross_axis_overflow && pass.total_cross_length > available_cross;
        if !overflowing || passes >= MAX_FIT_PASSES {
            return FitOutcome { state, pass, passes };
        }

        if auto_scale {
            if let Some(next) = rescale(ctx.children, state, &pass) {
                state = next;
                continue;
            }
        }

        let ratio = available_cross / pass.total_cross_length;
        if ratio < pass.cross_squish_factor && ratio >= MIN_SQUISH {
            debug!(from = state.squish, to = ratio, "squishing rows");
            state.squish = ratio;
            continue;
        }

        return FitOutcome { state, pass, passes };
    }
}

/// Next state to try by scaling, or `None` when scaling cannot help.
fn rescale(children: &[Child], state: FitState, pass: &FitPass) -> Option<FitState> {
    let factor = pass.cross_scale_down_factor;
    // below the tier's min scale nothing changes any more, and an equal
    // factor would repeat the same pass
    if factor < min_scale_for_tier(children, state.tier) || factor == state.scale {
        let (tier, scale) = lower_tier(children, state.tier)?;
        debug!(from = state.tier, to = tier, scale, "dropping scale tier");
        Some(FitState { scale, tier, ..state })
    } else {
        Some(FitState { scale: factor, ..state })
    }
}
