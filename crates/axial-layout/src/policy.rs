//! Gap and scale resolution.
//!
//! Pure functions over optional per-child options. A missing
//! [`LayoutOptions`] resolves exactly like `LayoutOptions::default()`.

use crate::options::{LayoutOptions, DEFAULT_MIN_SCALE, DEFAULT_PRIORITY};

/// Declared min scale, or [`DEFAULT_MIN_SCALE`].
pub fn min_scale_of(opts: Option<&LayoutOptions>) -> f32 {
    opts.map_or(DEFAULT_MIN_SCALE, |o| o.min_scale)
}

/// Declared max scale, or `1.0`.
pub fn max_scale_of(opts: Option<&LayoutOptions>) -> f32 {
    opts.map_or(1.0, |o| o.max_scale)
}

/// Declared relative scale, or `1.0`.
pub fn relative_scale_of(opts: Option<&LayoutOptions>) -> f32 {
    opts.map_or(1.0, |o| o.relative_scale)
}

/// Declared scale tier, or [`DEFAULT_PRIORITY`].
pub fn priority_of(opts: Option<&LayoutOptions>) -> i32 {
    opts.map_or(DEFAULT_PRIORITY, |o| o.scale_priority)
}

/// Whether a new row starts after this child.
pub fn is_break_line(opts: Option<&LayoutOptions>) -> bool {
    opts.is_some_and(|o| o.break_line)
}

/// Whether the child must stay in the current row.
pub fn is_same_line(opts: Option<&LayoutOptions>) -> bool {
    opts.is_some_and(|o| o.same_line)
}

/// Effective gap between two neighbours: the larger of the declared
/// requests, or `default` when neither side declares one.
pub fn resolve_gap(prev_next_gap: Option<f32>, next_prev_gap: Option<f32>, default: f32) -> f32 {
    let gap = match (prev_next_gap, next_prev_gap) {
        (Some(a), Some(b)) if a < b => Some(b),
        (Some(a), _) => Some(a),
        (None, b) => b,
    };
    gap.unwrap_or(default)
}

/// Gap between the child with options `now` and the one after it.
pub fn next_gap(now: Option<&LayoutOptions>, next: Option<&LayoutOptions>, default: f32) -> f32 {
    resolve_gap(
        now.and_then(|o| o.next_gap),
        next.and_then(|o| o.prev_gap),
        default,
    )
}

/// Clamp into `[min, max]`, checking `min` first so an inverted range
/// always yields `max`.
pub fn clamp_scale(scale: f32, min: f32, max: f32) -> f32 {
    let mut scale = scale;
    if scale < min {
        scale = min;
    }
    if scale > max {
        scale = max;
    }
    scale
}

/// Scale a child gets while the solver sweeps tier `tier` at `scale`.
///
/// Children in lower tiers have not been reached yet and keep their max
/// scale; children in higher tiers are already exhausted and sit at their
/// min scale.
pub fn scale_for_child(opts: Option<&LayoutOptions>, scale: f32, tier: i32) -> f32 {
    let child_tier = priority_of(opts);
    let relative = relative_scale_of(opts);
    if tier > child_tier {
        max_scale_of(opts) * relative
    } else if tier == child_tier {
        clamp_scale(scale, min_scale_of(opts), max_scale_of(opts)) * relative
    } else {
        min_scale_of(opts) * relative
    }
}
