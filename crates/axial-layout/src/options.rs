//! Per-child layout options.
//!
//! Every field that can inherit from the layout is optional; an absent
//! [`LayoutOptions`] behaves exactly like `LayoutOptions::default()`.

use axial_core::LayoutError;

/// Minimum scale a child is shrunk to when it does not say otherwise.
pub const DEFAULT_MIN_SCALE: f32 = 0.65;

/// Scale priority tier of children without options.
pub const DEFAULT_PRIORITY: i32 = 0;

/// Options a child carries for the axis layout of its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Smallest scale auto-scaling may assign
    pub min_scale: f32,
    /// Largest scale auto-scaling may assign
    pub max_scale: f32,
    /// Multiplier applied after the tier-based scale is chosen
    pub relative_scale: f32,
    /// Auto-scale override; `None` inherits the layout default
    pub auto_scale: Option<bool>,
    /// Axis length override, replacing the measured length
    pub length: Option<f32>,
    /// Gap requested before this child
    pub prev_gap: Option<f32>,
    /// Gap requested after this child
    pub next_gap: Option<f32>,
    /// Start a new row after this child
    pub break_line: bool,
    /// Never start a new row before this child
    pub same_line: bool,
    /// Scale tier; higher tiers shrink first
    pub scale_priority: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: 1.0,
            relative_scale: 1.0,
            auto_scale: None,
            length: None,
            prev_gap: None,
            next_gap: None,
            break_line: false,
            same_line: false,
            scale_priority: DEFAULT_PRIORITY,
        }
    }
}

impl LayoutOptions {
    /// Create options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum scale.
    pub fn with_min_scale(mut self, scale: f32) -> Self {
        self.min_scale = scale;
        self
    }

    /// Set the maximum scale.
    pub fn with_max_scale(mut self, scale: f32) -> Self {
        self.max_scale = scale;
        self
    }

    /// Set both scale bounds.
    pub fn with_scale_range(mut self, min: f32, max: f32) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Set the relative scale multiplier.
    pub fn with_relative_scale(mut self, scale: f32) -> Self {
        self.relative_scale = scale;
        self
    }

    /// Override (or with `None`, inherit) the layout's auto-scale default.
    pub fn with_auto_scale(mut self, enabled: impl Into<Option<bool>>) -> Self {
        self.auto_scale = enabled.into();
        self
    }

    /// Override the measured axis length.
    pub fn with_length(mut self, length: impl Into<Option<f32>>) -> Self {
        self.length = length.into();
        self
    }

    /// Set the gap requested before this child.
    pub fn with_prev_gap(mut self, gap: impl Into<Option<f32>>) -> Self {
        self.prev_gap = gap.into();
        self
    }

    /// Set the gap requested after this child.
    pub fn with_next_gap(mut self, gap: impl Into<Option<f32>>) -> Self {
        self.next_gap = gap.into();
        self
    }

    /// Request the same gap on both sides.
    pub fn with_gap(self, gap: impl Into<Option<f32>>) -> Self {
        let gap = gap.into();
        self.with_prev_gap(gap).with_next_gap(gap)
    }

    /// Force a row break after this child.
    pub fn with_break_line(mut self, enable: bool) -> Self {
        self.break_line = enable;
        self
    }

    /// Forbid a row break before this child.
    pub fn with_same_line(mut self, enable: bool) -> Self {
        self.same_line = enable;
        self
    }

    /// Set the scale priority tier.
    pub fn with_scale_priority(mut self, priority: i32) -> Self {
        self.scale_priority = priority;
        self
    }

    /// Check the scale bounds for values the solver would silently
    /// tolerate.
    ///
    /// The solver never calls this: an inverted range is clamped to the
    /// max scale and still produces a layout. Hosts can use it to surface
    /// authoring mistakes early.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("relative_scale", self.relative_scale),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::NonFiniteValue { field, value });
            }
        }
        if self.min_scale > self.max_scale {
            return Err(LayoutError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LayoutOptions::default();
        assert!((opts.min_scale - DEFAULT_MIN_SCALE).abs() < 0.001);
        assert!((opts.max_scale - 1.0).abs() < 0.001);
        assert!((opts.relative_scale - 1.0).abs() < 0.001);
        assert_eq!(opts.auto_scale, None);
        assert_eq!(opts.scale_priority, DEFAULT_PRIORITY);
        assert!(!opts.break_line);
        assert!(!opts.same_line);
    }

    #[test]
    fn test_builder_chain() {
        let opts = LayoutOptions::new()
            .with_scale_range(0.5, 2.0)
            .with_auto_scale(false)
            .with_gap(4.0)
            .with_length(None)
            .with_break_line(true)
            .with_scale_priority(3);

        assert!((opts.min_scale - 0.5).abs() < 0.001);
        assert!((opts.max_scale - 2.0).abs() < 0.001);
        assert_eq!(opts.auto_scale, Some(false));
        assert_eq!(opts.prev_gap, Some(4.0));
        assert_eq!(opts.next_gap, Some(4.0));
        assert_eq!(opts.length, None);
        assert!(opts.break_line);
        assert_eq!(opts.scale_priority, 3);
    }

    #[test]
    fn test_validate_inverted_range() {
        let opts = LayoutOptions::new().with_scale_range(1.5, 0.5);
        assert_eq!(
            opts.validate(),
            Err(LayoutError::InvalidScaleRange { min: 1.5, max: 0.5 })
        );
        assert!(LayoutOptions::default().validate().is_ok());
    }

    #[test]
    fn test_validate_non_finite() {
        let opts = LayoutOptions::new().with_relative_scale(f32::INFINITY);
        assert!(matches!(
            opts.validate(),
            Err(LayoutError::NonFiniteValue { field: "relative_scale", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let opts: LayoutOptions =
            serde_json::from_str(r#"{ "max_scale": 2.0, "break_line": true }"#).unwrap();
        assert!((opts.max_scale - 2.0).abs() < 0.001);
        assert!((opts.min_scale - DEFAULT_MIN_SCALE).abs() < 0.001);
        assert!(opts.break_line);
    }
}
