// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use treeline_breakpoints::{Breakpoint, BreakpointError, SegmentTable};

/// Responsive configuration: breakpoints plus width and scaling policy.
///
/// A configuration is supplied once and compiled into a
/// [`SegmentTable`]; changing it requires a full recompile (see
/// [`crate::ScreenModel::set_config`]).
///
/// - `min_width` is the resize/scale floor applied when the declared
///   breakpoints start higher than it.
/// - `max_width`, when set, caps the screen width (with controlled overflow
///   inside auto-scale ranges past the cap).
/// - `default_scale` selects whether widths below the declared breakpoints
///   auto-scale (`true`) or resize (`false`, the default), at
///   `default_scale_factor`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenConfig {
    breakpoints: Vec<Breakpoint>,
    min_width: f64,
    max_width: Option<f64>,
    default_scale: bool,
    default_scale_factor: f64,
}

impl ScreenConfig {
    /// Creates a configuration with the given breakpoints and minimum width.
    ///
    /// Maximum width is unset and the default behavior is resize at scale
    /// factor `1.0`.
    #[must_use]
    pub fn new(breakpoints: impl Into<Vec<Breakpoint>>, min_width: f64) -> Self {
        Self {
            breakpoints: breakpoints.into(),
            min_width,
            max_width: None,
            default_scale: false,
            default_scale_factor: 1.0,
        }
    }

    /// Caps the screen width at `max_width`.
    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Selects auto-scaling as the default behavior below the declared
    /// breakpoints.
    #[must_use]
    pub fn with_default_scale(mut self, default_scale: bool) -> Self {
        self.default_scale = default_scale;
        self
    }

    /// Sets the scale factor of the default behavior.
    #[must_use]
    pub fn with_default_scale_factor(mut self, factor: f64) -> Self {
        self.default_scale_factor = factor;
        self
    }

    /// Returns the declared breakpoints.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Returns the minimum width floor.
    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Returns the maximum width cap, if any.
    #[must_use]
    pub fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    /// Returns whether widths below the declared breakpoints auto-scale.
    #[must_use]
    pub fn default_scale(&self) -> bool {
        self.default_scale
    }

    /// Returns the default scale factor.
    #[must_use]
    pub fn default_scale_factor(&self) -> f64 {
        self.default_scale_factor
    }

    /// Returns the synthetic breakpoint describing behavior below the
    /// declared thresholds: resize or auto-scale at `min_width`.
    ///
    /// Errors if `min_width` or `default_scale_factor` is invalid; this is
    /// where configuration validation surfaces.
    pub fn default_breakpoint(&self) -> Result<Breakpoint, BreakpointError> {
        let bp = if self.default_scale {
            Breakpoint::auto_scale(self.min_width)?
        } else {
            Breakpoint::resize(self.min_width)?
        };
        bp.with_scale_factor(self.default_scale_factor)
    }

    /// Compiles this configuration into a segment table.
    pub fn compile(&self) -> Result<SegmentTable, BreakpointError> {
        let default = self.default_breakpoint()?;
        Ok(SegmentTable::compile(
            &self.breakpoints,
            self.min_width,
            &default,
        ))
    }
}

#[cfg(test)]
mod tests {
    use treeline_breakpoints::{Behavior, Breakpoint, BreakpointError};

    use super::ScreenConfig;

    #[test]
    fn default_breakpoint_follows_scale_policy() {
        let config = ScreenConfig::new([], 450.0);
        let default = config.default_breakpoint().unwrap();
        assert_eq!(default.behavior(), Behavior::Resize);
        assert_eq!(default.position(), 450.0);
        assert_eq!(default.scale_factor(), 1.0);

        let config = ScreenConfig::new([], 450.0)
            .with_default_scale(true)
            .with_default_scale_factor(1.5);
        let default = config.default_breakpoint().unwrap();
        assert_eq!(default.behavior(), Behavior::AutoScale);
        assert_eq!(default.scale_factor(), 1.5);
    }

    #[test]
    fn invalid_policy_is_rejected_at_compile() {
        let config = ScreenConfig::new([], -1.0);
        assert_eq!(
            config.compile().unwrap_err(),
            BreakpointError::InvalidPosition(-1.0)
        );

        let config = ScreenConfig::new([], 450.0).with_default_scale_factor(0.0);
        assert_eq!(
            config.compile().unwrap_err(),
            BreakpointError::InvalidScaleFactor(0.0)
        );
    }

    #[test]
    fn compile_produces_a_total_table() {
        let config = ScreenConfig::new(
            [Breakpoint::resize(600.0).unwrap()],
            450.0,
        );
        let table = config.compile().unwrap();
        assert_eq!(table.segments().first().map(|s| s.position()), Some(0.0));
        assert!(table.active_segment(10_000.0).is_some());
    }
}
