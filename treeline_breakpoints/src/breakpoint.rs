// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Layout behavior declared by a [`Breakpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Content stretches 1:1 with the container width.
    Resize,
    /// Content is composed at a fixed simulated width and visually scaled up
    /// to fill the container, preserving aspect ratio.
    AutoScale,
    /// Transitional auto-scale that only takes effect while shrinking from a
    /// larger breakpoint; following a resize breakpoint it retroactively
    /// converts that earlier range to auto-scaling.
    AutoScaleDown,
    /// Pure naming marker. Inherits the behavior of the preceding breakpoint
    /// once compiled and never introduces scaling behavior of its own.
    Tag,
}

impl Behavior {
    /// Returns `true` for the auto-scaling behaviors
    /// ([`Behavior::AutoScale`] and [`Behavior::AutoScaleDown`]).
    #[must_use]
    pub fn is_auto_scaling(self) -> bool {
        matches!(self, Self::AutoScale | Self::AutoScaleDown)
    }

    /// Returns `true` for [`Behavior::Tag`].
    #[must_use]
    pub fn is_tag(self) -> bool {
        self == Self::Tag
    }
}

/// Error rejecting an invalid [`Breakpoint`] declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum BreakpointError {
    /// The position was negative or not finite.
    InvalidPosition(f64),
    /// The scale factor was zero, negative, or not finite.
    InvalidScaleFactor(f64),
    /// A tag breakpoint was declared without a name.
    UnnamedTag,
}

impl fmt::Display for BreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(position) => {
                write!(f, "breakpoint position {position} must be finite and >= 0")
            }
            Self::InvalidScaleFactor(factor) => {
                write!(f, "scale factor {factor} must be finite and > 0")
            }
            Self::UnnamedTag => write!(f, "tag breakpoints require a non-empty name"),
        }
    }
}

impl core::error::Error for BreakpointError {}

/// Immutable declaration of one breakpoint: a width threshold, an optional
/// semantic name, a [`Behavior`], and a scale factor.
///
/// Breakpoints are built with one of four constructors, each fixing the
/// behavior: [`Breakpoint::resize`], [`Breakpoint::auto_scale`],
/// [`Breakpoint::auto_scale_down`], and [`Breakpoint::tag`]. The scale factor
/// defaults to `1.0` and can be changed with
/// [`Breakpoint::with_scale_factor`]; names (device classes such as
/// `"MOBILE"` or `"TABLET"`) are attached with [`Breakpoint::with_name`].
/// Multiple breakpoints may share a name.
///
/// ```rust
/// use treeline_breakpoints::{Behavior, Breakpoint};
///
/// let bp = Breakpoint::auto_scale(800.0)
///     .unwrap()
///     .with_name("TABLET")
///     .with_scale_factor(1.5)
///     .unwrap();
/// assert_eq!(bp.behavior(), Behavior::AutoScale);
/// assert_eq!(bp.name(), Some("TABLET"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoint {
    position: f64,
    name: Option<String>,
    behavior: Behavior,
    scale_factor: f64,
}

impl Breakpoint {
    fn new(position: f64, behavior: Behavior) -> Result<Self, BreakpointError> {
        if !position.is_finite() || position < 0.0 {
            return Err(BreakpointError::InvalidPosition(position));
        }
        Ok(Self {
            position,
            name: None,
            behavior,
            scale_factor: 1.0,
        })
    }

    /// Creates a breakpoint above which content is laid out at the literal
    /// container width (1:1).
    pub fn resize(position: f64) -> Result<Self, BreakpointError> {
        Self::new(position, Behavior::Resize)
    }

    /// Creates a breakpoint above which content is laid out at a fixed
    /// simulated width and visually scaled to fill the container.
    pub fn auto_scale(position: f64) -> Result<Self, BreakpointError> {
        Self::new(position, Behavior::AutoScale)
    }

    /// Creates a breakpoint that marks the end of a smooth scale-down
    /// transition from the preceding breakpoint.
    pub fn auto_scale_down(position: f64) -> Result<Self, BreakpointError> {
        Self::new(position, Behavior::AutoScaleDown)
    }

    /// Creates a pure naming marker at the given position.
    ///
    /// Tags inherit the behavior of whichever breakpoint precedes them once
    /// compiled; the name must be non-empty.
    pub fn tag(position: f64, name: impl Into<String>) -> Result<Self, BreakpointError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BreakpointError::UnnamedTag);
        }
        let mut bp = Self::new(position, Behavior::Tag)?;
        bp.name = Some(name);
        Ok(bp)
    }

    /// Attaches or replaces this breakpoint's name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets this breakpoint's scale factor.
    ///
    /// The factor divides the simulated layout width: a factor of `2.0` halves
    /// the width content is composed at, doubling its apparent size.
    pub fn with_scale_factor(mut self, factor: f64) -> Result<Self, BreakpointError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(BreakpointError::InvalidScaleFactor(factor));
        }
        self.scale_factor = factor;
        Ok(self)
    }

    /// Returns the width threshold.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the semantic name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the declared behavior.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Returns the scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Copy with a different behavior. Compilation uses this to resolve the
    /// effective behavior of rewritten segments.
    pub(crate) fn resolved(&self, behavior: Behavior) -> Self {
        let mut bp = self.clone();
        bp.behavior = behavior;
        bp
    }

    /// Copy with a different position. Positions are only rewritten during
    /// compilation, after construction-time validation.
    pub(crate) fn moved_to(&self, position: f64) -> Self {
        let mut bp = self.clone();
        bp.position = position;
        bp
    }

    /// Copy with a different (possibly absent) name.
    pub(crate) fn renamed(&self, name: Option<&str>) -> Self {
        let mut bp = self.clone();
        bp.name = name.map(Into::into);
        bp
    }

    /// Copy with a different scale factor, taken from an already-validated
    /// breakpoint.
    pub(crate) fn scaled_by(&self, scale_factor: f64) -> Self {
        let mut bp = self.clone();
        bp.scale_factor = scale_factor;
        bp
    }
}

#[cfg(test)]
mod tests {
    use super::{Behavior, Breakpoint, BreakpointError};

    #[test]
    fn constructors_fix_behavior() {
        assert_eq!(
            Breakpoint::resize(0.0).unwrap().behavior(),
            Behavior::Resize
        );
        assert_eq!(
            Breakpoint::auto_scale(600.0).unwrap().behavior(),
            Behavior::AutoScale
        );
        assert_eq!(
            Breakpoint::auto_scale_down(900.0).unwrap().behavior(),
            Behavior::AutoScaleDown
        );
        assert_eq!(
            Breakpoint::tag(450.0, "MOBILE").unwrap().behavior(),
            Behavior::Tag
        );
    }

    #[test]
    fn negative_and_non_finite_positions_are_rejected() {
        assert_eq!(
            Breakpoint::resize(-1.0),
            Err(BreakpointError::InvalidPosition(-1.0))
        );
        assert!(Breakpoint::auto_scale(f64::NAN).is_err());
        assert!(Breakpoint::auto_scale_down(f64::INFINITY).is_err());
    }

    #[test]
    fn tags_require_a_name() {
        assert_eq!(Breakpoint::tag(450.0, ""), Err(BreakpointError::UnnamedTag));
        let named = Breakpoint::tag(450.0, "MOBILE").unwrap();
        assert_eq!(named.name(), Some("MOBILE"));
    }

    #[test]
    fn scale_factor_defaults_to_one_and_rejects_non_positive() {
        let bp = Breakpoint::resize(600.0).unwrap();
        assert_eq!(bp.scale_factor(), 1.0);
        assert_eq!(
            bp.clone().with_scale_factor(0.0),
            Err(BreakpointError::InvalidScaleFactor(0.0))
        );
        assert!(bp.clone().with_scale_factor(-2.0).is_err());
        assert!(bp.clone().with_scale_factor(f64::NAN).is_err());
        assert_eq!(bp.with_scale_factor(2.0).unwrap().scale_factor(), 2.0);
    }

    #[test]
    fn auto_scaling_predicate_covers_both_scale_behaviors() {
        assert!(Behavior::AutoScale.is_auto_scaling());
        assert!(Behavior::AutoScaleDown.is_auto_scaling());
        assert!(!Behavior::Resize.is_auto_scaling());
        assert!(!Behavior::Tag.is_auto_scaling());
    }
}
