// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;
use treeline_breakpoints::{Behavior, Segment};

/// Error from metrics access or resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricsError {
    /// No metrics have been observed yet; call
    /// [`crate::ScreenModel::metrics_changed`] first.
    ///
    /// Callers should treat this as "not yet ready" (render nothing or a
    /// placeholder) rather than as a failure.
    NotReady,
    /// No segment matched the given width.
    ///
    /// The compiled table is total over `width >= 0`, so this only occurs
    /// for negative or non-finite widths, or on a compiler bug. Debug builds
    /// assert before returning it.
    NoActiveSegment {
        /// The width that failed to match.
        width: f64,
    },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "no window metrics observed yet"),
            Self::NoActiveSegment { width } => {
                write!(f, "no breakpoint segment matched width {width}")
            }
        }
    }
}

impl core::error::Error for MetricsError {}

/// Immutable snapshot of resolved screen dimensions.
///
/// A snapshot is recomputed wholesale on every metrics change; it has no
/// identity beyond "current" and is never partially mutated. Anyone still
/// holding a superseded snapshot can keep reading it.
///
/// - [`ScreenMetrics::screen_size`] is the clamped window size content is
///   visually rendered into.
/// - [`ScreenMetrics::scaled_size`] is the simulated size content is
///   composed at before visual scaling is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenMetrics {
    window_size: Size,
    screen_size: Size,
    scaled_size: Size,
    device_pixel_ratio: f64,
    active: Segment,
}

impl ScreenMetrics {
    pub(crate) fn new(
        window_size: Size,
        screen_size: Size,
        scaled_size: Size,
        device_pixel_ratio: f64,
        active: Segment,
    ) -> Self {
        Self {
            window_size,
            screen_size,
            scaled_size,
            device_pixel_ratio,
            active,
        }
    }

    /// Returns the raw window size this snapshot was resolved from.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Returns the clamped screen size.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Returns the clamped screen width.
    #[must_use]
    pub fn screen_width(&self) -> f64 {
        self.screen_size.width
    }

    /// Returns the clamped screen height.
    #[must_use]
    pub fn screen_height(&self) -> f64 {
        self.screen_size.height
    }

    /// Returns the simulated size content is composed at.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.scaled_size
    }

    /// Returns the simulated layout width.
    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.scaled_size.width
    }

    /// Returns the simulated layout height.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.scaled_size.height
    }

    /// Returns the device pixel ratio the host reported.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Returns the active segment this snapshot was resolved against.
    #[must_use]
    pub fn active_segment(&self) -> &Segment {
        &self.active
    }

    /// Returns the active segment's resolved name, if any.
    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.active.name()
    }

    /// Returns the active segment's resolved behavior.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.active.behavior()
    }

    /// Returns the active segment's resolved scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.active.scale_factor()
    }

    /// Returns the effective rendering scale:
    /// `device_pixel_ratio * scale_factor`.
    #[must_use]
    pub fn render_scale(&self) -> f64 {
        self.device_pixel_ratio * self.active.scale_factor()
    }
}
