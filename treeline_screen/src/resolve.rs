// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use treeline_breakpoints::{Behavior, SegmentTable};

use crate::metrics::{MetricsError, ScreenMetrics};

/// Resolves screen and scaled dimensions for the current window metrics.
///
/// This is a pure function of its inputs: identical arguments yield
/// identical snapshots. The active segment is the highest non-tag segment at
/// or below the window width; its resolved breakpoint supplies the anchor
/// position, behavior, and scale factor the dimensions derive from.
///
/// With `max_width` set and exceeded, the screen width is clamped to the
/// cap, except inside an auto-scale range anchored at or past the cap where
/// it grows by the overshoot beyond the anchor; the height follows the same
/// ratio in reverse to preserve aspect.
///
/// Errors with [`MetricsError::NoActiveSegment`] only for widths the table
/// cannot cover (negative or non-finite); debug builds assert first.
pub fn resolve_metrics(
    table: &SegmentTable,
    max_width: Option<f64>,
    window_size: Size,
    device_pixel_ratio: f64,
) -> Result<ScreenMetrics, MetricsError> {
    let window_width = window_size.width;
    let Some(active) = table.active_segment(window_width) else {
        debug_assert!(
            !(window_width.is_finite() && window_width >= 0.0),
            "compiled table failed to cover width {window_width}"
        );
        return Err(MetricsError::NoActiveSegment {
            width: window_width,
        });
    };

    let anchor = active.breakpoint().position();
    let behavior = active.breakpoint().behavior();
    let factor = active.breakpoint().scale_factor();

    // Degenerate zero-anchor root: the governing breakpoint sits at zero, so
    // there is no width to lay content out against.
    if anchor == 0.0 {
        return Ok(ScreenMetrics::new(
            window_size,
            Size::ZERO,
            Size::ZERO,
            device_pixel_ratio,
            active.clone(),
        ));
    }

    let auto = behavior.is_auto_scaling();

    let screen_width = match max_width {
        Some(max) if window_width > max => {
            if auto && anchor >= max {
                // Controlled growth past the cap within an auto-scale zone.
                max + (window_width - anchor)
            } else {
                max
            }
        }
        _ => window_width,
    };
    let screen_height = match max_width {
        Some(max) if window_width > max && auto && anchor > max => {
            // Apply the overflow width ratio in reverse to preserve aspect.
            window_size.height / (screen_width / max)
        }
        _ => window_size.height,
    };

    let (scaled_width, scaled_height) = match (behavior, max_width) {
        (Behavior::Resize, _) => (screen_width / factor, screen_height / factor),
        (_, Some(max)) if anchor > max => (max / factor, screen_height / factor),
        _ => {
            // `anchor > 0` here; the zero-anchor case returned above.
            let width_scale = screen_width / anchor;
            let scaled_height = if width_scale == 0.0 {
                0.0
            } else {
                screen_height / width_scale / factor
            };
            (anchor / factor, scaled_height)
        }
    };

    Ok(ScreenMetrics::new(
        window_size,
        Size::new(screen_width, screen_height),
        Size::new(scaled_width, scaled_height),
        device_pixel_ratio,
        active.clone(),
    ))
}
