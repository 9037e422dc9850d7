// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use treeline_breakpoints::{BreakpointError, Segment, SegmentTable};

use crate::config::ScreenConfig;
use crate::metrics::{MetricsError, ScreenMetrics};
use crate::resolve::resolve_metrics;

/// Stateful facade over a responsive configuration.
///
/// `ScreenModel` owns the configuration, the compiled segment table, and the
/// most recent [`ScreenMetrics`] snapshot. The host drives it:
///
/// - [`ScreenModel::metrics_changed`] whenever the window size or pixel
///   ratio changes; the call recomputes synchronously and returns the new
///   snapshot.
/// - [`ScreenModel::set_config`] on configuration changes; the table is
///   recompiled and the snapshot refreshed from the cached window input.
///
/// All computation is call-and-return with no internal concurrency; the
/// compiled table is immutable and snapshots are replaced wholesale, so a
/// superseded snapshot stays valid for anyone still holding a clone.
#[derive(Clone, Debug)]
pub struct ScreenModel {
    config: ScreenConfig,
    table: SegmentTable,
    window: Option<(Size, f64)>,
    metrics: Option<ScreenMetrics>,
}

impl ScreenModel {
    /// Creates a model from a configuration, compiling its segment table.
    ///
    /// Errors if the configuration's width policy is invalid.
    pub fn new(config: ScreenConfig) -> Result<Self, BreakpointError> {
        let table = config.compile()?;
        Ok(Self {
            config,
            table,
            window: None,
            metrics: None,
        })
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Returns the compiled segment table.
    #[must_use]
    pub fn table(&self) -> &SegmentTable {
        &self.table
    }

    /// Replaces the configuration, recompiling the segment table.
    ///
    /// If window metrics have been observed, the snapshot is refreshed
    /// against the new table; on error the configuration is left unchanged.
    pub fn set_config(&mut self, config: ScreenConfig) -> Result<(), BreakpointError> {
        let table = config.compile()?;
        self.config = config;
        self.table = table;
        if let Some((window_size, ratio)) = self.window
            && let Ok(metrics) =
                resolve_metrics(&self.table, self.config.max_width(), window_size, ratio)
        {
            self.metrics = Some(metrics);
        }
        Ok(())
    }

    /// Recomputes the snapshot for new window metrics and returns it.
    ///
    /// Identical inputs produce identical snapshots. On error the previous
    /// snapshot remains the published one.
    pub fn metrics_changed(
        &mut self,
        window_size: Size,
        device_pixel_ratio: f64,
    ) -> Result<&ScreenMetrics, MetricsError> {
        let metrics = resolve_metrics(
            &self.table,
            self.config.max_width(),
            window_size,
            device_pixel_ratio,
        )?;
        self.window = Some((window_size, device_pixel_ratio));
        Ok(self.metrics.insert(metrics))
    }

    /// Returns the current snapshot.
    ///
    /// Errors with [`MetricsError::NotReady`] until the first
    /// [`ScreenModel::metrics_changed`] call.
    pub fn metrics(&self) -> Result<&ScreenMetrics, MetricsError> {
        self.metrics.as_ref().ok_or(MetricsError::NotReady)
    }

    /// Returns `true` if the named breakpoint is the active one.
    ///
    /// `false` for unknown names or before the first metrics update.
    #[must_use]
    pub fn is_equal_to(&self, name: &str) -> bool {
        self.metrics()
            .is_ok_and(|metrics| metrics.active_name() == Some(name))
    }

    /// Returns `true` if the screen is wider than the named breakpoint's
    /// range.
    ///
    /// The check compares the screen width against the upper boundary of the
    /// named range; while the named breakpoint is itself active, or when the
    /// name is unknown, this is `false`. It never fails.
    #[must_use]
    pub fn is_larger_than(&self, name: &str) -> bool {
        let Ok(metrics) = self.metrics() else {
            return false;
        };
        if metrics.active_name() == Some(name) {
            return false;
        }
        let segments = self.table.segments();
        // A single segment has no upper boundary to be beyond.
        if segments.len() <= 1 {
            return false;
        }
        // Reverse scan; the topmost segment is skipped because nothing lies
        // above it. Preserved as-is from long-standing behavior, including
        // the active-name early return above.
        for index in (0..segments.len() - 1).rev() {
            if segments[index].name() == Some(name) {
                return metrics.screen_width() >= segments[index + 1].position();
            }
        }
        false
    }

    /// Returns `true` if the screen is narrower than the named breakpoint.
    ///
    /// Unknown names fall back to a zero boundary, which no non-negative
    /// width is below; the query never fails.
    #[must_use]
    pub fn is_smaller_than(&self, name: &str) -> bool {
        let Ok(metrics) = self.metrics() else {
            return false;
        };
        let boundary = self
            .table
            .segments()
            .iter()
            .find(|seg| seg.name() == Some(name))
            .map_or(0.0, Segment::position);
        metrics.screen_width() < boundary
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use treeline_breakpoints::Breakpoint;

    use super::ScreenModel;
    use crate::config::ScreenConfig;
    use crate::metrics::MetricsError;

    fn device_classes() -> ScreenModel {
        let config = ScreenConfig::new(
            [
                Breakpoint::resize(600.0).unwrap().with_name("TABLET"),
                Breakpoint::auto_scale(1000.0).unwrap().with_name("DESKTOP"),
            ],
            450.0,
        );
        ScreenModel::new(config).unwrap()
    }

    #[test]
    fn metrics_error_before_first_update() {
        let screen = device_classes();
        assert_eq!(screen.metrics().unwrap_err(), MetricsError::NotReady);
        assert!(!screen.is_equal_to("TABLET"));
        assert!(!screen.is_larger_than("TABLET"));
        assert!(!screen.is_smaller_than("TABLET"));
    }

    #[test]
    fn metrics_changed_publishes_a_snapshot() {
        let mut screen = device_classes();
        let metrics = screen
            .metrics_changed(Size::new(800.0, 600.0), 2.0)
            .unwrap();
        assert_eq!(metrics.active_name(), Some("TABLET"));
        assert_eq!(metrics.device_pixel_ratio(), 2.0);
        assert_eq!(screen.metrics().unwrap().screen_width(), 800.0);
    }

    #[test]
    fn identical_updates_produce_identical_snapshots() {
        let mut screen = device_classes();
        let first = screen
            .metrics_changed(Size::new(800.0, 600.0), 2.0)
            .unwrap()
            .clone();
        let second = screen
            .metrics_changed(Size::new(800.0, 600.0), 2.0)
            .unwrap()
            .clone();
        assert_eq!(first, second);
    }

    #[test]
    fn comparison_queries_track_the_active_range() {
        let mut screen = device_classes();

        screen.metrics_changed(Size::new(800.0, 600.0), 1.0).unwrap();
        assert!(screen.is_equal_to("TABLET"));
        // The active breakpoint is never "larger than" itself.
        assert!(!screen.is_larger_than("TABLET"));
        assert!(screen.is_smaller_than("DESKTOP"));

        screen.metrics_changed(Size::new(1280.0, 800.0), 1.0).unwrap();
        assert!(screen.is_equal_to("DESKTOP"));
        assert!(screen.is_larger_than("TABLET"));
        assert!(!screen.is_smaller_than("TABLET"));
        // The topmost breakpoint has no range above it.
        assert!(!screen.is_larger_than("DESKTOP"));
    }

    #[test]
    fn unknown_names_compare_false() {
        let mut screen = device_classes();
        screen.metrics_changed(Size::new(800.0, 600.0), 1.0).unwrap();
        assert!(!screen.is_equal_to("WATCH"));
        assert!(!screen.is_larger_than("WATCH"));
        assert!(!screen.is_smaller_than("WATCH"));
    }

    #[test]
    fn set_config_recompiles_and_refreshes() {
        let mut screen = device_classes();
        screen.metrics_changed(Size::new(1500.0, 900.0), 1.0).unwrap();
        assert_eq!(screen.metrics().unwrap().screen_width(), 1500.0);

        let capped = ScreenConfig::new(
            [Breakpoint::resize(600.0).unwrap().with_name("TABLET")],
            450.0,
        )
        .with_max_width(1200.0);
        screen.set_config(capped).unwrap();

        // The cached window input is re-resolved against the new table.
        assert_eq!(screen.metrics().unwrap().screen_width(), 1200.0);
    }

    #[test]
    fn set_config_rejects_invalid_policy_and_keeps_state() {
        let mut screen = device_classes();
        screen.metrics_changed(Size::new(800.0, 600.0), 1.0).unwrap();

        let invalid = ScreenConfig::new([], -10.0);
        assert!(screen.set_config(invalid).is_err());
        // Previous configuration and snapshot stay published.
        assert_eq!(screen.config().min_width(), 450.0);
        assert_eq!(screen.metrics().unwrap().screen_width(), 800.0);
    }
}
