// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_screen --heading-base-level=0

//! Treeline Screen: screen metrics resolution and the responsive screen model.
//!
//! This crate sits on top of `treeline_breakpoints` and derives, for a given
//! window size, the dimensions a rectangular content area should be laid out
//! at. It focuses on:
//!
//! - [`ScreenConfig`]: the responsive configuration (breakpoints, minimum and
//!   maximum width, default scaling policy).
//! - [`resolve_metrics`]: the pure per-frame resolution of screen and scaled
//!   dimensions from a compiled segment table and the current window metrics.
//! - [`ScreenMetrics`]: the immutable output snapshot, recomputed wholesale
//!   on every change and never partially mutated.
//! - [`ScreenModel`]: a small stateful facade that owns the configuration,
//!   the compiled table, and the latest snapshot, and answers named
//!   breakpoint comparison queries.
//!
//! It does **not** observe window changes on its own. Callers are expected
//! to:
//!
//! - Watch device/window metrics in their host framework.
//! - Call [`ScreenModel::metrics_changed`] synchronously whenever the window
//!   size or pixel ratio changes; the call returns the new snapshot.
//! - Lay content out at [`ScreenMetrics::scaled_size`] and render it scaled
//!   to [`ScreenMetrics::screen_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use treeline_breakpoints::Breakpoint;
//! use treeline_screen::{ScreenConfig, ScreenModel};
//!
//! let config = ScreenConfig::new(
//!     vec![
//!         Breakpoint::resize(600.0).unwrap().with_name("TABLET"),
//!         Breakpoint::auto_scale(1000.0).unwrap().with_name("DESKTOP"),
//!     ],
//!     450.0,
//! );
//! let mut screen = ScreenModel::new(config).unwrap();
//!
//! // The host reports a 1280x800 window at 2x pixel ratio.
//! let metrics = screen.metrics_changed(Size::new(1280.0, 800.0), 2.0).unwrap();
//! assert_eq!(metrics.screen_size(), Size::new(1280.0, 800.0));
//! // Content is composed at the DESKTOP anchor width and scaled up.
//! assert_eq!(metrics.scaled_width(), 1000.0);
//!
//! assert!(screen.is_equal_to("DESKTOP"));
//! assert!(screen.is_larger_than("TABLET"));
//! assert!(!screen.is_smaller_than("TABLET"));
//! ```
//!
//! ## Design notes
//!
//! - Resolution is a pure function of `(table, max width, window metrics)`;
//!   calling it twice with identical inputs yields identical snapshots.
//! - The compiled table is immutable and freely shared; snapshots are
//!   replaced atomically and an old snapshot stays valid for anyone still
//!   holding it.
//! - Comparison queries return `false` for unknown names; they never fail.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod metrics;
mod model;
mod resolve;

pub use config::ScreenConfig;
pub use metrics::{MetricsError, ScreenMetrics};
pub use model::ScreenModel;
pub use resolve::resolve_metrics;
