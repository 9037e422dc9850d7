// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_breakpoints --heading-base-level=0

//! Treeline Breakpoints: breakpoint declarations and the width-segment compiler.
//!
//! This crate provides the headless core of a responsive layout system: a
//! sparse, possibly overlapping list of named [`Breakpoint`] declarations is
//! compiled into a [`SegmentTable`], a fully ordered, gap-free table of
//! [`Segment`]s over the width axis. For any container width exactly one
//! segment is active, carrying the [`Behavior`] and scale factor that content
//! should be laid out with at that width.
//!
//! The core concepts are:
//!
//! - [`Breakpoint`]: an immutable declaration of one width threshold, built
//!   with one of four constructors fixing its behavior:
//!   [`Breakpoint::resize`], [`Breakpoint::auto_scale`],
//!   [`Breakpoint::auto_scale_down`], and [`Breakpoint::tag`].
//! - [`Behavior`]: the closed set of layout behaviors a breakpoint can
//!   declare.
//! - [`SegmentTable`]: the compiler output; built once per configuration and
//!   immutable thereafter. [`SegmentTable::active_segment`] answers per-frame
//!   width queries.
//!
//! This crate deliberately does **not** know about windows, widget trees, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Observing window/container size changes.
//! - Resolving screen and scaled dimensions from the active segment (see the
//!   `treeline_screen` crate).
//! - Rendering content at the resolved dimensions.
//!
//! ## Minimal example
//!
//! ```rust
//! use treeline_breakpoints::{Behavior, Breakpoint, SegmentTable};
//!
//! let breakpoints = vec![
//!     Breakpoint::resize(600.0).unwrap().with_name("TABLET"),
//!     Breakpoint::auto_scale(1000.0).unwrap().with_name("DESKTOP"),
//! ];
//!
//! // The default breakpoint seeds behavior below the declared thresholds.
//! let default = Breakpoint::resize(450.0).unwrap();
//! let table = SegmentTable::compile(&breakpoints, 450.0, &default);
//!
//! // The table is gap-free: every width maps to exactly one segment.
//! let active = table.active_segment(1280.0).unwrap();
//! assert_eq!(active.behavior(), Behavior::AutoScale);
//! assert_eq!(active.name(), Some("DESKTOP"));
//! ```
//!
//! Compilation gives [`Behavior::AutoScaleDown`] a dual role: standalone it
//! marks a point content should smoothly shrink towards, and following a
//! resize breakpoint it retroactively converts that earlier range to
//! auto-scaling. See [`SegmentTable::compile`] for the full rules.
//!
//! All positions live in a caller-chosen 1D coordinate space (typically
//! logical pixels) and are expected to be finite and non-negative.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod segments;

pub use breakpoint::{Behavior, Breakpoint, BreakpointError};
pub use segments::{Segment, SegmentTable};
