// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::breakpoint::{Behavior, Breakpoint};

/// A half-open interval `[position, next position)` over the width axis with
/// one resolved behavior and scale factor.
///
/// Segments are produced by [`SegmentTable::compile`]; the resolved
/// [`Breakpoint`] they carry may differ from any declared breakpoint (its
/// position or behavior can be rewritten during compilation).
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    position: f64,
    kind: Behavior,
    breakpoint: Breakpoint,
}

impl Segment {
    fn new(position: f64, kind: Behavior, breakpoint: Breakpoint) -> Self {
        Self {
            position,
            kind,
            breakpoint,
        }
    }

    /// Returns the width this segment starts at.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the resolved behavior content follows inside this segment.
    ///
    /// For tag segments this is the inherited behavior of the enclosing
    /// range, not [`Behavior::Tag`].
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.breakpoint.behavior()
    }

    /// Returns the resolved scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.breakpoint.scale_factor()
    }

    /// Returns the resolved name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.breakpoint.name()
    }

    /// Returns the resolved breakpoint this segment carries.
    #[must_use]
    pub fn breakpoint(&self) -> &Breakpoint {
        &self.breakpoint
    }

    /// Returns `true` if this segment was declared by a tag breakpoint.
    ///
    /// Tag segments are lookup aliases only; they are never selected by
    /// [`SegmentTable::active_segment`].
    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.kind.is_tag()
    }
}

/// Ordered, gap-free table of [`Segment`]s compiled from a breakpoint list.
///
/// The table is built once per configuration and immutable thereafter. It is
/// total over the width axis: the first segment starts at `0` and the last
/// extends to infinity, so [`SegmentTable::active_segment`] matches exactly
/// one non-tag segment for any `width >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    /// Compiles a breakpoint list into a segment table.
    ///
    /// `breakpoints` may be unordered, sparse, and overlapping. `min_width`
    /// is the resize/scale floor applied when the declared breakpoints start
    /// higher, and `default` is the synthetic breakpoint (conventionally at
    /// `min_width`) describing behavior below the declared thresholds.
    ///
    /// Compilation proceeds in declaration-position order:
    ///
    /// - Resize and auto-scale breakpoints open a new segment at their own
    ///   position.
    /// - A scale-down breakpoint closes a transition started at the previous
    ///   behavioral breakpoint: after an auto-scale breakpoint it inserts a
    ///   midpoint segment so the upper half of the range shrinks smoothly;
    ///   after a resize breakpoint it retroactively converts that range (and
    ///   any tags inside it) to auto-scaling. Consecutive scale-down
    ///   breakpoints collapse into one segment at the earliest position.
    /// - Tags rename the current breakpoint without changing behavior.
    #[must_use]
    pub fn compile(breakpoints: &[Breakpoint], min_width: f64, default: &Breakpoint) -> Self {
        let mut sorted: Vec<Breakpoint> = breakpoints.to_vec();
        sorted.sort_by(compare);

        let mut segments: Vec<Segment> = Vec::new();
        let first_behavioral = sorted.iter().find(|bp| !bp.behavior().is_tag());
        let needs_floor = match first_behavioral {
            None => true,
            Some(bp) => {
                bp.position() > min_width && bp.behavior() != Behavior::AutoScaleDown
            }
        };

        if needs_floor {
            // All declared breakpoints start above `min_width` (or none
            // exist): the default breakpoint governs from zero, with
            // `min_width` as its floor.
            insert(
                &mut segments,
                Segment::new(0.0, default.behavior(), default.clone()),
            );
            insert(
                &mut segments,
                Segment::new(min_width, default.behavior(), default.clone()),
            );
        } else {
            // A leading scale-down breakpoint applies its auto-scale intent
            // all the way from zero; anything else starts with the default
            // behavior.
            let behavior = match first_behavioral {
                Some(bp) if bp.behavior() == Behavior::AutoScaleDown => Behavior::AutoScale,
                _ => default.behavior(),
            };
            insert(
                &mut segments,
                Segment::new(0.0, behavior, default.resolved(behavior)),
            );
        }

        let mut holder = default.clone();
        for bp in &sorted {
            match bp.behavior() {
                Behavior::Resize | Behavior::AutoScale => {
                    insert(
                        &mut segments,
                        Segment::new(bp.position(), bp.behavior(), bp.clone()),
                    );
                    holder = bp.clone();
                }
                Behavior::AutoScaleDown => {
                    if holder.behavior() == Behavior::AutoScaleDown {
                        // Consecutive scale-down declarations collapse into
                        // one auto-scale segment at the earliest position,
                        // keeping the later declaration's factor and name.
                        let start = holder.position();
                        let resolved = bp.resolved(Behavior::AutoScale).moved_to(start);
                        if let Some(seg) =
                            segments.iter_mut().find(|seg| seg.position == start)
                        {
                            *seg = Segment::new(start, Behavior::AutoScale, resolved);
                        }
                        holder = bp.moved_to(start);
                    } else {
                        if holder.behavior() == Behavior::AutoScale {
                            // The upper half of the range between the two
                            // breakpoints shrinks towards this one; the lower
                            // half keeps the previous auto-scale anchor.
                            let midpoint = (holder.position() + bp.position()) / 2.0;
                            insert(
                                &mut segments,
                                Segment::new(midpoint, Behavior::AutoScaleDown, bp.clone()),
                            );
                        } else {
                            rewrite_resize_range(&mut segments, &holder, bp);
                        }
                        insert(
                            &mut segments,
                            Segment::new(
                                bp.position(),
                                Behavior::AutoScale,
                                bp.resolved(Behavior::AutoScale),
                            ),
                        );
                        holder = bp.clone();
                    }
                }
                Behavior::Tag => {
                    holder = holder.renamed(bp.name());
                    // Tags are behavior-transparent: at an occupied position
                    // they rename the existing segment, otherwise they emit
                    // an alias segment carrying the renamed current
                    // breakpoint with the preceding segment's behavior.
                    let position = bp.position();
                    match segments
                        .binary_search_by(|seg| seg.position.total_cmp(&position))
                    {
                        Ok(index) => {
                            let renamed = segments[index].breakpoint.renamed(bp.name());
                            segments[index].breakpoint = renamed;
                        }
                        Err(index) => {
                            let behavior = if index == 0 {
                                default.behavior()
                            } else {
                                segments[index - 1].behavior()
                            };
                            segments.insert(
                                index,
                                Segment::new(position, Behavior::Tag, holder.resolved(behavior)),
                            );
                        }
                    }
                }
            }
        }

        Self { segments }
    }

    /// Returns the compiled segments, strictly increasing in position.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the segment active at `width`.
    ///
    /// This is the highest-position non-tag segment whose position is at or
    /// below `width`; it exists for every finite `width >= 0`.
    #[must_use]
    pub fn active_segment(&self, width: f64) -> Option<&Segment> {
        self.segments
            .iter()
            .rev()
            .find(|seg| !seg.is_tag() && seg.position <= width)
    }
}

/// Sort ascending by position; at equal positions scale-down breakpoints
/// order first so their transition semantics win the tie.
fn compare(a: &Breakpoint, b: &Breakpoint) -> Ordering {
    a.position()
        .total_cmp(&b.position())
        .then_with(|| scale_down_rank(a).cmp(&scale_down_rank(b)))
}

fn scale_down_rank(bp: &Breakpoint) -> u8 {
    u8::from(bp.behavior() != Behavior::AutoScaleDown)
}

/// Ordered insertion keyed by position. A segment at an already-occupied
/// position replaces the previous occupant, preserving the strictly
/// increasing invariant for overlapping declarations.
fn insert(segments: &mut Vec<Segment>, segment: Segment) {
    match segments.binary_search_by(|seg| seg.position.total_cmp(&segment.position)) {
        Ok(index) => segments[index] = segment,
        Err(index) => segments.insert(index, segment),
    }
}

/// A scale-down breakpoint following a resize breakpoint retroactively
/// converts the resize range to auto-scaling anchored at the new end
/// position. Tag segments at or beyond the range start keep their names but
/// inherit the override.
fn rewrite_resize_range(segments: &mut [Segment], holder: &Breakpoint, end: &Breakpoint) {
    for seg in segments.iter_mut() {
        let rewrite = match seg.kind {
            Behavior::Resize => seg.position == holder.position(),
            Behavior::Tag => seg.position >= holder.position(),
            _ => false,
        };
        if rewrite {
            seg.breakpoint = seg
                .breakpoint
                .resolved(Behavior::AutoScale)
                .moved_to(end.position())
                .scaled_by(end.scale_factor());
            if !seg.kind.is_tag() {
                seg.kind = Behavior::AutoScale;
            }
        }
    }
}
