//! Mutation layer for an edit's skip segments and trim bounds.
//!
//! All mutators follow the same contract: validate the proposed edge
//! values, widen the segment to the minimum width when needed, then run a
//! collision pass that restores the no-overlap invariant. Invalid edits are
//! silently dropped (the store keeps its previous state); callers that care
//! can inspect the returned [`EditOutcome`].

use tracing::debug;

use super::{EditState, TimeSegment};

/// Minimum width of a skip segment or the trim window, in seconds.
const MIN_WIDTH: f64 = 1.0;

/// Result of a mutating call on [`SegmentStore`].
///
/// A rejection is a no-op, not an error: the previous state is fully
/// retained and nothing propagates to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was applied (possibly adjusted by the minimum-width rule or
    /// the collision pass).
    Applied,
    /// The edit was invalid and dropped.
    Rejected,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        *self == EditOutcome::Applied
    }
}

/// Owns an [`EditState`] and enforces its invariants on every mutation.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    edit: EditState,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store by replaying an existing edit through the normal
    /// mutators. Junk values (inverted or non-positive edges, as can appear
    /// in hand-crafted tokens) are dropped exactly like interactive edits
    /// would be.
    pub fn from_edit(edit: EditState) -> Self {
        let mut store = Self::new();
        if let Some(trim_start) = edit.trim_start {
            store.set_trim_start(trim_start);
        }
        if let Some(trim_end) = edit.trim_end {
            store.set_trim_end(trim_end);
        }
        for skip in &edit.skips {
            store.add_skip(skip.start, skip.end);
        }
        store
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn into_edit(self) -> EditState {
        self.edit
    }

    pub fn skips(&self) -> &[TimeSegment] {
        &self.edit.skips
    }

    pub fn trim_start(&self) -> Option<f64> {
        self.edit.trim_start
    }

    pub fn trim_end(&self) -> Option<f64> {
        self.edit.trim_end
    }

    /// Add a skip segment covering `[start, end)`.
    pub fn add_skip(&mut self, start: f64, end: f64) -> EditOutcome {
        let Some((start, end)) = validate_edges(start, end) else {
            debug!("rejected skip {}..{}: invalid edges", start, end);
            return EditOutcome::Rejected;
        };

        self.edit.skips.push(TimeSegment::skip(start, end));
        self.resolve_collisions();
        EditOutcome::Applied
    }

    /// Change one or both edges of an existing skip. `None` keeps the
    /// current value. An out-of-range index is a rejection.
    pub fn update_skip(
        &mut self,
        index: usize,
        start: Option<f64>,
        end: Option<f64>,
    ) -> EditOutcome {
        let Some(current) = self.edit.skips.get(index) else {
            debug!("rejected skip update: no skip at index {}", index);
            return EditOutcome::Rejected;
        };

        let proposed_start = start.unwrap_or(current.start);
        let proposed_end = end.unwrap_or(current.end);
        let Some((new_start, new_end)) = validate_edges(proposed_start, proposed_end) else {
            debug!(
                "rejected skip update {}..{}: invalid edges",
                proposed_start, proposed_end
            );
            return EditOutcome::Rejected;
        };

        self.edit.skips[index] = TimeSegment::skip(new_start, new_end);
        self.resolve_collisions();
        EditOutcome::Applied
    }

    /// Remove the skip at `index`. Neighboring segments are never merged or
    /// re-expanded to cover the removed range.
    pub fn delete_skip(&mut self, index: usize) -> EditOutcome {
        if index >= self.edit.skips.len() {
            debug!("rejected skip delete: no skip at index {}", index);
            return EditOutcome::Rejected;
        }

        self.edit.skips.remove(index);
        EditOutcome::Applied
    }

    /// Set the playable window start.
    pub fn set_trim_start(&mut self, time: f64) -> EditOutcome {
        if !time.is_finite() || time <= 0.0 {
            debug!("rejected trim start {}: invalid value", time);
            return EditOutcome::Rejected;
        }

        if let Some(trim_end) = self.edit.trim_end {
            if time >= trim_end {
                debug!("rejected trim start {}: window inverted", time);
                return EditOutcome::Rejected;
            }
            if trim_end - time < MIN_WIDTH {
                // Window too narrow: push the start down instead of rejecting
                let pushed = trim_end - MIN_WIDTH;
                if pushed <= 0.0 {
                    debug!("rejected trim start {}: pushed start not positive", time);
                    return EditOutcome::Rejected;
                }
                self.edit.trim_start = Some(pushed);
                self.resolve_collisions();
                return EditOutcome::Applied;
            }
        }

        self.edit.trim_start = Some(time);
        self.resolve_collisions();
        EditOutcome::Applied
    }

    /// Set the playable window end.
    ///
    /// When the new end lands within the minimum width of the current trim
    /// start, the start is pushed down to `end - 1` rather than rejecting
    /// the edit.
    pub fn set_trim_end(&mut self, time: f64) -> EditOutcome {
        if !time.is_finite() || time <= 0.0 {
            debug!("rejected trim end {}: invalid value", time);
            return EditOutcome::Rejected;
        }

        if let Some(trim_start) = self.edit.trim_start {
            if time <= trim_start {
                debug!("rejected trim end {}: window inverted", time);
                return EditOutcome::Rejected;
            }
            if time - trim_start < MIN_WIDTH {
                let pushed = time - MIN_WIDTH;
                if pushed <= 0.0 {
                    debug!("rejected trim end {}: pushed start not positive", time);
                    return EditOutcome::Rejected;
                }
                self.edit.trim_start = Some(pushed);
            }
        }

        self.edit.trim_end = Some(time);
        self.resolve_collisions();
        EditOutcome::Applied
    }

    /// Restore disjointness after an accepted edit.
    ///
    /// Walks the skips in insertion order against the current state:
    /// a skip whose range contains another segment's start (another skip's,
    /// or the lead-out boundary's at the trim end) is truncated to the
    /// earliest such start; a skip straddling the lead-in boundary gets its
    /// start raised to the trim start. Only skips are ever adjusted, trim
    /// bounds are authoritative. Truncation only shrinks segments, so one
    /// pass suffices.
    fn resolve_collisions(&mut self) {
        let trim_start = self.edit.trim_start;
        let trim_end = self.edit.trim_end;

        for i in 0..self.edit.skips.len() {
            let (seg_start, seg_end) = {
                let seg = &self.edit.skips[i];
                (seg.start, seg.end)
            };

            // Earliest start that falls strictly inside this skip
            let mut cut: Option<f64> = None;
            for (j, other) in self.edit.skips.iter().enumerate() {
                if j != i && seg_start < other.start && other.start < seg_end {
                    cut = Some(cut.map_or(other.start, |c| c.min(other.start)));
                }
            }
            if let Some(end) = trim_end {
                if seg_start < end && end < seg_end {
                    cut = Some(cut.map_or(end, |c| c.min(end)));
                }
            }
            if let Some(cut) = cut {
                debug!("truncating skip {} end {} -> {}", i, seg_end, cut);
                self.edit.skips[i].end = cut;
            }

            // Skip straddles the lead-in boundary: start moves up to it
            if let Some(start) = trim_start {
                let seg = &mut self.edit.skips[i];
                if seg.start < start && start < seg.end {
                    debug!("raising skip {} start {} -> {}", i, seg.start, start);
                    seg.start = start;
                }
            }
        }
    }
}

/// Validate proposed skip edges, applying the minimum-width rule.
///
/// Returns the (possibly adjusted) edges, or `None` when the edit must be
/// dropped: non-finite values, edges at or below zero, an inverted range,
/// or a minimum-width push that lands at or below zero.
fn validate_edges(start: f64, end: f64) -> Option<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    if start <= 0.0 || end <= 0.0 {
        return None;
    }
    if end <= start {
        return None;
    }

    let start = if end - start < MIN_WIDTH {
        end - MIN_WIDTH
    } else {
        start
    };
    if start <= 0.0 {
        return None;
    }

    Some((start, end))
}
