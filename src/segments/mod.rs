//! Skip segments and trim bounds for an edited video.
//!
//! An edit is a set of user-authored skip segments plus an optional trim
//! window. Playback never sees the trim window directly: it is materialized
//! into synthetic boundary segments (a lead-in before the window and a
//! lead-out after it) so the playback engine only deals with one thing,
//! segments to skip over.
//!
//! # Architecture
//!
//! - `TimeSegment` / `SegmentKind`: the segment value type and containment
//!   rules
//! - `EditState`: plain data describing one video's edit
//! - `store`: the [`SegmentStore`] mutator layer that validates edits and
//!   keeps the segment set non-overlapping

pub mod store;

pub use store::{EditOutcome, SegmentStore};

/// What a segment represents.
///
/// `LeadIn` and `LeadOut` are derived from the trim window and never stored
/// or serialized; only `Skip` segments are part of the persistent edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// User-authored skip segment.
    Skip,
    /// Skipped region before the trim window start.
    LeadIn,
    /// Skipped region after the trim window end.
    LeadOut,
}

impl SegmentKind {
    /// True for the synthetic trim-window segments.
    pub fn is_boundary(&self) -> bool {
        matches!(self, SegmentKind::LeadIn | SegmentKind::LeadOut)
    }
}

/// A half-open time range to be skipped during playback, in seconds.
///
/// Invariant: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSegment {
    pub start: f64,
    pub end: f64,
    pub kind: SegmentKind,
}

impl TimeSegment {
    pub fn skip(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::Skip,
        }
    }

    /// Boundary segment covering `[0, end)` before the trim window.
    pub fn lead_in(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            kind: SegmentKind::LeadIn,
        }
    }

    /// Boundary segment covering `(start, duration]` after the trim window.
    pub fn lead_out(start: f64, duration: f64) -> Self {
        Self {
            start,
            end: duration,
            kind: SegmentKind::LeadOut,
        }
    }

    /// Whether `time` falls inside this segment.
    ///
    /// Skips and the lead-in contain their start but not their end
    /// (`start <= t < end`). The lead-out is open at its start
    /// (`start < t <= end`) so that a clock sitting exactly on the trim end
    /// is still considered inside the playable window.
    pub fn contains(&self, time: f64) -> bool {
        match self.kind {
            SegmentKind::LeadOut => self.start < time && time <= self.end,
            _ => self.start <= time && time < self.end,
        }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_boundary(&self) -> bool {
        self.kind.is_boundary()
    }
}

/// Complete edit description for one video.
///
/// `skips` keeps insertion order (the order the user created them), not
/// time order. Mutation goes through [`SegmentStore`], which enforces
/// validation and the no-overlap invariant; `EditState` itself is plain
/// data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditState {
    /// User-authored skip segments, in creation order.
    pub skips: Vec<TimeSegment>,
    /// Playable window start, if the video is trimmed at the front.
    pub trim_start: Option<f64>,
    /// Playable window end, if the video is trimmed at the back.
    pub trim_end: Option<f64>,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// No skips and no trim window.
    pub fn is_empty(&self) -> bool {
        self.skips.is_empty() && self.trim_start.is_none() && self.trim_end.is_none()
    }

    /// Start of the playable window.
    pub fn window_start(&self) -> f64 {
        self.trim_start.unwrap_or(0.0)
    }

    /// End of the playable window for a video of the given duration.
    pub fn window_end(&self, duration: f64) -> f64 {
        self.trim_end.unwrap_or(duration)
    }

    /// Materialize the full segment set for playback: the lead-in boundary
    /// (when trimmed at the front), the skips in insertion order, then the
    /// lead-out boundary (when trimmed at the back).
    pub fn resolved_segments(&self, duration: f64) -> Vec<TimeSegment> {
        let mut segments = Vec::with_capacity(self.skips.len() + 2);
        if let Some(trim_start) = self.trim_start {
            segments.push(TimeSegment::lead_in(trim_start));
        }
        segments.extend(self.skips.iter().copied());
        if let Some(trim_end) = self.trim_end {
            segments.push(TimeSegment::lead_out(trim_end, duration));
        }
        segments
    }
}
