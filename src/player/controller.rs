//! Playback controller: applies an edit while the video clock advances.
//!
//! The controller is driven from outside by two event sources: a periodic
//! tick (roughly one per second while playing) and state-change
//! notifications forwarded from the player. It keeps its own display clock
//! as an optimistic estimate of the playback position; seeks are
//! fire-and-forget and never awaited.

use std::time::Duration;

use tracing::debug;

use super::{Player, PlayerEvent};
use crate::segments::EditState;

/// Default spacing of playback ticks.
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Coarse playback state of the controller.
///
/// `Stopped -> Playing -> Paused` and back; the end of the video (or of the
/// trimmed window) parks the controller back at `Stopped`. An `Ended`
/// notification is handled, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Playing,
    Paused,
}

/// Drives skip and trim behavior against a [`Player`].
///
/// Owns the player capability for the lifetime of one playback session.
/// The embedder delivers ticks via [`tick`](Self::tick) while
/// [`is_ticking`](Self::is_ticking) is true and forwards player
/// state-changes via [`handle_event`](Self::handle_event).
#[derive(Debug)]
pub struct PlaybackController<P: Player> {
    player: P,
    edit: EditState,
    /// Display clock: optimistic estimate of the playback position.
    time: f64,
    phase: PlaybackPhase,
    ticking: bool,
    tick_interval: Duration,
}

impl<P: Player> PlaybackController<P> {
    pub fn new(player: P, edit: EditState) -> Self {
        Self {
            player,
            edit,
            time: 0.0,
            phase: PlaybackPhase::Stopped,
            ticking: false,
            tick_interval: DEFAULT_TICK,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    /// Current display clock in seconds.
    pub fn current_time(&self) -> f64 {
        self.time
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Whether the driver should be delivering ticks right now.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    /// Park the player at the top of the video and apply any edit that
    /// covers it (a trimmed video starts at its window start).
    pub fn start(&mut self) {
        self.player.pause();
        self.player.seek_to(0.0, true);
        self.time = 0.0;
        self.resolve(0.0);
    }

    /// Disarm the tick timer.
    pub fn stop(&mut self) {
        self.ticking = false;
    }

    /// Move `time` out of any segment that must be skipped, issuing the
    /// player seeks along the way, and return where playback ends up.
    ///
    /// Segments whose end reaches the video duration are terminal: instead
    /// of seeking past them, the player is paused just before the segment
    /// (`start - 1`) and resolution stops. Every other hop lands on the
    /// segment's end and re-checks from there, so adjacent segments chain.
    /// Returns the input unchanged, with no player calls, when no segment
    /// contains it.
    pub fn resolve(&mut self, mut time: f64) -> f64 {
        let duration = self.duration();
        let segments = self.edit.resolved_segments(duration);

        while let Some(seg) = segments.iter().find(|s| s.contains(time)) {
            if seg.end >= duration {
                let target = seg.start - 1.0;
                debug!(
                    "segment {}..{} reaches the video end, holding at {}",
                    seg.start, seg.end, target
                );
                self.player.pause();
                self.player.seek_to(target, true);
                self.time = target;
                time = target;
                break;
            }

            debug!("skipping {}..{} -> {}", seg.start, seg.end, seg.end);
            self.player.seek_to(seg.end, true);
            self.time = seg.end;
            time = seg.end;
        }

        time
    }

    /// Advance the display clock by one second and apply edits.
    ///
    /// The clock is advanced locally rather than read back from the player;
    /// the tick spacing exceeds expected seek latency, so the estimate
    /// stays close enough and self-corrects on the next state change.
    pub fn tick(&mut self) {
        if self.phase != PlaybackPhase::Playing {
            return;
        }

        let target = self.time + 1.0;
        let landed = self.resolve(target);
        if landed == target {
            self.time = target;
            if target >= self.window_end() {
                self.end_of_window(false);
            }
        }
    }

    /// Handle a state-change notification forwarded from the player.
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Playing => {
                // Display clock as of the notification, before any resolve
                let display = self.time;
                let reported = self.player.current_time();
                let landed = self.resolve(reported);

                if display >= self.window_end() {
                    // Playback resumed from the parked end position: replay
                    // from the top of the window
                    let window_start = self.window_start();
                    debug!("replaying from {}", window_start);
                    self.player.seek_to(window_start, true);
                    self.time = window_start;
                    self.player.play();
                } else {
                    self.time = landed;
                }

                self.phase = PlaybackPhase::Playing;
                self.ticking = true;
            }
            PlayerEvent::Paused => {
                // Parking pauses the player itself; the confirmation that
                // comes back must not demote Stopped to Paused
                if self.phase == PlaybackPhase::Playing {
                    self.phase = PlaybackPhase::Paused;
                }
                self.ticking = false;
            }
            PlayerEvent::Ended => {
                self.end_of_window(true);
            }
        }
    }

    /// Scrub to an absolute position.
    ///
    /// The position is clamped to the video range and resolved first; when
    /// a segment fires, the resolve seeks are the only seeks issued. A
    /// plain scrub seeks the player directly and then checks for the end
    /// of the playable window.
    pub fn seek_to(&mut self, time: f64) {
        let target = time.clamp(0.0, self.duration());
        let landed = self.resolve(target);
        if landed == target {
            self.player.seek_to(target, true);
            self.time = target;
            if target >= self.window_end() {
                self.end_of_window(false);
            }
        }
    }

    /// Full video duration, floored to whole seconds.
    fn duration(&self) -> f64 {
        self.player.duration().floor()
    }

    fn window_start(&self) -> f64 {
        self.edit.window_start()
    }

    fn window_end(&self) -> f64 {
        self.edit.window_end(self.duration())
    }

    /// Park playback at the end of the playable window: the player is
    /// seeked back to the window start and paused, while the display clock
    /// stays pinned at the window end (so that resuming is recognized as a
    /// replay).
    fn end_of_window(&mut self, allow_seek_ahead: bool) {
        let window_start = self.window_start();
        debug!("end of playable window, parking player at {}", window_start);
        self.time = self.window_end();
        self.player.seek_to(window_start, allow_seek_ahead);
        self.player.pause();
        self.phase = PlaybackPhase::Stopped;
        self.ticking = false;
    }
}
