//! Playback engine for edited videos.
//!
//! Applies an edit live while an external video player advances:
//!
//! - `controller`: decides when and where to seek as time passes
//!
//! # Architecture
//!
//! The engine never owns a real player. It talks to the [`Player`] trait,
//! a thin capability surface over whatever actually renders video (the
//! YouTube iframe API in a browser embedder, [`SimulatedPlayer`] here).
//! State-change notifications flow the other way: the embedder observes
//! the real player's event stream and forwards [`PlayerEvent`]s into
//! [`PlaybackController::handle_event`].
//!
//! # Usage
//!
//! ```
//! use safeyt::player::{PlaybackController, SimulatedPlayer};
//! use safeyt::segments::EditState;
//!
//! let mut edit = EditState::new();
//! edit.skips.push(safeyt::segments::TimeSegment::skip(10.0, 20.0));
//!
//! let mut controller = PlaybackController::new(SimulatedPlayer::new(300.0), edit);
//! controller.start();
//! assert_eq!(controller.current_time(), 0.0);
//! ```

pub mod controller;
pub mod simulated;

pub use controller::{PlaybackController, PlaybackPhase};
pub use simulated::{PlayerAction, SimulatedPlayer};

/// Capability surface the playback engine needs from a video player.
///
/// Mirrors the subset of the YouTube iframe player API the engine drives.
/// Construction, destruction and embedding of the player stay with the
/// caller; the engine only issues commands through this trait.
pub trait Player {
    /// Total video duration in seconds.
    fn duration(&self) -> f64;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seek to an absolute position. `allow_seek_ahead` distinguishes a
    /// committed seek from a preview one (streaming players may defer
    /// buffering for previews).
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool);

    fn play(&mut self);

    fn pause(&mut self);

    fn mute(&mut self);

    fn unmute(&mut self);

    fn is_muted(&self) -> bool;

    /// Playback volume, 0 to 100.
    fn volume(&self) -> u8;

    fn set_volume(&mut self, volume: u8);
}

/// State-change notification forwarded from the external player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Playing,
    Paused,
    Ended,
}
