//! In-process stand-in for a real video player.
//!
//! Keeps a virtual clock and records every command issued through the
//! [`Player`] trait, so tests and the playback simulation can assert on
//! exactly what the engine asked the player to do. State-change events are
//! queued the way a real player would emit them asynchronously; the driver
//! polls them off and forwards them to the controller.

use std::collections::VecDeque;

use super::{Player, PlayerEvent};

/// A command the engine issued to the player, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Seek { time: f64, allow_seek_ahead: bool },
    Play,
    Pause,
    Mute,
    Unmute,
    SetVolume(u8),
}

/// Scripted player with a virtual clock.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    duration: f64,
    time: f64,
    playing: bool,
    muted: bool,
    volume: u8,
    actions: Vec<PlayerAction>,
    events: VecDeque<PlayerEvent>,
}

impl SimulatedPlayer {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            time: 0.0,
            playing: false,
            muted: false,
            volume: 100,
            actions: Vec::new(),
            events: VecDeque::new(),
        }
    }

    /// Advance the virtual clock by `dt` seconds of media time.
    ///
    /// Does nothing while paused. Reaching the end of the video stops
    /// playback and queues an [`PlayerEvent::Ended`] notification.
    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }

        self.time += dt;
        if self.time >= self.duration {
            self.time = self.duration;
            self.playing = false;
            self.events.push_back(PlayerEvent::Ended);
        }
    }

    /// Next queued state-change notification, if any.
    pub fn poll_event(&mut self) -> Option<PlayerEvent> {
        self.events.pop_front()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Every command issued so far, in order.
    pub fn actions(&self) -> &[PlayerAction] {
        &self.actions
    }

    /// Drain the recorded commands.
    pub fn take_actions(&mut self) -> Vec<PlayerAction> {
        std::mem::take(&mut self.actions)
    }

    /// Seeks issued so far, in order.
    pub fn seeks(&self) -> Vec<f64> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                PlayerAction::Seek { time, .. } => Some(*time),
                _ => None,
            })
            .collect()
    }
}

impl Player for SimulatedPlayer {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) {
        self.actions.push(PlayerAction::Seek {
            time: seconds,
            allow_seek_ahead,
        });
        self.time = seconds.clamp(0.0, self.duration);
    }

    fn play(&mut self) {
        self.actions.push(PlayerAction::Play);
        if !self.playing {
            self.playing = true;
            self.events.push_back(PlayerEvent::Playing);
        }
    }

    fn pause(&mut self) {
        self.actions.push(PlayerAction::Pause);
        if self.playing {
            self.playing = false;
            self.events.push_back(PlayerEvent::Paused);
        }
    }

    fn mute(&mut self) {
        self.actions.push(PlayerAction::Mute);
        self.muted = true;
    }

    fn unmute(&mut self) {
        self.actions.push(PlayerAction::Unmute);
        self.muted = false;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, volume: u8) {
        let volume = volume.min(100);
        self.actions.push(PlayerAction::SetVolume(volume));
        self.volume = volume;
    }
}
