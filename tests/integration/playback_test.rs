//! End-to-end playback sessions against the simulated player

use safeyt::player::{PlaybackController, PlaybackPhase, Player, PlayerAction, SimulatedPlayer};
use safeyt::segments::SegmentStore;

use crate::helpers::sample_edit;

/// Deliver all queued player notifications, as a driver loop would.
fn pump(controller: &mut PlaybackController<SimulatedPlayer>) {
    while let Some(event) = controller.player_mut().poll_event() {
        controller.handle_event(event);
    }
}

/// Run the tick loop until the controller disarms itself.
///
/// Returns the number of ticks delivered; panics if the session does not
/// settle within `bound`.
fn drive(controller: &mut PlaybackController<SimulatedPlayer>, bound: u64) -> u64 {
    let mut ticks = 0;
    while controller.is_ticking() && ticks < bound {
        controller.player_mut().advance(1.0);
        pump(controller);
        if controller.is_ticking() {
            controller.tick();
        }
        pump(controller);
        ticks += 1;
    }
    assert!(ticks < bound, "session did not settle in {} ticks", bound);
    ticks
}

#[test]
fn full_session_plays_through_the_sample_edit() {
    let mut c = PlaybackController::new(SimulatedPlayer::new(600.0), sample_edit());
    c.start();
    c.player_mut().play();
    pump(&mut c);

    let ticks = drive(&mut c, 700);
    // Window width (510s) minus the two skips (35s + 30s)
    assert_eq!(ticks, 445);

    assert_eq!(c.phase(), PlaybackPhase::Stopped);
    assert_eq!(c.current_time(), 540.0);
    assert_eq!(c.player().current_time(), 30.0);
    assert!(!c.player().is_playing());

    // Lead-in hop, one seek per skip, park back at the window start
    assert_eq!(c.player().seeks(), vec![0.0, 30.0, 125.0, 330.0, 30.0]);
    assert!(c.player().actions().ends_with(&[
        PlayerAction::Seek {
            time: 30.0,
            allow_seek_ahead: false
        },
        PlayerAction::Pause,
    ]));
}

#[test]
fn scrub_into_a_skip_lands_on_its_end_while_playing() {
    let mut store = SegmentStore::new();
    assert!(store.add_skip(60.0, 90.0).is_applied());

    let mut c = PlaybackController::new(SimulatedPlayer::new(300.0), store.into_edit());
    c.start();
    c.player_mut().play();
    pump(&mut c);

    c.seek_to(75.0);
    assert_eq!(c.current_time(), 90.0);
    assert_eq!(c.player().current_time(), 90.0);
    assert_eq!(c.phase(), PlaybackPhase::Playing);
    assert_eq!(c.player().seeks(), vec![0.0, 90.0]);
}

#[test]
fn replay_after_the_window_end_restarts_from_the_trim_start() {
    let mut c = PlaybackController::new(SimulatedPlayer::new(600.0), sample_edit());
    c.start();

    c.seek_to(540.0);
    assert_eq!(c.phase(), PlaybackPhase::Stopped);
    assert_eq!(c.current_time(), 540.0);
    c.player_mut().take_actions();

    // Viewer hits play on the parked video
    c.player_mut().play();
    pump(&mut c);

    assert_eq!(c.phase(), PlaybackPhase::Playing);
    assert!(c.is_ticking());
    assert_eq!(c.current_time(), 30.0);
    assert!(c.player().actions().contains(&PlayerAction::Seek {
        time: 30.0,
        allow_seek_ahead: true
    }));
}

#[test]
fn skip_overhanging_the_trim_end_holds_just_before_it() {
    let mut store = SegmentStore::new();
    assert!(store.set_trim_end(540.0).is_applied());
    assert!(store.add_skip(500.0, 560.0).is_applied());
    // The store already truncated the skip at the trim end
    assert_eq!(store.skips()[0].end, 540.0);

    let mut c = PlaybackController::new(SimulatedPlayer::new(600.0), store.into_edit());
    c.start();
    c.player_mut().play();
    pump(&mut c);

    drive(&mut c, 700);

    // The skip dropped playback on the window end; the next tick fell into
    // the lead-out, which reaches the video end and therefore holds one
    // second before the window end instead of parking
    assert_eq!(c.phase(), PlaybackPhase::Paused);
    assert_eq!(c.current_time(), 539.0);
    assert_eq!(c.player().current_time(), 539.0);
    assert!(!c.player().is_playing());
    assert_eq!(c.player().seeks(), vec![0.0, 540.0, 539.0]);
}
