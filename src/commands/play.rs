//! Play subcommand handler
//!
//! Drives the playback controller against a simulated player, printing a
//! timeline of what an embedded viewer would experience.

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use safeyt::player::{PlaybackController, PlaybackPhase, Player, SimulatedPlayer};
use safeyt::share;
use safeyt::timefmt::{format_timestamp, parse_timestamp};
use safeyt::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle(
    link: &str,
    duration: Option<f64>,
    seek: Option<&str>,
    until: Option<&str>,
    real_time: bool,
) -> Result<()> {
    let config = Config::load()?;
    let duration = duration.unwrap_or(config.playback.default_duration);
    if !duration.is_finite() || duration <= 0.0 {
        bail!("Duration must be a positive number of seconds");
    }

    let real_time = real_time || config.playback.real_time;
    let tick_seconds = config.playback.tick_seconds;
    if !tick_seconds.is_finite() || tick_seconds <= 0.0 {
        bail!("tick_seconds in the config must be positive");
    }

    let source = share::from_link(link)
        .with_context(|| format!("Failed to decode: {}", link))?;
    let Some(source) = source else {
        bail!("Not a YouTube or SafeYT link: {}", link);
    };

    let seek = seek
        .map(parse_timestamp)
        .transpose()
        .context("Invalid --seek time")?;
    let until = until
        .map(parse_timestamp)
        .transpose()
        .context("Invalid --until time")?;

    let video_id = source.video_id().to_string();
    let edit = source.into_edit();
    let plural = if edit.skips.len() == 1 { "skip" } else { "skips" };
    println!(
        "Playing {} (duration {}, {} {})",
        video_id,
        format_timestamp(duration),
        edit.skips.len(),
        plural
    );

    let mut controller = PlaybackController::new(SimulatedPlayer::new(duration), edit);
    controller.set_tick_interval(Duration::from_secs_f64(tick_seconds));
    controller.start();

    if let Some(target) = seek {
        controller.seek_to(target);
        pump(&mut controller);
        println!(
            "  {}  seek to {}",
            format_timestamp(target),
            format_timestamp(controller.current_time())
        );
    }

    println!("  {}  play", format_timestamp(controller.current_time()));
    controller.player_mut().play();
    pump(&mut controller);

    let mut watched = 0.0;
    let mut ticks: u64 = 0;
    // One tick is one second of media time; tick_seconds only paces the
    // loop in real-time mode. The controller parks itself at the window
    // end, so the bound only covers edits that keep backing playback off
    // near the end
    let max_ticks = duration.ceil() as u64 + 16;

    while controller.is_ticking() && ticks < max_ticks {
        if real_time {
            thread::sleep(controller.tick_interval());
        }

        let before = controller.current_time();
        controller.player_mut().advance(1.0);
        pump(&mut controller);
        if controller.is_ticking() {
            controller.tick();
        }
        pump(&mut controller);

        let after = controller.current_time();
        watched += 1.0;
        ticks += 1;

        if after > before + 1.001 {
            println!(
                "  {}  skip to {}",
                format_timestamp(before + 1.0),
                format_timestamp(after)
            );
        } else if after < before {
            println!(
                "  {}  skip runs to the end, holding at {}",
                format_timestamp(before + 1.0),
                format_timestamp(after)
            );
        }

        if let Some(stop) = until {
            if controller.current_time() >= stop {
                println!("  {}  stop", format_timestamp(controller.current_time()));
                break;
            }
        }
    }

    if controller.phase() == PlaybackPhase::Stopped {
        println!(
            "  {}  end of window, parked at {}",
            format_timestamp(controller.current_time()),
            format_timestamp(controller.player().current_time())
        );
    }

    println!(
        "Watched {} of {}.",
        format_timestamp(watched),
        format_timestamp(duration)
    );

    Ok(())
}

/// Deliver queued player notifications back to the controller.
fn pump(controller: &mut PlaybackController<SimulatedPlayer>) {
    while let Some(event) = controller.player_mut().poll_event() {
        controller.handle_event(event);
    }
}
