//! Decode subcommand handler

use anyhow::{Context, Result};

use safeyt::share::{self, TokenPayload};
use safeyt::timefmt::format_timestamp;
use safeyt::Config;

/// Show the edit carried by a SafeYT link or bare token.
#[cfg(not(tarpaulin_include))]
pub fn handle(link: &str, json: bool) -> Result<()> {
    let json = json || Config::load()?.output.json;

    let payload = share::decode_input(link)
        .with_context(|| format!("Failed to decode: {}", link))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_payload(&payload);
    }

    Ok(())
}

fn print_payload(payload: &TokenPayload) {
    println!("videoId: {}", payload.video_id);

    if payload.skips.is_empty() {
        println!("skips: none");
    } else {
        println!("skips:");
        for (index, skip) in payload.skips.iter().enumerate() {
            println!(
                "  [{}] {} - {}",
                index,
                fmt_wire_value(&skip.start),
                fmt_wire_value(&skip.end)
            );
        }
    }

    if let Some(bounds) = &payload.video_bounds {
        let start = bounds
            .start
            .as_deref()
            .map(fmt_wire_value)
            .unwrap_or_else(|| "start".to_string());
        let end = bounds
            .end
            .as_deref()
            .map(fmt_wire_value)
            .unwrap_or_else(|| "end".to_string());
        println!("window: {} - {}", start, end);
    }
}

/// Wire values are decimal-string seconds; show them as timestamps, or
/// verbatim when they do not parse.
fn fmt_wire_value(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(seconds) => format_timestamp(seconds),
        Err(_) => raw.to_string(),
    }
}
