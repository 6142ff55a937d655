//! Check subcommand handler

use anyhow::{bail, Context, Result};

use safeyt::share::{self, SourceRef};
use safeyt::Config;

/// Classify a link and report its video id.
///
/// Exits nonzero for links that are neither YouTube nor SafeYT, and for
/// SafeYT links whose token does not decode.
#[cfg(not(tarpaulin_include))]
pub fn handle(link: &str, json: bool) -> Result<()> {
    let json = json || Config::load()?.output.json;

    let source = share::from_link(link)
        .with_context(|| format!("Invalid SafeYT link: {}", link))?;

    let Some(source) = source else {
        bail!("Not a YouTube or SafeYT link: {}", link);
    };

    match source {
        SourceRef::Video { video_id } => {
            if json {
                let value = serde_json::json!({ "kind": "youtube", "videoId": video_id });
                println!("{}", value);
            } else {
                println!("YouTube video {}", video_id);
            }
        }
        SourceRef::Edited { video_id, edit } => {
            if json {
                let value = serde_json::json!({
                    "kind": "safeyt",
                    "videoId": video_id,
                    "skips": edit.skips.len(),
                    "trimmed": edit.trim_start.is_some() || edit.trim_end.is_some(),
                });
                println!("{}", value);
            } else {
                let plural = if edit.skips.len() == 1 { "skip" } else { "skips" };
                println!("SafeYT edit of video {} ({} {})", video_id, edit.skips.len(), plural);
            }
        }
    }

    Ok(())
}
