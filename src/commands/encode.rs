//! Encode subcommand handler

use anyhow::{bail, Result};

use safeyt::segments::SegmentStore;
use safeyt::share::{self, TokenPayload};

/// Turn a YouTube link plus edit flags into a shareable SafeYT link.
#[cfg(not(tarpaulin_include))]
pub fn handle(link: &str, skips: &[String], from: Option<&str>, to: Option<&str>) -> Result<()> {
    if share::is_safeyt_link(link) {
        bail!("Already a SafeYT link; use `safeyt edit` to modify it");
    }

    let Some(video_id) = share::extract_video_id(link) else {
        bail!("Not a YouTube link: {}", link);
    };

    let mut store = SegmentStore::new();
    super::apply_trims(&mut store, from, to)?;
    super::apply_skips(&mut store, skips)?;

    let payload = TokenPayload::from_edit(video_id, store.edit());
    println!("{}", share::share_link(&share::encode(&payload)));

    Ok(())
}
