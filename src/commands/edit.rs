//! Edit subcommand handler

use anyhow::{bail, Context, Result};

use safeyt::segments::SegmentStore;
use safeyt::share::{self, TokenPayload};

/// Apply further edits to an existing SafeYT link and print the new link.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    link: &str,
    add_skips: &[String],
    delete_skips: &[usize],
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let payload = share::decode_input(link)
        .with_context(|| format!("Failed to decode: {}", link))?;

    let mut store = SegmentStore::from_edit(payload.to_edit());

    // Deletes first, by the indexes decode showed; highest first so the
    // remaining indexes stay valid
    let mut deletes: Vec<usize> = delete_skips.to_vec();
    deletes.sort_unstable();
    deletes.dedup();
    for index in deletes.into_iter().rev() {
        if !store.delete_skip(index).is_applied() {
            bail!("No skip at index {}", index);
        }
    }

    super::apply_trims(&mut store, from, to)?;
    super::apply_skips(&mut store, add_skips)?;

    let updated = TokenPayload::from_edit(payload.video_id, store.edit());
    println!("{}", share::share_link(&share::encode(&updated)));

    Ok(())
}
