//! Command handlers for the safeyt binary.

pub mod check;
pub mod completions;
pub mod config;
pub mod decode;
pub mod edit;
pub mod encode;
pub mod play;

use anyhow::{bail, Context, Result};

use safeyt::segments::SegmentStore;
use safeyt::timefmt;

/// Apply --from/--to flags to a store, erroring on rejected values.
pub(crate) fn apply_trims(
    store: &mut SegmentStore,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    if let Some(raw) = from {
        let time = timefmt::parse_timestamp(raw)
            .with_context(|| format!("Invalid --from time: '{}'", raw))?;
        if !store.set_trim_start(time).is_applied() {
            bail!(
                "Start trim '{}' was rejected; it must be positive and before the end trim",
                raw
            );
        }
    }

    if let Some(raw) = to {
        let time = timefmt::parse_timestamp(raw)
            .with_context(|| format!("Invalid --to time: '{}'", raw))?;
        if !store.set_trim_end(time).is_applied() {
            bail!(
                "End trim '{}' was rejected; it must be positive and after the start trim",
                raw
            );
        }
    }

    Ok(())
}

/// Parse and add skip ranges, erroring on rejected values.
pub(crate) fn apply_skips(store: &mut SegmentStore, skips: &[String]) -> Result<()> {
    for raw in skips {
        let (start, end) = timefmt::parse_range(raw)
            .with_context(|| format!("Invalid skip range: '{}'", raw))?;
        if !store.add_skip(start, end).is_applied() {
            bail!(
                "Skip '{}' was rejected; check that it is positive and start < end",
                raw
            );
        }
    }

    Ok(())
}
