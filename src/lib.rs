//! SafeYT - watch and share YouTube videos with the unwanted parts cut out.
//!
//! An edit is a list of skipped ranges plus optional trim bounds. Edits are
//! encoded into compact tokens carried by share links, and applied at
//! playback time by seeking over the skipped material.
//!
//! # Usage
//!
//! ```
//! use safeyt::segments::SegmentStore;
//! use safeyt::share::{self, TokenPayload};
//!
//! let mut store = SegmentStore::new();
//! store.add_skip(90.0, 125.0);
//!
//! let payload = TokenPayload::from_edit("dQw4w9WgXcQ", store.edit());
//! let link = share::share_link(&share::encode(&payload));
//! assert!(link.starts_with("https://safeyt.pbeej.com/embed/"));
//! ```

pub mod cli;
pub mod config;
pub mod player;
pub mod segments;
pub mod share;
pub mod timefmt;

pub use config::Config;
pub use segments::SegmentStore;

/// Version string for `--version`: crate version and build date, plus the
/// git commit on non-release builds.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("SAFEYT_BUILD_DATE");

    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{version} ({date}, {sha})"),
        _ => format!("{version} ({date})"),
    }
}
