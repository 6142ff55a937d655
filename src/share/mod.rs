//! Shareable edits: tokens, links, and link recognition.
//!
//! # Architecture
//!
//! The module splits into two halves:
//!
//! - `codec`: the token format itself. An edit plus a video id is
//!   serialized to compact JSON and base64-encoded into a token, which a
//!   share link carries after its `/embed/` path.
//! - `links`: recognizers for the inputs people paste. YouTube watch and
//!   short links yield a bare video id; SafeYT links yield a full token.
//!
//! [`from_link`] is the front door: it classifies a pasted link and turns
//! it into a [`SourceRef`] either way.
//!
//! # Usage
//!
//! ```
//! use safeyt::share;
//!
//! let source = share::from_link("https://youtu.be/dQw4w9WgXcQ").unwrap().unwrap();
//! assert_eq!(source.video_id(), "dQw4w9WgXcQ");
//! ```

pub mod codec;
pub mod links;

pub use codec::{
    decode, decode_input, decode_share_link, encode, share_link, DecodeError, TokenPayload,
    WireBounds, WireSegment, SHARE_BASE_URL,
};
pub use links::{classify, extract_video_id, is_safeyt_link, is_youtube_link, LinkKind};

use crate::segments::EditState;

/// A video source resolved from a pasted link.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRef {
    /// A plain YouTube video, no edit yet.
    Video { video_id: String },
    /// A shared SafeYT edit.
    Edited { video_id: String, edit: EditState },
}

impl SourceRef {
    pub fn video_id(&self) -> &str {
        match self {
            SourceRef::Video { video_id } => video_id,
            SourceRef::Edited { video_id, .. } => video_id,
        }
    }

    /// The edit carried by the link, empty for a plain video.
    pub fn into_edit(self) -> EditState {
        match self {
            SourceRef::Video { .. } => EditState::new(),
            SourceRef::Edited { edit, .. } => edit,
        }
    }
}

/// Resolve a pasted link into a video source.
///
/// Returns `Ok(None)` for links that are neither YouTube nor SafeYT, and
/// an error only for SafeYT links whose token fails to decode.
pub fn from_link(link: &str) -> Result<Option<SourceRef>, DecodeError> {
    match classify(link) {
        LinkKind::SafeYt => {
            let payload = decode_share_link(link)?;
            let edit = payload.to_edit();
            Ok(Some(SourceRef::Edited {
                video_id: payload.video_id,
                edit,
            }))
        }
        LinkKind::YouTube => Ok(extract_video_id(link).map(|video_id| SourceRef::Video { video_id })),
        LinkKind::Unknown => Ok(None),
    }
}
