//! Share token encoding and decoding.
//!
//! A token is the base64 of a compact JSON document describing one edited
//! video: the video id, the skip list, and the optional trim bounds. All
//! numeric values cross the wire as decimal strings, so emitters with
//! different number formatting produce identical tokens for the same edit.

use serde::{Deserialize, Serialize};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::segments::{EditState, SegmentStore};

/// Base URL shared links are built from.
pub const SHARE_BASE_URL: &str = "https://safeyt.pbeej.com";

/// Errors that can occur while decoding a share token or link.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Token does not decode to UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token payload has no video id")]
    MissingVideoId,

    #[error("Link carries no token after the embed path")]
    MissingToken,
}

/// One skip on the wire. Endpoints are decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSegment {
    pub start: String,
    pub end: String,
}

impl WireSegment {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Trim bounds on the wire. Either edge may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl WireBounds {
    fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The JSON document carried inside a share token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(default)]
    pub skips: Vec<WireSegment>,
    #[serde(
        rename = "videoBounds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub video_bounds: Option<WireBounds>,
}

/// Lenient shape used for decoding: everything optional, so the video id
/// check can produce a distinct error instead of a generic JSON one.
#[derive(Deserialize)]
struct RawPayload {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
    #[serde(default)]
    skips: Vec<WireSegment>,
    #[serde(rename = "videoBounds", default)]
    video_bounds: Option<WireBounds>,
}

impl TokenPayload {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            skips: Vec::new(),
            video_bounds: None,
        }
    }

    /// Snapshot an edit into wire form.
    pub fn from_edit(video_id: impl Into<String>, edit: &EditState) -> Self {
        let skips = edit
            .skips
            .iter()
            .map(|seg| WireSegment::new(seg.start, seg.end))
            .collect();

        let bounds = WireBounds {
            start: edit.trim_start.map(|t| t.to_string()),
            end: edit.trim_end.map(|t| t.to_string()),
        };

        Self {
            video_id: video_id.into(),
            skips,
            video_bounds: (!bounds.is_empty()).then_some(bounds),
        }
    }

    /// Rebuild an edit from wire form.
    ///
    /// Values are replayed through the normal edit mutators, so anything
    /// malformed (unparseable numbers, inverted ranges, overlaps) is
    /// dropped or adjusted exactly as if it had been entered by hand.
    /// Bounds apply before skips so collision handling sees the trims.
    pub fn to_edit(&self) -> EditState {
        let mut store = SegmentStore::new();

        if let Some(bounds) = &self.video_bounds {
            if let Some(start) = bounds.start.as_deref().and_then(parse_seconds) {
                store.set_trim_start(start);
            }
            if let Some(end) = bounds.end.as_deref().and_then(parse_seconds) {
                store.set_trim_end(end);
            }
        }

        for skip in &self.skips {
            if let (Some(start), Some(end)) = (
                parse_seconds(&skip.start),
                parse_seconds(&skip.end),
            ) {
                store.add_skip(start, end);
            }
        }

        store.into_edit()
    }
}

fn parse_seconds(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Encode a payload into a share token.
pub fn encode(payload: &TokenPayload) -> String {
    // Serialization of a plain data struct cannot fail
    let json = serde_json::to_string(payload).unwrap();
    STANDARD.encode(json)
}

/// Decode a share token back into a payload.
pub fn decode(token: &str) -> Result<TokenPayload, DecodeError> {
    let bytes = STANDARD.decode(token.trim())?;
    let json = String::from_utf8(bytes)?;
    let raw: RawPayload = serde_json::from_str(&json)?;

    let video_id = match raw.video_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(DecodeError::MissingVideoId),
    };

    Ok(TokenPayload {
        video_id,
        skips: raw.skips,
        video_bounds: raw.video_bounds,
    })
}

/// Build the full shareable link for a token.
pub fn share_link(token: &str) -> String {
    format!("{SHARE_BASE_URL}/embed/{token}")
}

/// Pull the token out of a shared link and decode it.
///
/// Splits on the embed path rather than the exact host, so links from
/// mirrors or local deployments still decode.
pub fn decode_share_link(link: &str) -> Result<TokenPayload, DecodeError> {
    let token = link
        .splitn(2, "embed/")
        .nth(1)
        .filter(|token| !token.is_empty())
        .ok_or(DecodeError::MissingToken)?;

    decode(token)
}

/// Decode either a full share link or a bare token.
pub fn decode_input(input: &str) -> Result<TokenPayload, DecodeError> {
    if input.contains("embed/") {
        decode_share_link(input)
    } else {
        decode(input)
    }
}
