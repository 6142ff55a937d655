//! Link recognition: tells YouTube watch links, short links, and already
//! shared SafeYT links apart, and pulls the video id out of the first two.

use once_cell::sync::Lazy;
use regex::Regex;

use super::codec::SHARE_BASE_URL;

// Standard watch links, including the nocookie and kids hosts:
// https://www.youtube.com/watch?app=desktop&v=83ac8WGbA60
// https://m.youtube.com/watch?si=ln6_lBR0S9xrHpey&v=gtYw0Gwaxrc&feature=youtu.be
// https://www.youtube-nocookie.com/watch?v=5uKmqP3kQ2A
// https://www.youtubekids.com/watch?v=gFq9ZqXD1JA
static WATCH_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:https?:)?(?://)?(?:www\.|m\.)?youtube(?:-nocookie|kids)?\.com/(?:watch)?.*?v=(?P<id>[\w-]{10,20})(?:&|$)",
    )
    .unwrap()
});

// Short links:
// https://youtu.be/sjxFJ5plpgY
// https://youtu.be/sjxFJ5plpgY?si=A0wdNWR12pXcpE2C
static SHORT_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?:)?(?://)?(?:www\.|m\.)?youtu\.be/(?P<id>[\w-]{10,20})(?:$|[^\w-])")
        .unwrap()
});

/// What kind of link a piece of input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A YouTube watch or short link with an extractable video id.
    YouTube,
    /// A SafeYT share link carrying an encoded token.
    SafeYt,
    /// Neither.
    Unknown,
}

/// True for links on a YouTube host with a recognizable video id.
pub fn is_youtube_link(link: &str) -> bool {
    WATCH_LINK.is_match(link) || SHORT_LINK.is_match(link)
}

/// True for links on the SafeYT host.
pub fn is_safeyt_link(link: &str) -> bool {
    link.starts_with(SHARE_BASE_URL)
}

/// Pull the video id out of a YouTube link, long form first.
pub fn extract_video_id(link: &str) -> Option<String> {
    WATCH_LINK
        .captures(link)
        .or_else(|| SHORT_LINK.captures(link))
        .map(|caps| caps["id"].to_string())
}

/// Classify a link. SafeYT links win over YouTube ones, so a share link
/// whose token happens to look like a path never falls through.
pub fn classify(link: &str) -> LinkKind {
    if is_safeyt_link(link) {
        LinkKind::SafeYt
    } else if is_youtube_link(link) {
        LinkKind::YouTube
    } else {
        LinkKind::Unknown
    }
}
