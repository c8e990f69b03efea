//! Platform surfaces: the social platform registry plus the external
//! collaborators the engine talks to (icon lookup and file delivery).
//!
//! Everything here is a lookup or a sink. The engine never fails because a
//! collaborator has nothing to offer; it falls back to documented defaults.

pub mod download;
pub mod icons;

pub use download::{DirectorySink, Download, DownloadSink, MemorySink};
pub use icons::{BuiltinIcons, IconRegistry, FALLBACK_ICON};

/// Display metadata for one supported social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Registry key, e.g. `instagram`
    pub id: &'static str,
    /// Human readable name, used as the element label
    pub name: &'static str,
    /// Placeholder text, used as the element value
    pub placeholder: &'static str,
    /// Brand colour, used as the element background
    pub color: &'static str,
}

const fn platform(
    id: &'static str,
    name: &'static str,
    placeholder: &'static str,
    color: &'static str,
) -> Platform {
    Platform { id, name, placeholder, color }
}

/// Fixed registry of supported platforms, in palette order.
pub const PLATFORMS: &[Platform] = &[
    platform("instagram", "Instagram", "@yourhandle", "#E4405F"),
    platform("youtube", "YouTube", "Your Channel", "#FF0000"),
    platform("tiktok", "TikTok", "@yourhandle", "#000000"),
    platform("x", "X", "@yourhandle", "#1DA1F2"),
    platform("twitch", "Twitch", "yourhandle", "#9146FF"),
    platform("facebook", "Facebook", "Follow me", "#1877F2"),
    platform("linkedin", "LinkedIn", "Connect with me", "#0077B5"),
    platform("snapchat", "Snapchat", "@yourhandle", "#FFFC00"),
    platform("bluesky", "Bluesky", "@yourhandle", "#00A8E8"),
    platform("website", "Website", "Visit my site", "#6366f1"),
    platform("paypal", "PayPal", "Support Me", "#00457C"),
    platform("kick", "Kick", "yourhandle", "#53FC18"),
    platform("trovo", "Trovo", "yourhandle", "#00D4AA"),
];

/// Look up a platform by registry key. Unknown keys yield `None` and the
/// caller falls back to the generic per-type defaults.
pub fn lookup(id: &str) -> Option<&'static Platform> {
    PLATFORMS.iter().find(|p| p.id == id)
}
