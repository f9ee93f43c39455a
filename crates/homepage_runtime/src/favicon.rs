//! Favicon candidate chains per link destination.

use serde::{Deserialize, Serialize};

use crate::fallback::FallbackChain;

/// Glyph shown when no favicon candidate loads.
pub const FAVICON_GLYPH: &str = "🔗";
/// Font size applied to the glyph so it fills the icon slot.
pub const FAVICON_GLYPH_SIZE: &str = "2rem";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FaviconSlot {
    #[default]
    Pending,
    Image {
        url: String,
    },
    Glyph,
}

/// Extracts the host of `href` without scheme, credentials, port, path or a leading `www.`.
pub fn registrable_domain(href: &str) -> String {
    let trimmed = href.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host.split(':').next().unwrap_or_default();
    let host = host.to_ascii_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

/// Domain favicon service, then the origin's `/favicon.ico`, then a secondary service.
pub fn favicon_chain(domain: &str) -> FallbackChain {
    FallbackChain::new([
        format!("https://www.google.com/s2/favicons?domain={domain}&sz=64"),
        format!("https://{domain}/favicon.ico"),
        format!("https://icons.duckduckgo.com/ip3/{domain}.ico"),
    ])
}
