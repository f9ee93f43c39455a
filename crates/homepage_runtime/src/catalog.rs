//! Link directory generated at build time from `catalog/links.toml`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/link_directory_generated.rs"));

/// One link card in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Stable id of the form `{category_id}.{index}`.
    pub link_id: String,
    /// Display name, matched by the in-page filter.
    pub name: String,
    /// Name of the owning category, also matched by the in-page filter.
    pub category_name: String,
    /// Destination URL.
    pub href: String,
    /// Optional one-line description shown under the name.
    pub description: Option<String>,
}

/// One category section with its link cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCategory {
    pub category_id: String,
    pub name: String,
    pub glyph: Option<String>,
    pub links: Vec<LinkEntry>,
}

impl LinkCategory {
    /// DOM id of the category section, used as the scroll target after filtering.
    pub fn dom_id(&self) -> String {
        category_dom_id(&self.category_id)
    }
}

/// DOM id for a category section.
pub fn category_dom_id(category_id: &str) -> String {
    format!("category-{category_id}")
}

/// Returns the generated link directory.
///
/// # Panics
///
/// Panics if the JSON emitted by the build script does not parse, which the build script already
/// rules out for any catalog it accepts.
pub fn link_directory() -> &'static [LinkCategory] {
    static DIRECTORY: OnceLock<Vec<LinkCategory>> = OnceLock::new();
    DIRECTORY.get_or_init(|| {
        serde_json::from_str(LINK_DIRECTORY_JSON)
            .expect("generated link directory should parse")
    })
}

/// Iterates every link across all categories in display order.
pub fn all_links(directory: &[LinkCategory]) -> impl Iterator<Item = &LinkEntry> {
    directory.iter().flat_map(|category| category.links.iter())
}

/// Finds a link by id.
pub fn find_link<'a>(directory: &'a [LinkCategory], link_id: &str) -> Option<&'a LinkEntry> {
    all_links(directory).find(|link| link.link_id == link_id)
}
