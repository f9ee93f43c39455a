//! Search engine catalog, the in-page link filter, and external query URLs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::LinkCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchEngineId {
    /// Filters the link directory instead of leaving the page.
    #[default]
    Site,
    Baidu,
    Google,
    Bing,
    Sogou,
}

impl SearchEngineId {
    pub const ALL: [Self; 5] = [
        Self::Site,
        Self::Baidu,
        Self::Google,
        Self::Bing,
        Self::Sogou,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Baidu => "baidu",
            Self::Google => "google",
            Self::Bing => "bing",
            Self::Sogou => "sogou",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|engine| engine.as_str() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Site => "站内",
            Self::Baidu => "百度",
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::Sogou => "搜狗",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Site => "🔍",
            Self::Baidu => "B",
            Self::Google => "G",
            Self::Bing => "B",
            Self::Sogou => "搜",
        }
    }

    /// Query prefix for external engines; `None` for the in-page filter.
    pub fn base_url(self) -> Option<&'static str> {
        match self {
            Self::Site => None,
            Self::Baidu => Some("https://www.baidu.com/s?wd="),
            Self::Google => Some("https://www.google.com/search?q="),
            Self::Bing => Some("https://www.bing.com/search?q="),
            Self::Sogou => Some("https://www.sogou.com/web?query="),
        }
    }

    pub fn is_site(self) -> bool {
        matches!(self, Self::Site)
    }

    pub fn placeholder(self) -> String {
        match self {
            Self::Site => "搜索网站或输入关键词搜索...".to_string(),
            other => format!("在{}中搜索...", other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchState {
    pub engine: SearchEngineId,
    pub query_text: String,
    pub menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Visibility computed by one filter pass. Empty sets mean everything is shown.
pub struct LinkVisibility {
    pub hidden_links: BTreeSet<String>,
    pub hidden_categories: BTreeSet<String>,
    /// First category with a visible link, present only for a non-empty query.
    pub first_visible_category: Option<String>,
}

impl LinkVisibility {
    pub fn link_visible(&self, link_id: &str) -> bool {
        !self.hidden_links.contains(link_id)
    }

    pub fn category_visible(&self, category_id: &str) -> bool {
        !self.hidden_categories.contains(category_id)
    }
}

/// Trimmed, lowercased form of a query as used by the in-page filter.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Recomputes link and category visibility for `query` over the whole directory.
pub fn filter_directory(directory: &[LinkCategory], query: &str) -> LinkVisibility {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return LinkVisibility::default();
    }

    let mut visibility = LinkVisibility::default();
    for category in directory {
        let category_matches = category.name.to_lowercase().contains(&needle);
        let mut any_visible = false;
        for link in &category.links {
            let visible = category_matches
                || link.name.to_lowercase().contains(&needle)
                || link.category_name.to_lowercase().contains(&needle);
            if visible {
                any_visible = true;
            } else {
                visibility.hidden_links.insert(link.link_id.clone());
            }
        }
        if any_visible {
            if visibility.first_visible_category.is_none() {
                visibility.first_visible_category = Some(category.category_id.clone());
            }
        } else {
            visibility
                .hidden_categories
                .insert(category.category_id.clone());
        }
    }
    visibility
}

/// Builds the external search URL, or `None` for the in-page engine or a blank query.
pub fn external_search_url(engine: SearchEngineId, query: &str) -> Option<String> {
    let base = engine.base_url()?;
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("{base}{}", urlencoding::encode(trimmed)))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::catalog::{LinkCategory, LinkEntry};

    fn category(id: &str, name: &str, links: &[&str]) -> LinkCategory {
        LinkCategory {
            category_id: id.to_string(),
            name: name.to_string(),
            glyph: None,
            links: links
                .iter()
                .enumerate()
                .map(|(index, link)| LinkEntry {
                    link_id: format!("{id}.{index}"),
                    name: link.to_string(),
                    category_name: name.to_string(),
                    href: format!("https://www.{}.com/", link.to_lowercase()),
                    description: None,
                })
                .collect(),
        }
    }

    pub(crate) fn directory() -> Vec<LinkCategory> {
        vec![
            category("dev-tools", "Dev Tools", &["GitHub", "GitLab"]),
            category("social", "Social", &["Twitter"]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{fixtures::directory, *};
    use crate::catalog::all_links;

    #[test]
    fn gith_keeps_github_and_its_category_only() {
        let visibility = filter_directory(&directory(), "gith");
        assert!(visibility.link_visible("dev-tools.0"));
        assert!(!visibility.link_visible("dev-tools.1"));
        assert!(!visibility.link_visible("social.0"));
        assert!(visibility.category_visible("dev-tools"));
        assert!(!visibility.category_visible("social"));
        assert_eq!(
            visibility.first_visible_category.as_deref(),
            Some("dev-tools")
        );
    }

    #[test]
    fn empty_or_blank_query_shows_everything_without_a_scroll_target() {
        for query in ["", "   "] {
            assert_eq!(filter_directory(&directory(), query), LinkVisibility::default());
        }
    }

    #[test]
    fn matching_is_case_insensitive_on_link_and_category_names() {
        let dir = directory();
        for query in ["GITHUB", "social", "dev", "  tWiT "] {
            let visibility = filter_directory(&dir, query);
            let needle = normalize_query(query);
            for link in all_links(&dir) {
                let expected = link.name.to_lowercase().contains(&needle)
                    || link.category_name.to_lowercase().contains(&needle);
                assert_eq!(visibility.link_visible(&link.link_id), expected, "{query}");
            }
            for category in &dir {
                let expected = category
                    .links
                    .iter()
                    .any(|link| visibility.link_visible(&link.link_id));
                assert_eq!(visibility.category_visible(&category.category_id), expected);
            }
        }
    }

    #[test]
    fn no_match_hides_everything() {
        let visibility = filter_directory(&directory(), "zzz");
        assert_eq!(visibility.hidden_categories.len(), 2);
        assert_eq!(visibility.first_visible_category, None);
    }

    #[test]
    fn external_url_percent_encodes_the_trimmed_query() {
        assert_eq!(
            external_search_url(SearchEngineId::Google, " rust systems ").as_deref(),
            Some("https://www.google.com/search?q=rust%20systems")
        );
        assert_eq!(
            external_search_url(SearchEngineId::Baidu, "编程").as_deref(),
            Some("https://www.baidu.com/s?wd=%E7%BC%96%E7%A8%8B")
        );
        assert_eq!(external_search_url(SearchEngineId::Bing, "   "), None);
        assert_eq!(external_search_url(SearchEngineId::Site, "rust"), None);
    }

    #[test]
    fn engine_ids_round_trip_and_placeholders_name_the_engine() {
        for engine in SearchEngineId::ALL {
            assert_eq!(SearchEngineId::from_id(engine.as_str()), Some(engine));
        }
        assert_eq!(SearchEngineId::from_id("yahoo"), None);
        assert_eq!(SearchEngineId::Sogou.placeholder(), "在搜狗中搜索...");
        assert_eq!(SearchEngineId::Site.placeholder(), "搜索网站或输入关键词搜索...");
    }
}
