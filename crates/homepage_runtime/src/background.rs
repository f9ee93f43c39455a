//! Randomised backdrop selection.

use platform_host::RandomSource;
use serde::{Deserialize, Serialize};

use crate::{
    config::{BACKGROUND_CATEGORIES, STATIC_BACKGROUND_URLS},
    fallback::FallbackChain,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackgroundState {
    pub image_url: Option<String>,
    pub category: Option<String>,
    /// Set once any image has been applied; drives the fade-in.
    pub loaded: bool,
}

impl BackgroundState {
    pub fn css_background(&self) -> Option<String> {
        self.image_url
            .as_ref()
            .map(|url| format!("url('{url}')"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rotation tick: the chosen category and the dynamic URL to try.
pub struct BackgroundPlan {
    pub category: &'static str,
    pub chain: FallbackChain,
}

pub fn dynamic_background_url(category: &str) -> String {
    format!("https://source.unsplash.com/1920x1080/?{category},wallpaper,4k")
}

/// Picks a category uniformly and builds its single-candidate chain.
pub fn plan_background(random: &dyn RandomSource) -> BackgroundPlan {
    let category = BACKGROUND_CATEGORIES[random.next_index(BACKGROUND_CATEGORIES.len())];
    BackgroundPlan {
        category,
        chain: FallbackChain::new([dynamic_background_url(category)]),
    }
}

/// Static image used when the dynamic service fails; chosen at exhaustion time.
pub fn static_fallback_url(random: &dyn RandomSource) -> &'static str {
    STATIC_BACKGROUND_URLS[random.next_index(STATIC_BACKGROUND_URLS.len())]
}

#[cfg(test)]
mod tests {
    use platform_host::SequenceRandom;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plan_uses_the_picked_category() {
        let random = SequenceRandom::new([2, 7]);
        let plan = plan_background(&random);
        assert_eq!(plan.category, "space");
        assert_eq!(
            plan.chain.candidates(),
            &["https://source.unsplash.com/1920x1080/?space,wallpaper,4k".to_string()]
        );

        let wrapped = plan_background(&random);
        assert_eq!(wrapped.category, "technology");
    }

    #[test]
    fn static_fallback_comes_from_the_fixed_list() {
        let random = SequenceRandom::new([0, 1, 2, 5]);
        let picks: Vec<_> = (0..4).map(|_| static_fallback_url(&random)).collect();
        assert_eq!(
            picks,
            vec![
                STATIC_BACKGROUND_URLS[0],
                STATIC_BACKGROUND_URLS[1],
                STATIC_BACKGROUND_URLS[2],
                STATIC_BACKGROUND_URLS[2],
            ]
        );
    }

    #[test]
    fn css_background_wraps_the_url() {
        let state = BackgroundState {
            image_url: Some("https://x/y.jpg".to_string()),
            category: None,
            loaded: true,
        };
        assert_eq!(state.css_background().as_deref(), Some("url('https://x/y.jpg')"));
        assert_eq!(BackgroundState::default().css_background(), None);
    }
}
