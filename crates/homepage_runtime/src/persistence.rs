//! Dark-mode preference persistence.
//!
//! Storage failures never surface to the page: a failed read falls back to light mode and a failed
//! write leaves the theme session-only.

use platform_host::{load_flag_with, save_pref_with, PrefsStore};

use crate::{config::DARK_MODE_PREF_KEY, model::ThemeMode};

/// Loads the stored theme, treating missing, unreadable or malformed values as light mode.
pub async fn load_theme_mode(prefs: &dyn PrefsStore) -> ThemeMode {
    match load_flag_with(prefs, DARK_MODE_PREF_KEY).await {
        Ok(dark) => ThemeMode::from_dark_flag(dark),
        Err(err) => {
            leptos::logging::warn!("dark mode preference load failed: {err}");
            ThemeMode::Light
        }
    }
}

/// Stores `mode` as the boolean text `true` / `false`.
pub async fn persist_theme_mode(prefs: &dyn PrefsStore, mode: ThemeMode) -> Result<(), String> {
    save_pref_with(prefs, DARK_MODE_PREF_KEY, &mode.is_dark()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggling_twice_restores_the_stored_value() {
        let prefs = MemoryPrefsStore::default();
        block_on(persist_theme_mode(&prefs, ThemeMode::Light)).expect("seed");
        let original = prefs.raw(DARK_MODE_PREF_KEY);

        let mut mode = block_on(load_theme_mode(&prefs));
        for _ in 0..2 {
            mode = mode.toggled();
            block_on(persist_theme_mode(&prefs, mode)).expect("persist");
        }
        assert_eq!(prefs.raw(DARK_MODE_PREF_KEY), original);
        assert_eq!(block_on(load_theme_mode(&prefs)), ThemeMode::Light);
    }

    #[test]
    fn dark_flag_is_stored_as_text_and_read_back() {
        let prefs = MemoryPrefsStore::default();
        block_on(persist_theme_mode(&prefs, ThemeMode::Dark)).expect("persist");
        assert_eq!(prefs.raw("darkMode").as_deref(), Some("true"));
        assert_eq!(block_on(load_theme_mode(&prefs)), ThemeMode::Dark);
    }

    #[test]
    fn unavailable_storage_degrades_to_light_and_reports_write_failure() {
        let prefs = MemoryPrefsStore::unavailable();
        assert_eq!(block_on(load_theme_mode(&prefs)), ThemeMode::Light);
        assert!(block_on(persist_theme_mode(&prefs, ThemeMode::Dark)).is_err());
    }
}
