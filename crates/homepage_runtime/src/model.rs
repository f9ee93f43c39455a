use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    background::BackgroundState,
    drag::{DragState, PupilOffset},
    favicon::FaviconSlot,
    music::MusicPlayerState,
    search::{LinkVisibility, SearchState},
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button; it names the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "白天模式",
            Self::Light => "夜间模式",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub mode: ThemeMode,
    /// False until the first user toggle so the hydrated mode applies without animation.
    pub transitions_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// The two independently draggable surfaces on the page.
pub enum DragTarget {
    PetWidget,
    MusicPlayer,
}

impl DragTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PetWidget => "pet-widget",
            Self::MusicPlayer => "music-player",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Whole-page runtime state owned by the provider signal.
pub struct HomeState {
    pub theme: ThemeState,
    pub search: SearchState,
    /// Result of the last in-page filter pass.
    pub visibility: LinkVisibility,
    pub background: BackgroundState,
    /// Resolved icon per link id; links without an entry are still pending.
    pub favicons: BTreeMap<String, FaviconSlot>,
    pub pet: DragState,
    pub pet_gaze: PupilOffset,
    pub music_drag: DragState,
    pub music: MusicPlayerState,
}

impl HomeState {
    pub fn drag(&self, target: DragTarget) -> &DragState {
        match target {
            DragTarget::PetWidget => &self.pet,
            DragTarget::MusicPlayer => &self.music_drag,
        }
    }

    pub fn drag_mut(&mut self, target: DragTarget) -> &mut DragState {
        match target {
            DragTarget::PetWidget => &mut self.pet,
            DragTarget::MusicPlayer => &mut self.music_drag,
        }
    }

    pub fn favicon(&self, link_id: &str) -> FaviconSlot {
        self.favicons.get(link_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_labels_name_the_mode_a_click_switches_to() {
        assert_eq!(ThemeMode::Dark.toggle_icon(), "☀️");
        assert_eq!(ThemeMode::Dark.toggle_label(), "白天模式");
        assert_eq!(ThemeMode::Light.toggle_icon(), "🌙");
        assert_eq!(ThemeMode::Light.toggle_label(), "夜间模式");
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn drag_targets_resolve_to_separate_states() {
        let mut state = HomeState::default();
        state.drag_mut(DragTarget::PetWidget).current = Point::new(5.0, 6.0);
        assert_eq!(state.drag(DragTarget::PetWidget).current, Point::new(5.0, 6.0));
        assert_eq!(state.drag(DragTarget::MusicPlayer).current, Point::default());
    }
}
