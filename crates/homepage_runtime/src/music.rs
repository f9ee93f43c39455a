//! Playback state for the embedded music player panel.
//!
//! The panel starts out [`MusicPhase::Probing`] for a third-party player instance. It becomes
//! [`MusicPhase::Bound`] when one is found and [`MusicPhase::Fallback`] when the probe gives up or
//! the marker appears without a usable instance. Both are terminal.

use serde::{Deserialize, Serialize};

const DEFAULT_SOURCE_NAME: &str = "网易云音乐";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MusicPhase {
    #[default]
    Probing,
    Bound,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MusicPlayerState {
    pub phase: MusicPhase,
    /// Mirrored from the bound instance; only a local guess in the fallback phase.
    pub is_playing: bool,
    pub is_minimized: bool,
    pub current_track_name: Option<String>,
    /// The player's marker element or global was seen; instance lookup is pending or done.
    pub marker_detected: bool,
    pub fallback_injected: bool,
}

impl MusicPlayerState {
    pub fn title(&self) -> String {
        match (self.is_playing, self.current_track_name.as_deref()) {
            (true, Some(track)) => format!("正在播放：{track}"),
            (true, None) => format!("正在播放：{DEFAULT_SOURCE_NAME}"),
            (false, _) => DEFAULT_SOURCE_NAME.to_string(),
        }
    }

    pub fn toggle_glyph(&self) -> &'static str {
        if self.is_playing {
            "⏸️"
        } else {
            "▶️"
        }
    }

    pub fn is_bound(&self) -> bool {
        self.phase == MusicPhase::Bound
    }
}
