//! Reducer helpers for the music player's probe, binding and playback controls.

use crate::{
    music::{MusicPhase, MusicPlayerState},
    reducer::RuntimeEffect,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions driving [`MusicPlayerState`].
pub enum MusicAction {
    /// The player's marker element or global appeared during polling.
    MarkerDetected,
    /// Instance lookup found a player.
    InstanceBound {
        track_name: Option<String>,
        paused: bool,
    },
    /// Instance lookup came back empty after the marker appeared.
    InstanceMissing,
    /// The overall probe timeout elapsed.
    ProbeTimedOut,
    /// Bound player emitted `play` (`true`) or `pause` (`false`).
    PlaybackEvent {
        playing: bool,
    },
    /// Bound player started loading a track.
    TrackLoaded {
        track_name: Option<String>,
    },
    /// Periodic read of the bound player's real condition.
    Reconcile {
        paused: bool,
        track_name: Option<String>,
    },
    /// The fallback embed finished loading.
    FallbackLoaded,
    /// Play/pause control. `instance_paused` is the bound player's paused flag when known.
    TogglePlayback {
        instance_paused: Option<bool>,
    },
    ToggleMinimized,
    /// Floating re-open button.
    Reopen,
}

pub(super) fn reduce_music_action(
    music: &mut MusicPlayerState,
    action: MusicAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    match action {
        MusicAction::MarkerDetected => {
            if music.phase == MusicPhase::Probing && !music.marker_detected {
                music.marker_detected = true;
                effects.push(RuntimeEffect::StopMusicPolling);
                effects.push(RuntimeEffect::ScheduleInstanceLookup);
            }
        }
        MusicAction::InstanceBound { track_name, paused } => {
            if music.phase == MusicPhase::Probing {
                music.phase = MusicPhase::Bound;
                music.is_playing = !paused;
                music.current_track_name = track_name;
                effects.push(RuntimeEffect::CancelMusicDeadline);
                effects.push(RuntimeEffect::ScheduleAutoplay);
            }
        }
        MusicAction::InstanceMissing => {
            if music.phase == MusicPhase::Probing {
                effects.push(RuntimeEffect::CancelMusicDeadline);
                switch_to_fallback(music, effects);
            }
        }
        MusicAction::ProbeTimedOut => {
            effects.push(RuntimeEffect::StopMusicPolling);
            if music.phase != MusicPhase::Bound {
                switch_to_fallback(music, effects);
            }
        }
        MusicAction::PlaybackEvent { playing } => {
            if music.is_bound() {
                music.is_playing = playing;
            }
        }
        MusicAction::TrackLoaded { track_name } => {
            if music.is_bound() && track_name.is_some() {
                music.current_track_name = track_name;
            }
        }
        MusicAction::Reconcile { paused, track_name } => {
            if music.is_bound() {
                music.is_playing = !paused;
                if music.is_playing && track_name.is_some() {
                    music.current_track_name = track_name;
                }
            }
        }
        MusicAction::FallbackLoaded => {
            if music.phase == MusicPhase::Fallback {
                music.is_playing = true;
            }
        }
        MusicAction::TogglePlayback { instance_paused } => match music.phase {
            MusicPhase::Bound => {
                let paused = instance_paused.unwrap_or(!music.is_playing);
                if paused {
                    effects.push(RuntimeEffect::PlayerPlay);
                } else {
                    effects.push(RuntimeEffect::PlayerPause);
                }
                music.is_playing = paused;
            }
            // The embed cannot be driven from here; only the displayed flag flips.
            MusicPhase::Fallback => music.is_playing = !music.is_playing,
            MusicPhase::Probing => {}
        },
        MusicAction::ToggleMinimized => music.is_minimized = !music.is_minimized,
        MusicAction::Reopen => music.is_minimized = false,
    }
}

fn switch_to_fallback(music: &mut MusicPlayerState, effects: &mut Vec<RuntimeEffect>) {
    if music.fallback_injected {
        return;
    }
    music.phase = MusicPhase::Fallback;
    music.fallback_injected = true;
    effects.push(RuntimeEffect::InjectMusicFallback);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(music: &mut MusicPlayerState, action: MusicAction) -> Vec<RuntimeEffect> {
        let mut effects = Vec::new();
        reduce_music_action(music, action, &mut effects);
        effects
    }

    fn bound(paused: bool) -> MusicPlayerState {
        let mut music = MusicPlayerState::default();
        apply(&mut music, MusicAction::MarkerDetected);
        apply(
            &mut music,
            MusicAction::InstanceBound {
                track_name: Some("晴天".to_string()),
                paused,
            },
        );
        music
    }

    fn injections(effects: &[RuntimeEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| **effect == RuntimeEffect::InjectMusicFallback)
            .count()
    }

    #[test]
    fn marker_stops_polling_and_schedules_lookup_once() {
        let mut music = MusicPlayerState::default();
        assert_eq!(
            apply(&mut music, MusicAction::MarkerDetected),
            vec![
                RuntimeEffect::StopMusicPolling,
                RuntimeEffect::ScheduleInstanceLookup
            ]
        );
        assert!(apply(&mut music, MusicAction::MarkerDetected).is_empty());
    }

    #[test]
    fn binding_cancels_deadline_and_attempts_autoplay() {
        let mut music = MusicPlayerState::default();
        apply(&mut music, MusicAction::MarkerDetected);
        let effects = apply(
            &mut music,
            MusicAction::InstanceBound {
                track_name: None,
                paused: true,
            },
        );
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::CancelMusicDeadline,
                RuntimeEffect::ScheduleAutoplay
            ]
        );
        assert_eq!(music.phase, MusicPhase::Bound);
        assert!(!music.is_playing);

        assert!(apply(&mut music, MusicAction::ProbeTimedOut)
            .iter()
            .all(|effect| *effect != RuntimeEffect::InjectMusicFallback));
    }

    #[test]
    fn repeated_timeouts_inject_the_fallback_exactly_once() {
        let mut music = MusicPlayerState::default();
        let mut all = Vec::new();
        for _ in 0..3 {
            all.extend(apply(&mut music, MusicAction::ProbeTimedOut));
        }
        all.extend(apply(&mut music, MusicAction::InstanceMissing));
        assert_eq!(injections(&all), 1);
        assert_eq!(music.phase, MusicPhase::Fallback);
        assert!(music.fallback_injected);
    }

    #[test]
    fn missing_instance_switches_to_fallback_and_late_binding_is_ignored() {
        let mut music = MusicPlayerState::default();
        apply(&mut music, MusicAction::MarkerDetected);
        let effects = apply(&mut music, MusicAction::InstanceMissing);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::CancelMusicDeadline,
                RuntimeEffect::InjectMusicFallback
            ]
        );

        apply(
            &mut music,
            MusicAction::InstanceBound {
                track_name: None,
                paused: false,
            },
        );
        assert_eq!(music.phase, MusicPhase::Fallback);
        assert!(!music.is_playing);

        apply(&mut music, MusicAction::FallbackLoaded);
        assert!(music.is_playing);
    }

    #[test]
    fn bound_toggle_follows_the_instance_paused_flag() {
        let mut music = bound(true);
        assert_eq!(
            apply(
                &mut music,
                MusicAction::TogglePlayback {
                    instance_paused: Some(true)
                }
            ),
            vec![RuntimeEffect::PlayerPlay]
        );
        assert!(music.is_playing);

        assert_eq!(
            apply(
                &mut music,
                MusicAction::TogglePlayback {
                    instance_paused: Some(false)
                }
            ),
            vec![RuntimeEffect::PlayerPause]
        );
        assert!(!music.is_playing);
    }

    #[test]
    fn fallback_toggle_only_flips_the_local_flag() {
        let mut music = MusicPlayerState::default();
        apply(&mut music, MusicAction::ProbeTimedOut);
        let effects = apply(
            &mut music,
            MusicAction::TogglePlayback {
                instance_paused: None,
            },
        );
        assert!(effects.is_empty());
        assert!(music.is_playing);
    }

    #[test]
    fn probing_toggle_does_nothing() {
        let mut music = MusicPlayerState::default();
        let before = music.clone();
        assert!(apply(
            &mut music,
            MusicAction::TogglePlayback {
                instance_paused: None
            }
        )
        .is_empty());
        assert_eq!(music, before);
    }

    #[test]
    fn reconcile_overwrites_missed_events() {
        let mut music = bound(false);
        apply(&mut music, MusicAction::PlaybackEvent { playing: true });
        assert!(music.is_playing);

        apply(
            &mut music,
            MusicAction::Reconcile {
                paused: true,
                track_name: Some("七里香".to_string()),
            },
        );
        assert!(!music.is_playing);
        assert_eq!(music.current_track_name.as_deref(), Some("晴天"));

        apply(
            &mut music,
            MusicAction::Reconcile {
                paused: false,
                track_name: Some("七里香".to_string()),
            },
        );
        assert_eq!(music.title(), "正在播放：七里香");
    }

    #[test]
    fn minimize_toggles_and_reopen_restores() {
        let mut music = MusicPlayerState::default();
        apply(&mut music, MusicAction::ToggleMinimized);
        assert!(music.is_minimized);
        apply(&mut music, MusicAction::ToggleMinimized);
        assert!(!music.is_minimized);
        apply(&mut music, MusicAction::ToggleMinimized);
        apply(&mut music, MusicAction::Reopen);
        assert!(!music.is_minimized);
    }
}
