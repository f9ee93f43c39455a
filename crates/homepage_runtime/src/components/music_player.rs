use leptos::*;

use super::drag_surface::{element_size, DragSurface};
use crate::{
    config::{MUSIC_FALLBACK_DOM_ID, MUSIC_FALLBACK_EMBED_URL, MUSIC_PLAYLIST_ID},
    drag::Anchor,
    model::DragTarget,
    music::MusicPhase,
    reducer::{HomeAction, MusicAction},
    runtime_context::use_home_runtime,
};

fn stop_pointer(ev: &web_sys::PointerEvent) {
    ev.stop_propagation();
}

#[component]
pub(super) fn MusicPlayer() -> impl IntoView {
    let runtime = use_home_runtime();
    let music = create_memo(move |_| runtime.state.get().music);
    let panel = create_memo(move |_| runtime.state.get().music_drag);
    let phase = create_memo(move |_| music.get().phase);
    // Binding must not re-render the body, or the embed's player would be destroyed.
    let fallback = create_memo(move |_| phase.get() == MusicPhase::Fallback);
    let node = create_node_ref::<html::Div>();
    let surface = DragSurface::new(runtime, DragTarget::MusicPlayer, node);

    // The body changes height when the player renders or the fallback replaces it, so measure
    // again on every phase change once the frame has been laid out.
    create_effect(move |_| {
        phase.track();
        if node.get().is_none() {
            return;
        }
        request_animation_frame(move || {
            let Some(element) = node.get_untracked() else {
                return;
            };
            runtime.dispatch_action(HomeAction::PlaceDraggable {
                target: DragTarget::MusicPlayer,
                anchor: Anchor::BottomLeft,
                viewport: runtime.host.get_value().viewport_size(),
                element: element_size(&element),
            });
        });
    });

    let dispatch_music =
        move |action: MusicAction| runtime.dispatch_action(HomeAction::Music(action));
    let toggle_playback = move |_| {
        let instance_paused = runtime
            .music
            .get_value()
            .player()
            .map(|player| player.is_paused());
        dispatch_music(MusicAction::TogglePlayback { instance_paused });
    };

    view! {
        <div
            id="musicPlayer"
            class="music-player"
            class:minimized=move || music.get().is_minimized
            class:dragging=move || panel.get().is_dragging
            node_ref=node
            style:transform=move || panel.get().transform()
        >
            <div
                class="music-player-header"
                style:touch-action="none"
                on:pointerdown=move |ev| surface.begin(&ev)
            >
                <span id="musicTitle" class="music-title">{move || music.get().title()}</span>
                <div class="music-controls">
                    <button
                        id="musicToggle"
                        class="music-toggle"
                        type="button"
                        on:pointerdown=move |ev| stop_pointer(&ev)
                        on:click=toggle_playback
                    >
                        <span id="toggleIcon">{move || music.get().toggle_glyph()}</span>
                    </button>
                    <button
                        id="musicMinimize"
                        class="music-minimize"
                        type="button"
                        on:pointerdown=move |ev| stop_pointer(&ev)
                        on:click=move |_| dispatch_music(MusicAction::ToggleMinimized)
                    >
                        "−"
                    </button>
                </div>
            </div>
            <div id="musicPlayerBody" class="music-player-body">
                {move || {
                    if fallback.get() {
                        view! {
                            <iframe
                                id=MUSIC_FALLBACK_DOM_ID
                                frameborder="no"
                                border="0"
                                marginwidth="0"
                                marginheight="0"
                                width="100%"
                                height="90"
                                src=MUSIC_FALLBACK_EMBED_URL
                                on:load=move |_| dispatch_music(MusicAction::FallbackLoaded)
                            ></iframe>
                        }
                            .into_view()
                    } else {
                        view! {
                            <meting-js
                                server="netease"
                                type="playlist"
                                id=MUSIC_PLAYLIST_ID
                                autoplay="true"
                                list-folded="true"
                            ></meting-js>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
        <button
            id="musicFloatBtn"
            class="music-float-btn"
            class:show=move || music.get().is_minimized
            type="button"
            on:click=move |_| dispatch_music(MusicAction::Reopen)
        >
            "🎵"
        </button>
    }
}
