//! Binding to the third-party music player injected by the page's embed script.
//!
//! The player is reached through duck-typed globals, so every access goes through `Reflect` and
//! absence of any property is a normal "not there yet" answer.

use std::{cell::RefCell, rc::Rc};

use leptos::{
    leptos_dom::helpers::{IntervalHandle, TimeoutHandle},
    logging, set_interval_with_handle, set_timeout, set_timeout_with_handle, SignalGetUntracked,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::{
    config::{
        MUSIC_AUTOPLAY_DELAY, MUSIC_INIT_DELAY, MUSIC_PROBE_PERIOD, MUSIC_PROBE_TIMEOUT,
        MUSIC_RECONCILE_PERIOD, MUSIC_SETTLE_DELAY,
    },
    music::MusicPhase,
    reducer::{HomeAction, MusicAction},
    runtime_context::HomeRuntimeContext,
};

#[derive(Clone)]
/// Handle to a bound player instance.
pub struct PlayerHandle {
    #[cfg(target_arch = "wasm32")]
    instance: JsValue,
}

#[cfg(target_arch = "wasm32")]
impl PlayerHandle {
    fn property(target: &JsValue, key: &str) -> Option<JsValue> {
        js_sys::Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn call_method(&self, name: &str, args: &[JsValue]) -> Result<JsValue, String> {
        let method = Self::property(&self.instance, name)
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| format!("player has no `{name}` method"))?;
        let args: js_sys::Array = args.iter().collect();
        method
            .apply(&self.instance, &args)
            .map_err(|err| format!("{err:?}"))
    }

    fn has_audio(&self) -> bool {
        Self::property(&self.instance, "audio").is_some()
    }

    /// The player's audio element `paused` flag; a player without audio counts as paused.
    pub fn is_paused(&self) -> bool {
        Self::property(&self.instance, "audio")
            .and_then(|audio| Self::property(&audio, "paused"))
            .and_then(|paused| paused.as_bool())
            .unwrap_or(true)
    }

    /// Name of the playlist entry at the current index.
    pub fn current_track_name(&self) -> Option<String> {
        let list = Self::property(&self.instance, "list")?;
        let audios = Self::property(&list, "audios")?.dyn_into::<js_sys::Array>().ok()?;
        let index = Self::property(&list, "index")?.as_f64()? as u32;
        Self::property(&audios.get(index), "name")?.as_string()
    }

    fn play(&self) -> Result<(), String> {
        let result = self.call_method("play", &[])?;
        if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
            let on_reject = Closure::<dyn FnMut(JsValue)>::once(|err: JsValue| {
                logging::warn!("music playback rejected: {err:?}");
            });
            let _ = promise.catch(&on_reject);
            on_reject.forget();
        }
        Ok(())
    }

    fn pause(&self) -> Result<(), String> {
        self.call_method("pause", &[]).map(|_| ())
    }

    fn on(&self, event: &str, listener: &Closure<dyn FnMut()>) -> Result<(), String> {
        self.call_method(
            "on",
            &[JsValue::from_str(event), listener.as_ref().clone()],
        )
        .map(|_| ())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PlayerHandle {
    pub fn is_paused(&self) -> bool {
        true
    }

    pub fn current_track_name(&self) -> Option<String> {
        None
    }

    fn has_audio(&self) -> bool {
        false
    }

    fn play(&self) -> Result<(), String> {
        Err("no music player outside the browser".to_string())
    }

    fn pause(&self) -> Result<(), String> {
        Err("no music player outside the browser".to_string())
    }
}

/// Whether the embed script's global or its rendered player element exists yet.
fn marker_present() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if PlayerHandle::property(&window, "MetingJSElement").is_some() {
            return true;
        }
        window
            .document()
            .and_then(|document| document.query_selector(".aplayer").ok().flatten())
            .is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Tries the known instance locations in order: the `APlayer.instances` registry, the rendered
/// element's `aplayer` property, then the `aplayers` global.
fn locate_player_instance() -> Option<PlayerHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let element = window.document()?.query_selector(".aplayer").ok().flatten()?;
        let first_of = |value: JsValue| {
            value
                .dyn_into::<js_sys::Array>()
                .ok()
                .map(|items| items.get(0))
                .filter(|item| !item.is_undefined() && !item.is_null())
        };

        PlayerHandle::property(&window, "APlayer")
            .and_then(|registry| PlayerHandle::property(&registry, "instances"))
            .and_then(first_of)
            .or_else(|| PlayerHandle::property(&element, "aplayer"))
            .or_else(|| PlayerHandle::property(&window, "aplayers").and_then(first_of))
            .map(|instance| PlayerHandle { instance })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[derive(Default)]
struct BridgeSlots {
    player: Option<PlayerHandle>,
    poll: Option<IntervalHandle>,
    deadline: Option<TimeoutHandle>,
    reconcile: Option<IntervalHandle>,
    #[cfg(target_arch = "wasm32")]
    listeners: Vec<Closure<dyn FnMut()>>,
}

#[derive(Clone, Default)]
/// Owns the probe timers, the reconciliation tick and the bound player with its event listeners.
pub struct MusicBridge {
    slots: Rc<RefCell<BridgeSlots>>,
}

impl MusicBridge {
    pub fn player(&self) -> Option<PlayerHandle> {
        self.slots.borrow().player.clone()
    }

    pub fn stop_polling(&self) {
        if let Some(poll) = self.slots.borrow_mut().poll.take() {
            poll.clear();
        }
    }

    pub fn cancel_deadline(&self) {
        if let Some(deadline) = self.slots.borrow_mut().deadline.take() {
            deadline.clear();
        }
    }

    pub fn play(&self) {
        let Some(player) = self.player() else {
            return;
        };
        if let Err(err) = player.play() {
            logging::warn!("music play failed: {err}");
        }
    }

    pub fn pause(&self) {
        let Some(player) = self.player() else {
            return;
        };
        if let Err(err) = player.pause() {
            logging::warn!("music pause failed: {err}");
        }
    }

    /// Cancels every timer and drops the player binding.
    pub fn teardown(&self) {
        self.stop_polling();
        self.cancel_deadline();
        let mut slots = self.slots.borrow_mut();
        if let Some(reconcile) = slots.reconcile.take() {
            reconcile.clear();
        }
        slots.player = None;
        #[cfg(target_arch = "wasm32")]
        slots.listeners.clear();
    }
}

pub(super) fn install_music_probe(runtime: HomeRuntimeContext) {
    set_timeout(move || start_probe(runtime), MUSIC_INIT_DELAY);
}

fn start_probe(runtime: HomeRuntimeContext) {
    let bridge = runtime.music.get_value();

    match set_interval_with_handle(
        move || {
            if marker_present() {
                runtime.dispatch_action(HomeAction::Music(MusicAction::MarkerDetected));
            }
        },
        MUSIC_PROBE_PERIOD,
    ) {
        Ok(poll) => bridge.slots.borrow_mut().poll = Some(poll),
        Err(err) => logging::warn!("music probe timer failed: {err:?}"),
    }

    match set_timeout_with_handle(
        move || runtime.dispatch_action(HomeAction::Music(MusicAction::ProbeTimedOut)),
        MUSIC_PROBE_TIMEOUT,
    ) {
        Ok(deadline) => bridge.slots.borrow_mut().deadline = Some(deadline),
        Err(err) => logging::warn!("music probe deadline failed: {err:?}"),
    }

    let reconcile_bridge = bridge.clone();
    match set_interval_with_handle(
        move || {
            let Some(player) = reconcile_bridge.player() else {
                return;
            };
            runtime.dispatch_action(HomeAction::Music(MusicAction::Reconcile {
                paused: player.is_paused(),
                track_name: player.current_track_name(),
            }));
        },
        MUSIC_RECONCILE_PERIOD,
    ) {
        Ok(reconcile) => bridge.slots.borrow_mut().reconcile = Some(reconcile),
        Err(err) => logging::warn!("music reconcile timer failed: {err:?}"),
    }
}

pub(super) fn schedule_instance_lookup(runtime: HomeRuntimeContext) {
    set_timeout(move || look_up_instance(runtime), MUSIC_SETTLE_DELAY);
}

fn look_up_instance(runtime: HomeRuntimeContext) {
    if runtime.state.get_untracked().music.phase != MusicPhase::Probing {
        return;
    }
    let Some(player) = locate_player_instance() else {
        logging::log!("music player marker found but no instance is reachable");
        runtime.dispatch_action(HomeAction::Music(MusicAction::InstanceMissing));
        return;
    };

    let bridge = runtime.music.get_value();
    subscribe_player_events(&bridge, &player, runtime);
    let paused = player.is_paused();
    let track_name = player.current_track_name();
    bridge.slots.borrow_mut().player = Some(player);
    logging::log!("music player bound");
    runtime.dispatch_action(HomeAction::Music(MusicAction::InstanceBound {
        track_name,
        paused,
    }));
}

#[cfg(target_arch = "wasm32")]
fn subscribe_player_events(bridge: &MusicBridge, player: &PlayerHandle, runtime: HomeRuntimeContext) {
    let playing = |playing: bool| -> Closure<dyn FnMut()> {
        Closure::new(move || {
            runtime.dispatch_action(HomeAction::Music(MusicAction::PlaybackEvent { playing }));
        })
    };
    let loaded = {
        let player = player.clone();
        Closure::<dyn FnMut()>::new(move || {
            runtime.dispatch_action(HomeAction::Music(MusicAction::TrackLoaded {
                track_name: player.current_track_name(),
            }));
        })
    };

    let mut slots = bridge.slots.borrow_mut();
    for (event, listener) in [
        ("play", playing(true)),
        ("pause", playing(false)),
        ("loadstart", loaded),
    ] {
        if let Err(err) = player.on(event, &listener) {
            logging::warn!("music player `{event}` subscription failed: {err}");
        }
        slots.listeners.push(listener);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn subscribe_player_events(_: &MusicBridge, _: &PlayerHandle, _: HomeRuntimeContext) {}

/// One autoplay attempt after binding. Browsers commonly refuse it; that is only logged.
pub(super) fn schedule_autoplay(runtime: HomeRuntimeContext) {
    set_timeout(
        move || {
            let Some(player) = runtime.music.get_value().player() else {
                return;
            };
            if !player.has_audio() {
                return;
            }
            if let Err(err) = player.play() {
                logging::log!("music autoplay blocked: {err}");
            }
        },
        MUSIC_AUTOPLAY_DELAY,
    );
}
