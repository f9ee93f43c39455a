//! Reducer actions, side-effect intents, and transition logic for the homepage runtime.

mod interaction;
mod music;

use thiserror::Error;

use crate::{
    catalog::{find_link, LinkCategory},
    drag::Anchor,
    favicon::FaviconSlot,
    model::{DragTarget, HomeState, Point, Size, ThemeMode},
    search::{external_search_url, filter_directory, normalize_query, SearchEngineId},
};

pub use self::music::MusicAction;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_home`] to mutate [`HomeState`].
pub enum HomeAction {
    /// Apply the persisted theme at startup without transitions.
    HydrateTheme {
        /// Stored dark-mode flag.
        dark: bool,
    },
    /// Flip between light and dark mode and persist the result.
    ToggleTheme,
    /// Select a search engine by id and close the picker.
    SetEngine {
        /// One of the [`SearchEngineId`] ids.
        engine_id: String,
    },
    ToggleEngineMenu,
    /// Close the picker (outside click).
    CloseEngineMenu,
    /// The search field's text changed.
    QueryInput {
        /// Current field text.
        text: String,
    },
    /// Explicit submit (button or Enter).
    SubmitSearch,
    /// Global shortcut asking to focus and select the search field.
    FocusSearch,
    /// Escape inside the search field: clear, refilter, blur.
    ClearSearch,
    /// A backdrop image finished loading.
    BackgroundApplied {
        /// Category the image was requested for; `None` for a static fallback.
        category: Option<String>,
        /// Applied image URL.
        url: String,
    },
    /// A favicon chain settled for one link.
    FaviconResolved {
        /// Link id from the directory.
        link_id: String,
        /// Image that loaded, or the glyph.
        slot: FaviconSlot,
    },
    /// Give a draggable its measured size and, on first placement, its anchor position.
    PlaceDraggable {
        target: DragTarget,
        anchor: Anchor,
        viewport: Size,
        element: Size,
    },
    /// Start a drag. `element` is measured at pointer-down.
    BeginDrag {
        target: DragTarget,
        pointer: Point,
        viewport: Size,
        element: Size,
    },
    UpdateDrag {
        target: DragTarget,
        pointer: Point,
    },
    EndDrag {
        target: DragTarget,
    },
    /// Toggle the post-release bounce transition.
    SetDragTransition {
        target: DragTarget,
        active: bool,
    },
    /// The window resized; `element` is the draggable's size re-measured at that moment.
    ViewportResized {
        target: DragTarget,
        viewport: Size,
        element: Size,
    },
    /// Pointer moved anywhere on the page; drives the pet's gaze.
    GazeMoved {
        pointer: Point,
        widget_center: Point,
    },
    Music(MusicAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by [`reduce_home`] and executed by the host layer.
pub enum RuntimeEffect {
    /// Persist the current theme mode.
    PersistTheme,
    /// Open a URL in a new browsing context.
    OpenExternalUrl(String),
    /// Smooth-scroll a category section into view.
    ScrollToCategory(String),
    /// Focus and select the search field.
    FocusSearchInput,
    BlurSearchInput,
    /// Start the delayed bounce transition after a drag release.
    ScheduleDragBounce(DragTarget),
    /// Cancel the periodic music-player marker poll.
    StopMusicPolling,
    /// Wait for the player to settle, then look for its instance.
    ScheduleInstanceLookup,
    /// Cancel the overall probe timeout.
    CancelMusicDeadline,
    /// The fallback embed replaced the player body.
    InjectMusicFallback,
    /// Try one autoplay call shortly after binding.
    ScheduleAutoplay,
    PlayerPlay,
    PlayerPause,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions naming something outside the known sets.
pub enum ReducerError {
    #[error("unknown search engine `{0}`")]
    UnknownSearchEngine(String),
    #[error("unknown link `{0}`")]
    UnknownLink(String),
}

/// Applies a [`HomeAction`] to the page state and collects resulting side effects.
///
/// `directory` is the link directory that search filtering and favicon updates refer to.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action names an unknown engine or link. The state is left
/// unchanged in that case.
pub fn reduce_home(
    state: &mut HomeState,
    directory: &[LinkCategory],
    action: HomeAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if interaction::reduce_interaction_action(state, &action, &mut effects) {
        return Ok(effects);
    }

    match action {
        HomeAction::HydrateTheme { dark } => {
            state.theme.mode = ThemeMode::from_dark_flag(dark);
            state.theme.transitions_enabled = false;
        }
        HomeAction::ToggleTheme => {
            state.theme.mode = state.theme.mode.toggled();
            state.theme.transitions_enabled = true;
            effects.push(RuntimeEffect::PersistTheme);
        }
        HomeAction::SetEngine { engine_id } => {
            let engine = SearchEngineId::from_id(&engine_id)
                .ok_or(ReducerError::UnknownSearchEngine(engine_id))?;
            state.search.engine = engine;
            state.search.menu_open = false;
        }
        HomeAction::ToggleEngineMenu => {
            state.search.menu_open = !state.search.menu_open;
        }
        HomeAction::CloseEngineMenu => {
            state.search.menu_open = false;
        }
        HomeAction::QueryInput { text } => {
            state.search.query_text = text;
            if state.search.engine.is_site() {
                run_site_filter(state, directory, &mut effects);
            }
        }
        HomeAction::SubmitSearch => {
            if normalize_query(&state.search.query_text).is_empty() {
                return Ok(effects);
            }
            if state.search.engine.is_site() {
                run_site_filter(state, directory, &mut effects);
            } else if let Some(url) =
                external_search_url(state.search.engine, &state.search.query_text)
            {
                effects.push(RuntimeEffect::OpenExternalUrl(url));
            }
        }
        HomeAction::FocusSearch => effects.push(RuntimeEffect::FocusSearchInput),
        HomeAction::ClearSearch => {
            state.search.query_text.clear();
            run_site_filter(state, directory, &mut effects);
            effects.push(RuntimeEffect::BlurSearchInput);
        }
        HomeAction::BackgroundApplied { category, url } => {
            state.background.image_url = Some(url);
            state.background.category = category;
            state.background.loaded = true;
        }
        HomeAction::FaviconResolved { link_id, slot } => {
            if find_link(directory, &link_id).is_none() {
                return Err(ReducerError::UnknownLink(link_id));
            }
            state.favicons.insert(link_id, slot);
        }
        HomeAction::Music(action) => {
            music::reduce_music_action(&mut state.music, action, &mut effects);
        }
        HomeAction::PlaceDraggable { .. }
        | HomeAction::BeginDrag { .. }
        | HomeAction::UpdateDrag { .. }
        | HomeAction::EndDrag { .. }
        | HomeAction::SetDragTransition { .. }
        | HomeAction::ViewportResized { .. }
        | HomeAction::GazeMoved { .. } => {}
    }

    Ok(effects)
}

fn run_site_filter(
    state: &mut HomeState,
    directory: &[LinkCategory],
    effects: &mut Vec<RuntimeEffect>,
) {
    state.visibility = filter_directory(directory, &state.search.query_text);
    if let Some(category_id) = state.visibility.first_visible_category.clone() {
        effects.push(RuntimeEffect::ScrollToCategory(category_id));
    }
}
