pub mod background;
pub mod catalog;
pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod fallback;
pub mod favicon;
mod host;
pub mod model;
pub mod music;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod search;

pub use components::HomeShell;
pub use host::HomeHostContext;
pub use model::*;
pub use reducer::{reduce_home, HomeAction, MusicAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_home_runtime, HomeProvider, HomeRuntimeContext};
