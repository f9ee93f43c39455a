//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::HomeRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: HomeRuntimeContext) {
    // Most effects hand off to timers or spawned tasks (drag bounce, instance lookup, autoplay,
    // theme write) that dispatch again later. Clearing the queue before running the batch keeps
    // those dispatches from replaying effects that already ran.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(runtime, effect);
        }
    });
}
