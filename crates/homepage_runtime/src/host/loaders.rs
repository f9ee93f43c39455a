use futures::future::join_all;
use leptos::{logging, on_cleanup, set_interval_with_handle, spawn_local, Callable, Callback};
use platform_host::ResourceProbe;

use crate::{
    background::{plan_background, static_fallback_url},
    catalog::{all_links, link_directory, LinkEntry},
    config::BACKGROUND_ROTATION_INTERVAL,
    fallback::{resolve_fallback_chain, FallbackOutcome},
    favicon::{favicon_chain, registrable_domain, FaviconSlot},
    host::HomeHostContext,
    reducer::HomeAction,
};

/// Resolves every link's favicon chain. Links run concurrently; each chain stays sequential.
pub(super) fn install_favicon_loader(host: HomeHostContext, dispatch: Callback<HomeAction>) {
    let probe = host.resource_probe();
    spawn_local(async move {
        let pending = all_links(link_directory()).map(|link| {
            let probe = probe.clone();
            async move { dispatch.call(resolve_favicon(probe.as_ref(), link).await) }
        });
        join_all(pending).await;
    });
}

pub(super) async fn resolve_favicon(probe: &dyn ResourceProbe, link: &LinkEntry) -> HomeAction {
    let domain = registrable_domain(&link.href);
    let slot = match resolve_fallback_chain(probe, &favicon_chain(&domain)).await {
        FallbackOutcome::Resolved { url, .. } => FaviconSlot::Image { url },
        FallbackOutcome::Exhausted { attempts } => {
            logging::log!("no favicon for {domain} after {attempts} attempts");
            FaviconSlot::Glyph
        }
    };
    HomeAction::FaviconResolved {
        link_id: link.link_id.clone(),
        slot,
    }
}

/// Loads a backdrop now and again on every rotation tick.
pub(super) fn install_background_rotation(host: HomeHostContext, dispatch: Callback<HomeAction>) {
    rotate_background(&host, dispatch);
    match set_interval_with_handle(
        move || rotate_background(&host, dispatch),
        BACKGROUND_ROTATION_INTERVAL,
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("background rotation timer failed: {err:?}"),
    }
}

fn rotate_background(host: &HomeHostContext, dispatch: Callback<HomeAction>) {
    let host = host.clone();
    spawn_local(async move { dispatch.call(resolve_background(&host).await) });
}

/// Picks a category and walks its chain; an exhausted chain lands on a static backdrop.
pub(super) async fn resolve_background(host: &HomeHostContext) -> HomeAction {
    let random = host.random_source();
    let plan = plan_background(random.as_ref());
    match resolve_fallback_chain(host.resource_probe().as_ref(), &plan.chain).await {
        FallbackOutcome::Resolved { url, .. } => HomeAction::BackgroundApplied {
            category: Some(plan.category.to_string()),
            url,
        },
        FallbackOutcome::Exhausted { .. } => {
            let url = static_fallback_url(random.as_ref());
            logging::log!("{} backdrop unavailable; using {url}", plan.category);
            HomeAction::BackgroundApplied {
                category: None,
                url: url.to_string(),
            }
        }
    }
}
