use leptos::*;

use crate::{
    catalog::{link_directory, LinkCategory, LinkEntry},
    favicon::{FaviconSlot, FAVICON_GLYPH, FAVICON_GLYPH_SIZE},
    runtime_context::use_home_runtime,
};

#[component]
pub(super) fn LinkDirectory() -> impl IntoView {
    view! {
        <main class="link-directory">
            {link_directory()
                .iter()
                .map(|category| view! { <CategorySection category /> })
                .collect_view()}
        </main>
    }
}

#[component]
fn CategorySection(category: &'static LinkCategory) -> impl IntoView {
    let runtime = use_home_runtime();
    let category_id = category.category_id.as_str();
    let visible = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.visibility.category_visible(category_id))
    });

    view! {
        <section
            id=category.dom_id()
            class="category"
            class:hidden=move || !visible.get()
            data-category=category.name.as_str()
        >
            <h2 class="category-title">
                {category.glyph.as_deref().map(|glyph| view! { <span class="category-glyph">{glyph}</span> })}
                <span>{category.name.as_str()}</span>
            </h2>
            <div class="link-grid">
                {category
                    .links
                    .iter()
                    .map(|link| view! { <LinkCard link /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn LinkCard(link: &'static LinkEntry) -> impl IntoView {
    let runtime = use_home_runtime();
    let link_id = link.link_id.as_str();
    let visible = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.visibility.link_visible(link_id))
    });
    let favicon = create_memo(move |_| runtime.state.with(|state| state.favicon(link_id)));

    view! {
        <a
            class="link-card"
            class:hidden=move || !visible.get()
            href=link.href.as_str()
            target="_blank"
            rel="noopener noreferrer"
            data-name=link.name.as_str()
        >
            <div class="link-icon">
                {move || match favicon.get() {
                    FaviconSlot::Pending => view! { <span class="link-icon-pending"></span> }.into_view(),
                    FaviconSlot::Image { url } => {
                        view! { <img src=url alt=link.name.as_str() loading="lazy" /> }.into_view()
                    }
                    FaviconSlot::Glyph => {
                        view! {
                            <span class="link-icon-glyph" style:font-size=FAVICON_GLYPH_SIZE>
                                {FAVICON_GLYPH}
                            </span>
                        }
                            .into_view()
                    }
                }}
            </div>
            <div class="link-name">{link.name.as_str()}</div>
            {link.description.as_deref().map(|description| view! { <div class="link-desc">{description}</div> })}
        </a>
    }
}
