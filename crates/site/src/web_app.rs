use homepage_runtime::{HomeProvider, HomeShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="我的主页" />
        <Meta name="description" content="Personal start page with quick links, search and music." />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />

        <Router>
            <Routes>
                <Route path="" view=HomeEntry />
                <Route path="/*any" view=HomeEntry />
            </Routes>
        </Router>
    }
}

#[component]
pub fn HomeEntry() -> impl IntoView {
    view! {
        <HomeProvider host_services=build_host_services()>
            <HomeShell />
        </HomeProvider>
    }
}
