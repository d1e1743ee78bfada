use dioxus::prelude::*;
use pages_core::{
    MemberRoster, MemoryPageStore, PageId, PageListFilter, PagesConfig, PagesError, ProjectId,
    SessionState, WorkspaceSlug,
};
use views::{Home, Navbar, NotFound, PageDetail, PagesList};

/// Shared components: the page row, its menu and dialogs, toasts.
pub mod components;
pub mod context;
pub mod demo;
pub mod platform;
/// One component per route.
pub mod views;

use crate::components::toast::ToastProvider;
use crate::context::PagesContext;
use crate::demo::DemoWorkspace;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[nest("/:workspace_slug/projects/:project_id")]
            #[route("/pages?:tab")]
            PagesList { workspace_slug: WorkspaceSlug, project_id: ProjectId, tab: PageListFilter },
            #[route("/pages/:page_id")]
            PageDetail { workspace_slug: WorkspaceSlug, project_id: ProjectId, page_id: PageId },
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[component]
pub fn App() -> Element {
    let demo = use_hook(|| match DemoWorkspace::load() {
        Ok(demo) => Some(demo),
        Err(err) => {
            tracing::error!("bundled workspace failed to parse: {}", err);
            None
        }
    });

    let config = use_hook(load_config);

    use_context_provider(|| {
        let (store, members, projects) = match &demo {
            Some(demo) => (demo.store(), demo.roster(), vec![demo.project()]),
            None => (MemoryPageStore::new(), MemberRoster::default(), Vec::new()),
        };
        tracing::info!(pages = store.len(), members = members.len(), "page store seeded");
        PagesContext::new(store, members, config, projects)
    });

    let session = use_signal(|| {
        demo.as_ref()
            .map(DemoWorkspace::session)
            .unwrap_or_else(SessionState::default)
    });
    use_context_provider(|| session);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}

fn load_config() -> PagesConfig {
    let loaded = PagesConfig::from_lookup(|key| {
        // In the browser the app origin is wherever we were served from.
        #[cfg(all(target_family = "wasm", target_os = "unknown"))]
        if key == pages_core::config::ORIGIN_VAR {
            return web_sys::window().and_then(|window| window.location().origin().ok());
        }
        std::env::var(key).ok()
    });

    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{:?}", miette::Report::new(PagesError::from(err)));
            PagesConfig::default()
        }
    }
}
