use dioxus::prelude::*;
use pages_core::{
    FieldMask, PageListFilter, PageSelector, ProjectId, Session, SessionState, WorkspaceSlug,
    select_pages,
};

use crate::Route;
use crate::components::PagesListItem;
use crate::context::{PagesContext, use_store_subscription};

const PAGES_LIST_CSS: Asset = asset!("/assets/styling/pages-list.css");

/// Tabbed list of a project's pages.
#[component]
pub fn PagesList(
    workspace_slug: WorkspaceSlug,
    project_id: ProjectId,
    tab: PageListFilter,
) -> Element {
    let ctx = use_context::<PagesContext>();
    let session = use_context::<Signal<SessionState>>();
    // Membership in a tab can change on any field, so listen to all of them.
    let revision = use_store_subscription(PageSelector::Project(project_id.clone()), FieldMask::ALL);

    let _ = revision();
    let viewer = session.read().current_user_id();
    let pages = ctx.store.project_pages(&project_id);
    let ids = select_pages(&pages, tab, viewer.as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_LIST_CSS }

        div { class: "pages-list",
            nav { class: "pages-tabs", role: "tablist",
                for filter in PageListFilter::TABS {
                    Link {
                        key: "{filter.slug()}",
                        to: Route::PagesList {
                            workspace_slug: workspace_slug.clone(),
                            project_id: project_id.clone(),
                            tab: filter,
                        },
                        class: if filter == tab { "pages-tab pages-tab-active" } else { "pages-tab" },
                        "{filter.label()}"
                    }
                }
            }

            if ids.is_empty() {
                div { class: "empty-state", "{tab.empty_message()}" }
            } else {
                div { class: "pages-rows",
                    for page_id in ids {
                        PagesListItem {
                            key: "{page_id}",
                            workspace_slug: workspace_slug.clone(),
                            project_id: project_id.clone(),
                            page_id,
                        }
                    }
                }
            }
        }
    }
}
