use dioxus::prelude::*;
use pages_core::{
    FieldMask, PageField, PageId, PageListFilter, PageLookup, PageSelector, ProjectId,
    WorkspaceSlug,
};

use crate::Route;
use crate::context::{PagesContext, use_store_subscription};

/// Where a row click lands. The page editor itself is out of scope here;
/// this shows enough to confirm the navigation target.
#[component]
pub fn PageDetail(workspace_slug: WorkspaceSlug, project_id: ProjectId, page_id: PageId) -> Element {
    let ctx = use_context::<PagesContext>();
    let revision = use_store_subscription(
        PageSelector::Page(page_id.clone()),
        FieldMask::of(&[PageField::Name, PageField::Archived, PageField::Timestamps]),
    );

    let _ = revision();
    let back = Route::PagesList {
        workspace_slug,
        project_id,
        tab: PageListFilter::default(),
    };

    let Some(page) = ctx.store.page(&page_id) else {
        return rsx! {
            div { class: "page-detail",
                p { class: "empty-state", "This page doesn't exist or was deleted." }
                Link { to: back, "Back to pages" }
            }
        };
    };

    let archived = page.archived_at.map(|at| ctx.formatter.date(&at));
    let updated = format!(
        "Last updated {} at {}",
        ctx.formatter.date(&page.updated_at),
        ctx.formatter.time(&page.updated_at)
    );

    rsx! {
        div { class: "page-detail",
            Link { to: back, class: "page-detail-back", "← Pages" }
            h1 { class: "page-detail-title", "{page.name}" }
            if let Some(archived) = archived {
                div { class: "page-detail-banner", "Archived on {archived}" }
            }
            p { class: "page-detail-meta", "{updated}" }
        }
    }
}
