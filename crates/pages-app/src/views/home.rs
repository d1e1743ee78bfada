use dioxus::prelude::*;
use pages_core::PageListFilter;

use crate::Route;
use crate::context::PagesContext;

#[component]
pub fn Home() -> Element {
    let ctx = use_context::<PagesContext>();

    rsx! {
        div { class: "home",
            h1 { "Projects" }
            if ctx.projects.is_empty() {
                p { class: "empty-state", "No projects to show." }
            }
            ul { class: "project-list",
                for project in ctx.projects.iter() {
                    li { key: "{project.workspace_slug}/{project.project_id}",
                        Link {
                            to: Route::PagesList {
                                workspace_slug: project.workspace_slug.clone(),
                                project_id: project.project_id.clone(),
                                tab: PageListFilter::default(),
                            },
                            "{project.workspace_slug} / {project.project_id}"
                        }
                    }
                }
            }
        }
    }
}
