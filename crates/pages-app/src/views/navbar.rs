use dioxus::prelude::*;
use pages_core::{MemberDirectory, ProjectId, Role, Session, SessionState};

use crate::Route;
use crate::context::PagesContext;

/// Layout around every route: breadcrumbs plus who you are acting as.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let ctx = use_context::<PagesContext>();
    let session = use_context::<Signal<SessionState>>();

    let project = match &route {
        Route::PagesList {
            workspace_slug,
            project_id,
            ..
        }
        | Route::PageDetail {
            workspace_slug,
            project_id,
            ..
        } => Some((workspace_slug.clone(), project_id.clone())),
        _ => None,
    };

    let viewer = session
        .read()
        .current_user_id()
        .map(|id| {
            ctx.members
                .member(&id)
                .map(|member| member.display_name.to_string())
                .unwrap_or_else(|| id.to_string())
        })
        .unwrap_or_else(|| "Signed out".to_string());

    rsx! {
        div { id: "navbar",
            nav { class: "breadcrumbs",
                Link { to: Route::Home {}, class: "breadcrumb", "Home" }
                if let Some((workspace_slug, project_id)) = project.clone() {
                    span { class: "breadcrumb-separator", " > " }
                    span { class: "breadcrumb", "{workspace_slug}" }
                    span { class: "breadcrumb-separator", " > " }
                    Link {
                        to: Route::PagesList {
                            workspace_slug: workspace_slug.clone(),
                            project_id: project_id.clone(),
                            tab: Default::default(),
                        },
                        class: "breadcrumb breadcrumb-current",
                        "{project_id} pages"
                    }
                }
            }
            div { class: "navbar-session",
                span { class: "navbar-user", "{viewer}" }
                if let Some((_, project_id)) = project {
                    RoleSelect { project_id }
                }
            }
        }
        Outlet::<Route> {}
    }
}

/// Switch the viewer's role in a project, to preview what each role sees.
#[component]
fn RoleSelect(project_id: ProjectId) -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let current = session.read().project_role(&project_id);
    let selected = current.map(Role::wire_value).unwrap_or_default();

    rsx! {
        select {
            class: "role-select",
            aria_label: "Project role",
            value: "{selected}",
            onchange: move |evt| {
                let role = evt
                    .value()
                    .parse::<u8>()
                    .ok()
                    .and_then(|value| Role::try_from(value).ok());
                let mut session = session.write();
                match role {
                    Some(role) => {
                        tracing::info!(project = %project_id, %role, "switching project role");
                        session.set_project_role(project_id.clone(), role);
                    }
                    None => {
                        tracing::info!(project = %project_id, "leaving project");
                        session.remove_project_role(&project_id);
                    }
                }
            },
            option { value: "0", selected: current.is_none(), "Not a member" }
            for role in Role::ALL {
                option {
                    key: "{role.wire_value()}",
                    value: "{role.wire_value()}",
                    selected: current == Some(role),
                    "{role.label()}"
                }
            }
        }
    }
}
