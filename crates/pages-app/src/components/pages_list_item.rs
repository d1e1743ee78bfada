//! One row of a project's page list.

use std::future::Future;

use dioxus::prelude::*;
use pages_core::{
    ActionOutcome, MemoryPageStore, MenuItem, ModalKind, ModalState, PageAccess, PageId,
    PageRowActions, PageRowView, PageScope, PageSelector, PageUpdate, ProjectId, ROW_FIELDS,
    RowState, SessionState, WorkspaceSlug, claim_key,
};

use crate::components::icons::{ClockIcon, GlobeIcon, InfoIcon, LockIcon, PageIcon, StarIcon};
use crate::components::page_dialogs::{DeletePageDialog, EditPageDialog};
use crate::components::row_menu::RowMenu;
use crate::components::toast::{ToastQueue, use_toasts};
use crate::context::{PagesContext, use_store_subscription};
use crate::platform::{BrowserClipboard, DomEvent, RouterNavigator};

pub type RowActions = PageRowActions<MemoryPageStore, ToastQueue, BrowserClipboard>;

/// Store calls finish even if the row goes away before they resolve.
fn run_detached(task: impl Future<Output = ActionOutcome> + 'static) {
    spawn_forever(async move {
        let _ = task.await;
    });
}

/// A page row: title, labels, last-touched time, favourite and visibility
/// toggles, and the actions menu. Renders nothing if the page is not in the
/// store.
#[component]
pub fn PagesListItem(
    workspace_slug: WorkspaceSlug,
    project_id: ProjectId,
    page_id: PageId,
) -> Element {
    let ctx = use_context::<PagesContext>();
    let session = use_context::<Signal<SessionState>>();
    let toasts = use_toasts();
    let navigator = RouterNavigator::new(use_navigator());
    let revision = use_store_subscription(PageSelector::Page(page_id.clone()), ROW_FIELDS);
    let mut modals = use_signal(ModalState::default);
    let mut busy = use_signal(|| false);

    let actions: RowActions = use_hook(|| {
        PageRowActions::new(
            PageScope::new(workspace_slug.clone(), project_id.clone(), page_id.clone()),
            ctx.store.clone(),
            toasts,
            BrowserClipboard,
            ctx.config.origin.clone(),
        )
    });
    {
        let lifecycle = actions.lifecycle();
        use_drop(move || lifecycle.unmount());
    }

    // Subscribe this render to store changes for the page.
    let _ = revision();
    let Some(view) = PageRowView::resolve(
        &ctx.store,
        &*session.read(),
        &*ctx.members,
        actions.scope(),
        &ctx.formatter,
    ) else {
        return rsx! {};
    };

    let click_actions = actions.clone();
    let key_actions = actions.clone();
    let favorite_actions = actions.clone();
    let access_actions = actions.clone();
    let menu_actions = actions.clone();
    let edit_actions = actions.clone();
    let delete_actions = actions;

    let row_class = match view.state {
        RowState::Active => "page-row",
        RowState::Archived => "page-row page-row-archived",
    };
    let edit_open = modals.read().is_open(ModalKind::CreateUpdate);
    let delete_open = modals.read().is_open(ModalKind::Delete);

    rsx! {
        div {
            class: row_class,
            role: "link",
            tabindex: "0",
            "data-href": "{view.href}",
            onclick: move |evt: MouseEvent| {
                click_actions.open_page(&DomEvent::new(&evt), &navigator);
            },
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string();
                key_actions.open_page_on_key(&DomEvent::new(&evt), &key, &navigator);
            },

            div { class: "page-row-main",
                PageIcon {}
                span { class: "page-row-title", "{view.name}" }
            }

            div { class: "page-row-meta",
                if !view.labels.is_empty() {
                    div { class: "page-row-labels",
                        for chip in view.labels.iter() {
                            span {
                                key: "{chip.id}",
                                class: "label-chip",
                                style: "background-color: {chip.background}; color: {chip.color};",
                                "{chip.name}"
                            }
                        }
                    }
                }

                span { class: "page-row-timestamp", title: "{view.timestamp.tooltip}",
                    ClockIcon {}
                    "{view.timestamp.text}"
                }

                if let Some(favorite) = view.favorite {
                    button {
                        class: if favorite.is_favorite { "row-icon-button favorite active" } else { "row-icon-button favorite" },
                        title: favorite.tooltip(),
                        aria_label: favorite.tooltip(),
                        aria_pressed: "{favorite.is_favorite}",
                        onkeydown: move |evt: KeyboardEvent| claim_key(&mut DomEvent::new(&evt)),
                        onclick: move |evt: MouseEvent| {
                            let mut dom = DomEvent::new(&evt);
                            run_detached(favorite_actions.toggle_favorite(&mut dom, favorite.is_favorite));
                        },
                        StarIcon { filled: favorite.is_favorite }
                    }
                }

                if let Some(access) = view.access {
                    button {
                        class: "row-icon-button access",
                        title: access.tooltip(),
                        aria_label: access.tooltip(),
                        onkeydown: move |evt: KeyboardEvent| claim_key(&mut DomEvent::new(&evt)),
                        onclick: move |evt: MouseEvent| {
                            let mut dom = DomEvent::new(&evt);
                            run_detached(access_actions.toggle_access(&mut dom, access.access));
                        },
                        match access.access {
                            PageAccess::Private => rsx! { LockIcon {} },
                            PageAccess::Public => rsx! { GlobeIcon {} },
                        }
                    }
                }

                span { class: "page-row-info", title: "{view.created_by}", InfoIcon {} }

                RowMenu {
                    items: view.menu.clone(),
                    on_select: move |(item, evt): (MenuItem, MouseEvent)| {
                        let mut dom = DomEvent::new(&evt);
                        match item {
                            MenuItem::Edit => menu_actions.open_edit(&mut dom, &mut modals.write()),
                            MenuItem::Delete => menu_actions.open_delete(&mut dom, &mut modals.write()),
                            MenuItem::Archive => run_detached(menu_actions.archive(&mut dom)),
                            MenuItem::Restore => run_detached(menu_actions.restore(&mut dom)),
                            MenuItem::CopyLink => run_detached(menu_actions.copy_link(&mut dom)),
                        }
                    },
                }
            }
        }

        if edit_open {
            EditPageDialog {
                name: view.name.clone(),
                busy: busy(),
                on_close: move |_| modals.write().close(ModalKind::CreateUpdate),
                on_submit: move |update: PageUpdate| {
                    let task = edit_actions.update(update);
                    busy.set(true);
                    spawn(async move {
                        let outcome = task.await;
                        busy.set(false);
                        if outcome.is_success() {
                            modals.write().close(ModalKind::CreateUpdate);
                        }
                    });
                },
            }
        }

        if delete_open {
            DeletePageDialog {
                name: view.name.clone(),
                busy: busy(),
                on_close: move |_| modals.write().close(ModalKind::Delete),
                on_confirm: move |_| {
                    let task = delete_actions.delete();
                    busy.set(true);
                    spawn(async move {
                        let outcome = task.await;
                        busy.set(false);
                        if outcome.is_success() {
                            modals.write().close(ModalKind::Delete);
                        }
                    });
                },
            }
        }
    }
}
