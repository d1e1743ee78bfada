//! Edit and delete dialogs opened from a page row's menu.
//!
//! Both are mounted only while open, so their local state starts fresh each
//! time. The row owns the store calls; these just collect and confirm.

use dioxus::prelude::*;
use pages_core::{PageUpdate, SmolStr};

use crate::components::button::{Button, ButtonVariant};
use crate::components::dialog::{DialogContent, DialogDescription, DialogRoot, DialogTitle};

#[component]
pub fn EditPageDialog(
    name: SmolStr,
    #[props(default)] busy: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<PageUpdate>,
) -> Element {
    let mut draft = use_signal(|| name.to_string());
    let mut error = use_signal(|| None::<&'static str>);

    let mut submit = move || {
        let title = draft.read().trim().to_string();
        if title.is_empty() {
            error.set(Some("Title is required"));
            return;
        }
        error.set(None);
        on_submit.call(PageUpdate {
            name: Some(title.into()),
        });
    };

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Update page" }
                input {
                    class: "dialog-input",
                    r#type: "text",
                    placeholder: "Title",
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                if let Some(err) = error() {
                    div { class: "dialog-error", "{err}" }
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: busy,
                        onclick: move |_| submit(),
                        if busy { "Updating..." } else { "Update page" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeletePageDialog(
    name: SmolStr,
    #[props(default)] busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Delete page?" }
                DialogDescription {
                    "\"{name}\" will be permanently deleted. This can't be undone."
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
