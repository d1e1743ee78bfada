//! Modal dialog parts, built on the dioxus-primitives dialog for Escape to
//! close, focus handling and the dialog ARIA roles.

use dioxus::prelude::*;
use dioxus_primitives::dialog::{
    self, DialogContentProps, DialogDescriptionProps, DialogRootProps, DialogTitleProps,
};

/// Dimmed full-screen overlay around the dialog. Clicking the overlay asks
/// to close.
///
/// Positioning is inline so the overlay works before any stylesheet loads.
#[component]
pub fn DialogRoot(props: DialogRootProps) -> Element {
    let open = props.open.read().unwrap_or(false);
    let overlay_style = if open {
        "position: fixed; inset: 0; z-index: 1000; background: rgba(0,0,0,0.3); display: flex; align-items: center; justify-content: center;"
    } else {
        "display: none;"
    };
    let on_backdrop = props.on_open_change;

    rsx! {
        div {
            class: "dialog-backdrop",
            style: "{overlay_style}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_backdrop.call(false);
            },
            dialog::DialogRoot {
                id: props.id,
                is_modal: props.is_modal,
                open: props.open,
                default_open: props.default_open,
                on_open_change: props.on_open_change,
                attributes: props.attributes,
                {props.children}
            }
        }
    }
}

/// Clicks and key presses inside the dialog stay inside it.
#[component]
pub fn DialogContent(props: DialogContentProps) -> Element {
    rsx! {
        div {
            onclick: move |evt| evt.stop_propagation(),
            onkeydown: move |evt| evt.stop_propagation(),
            dialog::DialogContent {
                class: "dialog",
                id: props.id,
                attributes: props.attributes,
                {props.children}
            }
        }
    }
}

#[component]
pub fn DialogTitle(props: DialogTitleProps) -> Element {
    rsx! {
        dialog::DialogTitle {
            class: "dialog-title",
            id: props.id,
            attributes: props.attributes,
            {props.children}
        }
    }
}

#[component]
pub fn DialogDescription(props: DialogDescriptionProps) -> Element {
    rsx! {
        dialog::DialogDescription {
            class: "dialog-description",
            id: props.id,
            attributes: props.attributes,
            {props.children}
        }
    }
}
