//! The ⋮ dropdown at the end of a page row.

use dioxus::prelude::*;
use pages_core::{MenuItem, claim_key};

use crate::components::icons::{MenuItemIcon, MoreIcon};
use crate::platform::DomEvent;

#[component]
pub fn RowMenu(items: Vec<MenuItem>, on_select: EventHandler<(MenuItem, MouseEvent)>) -> Element {
    let mut show_dropdown = use_signal(|| false);

    rsx! {
        div {
            class: "row-menu",
            // Enter on the trigger or an item must not reach the row.
            onkeydown: move |evt: KeyboardEvent| claim_key(&mut DomEvent::new(&evt)),
            button {
                class: "row-menu-trigger",
                aria_label: "Page actions",
                aria_haspopup: "menu",
                aria_expanded: "{show_dropdown()}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    show_dropdown.toggle();
                },
                MoreIcon {}
            }

            if show_dropdown() {
                div {
                    class: "row-menu-backdrop",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        show_dropdown.set(false);
                    },
                }
                div { class: "dropdown-menu", role: "menu",
                    for item in items {
                        button {
                            key: "{item.label()}",
                            class: if item.is_destructive() { "dropdown-item dropdown-item-danger" } else { "dropdown-item" },
                            role: "menuitem",
                            onclick: move |evt: MouseEvent| {
                                show_dropdown.set(false);
                                on_select.call((item, evt));
                            },
                            MenuItemIcon { item }
                            span { "{item.label()}" }
                        }
                    }
                }
            }
        }
    }
}
