//! Inline stroke icons used by the page list.

use dioxus::prelude::*;

use pages_core::MenuItem;

#[component]
fn Icon(size: u32, #[props(default)] fill: bool, children: Element) -> Element {
    let fill = if fill { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn PageIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" }
            path { d: "M14 2v6h6" }
            path { d: "M16 13H8" }
            path { d: "M16 17H8" }
        }
    }
}

#[component]
pub fn StarIcon(filled: bool, #[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { size, fill: filled,
            path { d: "M12 2l3.09 6.26L22 9.27l-5 4.87L18.18 21 12 17.77 5.82 21 7 14.14l-5-4.87 6.91-1.01z" }
        }
    }
}

#[component]
pub fn LockIcon(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M5 11h14v10H5z" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        }
    }
}

#[component]
pub fn GlobeIcon(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z" }
            path { d: "M2 12h20" }
            path { d: "M12 2a15 15 0 0 1 0 20a15 15 0 0 1 0-20z" }
        }
    }
}

#[component]
pub fn ClockIcon(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z" }
            path { d: "M12 6v6l4 2" }
        }
    }
}

#[component]
pub fn InfoIcon(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

#[component]
pub fn MoreIcon(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M12 12h.01" }
            path { d: "M12 5h.01" }
            path { d: "M12 19h.01" }
        }
    }
}

/// Icon shown next to a menu entry.
#[component]
pub fn MenuItemIcon(item: MenuItem, #[props(default = 14)] size: u32) -> Element {
    match item {
        MenuItem::Edit => rsx! {
            Icon { size,
                path { d: "M12 20h9" }
                path { d: "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z" }
            }
        },
        MenuItem::Archive => rsx! {
            Icon { size,
                path { d: "M3 3h18v5H3z" }
                path { d: "M5 8v13h14V8" }
                path { d: "M10 12h4" }
            }
        },
        MenuItem::Restore => rsx! {
            Icon { size,
                path { d: "M3 12a9 9 0 1 0 3-6.7L3 8" }
                path { d: "M3 3v5h5" }
            }
        },
        MenuItem::Delete => rsx! {
            Icon { size,
                path { d: "M3 6h18" }
                path { d: "M19 6l-1 14H6L5 6" }
                path { d: "M8 6V4h8v2" }
            }
        },
        MenuItem::CopyLink => rsx! {
            Icon { size,
                path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
                path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
            }
        },
    }
}
