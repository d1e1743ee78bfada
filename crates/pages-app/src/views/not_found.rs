use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "not-found",
            h1 { "Nothing here" }
            p { "There is no page at /{path}." }
            Link { to: Route::Home {}, "Back to projects" }
        }
    }
}
