use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastOptions, Toasts, use_toast};
use pages_core::{Notice, NoticeKind, NotificationSink};

use crate::context::PagesContext;

/// Raises row notices as toasts for the configured notice duration.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Toasts,
    duration: Duration,
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, title = %notice.title, "showing toast");
        let options = ToastOptions::new()
            .description(notice.message.to_string())
            .duration(self.duration);
        let title = notice.title.to_string();
        match notice.kind {
            NoticeKind::Success => self.toasts.success(title, options),
            NoticeKind::Error => self.toasts.error(title, options),
        }
    }
}

/// Must be called under [`ToastProvider`].
pub fn use_toasts() -> ToastQueue {
    let ctx = use_context::<PagesContext>();
    ToastQueue {
        toasts: use_toast(),
        duration: ctx.config.notice_duration,
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider { {children} }
    }
}
