//! Shared app state and the hook that ties components to store changes.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use pages_core::{
    DateTimeFormatter, FieldMask, MemberRoster, MemoryPageStore, PageSelector, PagesConfig,
    ProjectId, SubscriptionSlot, WorkspaceSlug,
};

/// A project with pages, as listed on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub workspace_slug: WorkspaceSlug,
    pub project_id: ProjectId,
}

/// Everything a page list needs, provided once at the app root.
#[derive(Clone)]
pub struct PagesContext {
    pub store: MemoryPageStore,
    pub members: Rc<MemberRoster>,
    pub config: Rc<PagesConfig>,
    pub formatter: DateTimeFormatter,
    pub projects: Rc<Vec<ProjectLink>>,
}

impl PagesContext {
    pub fn new(
        store: MemoryPageStore,
        members: MemberRoster,
        config: PagesConfig,
        projects: Vec<ProjectLink>,
    ) -> Self {
        let formatter = DateTimeFormatter::local(config.time_format);
        Self {
            store,
            members: Rc::new(members),
            config: Rc::new(config),
            formatter,
            projects: Rc::new(projects),
        }
    }
}

/// Revision counter bumped whenever a change matching `selector` and
/// touching any of `interest` lands in the store. Read it to rerender on
/// those changes. Moving to another selector (a routed component reused for
/// a different page) swaps the subscription; it is dropped with the component.
pub fn use_store_subscription(selector: PageSelector, interest: FieldMask) -> Signal<u64> {
    let ctx = use_context::<PagesContext>();
    let revision = use_signal(|| 0u64);
    let slot = use_hook(|| Rc::new(RefCell::new(SubscriptionSlot::default())));

    slot.borrow_mut().watch(&ctx.store, selector, interest, move |change| {
        tracing::trace!(page = %change.page_id, kind = ?change.kind, "store change");
        let mut revision = revision;
        revision += 1;
    });

    use_drop(move || slot.borrow_mut().release(&ctx.store));

    revision
}
