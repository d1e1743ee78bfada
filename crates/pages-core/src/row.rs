//! Event handlers for one row of the page list.
//!
//! Each handler swallows the click that triggered it, then does exactly one
//! thing: flips a local dialog flag, writes to the clipboard, or forwards a
//! single call to the store. Store and clipboard failures come back as
//! notices, never as errors to the caller.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use url::Url;

use crate::action::{ActionOutcome, Notice, NotificationSink, StoreAction};
use crate::config::base_url;
use crate::error::ClipboardError;
use crate::event::{UiEvent, intercept, opens_row};
use crate::store::{PageStore, PageUpdate};
use crate::types::{PageAccess, PageScope};

/// Writes text to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Moves the app to another in-app route.
pub trait Navigator {
    fn navigate(&self, href: &str);
}

/// Tracks whether the row is still on screen.
///
/// Work that finishes after the row was torn down still lands in the store,
/// but its notice is dropped.
#[derive(Debug, Clone)]
pub struct RowLifecycle {
    mounted: Rc<Cell<bool>>,
}

impl Default for RowLifecycle {
    fn default() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }
}

impl RowLifecycle {
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    CreateUpdate,
    Delete,
}

/// Open/closed flags for the row's two dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    create_update: bool,
    delete: bool,
}

impl ModalState {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::CreateUpdate => self.create_update,
            ModalKind::Delete => self.delete,
        }
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.set(kind, true);
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.set(kind, false);
    }

    fn set(&mut self, kind: ModalKind, open: bool) {
        match kind {
            ModalKind::CreateUpdate => self.create_update = open,
            ModalKind::Delete => self.delete = open,
        }
    }
}

/// Handlers bound to a single page.
///
/// Cheap to clone when the store, sink and clipboard are. Async handlers
/// intercept the event before returning and give back a future that owns
/// everything it needs, so hosts can hand it straight to their task spawner.
#[derive(Debug, Clone)]
pub struct PageRowActions<S, N, C> {
    scope: PageScope,
    store: S,
    notifier: N,
    clipboard: C,
    origin: Url,
    lifecycle: RowLifecycle,
}

impl<S, N, C> PageRowActions<S, N, C>
where
    S: PageStore + Clone + 'static,
    N: NotificationSink + Clone + 'static,
    C: Clipboard + Clone + 'static,
{
    pub fn new(scope: PageScope, store: S, notifier: N, clipboard: C, origin: Url) -> Self {
        Self {
            scope,
            store,
            notifier,
            clipboard,
            origin: base_url(origin),
            lifecycle: RowLifecycle::default(),
        }
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    pub fn lifecycle(&self) -> RowLifecycle {
        self.lifecycle.clone()
    }

    /// Fully qualified link to the page, as copied to the clipboard.
    pub fn page_url(&self) -> String {
        match self.origin.join(&self.scope.relative_path()) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.origin.as_str().trim_end_matches('/'), self.scope.href()),
        }
    }

    /// Click on the row body. Navigates unless an inner control already
    /// claimed the click. Returns whether navigation happened.
    pub fn open_page(&self, evt: &dyn UiEvent, navigator: &impl Navigator) -> bool {
        if evt.is_propagation_stopped() {
            return false;
        }
        let href = self.scope.href();
        tracing::debug!(page = %self.scope.page_id, %href, "opening page");
        navigator.navigate(&href);
        true
    }

    /// Key press on the focused row. Enter behaves like a click; presses an
    /// inner control claimed never get here.
    pub fn open_page_on_key(&self, evt: &dyn UiEvent, key: &str, navigator: &impl Navigator) -> bool {
        opens_row(key) && self.open_page(evt, navigator)
    }

    pub fn open_edit(&self, evt: &mut dyn UiEvent, modals: &mut ModalState) {
        intercept(evt);
        modals.open(ModalKind::CreateUpdate);
    }

    pub fn open_delete(&self, evt: &mut dyn UiEvent, modals: &mut ModalState) {
        intercept(evt);
        modals.open(ModalKind::Delete);
    }

    pub fn copy_link(&self, evt: &mut dyn UiEvent) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        intercept(evt);
        let url = self.page_url();
        let clipboard = self.clipboard.clone();
        let this = self.clone();
        async move {
            match clipboard.write_text(&url).await {
                Ok(()) => {
                    this.notify(Notice::link_copied());
                    ActionOutcome::Succeeded
                }
                Err(err) => {
                    tracing::warn!(page = %this.scope.page_id, error = %err, "copying page link failed");
                    this.notify(Notice::link_copy_failed());
                    ActionOutcome::Failed
                }
            }
        }
    }

    /// Favourite toggle. `is_favorite` is the state the row was rendered with.
    pub fn toggle_favorite(
        &self,
        evt: &mut dyn UiEvent,
        is_favorite: bool,
    ) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        let action = if is_favorite {
            StoreAction::RemoveFromFavorites
        } else {
            StoreAction::AddToFavorites
        };
        self.dispatch(evt, action)
    }

    /// Visibility toggle. Requests the opposite of the rendered `access`.
    pub fn toggle_access(
        &self,
        evt: &mut dyn UiEvent,
        access: PageAccess,
    ) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        let action = match access.toggled() {
            PageAccess::Public => StoreAction::MakePublic,
            PageAccess::Private => StoreAction::MakePrivate,
        };
        self.dispatch(evt, action)
    }

    pub fn archive(&self, evt: &mut dyn UiEvent) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        self.dispatch(evt, StoreAction::Archive)
    }

    pub fn restore(&self, evt: &mut dyn UiEvent) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        self.dispatch(evt, StoreAction::Restore)
    }

    /// Submit from the edit dialog.
    pub fn update(&self, update: PageUpdate) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        let this = self.clone();
        async move { this.perform(StoreAction::Update(update)).await }
    }

    /// Confirm from the delete dialog.
    pub fn delete(&self) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        let this = self.clone();
        async move { this.perform(StoreAction::Delete).await }
    }

    fn dispatch(
        &self,
        evt: &mut dyn UiEvent,
        action: StoreAction,
    ) -> impl Future<Output = ActionOutcome> + use<S, N, C> {
        intercept(evt);
        let this = self.clone();
        async move { this.perform(action).await }
    }

    async fn perform(&self, action: StoreAction) -> ActionOutcome {
        tracing::debug!(page = %self.scope.page_id, %action, "dispatching page action");
        match action.apply(&self.store, &self.scope).await {
            Ok(()) => {
                self.notify(action.success_notice());
                ActionOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(page = %self.scope.page_id, %action, error = %err, "page action failed");
                self.notify(action.failure_notice());
                ActionOutcome::Failed
            }
        }
    }

    fn notify(&self, notice: Notice) {
        if self.lifecycle.is_mounted() {
            self.notifier.notify(notice);
        } else {
            tracing::debug!(page = %self.scope.page_id, title = %notice.title, "row unmounted, dropping notice");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::action::NoticeKind;
    use crate::error::StoreError;
    use crate::event::{ClickEvent, claim_key};
    use crate::store::PageLookup;
    use crate::types::{PageId, PageSummary, ProjectId, UserId};

    /// Records every store call and answers with a canned result.
    #[derive(Clone, Default)]
    struct ScriptedStore {
        calls: Rc<RefCell<Vec<(&'static str, PageScope)>>>,
        fail: Rc<Cell<bool>>,
    }

    impl ScriptedStore {
        fn failing() -> Self {
            let store = Self::default();
            store.fail.set(true);
            store
        }

        fn calls(&self) -> Vec<(&'static str, PageScope)> {
            self.calls.borrow().clone()
        }

        fn record(&self, name: &'static str, scope: &PageScope) -> Result<(), StoreError> {
            self.calls.borrow_mut().push((name, scope.clone()));
            if self.fail.get() {
                Err(StoreError::Rejected("scripted failure".into()))
            } else {
                Ok(())
            }
        }
    }

    impl PageLookup for ScriptedStore {
        fn unarchived_page(&self, _id: &PageId) -> Option<PageSummary> {
            None
        }

        fn archived_page(&self, _id: &PageId) -> Option<PageSummary> {
            None
        }
    }

    impl PageStore for ScriptedStore {
        async fn add_to_favorites(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("add_to_favorites", scope)
        }
        async fn remove_from_favorites(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("remove_from_favorites", scope)
        }
        async fn make_public(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("make_public", scope)
        }
        async fn make_private(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("make_private", scope)
        }
        async fn archive_page(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("archive_page", scope)
        }
        async fn restore_page(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("restore_page", scope)
        }
        async fn update_page(&self, scope: &PageScope, _update: PageUpdate) -> Result<(), StoreError> {
            self.record("update_page", scope)
        }
        async fn delete_page(&self, scope: &PageScope) -> Result<(), StoreError> {
            self.record("delete_page", scope)
        }
    }

    #[derive(Clone, Default)]
    struct Notices(Rc<RefCell<Vec<Notice>>>);

    impl NotificationSink for Notices {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    impl Notices {
        fn taken(&self) -> Vec<Notice> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    #[derive(Clone, Default)]
    struct FakeClipboard {
        written: Rc<RefCell<Vec<String>>>,
        broken: bool,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.broken {
                return Err(ClipboardError::Write("permission denied".into()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, href: &str) {
            self.0.borrow_mut().push(href.to_string());
        }
    }

    type TestActions = PageRowActions<ScriptedStore, Notices, FakeClipboard>;

    fn scope() -> PageScope {
        PageScope::new("acme".into(), "proj-1".into(), "page-9".into())
    }

    fn actions(store: ScriptedStore, clipboard: FakeClipboard) -> (TestActions, Notices) {
        let notices = Notices::default();
        let origin = Url::parse("https://pages.example.com").unwrap();
        let actions = PageRowActions::new(scope(), store, notices.clone(), clipboard, origin);
        (actions, notices)
    }

    #[tokio::test]
    async fn test_add_favorite_calls_store_once_and_notifies() {
        let store = ScriptedStore::default();
        let (actions, notices) = actions(store.clone(), FakeClipboard::default());
        let mut evt = ClickEvent::new();

        let outcome = actions.toggle_favorite(&mut evt, false).await;

        assert_eq!(outcome, ActionOutcome::Succeeded);
        assert_eq!(store.calls(), vec![("add_to_favorites", scope())]);
        assert!(evt.is_default_prevented());
        assert!(evt.is_propagation_stopped());
        assert_eq!(
            notices.taken(),
            vec![Notice::success("Success!", "Successfully added the page to favorites.")]
        );
    }

    #[tokio::test]
    async fn test_remove_favorite_when_already_favorite() {
        let store = ScriptedStore::default();
        let (actions, _) = actions(store.clone(), FakeClipboard::default());
        actions.toggle_favorite(&mut ClickEvent::new(), true).await;
        assert_eq!(store.calls(), vec![("remove_from_favorites", scope())]);
    }

    #[tokio::test]
    async fn test_failed_favorite_becomes_error_notice() {
        let (actions, notices) = actions(ScriptedStore::failing(), FakeClipboard::default());

        let outcome = actions.toggle_favorite(&mut ClickEvent::new(), false).await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(
            notices.taken(),
            vec![Notice::error(
                "Error!",
                "Couldn't add the page to favorites. Please try again."
            )]
        );
    }

    #[tokio::test]
    async fn test_access_toggle_requests_opposite_setting() {
        let store = ScriptedStore::default();
        let (actions, _) = actions(store.clone(), FakeClipboard::default());

        actions.toggle_access(&mut ClickEvent::new(), PageAccess::Private).await;
        actions.toggle_access(&mut ClickEvent::new(), PageAccess::Public).await;

        let names: Vec<_> = store.calls().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["make_public", "make_private"]);
    }

    #[tokio::test]
    async fn test_every_store_action_notifies_once() {
        for fail in [false, true] {
            let store = if fail { ScriptedStore::failing() } else { ScriptedStore::default() };
            let (actions, notices) = actions(store.clone(), FakeClipboard::default());

            actions.archive(&mut ClickEvent::new()).await;
            actions.restore(&mut ClickEvent::new()).await;
            actions.update(PageUpdate { name: Some("x".into()) }).await;
            actions.delete().await;

            let kinds: Vec<_> = notices.taken().into_iter().map(|n| n.kind).collect();
            let expected = if fail { NoticeKind::Error } else { NoticeKind::Success };
            assert_eq!(kinds, vec![expected; 4]);
            assert_eq!(store.calls().len(), 4);
        }
    }

    #[tokio::test]
    async fn test_copy_link_writes_absolute_url() {
        let clipboard = FakeClipboard::default();
        let (actions, notices) = actions(ScriptedStore::default(), clipboard.clone());
        let mut evt = ClickEvent::new();

        let outcome = actions.copy_link(&mut evt).await;

        assert_eq!(outcome, ActionOutcome::Succeeded);
        assert!(evt.is_propagation_stopped());
        assert_eq!(
            clipboard.written.borrow().as_slice(),
            ["https://pages.example.com/acme/projects/proj-1/pages/page-9"]
        );
        assert_eq!(notices.taken(), vec![Notice::link_copied()]);
    }

    #[test]
    fn test_page_url_keeps_origin_base_path() {
        let origin = Url::parse("https://host/app").unwrap();
        let actions: TestActions = PageRowActions::new(
            scope(),
            ScriptedStore::default(),
            Notices::default(),
            FakeClipboard::default(),
            origin,
        );
        assert_eq!(actions.page_url(), "https://host/app/acme/projects/proj-1/pages/page-9");
    }

    #[tokio::test]
    async fn test_copy_link_failure_is_reported() {
        let clipboard = FakeClipboard {
            broken: true,
            ..Default::default()
        };
        let (actions, notices) = actions(ScriptedStore::default(), clipboard);
        let outcome = actions.copy_link(&mut ClickEvent::new()).await;
        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(notices.taken(), vec![Notice::link_copy_failed()]);
    }

    #[tokio::test]
    async fn test_copy_link_ignores_page_state() {
        let store = ScriptedStore::default();
        let (actions, notices) = actions(store.clone(), FakeClipboard::default());
        actions.copy_link(&mut ClickEvent::new()).await;
        assert!(store.calls().is_empty());
        assert_eq!(notices.taken().len(), 1);
    }

    #[test]
    fn test_row_click_navigates_to_page() {
        let (actions, _) = actions(ScriptedStore::default(), FakeClipboard::default());
        let nav = RecordingNavigator::default();

        assert!(actions.open_page(&ClickEvent::new(), &nav));
        assert_eq!(nav.0.borrow().as_slice(), ["/acme/projects/proj-1/pages/page-9"]);
    }

    #[test]
    fn test_inner_control_click_does_not_navigate() {
        let store = ScriptedStore::default();
        let (actions, _) = actions(store, FakeClipboard::default());
        let nav = RecordingNavigator::default();
        let mut modals = ModalState::default();

        // The click reaches the menu item first, then bubbles to the row.
        let mut evt = ClickEvent::new();
        actions.open_edit(&mut evt, &mut modals);
        assert!(!actions.open_page(&evt, &nav));

        let mut evt = ClickEvent::new();
        drop(actions.toggle_favorite(&mut evt, false));
        assert!(!actions.open_page(&evt, &nav));

        assert!(nav.0.borrow().is_empty());
        assert!(modals.is_open(ModalKind::CreateUpdate));
    }

    #[test]
    fn test_enter_on_focused_row_navigates() {
        let (actions, _) = actions(ScriptedStore::default(), FakeClipboard::default());
        let nav = RecordingNavigator::default();

        assert!(!actions.open_page_on_key(&ClickEvent::new(), "Escape", &nav));
        assert!(!actions.open_page_on_key(&ClickEvent::new(), " ", &nav));
        assert!(actions.open_page_on_key(&ClickEvent::new(), "Enter", &nav));
        assert_eq!(nav.0.borrow().as_slice(), ["/acme/projects/proj-1/pages/page-9"]);
    }

    #[test]
    fn test_enter_claimed_by_inner_control_does_not_navigate() {
        let (actions, _) = actions(ScriptedStore::default(), FakeClipboard::default());
        let nav = RecordingNavigator::default();

        // Enter on the favourite button or in the edit field, then bubbling.
        let mut evt = ClickEvent::new();
        claim_key(&mut evt);
        assert!(!evt.is_default_prevented());
        assert!(!actions.open_page_on_key(&evt, "Enter", &nav));
        assert!(nav.0.borrow().is_empty());
    }

    #[test]
    fn test_modal_handlers_only_flip_local_state() {
        let store = ScriptedStore::default();
        let (actions, notices) = actions(store.clone(), FakeClipboard::default());
        let mut modals = ModalState::default();

        actions.open_delete(&mut ClickEvent::new(), &mut modals);
        assert!(modals.is_open(ModalKind::Delete));
        assert!(!modals.is_open(ModalKind::CreateUpdate));
        modals.close(ModalKind::Delete);
        assert!(!modals.is_open(ModalKind::Delete));

        assert!(store.calls().is_empty());
        assert!(notices.taken().is_empty());
    }

    #[tokio::test]
    async fn test_unmounted_row_drops_notices_but_still_calls_store() {
        let store = ScriptedStore::default();
        let (actions, notices) = actions(store.clone(), FakeClipboard::default());

        let pending = actions.archive(&mut ClickEvent::new());
        actions.lifecycle().unmount();
        let outcome = pending.await;

        assert_eq!(outcome, ActionOutcome::Succeeded);
        assert_eq!(store.calls().len(), 1);
        assert!(notices.taken().is_empty());
    }

    #[tokio::test]
    async fn test_against_memory_store() {
        use crate::memory::MemoryPageStore;

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let store = MemoryPageStore::with_pages([PageSummary {
            id: PageId::new("page-9"),
            project: ProjectId::new("proj-1"),
            name: "Roadmap".into(),
            owned_by: UserId::new("u1"),
            access: PageAccess::Public,
            archived_at: None,
            updated_at: at,
            created_at: at,
            is_favorite: false,
            label_details: Vec::new(),
        }]);
        let notices = Notices::default();
        let actions = PageRowActions::new(
            scope(),
            store.clone(),
            notices.clone(),
            FakeClipboard::default(),
            Url::parse("https://pages.example.com/").unwrap(),
        );

        actions.archive(&mut ClickEvent::new()).await;
        assert!(store.archived_page(&PageId::new("page-9")).is_some());

        // Archiving twice is rejected by the store and surfaces as an error notice.
        let outcome = actions.archive(&mut ClickEvent::new()).await;
        assert_eq!(outcome, ActionOutcome::Failed);

        actions.delete().await;
        assert!(store.page(&PageId::new("page-9")).is_none());

        let kinds: Vec<_> = notices.taken().into_iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Error, NoticeKind::Success]);
    }
}
