//! In-memory page store with explicit change subscriptions.
//!
//! Readers register a [`PageSelector`] plus the [`FieldMask`] they render
//! from, and are called after every matching change. Nothing is tracked
//! implicitly: a row that only draws the title is not woken by a favourite
//! toggle on the same page.
//!
//! The store is single-threaded. Listeners run after the store has released
//! its own borrows, so they may read the store (or subscribe) freely.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use chrono::Utc;
use smol_str::SmolStr;

use crate::error::StoreError;
use crate::store::{PageLookup, PageStore, PageUpdate};
use crate::types::{PageAccess, PageId, PageScope, PageSummary, ProjectId};

/// A field a reader may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageField {
    Name,
    Access,
    Archived,
    Favorite,
    Labels,
    Timestamps,
    Owner,
}

impl PageField {
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldMask(u16);

impl FieldMask {
    pub const NONE: FieldMask = FieldMask(0);
    pub const ALL: FieldMask = FieldMask(0b111_1111);

    pub fn of(fields: &[PageField]) -> Self {
        fields.iter().fold(Self::NONE, |mask, f| mask.with(*f))
    }

    pub const fn with(self, field: PageField) -> Self {
        FieldMask(self.0 | field.bit())
    }

    pub const fn contains(self, field: PageField) -> bool {
        self.0 & field.bit() != 0
    }

    pub const fn intersects(self, other: FieldMask) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FIELDS: [PageField; 7] = [
            PageField::Name,
            PageField::Access,
            PageField::Archived,
            PageField::Favorite,
            PageField::Labels,
            PageField::Timestamps,
            PageField::Owner,
        ];
        f.debug_set()
            .entries(FIELDS.iter().filter(|field| self.contains(**field)))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Inserted,
    Updated,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    pub page_id: PageId,
    pub project_id: ProjectId,
    pub kind: ChangeKind,
    pub fields: FieldMask,
}

/// Which pages a listener cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelector {
    Page(PageId),
    Project(ProjectId),
    Any,
}

impl PageSelector {
    fn matches(&self, change: &PageChange) -> bool {
        match self {
            PageSelector::Page(id) => *id == change.page_id,
            PageSelector::Project(project) => *project == change.project_id,
            PageSelector::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&PageChange)>;

struct Subscription {
    id: SubscriptionId,
    selector: PageSelector,
    interest: FieldMask,
    listener: Listener,
}

impl Subscription {
    fn wants(&self, change: &PageChange) -> bool {
        self.selector.matches(change)
            && (change.kind != ChangeKind::Updated || change.fields.intersects(self.interest))
    }
}

#[derive(Default)]
struct Collections {
    active: BTreeMap<PageId, PageSummary>,
    archived: BTreeMap<PageId, PageSummary>,
}

impl Collections {
    fn get_mut(&mut self, id: &PageId) -> Option<&mut PageSummary> {
        match self.active.get_mut(id) {
            Some(page) => Some(page),
            None => self.archived.get_mut(id),
        }
    }
}

/// Observable page store held entirely in memory.
///
/// Cloning is cheap; clones share pages and subscriptions.
#[derive(Clone, Default)]
pub struct MemoryPageStore {
    pages: Rc<RefCell<Collections>>,
    subscriptions: Rc<RefCell<Vec<Subscription>>>,
    next_subscription: Rc<Cell<u64>>,
}

impl fmt::Debug for MemoryPageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self.pages.borrow();
        f.debug_struct("MemoryPageStore")
            .field("active", &pages.active.len())
            .field("archived", &pages.archived.len())
            .field("subscriptions", &self.subscriptions.borrow().len())
            .finish()
    }
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: impl IntoIterator<Item = PageSummary>) -> Self {
        let store = Self::new();
        {
            let mut collections = store.pages.borrow_mut();
            for page in pages {
                if page.is_archived() {
                    collections.archived.insert(page.id.clone(), page);
                } else {
                    collections.active.insert(page.id.clone(), page);
                }
            }
        }
        store
    }

    /// Insert or replace a page, filing it by its archive state.
    pub fn insert(&self, page: PageSummary) {
        let change = {
            let mut pages = self.pages.borrow_mut();
            let existed =
                pages.active.remove(&page.id).is_some() | pages.archived.remove(&page.id).is_some();
            let change = PageChange {
                page_id: page.id.clone(),
                project_id: page.project.clone(),
                kind: if existed {
                    ChangeKind::Updated
                } else {
                    ChangeKind::Inserted
                },
                fields: FieldMask::ALL,
            };
            if page.is_archived() {
                pages.archived.insert(page.id.clone(), page);
            } else {
                pages.active.insert(page.id.clone(), page);
            }
            change
        };
        self.publish(change);
    }

    /// Every page of a project, active and archived.
    pub fn project_pages(&self, project: &ProjectId) -> Vec<PageSummary> {
        let pages = self.pages.borrow();
        pages
            .active
            .values()
            .chain(pages.archived.values())
            .filter(|page| page.project == *project)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        let pages = self.pages.borrow();
        pages.active.len() + pages.archived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(
        &self,
        selector: PageSelector,
        interest: FieldMask,
        listener: impl Fn(&PageChange) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscriptions.borrow_mut().push(Subscription {
            id,
            selector,
            interest,
            listener: Rc::new(listener),
        });
        tracing::trace!(?id, "page store subscription added");
        id
    }

    /// Returns false if `id` was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|sub| sub.id != id);
        before != subscriptions.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    fn publish(&self, change: PageChange) {
        let listeners: Vec<Listener> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|sub| sub.wants(&change))
            .map(|sub| sub.listener.clone())
            .collect();
        tracing::trace!(page = %change.page_id, kind = ?change.kind, fields = ?change.fields, listeners = listeners.len(), "publishing page change");
        for listener in listeners {
            listener(&change);
        }
    }

    /// Apply `edit` to a page in either collection.
    fn edit_page(
        &self,
        scope: &PageScope,
        fields: FieldMask,
        edit: impl FnOnce(&mut PageSummary) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let change = {
            let mut pages = self.pages.borrow_mut();
            let page = pages
                .get_mut(&scope.page_id)
                .ok_or_else(|| StoreError::NotFound(scope.page_id.clone()))?;
            edit(page)?;
            PageChange {
                page_id: page.id.clone(),
                project_id: page.project.clone(),
                kind: ChangeKind::Updated,
                fields,
            }
        };
        self.publish(change);
        Ok(())
    }

    fn set_favorite(&self, scope: &PageScope, favorite: bool) -> Result<(), StoreError> {
        self.edit_page(scope, FieldMask::of(&[PageField::Favorite]), |page| {
            page.is_favorite = favorite;
            Ok(())
        })
    }

    fn set_access(&self, scope: &PageScope, access: PageAccess) -> Result<(), StoreError> {
        let fields = FieldMask::of(&[PageField::Access, PageField::Timestamps]);
        self.edit_page(scope, fields, |page| {
            page.access = access;
            page.updated_at = Utc::now();
            Ok(())
        })
    }

    /// Move a page between the active and archived collections.
    fn move_page(&self, scope: &PageScope, archive: bool) -> Result<(), StoreError> {
        let change = {
            let mut pages = self.pages.borrow_mut();
            let Collections { active, archived } = &mut *pages;
            let (from, to) = if archive {
                (active, archived)
            } else {
                (archived, active)
            };
            let Some(mut page) = from.remove(&scope.page_id) else {
                return Err(if to.contains_key(&scope.page_id) {
                    if archive {
                        StoreError::Archived(scope.page_id.clone())
                    } else {
                        StoreError::NotArchived(scope.page_id.clone())
                    }
                } else {
                    StoreError::NotFound(scope.page_id.clone())
                });
            };
            page.archived_at = archive.then(Utc::now);
            let change = PageChange {
                page_id: page.id.clone(),
                project_id: page.project.clone(),
                kind: ChangeKind::Updated,
                fields: FieldMask::of(&[PageField::Archived]),
            };
            to.insert(page.id.clone(), page);
            change
        };
        self.publish(change);
        Ok(())
    }
}

impl PageLookup for MemoryPageStore {
    fn unarchived_page(&self, id: &PageId) -> Option<PageSummary> {
        self.pages.borrow().active.get(id).cloned()
    }

    fn archived_page(&self, id: &PageId) -> Option<PageSummary> {
        self.pages.borrow().archived.get(id).cloned()
    }
}

impl PageStore for MemoryPageStore {
    async fn add_to_favorites(&self, scope: &PageScope) -> Result<(), StoreError> {
        self.set_favorite(scope, true)
    }

    async fn remove_from_favorites(&self, scope: &PageScope) -> Result<(), StoreError> {
        self.set_favorite(scope, false)
    }

    async fn make_public(&self, scope: &PageScope) -> Result<(), StoreError> {
        self.set_access(scope, PageAccess::Public)
    }

    async fn make_private(&self, scope: &PageScope) -> Result<(), StoreError> {
        self.set_access(scope, PageAccess::Private)
    }

    async fn archive_page(&self, scope: &PageScope) -> Result<(), StoreError> {
        self.move_page(scope, true)
    }

    async fn restore_page(&self, scope: &PageScope) -> Result<(), StoreError> {
        self.move_page(scope, false)
    }

    async fn update_page(&self, scope: &PageScope, update: PageUpdate) -> Result<(), StoreError> {
        if self.archived_page(&scope.page_id).is_some() {
            return Err(StoreError::Archived(scope.page_id.clone()));
        }
        let name = match update.name {
            Some(name) if name.trim().is_empty() => return Err(StoreError::EmptyName),
            Some(name) => Some(SmolStr::new(name.trim())),
            None => None,
        };
        let fields = FieldMask::of(&[PageField::Name, PageField::Timestamps]);
        self.edit_page(scope, fields, move |page| {
            if let Some(name) = name {
                page.name = name;
            }
            page.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn delete_page(&self, scope: &PageScope) -> Result<(), StoreError> {
        let change = {
            let mut pages = self.pages.borrow_mut();
            if pages.active.contains_key(&scope.page_id) {
                return Err(StoreError::NotArchived(scope.page_id.clone()));
            }
            let page = pages
                .archived
                .remove(&scope.page_id)
                .ok_or_else(|| StoreError::NotFound(scope.page_id.clone()))?;
            PageChange {
                page_id: page.id,
                project_id: page.project,
                kind: ChangeKind::Removed,
                fields: FieldMask::ALL,
            }
        };
        self.publish(change);
        Ok(())
    }
}

/// The single subscription a long-lived view holds.
///
/// A view that is reused for another page or project calls [`Self::watch`]
/// with the new selector; the old subscription is dropped and a new one taken.
#[derive(Debug, Default)]
pub struct SubscriptionSlot {
    active: Option<(PageSelector, FieldMask, SubscriptionId)>,
}

impl SubscriptionSlot {
    /// Subscribe to `selector`, unless already subscribed with the same
    /// selector and mask. `listener` is dropped unused in that case.
    pub fn watch(
        &mut self,
        store: &MemoryPageStore,
        selector: PageSelector,
        interest: FieldMask,
        listener: impl Fn(&PageChange) + 'static,
    ) -> SubscriptionId {
        if let Some((watched, mask, id)) = &self.active {
            if *watched == selector && *mask == interest {
                return *id;
            }
        }
        self.release(store);
        let id = store.subscribe(selector.clone(), interest, listener);
        self.active = Some((selector, interest, id));
        id
    }

    pub fn release(&mut self, store: &MemoryPageStore) {
        if let Some((_, _, id)) = self.active.take() {
            store.unsubscribe(id);
        }
    }
}
