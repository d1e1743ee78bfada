//! Store traits the page list reads from and writes through.

use smol_str::SmolStr;

use crate::error::StoreError;
use crate::types::{PageId, PageScope, PageSummary};

/// Read side of the page store.
///
/// Active and archived pages live in separate collections; [`PageLookup::page`]
/// unions the two, preferring the active copy.
pub trait PageLookup {
    fn unarchived_page(&self, id: &PageId) -> Option<PageSummary>;
    fn archived_page(&self, id: &PageId) -> Option<PageSummary>;

    fn page(&self, id: &PageId) -> Option<PageSummary> {
        self.unarchived_page(id).or_else(|| self.archived_page(id))
    }
}

/// Fields the edit dialog may change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageUpdate {
    pub name: Option<SmolStr>,
}

/// Mutating operations. Each resolves once the change is applied and visible
/// through [`PageLookup`], or fails without having changed anything.
#[allow(async_fn_in_trait)]
pub trait PageStore: PageLookup {
    async fn add_to_favorites(&self, scope: &PageScope) -> Result<(), StoreError>;
    async fn remove_from_favorites(&self, scope: &PageScope) -> Result<(), StoreError>;
    async fn make_public(&self, scope: &PageScope) -> Result<(), StoreError>;
    async fn make_private(&self, scope: &PageScope) -> Result<(), StoreError>;
    async fn archive_page(&self, scope: &PageScope) -> Result<(), StoreError>;
    async fn restore_page(&self, scope: &PageScope) -> Result<(), StoreError>;
    async fn update_page(&self, scope: &PageScope, update: PageUpdate) -> Result<(), StoreError>;
    async fn delete_page(&self, scope: &PageScope) -> Result<(), StoreError>;
}
