//! pages-core: framework-free logic behind a project's page list.
//!
//! This crate provides:
//! - `PageSummary` and the id newtypes the list is keyed on
//! - `Role` with an explicit total order, and `PagePermissions` derived from it
//! - `PageRowView` - the derived render model for one row of the list
//! - `PageRowActions` - event handlers that forward to a `PageStore`
//! - `MemoryPageStore` - an observable store with per-page subscriptions
//!
//! Rendering lives elsewhere; everything here is plain data and traits so
//! it can be driven from a UI framework or from tests alike.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod list;
pub mod memory;
pub mod menu;
pub mod permissions;
pub mod role;
pub mod row;
pub mod session;
pub mod store;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod types;
pub mod view;

pub use action::{ActionOutcome, Notice, NoticeKind, NotificationSink, StoreAction};
pub use config::PagesConfig;
pub use error::{ClipboardError, ConfigError, PagesError, StoreError, WireError};
pub use event::{ClickEvent, UiEvent, claim_key, opens_row};
pub use format::{DateTimeFormatter, TimeFormat, Zone};
pub use list::{PageListFilter, select_pages};
pub use memory::{
    ChangeKind, FieldMask, MemoryPageStore, PageChange, PageField, PageSelector, SubscriptionId,
    SubscriptionSlot,
};
pub use menu::{MenuItem, RowState, menu_items};
pub use permissions::PagePermissions;
pub use role::Role;
pub use row::{Clipboard, ModalKind, ModalState, Navigator, PageRowActions, RowLifecycle};
pub use session::{Member, MemberDirectory, MemberRoster, Session, SessionState};
pub use smol_str::SmolStr;
pub use store::{PageLookup, PageStore, PageUpdate};
pub use types::{
    LabelDetail, LabelId, PageAccess, PageId, PageScope, PageSummary, ProjectId, UserId,
    WorkspaceSlug,
};
pub use view::{AccessToggle, FavoriteToggle, LabelChip, PageRowView, ROW_FIELDS, TimestampView};
