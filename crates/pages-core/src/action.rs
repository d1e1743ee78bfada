//! Store-backed row actions and the notices they raise.

use std::fmt;

use smol_str::SmolStr;

use crate::error::StoreError;
use crate::store::{PageStore, PageUpdate};
use crate::types::PageScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient alert. Sinks decide how long it stays up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: SmolStr,
    pub message: SmolStr,
}

impl Notice {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn link_copied() -> Self {
        Self::success("Link Copied!", "Page link copied to clipboard.")
    }

    pub fn link_copy_failed() -> Self {
        Self::error("Error!", "Couldn't copy the page link. Please try again.")
    }
}

/// Fire-and-forget notice display.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}

/// A single store mutation triggered from a row or one of its dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    AddToFavorites,
    RemoveFromFavorites,
    MakePublic,
    MakePrivate,
    Archive,
    Restore,
    Update(PageUpdate),
    Delete,
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::AddToFavorites => "add_to_favorites",
            StoreAction::RemoveFromFavorites => "remove_from_favorites",
            StoreAction::MakePublic => "make_public",
            StoreAction::MakePrivate => "make_private",
            StoreAction::Archive => "archive",
            StoreAction::Restore => "restore",
            StoreAction::Update(_) => "update",
            StoreAction::Delete => "delete",
        }
    }

    pub fn success_notice(&self) -> Notice {
        let message = match self {
            StoreAction::AddToFavorites => "Successfully added the page to favorites.",
            StoreAction::RemoveFromFavorites => "Successfully removed the page from favorites.",
            StoreAction::MakePublic => "The page can now be viewed by anyone in the project.",
            StoreAction::MakePrivate => "The page is now only visible to you.",
            StoreAction::Archive => "Successfully archived the page.",
            StoreAction::Restore => "Successfully restored the page.",
            StoreAction::Update(_) => "Page updated successfully.",
            StoreAction::Delete => "Page deleted successfully.",
        };
        Notice::success("Success!", message)
    }

    pub fn failure_notice(&self) -> Notice {
        let message = match self {
            StoreAction::AddToFavorites => "Couldn't add the page to favorites. Please try again.",
            StoreAction::RemoveFromFavorites => {
                "Couldn't remove the page from favorites. Please try again."
            }
            StoreAction::MakePublic => "Couldn't make the page public. Please try again.",
            StoreAction::MakePrivate => "Couldn't make the page private. Please try again.",
            StoreAction::Archive => "Couldn't archive the page. Please try again.",
            StoreAction::Restore => "Couldn't restore the page. Please try again.",
            StoreAction::Update(_) => "Page could not be updated. Please try again.",
            StoreAction::Delete => "Page could not be deleted. Please try again.",
        };
        Notice::error("Error!", message)
    }

    /// Run this action against `store`.
    pub async fn apply<S: PageStore>(&self, store: &S, scope: &PageScope) -> Result<(), StoreError> {
        match self {
            StoreAction::AddToFavorites => store.add_to_favorites(scope).await,
            StoreAction::RemoveFromFavorites => store.remove_from_favorites(scope).await,
            StoreAction::MakePublic => store.make_public(scope).await,
            StoreAction::MakePrivate => store.make_private(scope).await,
            StoreAction::Archive => store.archive_page(scope).await,
            StoreAction::Restore => store.restore_page(scope).await,
            StoreAction::Update(update) => store.update_page(scope, update.clone()).await,
            StoreAction::Delete => store.delete_page(scope).await,
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a dispatched action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
}

impl ActionOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, ActionOutcome::Succeeded)
    }
}
