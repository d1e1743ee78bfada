//! Contextual menu entries for a page row.

use crate::permissions::PagePermissions;
use crate::types::PageSummary;

/// The two mutually exclusive display states of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Active,
    Archived,
}

impl RowState {
    pub fn of(page: &PageSummary) -> Self {
        if page.is_archived() {
            RowState::Archived
        } else {
            RowState::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Edit,
    Archive,
    Restore,
    Delete,
    CopyLink,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Edit => "Edit page",
            MenuItem::Archive => "Archive page",
            MenuItem::Restore => "Restore page",
            MenuItem::Delete => "Delete page",
            MenuItem::CopyLink => "Copy page link",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, MenuItem::Delete)
    }
}

/// Menu entries in display order. Copy link is always last and always present.
pub fn menu_items(state: RowState, perms: &PagePermissions) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(3);
    match state {
        RowState::Active => {
            if perms.can_edit && perms.is_editing_allowed {
                items.push(MenuItem::Edit);
            }
            if perms.can_archive && perms.is_editing_allowed {
                items.push(MenuItem::Archive);
            }
        }
        RowState::Archived => {
            if perms.can_archive {
                items.push(MenuItem::Restore);
            }
            if perms.can_delete && perms.is_editing_allowed {
                items.push(MenuItem::Delete);
            }
        }
    }
    items.push(MenuItem::CopyLink);
    items
}
