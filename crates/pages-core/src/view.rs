//! Derived render model for a single row.
//!
//! A `PageRowView` is rebuilt from the store on every render; nothing in it
//! is cached between renders, so the favourite star and the lock icon always
//! reflect the latest snapshot.

use smol_str::SmolStr;

use crate::format::DateTimeFormatter;
use crate::memory::{FieldMask, PageField};
use crate::menu::{MenuItem, RowState, menu_items};
use crate::permissions::PagePermissions;
use crate::session::{MemberDirectory, Session};
use crate::store::PageLookup;
use crate::types::{LabelId, PageAccess, PageId, PageScope, PageSummary};

/// Fields a row reads, for subscribing to store changes.
pub const ROW_FIELDS: FieldMask = FieldMask::NONE
    .with(PageField::Name)
    .with(PageField::Access)
    .with(PageField::Archived)
    .with(PageField::Favorite)
    .with(PageField::Labels)
    .with(PageField::Timestamps)
    .with(PageField::Owner);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChip {
    pub id: LabelId,
    pub name: SmolStr,
    pub color: SmolStr,
    /// Label colour at low alpha, for the chip background.
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampView {
    pub text: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub is_favorite: bool,
}

impl FavoriteToggle {
    pub fn tooltip(self) -> &'static str {
        if self.is_favorite {
            "Remove from favorites"
        } else {
            "Mark as favorite"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessToggle {
    pub access: PageAccess,
}

impl AccessToggle {
    pub fn tooltip(self) -> &'static str {
        match self.access {
            PageAccess::Private => "This page is only visible to you",
            PageAccess::Public => "This page can be viewed by anyone in the project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRowView {
    pub page_id: PageId,
    pub name: SmolStr,
    pub href: String,
    pub state: RowState,
    pub labels: Vec<LabelChip>,
    pub timestamp: TimestampView,
    /// Present only when the viewer may edit in this project.
    pub favorite: Option<FavoriteToggle>,
    /// Present only for the page owner.
    pub access: Option<AccessToggle>,
    pub created_by: String,
    pub menu: Vec<MenuItem>,
    pub permissions: PagePermissions,
}

impl PageRowView {
    /// Look the page up and build its row, or `None` when the store has no
    /// such page in either collection. `None` means "render nothing".
    pub fn resolve(
        store: &impl PageLookup,
        session: &impl Session,
        members: &impl MemberDirectory,
        scope: &PageScope,
        formatter: &DateTimeFormatter,
    ) -> Option<Self> {
        let page = store.page(&scope.page_id)?;
        let role = session.project_role(&scope.project_id);
        let current_user = session.current_user_id();
        let permissions = PagePermissions::resolve(current_user.as_ref(), &page.owned_by, role);
        let owner_name = members
            .member(&page.owned_by)
            .map(|m| m.display_name)
            .unwrap_or_else(|| SmolStr::new_static("an unknown member"));
        Some(Self::build(&page, scope, permissions, &owner_name, formatter))
    }

    pub fn build(
        page: &PageSummary,
        scope: &PageScope,
        permissions: PagePermissions,
        owner_name: &str,
        formatter: &DateTimeFormatter,
    ) -> Self {
        let state = RowState::of(page);
        let timestamp = match page.archived_at {
            Some(archived_at) => TimestampView {
                text: formatter.time(&archived_at),
                tooltip: format!(
                    "Archived at {} on {}",
                    formatter.time(&archived_at),
                    formatter.date(&archived_at)
                ),
            },
            None => TimestampView {
                text: formatter.time(&page.updated_at),
                tooltip: format!(
                    "Last updated at {} on {}",
                    formatter.time(&page.updated_at),
                    formatter.date(&page.updated_at)
                ),
            },
        };

        Self {
            page_id: page.id.clone(),
            name: page.name.clone(),
            href: scope.href(),
            state,
            labels: page
                .label_details
                .iter()
                .map(|label| LabelChip {
                    id: label.id.clone(),
                    name: label.name.clone(),
                    color: label.color.clone(),
                    background: format!("{}20", label.color),
                })
                .collect(),
            timestamp,
            favorite: permissions.is_editing_allowed.then_some(FavoriteToggle {
                is_favorite: page.is_favorite,
            }),
            access: permissions
                .can_change_access
                .then_some(AccessToggle { access: page.access }),
            created_by: format!(
                "Created by {} on {}",
                owner_name,
                formatter.date(&page.created_at)
            ),
            menu: menu_items(state, &permissions),
            permissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::format::TimeFormat;
    use crate::memory::MemoryPageStore;
    use crate::role::Role;
    use crate::session::{Member, MemberRoster, SessionState};
    use crate::types::{LabelDetail, ProjectId, UserId};

    fn page() -> PageSummary {
        PageSummary {
            id: PageId::new("page-9"),
            project: ProjectId::new("proj-1"),
            name: "Roadmap".into(),
            owned_by: UserId::new("owner"),
            access: PageAccess::Private,
            archived_at: None,
            updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap(),
            is_favorite: true,
            label_details: vec![LabelDetail {
                id: LabelId::new("l1"),
                name: "design".into(),
                color: "#ff7700".into(),
            }],
        }
    }

    fn scope() -> PageScope {
        PageScope::new("acme".into(), "proj-1".into(), "page-9".into())
    }

    fn session(user: &str, role: Option<Role>) -> SessionState {
        let mut session = SessionState::default();
        session.set_authenticated(UserId::new(user));
        if let Some(role) = role {
            session.set_project_role(ProjectId::new("proj-1"), role);
        }
        session
    }

    fn roster() -> MemberRoster {
        MemberRoster::new([Member {
            id: UserId::new("owner"),
            display_name: "ada".into(),
        }])
    }

    #[test]
    fn test_active_row_for_owner() {
        let store = MemoryPageStore::with_pages([page()]);
        let view = PageRowView::resolve(
            &store,
            &session("owner", Some(Role::Member)),
            &roster(),
            &scope(),
            &DateTimeFormatter::utc(TimeFormat::TwentyFourHour),
        )
        .unwrap();

        assert_eq!(view.name, "Roadmap");
        assert_eq!(view.href, "/acme/projects/proj-1/pages/page-9");
        assert_eq!(view.state, RowState::Active);
        assert_eq!(view.timestamp.text, "14:05");
        assert_eq!(view.timestamp.tooltip, "Last updated at 14:05 on Mar 01, 2024");
        assert_eq!(view.created_by, "Created by ada on Feb 10, 2024");
        assert_eq!(view.labels[0].background, "#ff770020");
        assert_eq!(view.favorite, Some(FavoriteToggle { is_favorite: true }));
        assert_eq!(view.favorite.unwrap().tooltip(), "Remove from favorites");
        assert_eq!(view.access.unwrap().tooltip(), "This page is only visible to you");
        assert_eq!(view.menu, vec![MenuItem::Edit, MenuItem::Archive, MenuItem::CopyLink]);
    }

    #[test]
    fn test_archived_row_shows_archive_time() {
        let mut archived = page();
        archived.archived_at = Some(Utc.with_ymd_and_hms(2024, 4, 2, 8, 30, 0).unwrap());
        let store = MemoryPageStore::with_pages([archived]);
        let view = PageRowView::resolve(
            &store,
            &session("owner", Some(Role::Member)),
            &roster(),
            &scope(),
            &DateTimeFormatter::utc(TimeFormat::TwelveHour),
        )
        .unwrap();

        assert_eq!(view.state, RowState::Archived);
        assert_eq!(view.timestamp.text, "08:30 AM");
        assert_eq!(view.timestamp.tooltip, "Archived at 08:30 AM on Apr 02, 2024");
        assert_eq!(view.menu, vec![MenuItem::Restore, MenuItem::Delete, MenuItem::CopyLink]);
    }

    #[test]
    fn test_guest_sees_no_toggles() {
        let store = MemoryPageStore::with_pages([page()]);
        let view = PageRowView::resolve(
            &store,
            &session("someone", Some(Role::Guest)),
            &roster(),
            &scope(),
            &DateTimeFormatter::default(),
        )
        .unwrap();

        assert_eq!(view.favorite, None);
        assert_eq!(view.access, None);
        assert_eq!(view.menu, vec![MenuItem::CopyLink]);
    }

    #[test]
    fn test_missing_page_renders_nothing() {
        let store = MemoryPageStore::new();
        let view = PageRowView::resolve(
            &store,
            &session("owner", Some(Role::Admin)),
            &roster(),
            &scope(),
            &DateTimeFormatter::default(),
        );
        assert!(view.is_none());
    }

    #[test]
    fn test_unknown_owner_still_renders() {
        let store = MemoryPageStore::with_pages([page()]);
        let view = PageRowView::resolve(
            &store,
            &session("owner", None),
            &MemberRoster::default(),
            &scope(),
            &DateTimeFormatter::default(),
        )
        .unwrap();
        assert_eq!(view.created_by, "Created by an unknown member on Feb 10, 2024");
        assert_eq!(view.favorite, None);
        assert!(view.access.is_some());
    }

    #[test]
    fn test_row_fields_cover_everything_rendered() {
        assert_eq!(ROW_FIELDS, FieldMask::ALL);
    }
}
