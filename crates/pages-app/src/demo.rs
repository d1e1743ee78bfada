//! Seed data for running the page list without a backend.

use pages_core::{
    Member, MemberRoster, MemoryPageStore, PageSummary, ProjectId, Role, SessionState, UserId,
    WorkspaceSlug,
};
use serde::Deserialize;

use crate::context::ProjectLink;

const DEMO_WORKSPACE: &str = include_str!("../assets/demo/workspace.json");

#[derive(Debug, Clone, Deserialize)]
pub struct DemoWorkspace {
    pub workspace_slug: WorkspaceSlug,
    pub project_id: ProjectId,
    pub current_user: UserId,
    pub role: Role,
    pub members: Vec<Member>,
    pub pages: Vec<PageSummary>,
}

impl DemoWorkspace {
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(DEMO_WORKSPACE)
    }

    pub fn session(&self) -> SessionState {
        let mut session = SessionState::default();
        session.set_authenticated(self.current_user.clone());
        session.set_project_role(self.project_id.clone(), self.role);
        session
    }

    pub fn roster(&self) -> MemberRoster {
        MemberRoster::new(self.members.iter().cloned())
    }

    pub fn project(&self) -> ProjectLink {
        ProjectLink {
            workspace_slug: self.workspace_slug.clone(),
            project_id: self.project_id.clone(),
        }
    }

    pub fn store(&self) -> MemoryPageStore {
        MemoryPageStore::with_pages(self.pages.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use pages_core::{MemberDirectory, PageId, PageLookup, Session};

    use super::*;

    #[test]
    fn test_bundled_workspace_parses() {
        let demo = DemoWorkspace::load().unwrap();
        assert_eq!(demo.workspace_slug.as_str(), "acme");
        assert_eq!(demo.role, Role::Member);
        assert_eq!(demo.pages.len(), 6);
    }

    #[test]
    fn test_seeded_state() {
        let demo = DemoWorkspace::load().unwrap();
        let session = demo.session();
        assert_eq!(session.current_user_id(), Some(UserId::new("u-ada")));
        assert_eq!(session.project_role(&demo.project_id), Some(Role::Member));

        let roster = demo.roster();
        assert_eq!(
            roster
                .member(&UserId::new("u-grace"))
                .map(|m| m.display_name.to_string()),
            Some("Grace Hopper".to_string())
        );

        let store = demo.store();
        assert!(store.unarchived_page(&PageId::new("p-roadmap")).is_some());
        assert!(store.archived_page(&PageId::new("p-retro")).is_some());
    }
}
