//! Current user, project membership and the member directory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::role::Role;
use crate::types::{ProjectId, UserId};

/// Who is looking at the list.
pub trait Session {
    fn current_user_id(&self) -> Option<UserId>;
    fn project_role(&self, project: &ProjectId) -> Option<Role>;
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub user_id: Option<UserId>,
    pub project_roles: HashMap<ProjectId, Role>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn set_authenticated(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
    }

    pub fn set_project_role(&mut self, project: ProjectId, role: Role) {
        self.project_roles.insert(project, role);
    }

    /// Returns the role held before, if any.
    pub fn remove_project_role(&mut self, project: &ProjectId) -> Option<Role> {
        self.project_roles.remove(project)
    }

    pub fn clear(&mut self) {
        self.user_id = None;
        self.project_roles.clear();
    }
}

impl Session for SessionState {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }

    fn project_role(&self, project: &ProjectId) -> Option<Role> {
        self.project_roles.get(project).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: UserId,
    pub display_name: SmolStr,
}

/// Resolves user ids to something printable.
pub trait MemberDirectory {
    fn member(&self, user: &UserId) -> Option<Member>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberRoster {
    members: HashMap<UserId, Member>,
}

impl MemberRoster {
    pub fn new(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            members: members.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    pub fn insert(&mut self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberDirectory for MemberRoster {
    fn member(&self, user: &UserId) -> Option<Member> {
        self.members.get(user).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roles_are_per_project() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());
        session.set_authenticated(UserId::new("u1"));
        session.set_project_role(ProjectId::new("a"), Role::Admin);

        assert_eq!(session.current_user_id(), Some(UserId::new("u1")));
        assert_eq!(session.project_role(&ProjectId::new("a")), Some(Role::Admin));
        assert_eq!(session.project_role(&ProjectId::new("b")), None);

        assert_eq!(session.remove_project_role(&ProjectId::new("a")), Some(Role::Admin));
        assert_eq!(session.project_role(&ProjectId::new("a")), None);
        session.set_project_role(ProjectId::new("a"), Role::Viewer);

        session.clear();
        assert_eq!(session.current_user_id(), None);
        assert_eq!(session.project_role(&ProjectId::new("a")), None);
    }

    #[test]
    fn test_roster_lookup() {
        let roster = MemberRoster::new([Member {
            id: UserId::new("u1"),
            display_name: "ada".into(),
        }]);
        assert_eq!(roster.member(&UserId::new("u1")).map(|m| m.display_name), Some("ada".into()));
        assert!(roster.member(&UserId::new("nobody")).is_none());
    }
}
