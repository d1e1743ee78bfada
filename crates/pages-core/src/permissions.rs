//! What the current user may do with a single page.

use crate::role::Role;
use crate::types::UserId;

/// Permission predicates for one page, computed fresh on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagePermissions {
    pub is_owner: bool,
    pub can_edit: bool,
    pub can_change_access: bool,
    pub can_archive: bool,
    pub can_delete: bool,
    /// Whether the project role allows editing at all (member or above).
    pub is_editing_allowed: bool,
}

impl PagePermissions {
    /// `role` is `None` while membership is unknown (signed out or still loading).
    pub fn resolve(current_user: Option<&UserId>, owner: &UserId, role: Option<Role>) -> Self {
        let is_owner = current_user.is_some_and(|user| user == owner);
        let is_admin = role == Some(Role::Admin);

        Self {
            is_owner,
            can_edit: is_owner || matches!(role, Some(Role::Admin | Role::Member)),
            can_change_access: is_owner,
            can_archive: is_owner || is_admin,
            can_delete: is_owner || is_admin,
            is_editing_allowed: role.is_some_and(|role| role.at_least(Role::Member)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> [Option<Role>; 5] {
        [
            None,
            Some(Role::Guest),
            Some(Role::Viewer),
            Some(Role::Member),
            Some(Role::Admin),
        ]
    }

    #[test]
    fn test_full_permission_table() {
        let owner = UserId::new("owner");
        let other = UserId::new("someone-else");

        for is_owner in [false, true] {
            let current = if is_owner { &owner } else { &other };
            for role in roles() {
                let perms = PagePermissions::resolve(Some(current), &owner, role);
                let admin = role == Some(Role::Admin);
                let member_or_admin = matches!(role, Some(Role::Member | Role::Admin));

                assert_eq!(perms.is_owner, is_owner);
                assert_eq!(perms.can_edit, is_owner || member_or_admin, "{role:?}");
                assert_eq!(perms.can_change_access, is_owner, "{role:?}");
                assert_eq!(perms.can_archive, is_owner || admin, "{role:?}");
                assert_eq!(perms.can_delete, is_owner || admin, "{role:?}");
                assert_eq!(perms.is_editing_allowed, member_or_admin, "{role:?}");
            }
        }
    }

    #[test]
    fn test_unknown_role_leaves_only_ownership() {
        let owner = UserId::new("u1");
        let perms = PagePermissions::resolve(Some(&owner), &owner, None);
        assert!(perms.can_edit);
        assert!(perms.can_change_access);
        assert!(perms.can_archive);
        assert!(perms.can_delete);
        assert!(!perms.is_editing_allowed);

        let perms = PagePermissions::resolve(None, &owner, None);
        assert_eq!(perms, PagePermissions::default());
    }

    #[test]
    fn test_signed_out_is_never_owner() {
        let owner = UserId::new("u1");
        let perms = PagePermissions::resolve(None, &owner, Some(Role::Admin));
        assert!(!perms.is_owner);
        assert!(!perms.can_change_access);
        assert!(perms.can_archive);
    }
}
