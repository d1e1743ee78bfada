//! Identifiers and the read-only page record the list renders from.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::WireError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(SmolStr);

        impl $name {
            pub fn new(value: impl AsRef<str>) -> Self {
                Self(SmolStr::new(value))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(SmolStr::default())
            }
        }
    };
}

string_id!(
    /// URL slug of the workspace a project lives in.
    WorkspaceSlug
);
string_id!(ProjectId);
string_id!(PageId);
string_id!(UserId);
string_id!(LabelId);

/// Page visibility. On the wire this is `0` for public and `1` for private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PageAccess {
    #[default]
    Public,
    Private,
}

impl PageAccess {
    pub fn is_private(self) -> bool {
        matches!(self, PageAccess::Private)
    }

    /// The setting a visibility toggle switches to.
    pub fn toggled(self) -> Self {
        match self {
            PageAccess::Public => PageAccess::Private,
            PageAccess::Private => PageAccess::Public,
        }
    }
}

impl TryFrom<u8> for PageAccess {
    type Error = WireError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PageAccess::Public),
            1 => Ok(PageAccess::Private),
            other => Err(WireError::UnknownAccess(other)),
        }
    }
}

impl From<PageAccess> for u8 {
    fn from(value: PageAccess) -> Self {
        match value {
            PageAccess::Public => 0,
            PageAccess::Private => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDetail {
    pub id: LabelId,
    pub name: SmolStr,
    /// Hex colour, e.g. `#ff7700`.
    pub color: SmolStr,
}

/// A page as the store hands it out. The list never mutates one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub project: ProjectId,
    pub name: SmolStr,
    pub owned_by: UserId,
    #[serde(default)]
    pub access: PageAccess,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub label_details: Vec<LabelDetail>,
}

impl PageSummary {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// Everything needed to address a page in store calls and links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageScope {
    pub workspace_slug: WorkspaceSlug,
    pub project_id: ProjectId,
    pub page_id: PageId,
}

impl PageScope {
    pub fn new(workspace_slug: WorkspaceSlug, project_id: ProjectId, page_id: PageId) -> Self {
        Self {
            workspace_slug,
            project_id,
            page_id,
        }
    }

    /// Path relative to the app root: `{slug}/projects/{project}/pages/{page}`.
    pub fn relative_path(&self) -> String {
        format!(
            "{}/projects/{}/pages/{}",
            self.workspace_slug, self.project_id, self.page_id
        )
    }

    /// Absolute in-app route for the page.
    pub fn href(&self) -> String {
        format!("/{}", self.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        let scope = PageScope::new("acme".into(), "proj-1".into(), "page-9".into());
        assert_eq!(scope.relative_path(), "acme/projects/proj-1/pages/page-9");
        assert_eq!(scope.href(), "/acme/projects/proj-1/pages/page-9");
    }

    #[test]
    fn test_access_wire_values() {
        assert_eq!(serde_json::to_string(&PageAccess::Private).unwrap(), "1");
        let parsed: PageAccess = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, PageAccess::Public);
        assert!(serde_json::from_str::<PageAccess>("4").is_err());
        assert_eq!(PageAccess::try_from(4), Err(WireError::UnknownAccess(4)));
    }

    #[test]
    fn test_access_toggled() {
        assert_eq!(PageAccess::Public.toggled(), PageAccess::Private);
        assert_eq!(PageAccess::Private.toggled(), PageAccess::Public);
        assert!(PageAccess::Private.is_private());
    }

    #[test]
    fn test_summary_deserializes_with_defaults() {
        let json = r#"{
            "id": "p1",
            "project": "proj",
            "name": "Roadmap",
            "owned_by": "u1",
            "updated_at": "2024-03-01T10:00:00Z",
            "created_at": "2024-02-01T09:00:00Z"
        }"#;
        let page: PageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(page.id.as_str(), "p1");
        assert_eq!(page.access, PageAccess::Public);
        assert!(!page.is_archived());
        assert!(!page.is_favorite);
        assert!(page.label_details.is_empty());
    }
}
