//! Tabs of the page list and which pages each one shows.

use std::fmt;
use std::str::FromStr;

use crate::types::{PageId, PageSummary, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageListFilter {
    Recent,
    #[default]
    All,
    Favorites,
    Private,
    Shared,
    Archived,
}

impl PageListFilter {
    pub const TABS: [PageListFilter; 6] = [
        PageListFilter::Recent,
        PageListFilter::All,
        PageListFilter::Favorites,
        PageListFilter::Private,
        PageListFilter::Shared,
        PageListFilter::Archived,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PageListFilter::Recent => "Recent",
            PageListFilter::All => "All",
            PageListFilter::Favorites => "Favorites",
            PageListFilter::Private => "Private",
            PageListFilter::Shared => "Shared",
            PageListFilter::Archived => "Archived",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageListFilter::Recent => "recent",
            PageListFilter::All => "all",
            PageListFilter::Favorites => "favorites",
            PageListFilter::Private => "private",
            PageListFilter::Shared => "shared",
            PageListFilter::Archived => "archived",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            PageListFilter::Recent | PageListFilter::All => "No pages yet. Create one to get started.",
            PageListFilter::Favorites => "Pages you mark as favorite will show up here.",
            PageListFilter::Private => "Private pages are only visible to you.",
            PageListFilter::Shared => "Pages shared with the project will show up here.",
            PageListFilter::Archived => "Archived pages will show up here.",
        }
    }

    /// Private pages are only listed for their owner.
    pub fn matches(self, page: &PageSummary, viewer: Option<&UserId>) -> bool {
        let visible = !page.access.is_private() || viewer == Some(&page.owned_by);
        if !visible {
            return false;
        }
        match self {
            PageListFilter::Archived => page.is_archived(),
            _ if page.is_archived() => false,
            PageListFilter::Recent | PageListFilter::All => true,
            PageListFilter::Favorites => page.is_favorite,
            PageListFilter::Private => page.access.is_private(),
            PageListFilter::Shared => !page.access.is_private(),
        }
    }
}

impl fmt::Display for PageListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageListFilter::TABS
            .into_iter()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| format!("unknown page list tab {s:?}"))
    }
}

/// Ids of the pages a tab shows, most recently touched first.
///
/// Archived pages sort by when they were archived; everything else by last update.
pub fn select_pages<'a>(
    pages: impl IntoIterator<Item = &'a PageSummary>,
    filter: PageListFilter,
    viewer: Option<&UserId>,
) -> Vec<PageId> {
    let mut selected: Vec<&PageSummary> = pages
        .into_iter()
        .filter(|page| filter.matches(page, viewer))
        .collect();
    selected.sort_by(|a, b| {
        let key = |p: &PageSummary| p.archived_at.unwrap_or(p.updated_at);
        key(b).cmp(&key(a)).then_with(|| a.id.cmp(&b.id))
    });
    selected.into_iter().map(|page| page.id.clone()).collect()
}
