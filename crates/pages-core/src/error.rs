//! Error types for the page list.
//!
//! Store and clipboard failures never reach the render layer; row actions
//! turn them into notices. They are still typed so stores and tests can tell
//! them apart.

use miette::Diagnostic;

use crate::types::PageId;

/// Top-level error for page list operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum PagesError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// A mutating store operation failed.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("page {0} not found")]
    #[diagnostic(code(pages::store::not_found))]
    NotFound(PageId),

    #[error("page {0} is not archived")]
    #[diagnostic(
        code(pages::store::not_archived),
        help("archive the page first, then delete it from the archived list")
    )]
    NotArchived(PageId),

    #[error("page {0} is archived")]
    #[diagnostic(code(pages::store::archived))]
    Archived(PageId),

    #[error("page name must not be empty")]
    #[diagnostic(code(pages::store::empty_name))]
    EmptyName,

    #[error("request rejected: {0}")]
    #[diagnostic(code(pages::store::rejected))]
    Rejected(String),
}

#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available on this platform")]
    #[diagnostic(code(pages::clipboard::unavailable))]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    #[diagnostic(code(pages::clipboard::write))]
    Write(String),
}

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("invalid app origin {value:?}")]
    #[diagnostic(
        code(pages::config::origin),
        help("set PAGES_APP_ORIGIN to an absolute URL such as https://pages.example.com")
    )]
    InvalidOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid time format {0:?}")]
    #[diagnostic(
        code(pages::config::time_format),
        help("PAGES_TIME_FORMAT accepts `12-hour` or `24-hour`")
    )]
    InvalidTimeFormat(String),

    #[error("invalid notice duration {value:?}")]
    #[diagnostic(code(pages::config::notice_duration), help("PAGES_NOTICE_MS is a whole number of milliseconds"))]
    InvalidDuration {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// A wire value outside the known set.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("unknown project role {0}")]
    #[diagnostic(code(pages::wire::role), help("roles are 5, 10, 15 or 20"))]
    UnknownRole(u8),

    #[error("unknown page access value {0}")]
    #[diagnostic(code(pages::wire::access), help("access is 0 (public) or 1 (private)"))]
    UnknownAccess(u8),
}
