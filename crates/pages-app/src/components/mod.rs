//! Shared components. The page row is the centrepiece; everything else here
//! exists to support it.

pub mod button;
pub mod dialog;
pub mod icons;
pub mod page_dialogs;
pub mod row_menu;
pub mod toast;

mod pages_list_item;
pub use pages_list_item::{PagesListItem, RowActions};
