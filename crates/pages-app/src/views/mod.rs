//! Route components. Every route renders inside [`Navbar`].

mod home;
pub use home::Home;

mod navbar;
pub use navbar::Navbar;

mod pages_list;
pub use pages_list::PagesList;

mod page_detail;
pub use page_detail::PageDetail;

mod not_found;
pub use not_found::NotFound;
