//! Repositories over a borrowed SQLite connection.
//!
//! Each store borrows the request's connection (or an open transaction)
//! mutably, so a request never shares a connection with another request.

pub mod catalog;
pub mod orders;
pub mod users;

pub use catalog::CatalogStore;
pub use orders::OrderStore;
pub use users::UserStore;
