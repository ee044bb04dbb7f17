//! Domain models

pub mod book;
pub mod transaction;
pub mod user;

pub use book::Book;
pub use transaction::{BorrowStatus, Transaction};
pub use user::{Caller, Role, User};
