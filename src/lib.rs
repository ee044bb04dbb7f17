//! Libris borrow workflow core
//!
//! The loan state machine and inventory ledger behind the Libris library
//! management system: how a borrow transaction moves between statuses and
//! how each move affects the number of copies available to lend.
//!
//! Authentication, catalogue CRUD and HTTP routing live in outer layers;
//! they hand the core validated identifiers and a caller identity and get
//! back transactions or business errors.

pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{AppError, AppResult};
pub use models::{Book, BorrowStatus, Caller, Role, Transaction, User};
pub use repository::Repository;
pub use services::Services;
