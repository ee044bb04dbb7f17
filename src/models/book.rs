//! Book (catalogue entry) model

use serde::{Deserialize, Serialize};

/// Catalogue entry as seen by the borrow core.
///
/// The catalogue CRUD lives outside this crate. `quantity` is the one field
/// the core mutates, and only through the ledger operations on
/// [`crate::repository::BookStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Copies currently available to lend. Never negative.
    pub quantity: i32,
}
