//! Storage ports for the borrow core
//!
//! The core depends on narrow traits rather than a concrete database
//! client, so tests run against an in-memory store and embedders plug in
//! their own persistence.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BorrowStatus, Transaction, User},
};

pub use memory::MemoryStore;

/// Book lookup plus the inventory ledger.
///
/// `reserve` and `release` are the only code paths allowed to change a
/// book's `quantity`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Get book by ID
    async fn get(&self, id: i32) -> AppResult<Book>;

    /// Take one copy off the shelf, atomically with the availability
    /// check. Fails with `OutOfStock` when no copies remain, leaving the
    /// quantity untouched.
    async fn reserve(&self, id: i32) -> AppResult<()>;

    /// Put one copy back. Returns always succeed; no upper bound.
    async fn release(&self, id: i32) -> AppResult<()>;
}

/// Borrow transaction persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Get transaction by ID
    async fn get(&self, id: i32) -> AppResult<Transaction>;

    /// Create a transaction in the given initial status
    async fn create(
        &self,
        user_id: i32,
        book_id: i32,
        status: BorrowStatus,
    ) -> AppResult<Transaction>;

    /// Persist a status change. The user and book references never change.
    async fn set_status(&self, id: i32, status: BorrowStatus) -> AppResult<Transaction>;
}

/// User lookup (existence and role checks only)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by ID
    async fn get(&self, id: i32) -> AppResult<User>;
}

/// Main repository struct holding the storage ports
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
    pub transactions: Arc<dyn TransactionStore>,
    pub users: Arc<dyn UserStore>,
}

impl Repository {
    /// Create a repository from the given storage ports
    pub fn new(
        books: Arc<dyn BookStore>,
        transactions: Arc<dyn TransactionStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            books,
            transactions,
            users,
        }
    }

    /// Repository backed by a single in-memory store.
    ///
    /// The store handle is returned alongside so callers can seed books
    /// and users and inspect quantities.
    pub fn in_memory() -> (Self, MemoryStore) {
        let store = MemoryStore::new();
        (
            Self {
                books: Arc::new(store.clone()),
                transactions: Arc::new(store.clone()),
                users: Arc::new(store.clone()),
            },
            store,
        )
    }
}
