//! In-memory store backing tests and embedded use

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BorrowStatus, Transaction, User},
};

use super::{BookStore, TransactionStore, UserStore};

#[derive(Default)]
struct Inner {
    books: HashMap<i32, Book>,
    transactions: HashMap<i32, Transaction>,
    users: HashMap<i32, User>,
    next_transaction_id: i32,
}

/// Shared in-memory store implementing all three storage ports.
///
/// One lock over the whole state keeps reserve/release serializable per
/// book: the availability check and the decrement happen under a single
/// write guard.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a book (the catalogue CRUD lives outside the core)
    pub async fn put_book(&self, book: Book) {
        self.inner.write().await.books.insert(book.id, book);
    }

    /// Seed a user
    pub async fn put_user(&self, user: User) {
        self.inner.write().await.users.insert(user.id, user);
    }

    /// Current available quantity of a book
    pub async fn quantity(&self, book_id: i32) -> AppResult<i32> {
        self.inner
            .read()
            .await
            .books
            .get(&book_id)
            .map(|book| book.quantity)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn get(&self, id: i32) -> AppResult<Book> {
        self.inner
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    async fn reserve(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let book = inner
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        if book.quantity <= 0 {
            return Err(AppError::OutOfStock(format!(
                "Book '{}' has no copies left",
                book.title
            )));
        }

        book.quantity -= 1;
        Ok(())
    }

    async fn release(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let book = inner
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        book.quantity += 1;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn get(&self, id: i32) -> AppResult<Transaction> {
        self.inner
            .read()
            .await
            .transactions
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Transaction with id {} not found", id)))
    }

    async fn create(
        &self,
        user_id: i32,
        book_id: i32,
        status: BorrowStatus,
    ) -> AppResult<Transaction> {
        let mut inner = self.inner.write().await;
        inner.next_transaction_id += 1;

        let transaction = Transaction {
            id: inner.next_transaction_id,
            user_id,
            book_id,
            status,
            created_at: Utc::now(),
        };
        inner.transactions.insert(transaction.id, transaction.clone());
        Ok(transaction)
    }

    async fn set_status(&self, id: i32, status: BorrowStatus) -> AppResult<Transaction> {
        let mut inner = self.inner.write().await;
        let transaction = inner
            .transactions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Transaction with id {} not found", id)))?;

        transaction.status = status;
        Ok(transaction.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, id: i32) -> AppResult<User> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i32, quantity: i32) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author: "Author".to_string(),
            isbn: format!("978-{:010}", id),
            quantity,
        }
    }

    #[tokio::test]
    async fn reserve_fails_at_zero() {
        let store = MemoryStore::new();
        store.put_book(book(1, 0)).await;

        let err = BookStore::reserve(&store, 1).await.unwrap_err();
        assert!(matches!(err, AppError::OutOfStock(_)));
        assert_eq!(store.quantity(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reserve_then_release_round_trips() {
        let store = MemoryStore::new();
        store.put_book(book(1, 3)).await;

        BookStore::reserve(&store, 1).await.unwrap();
        assert_eq!(store.quantity(1).await.unwrap(), 2);

        BookStore::release(&store, 1).await.unwrap();
        assert_eq!(store.quantity(1).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn unknown_book_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            BookStore::reserve(&store, 42).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn last_copy_is_reserved_exactly_once() {
        let store = MemoryStore::new();
        store.put_book(book(1, 1)).await;

        let first = tokio::spawn({
            let store = store.clone();
            async move { BookStore::reserve(&store, 1).await }
        });
        let second = tokio::spawn({
            let store = store.clone();
            async move { BookStore::reserve(&store, 1).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(AppError::OutOfStock(_)))));
        assert_eq!(store.quantity(1).await.unwrap(), 0);
    }
}
