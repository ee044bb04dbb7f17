//! Borrow transaction service
//!
//! Sequences the state machine and the inventory ledger: validate the
//! transition, apply its stock effect, then commit the new status. A
//! failed reserve aborts before any status write, so the transaction and
//! the book quantity always change together or not at all.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{BorrowStatus, Caller, Transaction},
    repository::Repository,
};

use super::transitions::{self, StockEffect};

#[derive(Clone)]
pub struct TransactionsService {
    repository: Repository,
    /// Serializes every read-check-write across transaction status and
    /// book quantity, so a last copy cannot be handed out twice.
    gate: Arc<Mutex<()>>,
}

impl TransactionsService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Look up a transaction (unsynchronized read)
    pub async fn get_transaction(&self, id: i32) -> AppResult<Transaction> {
        self.repository.transactions.get(id).await
    }

    /// Student borrow request. No stock is held until a librarian approves.
    pub async fn create_request(&self, user_id: i32, book_id: i32) -> AppResult<Transaction> {
        self.repository.users.get(user_id).await?;
        self.repository.books.get(book_id).await?;

        let transaction = self
            .repository
            .transactions
            .create(user_id, book_id, BorrowStatus::Requested)
            .await?;

        tracing::info!(
            transaction_id = transaction.id,
            user_id,
            book_id,
            "Borrow request created"
        );
        Ok(transaction)
    }

    /// Approve a pending borrow request (Requested -> Borrowed)
    pub async fn approve(&self, caller: &Caller, transaction_id: i32) -> AppResult<Transaction> {
        caller.require_manage_borrows()?;

        let _guard = self.gate.lock().await;

        let transaction = self.repository.transactions.get(transaction_id).await?;
        if transaction.status != BorrowStatus::Requested {
            return Err(AppError::Conflict(
                "Transaction is not a pending request".to_string(),
            ));
        }

        self.repository.books.reserve(transaction.book_id).await?;
        let transaction = self
            .repository
            .transactions
            .set_status(transaction_id, BorrowStatus::Borrowed)
            .await?;

        tracing::info!(
            transaction_id,
            book_id = transaction.book_id,
            "Borrow request approved"
        );
        Ok(transaction)
    }

    /// Reject a pending borrow request (Requested -> Rejected)
    pub async fn reject(&self, caller: &Caller, transaction_id: i32) -> AppResult<Transaction> {
        caller.require_manage_borrows()?;

        let _guard = self.gate.lock().await;

        let transaction = self.repository.transactions.get(transaction_id).await?;
        if transaction.status != BorrowStatus::Requested {
            return Err(AppError::Conflict(
                "Transaction is not a pending request".to_string(),
            ));
        }

        let transaction = self
            .repository
            .transactions
            .set_status(transaction_id, BorrowStatus::Rejected)
            .await?;

        tracing::info!(transaction_id, "Borrow request rejected");
        Ok(transaction)
    }

    /// Librarian override: move a transaction to any other status.
    ///
    /// Accepts pairs the normal workflow never produces (Rejected ->
    /// Borrowed and the like) so a data-entry mistake can be corrected.
    /// The stock effect comes from the status classification in
    /// [`transitions`].
    pub async fn set_status(
        &self,
        caller: &Caller,
        transaction_id: i32,
        desired: BorrowStatus,
    ) -> AppResult<Transaction> {
        caller.require_manage_borrows()?;

        let _guard = self.gate.lock().await;

        let transaction = self.repository.transactions.get(transaction_id).await?;
        let effect = transitions::validate_override(transaction.status, desired)?;

        match effect {
            StockEffect::Reserve => self.repository.books.reserve(transaction.book_id).await?,
            StockEffect::Release => self.repository.books.release(transaction.book_id).await?,
            StockEffect::None => {}
        }

        let from = transaction.status;
        let transaction = self
            .repository
            .transactions
            .set_status(transaction_id, desired)
            .await?;

        tracing::info!(
            transaction_id,
            %from,
            to = %desired,
            ?effect,
            "Transaction status overridden"
        );
        Ok(transaction)
    }

    /// Record a loan handed out at the desk, skipping the request step.
    pub async fn direct_borrow(
        &self,
        caller: &Caller,
        user_id: i32,
        book_id: i32,
    ) -> AppResult<Transaction> {
        caller.require_manage_borrows()?;

        self.repository.users.get(user_id).await?;

        let _guard = self.gate.lock().await;

        self.repository.books.reserve(book_id).await?;
        let transaction = self
            .repository
            .transactions
            .create(user_id, book_id, BorrowStatus::Borrowed)
            .await?;

        tracing::info!(
            transaction_id = transaction.id,
            user_id,
            book_id,
            "Book borrowed directly"
        );
        Ok(transaction)
    }
}
