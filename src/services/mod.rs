//! Business logic services

pub mod transactions;
pub mod transitions;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub transactions: transactions::TransactionsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            transactions: transactions::TransactionsService::new(repository),
        }
    }
}
