//! Loan state machine: transition legality and inventory effect
//!
//! The effect of a status change is keyed purely on the pair of statuses,
//! regardless of which entry point requested it. Statuses classify as
//! occupying (Borrowed, Overdue: a copy is out with the borrower) or free
//! (Requested, Returned, Rejected). Crossing from free to occupying
//! consumes a copy, crossing back frees one, and moves within one class
//! leave the count alone.

use crate::{
    error::{AppError, AppResult},
    models::BorrowStatus,
};

/// Inventory effect of a status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEffect {
    /// Take one copy off the shelf; fails when none remain
    Reserve,
    /// Put one copy back
    Release,
    /// No change to availability
    None,
}

/// Inventory effect of moving a transaction from `from` to `to`
pub fn stock_effect(from: BorrowStatus, to: BorrowStatus) -> StockEffect {
    match (from.occupies_copy(), to.occupies_copy()) {
        (false, true) => StockEffect::Reserve,
        (true, false) => StockEffect::Release,
        _ => StockEffect::None,
    }
}

/// Validate a librarian override and return its effect.
///
/// Any pair of distinct statuses is reachable, since a librarian fixing a
/// data-entry mistake must be able to move a transaction anywhere; only a
/// transition to the status the transaction already has is refused.
pub fn validate_override(from: BorrowStatus, to: BorrowStatus) -> AppResult<StockEffect> {
    if from == to {
        return Err(AppError::InvalidTransition(format!(
            "Transaction is already {}",
            from
        )));
    }
    Ok(stock_effect(from, to))
}
