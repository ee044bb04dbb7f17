//! Borrow transaction model and status enum

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle states of a borrow transaction.
///
/// Serialized as the capitalized wire strings the REST layer exchanges
/// with clients ("Requested", "Borrowed", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorrowStatus {
    Requested,
    Borrowed,
    Returned,
    Overdue,
    Rejected,
}

impl BorrowStatus {
    pub const ALL: [BorrowStatus; 5] = [
        BorrowStatus::Requested,
        BorrowStatus::Borrowed,
        BorrowStatus::Returned,
        BorrowStatus::Overdue,
        BorrowStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Requested => "Requested",
            BorrowStatus::Borrowed => "Borrowed",
            BorrowStatus::Returned => "Returned",
            BorrowStatus::Overdue => "Overdue",
            BorrowStatus::Rejected => "Rejected",
        }
    }

    /// True when a physical copy is considered out with the borrower.
    ///
    /// This classification drives every inventory decision: entering an
    /// occupying status from a non-occupying one consumes a copy, the
    /// reverse direction frees one, and moves within the same class leave
    /// the count alone.
    pub fn occupies_copy(&self) -> bool {
        matches!(self, BorrowStatus::Borrowed | BorrowStatus::Overdue)
    }
}

impl std::fmt::Display for BorrowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BorrowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Requested" => Ok(BorrowStatus::Requested),
            "Borrowed" => Ok(BorrowStatus::Borrowed),
            "Returned" => Ok(BorrowStatus::Returned),
            "Overdue" => Ok(BorrowStatus::Overdue),
            "Rejected" => Ok(BorrowStatus::Rejected),
            _ => Err(format!("Invalid borrow status: {}", s)),
        }
    }
}

/// Borrow transaction (loan).
///
/// The user and book references are fixed at creation; only `status` ever
/// changes afterwards. Rejection is a terminal status, not a row deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub status: BorrowStatus,
    pub created_at: DateTime<Utc>,
}
