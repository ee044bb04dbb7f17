//! User model and caller identity

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// User account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Librarian,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Librarian => "librarian",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "librarian" => Ok(Role::Librarian),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User as seen by the borrow core: existence and role, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

/// Validated caller identity handed in by the authentication layer.
///
/// The core never derives roles itself; the guards upstream resolve the
/// JWT and pass the resulting identity down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i32,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: i32, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Require the right to manage borrows (approve, reject, override)
    pub fn require_manage_borrows(&self) -> Result<(), AppError> {
        match self.role {
            Role::Librarian | Role::Admin => Ok(()),
            Role::Student => Err(AppError::Authorization(
                "Insufficient rights to manage borrows".to_string(),
            )),
        }
    }
}
