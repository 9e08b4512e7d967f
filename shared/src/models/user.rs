//! User Model

use serde::{Deserialize, Serialize};

/// Role of an authenticated caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Back-office operator, may drive the full order workflow
    Admin,
    /// Regular customer, may only act on their own orders
    #[default]
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
