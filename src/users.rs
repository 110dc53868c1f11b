//! The hardcoded user dataset served by `GET /api/users`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable numeric identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

/// The full dataset, built once per process. Insertion order is part of
/// the contract: id 1 before id 2, identical on every call.
static USERS: Lazy<[UserRecord; 2]> = Lazy::new(|| {
    [
        UserRecord {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        UserRecord {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
});

/// All user records, in insertion order.
pub fn all_users() -> &'static [UserRecord] {
    &*USERS
}
