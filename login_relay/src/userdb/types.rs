use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record resolved by the external store
///
/// Owned by the store; this crate only reads it. The record must expose at
/// least the email and the customer scope used to build session claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Display name
    pub label: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, customer_id: Option<String>, label: String) -> Self {
        let now = Utc::now();
        Self {
            email,
            customer_id,
            label,
            created_at: now,
            updated_at: now,
        }
    }
}
