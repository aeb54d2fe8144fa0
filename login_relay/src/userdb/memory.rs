use std::collections::HashMap;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use super::errors::UserError;
use super::store::UserStore;
use super::types::User;

struct StoredUser {
    user: User,
    password_hash: Option<Vec<u8>>,
}

/// In-memory user store for demos and tests
///
/// Keys are lowercased emails. Passwords are held as SHA-256 digests and
/// compared in constant time. A user seeded without a password can only be
/// resolved by identity-only lookups.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, StoredUser>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user, optionally with a password credential.
    pub async fn insert(&self, user: User, password: Option<&str>) {
        let key = user.email.to_lowercase();
        let stored = StoredUser {
            user,
            password_hash: password.map(hash_password),
        };
        self.users.write().await.insert(key, stored);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user(&self, email: &str, password: Option<&str>) -> Result<User, UserError> {
        let users = self.users.read().await;
        let stored = users.get(email).ok_or(UserError::NotFound)?;

        if let Some(candidate) = password {
            let matches = stored
                .password_hash
                .as_deref()
                .map(|hash| bool::from(hash.ct_eq(&hash_password(candidate))))
                .unwrap_or(false);
            if !matches {
                return Err(UserError::InvalidCredentials);
            }
        }

        Ok(stored.user.clone())
    }
}

fn hash_password(password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}
