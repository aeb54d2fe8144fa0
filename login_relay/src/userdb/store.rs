use async_trait::async_trait;

use super::errors::UserError;
use super::types::User;

/// Interface to the external user store
///
/// The store is always queried with an already-lowercased email. `password`
/// is the credential to verify on the password path; `None` is an
/// identity-only lookup (recheck and OAuth paths) that the store must resolve
/// without requiring a credential. Implementations never mutate identity as
/// part of a lookup.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_user(&self, email: &str, password: Option<&str>) -> Result<User, UserError>;
}
