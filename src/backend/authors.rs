//! Author names attached to questions and answers.
//!
//! Records reference their author by an optional user id. Before a record
//! is returned or broadcast it is wrapped in [`Authored`] with the author's
//! username, or `"Anonymous"` when there is no id, no such user, or the
//! lookup fails.

use crate::backend::store::QaStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name shown for records without a known author
pub const ANONYMOUS: &str = "Anonymous";

/// A stored record plus its author's display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authored<T> {
    #[serde(flatten)]
    pub record: T,
    pub username: String,
}

impl<T> Authored<T> {
    /// Attach a looked-up username, falling back to `"Anonymous"`
    pub fn new(record: T, username: Option<String>) -> Self {
        Self {
            record,
            username: username.unwrap_or_else(|| ANONYMOUS.to_string()),
        }
    }
}

/// Username for an optional author id
///
/// Lookup failures are logged and reported as `None`.
pub async fn lookup_username(store: &dyn QaStore, user_id: Option<Uuid>) -> Option<String> {
    let user_id = user_id?;
    match store.find_username(user_id).await {
        Ok(username) => username,
        Err(e) => {
            tracing::warn!(%user_id, "Username lookup failed: {}", e);
            None
        }
    }
}

/// Wrap a record with its author's name
pub async fn attach_author<T>(store: &dyn QaStore, record: T, user_id: Option<Uuid>) -> Authored<T> {
    let username = lookup_username(store, user_id).await;
    Authored::new(record, username)
}
