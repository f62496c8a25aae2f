//! User API operations.

use super::{InventarioClient, Record};
use crate::error::Result;

/// Endpoint listing users.
pub const USERS_PATH: &str = "/api/usuarios";

impl InventarioClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<Record>> {
        self.list_items(USERS_PATH).await
    }
}
