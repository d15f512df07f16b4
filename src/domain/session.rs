//! Authenticated session context
//!
//! Passed explicitly into every operation that is gated by role, instead of
//! holding a process-global current user.

use serde::{Deserialize, Serialize};

use super::errors::ServiceError;

pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn require_admin(&self) -> Result<(), ServiceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden)
        }
    }
}

pub fn is_valid_role(role: &str) -> bool {
    role == ROLE_MANAGER || role == ROLE_ADMIN
}
