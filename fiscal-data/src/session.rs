//! Explicit session context.
//!
//! Boundary code receives who is acting as a plain value instead of
//! reading any ambient storage; the pure core never sees it at all.

use fiscal_core::models::{User, UserRole};

/// The authenticated caller: user id plus role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub role: UserRole,
}

impl Session {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
        }
    }

    /// Checks credentials against an already-fetched user list.
    pub fn authenticate(users: &[User], username: &str, password: &str) -> Option<Self> {
        users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(Self::for_user)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether this session may touch records owned by `user_id`.
    /// Admins see everything; taxpayers only their own.
    pub fn can_access_user(&self, user_id: i64) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}
