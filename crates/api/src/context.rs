use chaintrack_auth::User;
use chaintrack_core::UserId;

/// Authenticated caller of a request.
///
/// Carries the user resolved by the auth middleware; present on every
/// protected route, absent on login/signup/health.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerContext {
    user: User,
}

impl CallerContext {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}
