use crate::error::{Error, Result};
use crate::models::{Role, User};

/// Where a signed-in user lands. Returned as a value so the decision
/// stays decoupled from any storage or navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    AdminDashboard,
    OperatorDashboard,
    Home,
}

pub fn route_for_role(role: Role) -> RouteTarget {
    match role {
        Role::Admin => RouteTarget::AdminDashboard,
        Role::Operator => RouteTarget::OperatorDashboard,
        Role::Customer => RouteTarget::Home,
    }
}

// Read-only in-memory user list, the demo stand-in for a user store
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        UserDirectory { users }
    }

    // One combined error on any miss, so the message never reveals
    // whether the email or the password was wrong
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User> {
        match self.users.iter().find(|u| u.email == email) {
            Some(user) if user.verify_password(password) => {
                tracing::debug!(user_id = user.id, "sign-in ok");
                Ok(user)
            }
            _ => Err(Error::InvalidCredentials),
        }
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<(User, RouteTarget)> {
        let user = self.authenticate(email, password)?;
        Ok((user.clone(), route_for_role(user.role)))
    }
}
