//! Session and user-management slice.

use madrona_core::{User, UserInfo};

use super::lifecycle::Phase;

/// Session and user-management state.
#[derive(Debug, Clone, Default)]
pub struct UserState {
    /// The authenticated session, `None` when signed out.
    pub user_info: Option<UserInfo>,
    /// User record loaded for the profile or admin edit screens.
    pub user_details: Option<User>,
    /// All users, for the admin list screen.
    pub users: Vec<User>,
    /// A request is in flight.
    pub loading: bool,
    /// Message of the last failure, empty when none.
    pub error: String,
    /// One-shot flag set by login/register/profile-update and by the admin
    /// delete/update operations.
    pub success: bool,
}

/// Result of a fulfilled session or user-management operation.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// Authentication succeeded; replaces the session.
    LoggedIn(UserInfo),
    /// Registration succeeded; replaces the session.
    Registered(UserInfo),
    /// The profile was updated; replaces the session.
    ProfileUpdated(UserInfo),
    /// A user record was fetched.
    DetailsFetched(User),
    /// The user collection was listed; replaces it wholesale.
    Listed(Vec<User>),
    /// A user was deleted. The collection is refreshed by a follow-up
    /// list, not edited locally.
    Deleted,
    /// A user was updated; details are refreshed by a follow-up fetch.
    Updated,
}

impl UserState {
    /// Fold one lifecycle phase into the state.
    pub fn apply(&mut self, phase: Phase<UserEvent>) {
        match phase {
            Phase::Pending => {
                self.loading = true;
                self.error.clear();
            }
            Phase::Rejected(message) => {
                self.loading = false;
                self.error = message;
            }
            Phase::Fulfilled(event) => {
                self.loading = false;
                match event {
                    UserEvent::LoggedIn(info)
                    | UserEvent::Registered(info)
                    | UserEvent::ProfileUpdated(info) => {
                        self.user_info = Some(info);
                        self.success = true;
                    }
                    UserEvent::DetailsFetched(user) => self.user_details = Some(user),
                    UserEvent::Listed(users) => self.users = users,
                    UserEvent::Deleted | UserEvent::Updated => self.success = true,
                }
            }
        }
    }

    /// Clear the session. The order and user-list resets are cascaded by
    /// the store so a signed-out user's data cannot leak into the next
    /// session.
    pub fn logout(&mut self) {
        self.user_info = None;
        self.user_details = None;
        self.success = false;
    }

    /// Clear only the user collection.
    pub fn reset_users(&mut self) {
        self.users.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use madrona_core::{Email, UserId};

    fn info(id: &str) -> UserInfo {
        UserInfo {
            id: UserId::new(id),
            name: "Jo Smith".to_owned(),
            email: Email::parse("jo@example.com").expect("valid email"),
            is_admin: false,
            token: "token-abc".to_owned(),
        }
    }

    fn user(id: &str) -> User {
        User {
            id: UserId::new(id),
            name: "Jo Smith".to_owned(),
            email: Email::parse("jo@example.com").expect("valid email"),
            is_admin: false,
        }
    }

    #[test]
    fn test_login_replaces_session() {
        let mut state = UserState::default();
        state.apply(Phase::Pending);
        state.apply(Phase::Fulfilled(UserEvent::LoggedIn(info("u1"))));

        assert!(!state.loading);
        assert!(state.success);
        assert_eq!(
            state.user_info.as_ref().map(|u| u.id.as_str()),
            Some("u1")
        );
    }

    #[test]
    fn test_failed_login_leaves_session_untouched() {
        let mut state = UserState::default();
        state.apply(Phase::Fulfilled(UserEvent::LoggedIn(info("u1"))));

        state.apply(Phase::Pending);
        state.apply(Phase::Rejected("Invalid email or password".to_owned()));

        assert!(state.user_info.is_some());
        assert_eq!(state.error, "Invalid email or password");
        assert!(!state.loading);
    }

    #[test]
    fn test_logout_clears_session_and_details() {
        let mut state = UserState::default();
        state.apply(Phase::Fulfilled(UserEvent::LoggedIn(info("u1"))));
        state.apply(Phase::Fulfilled(UserEvent::DetailsFetched(user("u2"))));

        state.logout();

        assert!(state.user_info.is_none());
        assert!(state.user_details.is_none());
    }

    #[test]
    fn test_reset_users_clears_only_collection() {
        let mut state = UserState::default();
        state.apply(Phase::Fulfilled(UserEvent::LoggedIn(info("u1"))));
        state.apply(Phase::Fulfilled(UserEvent::Listed(vec![user("a"), user("b")])));

        state.reset_users();

        assert!(state.users.is_empty());
        assert!(state.user_info.is_some());
    }
}
