//! Auth state container — app-owned, crate-provided transition logic.

use serde::Serialize;

use super::User;
use crate::resource::{
    AsyncResource, AsyncStatus, Generation, ResourceAction, ResourceState, Transition,
};
use crate::shared::ErrorMessage;

/// Actions understood by [`AuthSlice`].
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSucceeded {
        generation: Generation,
        user: User,
    },
    LoginFailed {
        generation: Generation,
        error: ErrorMessage,
    },
    Logout,
}

impl From<AuthAction> for ResourceAction<User> {
    fn from(action: AuthAction) -> Self {
        match action {
            AuthAction::LoginStarted => ResourceAction::Started,
            AuthAction::LoginSucceeded { generation, user } => ResourceAction::Succeeded {
                generation,
                payload: user,
            },
            AuthAction::LoginFailed { generation, error } => {
                ResourceAction::Failed { generation, error }
            }
            AuthAction::Logout => ResourceAction::Reset,
        }
    }
}

/// Snapshot of the auth slice handed to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthState {
    pub status: AsyncStatus,
    pub user: Option<User>,
    pub error: Option<ErrorMessage>,
    pub is_authenticated: bool,
}

/// Tracks the authenticated-user resource.
///
/// `is_authenticated` is stored, not settable: every transition recomputes it
/// from the resource before returning.
#[derive(Debug, Clone, Default)]
pub struct AuthSlice {
    user: AsyncResource<User>,
    is_authenticated: bool,
}

impl AuthSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: AuthAction) -> Transition {
        let transition = self.user.apply(action.into());
        self.sync();
        transition
    }

    /// A login or session check was issued. Clears any previous error.
    pub fn login_started(&mut self) -> Generation {
        let generation = self.user.start();
        self.sync();
        generation
    }

    pub fn login_succeeded(&mut self, generation: Generation, user: User) -> Transition {
        self.apply(AuthAction::LoginSucceeded { generation, user })
    }

    pub fn login_failed(&mut self, generation: Generation, error: ErrorMessage) -> Transition {
        self.apply(AuthAction::LoginFailed { generation, error })
    }

    /// Back to the initial unauthenticated state, whatever the current status.
    pub fn logout(&mut self) {
        self.user.reset();
        self.sync();
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn status(&self) -> AsyncStatus {
        self.user.status()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.data()
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.user.error()
    }

    pub fn resource(&self) -> &ResourceState<User> {
        self.user.state()
    }

    pub fn in_flight(&self) -> Option<Generation> {
        self.user.in_flight()
    }

    pub fn snapshot(&self) -> AuthState {
        let state = self.user.state();
        AuthState {
            status: state.status,
            user: state.data.clone(),
            error: state.error.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    fn sync(&mut self) {
        self.is_authenticated =
            self.user.status() == AsyncStatus::Succeeded && self.user.data().is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{ChainType, LinkedAccount, LinkedAccountType};
    use crate::shared::PubkeyStr;
    use chrono::{TimeZone, Utc};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            wallet_address: PubkeyStr::from("wallet1"),
            linked_account: LinkedAccount {
                id: "la1".to_string(),
                account_type: LinkedAccountType::Wallet,
                chain: Some(ChainType::Solana),
                address: "wallet1".to_string(),
            },
            embedded_wallet: None,
            x_username: None,
            x_display_name: None,
            expires_at: Utc.timestamp_opt(1_800_000_000, 0).unwrap(),
        }
    }

    fn assert_invariant(slice: &AuthSlice) {
        assert_eq!(
            slice.is_authenticated(),
            slice.status() == AsyncStatus::Succeeded && slice.user().is_some()
        );
        assert_eq!(slice.snapshot().is_authenticated, slice.is_authenticated());
    }

    fn logged_in(id: &str) -> AuthSlice {
        let mut slice = AuthSlice::new();
        let g = slice.login_started();
        slice.login_succeeded(g, user(id));
        slice
    }

    #[test]
    fn test_initial_state() {
        let slice = AuthSlice::new();
        let state = slice.snapshot();
        assert_eq!(state.status, AsyncStatus::Idle);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_login_fixture_scenario() {
        let mut slice = AuthSlice::new();

        let g1 = slice.login_started();
        assert_eq!(slice.status(), AsyncStatus::Loading);
        assert!(!slice.is_authenticated());

        slice.login_succeeded(g1, user("1"));
        let state = slice.snapshot();
        assert_eq!(state.status, AsyncStatus::Succeeded);
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().id, "1");

        let g2 = slice.login_started();
        slice.login_failed(g2, ErrorMessage::from("oops"));
        let state = slice.snapshot();
        assert_eq!(state.status, AsyncStatus::Failed);
        assert_eq!(state.error.unwrap().as_str(), "oops");
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_rejection_without_a_request_in_flight_is_dropped() {
        let mut slice = AuthSlice::new();
        let g = slice.login_started();
        slice.login_succeeded(g, user("1"));

        assert_eq!(
            slice.login_failed(g, ErrorMessage::from("oops")),
            Transition::Stale
        );
        let state = slice.snapshot();
        assert_eq!(state.status, AsyncStatus::Succeeded);
        assert!(state.error.is_none());
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_logout_from_every_state() {
        let idle = AuthSlice::new();

        let mut loading = AuthSlice::new();
        loading.login_started();

        let succeeded = logged_in("1");

        let mut failed = AuthSlice::new();
        let g = failed.login_started();
        failed.login_failed(g, ErrorMessage::from("bad signature"));

        let mut refreshing = logged_in("1");
        refreshing.login_started();

        for mut slice in [idle, loading, succeeded, failed, refreshing] {
            slice.logout();
            assert_eq!(slice.snapshot(), AuthSlice::new().snapshot());
            assert_invariant(&slice);
        }
    }

    #[test]
    fn test_logout_mid_login_drops_late_success() {
        let mut slice = AuthSlice::new();
        let g = slice.login_started();
        slice.logout();
        assert_eq!(slice.login_succeeded(g, user("1")), Transition::Stale);
        assert_eq!(slice.status(), AsyncStatus::Idle);
        assert!(!slice.is_authenticated());
    }

    #[test]
    fn test_retry_clears_error() {
        let mut slice = AuthSlice::new();
        let g = slice.login_started();
        slice.login_failed(g, ErrorMessage::from("oops"));
        slice.login_started();
        assert_eq!(slice.status(), AsyncStatus::Loading);
        assert!(slice.error().is_none());
    }

    #[test]
    fn test_invariant_holds_across_transitions() {
        let mut slice = AuthSlice::new();
        assert_invariant(&slice);

        let g1 = slice.login_started();
        assert_invariant(&slice);
        let g2 = slice.login_started();
        assert_invariant(&slice);
        slice.login_succeeded(g1, user("stale"));
        assert_invariant(&slice);
        slice.login_succeeded(g2, user("2"));
        assert_invariant(&slice);
        assert!(slice.is_authenticated());

        let g3 = slice.login_started();
        assert_invariant(&slice);
        assert_eq!(slice.user().unwrap().id, "2");
        slice.login_failed(g3, ErrorMessage::from("expired"));
        assert_invariant(&slice);
        assert_eq!(slice.user().unwrap().id, "2");

        slice.apply(AuthAction::Logout);
        assert_invariant(&slice);
    }

    #[test]
    fn test_superseded_login_stays_loading() {
        let mut slice = AuthSlice::new();
        let g1 = slice.login_started();
        let _g2 = slice.login_started();
        assert_eq!(slice.login_succeeded(g1, user("1")), Transition::Stale);
        assert_eq!(slice.status(), AsyncStatus::Loading);
        assert!(!slice.is_authenticated());
    }
}
