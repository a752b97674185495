//! Auth sub-client — login, session check, logout.

use crate::api::AuthApi;
use crate::client::DashboardClient;
use crate::domain::auth::wire::LoginRequest;
use crate::domain::auth::{AuthAction, User};
use crate::error::DashboardError;
use crate::resource::{Generation, Transition};
use crate::shared::ErrorMessage;

/// Sub-client for authentication operations.
pub struct Auth<'a, A> {
    pub(crate) client: &'a DashboardClient<A>,
}

impl<'a, A: AuthApi> Auth<'a, A> {
    /// Login with a pre-signed message.
    ///
    /// Moves the auth slice to `Loading`, calls the collaborator, and applies
    /// the outcome. If another login, a session check, or a logout happened in
    /// the meantime, the outcome is returned but not applied to the store.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, DashboardError> {
        let generation = self.start().await;
        let result = match self.client.api.login(request).await {
            Ok(resp) => User::try_from(resp).map_err(DashboardError::from),
            Err(e) => Err(e.into()),
        };
        self.complete(generation, result).await
    }

    /// Validate the current session and load the user profile.
    ///
    /// Goes through the same `Loading → Succeeded/Failed` cycle as a login.
    pub async fn check_session(&self) -> Result<User, DashboardError> {
        let generation = self.start().await;
        let result = match self.client.api.me().await {
            Ok(me) => User::try_from(me).map_err(DashboardError::from),
            Err(e) => Err(e.into()),
        };
        self.complete(generation, result).await
    }

    /// Logout — resets local state first, then tells the backend.
    ///
    /// The backend call is best-effort: a failure is logged and ignored, the
    /// user is logged out locally either way.
    pub async fn logout(&self) {
        self.client.store.dispatch(AuthAction::Logout).await;

        if let Err(e) = self.client.api.logout().await {
            tracing::warn!(error = %e, "Backend logout failed");
        }
    }

    async fn start(&self) -> Generation {
        let generation = self
            .client
            .store
            .update(|store| store.auth_mut().login_started())
            .await;
        tracing::debug!(generation = generation.value(), "Auth request started");
        generation
    }

    async fn complete(
        &self,
        generation: Generation,
        result: Result<User, DashboardError>,
    ) -> Result<User, DashboardError> {
        match result {
            Ok(user) => {
                let transition = self
                    .client
                    .store
                    .update(|store| store.auth_mut().login_succeeded(generation, user.clone()))
                    .await;
                log_completion(generation, transition);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(generation = generation.value(), error = %e, "Auth request failed");
                let message = ErrorMessage::from(&e);
                let transition = self
                    .client
                    .store
                    .update(|store| store.auth_mut().login_failed(generation, message))
                    .await;
                log_completion(generation, transition);
                Err(e)
            }
        }
    }
}

fn log_completion(generation: Generation, transition: Transition) {
    if transition == Transition::Stale {
        tracing::debug!(
            generation = generation.value(),
            "Auth result superseded; store left unchanged"
        );
    }
}
