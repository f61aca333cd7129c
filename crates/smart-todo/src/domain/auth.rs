//! Auth domain facade.

use crate::api::{ApiClient, AuthResponse, Credentials, NewUser, ProfileUpdate};
use crate::domain::SessionStore;
use crate::entities::{Session, User};
use crate::errors::ClientResult;

/// High-level auth operations over the API client and the session file.
pub struct AuthDomain {
    api: ApiClient,
    store: SessionStore,
}

impl AuthDomain {
    /// Create a new auth domain.
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// The stored session, if any.
    pub async fn current(&self) -> ClientResult<Option<Session>> {
        self.store.load().await
    }

    /// Exchange credentials for a session and persist it.
    pub async fn login(&self, email: String, password: String) -> ClientResult<Session> {
        let AuthResponse { token, user } =
            self.api.login(&Credentials { email, password }).await?;

        let session = Session { token, user };
        self.store.save(&session).await?;
        Ok(session)
    }

    /// Clear the stored session. No server call.
    pub async fn logout(&self) -> ClientResult<()> {
        self.store.clear().await
    }

    /// Create an account. Does not log in.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> ClientResult<User> {
        self.api
            .register(&NewUser {
                name,
                email,
                password,
            })
            .await
    }

    /// Fetch the profile of the authenticated user.
    pub async fn profile(&self) -> ClientResult<User> {
        self.api.profile().await
    }

    /// Push profile changes to the server.
    pub async fn update_profile(&self, name: String, email: String) -> ClientResult<User> {
        self.api.update_profile(&ProfileUpdate { name, email }).await
    }
}
