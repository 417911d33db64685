use std::sync::RwLock;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{ClientError, WireError};
use crate::session::SessionState;
use crate::store::TokenStore;
use crate::types::{MeResponse, Pet, PetPayload, Session, SignupRequest, User};

/// API client holding the current session.
///
/// All operations attach `Authorization: Bearer <token>` when a token is
/// held. Construct, then call [`PawhavenClient::restore_session`] once at
/// startup to rehydrate a persisted session.
pub struct PawhavenClient<S: TokenStore> {
    http: reqwest::Client,
    base_url: String,
    store: S,
    token: RwLock<Option<String>>,
    session: RwLock<SessionState>,
}

impl<S: TokenStore> PawhavenClient<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
            token: RwLock::new(None),
            session: RwLock::new(SessionState::Anonymous),
        }
    }

    /// Current session state snapshot.
    pub fn session_state(&self) -> SessionState {
        self.session.read().unwrap().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    fn enter_session(&self, session: &Session) -> Result<(), ClientError> {
        self.store
            .save(&session.token)
            .map_err(|e| ClientError::Server(format!("persist token: {e}")))?;
        *self.token.write().unwrap() = Some(session.token.clone());
        *self.session.write().unwrap() = SessionState::Authenticated(session.user.clone());
        Ok(())
    }

    fn drop_session(&self) {
        let _ = self.store.clear();
        *self.token.write().unwrap() = None;
        *self.session.write().unwrap() = SessionState::Anonymous;
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        match response.json::<WireError>().await {
            Ok(wire) => Err(ClientError::from_wire(wire)),
            Err(_) => Err(ClientError::Server(format!("http status {status}"))),
        }
    }

    async fn send_no_body(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match response.json::<WireError>().await {
            Ok(wire) => Err(ClientError::from_wire(wire)),
            Err(_) => Err(ClientError::Server(format!("http status {status}"))),
        }
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    /// Rehydrate a persisted session, if any.
    ///
    /// With no stored token this settles on `Anonymous` immediately. With a
    /// stored token the state is `Loading` while `/api/auth/me` resolves; a
    /// 401 discards the stale token and settles on `Anonymous`. On a network
    /// failure the state stays `Loading` and the error is returned — callers
    /// decide whether to retry, never shown fake auth state.
    pub async fn restore_session(&self) -> Result<SessionState, ClientError> {
        let stored = self
            .store
            .load()
            .map_err(|e| ClientError::Server(format!("load token: {e}")))?;
        let Some(token) = stored else {
            *self.session.write().unwrap() = SessionState::Anonymous;
            return Ok(SessionState::Anonymous);
        };

        *self.token.write().unwrap() = Some(token);
        *self.session.write().unwrap() = SessionState::Loading;

        match self
            .send::<MeResponse>(self.http.get(self.url("/api/auth/me")))
            .await
        {
            Ok(me) => {
                let state = SessionState::Authenticated(me.user);
                *self.session.write().unwrap() = state.clone();
                Ok(state)
            }
            Err(ClientError::Unauthenticated) => {
                self.drop_session();
                Ok(SessionState::Anonymous)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ClientError> {
        let session: Session = self
            .send(self.http.post(self.url("/api/auth/signup")).json(request))
            .await?;
        self.enter_session(&session)?;
        Ok(session.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let session: Session = self
            .send(self.http.post(self.url("/api/auth/login")).json(&body))
            .await?;
        self.enter_session(&session)?;
        Ok(session.user)
    }

    /// Discard the session. Purely client-side — the token stays valid until
    /// expiry, there is no server-side revocation.
    pub fn logout(&self) {
        self.drop_session();
    }

    pub async fn current_user(&self) -> Result<User, ClientError> {
        let me: MeResponse = self
            .send(self.http.get(self.url("/api/auth/me")))
            .await?;
        Ok(me.user)
    }

    // ── Pets ─────────────────────────────────────────────────────────────────

    pub async fn list_pets(&self, owner: Option<Uuid>) -> Result<Vec<Pet>, ClientError> {
        let mut request = self.http.get(self.url("/api/pets"));
        if let Some(owner) = owner {
            request = request.query(&[("owner", owner.to_string())]);
        }
        self.send(request).await
    }

    pub async fn get_pet(&self, id: Uuid) -> Result<Pet, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/pets/{id}"))))
            .await
    }

    pub async fn create_pet(&self, payload: &PetPayload) -> Result<Pet, ClientError> {
        self.send(self.http.post(self.url("/api/pets")).json(payload))
            .await
    }

    pub async fn update_pet(&self, id: Uuid, payload: &PetPayload) -> Result<Pet, ClientError> {
        self.send(
            self.http
                .put(self.url(&format!("/api/pets/{id}")))
                .json(payload),
        )
        .await
    }

    pub async fn delete_pet(&self, id: Uuid) -> Result<(), ClientError> {
        self.send_no_body(self.http.delete(self.url(&format!("/api/pets/{id}"))))
            .await
    }
}
