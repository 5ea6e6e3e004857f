//! Session state, decoupled from the routing system.
//!
//! Single owner of the JWT: set on login, restored on boot, cleared on
//! logout or on the first unauthorized response. The router watches the
//! authentication signal and handles every redirect.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::api::{ApiError, PatioApi};
use patio_shared::LoginRequest;
use patio_shared::config::API_BASE_URL;

const STORAGE_TOKEN_KEY: &str = "patio_jwt_token";

/// Session state shared through context.
#[derive(Clone, Default)]
pub struct AuthState {
    /// REST client bound to the session token (present iff authenticated).
    pub api: Option<PatioApi>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Read/write signal pair over [`AuthState`], provided at the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// Signal injected into the router service for guard decisions.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Restores a persisted token so a page reload keeps the operator logged
/// in. The token's validity is only known at the first backend call.
pub fn init_auth(ctx: &AuthContext) {
    let token: Option<String> = LocalStorage::get(STORAGE_TOKEN_KEY).ok();
    ctx.set_state.update(|state| {
        state.is_loading = false;
        if let Some(token) = token {
            state.api = Some(PatioApi::new(API_BASE_URL.to_string(), token));
            state.is_authenticated = true;
        }
    });
}

/// Exchanges credentials for a token, persists it and publishes the
/// session. Navigation is left to the router's auth-change effect.
pub async fn login(ctx: &AuthContext, email: String, senha: String) -> Result<(), ApiError> {
    let req = LoginRequest { email, senha };
    let res = PatioApi::login(API_BASE_URL, &req).await?;

    if LocalStorage::set(STORAGE_TOKEN_KEY, &res.token).is_err() {
        // Storage indisponível (modo privado estrito): a sessão vale só em memória.
        web_sys::console::warn_1(&"[Auth] LocalStorage indisponível; sessão não persistida.".into());
    }

    ctx.set_state.update(|state| {
        state.api = Some(PatioApi::new(API_BASE_URL.to_string(), res.token));
        state.is_authenticated = true;
    });
    Ok(())
}

/// Clears storage and state; the router redirects to the login page.
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api = None;
        state.is_authenticated = false;
    });
}

/// Localizes an API error for display. An unauthorized response also
/// expires the session, so the guard redirect fires on the next render.
pub fn map_api_error(ctx: &AuthContext, err: ApiError) -> String {
    if err == ApiError::Unauthorized {
        logout(ctx);
    }
    err.mensagem()
}
