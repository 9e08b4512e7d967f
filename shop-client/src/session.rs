//! Session handling
//!
//! Explicit session object carrying the authenticated identity and role,
//! passed to the consoles instead of living in ambient global state. The
//! session is re-validated on a timer and whenever a call comes back
//! unauthorized.

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::{ApiResponse, LoginRequest, LoginResponse, UserInfo};
use shared::workflow::Actor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Signal raised whenever an API call comes back unauthorized
///
/// The HTTP client reports 401 responses here; the refresh loop listens and
/// re-validates the session immediately instead of waiting for the next
/// tick. A report while no loop is waiting is kept until consumed.
#[derive(Debug, Clone, Default)]
pub struct AuthWatch {
    notify: Arc<Notify>,
}

impl AuthWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an unauthorized response
    pub fn report_unauthorized(&self) {
        self.notify.notify_one();
    }

    /// Wait for the next unauthorized report
    pub async fn unauthorized(&self) {
        self.notify.notified().await;
    }
}

/// An authenticated session against the backend
#[derive(Debug, Clone)]
pub struct Session {
    user: UserInfo,
    token: String,
}

impl Session {
    /// Log in and install the bearer token on the client
    pub async fn login(
        http: &mut HttpClient,
        username: &str,
        password: &str,
    ) -> ClientResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: ApiResponse<LoginResponse> = http.post("/api/auth/login", &request).await?;
        let login = HttpClient::expect_data(response, "login")?;

        http.set_token(login.token.clone());
        debug!(user = %login.user.username, role = ?login.user.role, "logged in");

        Ok(Session {
            user: login.user,
            token: login.token,
        })
    }

    /// The authenticated user
    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    /// The bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }

    /// The workflow actor this session acts as
    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.user.id.clone(),
            role: self.user.role,
        }
    }

    /// Re-validate the session against the backend
    ///
    /// Refreshes the cached identity; an `Unauthorized` reply means the
    /// token expired and the session is no longer usable.
    pub async fn refresh(&mut self, http: &HttpClient) -> ClientResult<()> {
        let response: ApiResponse<UserInfo> = http.get("/api/auth/me").await?;
        self.user = HttpClient::expect_data(response, "user")?;
        Ok(())
    }

    /// Log out and clear the token
    pub async fn logout(self, http: &mut HttpClient) -> ClientResult<()> {
        let _: ApiResponse<()> = http.post_empty("/api/auth/logout").await?;
        http.clear_token();
        Ok(())
    }
}

/// Periodic session re-validation loop
///
/// Re-validates on the interval and immediately on any reported 401. Runs
/// until cancelled or until the backend declares the token invalid.
/// Callers spawn this next to their console and cancel it on shutdown.
pub async fn run_refresh_loop(
    session: Arc<RwLock<Session>>,
    http: HttpClient,
    interval: Duration,
    watch: AuthWatch,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    // First tick fires immediately; the session was just validated by login.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = ticker.tick() => {}
            _ = watch.unauthorized() => {
                debug!("unauthorized response reported, re-validating session");
            }
        }

        let result = session.write().await.refresh(&http).await;
        match result {
            Ok(()) => debug!("session refreshed"),
            Err(ClientError::Unauthorized) => {
                warn!("session token no longer valid, stopping refresh loop");
                return;
            }
            Err(err) if err.is_retryable() => {
                debug!(%err, "session refresh failed, will retry next tick");
            }
            Err(err) => {
                warn!(%err, "session refresh failed");
            }
        }
    }
}
