use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use anyhow::anyhow;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::config_model::AdminAuth;
use crate::domain::entities::admin_users::AdminUserEntity;
use crate::domain::repositories::admin_users::AdminUserRepository;
use crate::domain::value_objects::auth::{AdminClaims, AdminUserDto, LoginRequest, LoginResponse};

const MAX_FAILED_LOGINS: u32 = 5;
const LOCKOUT_WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Error)]
pub enum AuthenticationError {
    // One variant for bad username and bad password: callers must not be
    // able to enumerate admin usernames.
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("too many failed login attempts, try again later")]
    LockedOut,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthenticationError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthenticationError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthenticationError::LockedOut => StatusCode::TOO_MANY_REQUESTS,
            AuthenticationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

struct AttemptState {
    failures: u32,
    locked_until: Option<Instant>,
}

/// In-process failed-login tracker enforced on every login attempt. Counts
/// consecutive failures per username; reaching the limit locks the username
/// for the configured window. Single-process deployment, so no shared store.
pub struct LoginAttemptTracker {
    max_failures: u32,
    lockout: Duration,
    attempts: Mutex<HashMap<String, AttemptState>>,
}

impl LoginAttemptTracker {
    pub fn new(max_failures: u32, lockout: Duration) -> Self {
        Self {
            max_failures,
            lockout,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_locked(&self, username: &str) -> bool {
        let mut attempts = self.attempts.lock().unwrap_or_else(PoisonError::into_inner);

        match attempts.get(username).and_then(|state| state.locked_until) {
            Some(deadline) if Instant::now() < deadline => true,
            Some(_) => {
                attempts.remove(username);
                false
            }
            None => false,
        }
    }

    pub fn record_failure(&self, username: &str) {
        let mut attempts = self.attempts.lock().unwrap_or_else(PoisonError::into_inner);

        let state = attempts.entry(username.to_string()).or_insert(AttemptState {
            failures: 0,
            locked_until: None,
        });
        state.failures += 1;

        if state.failures >= self.max_failures {
            state.locked_until = Some(Instant::now() + self.lockout);
            state.failures = 0;
        }
    }

    pub fn clear(&self, username: &str) {
        let mut attempts = self.attempts.lock().unwrap_or_else(PoisonError::into_inner);
        attempts.remove(username);
    }
}

impl Default for LoginAttemptTracker {
    fn default() -> Self {
        Self::new(MAX_FAILED_LOGINS, LOCKOUT_WINDOW)
    }
}

pub struct AuthenticationUseCase<A>
where
    A: AdminUserRepository + Send + Sync + 'static,
{
    admin_user_repo: Arc<A>,
    jwt_secret: String,
    token_ttl_seconds: u64,
    login_attempts: LoginAttemptTracker,
}

impl<A> AuthenticationUseCase<A>
where
    A: AdminUserRepository + Send + Sync + 'static,
{
    pub fn new(admin_user_repo: Arc<A>, admin_auth: &AdminAuth) -> Self {
        Self {
            admin_user_repo,
            jwt_secret: admin_auth.jwt_secret.clone(),
            token_ttl_seconds: admin_auth.token_ttl_seconds,
            login_attempts: LoginAttemptTracker::default(),
        }
    }

    pub async fn login(
        &self,
        login_request: LoginRequest,
    ) -> Result<LoginResponse, AuthenticationError> {
        if self.login_attempts.is_locked(&login_request.username) {
            warn!(username = %login_request.username, "login: username is locked out");
            return Err(AuthenticationError::LockedOut);
        }

        let user = self
            .admin_user_repo
            .find_by_username(&login_request.username)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "login: failed to load admin user");
                AuthenticationError::Internal(err)
            })?;

        let Some(user) = user else {
            self.login_attempts.record_failure(&login_request.username);
            warn!(username = %login_request.username, "login: failed attempt");
            return Err(AuthenticationError::InvalidCredentials);
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|err| anyhow!("stored password hash is invalid: {err}"))?;

        if Argon2::default()
            .verify_password(login_request.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            self.login_attempts.record_failure(&login_request.username);
            warn!(username = %login_request.username, "login: failed attempt");
            return Err(AuthenticationError::InvalidCredentials);
        }

        self.login_attempts.clear(&login_request.username);

        let token = self.issue_token(&user)?;
        info!(username = %user.username, "login: admin authenticated");

        Ok(LoginResponse {
            token,
            user: AdminUserDto::from(user),
        })
    }

    fn issue_token(&self, user: &AdminUserEntity) -> Result<String, AuthenticationError> {
        let expires_at = Utc::now() + chrono::Duration::seconds(self.token_ttl_seconds as i64);

        let claims = AdminClaims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|err| AuthenticationError::Internal(anyhow!("failed to sign token: {err}")))
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash password: {err}"))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use crate::domain::repositories::admin_users::MockAdminUserRepository;

    const SECRET: &str = "supersecretjwtsecretforunittesting123";

    fn admin_entity(password: &str) -> AdminUserEntity {
        AdminUserEntity {
            id: 1,
            username: "admin".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    fn usecase_with_repo(
        repo: MockAdminUserRepository,
        tracker: LoginAttemptTracker,
    ) -> AuthenticationUseCase<MockAdminUserRepository> {
        AuthenticationUseCase {
            admin_user_repo: Arc::new(repo),
            jwt_secret: SECRET.to_string(),
            token_ttl_seconds: 3600,
            login_attempts: tracker,
        }
    }

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest {
            username: "admin".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_succeeds_and_issues_decodable_token() {
        let user = admin_entity("Sup3rSecret!");
        let mut repo = MockAdminUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let usecase = usecase_with_repo(repo, LoginAttemptTracker::default());
        let response = usecase.login(login_request("Sup3rSecret!")).await.unwrap();

        assert_eq!(response.user.username, "admin");

        let decoded = decode::<AdminClaims>(
            &response.token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::default(),
        )
        .expect("issued token must decode");
        assert_eq!(decoded.claims.sub, 1);
        assert_eq!(decoded.claims.role, "admin");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_fail_the_same_way() {
        let user = admin_entity("Sup3rSecret!");
        let mut repo = MockAdminUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let usecase = usecase_with_repo(repo, LoginAttemptTracker::default());
        let wrong_password = usecase.login(login_request("nope")).await.unwrap_err();

        let mut repo = MockAdminUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        let usecase = usecase_with_repo(repo, LoginAttemptTracker::default());
        let unknown_user = usecase.login(login_request("nope")).await.unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.status_code(), unknown_user.status_code());
    }

    #[tokio::test]
    async fn repeated_failures_lock_the_username() {
        let user = admin_entity("Sup3rSecret!");
        let mut repo = MockAdminUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let tracker = LoginAttemptTracker::new(2, Duration::from_secs(60));
        let usecase = usecase_with_repo(repo, tracker);

        for _ in 0..2 {
            let err = usecase.login(login_request("nope")).await.unwrap_err();
            assert!(matches!(err, AuthenticationError::InvalidCredentials));
        }

        // Correct password no longer helps while the lock holds.
        let err = usecase.login(login_request("Sup3rSecret!")).await.unwrap_err();
        assert!(matches!(err, AuthenticationError::LockedOut));
        assert_eq!(err.status_code(), axum::http::StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn lock_expires_after_the_window() {
        let user = admin_entity("Sup3rSecret!");
        let mut repo = MockAdminUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let tracker = LoginAttemptTracker::new(1, Duration::from_millis(20));
        let usecase = usecase_with_repo(repo, tracker);

        usecase.login(login_request("nope")).await.unwrap_err();
        assert!(matches!(
            usecase.login(login_request("Sup3rSecret!")).await.unwrap_err(),
            AuthenticationError::LockedOut
        ));

        std::thread::sleep(Duration::from_millis(40));

        assert!(usecase.login(login_request("Sup3rSecret!")).await.is_ok());
    }

    #[tokio::test]
    async fn successful_login_resets_the_failure_counter() {
        let user = admin_entity("Sup3rSecret!");
        let mut repo = MockAdminUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let tracker = LoginAttemptTracker::new(2, Duration::from_secs(60));
        let usecase = usecase_with_repo(repo, tracker);

        usecase.login(login_request("nope")).await.unwrap_err();
        usecase.login(login_request("Sup3rSecret!")).await.unwrap();
        usecase.login(login_request("nope")).await.unwrap_err();

        // Two non-consecutive failures must not lock the account.
        assert!(usecase.login(login_request("Sup3rSecret!")).await.is_ok());
    }
}
