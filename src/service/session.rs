//! Session service.
//!
//! Each client works inside a session holding its custom handles, the last
//! generation result and the generation history. Sessions are addressed by a
//! bearer token (64 characters of URL-safe base64), live in memory only, and
//! are discarded after an idle timeout.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use rand::Rng;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::{CustomHandles, HistoryLog};
use crate::error::{AppError, Result};
use crate::service::generator::GenerationResult;

/// Token length in bytes before encoding (48 bytes = 64 base64 chars).
const TOKEN_BYTES: usize = 48;

/// Per-session state.
#[derive(Debug)]
pub struct Session {
    /// Session token.
    token: String,
    /// When the session was created.
    created_at: DateTime<Utc>,
    /// Last time the session was used.
    last_seen: Instant,
    /// Handles added by the user.
    pub custom_handles: CustomHandles,
    /// Most recent generation, used by result views and exports.
    pub last_result: Option<Arc<GenerationResult>>,
    /// Generation history.
    pub history: HistoryLog,
}

impl Session {
    fn new(token: String, max_custom_handles: usize, max_history: usize) -> Self {
        Self {
            token,
            created_at: Utc::now(),
            last_seen: Instant::now(),
            custom_handles: CustomHandles::with_limit(max_custom_handles),
            last_result: None,
            history: HistoryLog::with_limit(max_history),
        }
    }

    /// Session token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The last generation result.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing has been generated in this session yet.
    pub fn require_result(&self) -> Result<&GenerationResult> {
        self.last_result
            .as_deref()
            .ok_or_else(|| AppError::NotFound("no generated VPAs in this session".to_string()))
    }

    fn is_idle(&self, timeout: Duration) -> bool {
        self.last_seen.elapsed() > timeout
    }
}

/// Shared handle to a session.
pub type SharedSession = Arc<Mutex<Session>>;

/// Session service.
pub struct SessionService {
    /// Idle time after which a session is discarded.
    idle_timeout: Duration,
    /// Maximum number of live sessions.
    max_sessions: usize,
    /// Custom handles allowed per session.
    max_custom_handles: usize,
    /// History records kept per session.
    max_history: usize,
    /// Sessions indexed by token.
    sessions: RwLock<HashMap<String, SharedSession>>,
}

impl SessionService {
    /// Create a new session service.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            idle_timeout: Duration::from_secs(config.idle_timeout),
            max_sessions: config.max_sessions,
            max_custom_handles: config.max_custom_handles,
            max_history: config.max_history,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session service with an explicit timeout and capacity.
    ///
    /// Per-session limits keep their defaults.
    #[must_use]
    pub fn with_limits(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            idle_timeout,
            max_sessions,
            ..Self::new(&SessionConfig::default())
        }
    }

    /// Idle timeout.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Create a new session and return its token.
    ///
    /// # Errors
    ///
    /// Returns `RateLimited` if the store is full after purging idle sessions.
    pub fn create(&self) -> Result<String> {
        self.cleanup();

        let token = generate_token();
        {
            let mut sessions = self.sessions.write();
            if sessions.len() >= self.max_sessions {
                return Err(AppError::RateLimited);
            }
            sessions.insert(
                token.clone(),
                Arc::new(Mutex::new(Session::new(
                    token.clone(),
                    self.max_custom_handles,
                    self.max_history,
                ))),
            );
        }

        self.report_active();
        debug!("Session created");
        Ok(token)
    }

    /// Look up a session and mark it as used.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for an unknown token and `SessionExpired` for an
    /// idle one (which is removed).
    pub fn get(&self, token: &str) -> Result<SharedSession> {
        let session = self
            .sessions
            .read()
            .get(token)
            .cloned()
            .ok_or(AppError::Unauthorized)?;

        let expired = {
            let mut guard = session.lock();
            if guard.is_idle(self.idle_timeout) {
                true
            } else {
                guard.last_seen = Instant::now();
                false
            }
        };

        if expired {
            self.end(token);
            return Err(AppError::SessionExpired);
        }

        Ok(session)
    }

    /// End a session.
    ///
    /// Returns `true` if the session existed.
    pub fn end(&self, token: &str) -> bool {
        let removed = self.sessions.write().remove(token).is_some();
        if removed {
            self.report_active();
            debug!("Session ended");
        }
        removed
    }

    /// Remove idle sessions. Returns the number removed.
    pub fn cleanup(&self) -> usize {
        let removed = {
            let mut sessions = self.sessions.write();
            let before = sessions.len();
            sessions.retain(|_, session| !session.lock().is_idle(self.idle_timeout));
            before - sessions.len()
        };

        if removed > 0 {
            self.report_active();
            debug!(removed, "Idle sessions purged");
        }
        removed
    }

    /// Number of live sessions.
    #[must_use]
    pub fn active(&self) -> usize {
        self.sessions.read().len()
    }

    #[allow(clippy::cast_precision_loss)]
    fn report_active(&self) {
        metrics::gauge!("vpagen_sessions_active").set(self.active() as f64);
    }
}

/// Generate a random 64-character URL-safe base64 token string.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let mut bytes = [0u8; TOKEN_BYTES];
    rng.fill(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> SessionService {
        SessionService::with_limits(Duration::from_secs(3600), 4)
    }

    #[test]
    fn test_token_length() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
    }

    #[test]
    fn test_create_and_get() {
        let service = create_test_service();
        let token = service.create().unwrap();

        let session = service.get(&token).unwrap();
        assert_eq!(session.lock().token(), token);
        assert_eq!(service.active(), 1);
    }

    #[test]
    fn test_unknown_token() {
        let service = create_test_service();
        assert!(matches!(service.get("nope"), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let service = create_test_service();
        let a = service.create().unwrap();
        let b = service.create().unwrap();
        assert_ne!(a, b);

        service
            .get(&a)
            .unwrap()
            .lock()
            .custom_handles
            .add("mybank1")
            .unwrap();

        assert_eq!(service.get(&a).unwrap().lock().custom_handles.len(), 1);
        assert!(service.get(&b).unwrap().lock().custom_handles.is_empty());
    }

    #[test]
    fn test_end_session() {
        let service = create_test_service();
        let token = service.create().unwrap();

        assert!(service.end(&token));
        assert!(!service.end(&token));
        assert!(matches!(service.get(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_capacity_limit() {
        let service = create_test_service();
        for _ in 0..4 {
            service.create().unwrap();
        }
        assert!(matches!(service.create(), Err(AppError::RateLimited)));
    }

    #[test]
    fn test_idle_session_expires() {
        let service = SessionService::with_limits(Duration::from_millis(10), 4);
        let token = service.create().unwrap();

        std::thread::sleep(Duration::from_millis(30));

        assert!(matches!(service.get(&token), Err(AppError::SessionExpired)));
        assert_eq!(service.active(), 0);
    }

    #[test]
    fn test_cleanup_purges_idle() {
        let service = SessionService::with_limits(Duration::from_millis(10), 4);
        service.create().unwrap();
        service.create().unwrap();

        std::thread::sleep(Duration::from_millis(30));

        assert_eq!(service.cleanup(), 2);
        assert_eq!(service.active(), 0);
    }

    #[test]
    fn test_sessions_apply_configured_limits() {
        let service = SessionService::new(&SessionConfig {
            max_custom_handles: 1,
            max_history: 2,
            ..SessionConfig::default()
        });
        let token = service.create().unwrap();
        let session = service.get(&token).unwrap();
        let mut session = session.lock();

        session.custom_handles.add("mybank1").unwrap();
        assert!(matches!(
            session.custom_handles.add("mybank2"),
            Err(AppError::BadRequest(_))
        ));

        for _ in 0..3 {
            session
                .history
                .append(crate::domain::GenerationRecord::now(1, 1, 1));
        }
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn test_require_result_without_generation() {
        let session = Session::new("t".to_string(), 1, 1);
        assert!(matches!(session.require_result(), Err(AppError::NotFound(_))));
    }
}
