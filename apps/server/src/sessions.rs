//! Per-operator dashboard sessions.
//!
//! Each session owns its own caches, derived table, selection and
//! last-updated timestamp, so one operator's refresh never moves another
//! operator's timestamp. Sessions idle for longer than the TTL are swept on
//! the next access, and the registry never holds more than `max_sessions`;
//! when full, the least recently used session makes room.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::http::HeaderMap;
use dashmap::DashMap;
use pricedesk_core::DashboardSession;
use pricedesk_price_source::PriceSource;

use crate::error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION_ID: &str = "default";
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 1000;
const MAX_SESSION_ID_LEN: usize = 128;

struct SessionEntry {
    session: Arc<DashboardSession>,
    last_access: Instant,
}

pub struct SessionRegistry {
    source: Arc<dyn PriceSource>,
    sessions: DashMap<String, SessionEntry>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self::with_limits(source, DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_limits(
        source: Arc<dyn PriceSource>,
        idle_ttl: Duration,
        max_sessions: usize,
    ) -> Self {
        Self {
            source,
            sessions: DashMap::new(),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn get_or_create(&self, id: &str) -> Arc<DashboardSession> {
        self.get_or_create_at(id, Instant::now())
    }

    /// Looks a session up without creating it.
    pub fn get(&self, id: &str) -> Option<Arc<DashboardSession>> {
        self.get_at(id, Instant::now())
    }

    /// Discards a session and everything it cached.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!("Closed dashboard session '{}'", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn get_or_create_at(&self, id: &str, now: Instant) -> Arc<DashboardSession> {
        if let Some(session) = self.get_at(id, now) {
            return session;
        }

        if self.sessions.len() >= self.max_sessions {
            self.evict_least_recent();
        }
        self.sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                tracing::info!("Opening dashboard session '{}'", id);
                SessionEntry {
                    session: Arc::new(DashboardSession::new(self.source.clone())),
                    last_access: now,
                }
            })
            .session
            .clone()
    }

    fn get_at(&self, id: &str, now: Instant) -> Option<Arc<DashboardSession>> {
        self.evict_idle(now);
        let mut entry = self.sessions.get_mut(id)?;
        entry.last_access = now;
        Some(entry.session.clone())
    }

    fn evict_idle(&self, now: Instant) {
        self.sessions.retain(|id, entry| {
            let keep = now.saturating_duration_since(entry.last_access) < self.idle_ttl;
            if !keep {
                tracing::info!("Evicting idle dashboard session '{}'", id);
            }
            keep
        });
    }

    fn evict_least_recent(&self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.last_access)
            .map(|entry| entry.key().clone());
        if let Some(id) = oldest {
            tracing::info!("Session limit reached; evicting '{}'", id);
            self.sessions.remove(&id);
        }
    }
}

/// Reads the session id from the request headers, falling back to the
/// shared default session.
pub fn session_id(headers: &HeaderMap) -> Result<String, ApiError> {
    let Some(value) = headers.get(SESSION_HEADER) else {
        return Ok(DEFAULT_SESSION_ID.to_string());
    };
    let id = value
        .to_str()
        .map_err(|_| ApiError::BadRequest(format!("{} must be ASCII", SESSION_HEADER)))?
        .trim();
    if id.is_empty() {
        return Ok(DEFAULT_SESSION_ID.to_string());
    }
    if id.len() > MAX_SESSION_ID_LEN {
        return Err(ApiError::BadRequest(format!(
            "{} longer than {} characters",
            SESSION_HEADER, MAX_SESSION_ID_LEN
        )));
    }
    Ok(id.to_string())
}
