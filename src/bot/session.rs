//! Per-user conversation state with inactivity expiry.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::types::InstrumentClass;

/// Where a user is in the menu flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    ChoosingType,
    ChoosingIndex,
    /// Waiting for the user to type a stock symbol.
    ChoosingStock,
    ChoosingExpiry,
    ShowChain,
}

/// One user's in-progress selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub state: ConversationState,
    pub instrument_class: Option<InstrumentClass>,
    pub symbol: Option<String>,
    last_active: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: ConversationState::ChoosingType,
            instrument_class: None,
            symbol: None,
            last_active: now,
        }
    }

    /// Last time the user interacted with this session.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.last_active > ttl
    }
}

/// Sessions keyed by Telegram user id.
///
/// Owned by the bot; created on `/start`, cleared on restart or `/cancel`,
/// and dropped once idle for longer than the TTL.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: HashMap<i64, Session>,
    ttl: TimeDelta,
}

impl SessionStore {
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Replace any existing session of `user` with a fresh one.
    pub fn start(&mut self, user: i64, now: DateTime<Utc>) -> &mut Session {
        self.sessions
            .entry(user)
            .insert_entry(Session::new(now))
            .into_mut()
    }

    /// The live session of `user`, refreshed to `now`.
    ///
    /// An expired session is removed and reported as absent.
    pub fn get_mut(&mut self, user: i64, now: DateTime<Utc>) -> Option<&mut Session> {
        let expired = self.sessions.get(&user)?.is_expired(now, self.ttl);
        if expired {
            self.sessions.remove(&user);
            return None;
        }
        let session = self.sessions.get_mut(&user)?;
        session.last_active = now;
        Some(session)
    }

    /// The live session of `user`, or a fresh one.
    pub fn get_or_start(&mut self, user: i64, now: DateTime<Utc>) -> &mut Session {
        // Drops an expired session and refreshes a live one.
        let _ = self.get_mut(user, now);
        self.sessions
            .entry(user)
            .or_insert_with(|| Session::new(now))
    }

    /// Forget `user`'s session.
    pub fn clear(&mut self, user: i64) {
        self.sessions.remove(&user);
    }

    /// Drop every expired session; returns how many were dropped.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let ttl = self.ttl;
        self.sessions.retain(|_, s| !s.is_expired(now, ttl));
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
