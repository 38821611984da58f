use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session for {user_name} already ended")]
    Ended { user_name: String },

    #[error("session belongs to {session_user}, not {requested_user}")]
    UserMismatch {
        session_user: String,
        requested_user: String,
    },
}

/// Signed-in state owned by the caller. Created with `begin`, torn down with `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_name: String,
    #[serde(default, skip_serializing)]
    access_token: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    ended_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn begin(
        user_name: impl Into<String>,
        access_token: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            access_token,
            started_at: now,
            ended_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn access_token(&self) -> Option<&str> {
        if self.is_active() {
            self.access_token.as_deref()
        } else {
            None
        }
    }

    /// Clears the token. Ending twice is reported rather than ignored.
    pub fn end(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if !self.is_active() {
            return Err(SessionError::Ended {
                user_name: self.user_name.clone(),
            });
        }
        self.access_token = None;
        self.ended_at = Some(now);
        Ok(())
    }

    pub fn ensure_user(&self, username: &str) -> Result<(), SessionError> {
        if !self.is_active() {
            return Err(SessionError::Ended {
                user_name: self.user_name.clone(),
            });
        }
        if self.user_name != username {
            return Err(SessionError::UserMismatch {
                session_user: self.user_name.clone(),
                requested_user: username.to_string(),
            });
        }
        Ok(())
    }
}
