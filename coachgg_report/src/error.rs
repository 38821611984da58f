use coachgg_data::SessionError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErrorKind {
    Config,
    IO,
    Session,
}

impl ReportErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            // Config
            "E1001" | "E1002" | "E1003" => Self::Config,

            // IO
            "E2001" | "E2002" => Self::IO,

            // Session
            "E3001" | "E3002" => Self::Session,

            _ => Self::IO,
        }
    }
}

#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct ReportError {
    pub code: &'static str,
    pub kind: ReportErrorKind,
    pub message: String,

    pub file: Option<String>,
    pub key: Option<String>,
}

impl ReportError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: ReportErrorKind::from_code(code),
            message: message.into(),
            file: None,
            key: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl From<SessionError> for ReportError {
    fn from(err: SessionError) -> Self {
        let code = match err {
            SessionError::Ended { .. } => "E3001",
            SessionError::UserMismatch { .. } => "E3002",
        };
        ReportError::new(code, err.to_string())
    }
}
