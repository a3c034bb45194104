use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnsPushDispatcherErrorKind {
    Misconfiguration,
    Payload,
}

#[derive(Debug)]
pub struct SnsPushDispatcherError {
    pub kind: SnsPushDispatcherErrorKind,
    pub cause: String,
    pub message: Option<String>,
}

impl SnsPushDispatcherError {
    pub fn misconfiguration(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: SnsPushDispatcherErrorKind::Misconfiguration,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn payload(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: SnsPushDispatcherErrorKind::Payload,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }
}

impl std::error::Error for SnsPushDispatcherError {}

impl fmt::Display for SnsPushDispatcherError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
