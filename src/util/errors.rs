use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorCode {
    InvalidArgument,
    Internal,
    Unsupported,
    Network,
    ObjectNotFound,
    InvalidSession,
}

impl ParseErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorCode::InvalidArgument => "parse/invalid-argument",
            ParseErrorCode::Internal => "parse/internal",
            ParseErrorCode::Unsupported => "parse/unsupported",
            ParseErrorCode::Network => "parse/network",
            ParseErrorCode::ObjectNotFound => "parse/object-not-found",
            ParseErrorCode::InvalidSession => "parse/invalid-session",
        }
    }
}

/// Error surfaced by the SDK layer and by the collaborators it delegates to.
///
/// Wrapped operations hand these back exactly as they received them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ParseErrorCode,
    message: String,
}

impl ParseError {
    pub fn new(code: ParseErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub fn invalid_argument(message: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorCode::InvalidArgument, message)
}

pub fn internal_error(message: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorCode::Internal, message)
}

pub fn unsupported(message: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorCode::Unsupported, message)
}

pub fn network_error(message: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorCode::Network, message)
}

pub fn object_not_found(message: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorCode::ObjectNotFound, message)
}

pub fn invalid_session(message: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorCode::InvalidSession, message)
}
