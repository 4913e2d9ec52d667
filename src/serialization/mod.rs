pub mod messages;
mod serde_impl;

use std::fmt;
use std::sync::Arc;

/// Underlying error wrapped by a [`SerializationError`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Tag distinguishing the generic failure from its two field-level specializations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Generic,
    MissingField,
    UnknownField,
}

impl ErrorKind {
    fn fallback_display(self) -> &'static str {
        match self {
            Self::Generic => "serialization error",
            Self::MissingField => "missing field",
            Self::UnknownField => "unknown field",
        }
    }
}

/// Failure raised while encoding or decoding structured data against a schema.
///
/// Every instance carries an optional message and an optional cause. Only the
/// [`ErrorKind::Generic`] kind is constructible outside this crate; the
/// missing-field and unknown-field kinds are produced by decoders and are
/// observed through this same type.
#[derive(Debug, Clone)]
pub struct SerializationError {
    kind: ErrorKind,
    message: Option<String>,
    cause: Option<Cause>,
}

impl SerializationError {
    pub fn new() -> Self {
        Self::of_kind(ErrorKind::Generic, None, None)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Generic, Some(message.into()), None)
    }

    pub fn with_message_and_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::of_kind(
            ErrorKind::Generic,
            Some(message.into()),
            Some(Arc::new(cause)),
        )
    }

    /// Wraps `cause` without a message of its own. `Display` falls back to the
    /// cause's text while [`message`](Self::message) stays `None`.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::of_kind(ErrorKind::Generic, None, Some(Arc::new(cause)))
    }

    pub(crate) fn of_kind(kind: ErrorKind, message: Option<String>, cause: Option<Cause>) -> Self {
        Self {
            kind,
            message,
            cause,
        }
    }

    pub(crate) fn missing_field_from_message(
        message: impl Into<String>,
        cause: Option<Cause>,
    ) -> Self {
        Self::of_kind(ErrorKind::MissingField, Some(message.into()), cause)
    }

    pub(crate) fn missing_field_named(field: &str) -> Self {
        Self::missing_field_from_message(messages::missing_field(field), None)
    }

    /// `fields` must be non-empty; an empty slice still yields a plural message.
    pub(crate) fn missing_fields_in<S: AsRef<str>>(fields: &[S], serial_name: &str) -> Self {
        Self::missing_field_from_message(messages::missing_fields(fields, serial_name), None)
    }

    pub(crate) fn unknown_field_from_message(
        message: impl Into<String>,
        cause: Option<Cause>,
    ) -> Self {
        Self::of_kind(ErrorKind::UnknownField, Some(message.into()), cause)
    }

    pub(crate) fn unknown_field_at(index: usize) -> Self {
        Self::unknown_field_from_message(messages::unknown_field(index), None)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is_missing_field(&self) -> bool {
        self.kind == ErrorKind::MissingField
    }

    pub fn is_unknown_field(&self) -> bool {
        self.kind == ErrorKind::UnknownField
    }

    /// Rebuilds an equivalent error from kind, message and cause alone.
    ///
    /// Used when an error has to be re-raised on the other side of a thread or
    /// task boundary. Field names and indices are never needed: the message is
    /// already formatted and is carried over unchanged.
    pub fn recover(&self) -> Self {
        Self::of_kind(self.kind, self.message.clone(), self.cause.clone())
    }
}

impl Default for SerializationError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.cause) {
            (Some(message), _) => f.write_str(message),
            (None, Some(cause)) => write!(f, "{cause}"),
            (None, None) => f.write_str(self.kind.fallback_display()),
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message_and_cause(format!("json error: {err}"), err)
    }
}
