use crate::serialization::SerializationError;

/// Invalid-argument failures: library serialization errors and caller validation
/// errors share this one handler surface.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl Error {
    /// Fails with [`Error::InvalidArgument`] when `condition` does not hold.
    /// `reason` is only evaluated on failure.
    pub fn require(condition: bool, reason: impl FnOnce() -> String) -> Result<(), Error> {
        if condition {
            Ok(())
        } else {
            Err(Error::InvalidArgument { reason: reason() })
        }
    }

    pub fn as_serialization(&self) -> Option<&SerializationError> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::InvalidArgument { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.into())
    }
}
