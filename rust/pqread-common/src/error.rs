use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Fewer bytes remain in the input than a decode step requires.
    pub fn truncated(element: impl Into<String>, requested: usize, remaining: usize) -> Error {
        Error(
            ErrorKind::TruncatedInput {
                element: element.into(),
                requested,
                remaining,
            }
            .into(),
        )
    }

    pub fn unsupported_encoding(encoding: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedEncoding {
                encoding: encoding.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_type(physical_type: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedType {
                physical_type: physical_type.into(),
            }
            .into(),
        )
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` for errors caused by running out of input bytes.
    ///
    /// Callers decoding the tail of a page may treat this as end-of-page.
    pub fn is_truncated(&self) -> bool {
        matches!(self.kind(), ErrorKind::TruncatedInput { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("truncated {element}: {requested} bytes requested, {remaining} remaining")]
    TruncatedInput {
        element: String,
        requested: usize,
        remaining: usize,
    },

    #[error("unsupported encoding {encoding}")]
    UnsupportedEncoding { encoding: String },

    #[error("unsupported physical type {physical_type}")]
    UnsupportedType { physical_type: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid encoded data for '{element}': {message}")]
    InvalidFormat { element: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
