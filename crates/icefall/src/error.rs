use thiserror::Error;

/// A specialized result type for icefall operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by icefall operations.
#[derive(PartialEq, Error, Debug, Clone)]
pub enum Error {
    /// A geometry operation failed.
    #[error("geometry")]
    Geometry(String),
    /// An invalid input, such as a malformed path expression.
    #[error("invalid")]
    Invalid(String),
    /// A node id that does not refer to a node in this tree.
    #[error("unknown node")]
    UnknownNode(String),
}

impl From<icefall_geom::Error> for Error {
    fn from(e: icefall_geom::Error) -> Self {
        Error::Geometry(e.to_string())
    }
}
