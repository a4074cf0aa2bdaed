use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by FlatGeobuf reading, writing and index search.
///
/// Precondition violations (empty tree, node size below 2, malformed
/// arguments that indicate a caller bug) panic instead of returning a
/// variant of this enum.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The first eight bytes of the stream are not a FlatGeobuf magic
    /// number.
    #[error("invalid magic number")]
    InvalidMagic,

    /// The file's major version is outside the supported range.
    #[error("unsupported FlatGeobuf major version {0}")]
    UnsupportedVersion(u8),

    /// The header length prefix is below the FlatBuffers minimum or above
    /// the sanity ceiling.
    #[error("header size {0} out of bounds")]
    HeaderSize(u32),

    /// The header declares more features than fit the platform's index
    /// range.
    #[error("header feature count {0} overflows usize")]
    FeatureCountOverflow(u64),

    /// An index node size of 1 is forbidden by the format.
    #[error("index node size may not be 1")]
    NodeSizeOne,

    /// Structurally invalid file contents.
    #[error("malformed file: {0}")]
    Format(&'static str),

    /// A feature length prefix smaller than the FlatBuffers offset word.
    #[error("feature {index}: length prefix {len} too small")]
    FeaturePrefix { index: usize, len: u32 },

    /// Table verification or any other schema-level access failed.
    #[error("schema: {0}")]
    Schema(String),

    /// An index operation was requested but the file carries no index.
    #[error("no index")]
    NoIndex,

    /// A property record referenced a column index absent from the schema.
    #[error("column index {index} not in schema ({count} columns)")]
    UnknownColumn { index: u16, count: usize },

    /// A string, binary or property payload length does not fit the
    /// platform or the wire type.
    #[error("property length {0} out of range")]
    PropertyLength(u64),

    /// The operation is not permitted in the reader's or writer's current
    /// state.
    #[error("operation not allowed: {0}")]
    State(&'static str),

    /// The reader or writer has been closed.
    #[error("closed")]
    Closed,

    /// Index and header disagree about feature count or node size.
    #[error("index does not match header: {0}")]
    IndexMismatch(String),

    /// Node count or index byte size exceeds platform integer limits.
    #[error("{0} overflows the platform's integer range")]
    Overflow(&'static str),

    /// An error from the underlying stream, with the section or feature
    /// being processed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: Arc<io::Error>,
    },

    /// Fewer features were written than the header declared.
    #[error("truncated file: wrote {written} of {declared} header-declared features")]
    Truncated { written: usize, declared: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Error {
        Error::Io {
            context: context.into(),
            source: Arc::new(source),
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Error {
        Error::io("i/o error", source)
    }
}

impl From<flatbuffers::InvalidFlatbuffer> for Error {
    fn from(source: flatbuffers::InvalidFlatbuffer) -> Error {
        Error::Schema(source.to_string())
    }
}

/// Maps an `io::Error` into [`Error::Io`] with a section or feature
/// context, for use with `map_err`.
pub(crate) fn err_io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Error {
    move |source| Error::io(context, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn io_error_keeps_context() {
        let err = Error::io(
            "failed to read index nodes 3..7",
            io::Error::new(ErrorKind::UnexpectedEof, "early eof"),
        );
        assert_eq!(
            err.to_string(),
            "failed to read index nodes 3..7: early eof"
        );
    }

    #[test]
    fn errors_are_cloneable() {
        let err: Error = io::Error::new(ErrorKind::Other, "boom").into();
        let dup = err.clone();
        assert_eq!(err.to_string(), dup.to_string());
    }

    #[test]
    fn state_error_display() {
        assert_eq!(
            Error::State("must call header()").to_string(),
            "operation not allowed: must call header()"
        );
        assert_eq!(Error::NoIndex.to_string(), "no index");
        assert_eq!(Error::Closed.to_string(), "closed");
    }
}
