/// Error types for mesh loading, pipeline setup and output
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A face referenced a vertex that has not been defined (yet).
    /// `index` is the 1-based reference exactly as written in the file.
    #[error(
        "invalid face reference on line {line}: vertex index {index} is outside 1..={vertex_count}"
    )]
    InvalidFaceReference {
        line: usize,
        index: String,
        vertex_count: usize,
    },

    #[error("malformed {kind} on line {line}: {content:?}")]
    MalformedLine {
        line: usize,
        kind: &'static str,
        content: String,
    },

    #[error("invalid projection: {0}")]
    InvalidProjection(String),

    #[error("light direction must be a nonzero finite vector")]
    InvalidLightDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_reference_message() {
        let err = Error::InvalidFaceReference {
            line: 7,
            index: "0".to_string(),
            vertex_count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid face reference"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("1..=3"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
