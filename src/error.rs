//! Error types for data URI parsing.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur when parsing or updating a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Missing or invalid scheme (expected "data:")
    InvalidScheme {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// MIME type parsing failed
    InvalidMimeType(MimeTypeError),
    /// Parameter segment parsing failed
    InvalidParameters(ParameterError),
    /// Payload failed base64 or percent-encoding validation
    MalformedPayload(PayloadError),
    /// Component map carries a hierarchical field a data URI cannot have
    NotOpaque {
        /// Name of the offending component
        component: &'static str,
    },
    /// Parameter update attempted to flip the base64 flag
    Base64FlagChanged {
        /// Whether the existing payload is base64-encoded
        binary: bool,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse data URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidScheme { found } => match found {
                Some(s) => write!(f, "expected scheme 'data:', found '{s}'"),
                None => write!(f, "missing scheme; URI must start with 'data:'"),
            },
            ParseErrorKind::InvalidMimeType(e) => write!(f, "invalid MIME type: {e}"),
            ParseErrorKind::InvalidParameters(e) => write!(f, "invalid parameters: {e}"),
            ParseErrorKind::MalformedPayload(e) => write!(f, "malformed payload: {e}"),
            ParseErrorKind::NotOpaque { component } => {
                write!(f, "data URIs are opaque; unexpected component: {component}")
            }
            ParseErrorKind::Base64FlagChanged { binary } => {
                if *binary {
                    write!(f, "payload is base64-encoded; the base64 token cannot be dropped")
                } else {
                    write!(f, "payload is not base64-encoded; the base64 token cannot be added")
                }
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for MIME type parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeTypeError {
    /// Missing '/' separator between type and subtype
    MissingSlash,
    /// Type part before '/' is empty
    EmptyType,
    /// Subtype part after '/' is empty
    EmptySubtype,
    /// Character outside the RFC token grammar
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for MimeTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSlash => write!(f, "expected 'type/subtype', missing '/'"),
            Self::EmptyType => write!(f, "type cannot be empty"),
            Self::EmptySubtype => write!(f, "subtype cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid token character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for MimeTypeError {}

/// Errors for parameter segment parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Segment is neither a `key=value` pair nor the `base64` token
    InvalidSegment {
        /// The offending segment
        segment: String,
    },
    /// Segment has an empty key before '='
    EmptyKey {
        /// The offending segment
        segment: String,
    },
    /// Non-flag parameter carries an empty value
    EmptyValue {
        /// The parameter key
        key: String,
    },
    /// The reserved `base64` key used as an ordinary parameter
    ReservedKey {
        /// The reserved key
        key: String,
    },
    /// The `base64` token appeared before other parameters
    Base64NotLast,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSegment { segment } => {
                write!(f, "segment '{segment}' is not 'key=value' or 'base64'")
            }
            Self::EmptyKey { segment } => {
                write!(f, "segment '{segment}' has an empty key")
            }
            Self::EmptyValue { key } => {
                write!(f, "parameter '{key}' cannot have an empty value")
            }
            Self::ReservedKey { key } => {
                write!(f, "'{key}' is a reserved flag and cannot carry a value")
            }
            Self::Base64NotLast => {
                write!(f, "the base64 token must be the last parameter segment")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Errors for payload validation and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// '%' not followed by two hex digits
    InvalidPercentEncoding {
        /// Byte offset of the '%'
        position: usize,
    },
    /// Character outside the set allowed in a data URI payload
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Payload is not valid base64
    InvalidBase64 {
        /// Reason reported by the decoder
        reason: String,
    },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPercentEncoding { position } => {
                write!(f, "invalid percent escape at position {position}")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::InvalidBase64 { reason } => write!(f, "invalid base64: {reason}"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// Errors for the filesystem bridge (`DataUri::from_path` and `DataUri::save`).
#[derive(Debug)]
pub enum FileError {
    /// Source path does not denote a readable regular file
    NotAFile {
        /// The rejected path
        path: PathBuf,
    },
    /// Reading the source file failed
    Read {
        /// The source path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Writing the destination file failed
    Write {
        /// The destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The injected detector produced a string that is not a MIME type
    DetectedMime {
        /// The source path
        path: PathBuf,
        /// The grammar error
        source: MimeTypeError,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFile { path } => {
                write!(f, "'{}' is not a readable regular file", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write '{}': {source}", path.display())
            }
            Self::DetectedMime { path, source } => {
                write!(f, "detected MIME type for '{}' is invalid: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::DetectedMime { source, .. } => Some(source),
            Self::NotAFile { .. } => None,
        }
    }
}
