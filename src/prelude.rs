//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use data_uri::prelude::*;
//!
//! let uri = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();
//! ```

pub use crate::{
    // Core types
    DataUri, DetectMimeType, MimeType, Parameters, UriComponents,
    // Errors
    FileError, MimeTypeError, ParameterError, ParseError, ParseErrorKind, PayloadError,
    // Constants
    BASE64_TOKEN, BINARY_CHARSET, DEFAULT_MIME_TYPE, DEFAULT_PARAMETERS, SCHEME,
};
