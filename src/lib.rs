//! Parser and validator for the `data:` URI scheme.
//!
//! This crate implements parsing, validation, and serialization of data URIs
//! as defined in RFC 2397, plus immutable update operations over the
//! parameter list and a small filesystem bridge.
//!
//! # Overview
//!
//! Data URIs embed content directly inside a URI. They have the structure:
//!
//! ```text
//! data:[<mimetype>][;<key>=<value>]*[;base64],<payload>
//! ```
//!
//! A missing MIME type defaults to `text/plain`; an entirely empty metadata
//! segment additionally defaults the parameters to `charset=us-ascii`. The
//! payload is kept in its encoded form and validated eagerly: percent-encoded
//! text, or base64 (checked after percent-decoding) when the `base64` flag
//! is set.
//!
//! # Quick Start
//!
//! ```rust
//! use data_uri::DataUri;
//!
//! // Parse a data URI
//! let uri = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();
//!
//! // Access components
//! assert_eq!(uri.mime_type().as_str(), "text/plain");
//! assert_eq!(uri.parameters().get("charset"), Some("us-ascii"));
//! assert!(!uri.is_binary_data());
//!
//! // Every update returns a new validated instance
//! let updated = uri.merge_parameters([("charset", "utf-8")]).unwrap();
//! assert_eq!(updated.parameters().to_string(), "charset=utf-8");
//! assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
//! ```
//!
//! # Construction Paths
//!
//! Three factories converge on the same validated invariants:
//!
//! - [`DataUri::parse`] — from a raw string.
//! - [`DataUri::from_components`] — from a generic parsed-URI component map;
//!   rejects anything carrying hierarchical fields, since a data URI is
//!   opaque.
//! - [`DataUri::from_path`] — from file content, with MIME classification
//!   injected through [`DetectMimeType`].
//!
//! # Immutability
//!
//! Instances never mutate in place. `merge_parameters`, `without_parameters`,
//! and `with_parameters` build new instances through the same validation the
//! factories use, so no operation can yield an instance with an invalid
//! payload, a misplaced `base64` token, or a silently flipped encoding.
//! Instances may be freely shared across threads for reads.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod components;
mod constants;
mod detect;
mod error;
mod mime_type;
mod parameters;
pub mod payload;
pub mod prelude;
mod uri;

pub use components::UriComponents;
pub use constants::{BASE64_TOKEN, BINARY_CHARSET, DEFAULT_MIME_TYPE, DEFAULT_PARAMETERS, SCHEME};
pub use detect::DetectMimeType;
pub use error::{
    FileError, MimeTypeError, ParameterError, ParseError, ParseErrorKind, PayloadError,
};
pub use mime_type::MimeType;
pub use parameters::Parameters;
pub use uri::DataUri;
