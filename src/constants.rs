//! Constants for data URI validation.

/// The URI scheme.
pub const SCHEME: &str = "data";

/// MIME type substituted when the metadata segment omits one.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Parameter list substituted when the metadata segment is entirely empty.
pub const DEFAULT_PARAMETERS: &str = "charset=us-ascii";

/// The reserved flag token marking a base64-encoded payload.
pub const BASE64_TOKEN: &str = "base64";

/// Charset value paired with the base64 flag by the path factory.
pub const BINARY_CHARSET: &str = "binary";
