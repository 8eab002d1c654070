//! Main data URI type.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;

use crate::components::UriComponents;
use crate::constants::{BASE64_TOKEN, BINARY_CHARSET, DEFAULT_MIME_TYPE, DEFAULT_PARAMETERS, SCHEME};
use crate::detect::DetectMimeType;
use crate::error::{FileError, ParameterError, ParseError, ParseErrorKind};
use crate::mime_type::MimeType;
use crate::parameters::Parameters;
use crate::payload;

/// A parsed and validated RFC 2397 data URI.
///
/// Data URIs embed content directly inside a URI:
///
/// ```text
/// data:[<mimetype>][;<key>=<value>]*[;base64],<payload>
/// ```
///
/// The payload is kept in its encoded form: percent-encoded text, or base64
/// text when [`is_binary_data`](Self::is_binary_data) is true. Instances are
/// immutable; every update method returns a new, fully re-validated
/// instance.
///
/// # Examples
///
/// ```
/// use data_uri::DataUri;
///
/// let uri = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();
/// assert_eq!(uri.mime_type().as_str(), "text/plain");
/// assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
/// assert_eq!(uri.data(), "Bonjour%20le%20monde%21");
/// assert!(!uri.is_binary_data());
///
/// // Missing metadata falls back to the RFC defaults
/// let uri = DataUri::parse("data:,Bonjour%20le%20monde%21").unwrap();
/// assert_eq!(uri.mime_type().as_str(), "text/plain");
/// assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime_type: MimeType,
    parameters: Parameters,
    data: String,
    /// Normalized string representation
    normalized: String,
}

impl DataUri {
    /// Parses a data URI from a string.
    ///
    /// An empty input is accepted and treated as
    /// `data:text/plain;charset=us-ascii,`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is non-empty and does not start with `data:`
    /// - The MIME type segment fails the token grammar
    /// - The parameter segment is malformed
    /// - The payload fails percent-encoding or base64 validation
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Constructs a data URI from a generic parsed-URI component map.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with kind `NotOpaque` if the scheme is not
    /// `data` or any hierarchical field (user, pass, host, port, query,
    /// fragment) is populated; otherwise the `path` field is parsed exactly
    /// as in [`parse`](Self::parse).
    pub fn from_components(components: &UriComponents) -> Result<Self, ParseError> {
        Self::from_components_inner(components).map_err(|kind| ParseError {
            input: components.path.clone().unwrap_or_default(),
            kind,
        })
    }

    /// Reads a file and encodes its content as a data URI.
    ///
    /// The MIME type is classified by the injected `detector`. Content
    /// detected as `text/*` is percent-encoded with `charset=us-ascii` and
    /// no flag; everything else is base64-encoded with `charset=binary`
    /// plus the `base64` flag.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the path is not a readable regular file, the
    /// read fails, or the detector produces a string that is not a valid
    /// MIME type.
    pub fn from_path<D>(path: impl AsRef<Path>, detector: &D) -> Result<Self, FileError>
    where
        D: DetectMimeType + ?Sized,
    {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FileError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let detected = detector.detect(&bytes);
        let mime_type = MimeType::parse(&detected).map_err(|source| FileError::DetectedMime {
            path: path.to_path_buf(),
            source,
        })?;

        let (parameters, data) = if mime_type.is_text() {
            (Self::text_parameters(), payload::percent_encode(&bytes))
        } else {
            (Self::binary_parameters(), payload::base64_encode(&bytes))
        };

        // The payload was just produced by the crate's own encoders, so the
        // eager validation in `assemble` cannot fail.
        Ok(Self::build(mime_type, parameters, data))
    }

    /// Returns the URI scheme, always `data`.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        SCHEME
    }

    /// Returns the MIME type.
    #[must_use]
    pub const fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    /// Returns the parameter list (including the `base64` flag state).
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the payload in its encoded form.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns true if the payload is base64-encoded.
    #[must_use]
    pub const fn is_binary_data(&self) -> bool {
        self.parameters.is_base64()
    }

    /// Returns true. A data URI carries no authority, query, or fragment;
    /// it is scheme plus a single opaque payload string.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        true
    }

    /// Returns the opaque path: `mimetype[;parameters][;base64],payload`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.normalized[SCHEME.len() + 1..]
    }

    /// Returns the normalized URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the generic component breakdown: scheme `data`, the opaque
    /// path, and every hierarchical field `None`.
    #[must_use]
    pub fn to_components(&self) -> UriComponents {
        UriComponents::opaque(self.path().to_string())
    }

    /// Compares two URIs on their normalized string forms.
    ///
    /// Two different-looking spellings of the same logical URI compare
    /// equal if they normalize identically; raw input text is never
    /// compared.
    #[must_use]
    pub fn same_value_as(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }

    /// Parses `other` and compares it against this URI.
    ///
    /// # Errors
    ///
    /// A malformed argument propagates its `ParseError` rather than
    /// comparing unequal.
    pub fn same_value_as_str(&self, other: &str) -> Result<bool, ParseError> {
        Ok(self.same_value_as(&Self::parse(other)?))
    }

    /// Returns a new URI with the given parameters inserted or overwritten.
    ///
    /// The `base64` flag is never touched.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a merged key is the reserved `base64` token,
    /// or a merged key or value is empty or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_uri::DataUri;
    ///
    /// let uri = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();
    /// let updated = uri.merge_parameters([("charset", "utf-8")]).unwrap();
    /// assert_eq!(updated.parameters().to_string(), "charset=utf-8");
    /// ```
    pub fn merge_parameters<'a, I>(&self, other: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let parameters = self
            .parameters
            .merge(other)
            .map_err(|e| ParseError {
                input: self.normalized.clone(),
                kind: ParseErrorKind::InvalidParameters(e),
            })?;
        Self::assemble(self.mime_type.clone(), parameters, self.data.clone()).map_err(|kind| {
            ParseError {
                input: self.normalized.clone(),
                kind,
            }
        })
    }

    /// Returns a new URI with each named parameter key removed if present.
    ///
    /// Removing an absent key is not an error, and the `base64` flag is not
    /// addressable here; removal cannot invalidate the payload, so this
    /// operation is infallible.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_uri::DataUri;
    ///
    /// let uri = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();
    /// let updated = uri.without_parameters(&["charset"]);
    /// assert_eq!(updated.parameters().to_string(), "");
    /// ```
    #[must_use]
    pub fn without_parameters(&self, keys: &[&str]) -> Self {
        let parameters = self.parameters.without_keys(keys);
        Self::build(self.mime_type.clone(), parameters, self.data.clone())
    }

    /// Returns a new URI with the entire parameter set replaced by the
    /// parsed `segment`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the segment is malformed, introduces a
    /// non-flag parameter with an empty value, or changes the presence of
    /// the `base64` token: the encoding of the payload is fixed at
    /// construction, and flipping the flag without re-encoding would
    /// corrupt it.
    pub fn with_parameters(&self, segment: &str) -> Result<Self, ParseError> {
        self.with_parameters_inner(segment).map_err(|kind| ParseError {
            input: segment.to_string(),
            kind,
        })
    }

    /// Decodes the payload to raw bytes, per the `base64` flag.
    ///
    /// The payload was validated eagerly at construction, so decoding a
    /// held instance always succeeds.
    #[must_use]
    pub fn decode(&self) -> Vec<u8> {
        let bytes: Vec<u8> = percent_decode_str(&self.data).collect();
        if self.is_binary_data() {
            STANDARD.decode(&bytes).unwrap_or_default()
        } else {
            bytes
        }
    }

    /// Decodes the payload and writes it to `destination`, creating or
    /// truncating the file, and returns the open handle.
    ///
    /// Concurrent writers to the same path race at the filesystem level;
    /// last writer wins, with no atomicity guarantee beyond the underlying
    /// write.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Write` on any I/O error.
    pub fn save(&self, destination: impl AsRef<Path>) -> Result<fs::File, FileError> {
        let destination = destination.as_ref();
        let write_err = |source| FileError::Write {
            path: destination.to_path_buf(),
            source,
        };

        let mut file = fs::File::create(destination).map_err(write_err)?;
        file.write_all(&self.decode()).map_err(write_err)?;
        Ok(file)
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Self::parse_path_part("");
        }

        let Some(rest) = input.strip_prefix("data:") else {
            let found = input.split_once(':').map(|(scheme, _)| scheme.to_string());
            return Err(ParseErrorKind::InvalidScheme { found });
        };

        Self::parse_path_part(rest)
    }

    fn from_components_inner(components: &UriComponents) -> Result<Self, ParseErrorKind> {
        if components.scheme.as_deref() != Some(SCHEME) {
            return Err(ParseErrorKind::NotOpaque { component: "scheme" });
        }
        if let Some(component) = components.hierarchical_component() {
            return Err(ParseErrorKind::NotOpaque { component });
        }
        Self::parse_path_part(components.path.as_deref().unwrap_or(""))
    }

    /// Shared metadata/payload split used by every factory.
    fn parse_path_part(path: &str) -> Result<Self, ParseErrorKind> {
        let (metadata, data) = match path.split_once(',') {
            Some((metadata, data)) => (metadata, data),
            None => (path, ""),
        };

        let (mime_str, param_str) = if metadata.is_empty() {
            (DEFAULT_MIME_TYPE, DEFAULT_PARAMETERS)
        } else {
            match metadata.split_once(';') {
                Some((mime, params)) => {
                    let mime = if mime.is_empty() { DEFAULT_MIME_TYPE } else { mime };
                    (mime, params)
                }
                None => (metadata, ""),
            }
        };

        let mime_type = MimeType::parse(mime_str).map_err(ParseErrorKind::InvalidMimeType)?;
        let parameters = Parameters::parse(param_str).map_err(ParseErrorKind::InvalidParameters)?;

        Self::assemble(mime_type, parameters, data.to_string())
    }

    fn with_parameters_inner(&self, segment: &str) -> Result<Self, ParseErrorKind> {
        let parameters = Parameters::parse(segment).map_err(ParseErrorKind::InvalidParameters)?;

        // Newly supplied parameters never get the empty-value tolerance that
        // values inherited from parsing do.
        if let Some(key) = parameters.empty_value_key() {
            return Err(ParseErrorKind::InvalidParameters(ParameterError::EmptyValue {
                key: key.to_string(),
            }));
        }

        if parameters.is_base64() != self.is_binary_data() {
            return Err(ParseErrorKind::Base64FlagChanged {
                binary: self.is_binary_data(),
            });
        }

        Self::assemble(self.mime_type.clone(), parameters, self.data.clone())
    }

    /// The single validated constructor every factory and update routes
    /// through: checks the payload against the flag, then normalizes.
    fn assemble(
        mime_type: MimeType,
        parameters: Parameters,
        data: String,
    ) -> Result<Self, ParseErrorKind> {
        if parameters.is_base64() {
            let bytes =
                payload::decode_percent(&data).map_err(ParseErrorKind::MalformedPayload)?;
            payload::validate_base64(&bytes).map_err(ParseErrorKind::MalformedPayload)?;
        } else {
            payload::validate_percent_encoded(&data)
                .map_err(ParseErrorKind::MalformedPayload)?;
        }

        Ok(Self::build(mime_type, parameters, data))
    }

    fn build(mime_type: MimeType, parameters: Parameters, data: String) -> Self {
        let normalized = if parameters.is_empty() {
            format!("{SCHEME}:{mime_type},{data}")
        } else {
            format!("{SCHEME}:{mime_type};{parameters},{data}")
        };

        Self {
            mime_type,
            parameters,
            data,
            normalized,
        }
    }

    // Both segments are constants that always parse.
    fn text_parameters() -> Parameters {
        Parameters::parse(DEFAULT_PARAMETERS).unwrap_or_default()
    }

    fn binary_parameters() -> Parameters {
        let segment = format!("charset={BINARY_CHARSET};{BASE64_TOKEN}");
        Parameters::parse(&segment).unwrap_or_default()
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for DataUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DataUri {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for DataUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for DataUri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DataUri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DataUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21";

    #[test]
    fn parse_simple_string() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        assert_eq!(uri.scheme(), "data");
        assert_eq!(uri.mime_type().as_str(), "text/plain");
        assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
        assert_eq!(uri.data(), "Bonjour%20le%20monde%21");
        assert!(!uri.is_binary_data());
    }

    #[test]
    fn parse_empty_input_yields_defaults() {
        let uri = DataUri::parse("").unwrap();
        assert_eq!(uri.mime_type().as_str(), "text/plain");
        assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
        assert_eq!(uri.data(), "");
        assert_eq!(uri.as_str(), "data:text/plain;charset=us-ascii,");
    }

    #[test]
    fn parse_missing_mimetype_defaults() {
        let uri = DataUri::parse("data:,Bonjour%20le%20monde%21").unwrap();
        assert_eq!(uri.mime_type().as_str(), "text/plain");
        assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
        assert_eq!(uri.data(), "Bonjour%20le%20monde%21");
    }

    #[test]
    fn parse_without_parameters() {
        let uri = DataUri::parse("data:text/plain,Bonjour%20le%20monde%21").unwrap();
        assert_eq!(uri.parameters().to_string(), "");
        assert_eq!(uri.path(), "text/plain,Bonjour%20le%20monde%21");
    }

    #[test]
    fn parse_without_comma_yields_empty_payload() {
        let uri = DataUri::parse("data:text/plain;charset=us-ascii").unwrap();
        assert_eq!(uri.data(), "");
    }

    #[test]
    fn parse_binary() {
        let uri = DataUri::parse("data:image/gif;charset=binary;base64,R0lGODlh").unwrap();
        assert_eq!(uri.mime_type().as_str(), "image/gif");
        assert_eq!(uri.parameters().to_string(), "charset=binary;base64");
        assert!(uri.is_binary_data());
    }

    #[test]
    fn parse_wrong_scheme_fails() {
        let result = DataUri::parse("foo:bar");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidScheme { found: Some(found) },
                ..
            }) if found == "foo"
        ));
    }

    #[test]
    fn parse_no_scheme_fails() {
        let result = DataUri::parse("text/plain,hello");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidScheme { .. },
                ..
            })
        ));
    }

    #[test]
    fn parse_invalid_mimetype_fails() {
        let result = DataUri::parse("data:image_png;base64,zzz=");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidMimeType(_),
                ..
            })
        ));
    }

    #[test]
    fn parse_invalid_base64_payload_fails() {
        let result = DataUri::parse("data:image/png;base64,°28");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::MalformedPayload(_),
                ..
            })
        ));
    }

    #[test]
    fn parse_invalid_percent_payload_fails() {
        let result = DataUri::parse("data:text/plain,hello%2");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::MalformedPayload(_),
                ..
            })
        ));
    }

    #[test]
    fn parse_percent_escaped_base64_payload() {
        // Base64 payloads may carry percent escapes; validation decodes first.
        let encoded = crate::payload::percent_encode(b"aGVsbG8=");
        let uri = DataUri::parse(&format!("data:image/gif;base64,{encoded}")).unwrap();
        assert_eq!(uri.decode(), b"hello");
    }

    #[test]
    fn is_opaque_always_true() {
        assert!(DataUri::parse("").unwrap().is_opaque());
    }

    #[test]
    fn to_components_shape() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let components = uri.to_components();
        assert_eq!(components.scheme.as_deref(), Some("data"));
        assert_eq!(
            components.path.as_deref(),
            Some("text/plain;charset=us-ascii,Bonjour%20le%20monde%21")
        );
        assert_eq!(components.host, None);
        assert_eq!(components.query, None);
        assert_eq!(components.fragment, None);
    }

    #[test]
    fn from_components_roundtrip() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let rebuilt = DataUri::from_components(&uri.to_components()).unwrap();
        assert!(uri.same_value_as(&rebuilt));
    }

    #[test]
    fn from_components_rejects_host() {
        let components = UriComponents {
            scheme: Some("data".to_string()),
            host: Some("www.example.com".to_string()),
            path: Some("text/plain,hi".to_string()),
            ..UriComponents::default()
        };
        let result = DataUri::from_components(&components);
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::NotOpaque { component: "host" },
                ..
            })
        ));
    }

    #[test]
    fn from_components_rejects_wrong_scheme() {
        let components = UriComponents {
            scheme: Some("http".to_string()),
            path: Some("text/plain,hi".to_string()),
            ..UriComponents::default()
        };
        let result = DataUri::from_components(&components);
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::NotOpaque { component: "scheme" },
                ..
            })
        ));
    }

    #[test]
    fn merge_parameters_overwrites() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let updated = uri.merge_parameters([("charset", "utf-8")]).unwrap();
        assert_eq!(updated.parameters().to_string(), "charset=utf-8");
        // original untouched
        assert_eq!(uri.parameters().to_string(), "charset=us-ascii");
    }

    #[test]
    fn merge_parameters_rejects_base64_key() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.merge_parameters([("base64", "1")]);
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidParameters(_),
                ..
            })
        ));
    }

    #[test]
    fn merge_parameters_rejects_value_with_comma() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.merge_parameters([("charset", "a,b")]);
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidParameters(ParameterError::InvalidSegment { .. }),
                ..
            })
        ));
    }

    #[test]
    fn merged_uri_reparses_to_same_accessors() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let merged = uri.merge_parameters([("charset", "utf-8")]).unwrap();
        let reparsed = DataUri::parse(merged.as_str()).unwrap();
        assert_eq!(reparsed.data(), merged.data());
        assert_eq!(
            reparsed.parameters().to_string(),
            merged.parameters().to_string()
        );
        assert_eq!(reparsed.mime_type(), merged.mime_type());
    }

    #[test]
    fn without_parameters_removes() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let updated = uri.without_parameters(&["charset"]);
        assert_eq!(updated.parameters().to_string(), "");
        assert_eq!(updated.as_str(), "data:text/plain,Bonjour%20le%20monde%21");
    }

    #[test]
    fn without_parameters_keeps_flag() {
        let uri = DataUri::parse("data:image/gif;charset=binary;base64,R0lGODlh").unwrap();
        let updated = uri.without_parameters(&["charset"]);
        assert!(updated.is_binary_data());
        assert_eq!(updated.as_str(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn with_parameters_replaces_set() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let updated = uri.with_parameters("charset=us-ascii").unwrap();
        assert!(updated.same_value_as(&uri));
    }

    #[test]
    fn with_parameters_rejects_base64_value() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.with_parameters("base64=3");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidParameters(_),
                ..
            })
        ));
    }

    #[test]
    fn with_parameters_rejects_bare_segment() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.with_parameters("image/jpg");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidParameters(_),
                ..
            })
        ));
    }

    #[test]
    fn with_parameters_rejects_value_with_comma() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.with_parameters("charset=a,b");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidParameters(ParameterError::InvalidSegment { .. }),
                ..
            })
        ));
    }

    #[test]
    fn with_parameters_rejects_empty_value() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.with_parameters("charset=");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidParameters(
                    crate::error::ParameterError::EmptyValue { .. }
                ),
                ..
            })
        ));
    }

    #[test]
    fn with_parameters_rejects_flag_flip_on_text() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        let result = uri.with_parameters("charset=us-ascii;base64");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Base64FlagChanged { binary: false },
                ..
            })
        ));
    }

    #[test]
    fn with_parameters_rejects_flag_drop_on_binary() {
        let uri = DataUri::parse("data:image/gif;charset=binary;base64,R0lGODlh").unwrap();
        let result = uri.with_parameters("charset=binary");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Base64FlagChanged { binary: true },
                ..
            })
        ));
    }

    #[test]
    fn same_value_as_str_parses_first() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        assert!(uri.same_value_as_str(SIMPLE).unwrap());
        assert!(!uri.same_value_as_str("data:text/plain,other").unwrap());
    }

    #[test]
    fn same_value_as_str_propagates_parse_error() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        assert!(uri.same_value_as_str("data:image/png;base64,°28").is_err());
    }

    #[test]
    fn decode_text_payload() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        assert_eq!(uri.decode(), b"Bonjour le monde!");
    }

    #[test]
    fn decode_binary_payload() {
        let encoded = crate::payload::base64_encode(b"\x00\x01\xff");
        let uri = DataUri::parse(&format!("data:application/octet-stream;base64,{encoded}"))
            .unwrap();
        assert_eq!(uri.decode(), b"\x00\x01\xff");
    }

    #[test]
    fn display_roundtrip() {
        let uri = DataUri::parse(SIMPLE).unwrap();
        assert_eq!(uri.to_string(), SIMPLE);
    }
}
