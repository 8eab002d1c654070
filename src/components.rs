//! Generic parsed-URI component breakdown.

use crate::constants::SCHEME;

/// The generic component map exchanged with the rest of a URI toolkit.
///
/// Every field a hierarchical URI could carry is present so that any parsed
/// URI can be represented; a data URI populates only `scheme` and `path` and
/// leaves every other field `None`.
///
/// # Examples
///
/// ```
/// use data_uri::{DataUri, UriComponents};
///
/// let components = UriComponents {
///     scheme: Some("data".to_string()),
///     path: Some("text/plain;charset=us-ascii,Hello".to_string()),
///     ..UriComponents::default()
/// };
/// let uri = DataUri::from_components(&components).unwrap();
/// assert_eq!(uri.data(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriComponents {
    /// URI scheme
    pub scheme: Option<String>,
    /// User-info user part
    pub user: Option<String>,
    /// User-info password part
    pub pass: Option<String>,
    /// Authority host
    pub host: Option<String>,
    /// Authority port
    pub port: Option<u16>,
    /// Path (for a data URI: the full `mimetype;parameters,payload` string)
    pub path: Option<String>,
    /// Query string
    pub query: Option<String>,
    /// Fragment
    pub fragment: Option<String>,
}

impl UriComponents {
    /// Creates a component map for an opaque data URI with the given path.
    #[must_use]
    pub fn opaque(path: String) -> Self {
        Self {
            scheme: Some(SCHEME.to_string()),
            path: Some(path),
            ..Self::default()
        }
    }

    /// Returns the name of the first hierarchical field that is populated,
    /// if any. A data URI must have none.
    #[must_use]
    pub fn hierarchical_component(&self) -> Option<&'static str> {
        if self.user.is_some() {
            Some("user")
        } else if self.pass.is_some() {
            Some("pass")
        } else if self.host.is_some() {
            Some("host")
        } else if self.port.is_some() {
            Some("port")
        } else if self.query.is_some() {
            Some("query")
        } else if self.fragment.is_some() {
            Some("fragment")
        } else {
            None
        }
    }
}
