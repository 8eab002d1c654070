//! MIME type component of a data URI.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::DEFAULT_MIME_TYPE;
use crate::error::MimeTypeError;

/// A validated `type/subtype` MIME token pair.
///
/// Both parts must match the RFC 2045 token grammar: printable ASCII with no
/// whitespace, control characters, or tspecials.
///
/// # Examples
///
/// ```
/// use data_uri::MimeType;
///
/// let mime = MimeType::parse("image/png").unwrap();
/// assert_eq!(mime.main_type(), "image");
/// assert_eq!(mime.subtype(), "png");
/// assert_eq!(MimeType::default().as_str(), "text/plain");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType {
    repr: String,
    slash: usize,
}

impl MimeType {
    /// Parses a MIME type from a `type/subtype` string.
    ///
    /// # Errors
    ///
    /// Returns `MimeTypeError` if the separator is missing, either part is
    /// empty, or either part contains a non-token character.
    pub fn parse(input: &str) -> Result<Self, MimeTypeError> {
        let slash = input.find('/').ok_or(MimeTypeError::MissingSlash)?;
        if slash == 0 {
            return Err(MimeTypeError::EmptyType);
        }
        if slash == input.len() - 1 {
            return Err(MimeTypeError::EmptySubtype);
        }

        for (i, c) in input.char_indices() {
            if i == slash {
                continue;
            }
            if !Self::is_token_char(c) {
                return Err(MimeTypeError::InvalidChar { char: c, position: i });
            }
        }

        Ok(Self {
            repr: input.to_string(),
            slash,
        })
    }

    /// Returns the type part (before the slash).
    #[must_use]
    pub fn main_type(&self) -> &str {
        &self.repr[..self.slash]
    }

    /// Returns the subtype part (after the slash).
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.repr[self.slash + 1..]
    }

    /// Returns the full `type/subtype` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Returns true if the type part is `text`.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.main_type() == "text"
    }

    /// Returns true if the character is valid inside an RFC 2045 token.
    #[must_use]
    pub const fn is_token_char(c: char) -> bool {
        c.is_ascii_graphic()
            && !matches!(
                c,
                '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']'
                    | '?' | '='
            )
    }
}

impl Default for MimeType {
    fn default() -> Self {
        Self {
            repr: DEFAULT_MIME_TYPE.to_string(),
            slash: 4,
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

impl FromStr for MimeType {
    type Err = MimeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.repr
    }
}

impl TryFrom<&str> for MimeType {
    type Error = MimeTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for MimeType {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.repr
    }
}

impl PartialOrd for MimeType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MimeType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MimeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.repr)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MimeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
