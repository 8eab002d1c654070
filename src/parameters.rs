//! Parameter list component of a data URI.

use std::fmt;
use std::str::FromStr;

use crate::constants::BASE64_TOKEN;
use crate::error::ParameterError;

/// The ordered `key=value` parameter list of a data URI, plus the `base64`
/// flag.
///
/// Keys are unique and keep insertion order; re-assigning an existing key
/// overwrites its value in place. The `base64` marker is not a list entry:
/// it is a dedicated flag that the key-based API (`get`, `merge`,
/// `without_keys`) can neither read nor remove, so it survives even when
/// every ordinary parameter is stripped.
///
/// # Examples
///
/// ```
/// use data_uri::Parameters;
///
/// let params = Parameters::parse("charset=binary;base64").unwrap();
/// assert_eq!(params.get("charset"), Some("binary"));
/// assert!(params.is_base64());
/// assert_eq!(params.to_string(), "charset=binary;base64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    pairs: Vec<(String, String)>,
    base64: bool,
}

impl Parameters {
    /// Creates an empty parameter list with the flag unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw `;`-separated parameter segment.
    ///
    /// Each segment is either the literal `base64` token (which must be the
    /// last segment) or a `key=value` pair. An empty value is tolerated here
    /// so that parameters inherited from a parsed URI survive re-validation;
    /// [`crate::DataUri::with_parameters`] rejects newly introduced empty
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if a segment matches neither shape, a key is
    /// empty or is the reserved `base64` token, a key or value contains a
    /// `,`, or the `base64` token is followed by further segments.
    pub fn parse(input: &str) -> Result<Self, ParameterError> {
        if input.is_empty() {
            return Ok(Self::new());
        }

        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut base64 = false;

        for segment in input.split(';') {
            if base64 {
                return Err(ParameterError::Base64NotLast);
            }
            if segment == BASE64_TOKEN {
                base64 = true;
                continue;
            }

            let Some(eq_idx) = segment.find('=') else {
                return Err(ParameterError::InvalidSegment {
                    segment: segment.to_string(),
                });
            };
            let key = &segment[..eq_idx];
            let value = &segment[eq_idx + 1..];

            if key.is_empty() {
                return Err(ParameterError::EmptyKey {
                    segment: segment.to_string(),
                });
            }
            if key == BASE64_TOKEN {
                return Err(ParameterError::ReservedKey {
                    key: key.to_string(),
                });
            }
            // A comma in a key or value would shift the metadata/payload
            // split when the list is reserialized into a URI.
            if key.contains(',') || value.contains(',') {
                return Err(ParameterError::InvalidSegment {
                    segment: segment.to_string(),
                });
            }

            Self::upsert(&mut pairs, key, value);
        }

        Ok(Self { pairs, base64 })
    }

    /// Returns the value for a key, if present. Matching is exact-string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the `base64` flag is set.
    #[must_use]
    pub const fn is_base64(&self) -> bool {
        self.base64
    }

    /// Returns true if no ordinary parameters are present and the flag is
    /// unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && !self.base64
    }

    /// Returns the number of ordinary parameters (the flag does not count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the ordinary parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new list with each given pair inserted or overwritten.
    ///
    /// Overwriting keeps the key's original position; new keys are appended.
    /// The `base64` flag is carried over untouched.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if a key is the reserved `base64` token, a
    /// key is empty or contains `;`, `=`, or `,`, or a value is empty or
    /// contains `;` or `,`.
    pub fn merge<'a, I>(&self, other: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut pairs = self.pairs.clone();

        for (key, value) in other {
            if key == BASE64_TOKEN {
                return Err(ParameterError::ReservedKey {
                    key: key.to_string(),
                });
            }
            if key.is_empty() {
                return Err(ParameterError::EmptyKey {
                    segment: format!("{key}={value}"),
                });
            }
            if key.contains([';', '=', ',']) || value.contains([';', ',']) {
                return Err(ParameterError::InvalidSegment {
                    segment: format!("{key}={value}"),
                });
            }
            if value.is_empty() {
                return Err(ParameterError::EmptyValue {
                    key: key.to_string(),
                });
            }
            Self::upsert(&mut pairs, key, value);
        }

        Ok(Self {
            pairs,
            base64: self.base64,
        })
    }

    /// Returns a new list with each named key removed if present.
    ///
    /// Absent keys are ignored. The `base64` flag is not addressable here
    /// and is carried over untouched.
    #[must_use]
    pub fn without_keys(&self, keys: &[&str]) -> Self {
        let pairs = self
            .pairs
            .iter()
            .filter(|(k, _)| !keys.contains(&k.as_str()))
            .cloned()
            .collect();

        Self {
            pairs,
            base64: self.base64,
        }
    }

    /// Returns the key of the first ordinary parameter with an empty value,
    /// if any.
    #[must_use]
    pub fn empty_value_key(&self) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(_, v)| v.is_empty())
            .map(|(k, _)| k.as_str())
    }

    fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if self.base64 {
            segments.push(BASE64_TOKEN.to_string());
        }
        write!(f, "{}", segments.join(";"))
    }
}

impl FromStr for Parameters {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Parameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
