//! Injected MIME-detection capability.

/// Detects a MIME type from raw file content.
///
/// The crate performs no content sniffing of its own;
/// [`crate::DataUri::from_path`] asks an implementation of this trait to
/// classify the bytes it has read. Types whose detected MIME type starts
/// with `text/` are percent-encoded; everything else is base64-encoded.
///
/// The trait is implemented for plain functions and closures:
///
/// ```
/// use data_uri::DetectMimeType;
///
/// let detector = |bytes: &[u8]| {
///     if bytes.starts_with(b"GIF8") {
///         "image/gif".to_string()
///     } else {
///         "text/plain".to_string()
///     }
/// };
/// assert_eq!(detector.detect(b"GIF89a"), "image/gif");
/// ```
pub trait DetectMimeType {
    /// Returns the MIME type string for the given content.
    fn detect(&self, bytes: &[u8]) -> String;
}

impl<F> DetectMimeType for F
where
    F: Fn(&[u8]) -> String,
{
    fn detect(&self, bytes: &[u8]) -> String {
        self(bytes)
    }
}
