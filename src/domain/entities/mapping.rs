//! Shortcode mapping entity.

/// A stored shortcode → destination URL pair.
///
/// Mappings are only ever created; nothing in the service updates or removes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeMapping {
    pub shortcode: String,
    pub url: String,
}

impl ShortcodeMapping {
    pub fn new(shortcode: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            url: url.into(),
        }
    }
}
