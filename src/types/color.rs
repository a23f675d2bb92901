//! Color labels drawn from a caller-supplied palette.

use std::fmt;

/// An opaque color label.
///
/// Priority for first-fit selection comes from the palette's order, not
/// from the label text. Duplicate labels in a palette are redundant but
/// harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Create a color from a string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Color {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Color {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Build an ordered palette from string labels.
pub fn palette<I, S>(labels: I) -> Vec<Color>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels.into_iter().map(Color::new).collect()
}
