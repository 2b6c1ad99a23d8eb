//! Canonical link selectors.

use std::fmt;

use super::Pattern;

/// Canonical matching criteria for one link.
///
/// The relation is mandatory. Media type and title are optional; when absent
/// they place no constraint on the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Relation matcher.
    pub rel: Pattern,
    /// Media-type matcher.
    pub media_type: Option<Pattern>,
    /// Title matcher.
    pub title: Option<Pattern>,
}

impl Selector {
    /// Creates a selector constraining only the relation.
    #[must_use]
    pub fn new(rel: impl Into<Pattern>) -> Self {
        Self {
            rel: rel.into(),
            media_type: None,
            title: None,
        }
    }

    /// Sets the media-type matcher.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<Pattern>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the title matcher.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<Pattern>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rel)?;
        if let Some(ref media_type) = self.media_type {
            write!(f, " [{media_type}]")?;
        }
        if let Some(ref title) = self.title {
            write!(f, " title={title}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_display() {
        let selector = Selector::new("tags")
            .with_media_type("application/json")
            .with_title("t2");
        assert_eq!(selector.to_string(), "tags [application/json] title=t2");
        assert_eq!(Selector::new("self").to_string(), "self");
    }
}
