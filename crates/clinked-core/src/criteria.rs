//! Criteria — the optional filter values supplied with one listing request.
//!
//! A [`Criteria`] is a plain holder. It does not normalise anything: an empty
//! string is stored as given and only dropped when the predicate is built.

/// Request-scoped filter values. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    title: Option<String>,
    author: Option<String>,
    slug: Option<String>,
    publish_from: Option<String>,
    publish_to: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<Option<String>>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<Option<String>>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<Option<String>>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_publish_from(mut self, from: impl Into<Option<String>>) -> Self {
        self.publish_from = from.into();
        self
    }

    pub fn with_publish_to(mut self, to: impl Into<Option<String>>) -> Self {
        self.publish_to = to.into();
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn publish_from(&self) -> Option<&str> {
        self.publish_from.as_deref()
    }

    pub fn publish_to(&self) -> Option<&str> {
        self.publish_to.as_deref()
    }

    /// True when no field would constrain a result set.
    pub fn is_empty(&self) -> bool {
        [
            self.title(),
            self.author(),
            self.slug(),
            self.publish_from(),
            self.publish_to(),
        ]
        .into_iter()
        .all(|value| present(value).is_none())
    }
}

/// A value counts only when it is set and non-empty.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
