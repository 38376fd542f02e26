//! Test builders — ergonomic constructors for `NewArticle` and `Criteria`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

#![allow(dead_code)]

use clinked_core::{Criteria, NewArticle};

// ---------------------------------------------------------------------------
// ArticleBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`NewArticle`] fixtures.
///
/// ```rust,ignore
/// let article = ArticleBuilder::new("Rust Ownership")
///     .author("Ferris")
///     .publish("2011-06-01T00:00:00Z")
///     .build();
/// ```
pub struct ArticleBuilder {
    title: String,
    slug: String,
    content: String,
    author: String,
    publish: String,
}

impl ArticleBuilder {
    /// Slug defaults to the lower-cased, dash-joined title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: title.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"),
            title,
            content: String::new(),
            author: "Test Author".to_string(),
            publish: clinked::seed::SAMPLE_PUBLISH.to_string(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn publish(mut self, publish: impl Into<String>) -> Self {
        self.publish = publish.into();
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle {
            title: self.title,
            slug: self.slug,
            content: self.content,
            author: self.author,
            publish: self.publish,
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria shorthands
// ---------------------------------------------------------------------------

pub fn by_title(title: &str) -> Criteria {
    Criteria::new().with_title(title.to_string())
}

pub fn by_author(author: &str) -> Criteria {
    Criteria::new().with_author(author.to_string())
}

pub fn by_slug(slug: &str) -> Criteria {
    Criteria::new().with_slug(slug.to_string())
}

pub fn published_between(from: &str, to: &str) -> Criteria {
    Criteria::new()
        .with_publish_from(from.to_string())
        .with_publish_to(to.to_string())
}
