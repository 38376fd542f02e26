//! Core types for clinked-core.
//!
//! This module defines the stored [`Article`], its insert payload
//! [`NewArticle`], and the [`ArticleField`] discriminant predicates use to
//! name the fields they filter on.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// Longest title accepted on insert, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// An article as held by a storage engine.
///
/// `id`, `created_at` and `updated_at` are assigned by the engine on insert;
/// everything else comes from the [`NewArticle`] payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// UUID v4, generated by the storage engine.
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    /// Publish timestamp as supplied by the writer. Kept as text and compared
    /// byte-wise; it is never parsed.
    pub publish: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Borrow the value of a filterable field.
    pub fn field(&self, field: ArticleField) -> &str {
        match field {
            ArticleField::Title => &self.title,
            ArticleField::Author => &self.author,
            ArticleField::Slug => &self.slug,
            ArticleField::Publish => &self.publish,
        }
    }
}

/// Insert payload for [`ArticleRepository::insert`](crate::ArticleRepository::insert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub publish: String,
}

impl NewArticle {
    /// Stamp the payload with an identity and timestamps. Titles longer
    /// than [`MAX_TITLE_LENGTH`] characters are rejected.
    pub(crate) fn into_article(self, now: DateTime<Utc>) -> Result<Article> {
        let title_length = self.title.chars().count();
        if title_length > MAX_TITLE_LENGTH {
            return Err(Error::InvalidArgument {
                name: "title",
                value: title_length as i64,
                min: 0,
                max: MAX_TITLE_LENGTH as i64,
            });
        }
        Ok(Article {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            slug: self.slug,
            content: self.content,
            author: self.author,
            publish: self.publish,
            created_at: now,
            updated_at: now,
        })
    }
}

/// The article fields a predicate may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Title,
    Author,
    Slug,
    Publish,
}

impl ArticleField {
    /// Column holding this field in the `articles` table.
    pub fn column(self) -> &'static str {
        match self {
            ArticleField::Title => "title",
            ArticleField::Author => "author",
            ArticleField::Slug => "slug",
            ArticleField::Publish => "publish_at",
        }
    }
}

impl std::fmt::Display for ArticleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleField::Title => write!(f, "title"),
            ArticleField::Author => write!(f, "author"),
            ArticleField::Slug => write!(f, "slug"),
            ArticleField::Publish => write!(f, "publish"),
        }
    }
}
