//! Fixture loading — inserts numbered sample articles.
//!
//! This is an explicit startup step (`--seed` or `[seed] enabled = true`),
//! never something the core does on its own.

use clinked_core::{Article, ArticleRepository, NewArticle};
use tracing::info;

/// Publish timestamp shared by every sample article.
pub const SAMPLE_PUBLISH: &str = "2010-01-01T12:00:00+01:00";

/// The `i`-th sample article (1-based).
pub fn sample_article(i: usize) -> NewArticle {
    NewArticle {
        title: format!("Article Title {i}"),
        slug: format!("article-title-{i}"),
        content: format!("Article Content {i}"),
        author: format!("Article Author {i}"),
        publish: SAMPLE_PUBLISH.to_string(),
    }
}

/// Insert samples `1..=count` into `repo`, returning the stored articles.
pub fn seed_articles(
    repo: &dyn ArticleRepository,
    count: usize,
) -> clinked_core::Result<Vec<Article>> {
    let stored = (1..=count)
        .map(|i| repo.insert(sample_article(i)))
        .collect::<clinked_core::Result<Vec<_>>>()?;
    info!(count = stored.len(), "seeded sample articles");
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinked_core::{MemoryRepository, Predicate};

    #[test]
    fn sample_fields_are_numbered() {
        let a = sample_article(7);
        assert_eq!(a.title, "Article Title 7");
        assert_eq!(a.slug, "article-title-7");
        assert_eq!(a.content, "Article Content 7");
        assert_eq!(a.author, "Article Author 7");
        assert_eq!(a.publish, SAMPLE_PUBLISH);
    }

    #[test]
    fn seeds_requested_count() {
        let repo = MemoryRepository::new();
        let stored = seed_articles(&repo, 10).unwrap();
        assert_eq!(stored.len(), 10);
        assert_eq!(repo.count(&Predicate::always()).unwrap(), 10);
    }

    #[test]
    fn zero_is_a_no_op() {
        let repo = MemoryRepository::new();
        assert!(seed_articles(&repo, 0).unwrap().is_empty());
    }
}
