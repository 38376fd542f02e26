//! Store — the queryable article collection.
//!
//! The store is the single owner of articles: it assigns identities and
//! timestamps, and decides iteration order. Callers only hand it a
//! [`Predicate`] (directly or through a [`Specification`]) and a
//! [`PageRequest`].

mod memory;
mod sqlite;

pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};
use crate::error::Result;
use crate::page::{Page, PageRequest};
use crate::predicate::Predicate;
use crate::specification::Specification;
use crate::types::{Article, NewArticle};

/// A collection of articles that can be filtered and paged.
///
/// Both engines iterate in insertion order.
pub trait ArticleRepository: Send + Sync {
    /// Store a new article, returning it with identity and timestamps set.
    fn insert(&self, article: NewArticle) -> Result<Article>;

    /// Number of articles matching `predicate`.
    fn count(&self, predicate: &Predicate) -> Result<u64>;

    /// One page of articles matching `predicate`, plus the total match count.
    fn find_page(&self, predicate: &Predicate, page: PageRequest) -> Result<(Vec<Article>, u64)>;

    /// Resolve `spec` once and fetch the requested page.
    fn find_all(&self, spec: &dyn Specification, page: PageRequest) -> Result<Page<Article>> {
        let predicate = spec.to_predicate();
        let (items, total) = self.find_page(&predicate, page)?;
        tracing::debug!(
            predicate = %predicate,
            index = page.index(),
            size = page.size(),
            returned = items.len(),
            total,
            "fetched article page"
        );
        Ok(Page::new(items, total, page))
    }
}

/// Open the engine selected by `config`.
pub fn open(config: &StoreConfig) -> Result<Arc<dyn ArticleRepository>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("using in-memory article store");
            Ok(Arc::new(MemoryRepository::new()))
        }
        StoreBackend::Sqlite => {
            tracing::info!(path = %config.path.display(), "using sqlite article store");
            Ok(Arc::new(SqliteRepository::open(&config.path)?))
        }
    }
}
