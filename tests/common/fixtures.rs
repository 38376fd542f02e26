//! Seeded repositories used across harnesses.
//!
//! Every fixture is available for both storage engines so harnesses can be
//! parameterised over [`Engine`] with rstest.

#![allow(dead_code)]

use std::sync::Arc;

use clinked_core::{
    Article, ArticleRepository, Error, MemoryRepository, NewArticle, PageRequest, Predicate,
    SqliteRepository,
};

use super::builders::ArticleBuilder;

/// Storage engine under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Memory,
    Sqlite,
}

impl Engine {
    pub fn open(self) -> Arc<dyn ArticleRepository> {
        match self {
            Engine::Memory => Arc::new(MemoryRepository::new()),
            Engine::Sqlite => Arc::new(
                SqliteRepository::open_in_memory().expect("in-memory sqlite must open"),
            ),
        }
    }
}

/// A repository whose reads never succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenRepository {
    /// Every call returns [`Error::LockPoisoned`].
    Failing,
    /// `find_page` panics, killing the query task.
    Panicking,
}

impl ArticleRepository for BrokenRepository {
    fn insert(&self, _article: NewArticle) -> clinked_core::Result<Article> {
        Err(Error::LockPoisoned)
    }

    fn count(&self, _predicate: &Predicate) -> clinked_core::Result<u64> {
        Err(Error::LockPoisoned)
    }

    fn find_page(
        &self,
        _predicate: &Predicate,
        _page: PageRequest,
    ) -> clinked_core::Result<(Vec<Article>, u64)> {
        match self {
            BrokenRepository::Failing => Err(Error::LockPoisoned),
            BrokenRepository::Panicking => panic!("storage engine crashed"),
        }
    }
}

/// A repository holding `articles`, inserted in order.
pub fn repo_with(
    engine: Engine,
    articles: impl IntoIterator<Item = NewArticle>,
) -> Arc<dyn ArticleRepository> {
    let repo = engine.open();
    for article in articles {
        repo.insert(article).expect("fixture insert must succeed");
    }
    repo
}

/// The ten startup samples: "Article Title 1".."Article Title 10".
pub fn sample_repo(engine: Engine) -> Arc<dyn ArticleRepository> {
    let repo = engine.open();
    clinked::seed::seed_articles(repo.as_ref(), 10).expect("seeding must succeed");
    repo
}

/// `n` articles titled "Entry 1".."Entry n".
pub fn numbered_repo(engine: Engine, n: usize) -> Arc<dyn ArticleRepository> {
    repo_with(
        engine,
        (1..=n).map(|i| ArticleBuilder::new(format!("Entry {i}")).build()),
    )
}

/// A small mixed corpus exercising every match rule.
pub fn mixed_corpus() -> Vec<NewArticle> {
    vec![
        ArticleBuilder::new("Rust Ownership")
            .author("Ferris Crab")
            .publish("2010-01-01T12:00:00+01:00")
            .build(),
        ArticleBuilder::new("Borrowing Rules")
            .author("ferris")
            .publish("2011-06-01T00:00:00Z")
            .build(),
        ArticleBuilder::new("Async Rust")
            .author("Tokio Team")
            .slug("Async-Rust")
            .publish("2012-03-15T08:30:00Z")
            .build(),
        ArticleBuilder::new("100% Safe Code")
            .author("Someone")
            .publish("2013")
            .build(),
        ArticleBuilder::new("Über Lifetimes")
            .author("Ådne")
            .publish("2009-12-31T23:59:59Z")
            .build(),
    ]
}
