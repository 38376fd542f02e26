//! In-memory engine: a `Vec` behind a `RwLock`, kept in insertion order.

use std::sync::RwLock;

use chrono::Utc;

use super::ArticleRepository;
use crate::error::Result;
use crate::page::{slice, PageRequest};
use crate::predicate::Predicate;
use crate::types::{Article, NewArticle};

#[derive(Debug, Default)]
pub struct MemoryRepository {
    articles: RwLock<Vec<Article>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.articles.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ArticleRepository for MemoryRepository {
    fn insert(&self, article: NewArticle) -> Result<Article> {
        let article = article.into_article(Utc::now())?;
        self.articles.write()?.push(article.clone());
        Ok(article)
    }

    fn count(&self, predicate: &Predicate) -> Result<u64> {
        let articles = self.articles.read()?;
        Ok(articles.iter().filter(|a| predicate.matches(a)).count() as u64)
    }

    fn find_page(&self, predicate: &Predicate, page: PageRequest) -> Result<(Vec<Article>, u64)> {
        let articles = self.articles.read()?;
        let matching: Vec<&Article> = articles.iter().filter(|a| predicate.matches(a)).collect();
        let total = matching.len() as u64;
        let items = slice(matching, page).into_iter().cloned().collect();
        Ok((items, total))
    }
}
