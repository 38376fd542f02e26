//! clinked-core — article listing core library.
//!
//! This crate turns a request's optional filter values into a composed
//! predicate and pages the matching articles out of a storage engine.
//!
//! # Architecture
//!
//! ```text
//! Criteria ──► Predicate ──► ArticleRepository ──► Page<Article>
//!                  ▲
//!          Specification
//! ```
//!
//! Criteria, predicates and page requests are request-scoped values. The
//! repository is the only shared state and the only suspension point.

pub mod config;
pub mod criteria;
pub mod error;
pub mod page;
pub mod predicate;
pub mod specification;
pub mod sql;
pub mod store;
pub mod types;

pub use criteria::Criteria;
pub use error::{Error, Result};
pub use page::{Page, PageRequest};
pub use predicate::{criteria_to_predicate, Condition, Operator, Predicate};
pub use specification::{ArticleSpecification, Specification};
pub use store::{ArticleRepository, MemoryRepository, SqliteRepository};
pub use types::{Article, ArticleField, NewArticle};
