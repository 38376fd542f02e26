//! clinked — paginated, filterable article listing.
//!
//! The core (criteria, predicates, pagination, storage) lives in
//! [`clinked_core`]. This crate adds the outer surfaces: the HTTP listing
//! endpoint and the one-time fixture loader, so that integration tests and
//! the binary can import them directly.
//!
//! # Request flow
//!
//! ```text
//! GET /api/v1/article ──► ListParams ──► Criteria + PageRequest
//!                                            │
//!                     ┌──────────────────────┴──────────────────┐
//!              closure spec                           ArticleSpecification
//!                     └──────► ArticleRepository::find_all ◄────┘
//! ```

pub mod seed;
pub mod server;

pub use clinked_core::{
    criteria_to_predicate, Article, ArticleRepository, ArticleSpecification, Criteria, Page,
    PageRequest, Predicate, Specification,
};
