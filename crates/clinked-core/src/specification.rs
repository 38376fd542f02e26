//! Specifications — anything that can hand a repository a [`Predicate`].
//!
//! Two forms exist and must agree: an inline closure wrapping
//! [`criteria_to_predicate`], and the named [`ArticleSpecification`].

use crate::criteria::Criteria;
use crate::predicate::{criteria_to_predicate, Predicate};

/// Source of a predicate for a repository query.
pub trait Specification {
    fn to_predicate(&self) -> Predicate;
}

impl<F> Specification for F
where
    F: Fn() -> Predicate,
{
    fn to_predicate(&self) -> Predicate {
        self()
    }
}

/// Reusable specification over a borrowed [`Criteria`].
#[derive(Debug, Clone, Copy)]
pub struct ArticleSpecification<'a> {
    criteria: &'a Criteria,
}

impl<'a> ArticleSpecification<'a> {
    pub fn new(criteria: &'a Criteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &'a Criteria {
        self.criteria
    }
}

impl Specification for ArticleSpecification<'_> {
    fn to_predicate(&self) -> Predicate {
        criteria_to_predicate(self.criteria)
    }
}
