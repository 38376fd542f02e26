//! Predicate builder — turns [`Criteria`] into a conjunction of field
//! conditions.
//!
//! A [`Predicate`] is an intermediate representation: a flat list of
//! `(field, operator, value)` tuples joined with AND. The in-memory engine
//! evaluates it directly through [`Predicate::matches`]; the SQLite engine
//! translates it with [`crate::sql::translate`].
//!
//! | Criteria field | Condition                                   |
//! |----------------|---------------------------------------------|
//! | `title`        | `title` contains value, case-insensitive    |
//! | `author`       | `author` contains value, case-insensitive   |
//! | `slug`         | `slug` equals value                         |
//! | `publish_from` | `publish >= value` (byte-wise string order) |
//! | `publish_to`   | `publish <= value` (byte-wise string order) |

use crate::criteria::{present, Criteria};
use crate::types::{Article, ArticleField};

/// Comparison applied by a single [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Substring match after lower-casing both sides. The stored value is
    /// already lower-cased.
    ContainsIgnoreCase,
    Equals,
    GreaterOrEqual,
    LessOrEqual,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::ContainsIgnoreCase => write!(f, "contains"),
            Operator::Equals => write!(f, "="),
            Operator::GreaterOrEqual => write!(f, ">="),
            Operator::LessOrEqual => write!(f, "<="),
        }
    }
}

/// One field-level test. Only built through the constructors below, so a
/// `ContainsIgnoreCase` value is always folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    field: ArticleField,
    operator: Operator,
    value: String,
}

impl Condition {
    pub fn contains_ignore_case(field: ArticleField, needle: &str) -> Self {
        Self {
            field,
            operator: Operator::ContainsIgnoreCase,
            value: fold_case(needle),
        }
    }

    pub fn equals(field: ArticleField, value: &str) -> Self {
        Self {
            field,
            operator: Operator::Equals,
            value: value.to_string(),
        }
    }

    pub fn at_least(field: ArticleField, bound: &str) -> Self {
        Self {
            field,
            operator: Operator::GreaterOrEqual,
            value: bound.to_string(),
        }
    }

    pub fn at_most(field: ArticleField, bound: &str) -> Self {
        Self {
            field,
            operator: Operator::LessOrEqual,
            value: bound.to_string(),
        }
    }

    pub fn field(&self) -> ArticleField {
        self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches(&self, article: &Article) -> bool {
        let actual = article.field(self.field);
        match self.operator {
            Operator::ContainsIgnoreCase => fold_case(actual).contains(&self.value),
            Operator::Equals => actual == self.value,
            Operator::GreaterOrEqual => actual >= self.value.as_str(),
            Operator::LessOrEqual => actual <= self.value.as_str(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:?}", self.field, self.operator, self.value)
    }
}

/// Conjunction of [`Condition`]s. With no conditions it matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// The identity of AND: matches every article.
    pub fn always() -> Self {
        Self::default()
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_always(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.conditions.iter().all(|c| c.matches(article))
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "true");
        }
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// Build the predicate for `criteria`. Never fails; absent and empty fields
/// contribute nothing.
pub fn criteria_to_predicate(criteria: &Criteria) -> Predicate {
    let mut predicate = Predicate::always();

    if let Some(title) = present(criteria.title()) {
        predicate = predicate.and(Condition::contains_ignore_case(ArticleField::Title, title));
    }
    if let Some(author) = present(criteria.author()) {
        predicate = predicate.and(Condition::contains_ignore_case(ArticleField::Author, author));
    }
    if let Some(slug) = present(criteria.slug()) {
        predicate = predicate.and(Condition::equals(ArticleField::Slug, slug));
    }
    if let Some(from) = present(criteria.publish_from()) {
        predicate = predicate.and(Condition::at_least(ArticleField::Publish, from));
    }
    if let Some(to) = present(criteria.publish_to()) {
        predicate = predicate.and(Condition::at_most(ArticleField::Publish, to));
    }

    tracing::debug!(predicate = %predicate, "built article predicate");
    predicate
}

/// Case folding shared by the in-memory and SQLite engines.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}
