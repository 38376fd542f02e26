//! SQL translator
//!
//! Translates a [`Predicate`] into a parameterised SQLite `WHERE` clause.
//!
//! # SQL generated
//!
//! ```sql
//! instr(fold_case(title), ?) > 0     -- ContainsIgnoreCase
//! slug = ?                           -- Equals
//! publish_at >= ?                    -- GreaterOrEqual
//! publish_at <= ?                    -- LessOrEqual
//! ```
//!
//! `fold_case` is registered on every connection by the SQLite engine and
//! applies the same lower-casing as [`crate::predicate::fold_case`], so both
//! engines agree on non-ASCII text. `instr` keeps `%` and `_` literal.

use crate::predicate::{Condition, Operator, Predicate};

/// Name of the case-folding scalar function the clause relies on.
pub const FOLD_CASE_FN: &str = "fold_case";

/// A translated predicate: the clause text (without `WHERE`) and its
/// positional parameters in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFilter {
    pub clause: Option<String>,
    pub params: Vec<String>,
}

impl SqlFilter {
    /// ` WHERE <clause>` or an empty string for the always-true predicate.
    pub fn where_sql(&self) -> String {
        match &self.clause {
            Some(clause) => format!(" WHERE {clause}"),
            None => String::new(),
        }
    }
}

/// Translate a predicate. An empty predicate yields no clause.
pub fn translate(predicate: &Predicate) -> SqlFilter {
    let mut params = Vec::with_capacity(predicate.conditions().len());
    let parts: Vec<String> = predicate
        .conditions()
        .iter()
        .map(|c| translate_condition(c, &mut params))
        .collect();

    let clause = if parts.is_empty() {
        None
    } else {
        Some(parts.join(" AND "))
    };
    SqlFilter { clause, params }
}

fn translate_condition(condition: &Condition, params: &mut Vec<String>) -> String {
    let column = condition.field().column();
    params.push(condition.value().to_string());
    match condition.operator() {
        Operator::ContainsIgnoreCase => format!("instr({FOLD_CASE_FN}({column}), ?) > 0"),
        Operator::Equals => format!("{column} = ?"),
        Operator::GreaterOrEqual => format!("{column} >= ?"),
        Operator::LessOrEqual => format!("{column} <= ?"),
    }
}
