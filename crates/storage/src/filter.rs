//! Query predicates for the in-memory store
//!
//! Field paths are dotted. Comparison operators use [`compare_values`] and
//! only match values of the same type rank, so `{"age": {"$gt": 3}}` never
//! matches a string `age`.

use std::cmp::Ordering;

use serde_json::Value;

use crate::compare::{compare_fields, compare_values};
use crate::record::StoredRecord;

/// Query predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Field equals value (missing fields equal null)
    Eq(String, Value),
    /// Field does not equal value
    Ne(String, Value),
    /// Field greater than value
    Gt(String, Value),
    /// Field greater than or equal to value
    Gte(String, Value),
    /// Field less than value
    Lt(String, Value),
    /// Field less than or equal to value
    Lte(String, Value),
    /// Field equals any of the values
    In(String, Vec<Value>),
    /// Field presence matches the flag
    Exists(String, bool),
    /// Every nested filter matches
    And(Vec<Filter>),
    /// At least one nested filter matches
    Or(Vec<Filter>),
}

impl Filter {
    /// `field == value`
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    /// `field != value`
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Ne(field.into(), value.into())
    }

    /// `field > value`
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Gt(field.into(), value.into())
    }

    /// `field >= value`
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Gte(field.into(), value.into())
    }

    /// `field < value`
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Lt(field.into(), value.into())
    }

    /// `field <= value`
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Lte(field.into(), value.into())
    }

    /// `field` is one of `values`
    pub fn any_of(field: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        Filter::In(field.into(), values.into_iter().collect())
    }

    /// `field` is present (`true`) or absent (`false`)
    pub fn exists(field: impl Into<String>, present: bool) -> Self {
        Filter::Exists(field.into(), present)
    }

    /// Evaluate against a record
    pub fn matches(&self, record: &StoredRecord) -> bool {
        match self {
            Filter::Eq(field, value) => {
                compare_fields(record.get(field), Some(value)) == Ordering::Equal
            }
            Filter::Ne(field, value) => {
                compare_fields(record.get(field), Some(value)) != Ordering::Equal
            }
            Filter::Gt(field, value) => ranged(record.get(field), value, |o| o == Ordering::Greater),
            Filter::Gte(field, value) => ranged(record.get(field), value, |o| o != Ordering::Less),
            Filter::Lt(field, value) => ranged(record.get(field), value, |o| o == Ordering::Less),
            Filter::Lte(field, value) => ranged(record.get(field), value, |o| o != Ordering::Greater),
            Filter::In(field, values) => {
                let actual = record.get(field);
                values
                    .iter()
                    .any(|v| compare_fields(actual, Some(v)) == Ordering::Equal)
            }
            Filter::Exists(field, present) => record.get(field).is_some() == *present,
            Filter::And(filters) => filters.iter().all(|f| f.matches(record)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(record)),
        }
    }
}

fn same_rank(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn ranged(actual: Option<&Value>, bound: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
    match actual {
        Some(actual) if same_rank(actual, bound) => accept(compare_values(actual, bound)),
        _ => false,
    }
}
