use std::fmt;

use chrono::NaiveDate;

/// One grouped row: how many `type_of_event` records started on `from_date`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub type_of_event: String,
    pub event_count: i64,
    pub from_date: Option<NaiveDate>,
}

/// A bound value for a `$N` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParam {
    Text(String),
    Date(NaiveDate),
}

/// Parameterized SQL plus its values in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    pub sql: String,
    pub params: Vec<FilterParam>,
}

/// Store failures. An empty result is not one of these.
#[derive(Debug)]
pub enum StoreError {
    Unreachable(sqlx::Error),
    Query(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unreachable(e) => write!(f, "Store unreachable: {e}"),
            StoreError::Query(e) => write!(f, "Store query failed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Unreachable(e) | StoreError::Query(e) => Some(e),
        }
    }
}
