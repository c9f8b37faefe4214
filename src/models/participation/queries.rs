use crate::config::StoreConfig;
use crate::db;
use crate::models::category::{CategoryCounts, EventCategory};
use crate::models::filter::FilterCriteria;

use super::types::{CategoryRow, CountQuery, FilterParam, StoreError};

/// Build the grouped count query for the given filters.
/// Placeholders are numbered in the order predicates are appended.
///
/// `start_date` bounds `from_date` while `end_date` bounds `to_date`, and rows
/// are grouped by `from_date`.
pub fn build_count_query(criteria: &FilterCriteria) -> CountQuery {
    let mut sql = String::from(
        "SELECT type_of_event, COUNT(*) AS event_count, from_date \
         FROM student \
         WHERE 1=1",
    );
    let mut params: Vec<FilterParam> = Vec::new();

    let mut push = |clause: &str, param: FilterParam| {
        params.push(param);
        sql.push_str(&format!(" AND {clause} ${}", params.len()));
    };

    if let Some(ref subject) = criteria.subject_id {
        push("roll_no =", FilterParam::Text(subject.clone()));
    }
    if let Some(ref mode) = criteria.mode {
        push("mode =", FilterParam::Text(mode.clone()));
    }
    if let Some(start) = criteria.start_date {
        push("from_date >=", FilterParam::Date(start));
    }
    if let Some(end) = criteria.end_date {
        push("to_date <=", FilterParam::Date(end));
    }

    sql.push_str(" GROUP BY type_of_event, from_date");
    CountQuery { sql, params }
}

/// Fold grouped rows into a zero-filled mapping. Unknown categories are dropped.
pub fn fold_rows<I>(rows: I) -> CategoryCounts
where
    I: IntoIterator<Item = CategoryRow>,
{
    let mut counts = CategoryCounts::zeroed();
    for row in rows {
        match EventCategory::from_store(&row.type_of_event) {
            Some(category) => counts.add(category, row.event_count),
            None => log::debug!("Skipping unknown event category '{}'", row.type_of_event),
        }
    }
    counts
}

/// Runs the per-category count against the participation store.
pub struct Aggregator<'a> {
    store: &'a StoreConfig,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a StoreConfig) -> Self {
        Aggregator { store }
    }

    /// One connection per call: connect, query, close.
    pub async fn fetch_counts(&self, criteria: &FilterCriteria) -> Result<CategoryCounts, StoreError> {
        let query = build_count_query(criteria);

        let mut conn = db::connect(self.store).await.map_err(StoreError::Unreachable)?;

        let mut q = sqlx::query_as::<_, CategoryRow>(&query.sql);
        for param in query.params {
            q = match param {
                FilterParam::Text(v) => q.bind(v),
                FilterParam::Date(d) => q.bind(d),
            };
        }
        let result = q.fetch_all(&mut conn).await;
        db::release(conn).await;

        let rows = result.map_err(StoreError::Query)?;
        Ok(fold_rows(rows))
    }
}
