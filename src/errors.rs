use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::charts::ChartError;
use crate::models::filter::FilterError;
use crate::models::participation::StoreError;

#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Filter(FilterError),
    Chart(ChartError),
    Template(askama::Error),
    Blocking(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(e) => write!(f, "{e}"),
            AppError::Filter(e) => write!(f, "{e}"),
            AppError::Chart(e) => write!(f, "{e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Blocking(e) => write!(f, "Render task failed: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        HttpResponse::InternalServerError().body("Internal Server Error")
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<FilterError> for AppError {
    fn from(e: FilterError) -> Self {
        AppError::Filter(e)
    }
}

impl From<ChartError> for AppError {
    fn from(e: ChartError) -> Self {
        AppError::Chart(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Blocking(e.to_string())
    }
}

/// Render an askama template into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
