use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;

use crate::charts;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::category::CategoryCounts;
use crate::models::filter::{FilterCriteria, PlotForm};
use crate::models::participation::Aggregator;
use crate::templates_structs::{DashboardTemplate, PlotResponse};

/// Render off the async workers; plotting is CPU-bound.
async fn render_chart(counts: CategoryCounts, label: Option<String>) -> Result<Option<String>, AppError> {
    let plot = web::block(move || charts::render(&counts, label.as_deref())).await??;
    Ok(plot)
}

/// GET / - dashboard with an all-zero chart for every student.
pub async fn index() -> Result<HttpResponse, AppError> {
    let plot_url = render_chart(CategoryCounts::zeroed(), None).await?;
    let today = Local::now().date_naive().to_string();
    render(DashboardTemplate::new(plot_url, today))
}

async fn build_plot(config: &AppConfig, form: &PlotForm) -> Result<Option<String>, AppError> {
    let criteria = FilterCriteria::from_form(form)?;
    let counts = Aggregator::new(&config.store).fetch_counts(&criteria).await?;
    log::info!(
        "Aggregated {} events (subject={:?}, mode={:?}, from={:?}, to={:?})",
        counts.total(),
        criteria.subject_id,
        criteria.mode,
        criteria.start_date,
        criteria.end_date
    );
    render_chart(counts, criteria.subject_id).await
}

/// POST /update_plot - JSON with the new chart, or the failure message.
pub async fn update_plot(config: web::Data<AppConfig>, form: web::Form<PlotForm>) -> HttpResponse {
    let body = match build_plot(&config, &form).await {
        Ok(plot_url) => PlotResponse::Plot { plot_url },
        Err(e) => {
            log::error!("update_plot failed: {e}");
            PlotResponse::Error { error: e.to_string() }
        }
    };
    HttpResponse::Ok().json(body)
}

/// Rejected `/update_plot` bodies still answer with a JSON `error`.
pub fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    log::error!("update_plot body rejected: {err}");
    let body = PlotResponse::Error { error: format!("Invalid form body: {err}") };
    InternalError::from_response(err, HttpResponse::Ok().json(body)).into()
}
