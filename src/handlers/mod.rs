pub mod dashboard;

use actix_web::web;

/// Register the dashboard routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(dashboard::form_error))
        .route("/", web::get().to(dashboard::index))
        .route("/update_plot", web::post().to(dashboard::update_plot));
}
