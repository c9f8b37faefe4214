// Template contexts and JSON response bodies, organized by page.

pub mod api;
pub mod dashboard;

pub use api::PlotResponse;
pub use dashboard::{DashboardTemplate, ModeOption};
