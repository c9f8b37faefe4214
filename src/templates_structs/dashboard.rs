use askama::Template;

use crate::models::category::EventCategory;

/// A choice in the participation-mode dropdown.
pub struct ModeOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub static MODE_OPTIONS: [ModeOption; 3] = [
    ModeOption { value: "Both", label: "Both" },
    ModeOption { value: "Online", label: "Online" },
    ModeOption { value: "Offline", label: "Offline" },
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct DashboardTemplate {
    /// Base64 PNG, or `None` when there is nothing to plot.
    pub plot_url: Option<String>,
    pub categories: Vec<&'static str>,
    pub modes: &'static [ModeOption],
    pub today: String,
}

impl DashboardTemplate {
    pub fn new(plot_url: Option<String>, today: String) -> Self {
        DashboardTemplate {
            plot_url,
            categories: EventCategory::ALL.iter().map(|c| c.as_str()).collect(),
            modes: &MODE_OPTIONS,
            today,
        }
    }
}
