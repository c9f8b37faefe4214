use serde::Serialize;

/// `POST /update_plot` response body.
/// Serializes as `{"plot_url": ...}` or `{"error": ...}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PlotResponse {
    Plot { plot_url: Option<String> },
    Error { error: String },
}
