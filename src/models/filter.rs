use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

/// Form literal meaning "every student".
pub const ALL_SUBJECTS: &str = "all";
/// Form literal meaning "online and offline", compared case-insensitively.
pub const BOTH_MODES: &str = "both";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `POST /update_plot` body. Every field may be missing or blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlotForm {
    pub roll_no: Option<String>,
    pub mode: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Normalized filters. `None` disables the corresponding predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub subject_id: Option<String>,
    pub mode: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    InvalidDate { field: &'static str, value: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidDate { field, value } => {
                write!(f, "Invalid {field} '{value}': expected YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Subject and mode are matched verbatim; only an empty field means "absent".
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    match non_blank(value) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, DATE_FORMAT)
            .map(Some)
            .map_err(|_| FilterError::InvalidDate { field, value: v.to_string() }),
    }
}

impl FilterCriteria {
    pub fn from_form(form: &PlotForm) -> Result<Self, FilterError> {
        let subject_id = non_empty(form.roll_no.as_deref())
            .filter(|r| *r != ALL_SUBJECTS)
            .map(str::to_string);
        let mode = non_empty(form.mode.as_deref())
            .filter(|m| !m.eq_ignore_ascii_case(BOTH_MODES))
            .map(str::to_string);

        Ok(FilterCriteria {
            subject_id,
            mode,
            start_date: parse_date("start_date", form.start_date.as_deref())?,
            end_date: parse_date("end_date", form.end_date.as_deref())?,
        })
    }

    /// Chart title label: the selected student, if any.
    pub fn subject_label(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(roll_no: &str, mode: &str, start: &str, end: &str) -> PlotForm {
        PlotForm {
            roll_no: Some(roll_no.into()),
            mode: Some(mode.into()),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
        }
    }

    #[test]
    fn all_and_both_sentinels_disable_filters() {
        let c = FilterCriteria::from_form(&form("all", "BoTh", "", "")).unwrap();
        assert_eq!(c, FilterCriteria::default());
        assert_eq!(c, FilterCriteria::from_form(&PlotForm::default()).unwrap());
    }

    #[test]
    fn concrete_values_are_kept() {
        let c = FilterCriteria::from_form(&form("21CS042", "Online", " 2024-01-01 ", "2024-12-31")).unwrap();
        assert_eq!(c.subject_id.as_deref(), Some("21CS042"));
        assert_eq!(c.mode.as_deref(), Some("Online"));
        assert_eq!(c.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(c.end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(c.subject_label(), Some("21CS042"));
    }

    #[test]
    fn subject_and_mode_are_not_trimmed() {
        let c = FilterCriteria::from_form(&form(" 21CS042 ", "Online ", "", "")).unwrap();
        assert_eq!(c.subject_id.as_deref(), Some(" 21CS042 "));
        assert_eq!(c.mode.as_deref(), Some("Online "));
    }

    #[test]
    fn subject_sentinel_is_case_sensitive() {
        let c = FilterCriteria::from_form(&form("ALL", "both", "", "")).unwrap();
        assert_eq!(c.subject_id.as_deref(), Some("ALL"));
    }

    #[test]
    fn bad_date_is_reported() {
        let err = FilterCriteria::from_form(&form("all", "both", "2024-13-01", "")).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidDate { field: "start_date", value: "2024-13-01".into() }
        );
        assert!(err.to_string().contains("start_date"));
    }
}
