//! Extraction payload, routed form, and the published record

use crate::employment::VariantFields;
use serde::{Deserialize, Serialize};

/// A document submitted for extraction (already fetched/decoded upstream)
#[derive(Debug, Clone)]
pub struct Document {
    /// Source file name, used as a fallback title and in diagnostics
    pub name: String,

    /// MIME type of the original file
    pub mime_type: String,

    /// Text content handed to the extraction model
    pub text: String,
}

impl Document {
    /// Create a plain-text document
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: "text/plain".to_string(),
            text: text.into(),
        }
    }
}

/// The flat payload returned by the extraction model for one document.
///
/// Every field is optional because the model's output shape varies by
/// employment type and document quality. The employment-type router
/// ([`crate::employment`]) projects this into a [`RoutedJob`] where only
/// one variant block survives; downstream consumers should only ever see
/// the routed form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedJobData {
    /// Posting title
    pub title: Option<String>,
    /// Work area free text (e.g. "東京都 大田区")
    pub area: Option<String>,
    /// Employment type literal (正社員 / 派遣 / 紹介予定派遣 / 契約社員)
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    /// Salary display text (e.g. "時給1550〜1600円+交通費")
    pub salary: Option<String>,
    /// Raw job category string
    pub category: Option<String>,
    /// Free-text appeal tags
    pub tags: Vec<String>,
    /// Job description body
    pub description: Option<String>,
    /// Required qualifications
    pub requirements: Vec<String>,
    /// Working hours text, break time included
    pub working_hours: Option<String>,
    /// Holiday items
    pub holidays: Vec<String>,
    /// Benefit items
    pub benefits: Vec<String>,
    /// Selection process description
    pub selection_process: Option<String>,
    /// Nearest station name
    pub nearest_station: Option<String>,
    /// Distance-from-station and similar location notes
    pub location_notes: Option<String>,
    /// 月給制 / 時給制
    pub salary_type: Option<String>,
    /// Raise information (昇給)
    pub raise_info: Option<String>,
    /// Bonus information (賞与)
    pub bonus_info: Option<String>,
    /// Commute allowance information (通勤手当/交通費)
    pub commute_allowance: Option<String>,
    /// More specific job title than `category`
    pub job_category_detail: Option<String>,
    /// Hourly wage in yen, numeric only
    pub hourly_wage: Option<u32>,
    /// Supplementary salary text
    pub salary_description: Option<String>,
    /// Salary detail lines (想定年収 etc.)
    pub salary_detail: Option<String>,
    /// Itemized pay breakdown (基本給 / 各種手当)
    pub salary_breakdown: Option<String>,
    /// Model income examples
    pub salary_example: Option<String>,
    /// Employment period (長期, 3ヶ月以上, ...)
    pub period: Option<String>,
    /// Start timing (即日, 随時, ...)
    pub start_date: Option<String>,
    /// Workplace name
    pub workplace_name: Option<String>,
    /// Workplace postal address
    pub workplace_address: Option<String>,
    /// Access description (〇〇駅から徒歩〇分)
    pub workplace_access: Option<String>,
    /// Work location detail prose
    pub work_location_detail: Option<String>,
    /// Attire summary in one line
    pub attire: Option<String>,
    /// Attire classification
    pub attire_type: Option<String>,
    /// Hair style policy
    pub hair_style: Option<String>,

    // Dispatch-specific columns (派遣専用)
    /// Client company the staff is dispatched to
    pub client_company_name: Option<String>,
    /// Training period and content
    pub training_period: Option<String>,
    /// Wage during training
    pub training_salary: Option<String>,
    /// Actual working hours per day
    pub actual_work_hours: Option<String>,
    /// Working days per week
    pub work_days_per_week: Option<String>,
    /// Contract end date
    pub end_date: Option<String>,
    /// Nail policy
    pub nail_policy: Option<String>,
    /// Shift notes
    pub shift_notes: Option<String>,
    /// Other free-form notes
    pub general_notes: Option<String>,

    // Fulltime-specific columns (正社員専用)
    /// Employer company name
    pub company_name: Option<String>,
    /// Industry (IT, メーカー, ...)
    pub industry: Option<String>,
    /// Company overview
    pub company_overview: Option<String>,
    /// Employee count / company size
    pub company_size: Option<String>,
    /// Annual salary lower bound in man-yen
    pub annual_salary_min: Option<u32>,
    /// Annual salary upper bound in man-yen
    pub annual_salary_max: Option<u32>,
    /// Average monthly overtime hours
    pub overtime_hours: Option<String>,
    /// Annual holiday count, kept as text (may carry units)
    pub annual_holidays: Option<String>,
    /// Probation period
    pub probation_period: Option<String>,
    /// Conditions during probation
    pub probation_details: Option<String>,
    /// Appeal points of the role
    pub appeal_points: Option<String>,
    /// Welcome-but-not-required skills
    pub welcome_requirements: Vec<String>,
}

impl ExtractedJobData {
    /// True when the string field holds non-whitespace content
    pub fn has_text(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// Extraction payload after employment-type routing.
///
/// Invariant: `variant` holds exactly the fields belonging to the detected
/// employment type; the corresponding flat columns on `data` are cleared
/// so variant data cannot coexist in both places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedJob {
    /// Generic fields, variant columns cleared
    pub data: ExtractedJobData,

    /// The single authoritative variant block
    pub variant: VariantFields,
}

/// A published, live job posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Stable identifier
    pub id: String,

    /// Auto-generated six-digit job code
    pub job_code: String,

    /// The posting content
    pub routed: RoutedJob,
}

impl Job {
    /// Posting title, empty string when the draft never had one
    pub fn title(&self) -> &str {
        self.routed.data.title.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_payload() {
        let json = r#"{"title":"テスト求人","type":"派遣","hourly_wage":1400,"tags":["急募"]}"#;
        let data: ExtractedJobData = serde_json::from_str(json).unwrap();
        assert_eq!(data.title.as_deref(), Some("テスト求人"));
        assert_eq!(data.employment_type.as_deref(), Some("派遣"));
        assert_eq!(data.hourly_wage, Some(1400));
        assert_eq!(data.tags, vec!["急募"]);
        assert!(data.annual_salary_min.is_none());
    }

    #[test]
    fn test_has_text() {
        assert!(ExtractedJobData::has_text(&Some("値".to_string())));
        assert!(!ExtractedJobData::has_text(&Some("  ".to_string())));
        assert!(!ExtractedJobData::has_text(&None));
    }
}
