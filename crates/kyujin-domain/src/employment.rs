//! Employment-type detection and variant field routing

use crate::job::{ExtractedJobData, RoutedJob};
use serde::{Deserialize, Serialize};

/// The two employment-type families the pipeline distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    /// 派遣 / 紹介予定派遣 family
    Dispatch,

    /// 正社員 / 契約社員 family (also the default for unknown types)
    Fulltime,
}

impl EmploymentType {
    /// Stable string form for storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Dispatch => "dispatch",
            EmploymentType::Fulltime => "fulltime",
        }
    }
}

/// Type strings that classify as the dispatch family (substring match)
const DISPATCH_TYPES: [&str; 3] = ["派遣", "紹介予定派遣", "派遣社員"];

/// Detect the employment type of an extraction payload.
///
/// A missing or unrecognized `type` deliberately falls back to
/// [`EmploymentType::Fulltime`]; the validator separately reports type
/// strings outside the accepted literal set, so the fallback is never
/// silent for genuinely unknown values.
pub fn detect_employment_type(data: &ExtractedJobData) -> EmploymentType {
    let raw = data.employment_type.as_deref().unwrap_or("").trim();
    if DISPATCH_TYPES.iter().any(|dt| raw.contains(dt)) {
        EmploymentType::Dispatch
    } else {
        EmploymentType::Fulltime
    }
}

/// Fields that only apply to dispatch postings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchFields {
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
}

/// Fields that only apply to fulltime postings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulltimeFields {
    /// Employer company name
    pub company_name: Option<String>,
    /// Industry
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
    /// Annual holiday count as text
    pub annual_holidays: Option<String>,
    /// Probation period
    pub probation_period: Option<String>,
    /// Conditions during probation
    pub probation_details: Option<String>,
    /// Appeal points
    pub appeal_points: Option<String>,
    /// Welcome-but-not-required skills
    pub welcome_requirements: Vec<String>,
}

/// Exactly one variant block is authoritative per posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "lowercase")]
pub enum VariantFields {
    /// Dispatch-specific subset
    Dispatch(DispatchFields),

    /// Fulltime-specific subset
    Fulltime(FulltimeFields),
}

impl VariantFields {
    /// The employment type this block belongs to
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            VariantFields::Dispatch(_) => EmploymentType::Dispatch,
            VariantFields::Fulltime(_) => EmploymentType::Fulltime,
        }
    }
}

/// Project the dispatch-specific subset out of a flat payload.
///
/// An all-`None` projection is valid and means no variant-specific data
/// was present in the document.
pub fn extract_dispatch_fields(data: &ExtractedJobData) -> DispatchFields {
    DispatchFields {
        client_company_name: data.client_company_name.clone(),
        training_period: data.training_period.clone(),
        training_salary: data.training_salary.clone(),
        actual_work_hours: data.actual_work_hours.clone(),
        work_days_per_week: data.work_days_per_week.clone(),
        end_date: data.end_date.clone(),
        nail_policy: data.nail_policy.clone(),
        shift_notes: data.shift_notes.clone(),
        general_notes: data.general_notes.clone(),
    }
}

/// Project the fulltime-specific subset out of a flat payload
pub fn extract_fulltime_fields(data: &ExtractedJobData) -> FulltimeFields {
    FulltimeFields {
        company_name: data.company_name.clone(),
        industry: data.industry.clone(),
        company_overview: data.company_overview.clone(),
        company_size: data.company_size.clone(),
        annual_salary_min: data.annual_salary_min,
        annual_salary_max: data.annual_salary_max,
        overtime_hours: data.overtime_hours.clone(),
        annual_holidays: data.annual_holidays.clone(),
        probation_period: data.probation_period.clone(),
        probation_details: data.probation_details.clone(),
        appeal_points: data.appeal_points.clone(),
        welcome_requirements: data.welcome_requirements.clone(),
    }
}

/// Route a flat payload into its employment-type variant.
///
/// The variant columns of the returned `data` are cleared so the variant
/// block is the only place that data lives.
pub fn route(data: ExtractedJobData) -> RoutedJob {
    let employment_type = detect_employment_type(&data);
    let variant = match employment_type {
        EmploymentType::Dispatch => VariantFields::Dispatch(extract_dispatch_fields(&data)),
        EmploymentType::Fulltime => VariantFields::Fulltime(extract_fulltime_fields(&data)),
    };

    let mut data = data;
    clear_variant_columns(&mut data);

    RoutedJob { data, variant }
}

/// Merge a routed posting back into the flat payload shape.
///
/// Inverse of [`route`] for the kept variant; used where a consumer (the
/// validator at publish time) expects the flat column layout.
pub fn unroute(routed: &RoutedJob) -> ExtractedJobData {
    let mut data = routed.data.clone();
    match &routed.variant {
        VariantFields::Dispatch(d) => {
            data.client_company_name = d.client_company_name.clone();
            data.training_period = d.training_period.clone();
            data.training_salary = d.training_salary.clone();
            data.actual_work_hours = d.actual_work_hours.clone();
            data.work_days_per_week = d.work_days_per_week.clone();
            data.end_date = d.end_date.clone();
            data.nail_policy = d.nail_policy.clone();
            data.shift_notes = d.shift_notes.clone();
            data.general_notes = d.general_notes.clone();
        }
        VariantFields::Fulltime(f) => {
            data.company_name = f.company_name.clone();
            data.industry = f.industry.clone();
            data.company_overview = f.company_overview.clone();
            data.company_size = f.company_size.clone();
            data.annual_salary_min = f.annual_salary_min;
            data.annual_salary_max = f.annual_salary_max;
            data.overtime_hours = f.overtime_hours.clone();
            data.annual_holidays = f.annual_holidays.clone();
            data.probation_period = f.probation_period.clone();
            data.probation_details = f.probation_details.clone();
            data.appeal_points = f.appeal_points.clone();
            data.welcome_requirements = f.welcome_requirements.clone();
        }
    }
    data
}

fn clear_variant_columns(data: &mut ExtractedJobData) {
    data.client_company_name = None;
    data.training_period = None;
    data.training_salary = None;
    data.actual_work_hours = None;
    data.work_days_per_week = None;
    data.end_date = None;
    data.nail_policy = None;
    data.shift_notes = None;
    data.general_notes = None;

    data.company_name = None;
    data.industry = None;
    data.company_overview = None;
    data.company_size = None;
    data.annual_salary_min = None;
    data.annual_salary_max = None;
    data.overtime_hours = None;
    data.annual_holidays = None;
    data.probation_period = None;
    data.probation_details = None;
    data.appeal_points = None;
    data.welcome_requirements = Vec::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_type(t: Option<&str>) -> ExtractedJobData {
        ExtractedJobData {
            employment_type: t.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatch_synonyms() {
        for t in ["派遣", "紹介予定派遣", "派遣社員", "一般派遣スタッフ"] {
            assert_eq!(
                detect_employment_type(&with_type(Some(t))),
                EmploymentType::Dispatch,
                "type {t} should be dispatch"
            );
        }
    }

    #[test]
    fn test_fulltime_and_fallbacks() {
        for t in [Some("正社員"), Some("契約社員"), Some("アルバイト"), None] {
            assert_eq!(detect_employment_type(&with_type(t)), EmploymentType::Fulltime);
        }
    }

    #[test]
    fn test_route_dispatch_clears_fulltime_columns() {
        let data = ExtractedJobData {
            employment_type: Some("派遣".to_string()),
            client_company_name: Some("大手通信企業".to_string()),
            annual_salary_min: Some(400),
            ..Default::default()
        };
        let routed = route(data);

        match &routed.variant {
            VariantFields::Dispatch(d) => {
                assert_eq!(d.client_company_name.as_deref(), Some("大手通信企業"));
            }
            _ => panic!("expected dispatch variant"),
        }
        // Fulltime data present on a dispatch payload is dropped at routing
        assert!(routed.data.annual_salary_min.is_none());
        assert!(routed.data.client_company_name.is_none());
    }

    #[test]
    fn test_route_fulltime_keeps_salary_range() {
        let data = ExtractedJobData {
            employment_type: Some("正社員".to_string()),
            annual_salary_min: Some(400),
            annual_salary_max: Some(600),
            ..Default::default()
        };
        let routed = route(data);

        match &routed.variant {
            VariantFields::Fulltime(f) => {
                assert_eq!(f.annual_salary_min, Some(400));
                assert_eq!(f.annual_salary_max, Some(600));
            }
            _ => panic!("expected fulltime variant"),
        }
    }

    #[test]
    fn test_unroute_restores_variant_columns() {
        let data = ExtractedJobData {
            employment_type: Some("正社員".to_string()),
            title: Some("エンジニア募集".to_string()),
            annual_salary_min: Some(400),
            annual_salary_max: Some(600),
            ..Default::default()
        };
        let routed = route(data.clone());
        assert_eq!(unroute(&routed), data);
    }

    #[test]
    fn test_empty_projection_is_valid() {
        let routed = route(with_type(Some("派遣")));
        assert_eq!(
            routed.variant,
            VariantFields::Dispatch(DispatchFields::default())
        );
    }
}
