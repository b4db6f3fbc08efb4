//! Business-rule validation for extracted postings

use crate::ValidationConfig;
use kyujin_domain::{detect_employment_type, EmploymentType, ExtractedJobData, ValidationResult};

/// The employment-type literals a posting may carry
const VALID_TYPES: [&str; 4] = ["正社員", "派遣", "紹介予定派遣", "契約社員"];

/// Validates extracted postings against the configured business rules
pub struct JobValidator {
    config: ValidationConfig,
}

impl JobValidator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default bounds
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate one extracted payload.
    ///
    /// Total over arbitrary input: malformed or missing values are
    /// reported as diagnostics, never rejected at the type level. An
    /// empty result means the payload passed every rule.
    pub fn validate(&self, data: &ExtractedJobData) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        if !ExtractedJobData::has_text(&data.title) {
            results.push(ValidationResult::error("title", "タイトルは必須です"));
        }

        if let Some(employment_type) = data.employment_type.as_deref().filter(|t| !t.is_empty()) {
            if !VALID_TYPES.contains(&employment_type) {
                results.push(ValidationResult::error(
                    "type",
                    format!("雇用形態は {} のいずれかである必要があります", VALID_TYPES.join("/")),
                ));
            }
        }

        if let Some(hourly_wage) = data.hourly_wage {
            if hourly_wage < self.config.hourly_wage_min || hourly_wage > self.config.hourly_wage_max {
                results.push(ValidationResult::error(
                    "hourly_wage",
                    format!(
                        "時給は{}〜{}の範囲である必要があります",
                        self.config.hourly_wage_min, self.config.hourly_wage_max
                    ),
                ));
            }
        }

        if let Some(min) = data.annual_salary_min {
            if min < self.config.annual_salary_floor || min > self.config.annual_salary_ceiling {
                results.push(ValidationResult::error(
                    "annual_salary_min",
                    format!(
                        "年収下限は{}〜{}万円の範囲である必要があります",
                        self.config.annual_salary_floor, self.config.annual_salary_ceiling
                    ),
                ));
            }
        }

        if let Some(max) = data.annual_salary_max {
            match data.annual_salary_min {
                Some(min) => {
                    if max < min {
                        results.push(ValidationResult::error(
                            "annual_salary_max",
                            "年収上限は年収下限以上である必要があります",
                        ));
                    }
                }
                None => {
                    results.push(ValidationResult::error(
                        "annual_salary_min",
                        "年収上限がある場合、年収下限も必要です",
                    ));
                }
            }
        }

        if let Some(holidays) = parse_annual_holidays(&data.annual_holidays) {
            if holidays > self.config.annual_holidays_max {
                results.push(ValidationResult::error(
                    "annual_holidays",
                    format!("年間休日は0〜{}の範囲である必要があります", self.config.annual_holidays_max),
                ));
            }
        }

        match detect_employment_type(data) {
            EmploymentType::Dispatch if data.hourly_wage.is_none() => {
                results.push(ValidationResult::warning(
                    "hourly_wage",
                    "派遣求人には時給の入力を推奨します",
                ));
            }
            EmploymentType::Fulltime if data.annual_salary_min.is_none() => {
                results.push(ValidationResult::warning(
                    "annual_salary_min",
                    "正社員求人には年収の入力を推奨します",
                ));
            }
            _ => {}
        }

        results
    }
}

/// Leading numeric prefix of the annual-holidays text, when parseable
fn parse_annual_holidays(value: &Option<String>) -> Option<u32> {
    let text = value.as_deref()?.trim();
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Validate with default bounds
pub fn validate_extracted_job_data(data: &ExtractedJobData) -> Vec<ValidationResult> {
    JobValidator::default_config().validate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyujin_domain::ValidationLevel;

    fn find<'a>(
        results: &'a [ValidationResult],
        field: &str,
        level: ValidationLevel,
    ) -> Option<&'a ValidationResult> {
        results.iter().find(|r| r.field == field && r.level == level)
    }

    fn errors(results: &[ValidationResult]) -> Vec<&ValidationResult> {
        results.iter().filter(|r| r.level == ValidationLevel::Error).collect()
    }

    fn data(title: Option<&str>, employment_type: Option<&str>) -> ExtractedJobData {
        ExtractedJobData {
            title: title.map(String::from),
            employment_type: employment_type.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_title_is_error() {
        let results = validate_extracted_job_data(&data(None, Some("派遣")));
        let error = find(&results, "title", ValidationLevel::Error).unwrap();
        assert_eq!(error.message, "タイトルは必須です");

        let results = validate_extracted_job_data(&data(Some("  "), Some("派遣")));
        assert!(find(&results, "title", ValidationLevel::Error).is_some());
    }

    #[test]
    fn test_invalid_type_is_error() {
        let results = validate_extracted_job_data(&data(Some("テスト"), Some("不明")));
        let error = find(&results, "type", ValidationLevel::Error).unwrap();
        assert_eq!(
            error.message,
            "雇用形態は 正社員/派遣/紹介予定派遣/契約社員 のいずれかである必要があります"
        );
    }

    #[test]
    fn test_valid_types_accepted() {
        for t in VALID_TYPES {
            let results = validate_extracted_job_data(&data(Some("テスト"), Some(t)));
            assert!(find(&results, "type", ValidationLevel::Error).is_none(), "type {t}");
        }
    }

    #[test]
    fn test_hourly_wage_range() {
        let mut payload = data(Some("テスト"), Some("派遣"));
        payload.hourly_wage = Some(100);
        let results = validate_extracted_job_data(&payload);
        let error = find(&results, "hourly_wage", ValidationLevel::Error).unwrap();
        assert_eq!(error.message, "時給は800〜5000の範囲である必要があります");

        payload.hourly_wage = Some(1500);
        let results = validate_extracted_job_data(&payload);
        assert!(find(&results, "hourly_wage", ValidationLevel::Error).is_none());
    }

    #[test]
    fn test_annual_salary_min_range() {
        let mut payload = data(Some("テスト"), Some("正社員"));
        payload.annual_salary_min = Some(50);
        let results = validate_extracted_job_data(&payload);
        let error = find(&results, "annual_salary_min", ValidationLevel::Error).unwrap();
        assert_eq!(error.message, "年収下限は200〜2000万円の範囲である必要があります");
    }

    #[test]
    fn test_max_below_min_is_error() {
        let mut payload = data(Some("テスト"), Some("正社員"));
        payload.annual_salary_min = Some(600);
        payload.annual_salary_max = Some(400);
        let results = validate_extracted_job_data(&payload);
        let error = find(&results, "annual_salary_max", ValidationLevel::Error).unwrap();
        assert_eq!(error.message, "年収上限は年収下限以上である必要があります");
    }

    #[test]
    fn test_max_without_min_is_error() {
        let mut payload = data(Some("テスト"), Some("正社員"));
        payload.annual_salary_max = Some(600);
        let results = validate_extracted_job_data(&payload);
        let error = find(&results, "annual_salary_min", ValidationLevel::Error).unwrap();
        assert_eq!(error.message, "年収上限がある場合、年収下限も必要です");
    }

    #[test]
    fn test_annual_holidays_range() {
        let mut payload = data(Some("テスト"), Some("正社員"));
        payload.annual_holidays = Some("400".to_string());
        let results = validate_extracted_job_data(&payload);
        let error = find(&results, "annual_holidays", ValidationLevel::Error).unwrap();
        assert_eq!(error.message, "年間休日は0〜365の範囲である必要があります");

        // 数値で始まらないテキストは範囲チェックの対象外
        payload.annual_holidays = Some("たくさん".to_string());
        let results = validate_extracted_job_data(&payload);
        assert!(find(&results, "annual_holidays", ValidationLevel::Error).is_none());
    }

    #[test]
    fn test_dispatch_without_hourly_wage_warns() {
        let results = validate_extracted_job_data(&data(Some("テスト"), Some("派遣")));
        let warning = find(&results, "hourly_wage", ValidationLevel::Warning).unwrap();
        assert_eq!(warning.message, "派遣求人には時給の入力を推奨します");
    }

    #[test]
    fn test_fulltime_without_annual_salary_warns() {
        let results = validate_extracted_job_data(&data(Some("テスト"), Some("正社員")));
        let warning = find(&results, "annual_salary_min", ValidationLevel::Warning).unwrap();
        assert_eq!(warning.message, "正社員求人には年収の入力を推奨します");
    }

    #[test]
    fn test_valid_dispatch_has_no_errors() {
        let mut payload = data(Some("【高時給】テスト求人"), Some("派遣"));
        payload.area = Some("東京都 港区".to_string());
        payload.hourly_wage = Some(1500);
        payload.salary = Some("時給1,500円".to_string());
        assert!(errors(&validate_extracted_job_data(&payload)).is_empty());
    }

    #[test]
    fn test_valid_fulltime_has_no_errors() {
        let mut payload = data(Some("エンジニア募集"), Some("正社員"));
        payload.area = Some("東京都 渋谷区".to_string());
        payload.annual_salary_min = Some(400);
        payload.annual_salary_max = Some(600);
        payload.annual_holidays = Some("125".to_string());
        assert!(errors(&validate_extracted_job_data(&payload)).is_empty());
    }
}
