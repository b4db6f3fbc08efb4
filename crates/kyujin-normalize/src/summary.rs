//! 求人ヘッダー表示用の要約ヘルパー
//!
//! 一覧・詳細ヘッダーに出す「年間休日」「休日パターン」「主要福利厚生」
//! 「月給目安」などのラベルを、抽出済みフィールドから純関数で導出する。

use once_cell::sync::Lazy;
use regex::Regex;

/// 優先的に拾う福利厚生(この順)
static BENEFIT_PRIORITY_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("交通費", Regex::new(r"(交通費|通勤手当|通勤費)").unwrap()),
        ("住宅", Regex::new(r"(住宅手当|社宅|寮|家賃補助)").unwrap()),
        ("社割", Regex::new(r"(社割|社員割引|従業員割引)").unwrap()),
        ("研修", Regex::new(r"(研修|教育制度|OJT|トレーニング)").unwrap()),
        ("産育休", Regex::new(r"(産休|育休|産前|産後|育児休暇|育児支援)").unwrap()),
        ("資格支援", Regex::new(r"(資格取得|資格支援|受験費用補助)").unwrap()),
        ("社会保険", Regex::new(r"(社会保険|各種保険|厚生年金|雇用保険|労災保険)").unwrap()),
    ]
});

static HOLIDAY_PATTERN_PRIORITY: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["土日祝休み?", "完全週休2日制?", "週休2日制?", "シフト制?", "4週8休"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static HOLIDAY_NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(有給|夏季|年末年始|GW|慶弔|産前|産後|育児|介護)").unwrap());

static LIST_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\n\r]+|[、,，]|\s{2,}|[・●]").unwrap());
static LIST_BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[・●■\-*]+\s*").unwrap());

/// 保存形態の揺れ(JSON配列文字列/区切り文字混在)を吸収してリスト化する
pub fn parse_list_field(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }

    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(value) {
        return items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s.trim().to_string()),
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect();
    }

    LIST_DELIMITER_RE
        .split(value)
        .map(|item| LIST_BULLET_RE.replace(item, "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn normalize_string_list(values: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// 福利厚生リストから表示する上位 `max` 件を優先規則順に選ぶ
pub fn pick_core_benefits(benefits: &[String], max: usize) -> Vec<String> {
    let normalized = normalize_string_list(benefits);
    let mut selected: Vec<String> = Vec::new();

    for (_, pattern) in BENEFIT_PRIORITY_RULES.iter() {
        if selected.len() >= max {
            return selected;
        }
        if let Some(matched) =
            normalized.iter().find(|b| !selected.contains(b) && pattern.is_match(b))
        {
            selected.push(matched.clone());
        }
    }

    for benefit in normalized {
        if selected.len() >= max {
            break;
        }
        if !selected.contains(&benefit) {
            selected.push(benefit);
        }
    }
    selected
}

/// 休日リストから代表的な休日パターンを1つ選ぶ
pub fn infer_holiday_pattern(holidays: &[String]) -> String {
    for pattern in HOLIDAY_PATTERN_PRIORITY.iter() {
        if let Some(matched) = holidays.iter().find(|h| pattern.is_match(h)) {
            return matched.clone();
        }
    }
    holidays.first().cloned().unwrap_or_default()
}

/// 休日リストから補足(有給・長期休暇など)を最大 `max` 件拾う
pub fn infer_holiday_notes(holidays: &[String], max: usize) -> String {
    let notes: Vec<String> =
        holidays.iter().filter(|h| HOLIDAY_NOTE_RE.is_match(h)).cloned().collect();
    normalize_string_list(&notes).into_iter().take(max).collect::<Vec<_>>().join(" / ")
}

/// 月給表示ラベル。給与テキストが月給表記ならそれを優先し、
/// 無ければ年収レンジ(万円)から月給目安を計算する。
pub fn monthly_salary_label(
    salary: Option<&str>,
    annual_salary_min: Option<u32>,
    annual_salary_max: Option<u32>,
) -> String {
    if let Some(salary) = salary {
        if salary.contains("月給") {
            return salary.to_string();
        }
    }

    let monthly = |annual: u32| (f64::from(annual) / 12.0 * 10.0).floor() / 10.0;
    match (annual_salary_min, annual_salary_max) {
        (Some(min), Some(max)) => format!("月給目安 {}万〜{}万円", monthly(min), monthly(max)),
        (Some(min), None) => format!("月給目安 {}万円〜", monthly(min)),
        (None, Some(max)) => format!("月給目安 〜{}万円", monthly(max)),
        (None, None) => String::new(),
    }
}

/// ヘッダー要約の入力
#[derive(Debug, Clone, Default)]
pub struct HeaderSummaryInput {
    /// 休日リスト
    pub holidays: Vec<String>,
    /// 福利厚生リスト
    pub benefits: Vec<String>,
    /// 年間休日(数値または「125日」のようなテキスト)
    pub annual_holidays: Option<String>,
    /// 勤務時間テキスト
    pub working_hours: Option<String>,
    /// 平均残業時間テキスト
    pub overtime_hours: Option<String>,
    /// 給与表示テキスト
    pub salary: Option<String>,
    /// 年収下限(万円)
    pub annual_salary_min: Option<u32>,
    /// 年収上限(万円)
    pub annual_salary_max: Option<u32>,
    /// 勤務地表示テキスト
    pub display_area_text: Option<String>,
}

/// ヘッダー要約
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderSummary {
    /// 「年間休日125日」形式のラベル(無ければ空)
    pub annual_holidays_label: String,
    /// 代表的な休日パターン
    pub holiday_pattern: String,
    /// 休暇の補足(" / " 連結、最大2件)
    pub holiday_notes: String,
    /// 主要福利厚生(最大3件)
    pub core_benefits: Vec<String>,
    /// 勤務地表示テキスト
    pub display_area_text: String,
    /// 勤務時間テキスト
    pub working_hours: String,
    /// 「残業 10時間」形式のラベル(無ければ空)
    pub overtime_label: String,
    /// 月給表示ラベル
    pub monthly_salary_label: String,
}

/// 抽出済みフィールドからヘッダー要約を組み立てる
pub fn build_header_summary(input: &HeaderSummaryInput) -> HeaderSummary {
    let holidays = normalize_string_list(&input.holidays);

    let annual_holidays_label = input
        .annual_holidays
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t.contains('日') {
                format!("年間休日{t}")
            } else {
                format!("年間休日{t}日")
            }
        })
        .unwrap_or_default();

    let overtime_label = input
        .overtime_hours
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t.contains("時間") {
                format!("残業 {t}")
            } else {
                format!("残業 {t}時間")
            }
        })
        .unwrap_or_default();

    HeaderSummary {
        annual_holidays_label,
        holiday_pattern: infer_holiday_pattern(&holidays),
        holiday_notes: infer_holiday_notes(&holidays, 2),
        core_benefits: pick_core_benefits(&input.benefits, 3),
        display_area_text: input.display_area_text.as_deref().unwrap_or("").trim().to_string(),
        working_hours: input.working_hours.as_deref().unwrap_or("").trim().to_string(),
        overtime_label,
        monthly_salary_label: monthly_salary_label(
            input.salary.as_deref(),
            input.annual_salary_min,
            input.annual_salary_max,
        ),
    }
}
