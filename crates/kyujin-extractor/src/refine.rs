//! Operator-driven refinement support
//!
//! Resolves a free-text operator instruction ("時給を1500円にして" etc.)
//! to the set of payload fields a refinement may touch, applies a
//! proposed change to only those fields, and guards against edits that
//! blank required fields or move numeric values implausibly far.

use kyujin_domain::ExtractedJobData;

/// Synonyms an operator may use to name a payload field
const FIELD_SYNONYMS: &[(&str, &[&str])] = &[
    ("title", &["タイトル", "求人タイトル", "仕事名", "お仕事名", "件名"]),
    ("description", &["仕事内容", "業務内容", "職務内容", "仕事の詳細", "詳細"]),
    ("requirements", &["応募資格", "条件", "応募条件", "資格", "要件", "必須要件", "必須条件"]),
    ("welcome_requirements", &["歓迎要件", "歓迎条件", "歓迎スキル", "歓迎経験", "want"]),
    ("working_hours", &["勤務時間", "労働時間", "シフト", "時間"]),
    ("holidays", &["休日", "休暇", "休み"]),
    ("benefits", &["福利厚生", "待遇", "福利"]),
    ("period", &["雇用期間", "期間", "勤続期間"]),
    ("start_date", &["就業開始時期", "開始時期", "開始日"]),
    ("salary_type", &["給与形態", "給与タイプ"]),
    ("hourly_wage", &["時給", "時間給"]),
    ("salary_description", &["給与詳細", "給与の詳細", "賃金詳細"]),
    ("raise_info", &["昇給", "昇給制度"]),
    ("bonus_info", &["賞与", "ボーナス"]),
    ("commute_allowance", &["交通費", "通勤手当", "通勤費"]),
    ("nearest_station", &["最寄駅", "最寄り駅", "駅"]),
    ("location_notes", &["勤務地備考", "勤務地", "場所", "ロケーション"]),
    ("workplace_name", &["勤務先名", "会社名", "企業名"]),
    ("workplace_address", &["勤務地住所", "住所"]),
    ("workplace_access", &["アクセス", "アクセス方法"]),
    ("selection_process", &["選考プロセス", "選考", "応募フロー"]),
    ("attire_type", &["服装", "服装規定"]),
    ("hair_style", &["髪型", "ヘアスタイル"]),
    ("attire", &["服装・髪型", "服装髪型"]),
    ("tags", &["タグ", "特徴", "キーワード"]),
    ("job_category_detail", &["詳細職種名", "職種詳細"]),
];

/// Keywords that open up a whole field group at once
const CATEGORY_FIELD_MAP: &[(&str, &[&str])] = &[
    (
        "給与",
        &[
            "salary_type",
            "hourly_wage",
            "salary_description",
            "raise_info",
            "bonus_info",
            "commute_allowance",
            "salary",
        ],
    ),
    ("時給", &["hourly_wage", "salary_type"]),
    ("賃金", &["hourly_wage", "salary_description", "salary_type"]),
    ("勤務地", &["nearest_station", "location_notes", "workplace_address", "workplace_access"]),
    ("勤務先", &["workplace_name", "workplace_address", "workplace_access"]),
    ("アクセス", &["nearest_station", "location_notes", "workplace_access"]),
    ("交通", &["nearest_station", "location_notes", "commute_allowance"]),
];

/// Fields that must never be blanked by a refinement
const REQUIRED_FIELDS: [&str; 4] = ["title", "area", "salary", "category"];

/// Resolve an operator instruction to the fields it names.
///
/// Category keywords resolve before individual synonyms; the result is
/// deduplicated in resolution order. An empty result means the
/// instruction named no recognizable field and the refinement model has
/// to interpret it itself.
pub fn resolve_target_fields(message: &str) -> Vec<&'static str> {
    let normalized = message.to_lowercase();
    let mut fields: Vec<&'static str> = Vec::new();

    for (keyword, mapped) in CATEGORY_FIELD_MAP {
        if normalized.contains(&keyword.to_lowercase()) {
            for field in *mapped {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }
        }
    }

    for (field, synonyms) in FIELD_SYNONYMS {
        if fields.contains(field) {
            continue;
        }
        if synonyms.iter().any(|s| normalized.contains(&s.to_lowercase())) {
            fields.push(*field);
        }
    }

    fields
}

/// Check a proposed refinement against the guard rules.
///
/// Returns warnings; any warning means the refinement must be rejected
/// and surfaced to the operator instead of applied.
pub fn check_refinement(
    current: &ExtractedJobData,
    proposed: &ExtractedJobData,
    changed_fields: &[&str],
) -> Vec<String> {
    let mut warnings = Vec::new();

    for field in changed_fields {
        if REQUIRED_FIELDS.contains(field) {
            let blanked = match *field {
                "title" => !ExtractedJobData::has_text(&proposed.title),
                "area" => !ExtractedJobData::has_text(&proposed.area),
                "salary" => !ExtractedJobData::has_text(&proposed.salary),
                "category" => !ExtractedJobData::has_text(&proposed.category),
                _ => false,
            };
            if blanked {
                warnings.push(format!("{field}は必須フィールドです。空値にすることはできません。"));
            }
        }

        if *field == "hourly_wage" {
            if let (Some(original), Some(new_wage)) = (current.hourly_wage, proposed.hourly_wage) {
                if original > 0 {
                    let diff = original.abs_diff(new_wage) as f64;
                    let percent = diff / original as f64 * 100.0;
                    if percent > 30.0 {
                        warnings.push(format!(
                            "時給の変更が大きくなっています（{}%変動）",
                            percent.round() as u32
                        ));
                    }
                }
            }
        }
    }

    warnings
}

/// Merge a proposed refinement into the current payload, touching only
/// the listed fields. Unknown field names are ignored.
pub fn apply_refinement(
    current: &ExtractedJobData,
    proposed: &ExtractedJobData,
    target_fields: &[&str],
) -> ExtractedJobData {
    let mut merged = current.clone();

    for field in target_fields {
        match *field {
            "title" => merged.title = proposed.title.clone(),
            "area" => merged.area = proposed.area.clone(),
            "salary" => merged.salary = proposed.salary.clone(),
            "category" => merged.category = proposed.category.clone(),
            "description" => merged.description = proposed.description.clone(),
            "requirements" => merged.requirements = proposed.requirements.clone(),
            "welcome_requirements" => {
                merged.welcome_requirements = proposed.welcome_requirements.clone()
            }
            "working_hours" => merged.working_hours = proposed.working_hours.clone(),
            "holidays" => merged.holidays = proposed.holidays.clone(),
            "benefits" => merged.benefits = proposed.benefits.clone(),
            "tags" => merged.tags = proposed.tags.clone(),
            "period" => merged.period = proposed.period.clone(),
            "start_date" => merged.start_date = proposed.start_date.clone(),
            "salary_type" => merged.salary_type = proposed.salary_type.clone(),
            "hourly_wage" => merged.hourly_wage = proposed.hourly_wage,
            "salary_description" => merged.salary_description = proposed.salary_description.clone(),
            "raise_info" => merged.raise_info = proposed.raise_info.clone(),
            "bonus_info" => merged.bonus_info = proposed.bonus_info.clone(),
            "commute_allowance" => merged.commute_allowance = proposed.commute_allowance.clone(),
            "nearest_station" => merged.nearest_station = proposed.nearest_station.clone(),
            "location_notes" => merged.location_notes = proposed.location_notes.clone(),
            "workplace_name" => merged.workplace_name = proposed.workplace_name.clone(),
            "workplace_address" => merged.workplace_address = proposed.workplace_address.clone(),
            "workplace_access" => merged.workplace_access = proposed.workplace_access.clone(),
            "selection_process" => merged.selection_process = proposed.selection_process.clone(),
            "attire" => merged.attire = proposed.attire.clone(),
            "attire_type" => merged.attire_type = proposed.attire_type.clone(),
            "hair_style" => merged.hair_style = proposed.hair_style.clone(),
            "job_category_detail" => {
                merged.job_category_detail = proposed.job_category_detail.clone()
            }
            _ => {}
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_single_field() {
        assert_eq!(resolve_target_fields("タイトルを魅力的にして"), vec!["title"]);
        assert_eq!(resolve_target_fields("賞与の情報を追記"), vec!["bonus_info"]);
    }

    #[test]
    fn test_resolve_category_keyword_expands_group() {
        let fields = resolve_target_fields("給与を見直して");
        assert_eq!(
            fields,
            vec![
                "salary_type",
                "hourly_wage",
                "salary_description",
                "raise_info",
                "bonus_info",
                "commute_allowance",
                "salary",
            ]
        );
    }

    #[test]
    fn test_resolve_dedups_category_and_synonym() {
        // 時給 triggers both the category map and the field synonym
        let fields = resolve_target_fields("時給を上げて");
        assert_eq!(fields, vec!["hourly_wage", "salary_type"]);
    }

    #[test]
    fn test_resolve_unrecognized_instruction_is_empty() {
        assert!(resolve_target_fields("もっと良くして").is_empty());
    }

    #[test]
    fn test_guard_rejects_blanked_required_field() {
        let current = ExtractedJobData {
            title: Some("事務スタッフ".to_string()),
            ..Default::default()
        };
        let proposed = ExtractedJobData {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        let warnings = check_refinement(&current, &proposed, &["title"]);
        assert_eq!(warnings, vec!["titleは必須フィールドです。空値にすることはできません。"]);
    }

    #[test]
    fn test_guard_flags_large_hourly_wage_change() {
        let current = ExtractedJobData {
            hourly_wage: Some(1000),
            ..Default::default()
        };
        let proposed = ExtractedJobData {
            hourly_wage: Some(1400),
            ..Default::default()
        };
        let warnings = check_refinement(&current, &proposed, &["hourly_wage"]);
        assert_eq!(warnings, vec!["時給の変更が大きくなっています（40%変動）"]);

        let modest = ExtractedJobData {
            hourly_wage: Some(1200),
            ..Default::default()
        };
        assert!(check_refinement(&current, &modest, &["hourly_wage"]).is_empty());
    }

    #[test]
    fn test_apply_touches_only_target_fields() {
        let current = ExtractedJobData {
            title: Some("旧タイトル".to_string()),
            description: Some("旧説明".to_string()),
            hourly_wage: Some(1200),
            ..Default::default()
        };
        let proposed = ExtractedJobData {
            title: Some("新タイトル".to_string()),
            description: Some("新説明".to_string()),
            hourly_wage: Some(1300),
            ..Default::default()
        };

        let merged = apply_refinement(&current, &proposed, &["title"]);
        assert_eq!(merged.title.as_deref(), Some("新タイトル"));
        assert_eq!(merged.description.as_deref(), Some("旧説明"));
        assert_eq!(merged.hourly_wage, Some(1200));
    }

    #[test]
    fn test_apply_ignores_unknown_field_names() {
        let current = ExtractedJobData::default();
        let merged = apply_refinement(&current, &ExtractedJobData::default(), &["no_such_field"]);
        assert_eq!(merged, current);
    }
}
