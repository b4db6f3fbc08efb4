//! 求人データからの訴求タグ自動生成

use kyujin_domain::{RoutedJob, VariantFields};
use once_cell::sync::Lazy;
use regex::Regex;

static NEAR_STATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"徒歩[1-5]分").unwrap());
static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9０-９]+").unwrap());

fn contains(value: &Option<String>, needle: &str) -> bool {
    value.as_deref().is_some_and(|v| v.contains(needle))
}

fn annual_holiday_count(annual_holidays: &Option<String>) -> Option<u32> {
    let text = annual_holidays.as_deref()?;
    LEADING_NUMBER_RE.find(text).and_then(|m| {
        m.as_str()
            .chars()
            .map(|c| if ('０'..='９').contains(&c) {
                char::from_u32(c as u32 - 0xfee0).unwrap_or(c)
            } else {
                c
            })
            .collect::<String>()
            .parse()
            .ok()
    })
}

/// 抽出済み求人データから訴求タグを自動生成する
pub fn generate_auto_tags(routed: &RoutedJob) -> Vec<String> {
    let data = &routed.data;
    let mut tags: Vec<&str> = Vec::new();

    if contains(&data.commute_allowance, "全額") {
        tags.push("交通費全額支給");
    } else if data
        .commute_allowance
        .as_deref()
        .is_some_and(|v| !v.trim().is_empty() && v != "なし")
    {
        tags.push("交通費支給");
    }

    if contains(&data.start_date, "即日") {
        tags.push("即日スタート");
    }

    if contains(&data.attire, "自由") || contains(&data.attire_type, "自由") {
        tags.push("服装自由");
    }

    if contains(&data.hair_style, "自由") {
        tags.push("髪型自由");
    }

    if data.requirements.iter().any(|r| r.contains("未経験")) {
        tags.push("未経験OK");
    }

    if data
        .nearest_station
        .as_deref()
        .is_some_and(|s| s.contains("徒歩") && NEAR_STATION_RE.is_match(s))
    {
        tags.push("駅チカ");
    }

    match &routed.variant {
        VariantFields::Dispatch(d) => {
            if contains(&d.nail_policy, "OK") {
                tags.push("ネイルOK");
            }
            if contains(&d.work_days_per_week, "週4") {
                tags.push("週4日OK");
            }
        }
        VariantFields::Fulltime(f) => {
            if f.overtime_hours
                .as_deref()
                .is_some_and(|o| o.contains("なし") || o == "0")
            {
                tags.push("残業なし");
            }
            if annual_holiday_count(&f.annual_holidays).is_some_and(|n| n >= 120) {
                tags.push("年間休日120日以上");
            }
        }
    }

    tags.into_iter().map(String::from).collect()
}

/// 抽出タグと自動生成タグを統合する(順序維持・重複除去)
pub fn merge_job_tags(routed: &RoutedJob) -> Vec<String> {
    let mut merged = routed.data.tags.clone();
    for tag in generate_auto_tags(routed) {
        if !merged.contains(&tag) {
            merged.push(tag);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyujin_domain::{employment::route, ExtractedJobData};

    #[test]
    fn test_dispatch_auto_tags() {
        let routed = route(ExtractedJobData {
            employment_type: Some("派遣".to_string()),
            commute_allowance: Some("交通費全額支給".to_string()),
            nail_policy: Some("ネイルOK(長さ制限あり)".to_string()),
            work_days_per_week: Some("週4〜5日".to_string()),
            nearest_station: Some("渋谷駅から徒歩3分".to_string()),
            ..Default::default()
        });
        let tags = generate_auto_tags(&routed);
        assert_eq!(tags, vec!["交通費全額支給", "駅チカ", "ネイルOK", "週4日OK"]);
    }

    #[test]
    fn test_fulltime_auto_tags() {
        let routed = route(ExtractedJobData {
            employment_type: Some("正社員".to_string()),
            overtime_hours: Some("残業ほぼなし".to_string()),
            annual_holidays: Some("125日".to_string()),
            requirements: vec!["未経験歓迎".to_string()],
            ..Default::default()
        });
        let tags = generate_auto_tags(&routed);
        assert_eq!(tags, vec!["未経験OK", "残業なし", "年間休日120日以上"]);
    }

    #[test]
    fn test_partial_commute_allowance() {
        let routed = route(ExtractedJobData {
            employment_type: Some("派遣".to_string()),
            commute_allowance: Some("規定支給".to_string()),
            ..Default::default()
        });
        assert_eq!(generate_auto_tags(&routed), vec!["交通費支給"]);

        let none = route(ExtractedJobData {
            employment_type: Some("派遣".to_string()),
            commute_allowance: Some("なし".to_string()),
            ..Default::default()
        });
        assert!(generate_auto_tags(&none).is_empty());
    }

    #[test]
    fn test_far_station_is_not_ekichika() {
        let routed = route(ExtractedJobData {
            employment_type: Some("派遣".to_string()),
            nearest_station: Some("新宿駅から徒歩15分".to_string()),
            ..Default::default()
        });
        assert!(generate_auto_tags(&routed).is_empty());
    }

    #[test]
    fn test_merge_preserves_order_and_dedups() {
        let routed = route(ExtractedJobData {
            employment_type: Some("派遣".to_string()),
            tags: vec!["急募".to_string(), "服装自由".to_string()],
            attire: Some("服装自由".to_string()),
            start_date: Some("即日スタートOK".to_string()),
            ..Default::default()
        });
        assert_eq!(merge_job_tags(&routed), vec!["急募", "服装自由", "即日スタート"]);
    }
}
