//! Reconciliation of extracted free-text tags against the master lists

use crate::hierarchy;
use crate::taxonomy::MasterTaxonomy;
use kyujin_domain::{ExtractedJobData, TagMappingResult, TagMappingSets, TagMatch};

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Classify one extracted tag against a master list.
///
/// Exact equality (after trim + lowercase) wins; otherwise containment in
/// either direction counts as similar, with the master label offered as
/// the suggestion. Anything else is a taxonomy-extension candidate.
pub fn match_tag(tag: &str, master: &[String]) -> TagMappingResult {
    let needle = normalize(tag);

    let mut matched = TagMatch::New;
    let mut master_label: Option<&str> = None;

    for label in master {
        let candidate = normalize(label);
        if candidate == needle {
            matched = TagMatch::Exact;
            master_label = Some(label);
            break;
        }
        if matched == TagMatch::New
            && !needle.is_empty()
            && (candidate.contains(&needle) || needle.contains(&candidate))
        {
            matched = TagMatch::Similar;
            master_label = Some(label);
        }
    }

    let (main_category, sub_category) = master_label
        .and_then(hierarchy::find_category_by_label)
        .map(|(main, sub)| (Some(main), Some(sub.to_string())))
        .unwrap_or((None, None));

    TagMappingResult {
        original: tag.to_string(),
        matched,
        suggestion: match matched {
            TagMatch::Similar => master_label.map(String::from),
            _ => None,
        },
        main_category,
        sub_category,
    }
}

/// Classify a list of extracted tags against a master list
pub fn match_tags(tags: &[String], master: &[String]) -> Vec<TagMappingResult> {
    tags.iter().map(|t| match_tag(t, master)).collect()
}

/// Reconcile every vocabulary-controlled field of a payload against the
/// batch's taxonomy snapshot
pub fn reconcile(data: &ExtractedJobData, taxonomy: &MasterTaxonomy) -> TagMappingSets {
    TagMappingSets {
        tags: match_tags(&data.tags, &taxonomy.tags),
        benefits: match_tags(&data.benefits, &taxonomy.benefits),
        holidays: match_tags(&data.holidays, &taxonomy.holidays),
        requirements: match_tags(&data.requirements, &taxonomy.requirements),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyujin_domain::MainCategory;

    fn master() -> Vec<String> {
        vec!["土日祝休み".to_string(), "完全週休2日制".to_string()]
    }

    #[test]
    fn test_exact_match() {
        let result = match_tag("土日祝休み", &master());
        assert_eq!(result.matched, TagMatch::Exact);
        assert_eq!(result.suggestion, None);
        assert_eq!(result.main_category, Some(MainCategory::Holidays));
        assert_eq!(result.sub_category.as_deref(), Some("週休制度"));
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let master = vec!["Excelスキル".to_string()];
        let result = match_tag(" excelスキル ", &master);
        assert_eq!(result.matched, TagMatch::Exact);
    }

    #[test]
    fn test_similar_match_by_containment() {
        // extracted text contained in a master label
        let result = match_tag("土日祝休", &master());
        assert_eq!(result.matched, TagMatch::Similar);
        assert_eq!(result.suggestion.as_deref(), Some("土日祝休み"));

        // master label contained in the extracted text
        let result = match_tag("完全週休2日制です", &master());
        assert_eq!(result.matched, TagMatch::Similar);
        assert_eq!(result.suggestion.as_deref(), Some("完全週休2日制"));
    }

    #[test]
    fn test_new_tag() {
        let result = match_tag("社員食堂あり", &master());
        assert_eq!(result.matched, TagMatch::New);
        assert_eq!(result.suggestion, None);
        assert_eq!(result.main_category, None);
    }

    #[test]
    fn test_exact_beats_earlier_similar() {
        let master = vec!["週休2日制".to_string(), "完全週休2日制".to_string()];
        let result = match_tag("完全週休2日制", &master);
        assert_eq!(result.matched, TagMatch::Exact);
    }

    #[test]
    fn test_reconcile_covers_all_fields() {
        let data = ExtractedJobData {
            tags: vec!["急募".to_string()],
            benefits: vec!["社会保険完備".to_string()],
            holidays: vec!["土日祝休み".to_string()],
            requirements: vec!["未経験OK".to_string()],
            ..Default::default()
        };
        let sets = reconcile(&data, &MasterTaxonomy::default());
        assert_eq!(sets.tags[0].matched, TagMatch::Exact);
        assert_eq!(sets.benefits[0].matched, TagMatch::Exact);
        assert_eq!(sets.holidays[0].matched, TagMatch::Exact);
        assert_eq!(sets.requirements[0].matched, TagMatch::Exact);
    }
}
