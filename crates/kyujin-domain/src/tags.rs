//! Tag reconciliation results against the master taxonomy

use serde::{Deserialize, Serialize};

/// The five top-level master taxonomy categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainCategory {
    /// 働き方・条件
    WorkConditions,
    /// 休日・休暇
    Holidays,
    /// 給与・待遇
    Compensation,
    /// 応募条件
    Requirements,
    /// 募集情報
    RecruitmentInfo,
}

impl MainCategory {
    /// Stable key form used in storage and config
    pub fn as_str(&self) -> &'static str {
        match self {
            MainCategory::WorkConditions => "work_conditions",
            MainCategory::Holidays => "holidays",
            MainCategory::Compensation => "compensation",
            MainCategory::Requirements => "requirements",
            MainCategory::RecruitmentInfo => "recruitment_info",
        }
    }

    /// Japanese display label
    pub fn label(&self) -> &'static str {
        match self {
            MainCategory::WorkConditions => "働き方・条件",
            MainCategory::Holidays => "休日・休暇",
            MainCategory::Compensation => "給与・待遇",
            MainCategory::Requirements => "応募条件",
            MainCategory::RecruitmentInfo => "募集情報",
        }
    }
}

/// How an extracted tag relates to the master taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatch {
    /// Identical (after trim + lowercase) to a master label or value
    Exact,

    /// One side contains the other; `suggestion` carries the master label
    Similar,

    /// No master entry resembles the tag
    New,
}

/// Reconciliation outcome for one extracted tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagMappingResult {
    /// The tag as extracted
    pub original: String,

    /// Match classification
    pub matched: TagMatch,

    /// Master label to substitute, set for `Similar` matches
    pub suggestion: Option<String>,

    /// Taxonomy position of the matched entry, when matched
    pub main_category: Option<MainCategory>,

    /// Sub-category label within the main category, when matched
    pub sub_category: Option<String>,
}

impl TagMappingResult {
    /// The label a publisher should use: the suggestion when similar,
    /// otherwise the original text.
    pub fn effective_label(&self) -> &str {
        match self.matched {
            TagMatch::Similar => self.suggestion.as_deref().unwrap_or(&self.original),
            _ => &self.original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_label() {
        let similar = TagMappingResult {
            original: "土日休".to_string(),
            matched: TagMatch::Similar,
            suggestion: Some("土日祝休み".to_string()),
            main_category: Some(MainCategory::Holidays),
            sub_category: Some("休日パターン".to_string()),
        };
        assert_eq!(similar.effective_label(), "土日祝休み");

        let new = TagMappingResult {
            original: "社員食堂あり".to_string(),
            matched: TagMatch::New,
            suggestion: None,
            main_category: None,
            sub_category: None,
        };
        assert_eq!(new.effective_label(), "社員食堂あり");
    }
}
