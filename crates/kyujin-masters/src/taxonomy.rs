//! Flat taxonomy snapshot used during a batch run

use crate::error::MastersError;
use crate::hierarchy;
use kyujin_domain::MainCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The flat master lists, one per taggable payload field.
///
/// A batch run snapshots one `MasterTaxonomy` up front and reuses it for
/// every document in the batch, so all drafts of a batch are reconciled
/// against the same master state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterTaxonomy {
    /// Appeal tag labels (働き方・条件 + 募集情報)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Benefit labels (給与・待遇)
    #[serde(default)]
    pub benefits: Vec<String>,

    /// Holiday labels (休日・休暇)
    #[serde(default)]
    pub holidays: Vec<String>,

    /// Requirement labels (応募条件)
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl Default for MasterTaxonomy {
    fn default() -> Self {
        let owned = |labels: Vec<&str>| labels.into_iter().map(String::from).collect();

        let mut tags: Vec<&str> = hierarchy::flat_labels(MainCategory::WorkConditions);
        tags.extend(hierarchy::flat_labels(MainCategory::RecruitmentInfo));

        Self {
            tags: owned(tags),
            benefits: owned(hierarchy::flat_labels(MainCategory::Compensation)),
            holidays: owned(hierarchy::flat_labels(MainCategory::Holidays)),
            requirements: owned(hierarchy::flat_labels(MainCategory::Requirements)),
        }
    }
}

impl MasterTaxonomy {
    /// Load a taxonomy override from a TOML file.
    ///
    /// Missing lists fall back to empty, so a file may override a single
    /// field list only when combined with [`MasterTaxonomy::default`]
    /// upstream.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, MastersError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// The master list for a named payload field, `None` for untaggable fields
    pub fn list_for_field(&self, field: &str) -> Option<&[String]> {
        match field {
            "tags" => Some(&self.tags),
            "benefits" => Some(&self.benefits),
            "holidays" => Some(&self.holidays),
            "requirements" => Some(&self.requirements),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projection() {
        let taxonomy = MasterTaxonomy::default();
        // tags = work_conditions + recruitment_info
        assert!(taxonomy.tags.iter().any(|l| l == "駅チカ・駅ナカ"));
        assert!(taxonomy.tags.iter().any(|l| l == "急募"));
        // benefits come from the compensation category
        assert!(taxonomy.benefits.iter().any(|l| l == "社会保険完備"));
        assert!(taxonomy.holidays.iter().any(|l| l == "完全週休2日制"));
        assert!(taxonomy.requirements.iter().any(|l| l == "未経験OK"));
    }

    #[test]
    fn test_from_toml() {
        let parsed: MasterTaxonomy =
            toml::from_str(r#"tags = ["急募"]"#).unwrap();
        assert_eq!(parsed.tags, vec!["急募"]);
        assert!(parsed.benefits.is_empty());
    }

    #[test]
    fn test_list_for_field() {
        let taxonomy = MasterTaxonomy::default();
        assert!(taxonomy.list_for_field("holidays").is_some());
        assert!(taxonomy.list_for_field("title").is_none());
    }
}
