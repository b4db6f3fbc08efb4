//! Draft postings awaiting operator review

use crate::job::RoutedJob;
use crate::tags::TagMappingResult;
use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique draft identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(Uuid);

impl DraftId {
    /// Generate a fresh, time-ordered id
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Overall outcome of extracting one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    /// Clean extraction
    Success,

    /// Extraction completed but key fields are missing or low-confidence
    Warning,

    /// Extraction failed; the draft is a placeholder for the failed file
    Error,
}

/// Tag reconciliation results, one list per taggable payload field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagMappingSets {
    /// Mappings for the `tags` field
    pub tags: Vec<TagMappingResult>,
    /// Mappings for the `benefits` field
    pub benefits: Vec<TagMappingResult>,
    /// Mappings for the `holidays` field
    pub holidays: Vec<TagMappingResult>,
    /// Mappings for the `requirements` field
    pub requirements: Vec<TagMappingResult>,
}

/// An extracted posting that has not been published yet.
///
/// Drafts carry everything an operator needs to review a posting in one
/// record: the routed payload, tag reconciliation, validation diagnostics,
/// and the extraction confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftJob {
    /// Stable identifier
    pub id: DraftId,

    /// Name of the source document
    pub source_name: String,

    /// The routed extraction payload
    pub routed: RoutedJob,

    /// Tag reconciliation against the taxonomy snapshot of the batch
    pub tag_mappings: TagMappingSets,

    /// Validation diagnostics at extraction time
    pub validation: Vec<ValidationResult>,

    /// Overall extraction outcome
    pub extraction_status: ExtractionStatus,

    /// Human-readable extraction warnings, Japanese
    pub extraction_warnings: Vec<String>,

    /// Heuristic extraction confidence, 0..=100
    pub ai_confidence: u8,

    /// Creation timestamp, RFC 3339
    pub created_at: String,
}

impl DraftJob {
    /// Posting title, falling back to the source document name
    pub fn display_title(&self) -> &str {
        self.routed
            .data
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.source_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employment::route;
    use crate::job::ExtractedJobData;

    fn draft_with_title(title: Option<&str>) -> DraftJob {
        DraftJob {
            id: DraftId::new(),
            source_name: "求人票.pdf".to_string(),
            routed: route(ExtractedJobData {
                title: title.map(String::from),
                ..Default::default()
            }),
            tag_mappings: TagMappingSets::default(),
            validation: Vec::new(),
            extraction_status: ExtractionStatus::Success,
            extraction_warnings: Vec::new(),
            ai_confidence: 100,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(draft_with_title(Some("事務スタッフ")).display_title(), "事務スタッフ");
        assert_eq!(draft_with_title(Some("  ")).display_title(), "求人票.pdf");
        assert_eq!(draft_with_title(None).display_title(), "求人票.pdf");
    }

    #[test]
    fn test_draft_ids_are_unique() {
        assert_ne!(DraftId::new(), DraftId::new());
    }

    #[test]
    fn test_draft_id_serde_round_trip() {
        let id = DraftId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: DraftId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
