//! In-memory store implementations
//!
//! Reference implementations of the domain store traits, used by the
//! orchestrator tests and by deployments that keep review state in
//! process memory.

use kyujin_domain::traits::{DraftStore, JobStore};
use kyujin_domain::{DraftId, DraftJob, Job};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the in-memory stores
#[derive(Error, Debug)]
pub enum StoreError {
    /// No draft exists with the given id
    #[error("Draft not found: {0}")]
    DraftNotFound(DraftId),
}

/// Draft store backed by a HashMap, insertion-ordered listing
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    drafts: HashMap<DraftId, DraftJob>,
    order: Vec<DraftId>,
}

impl MemoryDraftStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending drafts
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// True when no drafts are pending
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

impl DraftStore for MemoryDraftStore {
    type Error = StoreError;

    fn save_draft(&mut self, draft: DraftJob) -> Result<DraftId, Self::Error> {
        let id = draft.id;
        if self.drafts.insert(id, draft).is_none() {
            self.order.push(id);
        }
        Ok(id)
    }

    fn get_draft(&self, id: DraftId) -> Result<Option<DraftJob>, Self::Error> {
        Ok(self.drafts.get(&id).cloned())
    }

    fn list_drafts(&self) -> Result<Vec<DraftJob>, Self::Error> {
        Ok(self.order.iter().filter_map(|id| self.drafts.get(id).cloned()).collect())
    }

    fn delete_draft(&mut self, id: DraftId) -> Result<(), Self::Error> {
        if self.drafts.remove(&id).is_none() {
            return Err(StoreError::DraftNotFound(id));
        }
        self.order.retain(|d| *d != id);
        Ok(())
    }
}

/// Live posting store backed by a Vec
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: Vec<Job>,
}

impl MemoryJobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live postings
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when no postings are live
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl JobStore for MemoryJobStore {
    type Error = StoreError;

    fn insert_job(&mut self, job: Job) -> Result<(), Self::Error> {
        self.jobs.push(job);
        Ok(())
    }

    fn list_jobs(&self) -> Result<Vec<Job>, Self::Error> {
        Ok(self.jobs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyujin_domain::{route, ExtractedJobData, ExtractionStatus, TagMappingSets};

    fn draft(title: &str) -> DraftJob {
        DraftJob {
            id: DraftId::new(),
            source_name: format!("{title}.pdf"),
            routed: route(ExtractedJobData {
                title: Some(title.to_string()),
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
    fn test_draft_store_round_trip() {
        let mut store = MemoryDraftStore::new();
        let id = store.save_draft(draft("事務スタッフ")).unwrap();

        let loaded = store.get_draft(id).unwrap().unwrap();
        assert_eq!(loaded.display_title(), "事務スタッフ");

        store.delete_draft(id).unwrap();
        assert!(store.get_draft(id).unwrap().is_none());
        assert!(matches!(store.delete_draft(id), Err(StoreError::DraftNotFound(_))));
    }

    #[test]
    fn test_draft_listing_preserves_insertion_order() {
        let mut store = MemoryDraftStore::new();
        store.save_draft(draft("一件目")).unwrap();
        store.save_draft(draft("二件目")).unwrap();
        store.save_draft(draft("三件目")).unwrap();

        let titles: Vec<String> = store
            .list_drafts()
            .unwrap()
            .iter()
            .map(|d| d.display_title().to_string())
            .collect();
        assert_eq!(titles, vec!["一件目", "二件目", "三件目"]);
    }

    #[test]
    fn test_job_store_insert_and_list() {
        let mut store = MemoryJobStore::new();
        assert!(store.is_empty());

        store
            .insert_job(Job {
                id: "job-1".to_string(),
                job_code: "123456".to_string(),
                routed: route(ExtractedJobData::default()),
            })
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list_jobs().unwrap()[0].job_code, "123456");
    }
}
