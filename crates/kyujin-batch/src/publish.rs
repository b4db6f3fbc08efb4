//! Draft publication
//!
//! Converts reviewed drafts into live postings. Each draft is
//! re-validated at publish time: review edits may have invalidated a
//! payload that passed at extraction. Every failure is per-draft, store
//! errors included; nothing aborts the rest of the selection. Each
//! candidate is also scored against the live set, and the resulting
//! duplicate verdict is advisory: flagged drafts still publish.

use crate::duplicate::{DuplicateDetector, DuplicateMatch};
use kyujin_domain::traits::{DraftStore, JobStore};
use kyujin_domain::{has_errors, unroute, DraftId, Job, ValidationLevel};
use kyujin_validator::validate_extracted_job_data;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

/// Advisory duplicate notice for one publish candidate
#[derive(Debug, Clone)]
pub struct DuplicateFlag {
    /// Title of the scored draft
    pub draft_title: String,

    /// Live postings at or above the similarity threshold, best first
    pub matches: Vec<DuplicateMatch>,
}

/// Outcome of one publish operation
#[derive(Debug, Default)]
pub struct PublishOutcome {
    /// Number of drafts converted into live postings
    pub published: usize,

    /// Per-draft failure reasons, post-publish cleanup failures included
    pub failures: Vec<String>,

    /// Advisory duplicate notices; flagged drafts still publish
    pub duplicate_flags: Vec<DuplicateFlag>,
}

/// Six-digit job code for a new posting
fn generate_job_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Publish the selected drafts.
///
/// Per draft: score against the live set, re-validate the payload,
/// insert a live posting with a fresh job code, and remove the draft.
/// Any failure, store errors included, is reported in the outcome and
/// never aborts the rest of the selection.
pub fn publish<D, J>(
    draft_ids: &[DraftId],
    draft_store: &mut D,
    job_store: &mut J,
    detector: &DuplicateDetector,
) -> PublishOutcome
where
    D: DraftStore,
    J: JobStore,
    D::Error: std::fmt::Display,
    J::Error: std::fmt::Display,
{
    let mut outcome = PublishOutcome::default();

    for &id in draft_ids {
        let draft = match draft_store.get_draft(id) {
            Ok(Some(draft)) => draft,
            Ok(None) => {
                outcome.failures.push(format!("{id}: 下書きが見つかりません"));
                continue;
            }
            Err(e) => {
                warn!(draft = %id, error = %e, "Draft lookup failed");
                outcome.failures.push(format!("{id}: {e}"));
                continue;
            }
        };

        // Validation and scoring run on the flat shape, so fold the
        // variant back in
        let flat = unroute(&draft.routed);

        match job_store.list_jobs() {
            Ok(live) => {
                let verdict = detector.check(&flat, &live);
                if verdict.is_suspected() {
                    outcome.duplicate_flags.push(DuplicateFlag {
                        draft_title: draft.display_title().to_string(),
                        matches: verdict.matches,
                    });
                }
            }
            Err(e) => warn!(draft = %id, error = %e, "Skipping duplicate check"),
        }

        let diagnostics = validate_extracted_job_data(&flat);
        if has_errors(&diagnostics) {
            let messages: Vec<&str> = diagnostics
                .iter()
                .filter(|r| r.level == ValidationLevel::Error)
                .map(|r| r.message.as_str())
                .collect();
            warn!(draft = %id, "Publish blocked by validation");
            outcome
                .failures
                .push(format!("{}: {}", draft.display_title(), messages.join(" / ")));
            continue;
        }

        let job = Job {
            id: Uuid::now_v7().to_string(),
            job_code: generate_job_code(),
            routed: draft.routed.clone(),
        };

        if let Err(e) = job_store.insert_job(job) {
            outcome.failures.push(format!("{}: {}", draft.display_title(), e));
            continue;
        }
        outcome.published += 1;

        // The posting is live at this point; a failed draft removal is
        // reported as a cleanup failure, not rolled back
        if let Err(e) = draft_store.delete_draft(id) {
            warn!(draft = %id, error = %e, "Draft removal failed after publish");
            outcome.failures.push(format!(
                "{}: 公開後の下書き削除に失敗しました: {e}",
                draft.display_title()
            ));
        }
    }

    info!(
        published = outcome.published,
        failed = outcome.failures.len(),
        duplicates = outcome.duplicate_flags.len(),
        "Publish complete"
    );

    outcome
}
