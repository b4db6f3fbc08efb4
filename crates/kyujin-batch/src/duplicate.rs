//! Advisory duplicate detection for candidate postings
//!
//! Compares a candidate's salient fields against the live posting set
//! and reports a similarity verdict. The verdict flags, it never blocks:
//! publication remains the operator's call.

use kyujin_domain::{ExtractedJobData, Job};
use std::collections::HashSet;

/// One live posting scored as a likely duplicate
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateMatch {
    /// Job code of the matched live posting
    pub job_code: String,

    /// Title of the matched live posting
    pub title: String,

    /// Similarity score in [0, 1]
    pub score: f64,
}

/// The advisory verdict for one candidate
#[derive(Debug, Clone, Default)]
pub struct DuplicateVerdict {
    /// Live postings at or above the threshold, best match first
    pub matches: Vec<DuplicateMatch>,
}

impl DuplicateVerdict {
    /// True when at least one live posting crossed the threshold
    pub fn is_suspected(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Scores candidates against live postings
#[derive(Debug, Clone)]
pub struct DuplicateDetector {
    threshold: f64,
}

impl DuplicateDetector {
    /// Create a detector with the given flagging threshold
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Score a candidate against every live posting.
    ///
    /// The score blends title and description character-bigram overlap
    /// with exact agreement on area and salary text. Weights favor the
    /// title: near-identical titles in the same area are the dominant
    /// duplicate pattern in practice.
    pub fn check(&self, candidate: &ExtractedJobData, live_jobs: &[Job]) -> DuplicateVerdict {
        let mut matches: Vec<DuplicateMatch> = live_jobs
            .iter()
            .filter_map(|job| {
                let score = similarity(candidate, &job.routed.data);
                (score >= self.threshold).then(|| DuplicateMatch {
                    job_code: job.job_code.clone(),
                    title: job.title().to_string(),
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        DuplicateVerdict { matches }
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(crate::BatchConfig::default().duplicate_threshold)
    }
}

/// Blended field similarity between two payloads
fn similarity(a: &ExtractedJobData, b: &ExtractedJobData) -> f64 {
    let title = dice(a.title.as_deref().unwrap_or(""), b.title.as_deref().unwrap_or(""));
    let description = dice(
        a.description.as_deref().unwrap_or(""),
        b.description.as_deref().unwrap_or(""),
    );
    let area = field_agreement(&a.area, &b.area);
    let salary = field_agreement(&a.salary, &b.salary);

    0.5 * title + 0.2 * area + 0.15 * salary + 0.15 * description
}

/// 1.0 when both fields carry the same trimmed text, else 0.0
fn field_agreement(a: &Option<String>, b: &Option<String>) -> f64 {
    match (a.as_deref().map(str::trim), b.as_deref().map(str::trim)) {
        (Some(x), Some(y)) if !x.is_empty() && x == y => 1.0,
        _ => 0.0,
    }
}

/// Dice coefficient over character bigrams
fn dice(a: &str, b: &str) -> f64 {
    let a_grams = bigrams(a);
    let b_grams = bigrams(b);

    if a_grams.is_empty() || b_grams.is_empty() {
        // Too short for bigrams; fall back to equality
        return if !a.is_empty() && a == b { 1.0 } else { 0.0 };
    }

    let shared = a_grams.intersection(&b_grams).count();
    2.0 * shared as f64 / (a_grams.len() + b_grams.len()) as f64
}

fn bigrams(text: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}
