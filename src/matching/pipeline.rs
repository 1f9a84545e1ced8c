use std::cmp::Ordering;

use tracing::info;

use super::scoring::{Decision, MatchResult, MatchingEngine};
use crate::error::MatchError;
use crate::{CandidateProfile, JobRequirements};

/// A match result tied back to the caller's candidate slice.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// Position of the candidate in the caller's input slice.
    pub index: usize,
    pub result: MatchResult,
}

/// Match a job/candidate pair as loaded from storage.
///
/// Absent records are the only fatal condition; every text-quality problem
/// degrades into the result itself.
pub fn match_loaded(
    engine: &MatchingEngine,
    job: Option<&JobRequirements>,
    candidate: Option<&CandidateProfile>,
) -> Result<MatchResult, MatchError> {
    let job = job.ok_or(MatchError::MissingJobRequirements)?;
    let candidate = candidate.ok_or(MatchError::MissingCandidateProfile)?;
    Ok(engine.match_candidate(job, candidate))
}

/// Match every candidate of a job.
///
/// Results come back in input order so the caller can associate each one with
/// its candidate record. Candidates are independent; re-running with
/// unchanged inputs reproduces identical results.
pub fn match_all(
    engine: &MatchingEngine,
    job: &JobRequirements,
    candidates: &[CandidateProfile],
) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = candidates
        .iter()
        .map(|candidate| engine.match_candidate(job, candidate))
        .collect();

    let shortlisted = results
        .iter()
        .filter(|r| r.decision == Decision::Shortlisted)
        .count();
    info!(
        total = results.len(),
        shortlisted, "matched candidates for job"
    );

    results
}

/// `match_all` plus ranking: best overall score first, input order preserved
/// among ties.
pub fn rank_candidates(
    engine: &MatchingEngine,
    job: &JobRequirements,
    candidates: &[CandidateProfile],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = match_all(engine, job, candidates)
        .into_iter()
        .enumerate()
        .map(|(index, result)| RankedCandidate { index, result })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .overall_score
            .partial_cmp(&a.result.overall_score)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

/// Ranked candidates filtered down to the shortlist.
pub fn shortlist(
    engine: &MatchingEngine,
    job: &JobRequirements,
    candidates: &[CandidateProfile],
) -> Vec<RankedCandidate> {
    rank_candidates(engine, job, candidates)
        .into_iter()
        .filter(|ranked| ranked.result.decision == Decision::Shortlisted)
        .collect()
}
