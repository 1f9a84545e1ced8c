use serde::{Deserialize, Serialize};

use super::criteria::{score_requirement_set, CriterionOutcome};
use super::weights::{Weights, DEFAULT_WEIGHTS};
use crate::error::MatchError;
use crate::fuzzy::FUZZY_ACCEPT_THRESHOLD;
use crate::{duration, timezone, CandidateProfile, JobRequirements};

/// Overall-score cutoff for shortlisting. Named separately from
/// `fuzzy::FUZZY_ACCEPT_THRESHOLD` even though both happen to be 80; the two
/// are tuned independently.
pub const SHORTLIST_THRESHOLD: f64 = 80.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub weights: Weights,
    pub fuzzy_accept_threshold: f64,
    pub shortlist_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            fuzzy_accept_threshold: env_fuzzy_threshold(),
            shortlist_threshold: SHORTLIST_THRESHOLD,
        }
    }
}

fn env_fuzzy_threshold() -> f64 {
    std::env::var("CVM_FUZZY_ACCEPT_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(FUZZY_ACCEPT_THRESHOLD)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Shortlisted,
    Rejected,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Shortlisted => write!(f, "Shortlisted"),
            Decision::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Per-criterion scores, each independently computed in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub hard_skills: f64,
    pub soft_skills: f64,
    pub certifications: f64,
    pub time_zone: f64,
    pub contract_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub criterion_scores: CriterionScores,
    pub decision: Decision,
    /// One entry per unmet requirement, plus a descriptive entry for
    /// time-zone and duration mismatches. Empty only for a perfect match.
    pub mismatch_summary: Vec<String>,
}

#[derive(Debug)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self {
            config: MatchingConfig::default(),
        }
    }
}

impl MatchingEngine {
    /// Build an engine, rejecting weight sets that do not sum to 1.0.
    pub fn new(config: MatchingConfig) -> Result<Self, MatchError> {
        let sum = config.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights(sum));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score one candidate against one job.
    ///
    /// Pure single pass: five independent evaluators, weighted aggregate,
    /// threshold decision, ordered mismatch summary. No clock, randomness,
    /// or I/O — identical inputs always reproduce the identical result.
    pub fn match_candidate(
        &self,
        job: &JobRequirements,
        candidate: &CandidateProfile,
    ) -> MatchResult {
        let threshold = self.config.fuzzy_accept_threshold;

        let hard = score_requirement_set(
            &job.required_hard_skills,
            &candidate.declared_hard_skills,
            &candidate.cv_text,
            threshold,
        );
        let soft = score_requirement_set(
            &job.required_soft_skills,
            &candidate.declared_soft_skills,
            &candidate.cv_text,
            threshold,
        );
        let certifications = score_requirement_set(
            &job.required_certifications,
            &candidate.declared_certifications,
            &candidate.cv_text,
            threshold,
        );
        let (time_zone, time_zone_note) =
            timezone::score_time_zone(&job.time_zone, &candidate.time_zone_alignment, threshold);
        let (contract_duration, contract_note) = duration::score_contract_duration(
            &job.contract_duration,
            &candidate.contract_duration_willingness,
        );

        let weights = self.config.weights;
        let overall_score = hard.score * weights.hard_skills
            + soft.score * weights.soft_skills
            + certifications.score * weights.certifications
            + time_zone * weights.time_zone
            + contract_duration * weights.contract_duration;

        let decision = if overall_score >= self.config.shortlist_threshold {
            Decision::Shortlisted
        } else {
            Decision::Rejected
        };

        let mut mismatch_summary = Vec::new();
        push_unmet(&mut mismatch_summary, "missing hard skill", &hard);
        push_unmet(&mut mismatch_summary, "missing soft skill", &soft);
        push_unmet(&mut mismatch_summary, "missing certification", &certifications);
        mismatch_summary.extend(time_zone_note);
        mismatch_summary.extend(contract_note);

        MatchResult {
            overall_score,
            criterion_scores: CriterionScores {
                hard_skills: hard.score,
                soft_skills: soft.score,
                certifications: certifications.score,
                time_zone,
                contract_duration,
            },
            decision,
            mismatch_summary,
        }
    }
}

fn push_unmet(summary: &mut Vec<String>, label: &str, outcome: &CriterionOutcome) {
    for item in &outcome.unmet {
        summary.push(format!("{label}: {item}"));
    }
}
