use thiserror::Error;

/// Fatal input errors. Text-quality problems (unreadable durations, unknown
/// time zones, empty fields) never surface here — they degrade into scores
/// and mismatch notes so a structurally valid match always completes.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("job requirements not loaded")]
    MissingJobRequirements,
    #[error("candidate profile not loaded")]
    MissingCandidateProfile,
    #[error("criterion weights must sum to 1.0, got {0:.4}")]
    InvalidWeights(f64),
}
