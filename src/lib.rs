pub mod duration;
pub mod error;
pub mod fuzzy;
pub mod keywords;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod timezone;

use serde::{Deserialize, Serialize};

use normalize::parse_term_list;

pub use error::MatchError;
pub use matching::scoring::{Decision, MatchResult, MatchingConfig, MatchingEngine};

// Data models exchanged with the surrounding job/candidate store. The engine
// never reads or writes that store itself; it receives loaded records and
// returns a result the caller persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub required_hard_skills: Vec<String>,
    #[serde(default)]
    pub required_soft_skills: Vec<String>,
    #[serde(default)]
    pub required_certifications: Vec<String>,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub contract_duration: String,
}

impl JobRequirements {
    /// Derive requirement sets from an unstructured job description by
    /// scanning it against the fixed keyword lexicons.
    pub fn from_job_text(jd_text: &str, time_zone: &str, contract_duration: &str) -> Self {
        Self {
            required_hard_skills: keywords::extract_keywords(jd_text, keywords::HARD_SKILL_KEYWORDS),
            required_soft_skills: keywords::extract_keywords(jd_text, keywords::SOFT_SKILL_KEYWORDS),
            required_certifications: keywords::extract_keywords(
                jd_text,
                keywords::CERTIFICATION_KEYWORDS,
            ),
            time_zone: time_zone.trim().to_string(),
            contract_duration: contract_duration.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub declared_hard_skills: Vec<String>,
    #[serde(default)]
    pub declared_soft_skills: Vec<String>,
    /// Structured certifications are rarely supplied by the submission
    /// surface; CV text is scanned for certification evidence either way.
    #[serde(default)]
    pub declared_certifications: Vec<String>,
    /// Plain text previously extracted from the uploaded CV document.
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub time_zone_alignment: String,
    #[serde(default)]
    pub contract_duration_willingness: String,
}

impl CandidateProfile {
    /// Build a profile from the raw submission surface: comma-separated skill
    /// fields plus previously extracted CV text.
    pub fn from_submission(
        hard_skills: &str,
        soft_skills: &str,
        cv_text: &str,
        time_zone_alignment: &str,
        contract_duration_willingness: &str,
    ) -> Self {
        Self {
            declared_hard_skills: parse_term_list(hard_skills),
            declared_soft_skills: parse_term_list(soft_skills),
            declared_certifications: Vec::new(),
            cv_text: cv_text.to_string(),
            time_zone_alignment: time_zone_alignment.trim().to_string(),
            contract_duration_willingness: contract_duration_willingness.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_submission_tokenizes_skill_lists() {
        let profile = CandidateProfile::from_submission(
            "Python, FastAPI, AWS",
            "Communication; Teamwork",
            "worked on cloud systems",
            " IST ",
            " 6 months ",
        );

        assert_eq!(profile.declared_hard_skills, vec!["Python", "FastAPI", "AWS"]);
        assert_eq!(profile.declared_soft_skills, vec!["Communication", "Teamwork"]);
        assert!(profile.declared_certifications.is_empty());
        assert_eq!(profile.time_zone_alignment, "IST");
        assert_eq!(profile.contract_duration_willingness, "6 months");
    }

    #[test]
    fn from_job_text_derives_requirement_sets() {
        let job = JobRequirements::from_job_text(
            "Looking for Python and AWS; strong communication. AWS Certified preferred.",
            "IST",
            "6 months",
        );

        assert_eq!(job.required_hard_skills, vec!["python", "aws"]);
        assert_eq!(job.required_soft_skills, vec!["communication"]);
        assert_eq!(job.required_certifications, vec!["aws certified"]);
        assert_eq!(job.time_zone, "IST");
    }
}
