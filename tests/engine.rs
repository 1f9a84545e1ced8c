use cv_match::matching::pipeline;
use cv_match::{CandidateProfile, Decision, JobRequirements, MatchingEngine};

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn base_job() -> JobRequirements {
    JobRequirements {
        required_hard_skills: skills(&["Python", "AWS"]),
        required_soft_skills: skills(&["Communication"]),
        required_certifications: Vec::new(),
        time_zone: "IST".into(),
        contract_duration: "6 months".into(),
    }
}

fn base_candidate() -> CandidateProfile {
    CandidateProfile::from_submission(
        "Python, FastAPI, AWS, Docker",
        "Communication, Leadership",
        "Backend engineer. Python services on AWS, strong communication with stakeholders.",
        "IST",
        "12 months",
    )
}

#[test]
fn declared_skills_cover_hard_requirements() {
    let engine = MatchingEngine::default();
    let result = engine.match_candidate(&base_job(), &base_candidate());

    assert_eq!(result.criterion_scores.hard_skills, 100.0);
    assert_eq!(result.decision, Decision::Shortlisted);
}

#[test]
fn missing_hard_skill_lowers_score_and_is_reported() {
    let engine = MatchingEngine::default();
    let mut job = base_job();
    job.required_hard_skills = skills(&["Python", "AWS", "Kubernetes"]);

    let result = engine.match_candidate(&job, &base_candidate());
    assert!((result.criterion_scores.hard_skills - 200.0 / 3.0).abs() < 1e-9);
    assert!(result
        .mismatch_summary
        .contains(&"missing hard skill: Kubernetes".to_string()));
}

#[test]
fn cv_text_evidence_counts_even_with_typos() {
    let engine = MatchingEngine::default();
    let mut job = base_job();
    job.required_hard_skills = skills(&["Python", "Kubernetes"]);

    let mut candidate = base_candidate();
    candidate.cv_text.push_str(" Managed Kubernets deployments.");

    let result = engine.match_candidate(&job, &candidate);
    assert_eq!(result.criterion_scores.hard_skills, 100.0);
}

#[test]
fn perfect_alignment_yields_full_score_and_empty_summary() {
    let engine = MatchingEngine::default();
    let result = engine.match_candidate(&base_job(), &base_candidate());

    assert!((result.overall_score - 100.0).abs() < 1e-9);
    assert_eq!(result.decision, Decision::Shortlisted);
    assert!(result.mismatch_summary.is_empty());
}

#[test]
fn weighted_aggregate_rejects_below_threshold() {
    let engine = MatchingEngine::default();
    let job = JobRequirements {
        required_hard_skills: skills(&["Python", "Kubernetes"]),
        required_soft_skills: skills(&["Communication", "Mentoring"]),
        required_certifications: skills(&["AWS Certified", "PMP"]),
        time_zone: "IST".into(),
        contract_duration: "6 months".into(),
    };
    let candidate = CandidateProfile {
        declared_hard_skills: skills(&["Python"]),
        declared_soft_skills: skills(&["Communication"]),
        declared_certifications: skills(&["AWS Certified"]),
        cv_text: String::new(),
        time_zone_alignment: "IST".into(),
        contract_duration_willingness: "6 months".into(),
    };

    let result = engine.match_candidate(&job, &candidate);
    // 0.4*50 + 0.2*50 + 0.2*50 + 0.1*100 + 0.1*100
    assert!((result.overall_score - 70.0).abs() < 1e-9);
    assert_eq!(result.decision, Decision::Rejected);
    assert!(!result.mismatch_summary.is_empty());
}

#[test]
fn time_zone_mismatch_caps_the_score_at_ninety() {
    let engine = MatchingEngine::default();
    let mut candidate = base_candidate();
    candidate.time_zone_alignment = "PST".into();

    let result = engine.match_candidate(&base_job(), &candidate);
    assert_eq!(result.criterion_scores.time_zone, 0.0);
    assert!((result.overall_score - 90.0).abs() < 1e-9);
    assert!(result
        .mismatch_summary
        .contains(&"time zone mismatch: requires IST, candidate offers PST".to_string()));
}

#[test]
fn exactly_eighty_overall_is_shortlisted() {
    let engine = MatchingEngine::default();
    let mut job = base_job();
    job.required_hard_skills = skills(&["Python", "Kubernetes"]);

    let mut candidate = base_candidate();
    candidate.declared_hard_skills = skills(&["Python"]);
    candidate.cv_text = String::new();

    let result = engine.match_candidate(&job, &candidate);
    assert!((result.overall_score - 80.0).abs() < 1e-9);
    assert_eq!(result.decision, Decision::Shortlisted);
    assert!(!result.mismatch_summary.is_empty());
}

#[test]
fn rematching_reproduces_identical_results() {
    let engine = MatchingEngine::default();
    let job = base_job();
    let candidates = vec![base_candidate(), CandidateProfile::default()];

    let first = pipeline::match_all(&engine, &job, &candidates);
    let second = pipeline::match_all(&engine, &job, &candidates);
    assert_eq!(first, second);
}

#[test]
fn shortlist_ranks_and_filters() {
    let engine = MatchingEngine::default();
    let job = base_job();
    let candidates = vec![CandidateProfile::default(), base_candidate()];

    let listed = pipeline::shortlist(&engine, &job, &candidates);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].index, 1);
}

#[test]
fn match_result_round_trips_through_json() {
    let engine = MatchingEngine::default();
    let result = engine.match_candidate(&base_job(), &base_candidate());

    let encoded = serde_json::to_string(&result).expect("serialize");
    assert!(encoded.contains("\"Shortlisted\""));

    let decoded: cv_match::MatchResult = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, result);
}
