use crate::normalize::fold_text;

/// Fixed lexicons for deriving requirement sets from unstructured job or CV
/// text. Matching is word-boundary exact after folding; fuzzy tolerance is
/// the matcher's job, not the lexicon's.
pub const HARD_SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "terraform",
    "git",
    "html",
    "css",
    "machine learning",
    "data science",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "microservices",
    "rest api",
    "graphql",
    "grpc",
];

pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "analytical",
    "adaptable",
    "time management",
    "project management",
    "collaboration",
    "mentoring",
    "presentation",
    "negotiation",
    "critical thinking",
    "decision making",
    "conflict resolution",
];

pub const CERTIFICATION_KEYWORDS: &[&str] = &[
    "aws certified",
    "azure certified",
    "google cloud certified",
    "pmp",
    "scrum master",
    "cissp",
    "ceh",
    "comptia",
    "oracle certified",
    "microsoft certified",
    "ccna",
    "ccnp",
    "itil",
    "prince2",
    "six sigma",
];

pub const TIME_ZONE_KEYWORDS: &[&str] = &[
    "ist",
    "pst",
    "est",
    "cst",
    "mst",
    "utc",
    "gmt",
    "cet",
    "jst",
    "india standard time",
    "pacific standard time",
    "eastern standard time",
    "central standard time",
    "mountain standard time",
    "coordinated universal time",
];

pub const CONTRACT_DURATION_KEYWORDS: &[&str] = &[
    "permanent",
    "contract",
    "temporary",
    "full-time",
    "part-time",
    "freelance",
    "3 months",
    "6 months",
    "12 months",
    "1 year",
    "2 years",
    "long term",
    "short term",
];

/// Scan `text` for known phrases, matching on folded word boundaries.
///
/// Returned keywords keep their lexicon spelling and lexicon order.
pub fn extract_keywords(text: &str, lexicon: &[&str]) -> Vec<String> {
    let folded = fold_text(text);
    if folded.is_empty() {
        return Vec::new();
    }
    let padded = format!(" {folded} ");

    lexicon
        .iter()
        .filter(|keyword| padded.contains(&format!(" {} ", fold_text(keyword))))
        .map(|keyword| (*keyword).to_string())
        .collect()
}
