use std::collections::HashSet;

use crate::fuzzy::partial_ratio;
use crate::normalize::fold_text;

/// One criterion's score plus the requirements it failed to find.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionOutcome {
    pub score: f64,
    pub unmet: Vec<String>,
}

impl CriterionOutcome {
    /// Empty requirement set: nothing to check, full credit.
    pub fn vacuous() -> Self {
        Self {
            score: 100.0,
            unmet: Vec::new(),
        }
    }
}

/// Evaluate one requirement set against the candidate's declared tokens plus
/// CV text.
///
/// A requirement is met when it appears verbatim (after folding) among the
/// declared tokens, or when the fuzzy matcher finds it in the combined
/// declared+CV haystack at or above `accept_threshold`. Score is the met
/// fraction × 100. Duplicate and blank requirements are dropped before
/// counting; unmet items keep their original spelling and input order.
pub fn score_requirement_set(
    required: &[String],
    declared: &[String],
    cv_text: &str,
    accept_threshold: f64,
) -> CriterionOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut requirements: Vec<&String> = Vec::new();
    for item in required {
        let folded = fold_text(item);
        if folded.is_empty() || !seen.insert(folded) {
            continue;
        }
        requirements.push(item);
    }
    if requirements.is_empty() {
        return CriterionOutcome::vacuous();
    }

    let declared_set: HashSet<String> = declared
        .iter()
        .map(|token| fold_text(token))
        .filter(|token| !token.is_empty())
        .collect();
    let haystack = build_haystack(declared, cv_text);

    let total = requirements.len();
    let mut matched = 0usize;
    let mut unmet = Vec::new();
    for item in requirements {
        let met = declared_set.contains(&fold_text(item))
            || partial_ratio(item, &haystack) >= accept_threshold;
        if met {
            matched += 1;
        } else {
            unmet.push(item.trim().to_string());
        }
    }

    CriterionOutcome {
        score: matched as f64 / total as f64 * 100.0,
        unmet,
    }
}

fn build_haystack(declared: &[String], cv_text: &str) -> String {
    let mut haystack = declared.join(" ");
    if !cv_text.is_empty() {
        if !haystack.is_empty() {
            haystack.push(' ');
        }
        haystack.push_str(cv_text);
    }
    haystack
}
