use strsim::damerau_levenshtein;

use crate::normalize::fold_text;

/// Minimum partial-ratio similarity for a target to count as present.
/// Shares a value with `matching::scoring::SHORTLIST_THRESHOLD` by
/// coincidence only; the two are tuned independently.
pub const FUZZY_ACCEPT_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub target: String,
    pub matched: bool,
    pub confidence: f64,
}

/// Whole-string similarity in [0, 100]: normalized Damerau–Levenshtein over
/// folded inputs. Equal (post-fold) strings score 100; every additional edit
/// lowers the score.
pub fn ratio(a: &str, b: &str) -> f64 {
    folded_ratio(&fold_text(a), &fold_text(b))
}

fn folded_ratio(a: &str, b: &str) -> f64 {
    let len = a.chars().count().max(b.chars().count());
    if len == 0 {
        return 100.0;
    }
    let distance = damerau_levenshtein(a, b).min(len);
    (len - distance) as f64 / len as f64 * 100.0
}

/// Substring-tolerant similarity of `needle` against `haystack` in [0, 100].
///
/// An exact (post-fold) substring scores 100; otherwise the best whole-string
/// ratio over needle-length windows of the haystack wins. Empty needle or
/// haystack scores 0.
pub fn partial_ratio(needle: &str, haystack: &str) -> f64 {
    let needle = fold_text(needle);
    let haystack = fold_text(haystack);
    if needle.is_empty() || haystack.is_empty() {
        return 0.0;
    }
    if haystack.contains(&needle) {
        return 100.0;
    }

    let hay: Vec<char> = haystack.chars().collect();
    let width = needle.chars().count();
    if hay.len() <= width {
        return folded_ratio(&needle, &haystack);
    }

    let mut best = 0.0_f64;
    for start in 0..=hay.len() - width {
        let window: String = hay[start..start + width].iter().collect();
        let similarity = folded_ratio(&needle, &window);
        if similarity > best {
            best = similarity;
        }
    }
    best
}

/// Decide, per target phrase, whether it is present in `haystack`.
///
/// Targets are independent: evaluation order does not affect any single
/// target's outcome, and identical inputs always reproduce identical results.
/// An empty target list yields an empty result set.
pub fn match_targets(targets: &[String], haystack: &str, threshold: f64) -> Vec<FuzzyMatch> {
    targets
        .iter()
        .map(|target| {
            let confidence = partial_ratio(target, haystack);
            FuzzyMatch {
                target: target.clone(),
                matched: confidence >= threshold,
                confidence,
            }
        })
        .collect()
}
