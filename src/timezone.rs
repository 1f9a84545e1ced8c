use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::fuzzy::ratio;
use crate::normalize::fold_text;

/// Alias → canonical zone code. Covers the zone labels the submission surface
/// actually produces; unknown labels fall through to graduated similarity.
static TIME_ZONE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        ("ist", &["india standard time"]),
        ("pst", &["pacific standard time", "pacific time"]),
        ("est", &["eastern standard time", "eastern time"]),
        ("cst", &["central standard time"]),
        ("mst", &["mountain standard time"]),
        ("utc", &["coordinated universal time"]),
        ("gmt", &["greenwich mean time"]),
        ("cet", &["central european time"]),
        ("jst", &["japan standard time"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Resolve a zone label to its canonical code, if known.
pub fn canonical_time_zone(label: &str) -> Option<&'static str> {
    TIME_ZONE_ALIASES.get(fold_text(label).as_str()).copied()
}

/// Score time-zone alignment in [0, 100] plus a mismatch note for any
/// sub-100 outcome.
///
/// Full credit requires exact (post-fold) equality or alias equality
/// ("IST" ≡ "India Standard Time"). Anything else gets graduated
/// whole-string similarity when it clears `accept_threshold`, else 0 —
/// substring containment deliberately earns nothing, so "UTC" vs "UTC+2"
/// cannot sneak to full credit. An empty requirement is vacuously satisfied.
pub fn score_time_zone(required: &str, offered: &str, accept_threshold: f64) -> (f64, Option<String>) {
    let req = fold_text(required);
    if req.is_empty() {
        return (100.0, None);
    }

    let off = fold_text(offered);
    if off.is_empty() {
        return (
            0.0,
            Some(format!(
                "time zone mismatch: requires {}, candidate offers none",
                required.trim()
            )),
        );
    }

    if req == off {
        return (100.0, None);
    }
    if let (Some(a), Some(b)) = (canonical_time_zone(required), canonical_time_zone(offered)) {
        if a == b {
            return (100.0, None);
        }
    }

    let note = Some(format!(
        "time zone mismatch: requires {}, candidate offers {}",
        required.trim(),
        offered.trim()
    ));
    let similarity = ratio(&req, &off);
    if similarity >= accept_threshold {
        (similarity, note)
    } else {
        (0.0, note)
    }
}
