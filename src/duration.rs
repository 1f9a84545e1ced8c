use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::normalize::fold_text;

/// A contract duration reduced to a comparable magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSpec {
    /// Fixed term, in months.
    Months(u32),
    /// "permanent", "long term" and friends: no fixed end.
    OpenEnded,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration text is empty")]
    Empty,
    #[error("no recognizable duration in {0:?}")]
    Unrecognized(String),
}

/// "short term" with no number attached.
const SHORT_TERM_MONTHS: u32 = 3;

/// Yardsticks for grading a fixed-term offer against an open-ended requirement.
const OPEN_ENDED_STRONG_MONTHS: u32 = 24;
const OPEN_ENDED_MINIMUM_MONTHS: u32 = 12;

static YEARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*(?:years?|yrs?)\b").unwrap());
static MONTHS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*(?:months?|mos?)\b").unwrap());
static WEEKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*(?:weeks?|wks?)\b").unwrap());
static OPEN_ENDED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:permanent|open ?ended|long ?term|indefinite|unlimited|ongoing)\b").unwrap()
});
static SHORT_TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bshort ?term\b").unwrap());

/// Parse free-text duration wording into a tagged magnitude.
///
/// Year/month/week terms are summed ("1 year 6 months" ⇒ 18 months; weeks
/// round up to whole months). Unreadable text is an `Err` the caller branches
/// on, never a panic.
pub fn parse_duration(text: &str) -> Result<DurationSpec, DurationParseError> {
    let folded = fold_text(text);
    if folded.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let mut months: u32 = 0;
    for caps in YEARS_RE.captures_iter(&folded) {
        months += caps[1].parse::<u32>().unwrap_or(0) * 12;
    }
    for caps in MONTHS_RE.captures_iter(&folded) {
        months += caps[1].parse::<u32>().unwrap_or(0);
    }
    for caps in WEEKS_RE.captures_iter(&folded) {
        months += caps[1].parse::<u32>().unwrap_or(0).div_ceil(4);
    }
    if months > 0 {
        return Ok(DurationSpec::Months(months));
    }

    if OPEN_ENDED_RE.is_match(&folded) {
        return Ok(DurationSpec::OpenEnded);
    }
    if SHORT_TERM_RE.is_match(&folded) {
        return Ok(DurationSpec::Months(SHORT_TERM_MONTHS));
    }

    Err(DurationParseError::Unrecognized(text.trim().to_string()))
}

/// Score contract-duration compatibility in [0, 100] plus a mismatch note for
/// any sub-100 outcome.
///
/// Full credit when the candidate's willingness covers the required term
/// (open-ended willingness covers everything); tiered partial credit when
/// close but short; 0 when far short or when either side is unreadable —
/// unreadable text is a full mismatch, not an error.
pub fn score_contract_duration(required: &str, offered: &str) -> (f64, Option<String>) {
    if required.trim().is_empty() {
        return (100.0, None);
    }

    let offered_label = match offered.trim() {
        "" => "none",
        trimmed => trimmed,
    };
    let note = format!(
        "contract duration mismatch: requires {}, candidate offers {}",
        required.trim(),
        offered_label
    );

    let required_spec = match parse_duration(required) {
        Ok(spec) => spec,
        Err(err) => {
            debug!(error = %err, "required contract duration unreadable");
            return (0.0, Some(note));
        }
    };
    let offered_spec = match parse_duration(offered) {
        Ok(spec) => spec,
        Err(err) => {
            debug!(error = %err, "offered contract duration unreadable");
            return (0.0, Some(note));
        }
    };

    let score = match (required_spec, offered_spec) {
        (_, DurationSpec::OpenEnded) => 100.0,
        (DurationSpec::OpenEnded, DurationSpec::Months(m)) => {
            if m >= OPEN_ENDED_STRONG_MONTHS {
                70.0
            } else if m >= OPEN_ENDED_MINIMUM_MONTHS {
                40.0
            } else {
                0.0
            }
        }
        (DurationSpec::Months(need), DurationSpec::Months(have)) => {
            if have >= need {
                100.0
            } else if have * 4 >= need * 3 {
                70.0
            } else if have * 2 >= need {
                40.0
            } else {
                0.0
            }
        }
    };

    if score >= 100.0 {
        (100.0, None)
    } else {
        (score, Some(note))
    }
}
