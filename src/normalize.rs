use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static RE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9+#]+").unwrap());

/// Fold text for comparison: NFKC, lowercase, punctuation runs collapsed to a
/// single space, leading/trailing whitespace stripped.
///
/// `+` and `#` survive folding so "c++" and "c#" remain distinct tokens.
pub fn fold_text(input: &str) -> String {
    let lowered = input.nfkc().collect::<String>().to_lowercase();
    RE_NON_WORD.replace_all(&lowered, " ").trim().to_string()
}

/// Split a free-text term list ("Python, FastAPI; AWS") into trimmed tokens.
///
/// Original casing is preserved; folding happens at comparison time.
pub fn parse_term_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| matches!(c, ',' | ';' | '|' | '/' | '\n'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_collapses_case_punctuation_and_whitespace() {
        assert_eq!(fold_text("Node.js"), "node js");
        assert_eq!(fold_text("  REST   API\t(v2) "), "rest api v2");
        assert_eq!(fold_text("Ｐｙｔｈｏｎ"), "python");
    }

    #[test]
    fn fold_keeps_plus_and_hash() {
        assert_eq!(fold_text("C++"), "c++");
        assert_eq!(fold_text("C#"), "c#");
    }

    #[test]
    fn fold_of_only_punctuation_is_empty() {
        assert_eq!(fold_text("--- !!!"), "");
        assert_eq!(fold_text(""), "");
    }

    #[test]
    fn parse_term_list_splits_on_common_separators() {
        assert_eq!(
            parse_term_list("Python, FastAPI; AWS / Docker"),
            vec!["Python", "FastAPI", "AWS", "Docker"]
        );
    }

    #[test]
    fn parse_term_list_drops_blank_entries() {
        assert_eq!(parse_term_list(" , ,Python,,"), vec!["Python"]);
        assert!(parse_term_list("").is_empty());
    }
}
